//! Fixed-level classifier
//!
//! Each status has exactly one CO₂ level, so the level carries no more
//! information than the status itself:
//!
//! | Status   | Level    |
//! |----------|----------|
//! | Normal   | 400 ppm  |
//! | Warning  | 700 ppm  |
//! | Critical | 1000 ppm |

use crate::{
    constants::levels::{CO2_CRITICAL_PPM, CO2_NORMAL_PPM, CO2_WARNING_PPM},
    health::{HealthReading, HealthSeverity},
    occupancy::OccupancyState,
    traits::Classifier,
};

use super::{Assessment, Status};

/// Classifier with discrete 400/700/1000 ppm levels
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLevelClassifier;

impl FixedLevelClassifier {
    fn health_status(severity: HealthSeverity) -> Status {
        match severity {
            HealthSeverity::Normal => Status::Normal,
            HealthSeverity::Elevated => Status::Warning,
            HealthSeverity::Critical => Status::Critical,
        }
    }

    fn level_for(status: Status) -> u32 {
        match status {
            Status::Normal => CO2_NORMAL_PPM,
            Status::Warning => CO2_WARNING_PPM,
            Status::Critical => CO2_CRITICAL_PPM,
        }
    }
}

impl Classifier for FixedLevelClassifier {
    fn classify(&self, health: &HealthReading, people_count: u32, max_people: u32) -> Assessment {
        let status = Self::health_status(health.severity())
            .max(OccupancyState::from_counts(people_count, max_people).status_floor());

        Assessment {
            co2_ppm: Self::level_for(status),
            status,
        }
    }
}
