//! Occupancy-scaled classifier
//!
//! The simulated level rises with every occupant and is bumped by the
//! health severity:
//!
//! ```text
//! people   normal   elevated   critical
//!    1       500       800       1100
//!    2       600       900       1200
//!    3       700      1000       1200
//!    5       900      1200       1200
//!    8      1200      1200       1200
//! ```
//!
//! Status is read off the level (>800 critical, >600 warning) and then
//! raised to the occupancy floor.

use crate::{
    constants::levels::{
        CO2_BASELINE_PPM, CO2_CEILING_PPM, CO2_CRITICAL_ABOVE_PPM, CO2_CRITICAL_HEALTH_PPM,
        CO2_ELEVATED_HEALTH_PPM, CO2_PER_PERSON_PPM, CO2_WARNING_ABOVE_PPM,
    },
    health::{HealthReading, HealthSeverity},
    occupancy::OccupancyState,
    traits::Classifier,
};

use super::{Assessment, Status};

/// Classifier whose level scales with head count, 400-1200 ppm
#[derive(Debug, Clone, Copy, Default)]
pub struct OccupancyScaledClassifier;

impl OccupancyScaledClassifier {
    /// Simulated level before status is derived
    pub fn level(health: &HealthReading, people_count: u32) -> u32 {
        let base = CO2_BASELINE_PPM.saturating_add(people_count.saturating_mul(CO2_PER_PERSON_PPM));

        let level = match health.severity() {
            HealthSeverity::Normal => base,
            HealthSeverity::Elevated => base.saturating_add(CO2_ELEVATED_HEALTH_PPM),
            HealthSeverity::Critical => base.saturating_add(CO2_CRITICAL_HEALTH_PPM),
        };

        level.min(CO2_CEILING_PPM)
    }

    fn level_status(level: u32) -> Status {
        if level > CO2_CRITICAL_ABOVE_PPM {
            Status::Critical
        } else if level > CO2_WARNING_ABOVE_PPM {
            Status::Warning
        } else {
            Status::Normal
        }
    }
}

impl Classifier for OccupancyScaledClassifier {
    fn classify(&self, health: &HealthReading, people_count: u32, max_people: u32) -> Assessment {
        let co2_ppm = Self::level(health, people_count);
        let status = Self::level_status(co2_ppm)
            .max(OccupancyState::from_counts(people_count, max_people).status_floor());

        Assessment { co2_ppm, status }
    }
}
