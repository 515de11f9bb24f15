//! Classifier configuration
//!
//! Picks the occupancy-limit policy and the CO₂ level policy. Both default
//! to the step-function / fixed-level pair used by the first room simulator.

use crate::{
    classifier::{Assessment, LevelPolicy},
    health::HealthReading,
    room::{OccupancyPolicy, RoomGeometry},
    traits::{CapacityPolicy, Classifier},
};

/// Policy choices for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassifierConfig {
    /// How floor area becomes a head-count limit
    pub occupancy_policy: OccupancyPolicy,
    /// How readings become a CO₂ level
    pub level_policy: LevelPolicy,
}

impl ClassifierConfig {
    /// Create a config from explicit policy choices
    pub fn new(occupancy_policy: OccupancyPolicy, level_policy: LevelPolicy) -> Self {
        Self { occupancy_policy, level_policy }
    }

    /// Max people for `room` under the configured occupancy policy
    pub fn max_people(&self, room: &RoomGeometry) -> u32 {
        self.occupancy_policy.max_people(room.area_sq_ft())
    }

    /// Classify under the configured level policy
    pub fn classify(&self, health: &HealthReading, people_count: u32, max_people: u32) -> Assessment {
        self.level_policy.classify(health, people_count, max_people)
    }
}
