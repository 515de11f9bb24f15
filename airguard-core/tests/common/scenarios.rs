//! Pre-built room scenarios with expected outcomes
//!
//! Each scenario is a form submission someone might actually make, with the
//! result both level policies should produce.

use airguard_core::{AlarmMode, Inputs, OccupancyState, Status};

use super::{health, inputs};

/// Expected outcome under one policy pair
pub struct Expected {
    pub max_people: u32,
    pub occupancy: OccupancyState,
    pub co2_ppm: u32,
    pub status: Status,
    pub alarm: AlarmMode,
}

/// One form submission and what it should produce
pub struct Scenario {
    pub name: &'static str,
    pub inputs: Inputs,
    /// Step-function limit, fixed-level classifier
    pub fixed: Expected,
    /// Area-density limit, occupancy-scaled classifier
    pub scaled: Expected,
}

/// Scenarios covering each status under both policy pairs
pub fn all() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "quiet office",
            inputs: inputs(10, 10, 1, health(16, 75, 98)),
            fixed: Expected {
                max_people: 4,
                occupancy: OccupancyState::WithinLimit,
                co2_ppm: 400,
                status: Status::Normal,
                alarm: AlarmMode::Silent,
            },
            scaled: Expected {
                max_people: 4,
                occupancy: OccupancyState::WithinLimit,
                co2_ppm: 500,
                status: Status::Normal,
                alarm: AlarmMode::Silent,
            },
        },
        Scenario {
            name: "meeting room at its limit",
            inputs: inputs(20, 20, 15, health(16, 75, 98)),
            fixed: Expected {
                max_people: 15,
                occupancy: OccupancyState::AtCapacity,
                co2_ppm: 700,
                status: Status::Warning,
                alarm: AlarmMode::SingleShot,
            },
            scaled: Expected {
                max_people: 16,
                occupancy: OccupancyState::WithinLimit,
                co2_ppm: 1200,
                status: Status::Critical,
                alarm: AlarmMode::Looping,
            },
        },
        Scenario {
            name: "hyperventilating occupant in a large hall",
            inputs: inputs(50, 50, 1, health(30, 75, 98)),
            fixed: Expected {
                max_people: 25,
                occupancy: OccupancyState::WithinLimit,
                co2_ppm: 1000,
                status: Status::Critical,
                alarm: AlarmMode::Looping,
            },
            scaled: Expected {
                max_people: 100,
                occupancy: OccupancyState::WithinLimit,
                co2_ppm: 1100,
                status: Status::Critical,
                alarm: AlarmMode::Looping,
            },
        },
        Scenario {
            name: "slightly low oxygen in a small room",
            inputs: inputs(10, 15, 2, health(16, 75, 93)),
            fixed: Expected {
                max_people: 6,
                occupancy: OccupancyState::WithinLimit,
                co2_ppm: 700,
                status: Status::Warning,
                alarm: AlarmMode::SingleShot,
            },
            scaled: Expected {
                max_people: 6,
                occupancy: OccupancyState::WithinLimit,
                co2_ppm: 900,
                status: Status::Critical,
                alarm: AlarmMode::Looping,
            },
        },
        Scenario {
            name: "overcrowded storeroom",
            inputs: inputs(10, 10, 6, health(16, 75, 98)),
            fixed: Expected {
                max_people: 4,
                occupancy: OccupancyState::Overcrowded,
                co2_ppm: 1000,
                status: Status::Critical,
                alarm: AlarmMode::Looping,
            },
            scaled: Expected {
                max_people: 4,
                occupancy: OccupancyState::Overcrowded,
                co2_ppm: 1000,
                status: Status::Critical,
                alarm: AlarmMode::Looping,
            },
        },
    ]
}
