//! Text rendering of an evaluation
//!
//! Produces the lines a dashboard shows next to the form:
//!
//! ```text
//! Room Area: 400 sq ft
//! Max Recommended Occupancy: 15 people
//! Room has 15 people, limit reached.
//! Simulated CO2 Level: 700 ppm
//! Status: Warning
//! Elevated CO2 level! Monitor closely.
//! ```

use std::fmt;

use airguard_core::{Evaluation, OccupancyState, Status};

/// Banner for the occupancy line
pub fn occupancy_banner(evaluation: &Evaluation) -> String {
    match evaluation.occupancy {
        OccupancyState::Overcrowded => format!(
            "Overcrowded! Room has {} people (limit is {}).",
            evaluation.people_count, evaluation.max_people
        ),
        OccupancyState::AtCapacity => format!("Room has {} people, limit reached.", evaluation.people_count),
        OccupancyState::WithinLimit => "Occupancy is within safe limit.".to_string(),
    }
}

/// Banner for the CO₂ status line
pub fn status_banner(status: Status) -> &'static str {
    match status {
        Status::Critical => "Critical CO2 level! Immediate action required!",
        Status::Warning => "Elevated CO2 level! Monitor closely.",
        Status::Normal => "CO2 level is normal.",
    }
}

/// Full text report, rendered through `Display`
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    evaluation: &'a Evaluation,
}

impl<'a> Report<'a> {
    /// Report on `evaluation`
    pub fn new(evaluation: &'a Evaluation) -> Self {
        Self { evaluation }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let eval = self.evaluation;
        writeln!(f, "Room Area: {} sq ft", eval.area_sq_ft)?;
        writeln!(f, "Max Recommended Occupancy: {} people", eval.max_people)?;
        writeln!(f, "{}", occupancy_banner(eval))?;
        writeln!(f, "Simulated CO2 Level: {} ppm", eval.assessment.co2_ppm)?;
        writeln!(f, "Status: {}", eval.assessment.status)?;
        write!(f, "{}", status_banner(eval.assessment.status))
    }
}
