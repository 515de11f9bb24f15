//! Core traits for the classifier
//!
//! Two seams: how a room area becomes a head-count limit, and how readings
//! plus occupancy become an assessment. Keep them simple - every
//! implementation is a pure function of its arguments.

use crate::classifier::Assessment;
use crate::health::HealthReading;

/// Maps floor area to the maximum recommended number of people
pub trait CapacityPolicy {
    /// Max people for a room of `area_sq_ft` square feet
    fn max_people(&self, area_sq_ft: u32) -> u32;
}

/// Maps health readings and occupancy to a simulated CO₂ level and status
///
/// Implementations must be total and side-effect free: the same arguments
/// always produce the same assessment.
pub trait Classifier {
    /// Assess one snapshot of the room
    fn classify(&self, health: &HealthReading, people_count: u32, max_people: u32) -> Assessment;
}
