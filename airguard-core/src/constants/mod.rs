//! Constants for AirGuard Core
//!
//! All numeric thresholds used by the classifier live here, with units in
//! their names, so the decision rules read as comparisons against named
//! limits instead of magic numbers.
//!
//! ## Organization
//!
//! - **Ranges**: accepted input ranges and form defaults
//! - **Health**: respiration, heart rate and SpO₂ thresholds
//! - **Levels**: simulated CO₂ levels in ppm
//! - **Occupancy**: occupancy-limit tables and densities

/// Accepted input ranges and default form values.
pub mod ranges;

/// Health reading thresholds separating normal, elevated and critical.
pub mod health;

/// Simulated CO₂ levels and status cut-offs (ppm).
pub mod levels;

/// Occupancy-limit step table and density rule.
pub mod occupancy;

// Re-export commonly used constants for convenience
pub use ranges::{
    ROOM_DIMENSION_MIN_FT, ROOM_DIMENSION_MAX_FT,
    RESPIRATION_RATE_MIN, RESPIRATION_RATE_MAX,
    HEART_RATE_MIN_BPM, HEART_RATE_MAX_BPM,
    SPO2_MIN_PCT, SPO2_MAX_PCT,
    PEOPLE_COUNT_MIN,
};

pub use levels::{
    CO2_NORMAL_PPM, CO2_WARNING_PPM, CO2_CRITICAL_PPM, CO2_CEILING_PPM,
};
