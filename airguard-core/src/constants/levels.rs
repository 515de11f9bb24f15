//! Simulated CO₂ Levels
//!
//! Outdoor air sits around 400 ppm. Indoors, 700 ppm is where ventilation
//! starts to look inadequate and 1000 ppm is the usual complaint threshold.

// ===== FIXED-LEVEL POLICY =====

/// Level reported for a normal room (ppm).
pub const CO2_NORMAL_PPM: u32 = 400;

/// Level reported for a room in warning (ppm).
pub const CO2_WARNING_PPM: u32 = 700;

/// Level reported for a critical room (ppm).
pub const CO2_CRITICAL_PPM: u32 = 1000;

// ===== OCCUPANCY-SCALED POLICY =====

/// Baseline before any occupant is counted (ppm).
pub const CO2_BASELINE_PPM: u32 = 400;

/// Contribution of each occupant (ppm).
pub const CO2_PER_PERSON_PPM: u32 = 100;

/// Added when health readings are elevated (ppm).
pub const CO2_ELEVATED_HEALTH_PPM: u32 = 300;

/// Added when health readings are critical (ppm).
pub const CO2_CRITICAL_HEALTH_PPM: u32 = 600;

/// Simulated level never exceeds this (ppm).
pub const CO2_CEILING_PPM: u32 = 1200;

/// Level above this is a warning (ppm).
pub const CO2_WARNING_ABOVE_PPM: u32 = 600;

/// Level above this is critical (ppm).
pub const CO2_CRITICAL_ABOVE_PPM: u32 = 800;
