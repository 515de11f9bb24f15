//! Input Ranges
//!
//! Bounds the input surface guarantees before readings reach the classifier,
//! and the values a fresh form starts with.

// ===== ROOM GEOMETRY =====

/// Smallest accepted room length or width (ft).
pub const ROOM_DIMENSION_MIN_FT: u32 = 10;

/// Largest accepted room length or width (ft).
pub const ROOM_DIMENSION_MAX_FT: u32 = 50;

/// Default room length and width (ft).
pub const ROOM_DIMENSION_DEFAULT_FT: u32 = 10;

// ===== OCCUPANCY =====

/// Minimum number of people in the room.
///
/// The room being evaluated always holds at least the person reading the
/// health sensors. There is no upper bound; overcrowding is a status, not an
/// input error.
pub const PEOPLE_COUNT_MIN: u32 = 1;

// ===== HEALTH READINGS =====

/// Lowest accepted respiration rate (breaths/min).
pub const RESPIRATION_RATE_MIN: u32 = 10;

/// Highest accepted respiration rate (breaths/min).
pub const RESPIRATION_RATE_MAX: u32 = 40;

/// Default respiration rate for an adult at rest (breaths/min).
pub const RESPIRATION_RATE_DEFAULT: u32 = 16;

/// Lowest accepted heart rate (bpm).
pub const HEART_RATE_MIN_BPM: u32 = 50;

/// Highest accepted heart rate (bpm).
pub const HEART_RATE_MAX_BPM: u32 = 160;

/// Default resting heart rate (bpm).
pub const HEART_RATE_DEFAULT_BPM: u32 = 75;

/// Lowest accepted blood oxygen saturation (%).
pub const SPO2_MIN_PCT: u32 = 80;

/// Highest accepted blood oxygen saturation (%).
pub const SPO2_MAX_PCT: u32 = 100;

/// Default blood oxygen saturation (%).
pub const SPO2_DEFAULT_PCT: u32 = 98;
