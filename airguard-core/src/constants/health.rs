//! Health Reading Thresholds
//!
//! Comparisons are strict unless the name says otherwise. The heart rate
//! band is asymmetric: exactly 100 bpm is elevated, anything above is
//! critical.

// ===== RESPIRATION =====

/// Respiration rate above this is critical (breaths/min).
pub const RESPIRATION_CRITICAL_ABOVE: u32 = 25;

/// Respiration rate above this is elevated (breaths/min).
pub const RESPIRATION_ELEVATED_ABOVE: u32 = 18;

// ===== BLOOD OXYGEN =====

/// SpO₂ below this is critical (%).
pub const SPO2_CRITICAL_BELOW: u32 = 90;

/// SpO₂ below this is elevated (%).
pub const SPO2_ELEVATED_BELOW: u32 = 95;

// ===== HEART RATE =====

/// Heart rate below this is critical (bpm).
pub const HEART_RATE_CRITICAL_BELOW: u32 = 62;

/// Heart rate above this is critical (bpm).
pub const HEART_RATE_CRITICAL_ABOVE: u32 = 100;

/// Heart rate at or above this is elevated (bpm).
pub const HEART_RATE_ELEVATED_FROM: u32 = 100;
