//! Health Readings
//!
//! Respiration rate, heart rate and blood oxygen saturation of the room's
//! occupant, as supplied by three sliders. Each reading independently maps
//! to a severity; the reading as a whole takes the worst of the three.
//!
//! ```text
//!                 Normal        Elevated           Critical
//! respiration     10..=18       19..=25            26..=40
//! spo2            95..=100      90..=94            80..=89
//! heart rate      62..=99       100                50..=61, 101..=160
//! ```

use crate::{
    constants::{
        health::{
            HEART_RATE_CRITICAL_ABOVE, HEART_RATE_CRITICAL_BELOW, HEART_RATE_ELEVATED_FROM,
            RESPIRATION_CRITICAL_ABOVE, RESPIRATION_ELEVATED_ABOVE,
            SPO2_CRITICAL_BELOW, SPO2_ELEVATED_BELOW,
        },
        ranges::{
            HEART_RATE_DEFAULT_BPM, HEART_RATE_MAX_BPM, HEART_RATE_MIN_BPM,
            RESPIRATION_RATE_DEFAULT, RESPIRATION_RATE_MAX, RESPIRATION_RATE_MIN,
            SPO2_DEFAULT_PCT, SPO2_MAX_PCT, SPO2_MIN_PCT,
        },
    },
    errors::{check_range, ValidationResult},
};

/// Severity derived from health readings alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HealthSeverity {
    /// All readings in their normal band
    Normal,
    /// At least one reading elevated, none critical
    Elevated,
    /// At least one reading critical
    Critical,
}

/// One snapshot of the occupant's vital signs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthReading {
    /// Breaths per minute
    pub respiration_rate: u32,
    /// Beats per minute
    pub heart_rate: u32,
    /// Blood oxygen saturation (%)
    pub spo2: u32,
}

impl Default for HealthReading {
    fn default() -> Self {
        Self {
            respiration_rate: RESPIRATION_RATE_DEFAULT,
            heart_rate: HEART_RATE_DEFAULT_BPM,
            spo2: SPO2_DEFAULT_PCT,
        }
    }
}

impl HealthReading {
    /// Create a reading, rejecting values outside the slider ranges
    pub fn new(respiration_rate: u32, heart_rate: u32, spo2: u32) -> ValidationResult<Self> {
        Ok(Self {
            respiration_rate: check_range(
                "respiration_rate",
                respiration_rate,
                RESPIRATION_RATE_MIN,
                RESPIRATION_RATE_MAX,
            )?,
            heart_rate: check_range("heart_rate", heart_rate, HEART_RATE_MIN_BPM, HEART_RATE_MAX_BPM)?,
            spo2: check_range("spo2", spo2, SPO2_MIN_PCT, SPO2_MAX_PCT)?,
        })
    }

    /// Create a reading, pulling each value into its slider range
    pub fn clamped(respiration_rate: u32, heart_rate: u32, spo2: u32) -> Self {
        Self {
            respiration_rate: respiration_rate.clamp(RESPIRATION_RATE_MIN, RESPIRATION_RATE_MAX),
            heart_rate: heart_rate.clamp(HEART_RATE_MIN_BPM, HEART_RATE_MAX_BPM),
            spo2: spo2.clamp(SPO2_MIN_PCT, SPO2_MAX_PCT),
        }
    }

    /// Any reading in its critical band
    pub fn is_critical(&self) -> bool {
        self.respiration_rate > RESPIRATION_CRITICAL_ABOVE
            || self.spo2 < SPO2_CRITICAL_BELOW
            || self.heart_rate < HEART_RATE_CRITICAL_BELOW
            || self.heart_rate > HEART_RATE_CRITICAL_ABOVE
    }

    /// Any reading in its elevated band (critical readings also qualify)
    pub fn is_elevated(&self) -> bool {
        self.respiration_rate > RESPIRATION_ELEVATED_ABOVE
            || self.spo2 < SPO2_ELEVATED_BELOW
            || self.heart_rate >= HEART_RATE_ELEVATED_FROM
    }

    /// Worst severity across the three readings
    pub fn severity(&self) -> HealthSeverity {
        if self.is_critical() {
            HealthSeverity::Critical
        } else if self.is_elevated() {
            HealthSeverity::Elevated
        } else {
            HealthSeverity::Normal
        }
    }
}
