//! Status Classifier
//!
//! ## Overview
//!
//! Maps health readings plus occupancy to a simulated CO₂ level and a
//! `Normal`/`Warning`/`Critical` status. Two policies are available:
//!
//! ### Fixed-level
//! Three discrete levels, one per status:
//! ```text
//! health critical  OR overcrowded   →  1000 ppm, Critical
//! health elevated  OR at capacity   →   700 ppm, Warning
//! otherwise                         →   400 ppm, Normal
//! ```
//!
//! ### Occupancy-scaled
//! The level grows with head count and is bumped by health severity:
//! ```text
//! level  = 400 + 100 × people  (+300 elevated, +600 critical), capped at 1200
//! status = Critical if level > 800, Warning if level > 600, else Normal
//! ```
//!
//! ## Combining Severities
//!
//! Health and occupancy each produce a severity. The final status is the
//! more severe of the two; they are never averaged. Overcrowding therefore
//! always yields `Critical`, and a room at exactly its limit is never
//! `Normal`.
//!
//! ## Usage Example
//!
//! ```rust
//! use airguard_core::{Classifier, HealthReading, LevelPolicy, Status};
//!
//! let health = HealthReading::new(30, 75, 98)?;
//!
//! let assessment = LevelPolicy::FixedLevel.classify(&health, 1, 25);
//! assert_eq!(assessment.co2_ppm, 1000);
//! assert_eq!(assessment.status, Status::Critical);
//!
//! let assessment = LevelPolicy::OccupancyScaled.classify(&health, 1, 25);
//! assert_eq!(assessment.co2_ppm, 1100);
//! # Ok::<(), airguard_core::ValidationError>(())
//! ```

mod fixed;
mod scaled;

pub use fixed::FixedLevelClassifier;
pub use scaled::OccupancyScaledClassifier;

use core::fmt;

use crate::{health::HealthReading, traits::Classifier};

/// Room safety status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Nothing to report
    Normal,
    /// Monitor closely
    Warning,
    /// Immediate action required
    Critical,
}

impl Status {
    /// Label shown next to the metric
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assessment {
    /// Simulated CO₂ level (ppm)
    pub co2_ppm: u32,
    /// Room safety status
    pub status: Status,
}

/// Which classifier to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LevelPolicy {
    /// Discrete 400/700/1000 ppm levels
    #[default]
    FixedLevel,
    /// Level scaled by head count, 400-1200 ppm
    OccupancyScaled,
}

impl Classifier for LevelPolicy {
    fn classify(&self, health: &HealthReading, people_count: u32, max_people: u32) -> Assessment {
        match self {
            Self::FixedLevel => FixedLevelClassifier.classify(health, people_count, max_people),
            Self::OccupancyScaled => OccupancyScaledClassifier.classify(health, people_count, max_people),
        }
    }
}
