//! Core classifier for AirGuard
//!
//! Turns room geometry, occupancy and three health readings into a simulated
//! CO₂ level and a safety status, and decides how the room alarm should react.
//!
//! Key constraints:
//! - Pure, total functions over validated inputs
//! - No heap allocation, runs without `std`
//! - Alarm state is a value the caller threads through, never a global
//!
//! ```
//! use airguard_core::{evaluate, AlarmState, ClassifierConfig, HealthReading, Inputs, RoomGeometry, Status};
//!
//! let room = RoomGeometry::new(20, 20)?;
//! let health = HealthReading::new(16, 75, 98)?;
//! let inputs = Inputs::new(room, 15, health)?;
//!
//! let evaluation = evaluate(&inputs, &ClassifierConfig::default(), AlarmState::idle());
//! assert_eq!(evaluation.max_people, 15);
//! assert_eq!(evaluation.assessment.co2_ppm, 700);
//! assert_eq!(evaluation.assessment.status, Status::Warning);
//! # Ok::<(), airguard_core::ValidationError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

pub mod alarm;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod errors;
pub mod evaluation;
pub mod health;
pub mod occupancy;
pub mod room;
pub mod traits;

// Public API
pub use alarm::{AlarmMode, AlarmState, AlarmTransition};
pub use classifier::{Assessment, FixedLevelClassifier, LevelPolicy, OccupancyScaledClassifier, Status};
pub use config::ClassifierConfig;
pub use errors::{ValidationError, ValidationResult};
pub use evaluation::{evaluate, Evaluation, Inputs};
pub use health::{HealthReading, HealthSeverity};
pub use occupancy::OccupancyState;
pub use room::{OccupancyPolicy, RoomGeometry};
pub use traits::{CapacityPolicy, Classifier};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
