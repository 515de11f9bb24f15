//! Monitor configuration
//!
//! Loaded from JSON. Every field is optional:
//!
//! ```json
//! {
//!   "classifier": {
//!     "occupancy_policy": "step_function",
//!     "level_policy": "fixed_level"
//!   },
//!   "poll_interval_ms": 2000,
//!   "alarm_asset": "alarm.mp3"
//! }
//! ```
//!
//! `occupancy_policy` is `step_function` or `area_density`; `level_policy`
//! is `fixed_level` or `occupancy_scaled`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use airguard_core::ClassifierConfig;
use serde::{Deserialize, Serialize};

use crate::errors::{MonitorError, MonitorResult};

/// Default re-evaluation interval (ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// Default alarm sound, relative to the working directory
pub const DEFAULT_ALARM_ASSET: &str = "alarm.mp3";

/// Everything a monitor session needs besides its inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorConfig {
    /// Occupancy and level policies
    pub classifier: ClassifierConfig,
    /// Time between evaluations when polling (ms)
    pub poll_interval_ms: u64,
    /// Alarm sound file
    pub alarm_asset: PathBuf,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            alarm_asset: PathBuf::from(DEFAULT_ALARM_ASSET),
        }
    }
}

impl MonitorConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> MonitorResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> MonitorResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| MonitorError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json_str(&json)?;
        log::info!(
            "Loaded config from {}: {:?}/{:?}, polling every {} ms",
            path.display(),
            config.classifier.occupancy_policy,
            config.classifier.level_policy,
            config.poll_interval_ms
        );
        Ok(config)
    }

    /// Time between evaluations
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    fn validate(&self) -> MonitorResult<()> {
        if self.poll_interval_ms == 0 {
            return Err(MonitorError::ConfigValue {
                field: "poll_interval_ms",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}
