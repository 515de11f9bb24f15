//! Monitor errors
//!
//! Only configuration and input problems are errors. A missing alarm sound
//! is not: the monitor logs it and keeps evaluating in silence.

use std::io;
use std::path::PathBuf;

use airguard_core::ValidationError;
use thiserror::Error;

/// Result type for monitor operations
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Monitor errors
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Config file could not be read
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        /// Path that was tried
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Config contents are not valid JSON for [`crate::MonitorConfig`]
    #[error("Invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Config parsed but holds an unusable value
    #[error("Invalid config value for {field}: {reason}")]
    ConfigValue {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },

    /// Room or health input rejected
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_convert() {
        let err: MonitorError = ValidationError::BelowMinimum { field: "people_count", value: 0, min: 1 }.into();
        assert!(matches!(err, MonitorError::Validation(_)));
        assert_eq!(err.to_string(), "Invalid input: people_count = 0 below minimum 1");
    }

    #[test]
    fn config_read_mentions_path() {
        let err = MonitorError::ConfigRead {
            path: PathBuf::from("/etc/airguard.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/etc/airguard.json"));
    }
}
