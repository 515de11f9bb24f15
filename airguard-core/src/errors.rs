//! Error Types for Input Validation
//!
//! The classifier itself is total: once inputs exist, every combination maps
//! to an assessment. Errors only arise at construction time, when a room
//! dimension, head count or health reading falls outside the range the input
//! surface is supposed to guarantee.
//!
//! Errors follow the same rules as the rest of the crate:
//!
//! 1. **Copy Semantics**: cheap to return and compare in tests.
//! 2. **No Heap Allocation**: field names are `&'static str`.
//! 3. **Actionable**: each variant carries the offending value and the
//!    accepted bounds so a caller can clamp or re-prompt.
//!
//! ```rust
//! use airguard_core::{HealthReading, ValidationError};
//!
//! match HealthReading::new(45, 75, 98) {
//!     Err(ValidationError::OutOfRange { field, min, max, .. }) => {
//!         assert_eq!(field, "respiration_rate");
//!         assert_eq!((min, max), (10, 40));
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for input validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Input validation errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Value outside its accepted closed range
    #[error("{field} = {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Name of the rejected input
        field: &'static str,
        /// The rejected value
        value: u32,
        /// Smallest accepted value
        min: u32,
        /// Largest accepted value
        max: u32,
    },

    /// Value below a lower bound that has no matching upper bound
    #[error("{field} = {value} below minimum {min}")]
    BelowMinimum {
        /// Name of the rejected input
        field: &'static str,
        /// The rejected value
        value: u32,
        /// Smallest accepted value
        min: u32,
    },
}

impl ValidationError {
    /// Name of the input that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::OutOfRange { field, .. } | Self::BelowMinimum { field, .. } => field,
        }
    }
}

/// Check that `value` lies in `[min, max]`
pub(crate) fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> ValidationResult<u32> {
    if value < min || value > max {
        Err(ValidationError::OutOfRange { field, value, min, max })
    } else {
        Ok(value)
    }
}
