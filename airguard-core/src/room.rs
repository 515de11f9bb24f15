//! Room Geometry and Occupancy Limits
//!
//! ## Occupancy Policies
//!
//! Two rules for the recommended head count exist and they disagree:
//!
//! ```text
//! area (sq ft)   StepFunction   AreaDensity (area / 25)
//!   100               4               4
//!   150               6               6
//!   300              10              12
//!   400              15              16
//!   500              15              20
//!  2500              25             100
//! ```
//!
//! Neither is canonical, so the policy is an explicit configuration choice
//! rather than a hidden constant.
//!
//! ```rust
//! use airguard_core::{CapacityPolicy, OccupancyPolicy, RoomGeometry};
//!
//! let room = RoomGeometry::new(20, 20)?;
//! assert_eq!(room.area_sq_ft(), 400);
//! assert_eq!(OccupancyPolicy::StepFunction.max_people(room.area_sq_ft()), 15);
//! assert_eq!(OccupancyPolicy::AreaDensity.max_people(room.area_sq_ft()), 16);
//! # Ok::<(), airguard_core::ValidationError>(())
//! ```

use crate::{
    constants::{
        occupancy::{AREA_PER_PERSON_SQ_FT, DENSITY_MIN_PEOPLE, STEP_LARGE_ROOM_MAX_PEOPLE, STEP_TABLE},
        ranges::{ROOM_DIMENSION_DEFAULT_FT, ROOM_DIMENSION_MAX_FT, ROOM_DIMENSION_MIN_FT},
    },
    errors::{check_range, ValidationResult},
    traits::CapacityPolicy,
};

/// Rectangular room measured in feet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomGeometry {
    /// Length (ft)
    pub length_ft: u32,
    /// Width (ft)
    pub width_ft: u32,
}

impl Default for RoomGeometry {
    fn default() -> Self {
        Self {
            length_ft: ROOM_DIMENSION_DEFAULT_FT,
            width_ft: ROOM_DIMENSION_DEFAULT_FT,
        }
    }
}

impl RoomGeometry {
    /// Create a room, rejecting dimensions outside 10-50 ft
    pub fn new(length_ft: u32, width_ft: u32) -> ValidationResult<Self> {
        Ok(Self {
            length_ft: check_range("length_ft", length_ft, ROOM_DIMENSION_MIN_FT, ROOM_DIMENSION_MAX_FT)?,
            width_ft: check_range("width_ft", width_ft, ROOM_DIMENSION_MIN_FT, ROOM_DIMENSION_MAX_FT)?,
        })
    }

    /// Create a room, pulling each dimension into 10-50 ft
    pub fn clamped(length_ft: u32, width_ft: u32) -> Self {
        Self {
            length_ft: length_ft.clamp(ROOM_DIMENSION_MIN_FT, ROOM_DIMENSION_MAX_FT),
            width_ft: width_ft.clamp(ROOM_DIMENSION_MIN_FT, ROOM_DIMENSION_MAX_FT),
        }
    }

    /// Floor area (sq ft)
    pub fn area_sq_ft(&self) -> u32 {
        self.length_ft.saturating_mul(self.width_ft)
    }
}

/// How floor area becomes a recommended head count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OccupancyPolicy {
    /// Fixed steps: ≤100→4, ≤150→6, ≤300→10, ≤500→15, else 25
    #[default]
    StepFunction,
    /// One person per 25 sq ft, at least one
    AreaDensity,
}

impl OccupancyPolicy {
    fn step_function(area_sq_ft: u32) -> u32 {
        STEP_TABLE
            .iter()
            .find(|(max_area, _)| area_sq_ft <= *max_area)
            .map(|(_, people)| *people)
            .unwrap_or(STEP_LARGE_ROOM_MAX_PEOPLE)
    }

    fn area_density(area_sq_ft: u32) -> u32 {
        (area_sq_ft / AREA_PER_PERSON_SQ_FT).max(DENSITY_MIN_PEOPLE)
    }
}

impl CapacityPolicy for OccupancyPolicy {
    fn max_people(&self, area_sq_ft: u32) -> u32 {
        match self {
            Self::StepFunction => Self::step_function(area_sq_ft),
            Self::AreaDensity => Self::area_density(area_sq_ft),
        }
    }
}
