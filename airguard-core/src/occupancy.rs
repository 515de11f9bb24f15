//! Occupancy state of a room relative to its recommended limit

use crate::classifier::Status;

/// Head count compared against the room's limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OccupancyState {
    /// Fewer people than the limit
    WithinLimit,
    /// Exactly at the limit
    AtCapacity,
    /// More people than the limit
    Overcrowded,
}

impl OccupancyState {
    /// Compare a head count with the room's limit
    pub fn from_counts(people_count: u32, max_people: u32) -> Self {
        use core::cmp::Ordering;

        match people_count.cmp(&max_people) {
            Ordering::Less => Self::WithinLimit,
            Ordering::Equal => Self::AtCapacity,
            Ordering::Greater => Self::Overcrowded,
        }
    }

    /// Least severe status this occupancy allows
    ///
    /// Overcrowding forces `Critical` and exact capacity forces at least
    /// `Warning`, whatever the health readings say.
    pub fn status_floor(&self) -> Status {
        match self {
            Self::WithinLimit => Status::Normal,
            Self::AtCapacity => Status::Warning,
            Self::Overcrowded => Status::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_counts() {
        assert_eq!(OccupancyState::from_counts(3, 4), OccupancyState::WithinLimit);
        assert_eq!(OccupancyState::from_counts(4, 4), OccupancyState::AtCapacity);
        assert_eq!(OccupancyState::from_counts(5, 4), OccupancyState::Overcrowded);
    }

    #[test]
    fn floors() {
        assert_eq!(OccupancyState::WithinLimit.status_floor(), Status::Normal);
        assert_eq!(OccupancyState::AtCapacity.status_floor(), Status::Warning);
        assert_eq!(OccupancyState::Overcrowded.status_floor(), Status::Critical);
    }
}
