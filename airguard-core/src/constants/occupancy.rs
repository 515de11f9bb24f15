//! Occupancy Limits
//!
//! Two incompatible ways of turning floor area into a recommended head
//! count. See [`crate::room::OccupancyPolicy`].

/// Step table as `(largest area in sq ft, max people)`, ascending.
///
/// Areas above the last step fall through to [`STEP_LARGE_ROOM_MAX_PEOPLE`].
pub const STEP_TABLE: [(u32, u32); 4] = [
    (100, 4),
    (150, 6),
    (300, 10),
    (500, 15),
];

/// Max people for rooms larger than every entry of [`STEP_TABLE`].
pub const STEP_LARGE_ROOM_MAX_PEOPLE: u32 = 25;

/// Floor area allotted to each person under the density rule (sq ft).
pub const AREA_PER_PERSON_SQ_FT: u32 = 25;

/// The density rule never recommends an empty room.
pub const DENSITY_MIN_PEOPLE: u32 = 1;
