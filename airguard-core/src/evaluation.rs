//! One-call evaluation of a room
//!
//! Everything the output layer needs from a single form submission:
//!
//! ```text
//! RoomGeometry ──► area ──► max_people ─┐
//!                                       ├─► Assessment ─┐
//! people_count ─────────────────────────┤               ├─► AlarmMode ─► AlarmTransition
//! HealthReading ────────────────────────┘               │
//!                        OccupancyState ────────────────┘
//! ```
//!
//! The previous [`AlarmState`] goes in and the next one comes out, so the
//! function stays pure and the caller decides where the state lives.

use crate::{
    alarm::{AlarmMode, AlarmState, AlarmTransition},
    classifier::{Assessment, Status},
    config::ClassifierConfig,
    constants::ranges::PEOPLE_COUNT_MIN,
    errors::{ValidationError, ValidationResult},
    health::HealthReading,
    occupancy::OccupancyState,
    room::RoomGeometry,
};

/// Everything the form supplies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inputs {
    /// Room dimensions
    pub room: RoomGeometry,
    /// People currently in the room
    pub people_count: u32,
    /// Occupant vital signs
    pub health: HealthReading,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            room: RoomGeometry::default(),
            people_count: PEOPLE_COUNT_MIN,
            health: HealthReading::default(),
        }
    }
}

impl Inputs {
    /// Bundle validated room and health readings with a head count of at least one
    pub fn new(room: RoomGeometry, people_count: u32, health: HealthReading) -> ValidationResult<Self> {
        if people_count < PEOPLE_COUNT_MIN {
            return Err(ValidationError::BelowMinimum {
                field: "people_count",
                value: people_count,
                min: PEOPLE_COUNT_MIN,
            });
        }

        Ok(Self { room, people_count, health })
    }
}

/// Outcome of evaluating one set of inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Floor area (sq ft)
    pub area_sq_ft: u32,
    /// Head count that was evaluated
    pub people_count: u32,
    /// Recommended limit under the active occupancy policy
    pub max_people: u32,
    /// Head count against the limit
    pub occupancy: OccupancyState,
    /// Simulated CO₂ level and status
    pub assessment: Assessment,
    /// Mode the alarm should be in
    pub alarm_mode: AlarmMode,
    /// What the player must do to get there
    pub alarm_transition: AlarmTransition,
    /// State to pass into the next evaluation
    pub alarm_state: AlarmState,
}

/// Evaluate `inputs` under `config`, continuing from `previous` alarm state
pub fn evaluate(inputs: &Inputs, config: &ClassifierConfig, previous: AlarmState) -> Evaluation {
    let area_sq_ft = inputs.room.area_sq_ft();
    let max_people = config.max_people(&inputs.room);
    let occupancy = OccupancyState::from_counts(inputs.people_count, max_people);
    let assessment = config.classify(&inputs.health, inputs.people_count, max_people);

    let alarm_mode = AlarmMode::for_outcome(assessment.status, occupancy);
    let (alarm_state, alarm_transition) = previous.transition(alarm_mode);

    log_debug!(
        "Evaluated {} sq ft, {}/{} people: {} ppm {}",
        area_sq_ft,
        inputs.people_count,
        max_people,
        assessment.co2_ppm,
        assessment.status
    );

    if assessment.status > Status::Normal {
        log_info!("Room status {} at {} ppm ({:?})", assessment.status, assessment.co2_ppm, occupancy);
    }

    Evaluation {
        area_sq_ft,
        people_count: inputs.people_count,
        max_people,
        occupancy,
        assessment,
        alarm_mode,
        alarm_transition,
        alarm_state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        classifier::LevelPolicy,
        room::OccupancyPolicy,
    };

    fn inputs(length: u32, width: u32, people: u32, rr: u32, hr: u32, spo2: u32) -> Inputs {
        Inputs::new(
            RoomGeometry::new(length, width).unwrap(),
            people,
            HealthReading::new(rr, hr, spo2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn at_capacity_room() {
        let eval = evaluate(&inputs(20, 20, 15, 16, 75, 98), &ClassifierConfig::default(), AlarmState::idle());

        assert_eq!(eval.area_sq_ft, 400);
        assert_eq!(eval.max_people, 15);
        assert_eq!(eval.occupancy, OccupancyState::AtCapacity);
        assert_eq!(eval.assessment, Assessment { co2_ppm: 700, status: Status::Warning });
        assert_eq!(eval.alarm_mode, AlarmMode::SingleShot);
        assert_eq!(eval.alarm_transition, AlarmTransition::Start(AlarmMode::SingleShot));
    }

    #[test]
    fn density_policy_gives_headroom() {
        let config = ClassifierConfig::new(OccupancyPolicy::AreaDensity, LevelPolicy::FixedLevel);
        let eval = evaluate(&inputs(20, 20, 15, 16, 75, 98), &config, AlarmState::idle());

        assert_eq!(eval.max_people, 16);
        assert_eq!(eval.occupancy, OccupancyState::WithinLimit);
        assert_eq!(eval.assessment.status, Status::Normal);
        assert_eq!(eval.alarm_transition, AlarmTransition::None);
    }

    #[test]
    fn repeated_evaluation_is_stable() {
        let input = inputs(10, 10, 5, 16, 75, 98);
        let config = ClassifierConfig::default();

        let first = evaluate(&input, &config, AlarmState::idle());
        assert_eq!(first.alarm_transition, AlarmTransition::Start(AlarmMode::Looping));

        // Same inputs and state: identical output
        assert_eq!(first, evaluate(&input, &config, AlarmState::idle()));

        // Threading the state through: no second start
        let second = evaluate(&input, &config, first.alarm_state);
        assert_eq!(second.assessment, first.assessment);
        assert_eq!(second.alarm_transition, AlarmTransition::None);
    }

    #[test]
    fn zero_people_rejected() {
        let result = Inputs::new(RoomGeometry::default(), 0, HealthReading::default());
        assert_eq!(
            result,
            Err(ValidationError::BelowMinimum { field: "people_count", value: 0, min: 1 })
        );
    }
}
