//! Alarm State
//!
//! ## Overview
//!
//! The room alarm has three modes: silent, a single-shot tone for warnings,
//! and a looping tone for critical rooms. Which mode *should* be sounding is
//! a pure function of the assessment; whether the player has to do anything
//! depends on what was sounding before.
//!
//! Instead of a global "alarm active" flag, the current mode is an
//! [`AlarmState`] value. Each evaluation takes the previous state and
//! returns the next one together with the [`AlarmTransition`] the output
//! layer must apply:
//!
//! ```text
//!  previous      target       transition
//!  Silent        Silent       None
//!  Silent        SingleShot   Start(SingleShot)
//!  SingleShot    SingleShot   None          (tone is not replayed)
//!  SingleShot    Looping      Start(Looping)
//!  Looping       SingleShot   Start(SingleShot)
//!  Looping       Silent       Stop
//! ```
//!
//! Applying the same target twice never produces a second transition, so the
//! output layer can react to transitions without tracking anything itself.
//!
//! ```rust
//! use airguard_core::{AlarmMode, AlarmState, AlarmTransition};
//!
//! let state = AlarmState::idle();
//! let (state, transition) = state.transition(AlarmMode::Looping);
//! assert_eq!(transition, AlarmTransition::Start(AlarmMode::Looping));
//!
//! let (state, transition) = state.transition(AlarmMode::Looping);
//! assert_eq!(transition, AlarmTransition::None);
//!
//! let (_, transition) = state.transition(AlarmMode::Silent);
//! assert_eq!(transition, AlarmTransition::Stop);
//! ```

use crate::{classifier::Status, occupancy::OccupancyState};

/// How the alarm should sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AlarmMode {
    /// No sound
    #[default]
    Silent,
    /// Play the tone once
    SingleShot,
    /// Play the tone until stopped
    Looping,
}

impl AlarmMode {
    /// Alarm mode for an assessed room
    ///
    /// Occupancy is checked on its own as well as through `status`, so a
    /// classifier that ignored it would still trip the alarm.
    pub fn for_outcome(status: Status, occupancy: OccupancyState) -> Self {
        if status == Status::Critical || occupancy == OccupancyState::Overcrowded {
            Self::Looping
        } else if status == Status::Warning || occupancy == OccupancyState::AtCapacity {
            Self::SingleShot
        } else {
            Self::Silent
        }
    }

    /// Anything but silent
    pub fn is_audible(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

/// Change the output layer must apply to its player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AlarmTransition {
    /// Leave the player as it is
    None,
    /// Start playing in the given mode, replacing any current tone
    Start(AlarmMode),
    /// Stop any tone
    Stop,
}

/// Mode most recently started, threaded from one evaluation to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlarmState {
    mode: AlarmMode,
}

impl AlarmState {
    /// Nothing sounding
    pub fn idle() -> Self {
        Self::default()
    }

    /// Mode most recently started
    pub fn mode(&self) -> AlarmMode {
        self.mode
    }

    /// Whether a tone has been started and not stopped
    pub fn is_sounding(&self) -> bool {
        self.mode.is_audible()
    }

    /// Move towards `target`, returning the new state and what to do
    #[must_use]
    pub fn transition(self, target: AlarmMode) -> (Self, AlarmTransition) {
        let transition = if target == self.mode {
            AlarmTransition::None
        } else if target.is_audible() {
            AlarmTransition::Start(target)
        } else {
            AlarmTransition::Stop
        };

        if transition != AlarmTransition::None {
            log_debug!("Alarm {:?} -> {:?}: {:?}", self.mode, target, transition);
        }

        (Self { mode: target }, transition)
    }
}
