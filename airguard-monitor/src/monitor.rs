//! Monitor session
//!
//! Owns everything that changes between evaluations: the alarm state, the
//! player and the last result. Each step pulls inputs from the source, runs
//! the pure evaluation with the previous alarm state, applies the resulting
//! transition and keeps the new state for next time.
//!
//! ```text
//! ReadingSource ──► evaluate(inputs, config, alarm_state) ──► Evaluation
//!                                  ▲                               │
//!                                  └──────── alarm_state ◄─────────┤
//!                                                                  ▼
//!                                              AlarmOutput::apply(transition)
//! ```

use airguard_core::{evaluate, AlarmState, ClassifierConfig, Evaluation};

use crate::{
    audio::{AlarmAsset, AlarmOutput, AlarmPlayer},
    config::MonitorConfig,
    report::Report,
    source::ReadingSource,
    timer::Ticker,
};

/// One interactive session
#[derive(Debug)]
pub struct Monitor<S, P> {
    classifier: ClassifierConfig,
    source: S,
    output: AlarmOutput<P>,
    alarm_state: AlarmState,
    last: Option<Evaluation>,
}

impl<S: ReadingSource, P: AlarmPlayer> Monitor<S, P> {
    /// Create a session, loading the alarm asset named in `config`
    ///
    /// A missing asset leaves the session silent rather than failing.
    pub fn new(config: &MonitorConfig, source: S, player: P) -> Self {
        let asset = AlarmAsset::load_or_silent(&config.alarm_asset);
        Self::with_asset(config.classifier, source, player, asset)
    }

    /// Create a session with an asset that is already loaded
    pub fn with_asset(classifier: ClassifierConfig, source: S, player: P, asset: Option<AlarmAsset>) -> Self {
        Self {
            classifier,
            source,
            output: AlarmOutput::new(player, asset),
            alarm_state: AlarmState::idle(),
            last: None,
        }
    }

    /// Evaluate the next inputs, or `None` when the source is exhausted
    pub fn step(&mut self) -> Option<Evaluation> {
        let inputs = self.source.next_inputs()?;
        let evaluation = evaluate(&inputs, &self.classifier, self.alarm_state);

        log::debug!("{}", Report::new(&evaluation));

        self.output.apply(evaluation.alarm_transition);
        self.alarm_state = evaluation.alarm_state;
        self.last = Some(evaluation);
        Some(evaluation)
    }

    /// Evaluate once per tick until the source ends or `max_evaluations` is reached
    ///
    /// Returns the number of evaluations performed. The ticker is not waited
    /// on after the final evaluation.
    pub fn run<T: Ticker>(&mut self, ticker: &mut T, max_evaluations: Option<usize>) -> usize {
        let mut count = 0;
        log::info!("Monitor polling every {:?}", ticker.interval());

        loop {
            if max_evaluations.is_some_and(|max| count >= max) {
                break;
            }
            if self.step().is_none() {
                log::info!("Reading source exhausted after {} evaluations", count);
                break;
            }
            count += 1;
            if max_evaluations.is_some_and(|max| count >= max) {
                break;
            }
            ticker.tick();
        }

        count
    }

    /// Alarm state carried into the next evaluation
    pub fn alarm_state(&self) -> AlarmState {
        self.alarm_state
    }

    /// Most recent evaluation
    pub fn last_evaluation(&self) -> Option<&Evaluation> {
        self.last.as_ref()
    }

    /// Whether alarm transitions reach the player
    pub fn is_audible(&self) -> bool {
        self.output.is_audible()
    }

    /// The wrapped player
    pub fn player(&self) -> &P {
        self.output.player()
    }

    /// The input source
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
