//! Tick sources for the polling loop
//!
//! The classifier never loops. Re-evaluation on a timer is driven from
//! outside by a [`Ticker`]:
//! - [`IntervalTicker`] sleeps a fixed interval (the live auto-refresh)
//! - [`CountingTicker`] returns immediately (tests and batch replays)

use std::thread;
use std::time::Duration;

/// Blocks until the next evaluation is due
pub trait Ticker {
    /// Wait for the next tick
    fn tick(&mut self);

    /// Nominal time between ticks
    fn interval(&self) -> Duration;
}

/// Sleeps a fixed interval per tick
#[derive(Debug, Clone)]
pub struct IntervalTicker {
    interval: Duration,
}

impl IntervalTicker {
    /// Tick every `interval`
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for IntervalTicker {
    fn tick(&mut self) {
        thread::sleep(self.interval);
    }

    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Ticks immediately and counts how often it was asked to
#[derive(Debug, Clone, Default)]
pub struct CountingTicker {
    ticks: usize,
}

impl CountingTicker {
    /// Ticks so far
    pub fn ticks(&self) -> usize {
        self.ticks
    }
}

impl Ticker for CountingTicker {
    fn tick(&mut self) {
        self.ticks += 1;
    }

    fn interval(&self) -> Duration {
        Duration::ZERO
    }
}
