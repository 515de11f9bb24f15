//! Input sources
//!
//! Each tick the monitor asks its source for the current form state.
//! `None` ends the session.

use std::collections::VecDeque;

use airguard_core::Inputs;

/// Supplies inputs for each evaluation
pub trait ReadingSource {
    /// Inputs for the next evaluation, or `None` when there are no more
    fn next_inputs(&mut self) -> Option<Inputs>;
}

/// Same inputs every tick, like a form nobody is touching
#[derive(Debug, Clone)]
pub struct FixedSource {
    inputs: Inputs,
}

impl FixedSource {
    /// Always supply `inputs`
    pub fn new(inputs: Inputs) -> Self {
        Self { inputs }
    }

    /// Replace the inputs, as if the form was edited
    pub fn set(&mut self, inputs: Inputs) {
        self.inputs = inputs;
    }
}

impl ReadingSource for FixedSource {
    fn next_inputs(&mut self) -> Option<Inputs> {
        Some(self.inputs)
    }
}

/// Plays back a fixed sequence of inputs, then ends
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    queue: VecDeque<Inputs>,
}

impl ScriptedSource {
    /// Supply `inputs` in order
    pub fn new(inputs: impl IntoIterator<Item = Inputs>) -> Self {
        Self { queue: inputs.into_iter().collect() }
    }

    /// Inputs not yet supplied
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl ReadingSource for ScriptedSource {
    fn next_inputs(&mut self) -> Option<Inputs> {
        self.queue.pop_front()
    }
}
