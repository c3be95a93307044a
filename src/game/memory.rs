//! Per-game record of the agent's own moves

use crate::types::{ActionIndex, StateKey};

/// The (state, action) pairs the agent played in one game, oldest first.
///
/// Created empty at game start and consumed by credit assignment when the
/// game ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeMemory {
    steps: Vec<(StateKey, ActionIndex)>,
}

impl EpisodeMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, state: StateKey, action: ActionIndex) {
        self.steps.push((state, action));
    }

    /// Oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &(StateKey, ActionIndex)> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn into_steps(self) -> Vec<(StateKey, ActionIndex)> {
        self.steps
    }
}
