//! Q-table implementation for temporal difference learning

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    tictactoe::BOARD_CELLS,
    types::{ActionIndex, StateKey},
};

/// Learning rate α.
pub const LEARNING_RATE: f64 = 0.8;

/// Discount factor γ.
pub const DISCOUNT_FACTOR: f64 = 0.9;

/// One estimate per board cell, indexed by action.
pub type ActionValues = [f64; BOARD_CELLS];

/// Before/after view of a single TD update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TdUpdate {
    pub action: ActionIndex,
    pub reward: f64,
    /// max over the next state's nine estimates
    pub future: f64,
    pub previous: f64,
    pub updated: f64,
}

/// Q-table mapping state keys to nine action estimates
///
/// A state is materialized with all nine actions at 0.0 the first time an
/// update touches it, including actions that are illegal in that state.
/// Lookups never insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    q_values: HashMap<StateKey, ActionValues>,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl QTable {
    /// Create an empty table with α = 0.8 and γ = 0.9
    pub fn new() -> Self {
        Self::with_params(LEARNING_RATE, DISCOUNT_FACTOR)
    }

    /// Create an empty table with explicit learning parameters
    pub fn with_params(learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            q_values: HashMap::new(),
            learning_rate,
            discount_factor,
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    /// Get the estimate for a state-action pair, 0.0 when unseen
    pub fn get(&self, state: &StateKey, action: ActionIndex) -> f64 {
        self.q_values
            .get(state)
            .and_then(|values| values.get(action))
            .copied()
            .unwrap_or(0.0)
    }

    /// All nine estimates for a state, if it has been materialized
    pub fn values(&self, state: &StateKey) -> Option<&ActionValues> {
        self.q_values.get(state)
    }

    /// Whether the state has ever been touched by an update
    pub fn contains(&self, state: &StateKey) -> bool {
        self.q_values.contains_key(state)
    }

    /// Get the estimates for a state, inserting nine zeros if absent
    pub fn entry_or_default(&mut self, state: &StateKey) -> &mut ActionValues {
        self.q_values
            .entry(state.clone())
            .or_insert([0.0; BOARD_CELLS])
    }

    /// Largest estimate stored for a state, 0.0 when unseen
    pub fn max_value(&self, state: &StateKey) -> f64 {
        self.q_values
            .get(state)
            .map(|values| values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
            .unwrap_or(0.0)
    }

    /// Q-learning update
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    ///
    /// Both `old_state` and `new_state` are materialized as a side effect.
    /// The max runs over all nine stored estimates of `new_state`.
    pub fn update(
        &mut self,
        old_state: &StateKey,
        action: ActionIndex,
        reward: f64,
        new_state: &StateKey,
    ) -> TdUpdate {
        debug_assert!(action < BOARD_CELLS, "action {action} out of range");

        let learning_rate = self.learning_rate;
        let discount_factor = self.discount_factor;

        self.entry_or_default(old_state);
        self.entry_or_default(new_state);
        let future = self.max_value(new_state);

        let values = self.entry_or_default(old_state);
        let previous = values[action];
        let td_target = reward + discount_factor * future;
        let updated = previous + learning_rate * (td_target - previous);
        values[action] = updated;

        TdUpdate {
            action,
            reward,
            future,
            previous,
            updated,
        }
    }

    /// Iterate over every stored state and its estimates
    pub fn iter(&self) -> impl Iterator<Item = (&StateKey, &ActionValues)> {
        self.q_values.iter()
    }

    /// Number of distinct states stored
    pub fn len(&self) -> usize {
        self.q_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q_values.is_empty()
    }
}

impl Default for QTable {
    fn default() -> Self {
        Self::new()
    }
}
