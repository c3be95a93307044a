//! ε-greedy move selection over the Q-table

use std::{thread, time::Duration};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    error::{Error, Result},
    event_log::EventLog,
    q_learning::q_table::QTable,
    tictactoe::Board,
    types::ActionIndex,
};

/// Exploration rate for an empty table.
pub const EPSILON_START: f64 = 0.2;

/// Exploration never drops below this rate.
pub const EPSILON_FLOOR: f64 = 0.05;

/// Table size over which ε falls by one whole unit.
pub const EPSILON_DECAY_STATES: f64 = 2000.0;

/// Exploration rate for a table holding `table_size` distinct states.
///
/// `max(0.05, 0.2 - table_size / 2000)`
pub fn epsilon(table_size: usize) -> f64 {
    (EPSILON_START - table_size as f64 / EPSILON_DECAY_STATES).max(EPSILON_FLOOR)
}

/// Why a move was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReason {
    /// Completes a line for the agent
    Winning,
    /// Stops the opponent completing a line
    Blocking,
    /// Uniform random pick
    Explored,
    /// Highest stored estimate
    Exploited,
}

/// A chosen cell together with the reason it was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentMove {
    pub position: ActionIndex,
    pub reason: MoveReason,
}

pub(crate) fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// First candidate holding the maximum value, scanning left to right.
///
/// Later candidates only win with a strictly larger value, so ties go to the
/// lowest cell index when candidates come from [`Board::available_moves`].
pub fn first_best(candidates: &[(ActionIndex, f64)]) -> Option<ActionIndex> {
    let mut best: Option<(ActionIndex, f64)> = None;
    for &(action, value) in candidates {
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((action, value)),
        }
    }
    best.map(|(action, _)| action)
}

fn format_candidates(candidates: &[(ActionIndex, f64)]) -> String {
    let parts: Vec<String> = candidates
        .iter()
        .map(|(action, value)| format!("{action}: {value:.3}"))
        .collect();
    format!("{{{}}}", parts.join(", "))
}

/// Statistical half of the agent: explores with probability ε, otherwise
/// plays the best-known move for the current state.
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    rng: StdRng,
    think_delay: Duration,
}

impl PolicyEngine {
    pub fn new() -> Self {
        Self {
            rng: build_rng(None),
            think_delay: Duration::ZERO,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Pause after announcing the state under consideration, so the brain
    /// log can be followed on screen.
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    /// Choose a cell for the agent.
    ///
    /// Explores uniformly when the ε roll succeeds or the state has never
    /// been stored; otherwise exploits via [`first_best`] over the available
    /// moves, reading unseen actions as 0.0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] on a full board.
    pub fn choose_move(
        &mut self,
        board: &Board,
        table: &QTable,
        log: &mut EventLog,
    ) -> Result<AgentMove> {
        let state = board.state_key();
        let moves = board.available_moves();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let eps = epsilon(table.len());

        log.log_event(format!("Thinking about state: {state} (ε = {eps:.3})"));
        if !self.think_delay.is_zero() {
            thread::sleep(self.think_delay);
        }

        let roll: f64 = self.rng.random();
        if roll < eps || !table.contains(&state) {
            let position = *moves.choose(&mut self.rng).ok_or(Error::NoValidMoves)?;
            log.log_event(format!("Exploring randomly → chose {position}"));
            return Ok(AgentMove {
                position,
                reason: MoveReason::Explored,
            });
        }

        let candidates: Vec<(ActionIndex, f64)> = moves
            .iter()
            .map(|&action| (action, table.get(&state, action)))
            .collect();
        let position = first_best(&candidates).ok_or(Error::NoValidMoves)?;
        log.log_event(format!("Q-values: {}", format_candidates(&candidates)));
        log.log_event(format!("Best learned move → {position}"));

        Ok(AgentMove {
            position,
            reason: MoveReason::Exploited,
        })
    }
}

impl Default for PolicyEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StateKey;

    #[test]
    fn test_epsilon_schedule() {
        assert_eq!(epsilon(0), 0.2);
        assert!((epsilon(100) - 0.15).abs() < 1e-12);
        assert_eq!(epsilon(400), 0.05);
        assert_eq!(epsilon(2000), 0.05);
        assert_eq!(epsilon(10_000), 0.05);
    }

    #[test]
    fn test_first_best_prefers_earliest_tie() {
        assert_eq!(first_best(&[(1, 0.5), (3, 0.7), (5, 0.7)]), Some(3));
        assert_eq!(first_best(&[(0, 0.0), (2, 0.0), (8, 0.0)]), Some(0));
        assert_eq!(first_best(&[(6, -0.4), (7, -0.1)]), Some(7));
        assert_eq!(first_best(&[]), None);
    }

    #[test]
    fn test_unseen_state_always_explores() {
        let table = QTable::new();
        let mut log = EventLog::detached(8);
        let board = Board::from_string("X........").unwrap();

        for seed in 0..20 {
            let mut engine = PolicyEngine::new().with_seed(seed);
            let choice = engine.choose_move(&board, &table, &mut log).unwrap();
            assert_eq!(choice.reason, MoveReason::Explored);
            assert!(board.is_empty(choice.position));
        }
    }

    #[test]
    fn test_known_state_mostly_exploits_best_value() {
        let board = Board::from_string("X...O....").unwrap();
        let state = StateKey::from(&board);
        let mut table = QTable::new();
        table.entry_or_default(&state)[8] = 0.9;
        table.entry_or_default(&state)[2] = 0.9;
        table.entry_or_default(&state)[1] = 0.3;

        let mut engine = PolicyEngine::new().with_seed(7);
        let mut log = EventLog::detached(8);
        let mut exploited = 0;
        for _ in 0..200 {
            let choice = engine.choose_move(&board, &table, &mut log).unwrap();
            if choice.reason == MoveReason::Exploited {
                exploited += 1;
                assert_eq!(choice.position, 2);
            }
        }
        // ε is just under 0.2 for a one-state table
        assert!(exploited > 120, "exploited {exploited} of 200");
    }

    #[test]
    fn test_exploit_ignores_occupied_cells() {
        let board = Board::from_string("X...O....").unwrap();
        let state = StateKey::from(&board);
        let mut table = QTable::new();
        table.entry_or_default(&state)[0] = 5.0;
        table.entry_or_default(&state)[4] = 5.0;
        table.entry_or_default(&state)[6] = 0.1;

        let mut engine = PolicyEngine::new().with_seed(3);
        let mut log = EventLog::detached(8);
        for _ in 0..50 {
            let choice = engine.choose_move(&board, &table, &mut log).unwrap();
            if choice.reason == MoveReason::Exploited {
                assert_eq!(choice.position, 6);
            }
        }
    }

    #[test]
    fn test_full_board_is_an_error() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        let mut engine = PolicyEngine::new().with_seed(1);
        let mut log = EventLog::detached(8);
        let result = engine.choose_move(&board, &QTable::new(), &mut log);
        assert!(matches!(result, Err(Error::NoValidMoves)));
    }

    #[test]
    fn test_choice_is_logged() {
        let board = Board::new();
        let mut engine = PolicyEngine::new().with_seed(11);
        let mut log = EventLog::detached(8);
        engine.choose_move(&board, &QTable::new(), &mut log).unwrap();

        let lines: Vec<&str> = log.recent().iter().collect();
        assert!(lines[0].contains("Thinking about state: ........."));
        assert!(lines[1].contains("Exploring randomly"));
    }
}
