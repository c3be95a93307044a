//! The playing agent: tactical override wrapped around the learned policy

use crate::{
    error::Result,
    event_log::EventLog,
    q_learning::{
        policy::{AgentMove, MoveReason, PolicyEngine},
        q_table::QTable,
        tactics::{Tactic, find_tactic},
    },
    tictactoe::{Board, Player},
};

/// Agent that never misses a one-move win or an immediate block, and falls
/// back to the ε-greedy [`PolicyEngine`] otherwise.
#[derive(Debug, Clone)]
pub struct TacticalAgent {
    policy: PolicyEngine,
    mark: Player,
}

impl TacticalAgent {
    pub fn new(policy: PolicyEngine, mark: Player) -> Self {
        Self { policy, mark }
    }

    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Pick the agent's next cell.
    ///
    /// Order of precedence: own immediate win, block of the opponent's
    /// immediate win, then the policy. Every branch taken is logged.
    pub fn select_move(
        &mut self,
        board: &Board,
        table: &QTable,
        log: &mut EventLog,
    ) -> Result<AgentMove> {
        match find_tactic(board, self.mark, self.mark.opponent()) {
            Some(Tactic::Win(position)) => {
                log.log_event(format!("Found winning move → {position}"));
                Ok(AgentMove {
                    position,
                    reason: MoveReason::Winning,
                })
            }
            Some(Tactic::Block(position)) => {
                log.log_event(format!("Blocking player's threat → {position}"));
                Ok(AgentMove {
                    position,
                    reason: MoveReason::Blocking,
                })
            }
            None => {
                log.log_event("No immediate win or block, consulting Q-memory");
                self.policy.choose_move(board, table, log)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StateKey;

    fn agent(seed: u64) -> TacticalAgent {
        TacticalAgent::new(PolicyEngine::new().with_seed(seed), Player::O)
    }

    #[test]
    fn test_takes_win_even_when_table_prefers_elsewhere() {
        let board = Board::from_string("XX.OO.X..").unwrap();
        let mut table = QTable::new();
        table.entry_or_default(&StateKey::from(&board))[7] = 10.0;
        let mut log = EventLog::detached(8);

        for seed in 0..10 {
            let choice = agent(seed).select_move(&board, &table, &mut log).unwrap();
            assert_eq!(choice.position, 5);
            assert_eq!(choice.reason, MoveReason::Winning);
        }
    }

    #[test]
    fn test_blocks_when_no_win() {
        let board = Board::from_string("XO.X.....").unwrap();
        let mut log = EventLog::detached(8);

        let choice = agent(1).select_move(&board, &QTable::new(), &mut log).unwrap();
        assert_eq!(choice.position, 6);
        assert_eq!(choice.reason, MoveReason::Blocking);
        assert!(
            log.recent()
                .iter()
                .any(|line| line.contains("Blocking player's threat → 6"))
        );
    }

    #[test]
    fn test_defers_to_policy_in_quiet_positions() {
        let board = Board::from_string("X........").unwrap();
        let mut log = EventLog::detached(8);

        let choice = agent(2).select_move(&board, &QTable::new(), &mut log).unwrap();
        assert_eq!(choice.reason, MoveReason::Explored);
        assert!(board.is_empty(choice.position));
        assert!(
            log.recent()
                .iter()
                .any(|line| line.contains("consulting Q-memory"))
        );
    }
}
