//! Tabular Q-learning agent
//!
//! The agent keeps one estimate per (board, cell) pair and improves it with
//! the one-step Q-learning rule
//!
//! ```text
//! Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
//! ```
//!
//! with α = 0.8 and γ = 0.9. Moves are picked ε-greedily, where ε shrinks as
//! the table grows, and a one-ply tactical check runs before the policy so
//! immediate wins and blocks are never missed.
//!
//! ## Usage Example
//!
//! ```
//! use brainy::event_log::EventLog;
//! use brainy::q_learning::{PolicyEngine, QTable, TacticalAgent};
//! use brainy::tictactoe::{Board, Player};
//!
//! let table = QTable::new();
//! let mut log = EventLog::detached(8);
//! let mut agent = TacticalAgent::new(PolicyEngine::new().with_seed(42), Player::O);
//!
//! let board = Board::from_string("XX.OO....").unwrap();
//! let choice = agent.select_move(&board, &table, &mut log).unwrap();
//! assert_eq!(choice.position, 5);
//! ```

pub mod agent;
pub mod policy;
pub mod q_table;
pub mod rewards;
pub mod serialization;
pub mod tactics;

// Public re-exports
pub use agent::TacticalAgent;
pub use policy::{AgentMove, MoveReason, PolicyEngine, epsilon, first_best};
pub use q_table::{ActionValues, QTable, TdUpdate};
pub use rewards::{loss_penalty, position_reward};
pub use serialization::{PlayRecord, SavedQTable};
pub use tactics::{Tactic, find_tactic, winning_move};
