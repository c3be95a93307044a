//! Tic-tac-toe against a tabular Q-learning agent that keeps learning
//! between sessions.
//!
//! This crate provides:
//! - Board, marks and winning-line detection
//! - A Q-table with the one-step TD update, ε-greedy policy and a tactical
//!   win/block override
//! - The game loop with per-move reward shaping and end-of-game credit
//!   assignment
//! - A timestamped brain log with an on-screen ring buffer
//! - MessagePack persistence that refuses to overwrite a corrupt table

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod event_log;
pub mod game;
pub mod ports;
pub mod q_learning;
pub mod tictactoe;
pub mod types;

pub use error::{Error, Result};
pub use event_log::{EventLog, RecentEvents};
pub use game::{GameLoop, GameOutcome};
pub use q_learning::{QTable, SavedQTable, TacticalAgent};
pub use tictactoe::{Board, Player};
pub use types::StateKey;
