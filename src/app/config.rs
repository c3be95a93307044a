//! Configuration for a play or training session.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{Result, error::Error, event_log::RECENT_CAPACITY, tictactoe::Player};

pub const DEFAULT_Q_TABLE_PATH: &str = "q_table.msgpack";
pub const DEFAULT_BRAIN_LOG_PATH: &str = "ai_brain.log";
pub const DEFAULT_THINK_DELAY: Duration = Duration::from_millis(200);

/// Session configuration with a builder-style API.
///
/// # Examples
///
/// ```
/// use brainy::app::GameConfig;
/// use std::time::Duration;
///
/// let config = GameConfig::default()
///     .with_q_table_path("trained.msgpack")
///     .with_think_delay(Duration::ZERO)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Where the learned table is loaded from and saved to
    pub q_table_path: PathBuf,
    /// Append-only brain log file
    pub brain_log_path: PathBuf,
    /// Pause the agent takes before deciding, so the log can be followed
    pub think_delay: Duration,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Lines of brain log kept on screen
    pub recent_capacity: usize,
    pub human: Player,
    pub agent: Player,
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            q_table_path: PathBuf::from(DEFAULT_Q_TABLE_PATH),
            brain_log_path: PathBuf::from(DEFAULT_BRAIN_LOG_PATH),
            think_delay: DEFAULT_THINK_DELAY,
            seed: None,
            recent_capacity: RECENT_CAPACITY,
            human: Player::X,
            agent: Player::O,
        }
    }

    pub fn with_q_table_path(mut self, path: impl AsRef<Path>) -> Self {
        self.q_table_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_brain_log_path(mut self, path: impl AsRef<Path>) -> Self {
        self.brain_log_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_recent_capacity(mut self, capacity: usize) -> Self {
        self.recent_capacity = capacity;
        self
    }

    pub fn with_marks(mut self, human: Player, agent: Player) -> Self {
        self.human = human;
        self.agent = agent;
        self
    }

    /// Reject configurations no session can run with.
    pub fn validate(&self) -> Result<()> {
        if self.recent_capacity == 0 {
            return Err(Error::InvalidConfiguration {
                message: "recent capacity must be at least 1".to_string(),
            });
        }
        if self.human == self.agent {
            return Err(Error::InvalidConfiguration {
                message: format!("human and agent both play {}", self.human),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.q_table_path, PathBuf::from("q_table.msgpack"));
        assert_eq!(config.brain_log_path, PathBuf::from("ai_brain.log"));
        assert_eq!(config.think_delay, Duration::from_millis(200));
        assert_eq!(config.recent_capacity, 8);
        assert_eq!(config.human, Player::X);
        assert_eq!(config.agent, Player::O);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = GameConfig::default().with_recent_capacity(0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_same_marks_rejected() {
        let config = GameConfig::default().with_marks(Player::O, Player::O);
        assert!(config.validate().is_err());
    }
}
