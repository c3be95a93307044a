//! Dependency injection container for a brainy session.
//!
//! The container owns the storage adapter and configuration, and provides
//! factory methods for the table, the brain log and the agent.

use std::sync::Arc;

use super::config::GameConfig;
use crate::{
    Result,
    adapters::{FileEventSink, MsgPackRepository},
    event_log::EventLog,
    ports::QTableRepository,
    q_learning::{PolicyEngine, SavedQTable, TacticalAgent},
};

/// Application with dependency injection.
///
/// # Examples
///
/// ```
/// use brainy::app::App;
/// use brainy::adapters::InMemoryRepository;
///
/// let app = App::for_testing()
///     .with_repository(InMemoryRepository::new())
///     .with_seed(42)
///     .build()?;
///
/// // Nothing stored yet: start from an empty table
/// let saved = app.load_table()?;
/// assert!(saved.table.is_empty());
/// # Ok::<(), brainy::Error>(())
/// ```
pub struct App {
    /// Repository for table persistence
    repository: Arc<dyn QTableRepository + Send + Sync>,
    config: GameConfig,
}

impl App {
    /// Create an app backed by [`MsgPackRepository`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if `config` fails
    /// validation.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            repository: Arc::new(MsgPackRepository::new()),
            config,
        })
    }

    /// Create a builder for constructing app with custom dependencies.
    ///
    /// Primarily used for testing with in-memory storage.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Load the table from the configured path.
    ///
    /// A missing or empty store yields a fresh table.
    ///
    /// # Errors
    ///
    /// Stored data that cannot be decoded is an error; the caller is expected
    /// to stop rather than continue and overwrite it.
    pub fn load_table(&self) -> Result<SavedQTable> {
        let path = &self.config.q_table_path;
        match self.repository.load(path)? {
            Some(saved) => {
                log::info!(
                    "loaded {} learned states from {path:?} ({} games played)",
                    saved.table.len(),
                    saved.record.games_played
                );
                Ok(saved)
            }
            None => {
                log::info!("no table at {path:?}, starting fresh");
                Ok(SavedQTable::new())
            }
        }
    }

    /// Save `saved` to the configured path.
    ///
    /// Failure is reported as a warning and a brain-log event, never as an
    /// error: the in-memory table stays authoritative for the rest of the
    /// session. Returns whether the save went through.
    pub fn persist(&self, saved: &SavedQTable, log: &mut EventLog) -> bool {
        let path = &self.config.q_table_path;
        match self.repository.save(saved, path) {
            Ok(()) => {
                log.log_event(format!(
                    "Saved {} learned states to memory.",
                    saved.table.len()
                ));
                true
            }
            Err(err) => {
                log::warn!("could not save Q-table to {path:?}: {err}");
                log.log_event(format!(
                    "Could not save memory ({err}); keeping {} states in RAM.",
                    saved.table.len()
                ));
                false
            }
        }
    }

    /// Brain log appending to the configured file.
    pub fn open_event_log(&self) -> Result<EventLog> {
        let sink = FileEventSink::open(&self.config.brain_log_path)?;
        Ok(EventLog::new(sink, self.config.recent_capacity))
    }

    /// Brain log that only keeps the on-screen buffer.
    pub fn detached_event_log(&self) -> EventLog {
        EventLog::detached(self.config.recent_capacity)
    }

    /// Create the agent with the configured mark, seed and think delay.
    pub fn create_agent(&self) -> TacticalAgent {
        let mut policy = PolicyEngine::new().with_think_delay(self.config.think_delay);
        if let Some(seed) = self.config.seed {
            policy = policy.with_seed(seed);
        }
        TacticalAgent::new(policy, self.config.agent)
    }
}

/// Builder for constructing app with custom dependencies.
///
/// Defaults to [`MsgPackRepository`] and a [`GameConfig`] without think
/// delay.
pub struct AppBuilder {
    repository: Option<Arc<dyn QTableRepository + Send + Sync>>,
    config: GameConfig,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            repository: None,
            config: GameConfig::default().with_think_delay(std::time::Duration::ZERO),
        }
    }

    /// Set a custom table repository.
    pub fn with_repository<R: QTableRepository + Send + Sync + 'static>(
        mut self,
        repo: R,
    ) -> Self {
        self.repository = Some(Arc::new(repo));
        self
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the agent's RNG for deterministic tests.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the app with the configured dependencies.
    pub fn build(self) -> Result<App> {
        self.config.validate()?;
        Ok(App {
            repository: self
                .repository
                .unwrap_or_else(|| Arc::new(MsgPackRepository::new())),
            config: self.config,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
