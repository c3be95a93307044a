//! Application layer with dependency injection container.
//!
//! The container owns the storage adapter and the session configuration, and
//! hands out the objects a session needs: the loaded table, the brain log and
//! the agent.
//!
//! # Usage
//!
//! ## Production
//!
//! ```no_run
//! use brainy::app::{App, GameConfig};
//!
//! let app = App::new(GameConfig::default())?;
//! let mut saved = app.load_table()?;
//! let mut log = app.open_event_log()?;
//! let mut agent = app.create_agent();
//! # Ok::<(), brainy::Error>(())
//! ```
//!
//! ## Testing
//!
//! ```
//! use brainy::app::App;
//! use brainy::adapters::InMemoryRepository;
//!
//! let app = App::for_testing()
//!     .with_repository(InMemoryRepository::new())
//!     .with_seed(42)
//!     .build()?;
//! # Ok::<(), brainy::Error>(())
//! ```

pub mod config;
pub mod container;

pub use config::GameConfig;
pub use container::{App, AppBuilder};
