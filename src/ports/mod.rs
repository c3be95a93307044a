//! Ports (trait boundaries) for external collaborators.
//!
//! The learning core and game loop depend only on these traits; the
//! console, file system and test doubles live in [`crate::adapters`].

pub mod event_sink;
pub mod move_source;
pub mod renderer;
pub mod repository;

pub use event_sink::EventSink;
pub use move_source::MoveSource;
pub use renderer::Renderer;
pub use repository::QTableRepository;
