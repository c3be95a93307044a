//! Adapters implementing the ports.
//!
//! Infrastructure lives here: file and in-memory storage for the table, the
//! brain log file, the terminal, and the non-interactive opponents.

pub mod console;
pub mod file_event_sink;
pub mod in_memory_repository;
pub mod msgpack_repository;
pub mod opponents;

pub use console::{ConsoleInput, ConsoleRenderer, SilentRenderer, is_affirmative};
pub use file_event_sink::FileEventSink;
pub use in_memory_repository::InMemoryRepository;
pub use msgpack_repository::MsgPackRepository;
pub use opponents::{RandomOpponent, ScriptedMoves, TacticalOpponent};
