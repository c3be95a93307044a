//! Turn orchestration and end-of-game credit assignment

pub mod credit;
pub mod memory;
pub mod outcome;
pub mod session;

pub use credit::assign_credit;
pub use memory::EpisodeMemory;
pub use outcome::GameOutcome;
pub use session::{EpisodeReport, GameLoop, Phase, parse_move};
