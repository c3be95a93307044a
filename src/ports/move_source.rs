//! Move source port - where the non-agent side's moves come from
//!
//! The human at the console, a scripted test fixture and the training
//! opponents all sit behind this trait. Sources hand back the raw request;
//! validating it against the board is the game loop's job.

use crate::{Result, tictactoe::Board};

/// Supplier of raw move requests for the player side.
pub trait MoveSource {
    /// Ask for the next move on `board`.
    ///
    /// The answer is the text the player typed (or would have typed): a
    /// cell number from 1 to 9. Anything else is discarded by the game loop
    /// and the source is asked again.
    ///
    /// # Errors
    ///
    /// Returns an error only when no further input can be obtained at all,
    /// such as a closed terminal or an exhausted script.
    fn request_move(&mut self, board: &Board) -> Result<String>;

    /// Short name for logs and summaries.
    fn name(&self) -> &str;
}
