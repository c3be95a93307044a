//! Renderer port - textual display of the game

use crate::{Result, event_log::RecentEvents, tictactoe::Board};

/// Draws the board and the recent brain-log lines.
///
/// The game loop calls [`Renderer::render`] after each state transition and
/// never reads anything back.
pub trait Renderer {
    fn render(&mut self, board: &Board, recent: &RecentEvents) -> Result<()>;

    /// Show a one-line outcome message such as "You win!".
    fn announce(&mut self, message: &str) -> Result<()>;
}
