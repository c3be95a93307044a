//! Terminal outcomes, seen from the human side of the table

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    PlayerWin,
    AgentWin,
    Draw,
}

impl GameOutcome {
    /// Line shown to the human when the game ends
    pub fn announcement(self) -> &'static str {
        match self {
            GameOutcome::PlayerWin => "You win!",
            GameOutcome::AgentWin => "AI wins!",
            GameOutcome::Draw => "Draw.",
        }
    }
}
