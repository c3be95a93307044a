//! Newtype wrappers for table keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{BOARD_CELLS, Board, Cell};

/// Index of a board cell chosen as an action (0-8).
pub type ActionIndex = usize;

/// Lookup key for a board configuration in the Q-table.
///
/// The key is the nine cell characters in index order (`.` for empty), so
/// two boards share a key exactly when every cell matches.
///
/// # Examples
///
/// ```
/// use brainy::tictactoe::{Board, Player};
/// use brainy::types::StateKey;
///
/// let board = Board::new().place(4, Player::X).unwrap();
/// assert_eq!(board.state_key().as_str(), "....X....");
///
/// let parsed = StateKey::parse("....X....").unwrap();
/// assert_eq!(parsed, board.state_key());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateKey(String);

impl StateKey {
    /// Parse and validate a state key.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidStateKey`] unless the string is exactly
    /// nine characters from `.`, `X` and `O`.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        if s.chars().count() != BOARD_CELLS {
            return Err(crate::Error::InvalidStateKey {
                key: s.to_string(),
                reason: format!("expected {BOARD_CELLS} characters"),
            });
        }
        let board = Board::from_string(s)?;
        Ok(Self::from(&board))
    }

    /// Rebuild the board this key was derived from.
    pub fn to_board(&self) -> Board {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (cell, c) in cells.iter_mut().zip(self.0.chars()) {
            *cell = Cell::from_char(c).unwrap_or(Cell::Empty);
        }
        Board { cells }
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Board> for StateKey {
    fn from(board: &Board) -> Self {
        StateKey(board.cells.iter().map(|&c| c.to_char()).collect())
    }
}

impl AsRef<str> for StateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
