//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::types::StateKey;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Center cell index.
pub const CENTER: usize = 4;

/// Corner cell indices in ascending order.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A mark owner: the human plays one, the agent the other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// The nine cells of a game in progress.
///
/// Whose turn it is lives with the game loop, not the board: the board only
/// records which marks sit where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Create a board from a string of nine cell characters.
    ///
    /// Whitespace other than a literal space is ignored, so `"XO.\n.X.\n..O"`
    /// parses the same as `"XO..X...O"`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidStateKey`] if the string does not hold
    /// exactly nine valid cell characters.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| *c == ' ' || !c.is_whitespace())
            .collect();
        if chars.len() != BOARD_CELLS {
            return Err(crate::Error::InvalidStateKey {
                key: s.to_string(),
                reason: format!("expected {BOARD_CELLS} cells, got {}", chars.len()),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidStateKey {
                key: s.to_string(),
                reason: format!("invalid character '{c}' at position {i}"),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Empty positions in ascending index order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Place `player`'s mark and return the resulting board
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, pos: usize, player: Player) -> Result<Board, crate::Error> {
        if pos >= BOARD_CELLS {
            return Err(crate::Error::InvalidPosition { position: pos });
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        Ok(self.with_mark(pos, player))
    }

    /// Place a mark without checking the target cell. Used for look-ahead on
    /// positions taken from [`Board::available_moves`].
    pub(crate) fn with_mark(&self, pos: usize, player: Player) -> Board {
        let mut next = *self;
        next.cells[pos] = player.to_cell();
        next
    }

    /// Check if a player has completed a line
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// True when no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Canonical lookup key: the nine cell characters in index order.
    ///
    /// No symmetry reduction is applied, so rotations and reflections of the
    /// same position produce different keys.
    pub fn state_key(&self) -> StateKey {
        StateKey::from(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        for i in 0..9 {
            assert_eq!(board.cells[i], Cell::Empty);
        }
        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_place() {
        let board = Board::new();

        let next = board.place(4, Player::X).unwrap();
        assert_eq!(next.cells[4], Cell::X);
        assert_eq!(board.cells[4], Cell::Empty);

        let occupied = next.place(4, Player::O);
        assert!(occupied.unwrap_err().to_string().contains("occupied"));

        let out_of_range = next.place(9, Player::O);
        assert!(matches!(
            out_of_range,
            Err(crate::Error::InvalidPosition { position: 9 })
        ));
    }

    #[test]
    fn test_available_moves_shrink_by_one_per_mark() {
        let mut board = Board::new();
        let order = [4, 0, 8, 2, 6, 3, 5, 1, 7];
        let mut player = Player::X;
        for (placed, &pos) in order.iter().enumerate() {
            assert_eq!(board.available_moves().len(), 9 - placed);
            board = board.place(pos, player).unwrap();
            assert!(!board.available_moves().contains(&pos));
            assert_eq!(board.occupied_count(), placed + 1);
            player = player.opponent();
        }
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_available_moves_are_complement_of_occupied() {
        let board = Board::from_string("X.O.X.O..").unwrap();
        assert_eq!(board.available_moves(), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_win_detection_horizontal() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert_eq!(board.winner(), Some(Player::X));
        assert!(!board.has_won(Player::O));
    }

    #[test]
    fn test_win_detection_vertical() {
        let board = Board::from_string("XOX.OX.O.").unwrap();
        assert_eq!(board.winner(), Some(Player::O));
    }

    #[test]
    fn test_win_detection_diagonal() {
        let board = Board::from_string("XOO.X...X").unwrap();
        assert!(board.has_won(Player::X));
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert!(!board.has_won(Player::X));
        assert!(!board.has_won(Player::O));
        assert!(!board.is_draw());
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(board.is_full());
        assert!(board.is_draw());

        let won_on_last_move = Board::from_string("XOXOXOOXX").unwrap();
        assert!(won_on_last_move.is_full());
        assert!(!won_on_last_move.is_draw());
    }

    #[test]
    fn test_state_key_is_cells_in_order() {
        let board = Board::from_string("X...O...X").unwrap();
        assert_eq!(board.state_key().as_str(), "X...O...X");

        let mirrored = Board::from_string("..X.O.X..").unwrap();
        assert_ne!(board.state_key(), mirrored.state_key());
    }

    #[test]
    fn test_from_string_rejects_bad_input() {
        assert!(Board::from_string("XO").is_err());
        assert!(Board::from_string("XOZ......").is_err());
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert_eq!(display, "XOX\n.O.\nX..");
    }
}
