//! One-move look-ahead applied before the learned policy

use crate::{
    tictactoe::{Board, Player},
    types::ActionIndex,
};

/// A forced move found by one-ply look-ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tactic {
    /// Playing here completes a line for the mover
    Win(ActionIndex),
    /// Playing here denies the opponent a completed line
    Block(ActionIndex),
}

impl Tactic {
    pub fn position(self) -> ActionIndex {
        match self {
            Tactic::Win(pos) | Tactic::Block(pos) => pos,
        }
    }
}

/// First available cell where placing `mark` completes a line
pub fn winning_move(board: &Board, mark: Player) -> Option<ActionIndex> {
    board
        .available_moves()
        .into_iter()
        .find(|&pos| board.with_mark(pos, mark).has_won(mark))
}

/// Look for an immediate win for `mark`, then for a cell that blocks
/// `opponent`'s immediate win. Both scans run in ascending index order.
pub fn find_tactic(board: &Board, mark: Player, opponent: Player) -> Option<Tactic> {
    if let Some(pos) = winning_move(board, mark) {
        return Some(Tactic::Win(pos));
    }
    winning_move(board, opponent).map(Tactic::Block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_row_completion() {
        // O O .
        // X X .
        // . . .
        let board = Board::from_string("OO.XX....").unwrap();
        assert_eq!(
            find_tactic(&board, Player::O, Player::X),
            Some(Tactic::Win(2))
        );
    }

    #[test]
    fn test_win_beats_block() {
        // X X .
        // O O .
        // X . .
        let board = Board::from_string("XX.OO.X..").unwrap();
        assert_eq!(
            find_tactic(&board, Player::O, Player::X),
            Some(Tactic::Win(5))
        );
    }

    #[test]
    fn test_blocks_column_threat() {
        // X O .
        // X . .
        // . . .
        let board = Board::from_string("XO.X.....").unwrap();
        assert_eq!(
            find_tactic(&board, Player::O, Player::X),
            Some(Tactic::Block(6))
        );
    }

    #[test]
    fn test_blocks_lowest_of_two_threats() {
        // X X .
        // X O .
        // . . O
        let board = Board::from_string("XX.XO...O").unwrap();
        assert_eq!(
            find_tactic(&board, Player::O, Player::X),
            Some(Tactic::Block(2))
        );
    }

    #[test]
    fn test_quiet_position_has_no_tactic() {
        let board = Board::from_string("X...O....").unwrap();
        assert_eq!(find_tactic(&board, Player::O, Player::X), None);
        assert_eq!(find_tactic(&Board::new(), Player::O, Player::X), None);
    }
}
