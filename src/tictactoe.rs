//! Tic-Tac-Toe board and win detection

pub mod board;
pub mod lines;

pub use board::{BOARD_CELLS, Board, CENTER, CORNERS, Cell, Player};
pub use lines::{LineAnalyzer, WINNING_LINES};
