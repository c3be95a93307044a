//! Terminal adapters: keyboard input through dialoguer and a redrawn board.

use std::io::{self, Write};

use colored::Colorize;
use dialoguer::Input;

use crate::{
    Result,
    error::Error,
    event_log::RecentEvents,
    ports::{MoveSource, Renderer},
    tictactoe::{Board, Cell},
};

const TITLE: &str = "=== Tic-Tac-Toe (AI Learns While You Play) ===";
const POSITIONS_GUIDE: &str = "Positions:\n 1 | 2 | 3 \n---|---|---\n 4 | 5 | 6 \n---|---|---\n 7 | 8 | 9 \n";
const LOG_RULE_WIDTH: usize = 28;

/// Only a literal "y" (any case, surrounding whitespace ignored) means yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// The human at the keyboard.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl ConsoleInput {
    pub fn new() -> Self {
        Self
    }

    /// Ask whether to start another game.
    pub fn play_again(&mut self) -> Result<bool> {
        let answer: String = Input::new()
            .with_prompt("\nPlay again? (y/n)")
            .allow_empty(true)
            .report(false)
            .interact_text()?;
        Ok(is_affirmative(&answer))
    }
}

impl MoveSource for ConsoleInput {
    fn request_move(&mut self, _board: &Board) -> Result<String> {
        let raw: String = Input::new()
            .with_prompt("Your move (1-9)")
            .allow_empty(true)
            .report(false)
            .interact_text()?;
        Ok(raw)
    }

    fn name(&self) -> &str {
        "human"
    }
}

fn styled_cell(cell: Cell) -> String {
    match cell {
        Cell::Empty => " ".to_string(),
        Cell::X => "X".bold().blue().to_string(),
        Cell::O => "O".bold().red().to_string(),
    }
}

/// Write the board grid, one row per line with `---|---|---` separators.
pub fn write_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    for row in 0..3 {
        let i = row * 3;
        writeln!(
            out,
            " {} | {} | {} ",
            styled_cell(board.get(i)),
            styled_cell(board.get(i + 1)),
            styled_cell(board.get(i + 2))
        )?;
        if row < 2 {
            writeln!(out, "---|---|---")?;
        }
    }
    Ok(())
}

/// Clears the terminal and draws the board, the brain log panel and the
/// position guide.
#[derive(Debug, Default)]
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self
    }

    fn draw(out: &mut impl Write, board: &Board, recent: &RecentEvents) -> io::Result<()> {
        write!(out, "\x1B[2J\x1B[1;1H")?;
        writeln!(out, "{TITLE}\n")?;
        write_board(out, board)?;

        writeln!(out, "\nAI Brain Log:")?;
        writeln!(out, "{}", "-".repeat(LOG_RULE_WIDTH))?;
        for line in recent.iter() {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "{}", "-".repeat(LOG_RULE_WIDTH))?;
        writeln!(out)?;
        writeln!(out, "{POSITIONS_GUIDE}")?;
        out.flush()
    }
}

impl Renderer for ConsoleRenderer {
    fn render(&mut self, board: &Board, recent: &RecentEvents) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        Self::draw(&mut out, board, recent).map_err(|source| Error::Io {
            operation: "draw board".to_string(),
            source,
        })
    }

    fn announce(&mut self, message: &str) -> Result<()> {
        println!("{}", message.bold());
        Ok(())
    }
}

/// Renderer for headless runs: draws nothing.
#[derive(Debug, Default)]
pub struct SilentRenderer;

impl Renderer for SilentRenderer {
    fn render(&mut self, _board: &Board, _recent: &RecentEvents) -> Result<()> {
        Ok(())
    }

    fn announce(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative(" y\n"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
    }

    #[test]
    fn test_write_board_layout() {
        colored::control::set_override(false);
        let board = Board::from_string("X...O....").unwrap();
        let mut out = Vec::new();
        write_board(&mut out, &board).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            " X |   |   \n---|---|---\n   | O |   \n---|---|---\n   |   |   \n"
        );
    }

    #[test]
    fn test_draw_includes_recent_events() {
        colored::control::set_override(false);
        let mut recent = RecentEvents::new(8);
        recent.push("[12:00:00] New game started.".to_string());
        let mut out = Vec::new();
        ConsoleRenderer::draw(&mut out, &Board::new(), &recent).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("AI Brain Log:"));
        assert!(text.contains("[12:00:00] New game started."));
        assert!(text.contains(" 7 | 8 | 9 "));
    }
}
