//! Non-interactive move sources: scripted fixtures and training opponents.

use std::collections::VecDeque;

use rand::{rngs::StdRng, seq::IndexedRandom};

use crate::{
    Result,
    error::Error,
    ports::MoveSource,
    q_learning::{find_tactic, policy::build_rng},
    tictactoe::{Board, Player},
};

/// 0-based cell index as the 1-9 text a human would type.
fn as_request(position: usize) -> String {
    (position + 1).to_string()
}

/// Replays a fixed list of raw requests, invalid ones included.
#[derive(Debug, Clone)]
pub struct ScriptedMoves {
    queue: VecDeque<String>,
}

impl ScriptedMoves {
    pub fn new<I, S>(requests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: requests.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl MoveSource for ScriptedMoves {
    fn request_move(&mut self, _board: &Board) -> Result<String> {
        self.queue.pop_front().ok_or(Error::InputExhausted)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Plays a uniformly random empty cell.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: build_rng(seed),
        }
    }
}

impl MoveSource for RandomOpponent {
    fn request_move(&mut self, board: &Board) -> Result<String> {
        let moves = board.available_moves();
        let position = moves.choose(&mut self.rng).ok_or(Error::NoValidMoves)?;
        Ok(as_request(*position))
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Wins when it can, blocks when it must, otherwise plays randomly.
#[derive(Debug, Clone)]
pub struct TacticalOpponent {
    mark: Player,
    fallback: RandomOpponent,
}

impl TacticalOpponent {
    pub fn new(mark: Player, seed: Option<u64>) -> Self {
        Self {
            mark,
            fallback: RandomOpponent::new(seed),
        }
    }
}

impl MoveSource for TacticalOpponent {
    fn request_move(&mut self, board: &Board) -> Result<String> {
        match find_tactic(board, self.mark, self.mark.opponent()) {
            Some(tactic) => Ok(as_request(tactic.position())),
            None => self.fallback.request_move(board),
        }
    }

    fn name(&self) -> &str {
        "tactical"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_moves_run_out() {
        let mut script = ScriptedMoves::new(["5", "abc"]);
        let board = Board::new();
        assert_eq!(script.request_move(&board).unwrap(), "5");
        assert_eq!(script.request_move(&board).unwrap(), "abc");
        assert!(matches!(
            script.request_move(&board),
            Err(Error::InputExhausted)
        ));
    }

    #[test]
    fn test_random_opponent_picks_empty_cells() {
        let board = Board::from_string("XOXOX.O..").unwrap();
        let mut opponent = RandomOpponent::new(Some(9));
        for _ in 0..30 {
            let request: usize = opponent.request_move(&board).unwrap().parse().unwrap();
            assert!(board.is_empty(request - 1));
        }
    }

    #[test]
    fn test_tactical_opponent_blocks() {
        // O O .
        // X . .
        // . . .
        let board = Board::from_string("OO.X.....").unwrap();
        let mut opponent = TacticalOpponent::new(Player::X, Some(1));
        assert_eq!(opponent.request_move(&board).unwrap(), "3");
    }
}
