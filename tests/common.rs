//! Shared fixtures for the brainy integration tests.

#![allow(dead_code)]

use std::time::Duration;

use brainy::{
    Result,
    adapters::{InMemoryRepository, RandomOpponent, SilentRenderer},
    app::{App, GameConfig},
    game::{EpisodeReport, GameLoop},
    ports::MoveSource,
    tictactoe::{Board, Player},
};

/// Game value for `me` with `to_move` on turn, under perfect play from both
/// sides: 1 win, 0 draw, -1 loss.
fn minimax(board: &Board, to_move: Player, me: Player) -> i32 {
    if board.has_won(me) {
        return 1;
    }
    if board.has_won(me.opponent()) {
        return -1;
    }
    if board.is_full() {
        return 0;
    }

    let scores = board.available_moves().into_iter().map(|position| {
        let next = board.place(position, to_move).unwrap();
        minimax(&next, to_move.opponent(), me)
    });
    if to_move == me {
        scores.max().unwrap()
    } else {
        scores.min().unwrap()
    }
}

/// Never loses and punishes every mistake; opens in the top-left corner.
pub struct PerfectPlayer {
    mark: Player,
}

impl PerfectPlayer {
    pub fn new(mark: Player) -> Self {
        Self { mark }
    }

    fn best_move(&self, board: &Board) -> usize {
        if board.occupied_count() == 0 {
            return 0;
        }
        let mut best = None;
        for position in board.available_moves() {
            let next = board.place(position, self.mark).unwrap();
            let score = minimax(&next, self.mark.opponent(), self.mark);
            match best {
                Some((_, best_score)) if best_score >= score => {}
                _ => best = Some((position, score)),
            }
        }
        best.unwrap().0
    }
}

impl MoveSource for PerfectPlayer {
    fn request_move(&mut self, board: &Board) -> Result<String> {
        Ok((self.best_move(board) + 1).to_string())
    }

    fn name(&self) -> &str {
        "perfect"
    }
}

pub fn test_config() -> GameConfig {
    GameConfig::default().with_think_delay(Duration::ZERO)
}

pub fn in_memory_app(seed: u64) -> App {
    App::for_testing()
        .with_repository(InMemoryRepository::new())
        .with_seed(seed)
        .build()
        .unwrap()
}

/// Play one fresh-table episode per seed until `wanted` comes up.
pub fn first_episode_where(
    seeds: std::ops::Range<u64>,
    mut opponent: impl FnMut(u64) -> Box<dyn MoveSource>,
    wanted: impl Fn(&EpisodeReport) -> bool,
) -> Option<(brainy::SavedQTable, EpisodeReport)> {
    for seed in seeds {
        let app = in_memory_app(seed);
        let mut saved = app.load_table().unwrap();
        let mut agent = app.create_agent();
        let mut log = app.detached_event_log();
        let mut source = opponent(seed);

        let report = GameLoop::new(&mut saved, &mut agent, &mut log)
            .play_episode(source.as_mut(), &mut SilentRenderer)
            .unwrap();
        if wanted(&report) {
            return Some((saved, report));
        }
    }
    None
}

pub fn random_human(seed: u64) -> Box<dyn MoveSource> {
    Box::new(RandomOpponent::new(Some(seed.wrapping_mul(31).wrapping_add(7))))
}
