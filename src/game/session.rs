//! One interactive episode: human and agent alternate until a terminal state.

use crate::{
    Result,
    app::App,
    event_log::EventLog,
    game::{EpisodeMemory, GameOutcome, assign_credit, credit::log_update},
    ports::{MoveSource, Renderer},
    q_learning::{SavedQTable, TacticalAgent, position_reward},
    tictactoe::{BOARD_CELLS, Board, LineAnalyzer, Player},
    types::{ActionIndex, StateKey},
};

/// Where the current episode stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingPlayerMove,
    PlayerMoved,
    AgentMoved,
    Finished(GameOutcome),
}

/// Summary of a finished episode.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeReport {
    pub outcome: GameOutcome,
    pub final_board: Board,
    /// The agent's (state, action) pairs, oldest first
    pub agent_moves: Vec<(StateKey, ActionIndex)>,
    /// Move requests discarded as unparsable, out of range or occupied
    pub rejected_inputs: usize,
    /// Whether the table reached durable storage after this game
    pub saved: bool,
}

/// Parse a 1-9 move request into an empty cell index.
///
/// Returns `None` for anything that is not a number, falls outside 1-9 or
/// names an occupied cell.
pub fn parse_move(raw: &str, board: &Board) -> Option<ActionIndex> {
    let position = raw.trim().parse::<usize>().ok()?.checked_sub(1)?;
    (position < BOARD_CELLS && board.is_empty(position)).then_some(position)
}

/// Drives episodes against a borrowed table, agent and brain log.
///
/// The human side moves first. Each agent move gets its shaping update as
/// soon as it is played; the terminal pass runs once the game is decided,
/// followed by a save when an [`App`] is attached.
pub struct GameLoop<'a> {
    saved: &'a mut SavedQTable,
    agent: &'a mut TacticalAgent,
    log: &'a mut EventLog,
    human: Player,
    app: Option<&'a App>,
    phase: Phase,
}

impl<'a> GameLoop<'a> {
    pub fn new(
        saved: &'a mut SavedQTable,
        agent: &'a mut TacticalAgent,
        log: &'a mut EventLog,
    ) -> Self {
        let human = agent.mark().opponent();
        Self {
            saved,
            agent,
            log,
            human,
            app: None,
            phase: Phase::AwaitingPlayerMove,
        }
    }

    /// Save through `app` after every completed game.
    pub fn persist_with(mut self, app: &'a App) -> Self {
        self.app = Some(app);
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Play one game from an empty board to a terminal state.
    ///
    /// Invalid move requests are discarded and the board is redrawn before
    /// asking again. Errors from the move source or renderer end the episode
    /// without touching storage.
    pub fn play_episode(
        &mut self,
        player: &mut dyn MoveSource,
        renderer: &mut dyn Renderer,
    ) -> Result<EpisodeReport> {
        let mut board = Board::new();
        let mut memory = EpisodeMemory::new();
        let mut rejected_inputs = 0;
        let agent_mark = self.agent.mark();

        self.phase = Phase::AwaitingPlayerMove;
        self.log.log_event("New game started.");

        let outcome = loop {
            renderer.render(&board, self.log.recent())?;
            let raw = player.request_move(&board)?;
            let Some(position) = parse_move(&raw, &board) else {
                rejected_inputs += 1;
                log::debug!("discarded move request {raw:?} from {}", player.name());
                continue;
            };

            board = board.place(position, self.human)?;
            self.phase = Phase::PlayerMoved;
            if board.has_won(self.human) {
                break GameOutcome::PlayerWin;
            }
            if board.is_full() {
                break GameOutcome::Draw;
            }

            let old_state = board.state_key();
            let chosen = self
                .agent
                .select_move(&board, &self.saved.table, self.log)?;
            board = board.place(chosen.position, agent_mark)?;
            let new_state = board.state_key();

            let step = self.saved.table.update(
                &old_state,
                chosen.position,
                position_reward(chosen.position),
                &new_state,
            );
            log_update(self.log, &step);
            memory.record(old_state, chosen.position);
            self.phase = Phase::AgentMoved;

            if board.has_won(agent_mark) {
                break GameOutcome::AgentWin;
            }
            if board.is_full() {
                break GameOutcome::Draw;
            }
            self.phase = Phase::AwaitingPlayerMove;
        };

        self.phase = Phase::Finished(outcome);
        let winner = match outcome {
            GameOutcome::PlayerWin => Some(self.human),
            GameOutcome::AgentWin => Some(agent_mark),
            GameOutcome::Draw => None,
        };
        if let Some(mark) = winner {
            if let Some([a, b, c]) = LineAnalyzer::completed_line(&board.cells, mark) {
                self.log
                    .log_event(format!("{mark} completed the line {a}-{b}-{c}"));
            }
        }

        renderer.render(&board, self.log.recent())?;
        renderer.announce(outcome.announcement())?;

        let final_state = board.state_key();
        assign_credit(
            &mut self.saved.table,
            &memory,
            outcome,
            &final_state,
            self.log,
        );
        self.saved.record.record(outcome);

        let saved = match self.app {
            Some(app) => app.persist(self.saved, self.log),
            None => false,
        };

        log::info!(
            "episode {} finished: {:?} after {} agent moves ({} states known)",
            self.saved.record.games_played,
            outcome,
            memory.len(),
            self.saved.table.len()
        );

        Ok(EpisodeReport {
            outcome,
            final_board: board,
            agent_moves: memory.into_steps(),
            rejected_inputs,
            saved,
        })
    }
}
