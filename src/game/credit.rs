//! Propagating a finished game's result back onto the agent's moves

use crate::{
    event_log::EventLog,
    game::{EpisodeMemory, GameOutcome},
    q_learning::{
        QTable, TdUpdate,
        rewards::{DRAW_REWARD, WIN_REWARD, loss_penalty},
    },
    types::StateKey,
};

pub(crate) fn log_update(log: &mut EventLog, step: &TdUpdate) {
    log.log_event(format!(
        "Updated Q[{}] → {:.3} (was {:.3}, r={:+.2})",
        step.action, step.updated, step.previous, step.reward
    ));
}

/// Apply the terminal reward for `outcome` to every move in `memory`, using
/// `final_state` as the next state of each update.
///
/// - Player win: newest move first, penalties `-0.8^i` for `i = 0, 1, ...`
/// - Agent win: `+1` to every move, oldest first
/// - Draw: `0` to every move, oldest first
///
/// These updates stack on top of the shaping update each move already got
/// when it was played.
pub fn assign_credit(
    table: &mut QTable,
    memory: &EpisodeMemory,
    outcome: GameOutcome,
    final_state: &StateKey,
    log: &mut EventLog,
) -> Vec<TdUpdate> {
    let mut updates = Vec::with_capacity(memory.len());

    match outcome {
        GameOutcome::PlayerWin => {
            log.log_event("AI lost this game, learning from loss.");
            for (i, (state, action)) in memory.iter().rev().enumerate() {
                let penalty = loss_penalty(i);
                let step = table.update(state, *action, penalty, final_state);
                log_update(log, &step);
                log.log_event(format!(
                    "Learning from loss: penalized move {action} with {penalty:.3}"
                ));
                updates.push(step);
            }
        }
        GameOutcome::AgentWin | GameOutcome::Draw => {
            let reward = if outcome == GameOutcome::AgentWin {
                log.log_event("AI won this game, reinforcing every move.");
                WIN_REWARD
            } else {
                log.log_event("Draw, settling every move toward neutral.");
                DRAW_REWARD
            };
            for (state, action) in memory.iter() {
                let step = table.update(state, *action, reward, final_state);
                log_update(log, &step);
                updates.push(step);
            }
        }
    }

    updates
}
