//! Reward shaping constants

use crate::{
    tictactoe::{CENTER, CORNERS},
    types::ActionIndex,
};

/// Immediate reward for taking the center.
pub const CENTER_REWARD: f64 = 0.2;

/// Immediate reward for taking a corner.
pub const CORNER_REWARD: f64 = 0.1;

/// Immediate reward for taking an edge.
pub const EDGE_REWARD: f64 = -0.1;

/// Terminal reward applied to every agent move after an agent win.
pub const WIN_REWARD: f64 = 1.0;

/// Terminal reward applied to every agent move after a draw.
pub const DRAW_REWARD: f64 = 0.0;

/// Per-step decay of the loss penalty, walking back from the last agent move.
pub const LOSS_DECAY: f64 = 0.8;

/// Shaping reward granted the moment the agent plays `position`.
pub fn position_reward(position: ActionIndex) -> f64 {
    if position == CENTER {
        CENTER_REWARD
    } else if CORNERS.contains(&position) {
        CORNER_REWARD
    } else {
        EDGE_REWARD
    }
}

/// Penalty for the agent move `steps_back` moves before its last one:
/// `-(0.8^steps_back)`.
pub fn loss_penalty(steps_back: usize) -> f64 {
    let exponent = i32::try_from(steps_back).unwrap_or(i32::MAX);
    -LOSS_DECAY.powi(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_rewards() {
        assert_eq!(position_reward(4), 0.2);
        for corner in [0, 2, 6, 8] {
            assert_eq!(position_reward(corner), 0.1);
        }
        for edge in [1, 3, 5, 7] {
            assert_eq!(position_reward(edge), -0.1);
        }
    }

    #[test]
    fn test_loss_penalty_decays() {
        assert_eq!(loss_penalty(0), -1.0);
        assert_eq!(loss_penalty(1), -0.8);
        assert!((loss_penalty(2) + 0.64).abs() < 1e-12);
        assert!(loss_penalty(3) > loss_penalty(2));
    }
}
