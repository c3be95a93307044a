//! Durable format for the learned table.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    game::GameOutcome,
    q_learning::q_table::QTable,
};

/// Running tally of completed games, stored next to the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub games_played: u64,
    pub agent_wins: u64,
    pub player_wins: u64,
    pub draws: u64,
}

impl PlayRecord {
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games_played += 1;
        match outcome {
            GameOutcome::AgentWin => self.agent_wins += 1,
            GameOutcome::PlayerWin => self.player_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    /// Share of games the agent did not lose, 0.0 before any game
    pub fn non_loss_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        (self.agent_wins + self.draws) as f64 / self.games_played as f64
    }
}

/// Everything persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedQTable {
    pub version: u32,
    pub table: QTable,
    pub record: PlayRecord,
}

impl SavedQTable {
    pub const VERSION: u32 = 1;

    /// A fresh, empty table
    pub fn new() -> Self {
        Self::from_parts(QTable::new(), PlayRecord::default())
    }

    pub fn from_parts(table: QTable, record: PlayRecord) -> Self {
        Self {
            version: Self::VERSION,
            table,
            record,
        }
    }

    /// Encode as MessagePack.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        rmp_serde::to_vec(self).map_err(|e| Error::SerializationContext {
            operation: "serialize Q-table to MessagePack".to_string(),
            message: e.to_string(),
        })
    }

    /// Decode from MessagePack and check the format version.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let saved: SavedQTable =
            rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
                operation: "deserialize Q-table from MessagePack".to_string(),
                message: e.to_string(),
            })?;
        if saved.version != Self::VERSION {
            return Err(Error::UnsupportedVersion {
                found: saved.version,
                expected: Self::VERSION,
            });
        }
        Ok(saved)
    }
}

impl Default for SavedQTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StateKey;

    #[test]
    fn test_bytes_roundtrip_preserves_exact_values() {
        let mut table = QTable::new();
        let a = StateKey::parse("X........").unwrap();
        let b = StateKey::parse("X...O....").unwrap();
        table.update(&a, 4, 0.2, &b);
        table.update(&b, 8, -1.0 / 3.0, &a);
        let mut record = PlayRecord::default();
        record.record(GameOutcome::Draw);

        let saved = SavedQTable::from_parts(table, record);
        let restored = SavedQTable::from_bytes(&saved.to_bytes().unwrap()).unwrap();

        assert_eq!(restored, saved);
        assert_eq!(restored.table.get(&b, 8), saved.table.get(&b, 8));
    }

    #[test]
    fn test_rejects_future_version() {
        let mut saved = SavedQTable::new();
        saved.version = SavedQTable::VERSION + 1;
        let bytes = saved.to_bytes().unwrap();

        let err = SavedQTable::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, Error::UnsupportedVersion { found: 2, .. }));
    }

    #[test]
    fn test_garbage_is_a_serialization_error() {
        let err = SavedQTable::from_bytes(b"not a table").unwrap_err();
        assert!(matches!(err, Error::SerializationContext { .. }));
    }

    #[test]
    fn test_record_tallies_outcomes() {
        let mut record = PlayRecord::default();
        record.record(GameOutcome::AgentWin);
        record.record(GameOutcome::PlayerWin);
        record.record(GameOutcome::Draw);
        record.record(GameOutcome::Draw);

        assert_eq!(record.games_played, 4);
        assert_eq!(record.agent_wins, 1);
        assert_eq!(record.player_wins, 1);
        assert_eq!(record.draws, 2);
        assert_eq!(record.non_loss_rate(), 0.75);
    }
}
