//! Persisted replay records.

use longnight_core::{MatchId, ReplayEvent};

/// The stored shape of one resolved turn's event log.
///
/// Keyed externally by `(turn, match_id)` and must round-trip byte-for-byte
/// through JSON: clients re-fetch records long after they were written.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReplayRecord {
    pub match_id: MatchId,
    pub turn: u32,
    pub events: Vec<ReplayEvent>,
    /// Unix timestamp of the moment the record was written.
    pub created_at: i64,
}

impl ReplayRecord {
    pub fn new(match_id: MatchId, turn: u32, events: Vec<ReplayEvent>) -> Self {
        Self {
            match_id,
            turn,
            events,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}
