//! Repository error taxonomy.

use longnight_core::MatchId;

use super::Version;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("match {0} not found")]
    MatchNotFound(MatchId),

    /// The optimistic-concurrency contract: a write whose version token does
    /// not match the latest stored version is rejected. The caller decides
    /// whether to re-fetch and recompute or surface the conflict; nothing
    /// retries automatically.
    #[error("version conflict on match {id}: submitted {submitted}, stored {stored}")]
    Conflict {
        id: MatchId,
        submitted: Version,
        stored: Version,
    },

    #[error("replay for match {match_id} turn {turn} already recorded")]
    DuplicateReplay { match_id: MatchId, turn: u32 },
}
