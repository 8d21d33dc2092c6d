//! Repository contracts for match records and replay records.

use longnight_core::{MatchId, MatchState};

use super::RepositoryError;
use crate::replay::ReplayRecord;

/// Opaque version token handed out with every read and checked on write.
pub type Version = u64;

/// Persistence of match records with optimistic concurrency.
pub trait MatchRepository: Send + Sync {
    /// Inserts a new record and returns its initial version.
    fn create(&self, state: MatchState) -> Version;

    /// Reads the latest record and its version token, or `None`.
    fn read(&self, id: &MatchId) -> Option<(MatchState, Version)>;

    /// Writes a record if `version` still matches the stored version.
    /// Returns the new version, or [`RepositoryError::Conflict`].
    fn write(&self, state: MatchState, version: Version) -> Result<Version, RepositoryError>;
}

/// Append-only store of per-turn replay records, keyed by `(match, turn)`.
pub trait ReplayRepository: Send + Sync {
    /// Appends a record. A second append for the same key is rejected: one
    /// logical turn resolves at most once.
    fn append(&self, record: ReplayRecord) -> Result<(), RepositoryError>;

    fn load(&self, match_id: &MatchId, turn: u32) -> Option<ReplayRecord>;
}
