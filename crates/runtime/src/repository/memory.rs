//! In-memory repository implementations.
//!
//! The production deployment backs these traits with the real document
//! store; the in-memory variants serve tests and local play with the same
//! optimistic-concurrency behavior.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use longnight_core::{MatchId, MatchState};

use super::{MatchRepository, ReplayRepository, RepositoryError, Version};
use crate::replay::ReplayRecord;

#[derive(Default)]
pub struct InMemoryMatchRepo {
    records: Mutex<HashMap<MatchId, (MatchState, Version)>>,
}

impl InMemoryMatchRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchRepository for InMemoryMatchRepo {
    fn create(&self, state: MatchState) -> Version {
        let mut records = self.records.lock().expect("repo lock");
        let version = 1;
        records.insert(state.id.clone(), (state, version));
        version
    }

    fn read(&self, id: &MatchId) -> Option<(MatchState, Version)> {
        let records = self.records.lock().expect("repo lock");
        records.get(id).cloned()
    }

    fn write(&self, state: MatchState, version: Version) -> Result<Version, RepositoryError> {
        let mut records = self.records.lock().expect("repo lock");
        let Some((_, stored)) = records.get(&state.id) else {
            return Err(RepositoryError::MatchNotFound(state.id.clone()));
        };
        if *stored != version {
            return Err(RepositoryError::Conflict {
                id: state.id.clone(),
                submitted: version,
                stored: *stored,
            });
        }
        let next = version + 1;
        records.insert(state.id.clone(), (state, next));
        Ok(next)
    }
}

#[derive(Default)]
pub struct InMemoryReplayRepo {
    records: Mutex<BTreeMap<(MatchId, u32), ReplayRecord>>,
}

impl InMemoryReplayRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplayRepository for InMemoryReplayRepo {
    fn append(&self, record: ReplayRecord) -> Result<(), RepositoryError> {
        let mut records = self.records.lock().expect("repo lock");
        let key = (record.match_id.clone(), record.turn);
        if records.contains_key(&key) {
            return Err(RepositoryError::DuplicateReplay {
                match_id: record.match_id,
                turn: record.turn,
            });
        }
        records.insert(key, record);
        Ok(())
    }

    fn load(&self, match_id: &MatchId, turn: u32) -> Option<ReplayRecord> {
        let records = self.records.lock().expect("repo lock");
        records.get(&(match_id.clone(), turn)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use longnight_core::{MapSnapshot, MatchSettings};

    fn state(id: &str) -> MatchState {
        MatchState::new(
            MatchId::from(id),
            MapSnapshot::default(),
            MatchSettings::default(),
        )
    }

    #[test]
    fn stale_version_is_rejected() {
        let repo = InMemoryMatchRepo::new();
        let v1 = repo.create(state("m1"));

        let (read_back, version) = repo.read(&MatchId::from("m1")).unwrap();
        assert_eq!(version, v1);

        let v2 = repo.write(read_back.clone(), version).unwrap();
        assert!(v2 > v1);

        // A second writer holding the old token loses.
        let err = repo.write(read_back, version).unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict { .. }));
    }

    #[test]
    fn replay_appends_reject_duplicates() {
        let repo = InMemoryReplayRepo::new();
        let record = ReplayRecord {
            match_id: MatchId::from("m1"),
            turn: 3,
            events: Vec::new(),
            created_at: 1700000000,
        };
        repo.append(record.clone()).unwrap();
        assert!(matches!(
            repo.append(record),
            Err(RepositoryError::DuplicateReplay { .. })
        ));
        assert!(repo.load(&MatchId::from("m1"), 3).is_some());
        assert!(repo.load(&MatchId::from("m1"), 4).is_none());
    }
}
