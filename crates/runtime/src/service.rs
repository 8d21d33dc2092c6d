//! Turn service: the orchestration the RPC layer calls into.
//!
//! Reads a match, resolves one turn through the core, writes the mutated
//! record back, and persists the replay. On a version conflict nothing is
//! retried here: the computed mutation is discarded and the error propagates
//! so the caller can re-fetch and recompute or skip the cycle.

use tracing::warn;

use longnight_core::{
    ActionCatalog, ActionCategory, EngineError, LocationCatalog, MatchId, MatchState, PlanKey,
    PlannedAction, PlayerCharacter, PlayerId, ReplayEvent, RngSource, SpawnError, TurnEngine,
    TurnOutcome, tailor_match_for_player, tailor_replay_events,
};

use crate::replay::ReplayRecord;
use crate::repository::{MatchRepository, ReplayRepository, RepositoryError, Version};

/// Why a submitted plan was rejected before resolution.
///
/// These are hard errors surfaced to the submitting client immediately,
/// unlike resolution-time dead ends, which stay silent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("player {0} is not in this match")]
    UnknownPlayer(PlayerId),
    #[error("action {0} does not exist or is not developed")]
    UnknownAction(longnight_core::ActionKind),
    #[error("action {action} is on cooldown for {remaining} more turn(s)")]
    OnCooldown {
        action: longnight_core::ActionKind,
        remaining: u32,
    },
    #[error("action {0} cannot occupy the secondary slot")]
    WrongSlot(longnight_core::ActionKind),
    #[error("match {0} is full")]
    MatchFull(MatchId),
}

#[derive(Debug, thiserror::Error)]
pub enum TurnServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error(transparent)]
    Spawn(#[from] SpawnError),
}

/// One service instance per process; matches and randomness are per call.
pub struct TurnService<M, R> {
    matches: M,
    replays: R,
    catalog: ActionCatalog,
    locations: LocationCatalog,
}

impl<M: MatchRepository, R: ReplayRepository> TurnService<M, R> {
    pub fn new(matches: M, replays: R, catalog: ActionCatalog, locations: LocationCatalog) -> Self {
        Self {
            matches,
            replays,
            catalog,
            locations,
        }
    }

    pub fn create_match(&self, state: MatchState) -> Version {
        self.matches.create(state)
    }

    pub fn read_match(&self, id: &MatchId) -> Option<(MatchState, Version)> {
        self.matches.read(id)
    }

    /// Joins a character to a match and drops it onto a random walkable
    /// tile.
    pub fn join_match(
        &self,
        match_id: &MatchId,
        character: PlayerCharacter,
        rng: &mut dyn RngSource,
    ) -> Result<(), TurnServiceError> {
        let (mut state, version) = self
            .matches
            .read(match_id)
            .ok_or_else(|| RepositoryError::MatchNotFound(match_id.clone()))?;
        if state.roster.len() >= state.settings.max_players as usize
            && !state.roster.contains(&character.id)
        {
            return Err(SubmissionError::MatchFull(match_id.clone()).into());
        }
        let id = character.id.clone();
        state.join(character);
        state.assign_spawn(&id, rng)?;
        self.matches.write(state, version)?;
        Ok(())
    }

    /// Validates and stores one plan slot, marking the submitter ready.
    ///
    /// Submission-time checks are strict where resolution is forgiving:
    /// unknown or undeveloped actions, active cooldowns, and combat or
    /// movement actions in the secondary slot are rejected here so the
    /// client gets immediate feedback.
    pub fn submit_plan(
        &self,
        match_id: &MatchId,
        player_id: &PlayerId,
        slot: PlanKey,
        plan: PlannedAction,
    ) -> Result<(), TurnServiceError> {
        let (mut state, version) = self
            .matches
            .read(match_id)
            .ok_or_else(|| RepositoryError::MatchNotFound(match_id.clone()))?;

        let definition = self
            .catalog
            .get(plan.action)
            .filter(|d| d.developed)
            .ok_or(SubmissionError::UnknownAction(plan.action))?;
        if slot == PlanKey::Secondary
            && matches!(
                definition.category,
                ActionCategory::Combat | ActionCategory::Movement
            )
        {
            return Err(SubmissionError::WrongSlot(plan.action).into());
        }

        let current_turn = state.current_turn;
        let character = state
            .character_mut(player_id)
            .ok_or_else(|| SubmissionError::UnknownPlayer(player_id.clone()))?;
        let remaining = character.action_cooldown_remaining(plan.action, current_turn);
        if remaining > 0 {
            return Err(SubmissionError::OnCooldown {
                action: plan.action,
                remaining,
            }
            .into());
        }

        character.plan.set(slot, plan);
        state.ready.insert(player_id.clone(), true);
        self.matches.write(state, version)?;
        Ok(())
    }

    /// Resolves the match's current turn and persists record and replay.
    ///
    /// The in-memory mutation is only as good as the write that follows it:
    /// when the optimistic write loses, the mutation is dropped on the floor
    /// and the conflict propagates. Callers re-fetch and recompute, or log
    /// and skip the cycle; they must never persist the stale copy.
    pub fn resolve_current_turn(
        &self,
        match_id: &MatchId,
        rng: &mut dyn RngSource,
    ) -> Result<TurnOutcome, TurnServiceError> {
        let (mut state, version) = self
            .matches
            .read(match_id)
            .ok_or_else(|| RepositoryError::MatchNotFound(match_id.clone()))?;

        let engine = TurnEngine::new(&self.catalog, &self.locations);
        let outcome = engine.resolve_turn(&mut state, rng)?;
        if !outcome.advanced {
            return Ok(outcome);
        }

        if let Err(conflict) = self.matches.write(state, version) {
            warn!(match_id = %match_id, %conflict, "discarding resolution, write lost");
            return Err(conflict.into());
        }
        if let Some(turn) = outcome.resolved_turn {
            self.replays.append(ReplayRecord::new(
                match_id.clone(),
                turn,
                outcome.events.clone(),
            ))?;
        }
        Ok(outcome)
    }

    /// Loads a persisted replay tailored to one viewer's fog of war.
    pub fn replay_for_viewer(
        &self,
        match_id: &MatchId,
        turn: u32,
        viewer_id: &PlayerId,
    ) -> Option<Vec<ReplayEvent>> {
        let record = self.replays.load(match_id, turn)?;
        let (state, _) = self.matches.read(match_id)?;
        Some(tailor_replay_events(
            &record.events,
            viewer_id,
            &state.characters,
            state.settings.view_distance,
        ))
    }

    /// Loads the match snapshot with map and items filtered down to the
    /// viewer's personal discoveries.
    pub fn match_for_player(&self, match_id: &MatchId, viewer_id: &PlayerId) -> Option<MatchState> {
        let (state, _) = self.matches.read(match_id)?;
        Some(tailor_match_for_player(&state, viewer_id))
    }
}
