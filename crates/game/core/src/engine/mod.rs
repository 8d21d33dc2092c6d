//! Turn orchestrator.
//!
//! One call per logical turn: fills bot plans, dispatches every catalog
//! action in `(order, sub_order)` order, advances the turn counter, and
//! recomputes readiness. The caller owns at-most-once invocation per turn;
//! calling twice double-advances state.

use tracing::{debug, info};

use crate::action::{ResolveCx, dispatch_action};
use crate::bot;
use crate::env::{ActionCatalog, LocationCatalog, RngSource};
use crate::replay::ReplayEvent;
use crate::state::MatchState;

/// Errors from turn resolution. Normal game-logic dead ends (no target, no
/// item, on cooldown) are not errors; this enum is for conditions the caller
/// must not ignore.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("match {0} has no players")]
    EmptyRoster(crate::state::MatchId),
    #[error("action {0} is missing from the catalog")]
    UnknownAction(crate::env::ActionKind),
}

/// Result of one resolution pass.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnOutcome {
    /// False when the match was already removed and nothing happened.
    pub advanced: bool,
    /// The turn that was resolved (pre-increment), when one was.
    pub resolved_turn: Option<u32>,
    pub events: Vec<ReplayEvent>,
}

impl TurnOutcome {
    fn skipped() -> Self {
        Self {
            advanced: false,
            resolved_turn: None,
            events: Vec::new(),
        }
    }
}

/// The engine borrows the static catalogs; match state and randomness are
/// injected per call, so one engine serves any number of matches.
pub struct TurnEngine<'a> {
    catalog: &'a ActionCatalog,
    locations: &'a LocationCatalog,
}

impl<'a> TurnEngine<'a> {
    pub fn new(catalog: &'a ActionCatalog, locations: &'a LocationCatalog) -> Self {
        Self { catalog, locations }
    }

    pub fn catalog(&self) -> &ActionCatalog {
        self.catalog
    }

    /// Resolves the current turn in place.
    ///
    /// Steps: bot planning, per-action dispatch in catalog order, turn
    /// increment, readiness bookkeeping, and game-end detection. Events are
    /// returned in dispatch order; the caller persists and broadcasts them.
    pub fn resolve_turn(
        &self,
        state: &mut MatchState,
        rng: &mut dyn RngSource,
    ) -> Result<TurnOutcome, EngineError> {
        if state.removed {
            debug!(match_id = %state.id, "match removed, skipping resolution");
            return Ok(TurnOutcome::skipped());
        }
        if state.roster.is_empty() {
            return Err(EngineError::EmptyRoster(state.id.clone()));
        }

        self.plan_bots(state, rng);

        let resolved_turn = state.current_turn;
        let mut events = Vec::new();
        for kind in self.catalog.dispatch_order() {
            let def = self
                .catalog
                .get(kind)
                .ok_or(EngineError::UnknownAction(kind))?;
            let mut cx = ResolveCx {
                state: &mut *state,
                catalog: self.catalog,
                locations: self.locations,
                rng: &mut *rng,
                turn: resolved_turn,
                def,
            };
            events.extend(dispatch_action(&mut cx, kind));
        }

        state.current_turn += 1;
        self.reset_readiness(state);

        if state.living_count() <= 1 {
            state.removed = true;
            info!(match_id = %state.id, turn = resolved_turn, "match ended");
        }
        info!(
            match_id = %state.id,
            turn = resolved_turn,
            events = events.len(),
            "turn resolved"
        );

        Ok(TurnOutcome {
            advanced: true,
            resolved_turn: Some(resolved_turn),
            events,
        })
    }

    /// Fills the main plan slot of every bot-controlled character. Human
    /// submissions are never touched.
    fn plan_bots(&self, state: &mut MatchState, rng: &mut dyn RngSource) {
        for id in state.roster.clone() {
            if !id.is_bot() {
                continue;
            }
            let incapacitated = state
                .character(&id)
                .is_none_or(|c| c.is_incapacitated());
            if incapacitated {
                continue;
            }
            let plan = bot::choose_plan(state, &id, self.catalog, self.locations, rng);
            if let Some(character) = state.character_mut(&id) {
                debug!(bot = %id, plan = ?plan.as_ref().map(|p| p.action), "bot plan chosen");
                character.plan.main = plan;
                character.plan.secondary = None;
            }
        }
    }

    /// A player is not ready for the next turn unless incapacitated, in
    /// which case it is pre-marked ready so resolution never waits on a
    /// downed player.
    fn reset_readiness(&self, state: &mut MatchState) {
        let ready = state
            .roster
            .iter()
            .map(|id| {
                let incapacitated = state
                    .character(id)
                    .is_some_and(|c| c.is_incapacitated());
                (id.clone(), incapacitated)
            })
            .collect();
        state.ready = ready;
    }
}
