//! Targeting resolver.
//!
//! Builds the valid candidate set for an action and applies the fallback
//! chain over the actor's request. The chain guarantees that an action with
//! at least one valid target never silently no-ops because the client
//! submitted a stale or invalid target list.

use crate::env::{ActionDefinition, RngSource, pick};
use crate::state::{MatchState, PlannedAction, PlayerCharacter, PlayerId};

/// Narrowing options for candidate collection.
pub struct TargetOptions<'a> {
    /// Keep a candidate only if the predicate holds (e.g. exclude protected).
    pub filter: Option<&'a dyn Fn(&PlayerCharacter) -> bool>,
    /// When false, the resolved list is collapsed to one candidate.
    pub allow_multiple: bool,
}

impl Default for TargetOptions<'_> {
    fn default() -> Self {
        Self {
            filter: None,
            allow_multiple: true,
        }
    }
}

impl<'a> TargetOptions<'a> {
    pub fn single() -> Self {
        Self {
            filter: None,
            allow_multiple: false,
        }
    }

    pub fn with_filter(mut self, filter: &'a dyn Fn(&PlayerCharacter) -> bool) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// Resolves the ordered, deduplicated list of targets for an actor's plan.
///
/// Candidates are every *other* living character standing within one of the
/// action's allowed range distances of the actor. Selection order, first
/// non-empty rule wins:
///
/// 1. The actor's requested target players, in request order, restricted to
///    valid candidates. If the first requested id is invalid the whole
///    priority list is discarded and a uniformly random candidate is chosen
///    instead.
/// 2. Any candidate standing exactly on the requested target location.
/// 3. Any candidate on the actor's own tile.
/// 4. All candidates.
pub fn collect_targets(
    state: &MatchState,
    actor_id: &PlayerId,
    def: &ActionDefinition,
    plan: &PlannedAction,
    options: &TargetOptions<'_>,
    rng: &mut dyn RngSource,
) -> Vec<PlayerId> {
    let Some(actor) = state.character(actor_id) else {
        return Vec::new();
    };
    let Some(actor_position) = actor.position.as_ref() else {
        return Vec::new();
    };

    let candidates: Vec<&PlayerCharacter> = state
        .roster
        .iter()
        .filter(|id| *id != actor_id)
        .filter_map(|id| state.character(id))
        .filter(|c| !c.is_dead())
        .filter(|c| {
            c.position
                .as_ref()
                .is_some_and(|p| def.allows_distance(actor_position.coord.distance(&p.coord)))
        })
        .filter(|c| options.filter.map_or(true, |f| f(c)))
        .collect();

    if candidates.is_empty() {
        return Vec::new();
    }

    let mut selected = select_requested(&candidates, plan, rng)
        .or_else(|| select_at_location(&candidates, plan))
        .or_else(|| select_same_tile(&candidates, actor_position.coord))
        .unwrap_or_else(|| candidates.iter().map(|c| c.id.clone()).collect());

    if !options.allow_multiple && selected.len() > 1 {
        let chosen = selected[rng.pick_index(selected.len())].clone();
        selected = vec![chosen];
    }
    selected
}

/// Rule 1: the requested priority list.
fn select_requested(
    candidates: &[&PlayerCharacter],
    plan: &PlannedAction,
    rng: &mut dyn RngSource,
) -> Option<Vec<PlayerId>> {
    let first = plan.target_players.first()?;
    let is_valid = |id: &PlayerId| candidates.iter().any(|c| &c.id == id);

    if !is_valid(first) {
        // A stale lead target invalidates the whole request.
        return pick(rng, candidates).map(|c| vec![c.id.clone()]);
    }

    let mut chosen = Vec::new();
    for id in &plan.target_players {
        if is_valid(id) && !chosen.contains(id) {
            chosen.push(id.clone());
        }
    }
    Some(chosen)
}

/// Rule 2: candidates standing on the requested location.
fn select_at_location(
    candidates: &[&PlayerCharacter],
    plan: &PlannedAction,
) -> Option<Vec<PlayerId>> {
    let location = plan.target_location.as_ref()?;
    let on_tile: Vec<PlayerId> = candidates
        .iter()
        .filter(|c| {
            c.position
                .as_ref()
                .is_some_and(|p| &p.tile_id == location)
        })
        .map(|c| c.id.clone())
        .collect();
    (!on_tile.is_empty()).then_some(on_tile)
}

/// Rule 3: candidates sharing the actor's tile.
fn select_same_tile(
    candidates: &[&PlayerCharacter],
    actor_coord: crate::state::AxialCoord,
) -> Option<Vec<PlayerId>> {
    let same_tile: Vec<PlayerId> = candidates
        .iter()
        .filter(|c| {
            c.position
                .as_ref()
                .is_some_and(|p| p.coord.distance(&actor_coord) == 0)
        })
        .map(|c| c.id.clone())
        .collect();
    (!same_tile.is_empty()).then_some(same_tile)
}
