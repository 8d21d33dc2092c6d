//! Bot decision engine.
//!
//! For each bot-controlled character the engine synthesizes one feasible
//! candidate plan per catalog action, weights the candidates from the static
//! tag tables plus per-action feasibility multipliers, and draws one by
//! weighted random selection. No candidate with positive weight means the
//! bot sits the turn out.

mod weights;

pub use weights::{base_weight, personality_multiplier};

use tracing::debug;

use crate::env::{
    ActionCatalog, ActionDefinition, ActionKind, LocationCatalog, RngSource, pick, weighted_index,
};
use crate::state::{ItemKind, MatchState, PlannedAction, PlayerCharacter, PlayerId};

/// Behavioral archetypes, assigned by rotating through this list with the
/// bot's ordinal: `bot<N>` gets `ROTATION[N % 4]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Personality {
    Safe,
    Aggressive,
    Hoarder,
    Random,
}

const ROTATION: [Personality; 4] = [
    Personality::Safe,
    Personality::Aggressive,
    Personality::Hoarder,
    Personality::Random,
];

impl Personality {
    pub fn for_bot(index: u32) -> Self {
        ROTATION[(index as usize) % ROTATION.len()]
    }
}

struct Candidate {
    plan: PlannedAction,
    weight: f64,
}

/// Chooses the bot's main plan for this turn, or `None` to skip the turn.
///
/// Deterministic for a fixed match snapshot and RNG seed: candidates are
/// built in catalog dispatch order and every random draw flows through the
/// injected source.
pub fn choose_plan(
    state: &MatchState,
    actor_id: &PlayerId,
    catalog: &ActionCatalog,
    locations: &LocationCatalog,
    rng: &mut dyn RngSource,
) -> Option<PlannedAction> {
    let actor = state.character(actor_id)?;
    let personality = Personality::for_bot(actor_id.bot_index()?);

    let mut candidates = Vec::new();
    for kind in catalog.dispatch_order() {
        let Some(def) = catalog.get(kind) else {
            continue;
        };
        if !def.developed
            || actor.cooldown_active(kind, state.current_turn)
            || actor.energy.available() < def.energy_cost
        {
            continue;
        }
        let Some((plan, feasibility)) = build_candidate(state, actor, def, locations, rng) else {
            continue;
        };

        let tag_weight: f64 = def
            .tags
            .iter()
            .map(|&tag| base_weight(tag) * personality_multiplier(personality, tag))
            .product();
        let weight = tag_weight * feasibility;
        if weight > 0.0 {
            candidates.push(Candidate { plan, weight });
        }
    }

    let weights: Vec<f64> = candidates.iter().map(|c| c.weight).collect();
    let chosen = weighted_index(rng, &weights).map(|i| candidates.swap_remove(i).plan);
    debug!(
        bot = %actor_id,
        personality = ?personality,
        chosen = ?chosen.as_ref().map(|p| p.action),
        "bot decision"
    );
    chosen
}

/// Synthesizes a concrete plan for one action if its precondition holds.
/// Returns the plan and a feasibility multiplier layered onto the tag
/// weight.
fn build_candidate(
    state: &MatchState,
    actor: &PlayerCharacter,
    def: &ActionDefinition,
    locations: &LocationCatalog,
    rng: &mut dyn RngSource,
) -> Option<(PlannedAction, f64)> {
    let position = actor.position.as_ref()?;

    match def.kind {
        ActionKind::Move => {
            let neighbors = state.map.walkable_neighbors(position.coord);
            let tile = pick(rng, &neighbors)?;
            Some((PlannedAction::new(def.kind).at(tile.id.clone()), 1.0))
        }
        ActionKind::Punch | ActionKind::AxeAttack | ActionKind::KnifeAttack => {
            match def.kind {
                ActionKind::AxeAttack if !actor.inventory.has(ItemKind::Axe) => return None,
                ActionKind::KnifeAttack if !actor.inventory.has(ItemKind::Knife) => return None,
                _ => {}
            }
            let targets = same_tile_targets(state, actor);
            let target = pick(rng, &targets)?.clone();
            // More visible prey makes a fight more attractive.
            let feasibility = targets.len() as f64;
            Some((PlannedAction::new(def.kind).against(target), feasibility))
        }
        ActionKind::Protect => Some((PlannedAction::new(def.kind), 1.0)),
        ActionKind::Scare => {
            let victims: Vec<PlayerId> = state
                .roster
                .iter()
                .filter(|id| *id != &actor.id)
                .filter_map(|id| state.character(id))
                .filter(|c| !c.is_dead() && !c.is_protected())
                .filter(|c| {
                    c.position
                        .as_ref()
                        .is_some_and(|p| def.allows_distance(position.coord.distance(&p.coord)))
                })
                .map(|c| c.id.clone())
                .collect();
            let victim = pick(rng, &victims)?.clone();
            let neighbors = state.map.walkable_neighbors(position.coord);
            let destination = pick(rng, &neighbors)?;
            Some((
                PlannedAction::new(def.kind)
                    .against(victim)
                    .at(destination.id.clone()),
                1.0,
            ))
        }
        ActionKind::Sleep | ActionKind::Recover | ActionKind::UseBandage => {
            if def.kind == ActionKind::UseBandage && !actor.inventory.has(ItemKind::Bandage) {
                return None;
            }
            if def.kind == ActionKind::Recover {
                let on_eligible_tile = state
                    .map
                    .tile(&position.tile_id)
                    .is_some_and(|t| locations.allows_action(t.location, def.kind));
                if !on_eligible_tile {
                    return None;
                }
            }
            let deficit = actor.health.deficit();
            if deficit == 0 {
                return None;
            }
            let feasibility = 1.0 + 2.0 * deficit as f64 / actor.health.maximum.max(1) as f64;
            Some((PlannedAction::new(def.kind), feasibility))
        }
        ActionKind::Feed => {
            if !actor.inventory.has(ItemKind::Food) && !actor.inventory.has(ItemKind::Drink) {
                return None;
            }
            let deficit = actor.energy.deficit();
            if deficit == 0 {
                return None;
            }
            let feasibility = 1.0 + 2.0 * deficit as f64 / actor.energy.maximum.max(1) as f64;
            Some((PlannedAction::new(def.kind), feasibility))
        }
        ActionKind::Focus => {
            let feasibility =
                1.0 + actor.energy.deficit() as f64 / actor.energy.maximum.max(1) as f64;
            Some((PlannedAction::new(def.kind), feasibility))
        }
        ActionKind::Search => {
            let tile = state.map.tile(&position.tile_id)?;
            let undiscovered = tile
                .item_ids
                .iter()
                .filter(|id| !actor.found_items.contains(*id))
                .count();
            (undiscovered > 0).then(|| (PlannedAction::new(def.kind), 1.0))
        }
        ActionKind::PickUp => {
            let tile = state.map.tile(&position.tile_id)?;
            let discovered = tile
                .item_ids
                .iter()
                .filter(|id| actor.found_items.contains(*id))
                .count();
            (discovered > 0).then(|| (PlannedAction::new(def.kind), 1.0))
        }
    }
}

fn same_tile_targets(state: &MatchState, actor: &PlayerCharacter) -> Vec<PlayerId> {
    let Some(position) = actor.position.as_ref() else {
        return Vec::new();
    };
    state
        .roster
        .iter()
        .filter(|id| *id != &actor.id)
        .filter_map(|id| state.character(id))
        .filter(|c| !c.is_dead())
        .filter(|c| {
            c.position
                .as_ref()
                .is_some_and(|p| p.coord.distance(&position.coord) == 0)
        })
        .map(|c| c.id.clone())
        .collect()
}
