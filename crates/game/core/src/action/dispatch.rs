//! Participant collection and dispatch for one action id.

use tracing::debug;

use super::{CostTiming, EligibilityGate, Participant, ResolveCx, routine};
use crate::GameConfig;
use crate::env::ActionKind;
use crate::replay::{ActionEvent, EventEffect, FailReason, PlayerEvent, ReplayEvent};
use crate::state::{ItemKind, MatchState, PlayerId};

/// Collects every participant whose plan names `kind` and routes them
/// through the action's routine.
///
/// Ordering within the dispatch:
/// 1. split into eligible and missing per the routine's gate;
/// 2. charge energy per the routine's cost timing (exhaustion sub-events
///    first in the output);
/// 3. explicit failed events for gate-missing participants of item-gated
///    actions;
/// 4. the resolver's own events;
/// 5. cooldown bookkeeping and plan-slot clearing for every original
///    participant, eligible or not.
pub fn dispatch_action(cx: &mut ResolveCx<'_>, kind: ActionKind) -> Vec<ReplayEvent> {
    let participants = collect_participants(cx.state, kind);
    if participants.is_empty() {
        return Vec::new();
    }
    debug!(
        action = %kind,
        participants = participants.len(),
        turn = cx.turn,
        "dispatching action"
    );

    let routine = routine(kind);
    let (eligible, missing) = split_eligible(cx, &participants, routine.gate);

    let mut events = Vec::new();
    match routine.cost {
        CostTiming::CollectedList => charge_energy(cx, &participants, &mut events),
        CostTiming::EligibleOnly => charge_energy(cx, &eligible, &mut events),
    }

    if let EligibilityGate::CarriedItem(item) = routine.gate {
        for participant in &missing {
            events.push(failed_event(cx.state, participant, kind, item));
        }
    }

    if !eligible.is_empty() {
        (routine.run)(cx, &eligible, &mut events);
    }

    for participant in &participants {
        if let Some(character) = cx.state.character_mut(&participant.player) {
            character.apply_action_cooldown(kind, cx.def.cooldown, cx.turn);
            character.plan.clear(participant.plan_key);
        }
    }

    events
}

/// Scans every character's plan slots for the action, in roster order.
fn collect_participants(state: &MatchState, kind: ActionKind) -> Vec<Participant> {
    let mut participants = Vec::new();
    for id in &state.roster {
        let Some(character) = state.character(id) else {
            continue;
        };
        for (plan_key, plan) in character.plan.slots_naming(kind) {
            participants.push(Participant {
                player: id.clone(),
                plan_key,
                plan,
            });
        }
    }
    participants
}

/// Splits participants into those passing the routine's gate and the rest.
fn split_eligible(
    cx: &ResolveCx<'_>,
    participants: &[Participant],
    gate: EligibilityGate,
) -> (Vec<Participant>, Vec<Participant>) {
    let passes = |player: &PlayerId| -> bool {
        let Some(character) = cx.state.character(player) else {
            return false;
        };
        match gate {
            EligibilityGate::None => true,
            EligibilityGate::CarriedItem(item) => character.inventory.has(item),
            EligibilityGate::Location => character
                .position
                .as_ref()
                .and_then(|p| cx.state.map.tile(&p.tile_id))
                .is_some_and(|t| cx.locations.allows_action(t.location, cx.def.kind)),
            EligibilityGate::Consumable => {
                character.inventory.has(ItemKind::Food) || character.inventory.has(ItemKind::Drink)
            }
        }
    };

    participants
        .iter()
        .cloned()
        .partition(|p| passes(&p.player))
}

/// Deducts the action's energy cost from each listed participant, temporary
/// pool first. A participant without enough total energy still pays what it
/// has, loses one health to overexertion, and gets an exhaustion sub-event.
fn charge_energy(cx: &mut ResolveCx<'_>, charged: &[Participant], events: &mut Vec<ReplayEvent>) {
    let cost = cx.def.energy_cost;
    if cost == 0 {
        return;
    }
    for participant in charged {
        let Some(character) = cx.state.character_mut(&participant.player) else {
            continue;
        };
        let exhausted = character.energy.available() < cost;
        character.energy.drain(cost);
        if exhausted {
            let (lost, _) = character.apply_damage(GameConfig::EXHAUSTION_DAMAGE);
            let origin = character.position.clone();
            debug!(player = %participant.player, action = %cx.def.kind, "participant exhausted");
            let mut action = ActionEvent::new(cx.def.kind);
            action.origin_location = origin;
            action.effects.push(EventEffect::Exhausted);
            action.metadata.health_lost = Some(lost);
            events.push(ReplayEvent::Player(PlayerEvent {
                actor_id: participant.player.clone(),
                action,
                targets: Vec::new(),
            }));
        }
    }
}

/// The visible failure emitted when an item-gated action lacks its item.
fn failed_event(
    state: &MatchState,
    participant: &Participant,
    kind: ActionKind,
    item: ItemKind,
) -> ReplayEvent {
    let mut action = ActionEvent::new(kind);
    action.origin_location = state
        .character(&participant.player)
        .and_then(|c| c.position.clone());
    action.effects.push(EventEffect::Failed);
    action.metadata.reason = Some(FailReason::MissingItem);
    action.metadata.missing_item_id = Some(item);
    ReplayEvent::Player(PlayerEvent {
        actor_id: participant.player.clone(),
        action,
        targets: Vec::new(),
    })
}
