//! Recovery resolvers: `sleep`, `recover`, `use_bandage`, `feed`.

use super::{Participant, ResolveCx};
use crate::GameConfig;
use crate::replay::{ActionEvent, EventEffect, PlayerEvent, ReplayEvent, TargetEntry};
use crate::state::{ItemKind, PlayerId};
use crate::targeting::{TargetOptions, collect_targets};

/// A night of sleep restores a little health.
pub fn resolve_sleep(
    cx: &mut ResolveCx<'_>,
    participants: &[Participant],
    events: &mut Vec<ReplayEvent>,
) {
    for participant in participants {
        heal_self(cx, &participant.player, GameConfig::SLEEP_HEAL, events);
    }
}

/// Recovering at an eligible location restores more. Location eligibility is
/// enforced by the dispatch gate; by the time this runs every participant
/// stands on an allow-listed tile.
pub fn resolve_recover(
    cx: &mut ResolveCx<'_>,
    participants: &[Participant],
    events: &mut Vec<ReplayEvent>,
) {
    for participant in participants {
        heal_self(cx, &participant.player, GameConfig::RECOVER_HEAL, events);
    }
}

fn heal_self(
    cx: &mut ResolveCx<'_>,
    player: &PlayerId,
    amount: u32,
    events: &mut Vec<ReplayEvent>,
) {
    let Some(character) = cx.state.character_mut(player) else {
        return;
    };
    let healed = character.health.gain(amount);
    let origin = character.position.clone();

    let mut entry = TargetEntry::new(player.clone());
    entry.effects.push(EventEffect::Heal);
    entry.metadata.health_restored = Some(healed);
    let mut action = ActionEvent::new(cx.def.kind);
    action.origin_location = origin;
    events.push(ReplayEvent::Player(PlayerEvent {
        actor_id: player.clone(),
        action,
        targets: vec![entry],
    }));
}

/// Consumes one carried bandage and heals the chosen target, which may be an
/// ally in range or, absent a valid request, the actor itself.
pub fn resolve_use_bandage(
    cx: &mut ResolveCx<'_>,
    participants: &[Participant],
    events: &mut Vec<ReplayEvent>,
) {
    for participant in participants {
        let target_id = if participant.plan.target_players.is_empty() {
            participant.player.clone()
        } else {
            collect_targets(
                cx.state,
                &participant.player,
                cx.def,
                &participant.plan,
                &TargetOptions::single(),
                cx.rng,
            )
            .into_iter()
            .next()
            .unwrap_or_else(|| participant.player.clone())
        };

        // The gate guarantees the bandage is there; consume it regardless of
        // how much healing it ends up doing.
        let consumed = cx
            .state
            .character_mut(&participant.player)
            .map(|c| c.inventory.consume(ItemKind::Bandage))
            .unwrap_or(false);
        if !consumed {
            continue;
        }
        let Some(target) = cx.state.character_mut(&target_id) else {
            continue;
        };
        let healed = target.health.gain(GameConfig::BANDAGE_HEAL);
        let target_position = target.position.clone();

        let mut entry = TargetEntry::new(target_id);
        entry.effects.push(EventEffect::Heal);
        entry.metadata.health_restored = Some(healed);
        let mut action = ActionEvent::new(cx.def.kind);
        action.origin_location = cx
            .state
            .character(&participant.player)
            .and_then(|c| c.position.clone());
        action.target_location = target_position;
        events.push(ReplayEvent::Player(PlayerEvent {
            actor_id: participant.player.clone(),
            action,
            targets: vec![entry],
        }));
    }
}

/// Eats food (or drinks, when no food is carried) to restore energy. The
/// dispatch gate guarantees at least one consumable is present.
pub fn resolve_feed(
    cx: &mut ResolveCx<'_>,
    participants: &[Participant],
    events: &mut Vec<ReplayEvent>,
) {
    for participant in participants {
        let Some(character) = cx.state.character_mut(&participant.player) else {
            continue;
        };
        let restored = if character.inventory.consume(ItemKind::Food) {
            character.energy.restore(GameConfig::FOOD_ENERGY)
        } else if character.inventory.consume(ItemKind::Drink) {
            character.energy.restore(GameConfig::DRINK_ENERGY)
        } else {
            continue;
        };

        let origin = character.position.clone();
        let mut entry = TargetEntry::new(participant.player.clone());
        entry.effects.push(EventEffect::Heal);
        entry.metadata.energy_restored = Some(restored);
        let mut action = ActionEvent::new(cx.def.kind);
        action.origin_location = origin;
        events.push(ReplayEvent::Player(PlayerEvent {
            actor_id: participant.player.clone(),
            action,
            targets: vec![entry],
        }));
    }
}
