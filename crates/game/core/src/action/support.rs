//! Support resolvers: `protect` and `focus`.

use super::{Participant, ResolveCx};
use crate::GameConfig;
use crate::replay::{ActionEvent, EventEffect, PlayerEvent, ReplayEvent, TargetEntry};
use crate::state::Condition;
use crate::targeting::{TargetOptions, collect_targets};

/// Flags the requested targets (defaulting to the actor itself) with the
/// protected condition. Idempotent: re-applying while already protected is a
/// no-op but still reports a guard entry.
pub fn resolve_protect(
    cx: &mut ResolveCx<'_>,
    participants: &[Participant],
    events: &mut Vec<ReplayEvent>,
) {
    for participant in participants {
        let mut target_ids = if participant.plan.target_players.is_empty() {
            Vec::new()
        } else {
            collect_targets(
                cx.state,
                &participant.player,
                cx.def,
                &participant.plan,
                &TargetOptions::default(),
                cx.rng,
            )
        };
        if target_ids.is_empty() {
            target_ids.push(participant.player.clone());
        }

        let mut entries = Vec::new();
        for target_id in target_ids {
            let Some(target) = cx.state.character_mut(&target_id) else {
                continue;
            };
            target.conditions.insert(Condition::PROTECTED);
            let mut entry = TargetEntry::new(target_id);
            entry.effects.push(EventEffect::Guard);
            entries.push(entry);
        }
        if entries.is_empty() {
            continue;
        }
        let mut action = ActionEvent::new(cx.def.kind);
        action.origin_location = cx
            .state
            .character(&participant.player)
            .and_then(|c| c.position.clone());
        events.push(ReplayEvent::Player(PlayerEvent {
            actor_id: participant.player.clone(),
            action,
            targets: entries,
        }));
    }
}

/// Grants a temporary energy bonus consumed before ordinary energy.
pub fn resolve_focus(
    cx: &mut ResolveCx<'_>,
    participants: &[Participant],
    events: &mut Vec<ReplayEvent>,
) {
    for participant in participants {
        let Some(character) = cx.state.character_mut(&participant.player) else {
            continue;
        };
        character.energy.temporary += GameConfig::FOCUS_ENERGY;
        let origin = character.position.clone();

        let mut entry = TargetEntry::new(participant.player.clone());
        entry.effects.push(EventEffect::Heal);
        entry.metadata.energy_restored = Some(GameConfig::FOCUS_ENERGY);
        let mut action = ActionEvent::new(cx.def.kind);
        action.origin_location = origin;
        events.push(ReplayEvent::Player(PlayerEvent {
            actor_id: participant.player.clone(),
            action,
            targets: vec![entry],
        }));
    }
}
