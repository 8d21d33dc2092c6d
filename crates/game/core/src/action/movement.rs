//! Movement-class resolvers: `move` and `scare`.

use super::{Participant, ResolveCx};
use crate::GameConfig;
use crate::env::shuffle;
use crate::replay::{ActionEvent, PlayerEvent, ReplayEvent, TargetEntry};
use crate::state::{Position, TileId};
use crate::targeting::{TargetOptions, collect_targets};

/// Relocates each participant to its requested destination.
///
/// Participants are shuffled first so resolution order never favors a
/// character. Preconditions (origin, known destination, distance within the
/// action's range, walkable tile) fail silently: the plan slot is cleared by
/// dispatch and no event is emitted.
pub fn resolve_move(
    cx: &mut ResolveCx<'_>,
    participants: &[Participant],
    events: &mut Vec<ReplayEvent>,
) {
    let mut order: Vec<&Participant> = participants.iter().collect();
    shuffle(cx.rng, &mut order);

    for participant in order {
        let Some(destination) = participant.plan.target_location.as_ref() else {
            continue;
        };
        let Some(origin) = cx
            .state
            .character(&participant.player)
            .and_then(|c| c.position.clone())
        else {
            continue;
        };
        let Some(target) = resolve_destination(cx, destination) else {
            continue;
        };
        if !cx.def.allows_distance(origin.coord.distance(&target.coord)) {
            continue;
        }

        if let Some(character) = cx.state.character_mut(&participant.player) {
            character.position = Some(target.clone());
        }
        let mut action = ActionEvent::new(cx.def.kind);
        action.origin_location = Some(origin);
        action.target_location = Some(target);
        events.push(ReplayEvent::Player(PlayerEvent {
            actor_id: participant.player.clone(),
            action,
            targets: Vec::new(),
        }));
    }
}

fn resolve_destination(cx: &ResolveCx<'_>, destination: &TileId) -> Option<Position> {
    let tile = cx.state.map.tile(destination)?;
    if !tile.walkable {
        return None;
    }
    Some(Position {
        tile_id: tile.id.clone(),
        coord: tile.coord,
    })
}

/// Frightens one unprotected target into the actor's requested tile and
/// drains up to three energy from it.
pub fn resolve_scare(
    cx: &mut ResolveCx<'_>,
    participants: &[Participant],
    events: &mut Vec<ReplayEvent>,
) {
    for participant in participants {
        let Some(destination) = participant.plan.target_location.as_ref() else {
            continue;
        };
        let Some(target_position) = resolve_destination(cx, destination) else {
            continue;
        };
        let Some(origin) = cx
            .state
            .character(&participant.player)
            .and_then(|c| c.position.clone())
        else {
            continue;
        };

        let unprotected = |c: &crate::state::PlayerCharacter| !c.is_protected();
        let targets = collect_targets(
            cx.state,
            &participant.player,
            cx.def,
            &participant.plan,
            &TargetOptions::single().with_filter(&unprotected),
            cx.rng,
        );
        let Some(victim_id) = targets.into_iter().next() else {
            continue;
        };
        let Some(victim) = cx.state.character_mut(&victim_id) else {
            continue;
        };

        let moved_from = victim.position.clone();
        victim.position = Some(target_position.clone());
        let drained = victim.energy.drain(GameConfig::SCARE_ENERGY_DRAIN);

        let mut entry = TargetEntry::new(victim_id);
        entry.metadata.moved_from = moved_from;
        entry.metadata.moved_to = Some(target_position.clone());
        entry.metadata.energy_lost = Some(drained);

        let mut action = ActionEvent::new(cx.def.kind);
        action.origin_location = Some(origin);
        action.target_location = Some(target_position);
        events.push(ReplayEvent::Player(PlayerEvent {
            actor_id: participant.player.clone(),
            action,
            targets: vec![entry],
        }));
    }
}
