//! Fog-of-war tailoring of replay events and match snapshots.
//!
//! Two independent mechanisms: event filtering by hex distance from the
//! viewer, and map/item filtering down to what the viewer has personally
//! discovered. Undiscovered items never leak to a client.

use std::collections::BTreeMap;

use super::{PlayerEvent, ReplayEvent};
use crate::env::ActionKind;
use crate::state::{AxialCoord, MatchState, PlayerCharacter, PlayerId};

/// Filters a turn's event list down to what one viewer perceives.
///
/// A player event is visible when the viewer is the actor, or when its
/// origin or target location is within `view_distance` of the viewer's
/// current tile. Moves are special-cased: a move out of sight is still
/// partially sensed when the viewer could see the origin and the
/// destination is within `view_distance + 1`.
pub fn tailor_replay_events(
    events: &[ReplayEvent],
    viewer_id: &PlayerId,
    characters: &BTreeMap<PlayerId, PlayerCharacter>,
    view_distance: u32,
) -> Vec<ReplayEvent> {
    let viewer_coord = characters
        .get(viewer_id)
        .and_then(|c| c.position.as_ref())
        .map(|p| p.coord);

    events
        .iter()
        .filter(|event| match event {
            ReplayEvent::Player(e) => {
                player_event_visible(e, viewer_id, viewer_coord, view_distance)
            }
            ReplayEvent::Map(e) => match viewer_coord {
                Some(coord) => coord.distance(&e.cell) <= view_distance,
                None => false,
            },
        })
        .cloned()
        .collect()
}

fn player_event_visible(
    event: &PlayerEvent,
    viewer_id: &PlayerId,
    viewer_coord: Option<AxialCoord>,
    view_distance: u32,
) -> bool {
    if &event.actor_id == viewer_id {
        return true;
    }
    let Some(coord) = viewer_coord else {
        return false;
    };

    let origin = event.action.origin_location.as_ref().map(|p| p.coord);
    let target = event.action.target_location.as_ref().map(|p| p.coord);
    let sees_origin = origin.is_some_and(|o| coord.distance(&o) <= view_distance);

    if sees_origin || target.is_some_and(|t| coord.distance(&t) <= view_distance) {
        return true;
    }
    // A move leaving the visible area is still sensed one hex beyond it,
    // but only when the departure itself was visible.
    event.action.action_id == ActionKind::Move
        && sees_origin
        && target.is_some_and(|t| coord.distance(&t) <= view_distance + 1)
}

/// Copies the match with its map tiles' item lists and its item records
/// restricted to what the viewer has personally discovered.
pub fn tailor_match_for_player(state: &MatchState, viewer_id: &PlayerId) -> MatchState {
    let mut tailored = state.clone();
    tailor_map_for_character(&mut tailored, viewer_id);
    tailored
}

/// In-place variant of [`tailor_match_for_player`].
pub fn tailor_map_for_character(state: &mut MatchState, viewer_id: &PlayerId) {
    let found = state
        .characters
        .get(viewer_id)
        .map(|c| c.found_items.clone())
        .unwrap_or_default();

    for tile in &mut state.map.tiles {
        tile.item_ids.retain(|id| found.contains(id));
    }
    state.items.retain(|item| found.contains(&item.id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::{ActionEvent, MapEvent, MapEventKind};
    use crate::state::{
        EnergyMeter, ItemId, ItemKind, ItemRecord, LocationType, MapSnapshot, MatchId,
        MatchSettings, Meter, Position, TileId, TileSnapshot,
    };

    fn position(q: i32, r: i32) -> Position {
        Position {
            tile_id: TileId::from(format!("t{q}_{r}").as_str()),
            coord: AxialCoord::new(q, r),
        }
    }

    fn character_at(id: &str, q: i32, r: i32) -> PlayerCharacter {
        let mut c = PlayerCharacter::new(
            PlayerId::from(id),
            Meter::full(12),
            EnergyMeter::new(20, 30),
            Meter::new(0, 50),
        );
        c.position = Some(position(q, r));
        c
    }

    fn player_event(actor: &str, action: ActionKind, origin: Position, target: Position) -> ReplayEvent {
        let mut e = ActionEvent::new(action);
        e.origin_location = Some(origin);
        e.target_location = Some(target);
        ReplayEvent::Player(PlayerEvent {
            actor_id: PlayerId::from(actor),
            action: e,
            targets: Vec::new(),
        })
    }

    fn characters(list: Vec<PlayerCharacter>) -> BTreeMap<PlayerId, PlayerCharacter> {
        list.into_iter().map(|c| (c.id.clone(), c)).collect()
    }

    #[test]
    fn distant_event_hidden_from_non_actor_but_kept_for_actor() {
        let chars = characters(vec![
            character_at("viewer", 0, 0),
            character_at("far", 9, 0),
        ]);
        let events = vec![player_event(
            "far",
            ActionKind::Punch,
            position(9, 0),
            position(9, 0),
        )];

        let for_viewer =
            tailor_replay_events(&events, &PlayerId::from("viewer"), &chars, 2);
        assert!(for_viewer.is_empty());

        let for_actor = tailor_replay_events(&events, &PlayerId::from("far"), &chars, 2);
        assert_eq!(for_actor.len(), 1);
    }

    #[test]
    fn move_out_of_sight_is_sensed_one_hex_beyond() {
        let chars = characters(vec![
            character_at("viewer", 0, 0),
            character_at("runner", 2, 0),
        ]);
        // Origin at distance 2 (visible), destination at distance 3 = vd + 1.
        let sensed = vec![player_event(
            "runner",
            ActionKind::Move,
            position(2, 0),
            position(3, 0),
        )];
        assert_eq!(
            tailor_replay_events(&sensed, &PlayerId::from("viewer"), &chars, 2).len(),
            1
        );

        // Destination two hexes beyond the radius: gone.
        let lost = vec![player_event(
            "runner",
            ActionKind::Move,
            position(2, 0),
            position(4, 0),
        )];
        assert!(tailor_replay_events(&lost, &PlayerId::from("viewer"), &chars, 2).is_empty());

        // Same geometry for a non-move action: not sensed.
        let punch = vec![player_event(
            "runner",
            ActionKind::Punch,
            position(3, 0),
            position(3, 0),
        )];
        assert!(tailor_replay_events(&punch, &PlayerId::from("viewer"), &chars, 2).is_empty());
    }

    #[test]
    fn map_events_filter_by_cell_distance() {
        let chars = characters(vec![character_at("viewer", 0, 0)]);
        let events = vec![
            ReplayEvent::Map(MapEvent {
                cell: AxialCoord::new(1, 0),
                action: MapEventKind::Gas,
            }),
            ReplayEvent::Map(MapEvent {
                cell: AxialCoord::new(5, 0),
                action: MapEventKind::Flame,
            }),
        ];

        let tailored = tailor_replay_events(&events, &PlayerId::from("viewer"), &chars, 2);
        assert_eq!(tailored.len(), 1);
    }

    #[test]
    fn undiscovered_items_never_reach_the_viewer() {
        let map = MapSnapshot {
            tiles: vec![TileSnapshot {
                id: TileId::from("t0"),
                coord: AxialCoord::new(0, 0),
                location: LocationType::Forest,
                walkable: true,
                item_ids: vec![ItemId::from("i1"), ItemId::from("i2")],
            }],
        };
        let mut state = MatchState::new(MatchId::from("m1"), map, MatchSettings::default());
        state.items = vec![
            ItemRecord {
                id: ItemId::from("i1"),
                kind: ItemKind::Food,
                tile_id: TileId::from("t0"),
                weight: 1,
            },
            ItemRecord {
                id: ItemId::from("i2"),
                kind: ItemKind::Axe,
                tile_id: TileId::from("t0"),
                weight: 3,
            },
        ];
        let mut viewer = character_at("viewer", 0, 0);
        viewer.found_items.insert(ItemId::from("i1"));
        state.join(viewer);

        let tailored = tailor_match_for_player(&state, &PlayerId::from("viewer"));
        assert_eq!(tailored.map.tiles[0].item_ids, vec![ItemId::from("i1")]);
        assert_eq!(tailored.items.len(), 1);
        assert_eq!(tailored.items[0].id, ItemId::from("i1"));

        // A viewer who found nothing sees an empty world.
        let stranger = tailor_match_for_player(&state, &PlayerId::from("stranger"));
        assert!(stranger.map.tiles[0].item_ids.is_empty());
        assert!(stranger.items.is_empty());
    }
}
