//! Scavenging resolvers: `search` and `pick_up`.

use super::{Participant, ResolveCx};
use crate::GameConfig;
use crate::env::sample_indices;
use crate::replay::{ActionEvent, PlayerEvent, ReplayEvent};
use crate::state::ItemId;

/// Reveals up to `5 + extra_effort` undiscovered items on the actor's tile,
/// sampled uniformly without replacement. Discovery is permanent and
/// personal: only the searcher's own found set grows.
pub fn resolve_search(
    cx: &mut ResolveCx<'_>,
    participants: &[Participant],
    events: &mut Vec<ReplayEvent>,
) {
    for participant in participants {
        let Some(tile_id) = cx
            .state
            .character(&participant.player)
            .and_then(|c| c.position.as_ref())
            .map(|p| p.tile_id.clone())
        else {
            continue;
        };
        let Some(tile) = cx.state.map.tile(&tile_id) else {
            continue;
        };

        let undiscovered: Vec<ItemId> = {
            let Some(character) = cx.state.character(&participant.player) else {
                continue;
            };
            tile.item_ids
                .iter()
                .filter(|id| !character.found_items.contains(*id))
                .cloned()
                .collect()
        };
        if undiscovered.is_empty() {
            continue;
        }

        let yield_cap = (GameConfig::SEARCH_BASE_YIELD + participant.plan.extra_effort) as usize;
        let picked = sample_indices(cx.rng, undiscovered.len(), yield_cap);
        let mut revealed: Vec<ItemId> = picked.into_iter().map(|i| undiscovered[i].clone()).collect();
        revealed.sort();

        let mut origin = None;
        if let Some(character) = cx.state.character_mut(&participant.player) {
            character.found_items.extend(revealed.iter().cloned());
            origin = character.position.clone();
        }

        let mut action = ActionEvent::new(cx.def.kind);
        action.origin_location = origin;
        action.metadata.item_ids = revealed;
        events.push(ReplayEvent::Player(PlayerEvent {
            actor_id: participant.player.clone(),
            action,
            targets: Vec::new(),
        }));
    }
}

/// Transfers up to `3 + extra_effort` previously-discovered items from the
/// actor's tile into its inventory: requested items first, then the rest in
/// tile order. Items that would overflow the carrier's load stay behind.
pub fn resolve_pick_up(
    cx: &mut ResolveCx<'_>,
    participants: &[Participant],
    events: &mut Vec<ReplayEvent>,
) {
    for participant in participants {
        let Some(tile_id) = cx
            .state
            .character(&participant.player)
            .and_then(|c| c.position.as_ref())
            .map(|p| p.tile_id.clone())
        else {
            continue;
        };
        let visible: Vec<ItemId> = {
            let (Some(character), Some(tile)) = (
                cx.state.character(&participant.player),
                cx.state.map.tile(&tile_id),
            ) else {
                continue;
            };
            let mut ordered: Vec<ItemId> = participant
                .plan
                .target_items
                .iter()
                .filter(|id| tile.item_ids.contains(id))
                .cloned()
                .collect();
            for id in &tile.item_ids {
                if !ordered.contains(id) {
                    ordered.push(id.clone());
                }
            }
            ordered
                .into_iter()
                .filter(|id| character.found_items.contains(id))
                .collect()
        };

        let yield_cap = (GameConfig::PICK_UP_BASE_YIELD + participant.plan.extra_effort) as usize;
        let mut picked = Vec::new();
        for item_id in visible {
            if picked.len() >= yield_cap {
                break;
            }
            let Some(record) = cx.state.item(&item_id).cloned() else {
                continue;
            };
            let fits = cx
                .state
                .character(&participant.player)
                .is_some_and(|c| c.load.current + record.weight <= c.load.maximum);
            if !fits {
                continue;
            }
            cx.state.take_item(&item_id);
            if let Some(character) = cx.state.character_mut(&participant.player) {
                character.inventory.add(record.kind, record.weight);
                character.load.current += record.weight;
            }
            picked.push(item_id);
        }
        if picked.is_empty() {
            continue;
        }

        let mut action = ActionEvent::new(cx.def.kind);
        action.origin_location = cx
            .state
            .character(&participant.player)
            .and_then(|c| c.position.clone());
        action.metadata.item_ids = picked;
        events.push(ReplayEvent::Player(PlayerEvent {
            actor_id: participant.player.clone(),
            action,
            targets: Vec::new(),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::dispatch_action;
    use crate::env::{
        ActionCatalog, ActionCategory, ActionDefinition, ActionKind, ActionTag, LocationCatalog,
        SplitMixRng,
    };
    use crate::state::{
        AxialCoord, EnergyMeter, ItemKind, ItemRecord, LocationType, MapSnapshot, MatchId,
        MatchSettings, MatchState, Meter, PlannedAction, PlayerCharacter, PlayerId, Position,
        TileId, TileSnapshot,
    };

    fn definition(kind: ActionKind) -> ActionDefinition {
        ActionDefinition {
            kind,
            energy_cost: 0,
            cooldown: 0,
            range: vec![0],
            category: ActionCategory::Scavenge,
            tags: vec![ActionTag::Forage],
            order: 0,
            sub_order: 0,
            developed: true,
        }
    }

    fn cache_site(item_count: usize) -> MatchState {
        let item_ids: Vec<ItemId> = (0..item_count)
            .map(|i| ItemId::from(format!("i{i}").as_str()))
            .collect();
        let map = MapSnapshot {
            tiles: vec![TileSnapshot {
                id: TileId::from("t0"),
                coord: AxialCoord::new(0, 0),
                location: LocationType::Ruins,
                walkable: true,
                item_ids: item_ids.clone(),
            }],
        };
        let mut state = MatchState::new(MatchId::from("m1"), map, MatchSettings::default());
        state.items = item_ids
            .iter()
            .map(|id| ItemRecord {
                id: id.clone(),
                kind: ItemKind::Trinket,
                tile_id: TileId::from("t0"),
                weight: 1,
            })
            .collect();
        state
    }

    fn scavenger(id: &str) -> PlayerCharacter {
        let mut c = PlayerCharacter::new(
            PlayerId::from(id),
            Meter::full(12),
            EnergyMeter::new(20, 30),
            Meter::new(0, 50),
        );
        c.position = Some(Position {
            tile_id: TileId::from("t0"),
            coord: AxialCoord::new(0, 0),
        });
        c
    }

    fn run(state: &mut MatchState, kind: ActionKind, seed: u64) -> Vec<ReplayEvent> {
        let def = definition(kind);
        let catalog = ActionCatalog::new([def.clone()]);
        let locations = LocationCatalog::default();
        let mut rng = SplitMixRng::new(seed);
        let mut cx = ResolveCx {
            state,
            catalog: &catalog,
            locations: &locations,
            rng: &mut rng,
            turn: 0,
            def: &def,
        };
        dispatch_action(&mut cx, kind)
    }

    #[test]
    fn search_reveals_at_most_the_yield_and_never_repeats() {
        let mut state = cache_site(8);
        let mut seeker = scavenger("alice");
        seeker.plan.main = Some(PlannedAction::new(ActionKind::Search));
        state.join(seeker);

        run(&mut state, ActionKind::Search, 1);
        let first: Vec<ItemId> = state
            .character(&PlayerId::from("alice"))
            .unwrap()
            .found_items
            .iter()
            .cloned()
            .collect();
        assert_eq!(first.len(), 5);

        // A second search only reveals what is left.
        state
            .character_mut(&PlayerId::from("alice"))
            .unwrap()
            .plan
            .main = Some(PlannedAction::new(ActionKind::Search));
        let events = run(&mut state, ActionKind::Search, 2);
        let alice = state.character(&PlayerId::from("alice")).unwrap();
        assert_eq!(alice.found_items.len(), 8);
        let revealed = &events[0].as_player().unwrap().action.metadata.item_ids;
        assert_eq!(revealed.len(), 3);
        assert!(revealed.iter().all(|id| !first.contains(id)));
    }

    #[test]
    fn extra_effort_raises_the_search_yield() {
        let mut state = cache_site(8);
        let mut seeker = scavenger("alice");
        let mut plan = PlannedAction::new(ActionKind::Search);
        plan.extra_effort = 2;
        seeker.plan.main = Some(plan);
        state.join(seeker);

        run(&mut state, ActionKind::Search, 1);
        assert_eq!(
            state
                .character(&PlayerId::from("alice"))
                .unwrap()
                .found_items
                .len(),
            7
        );
    }

    #[test]
    fn pick_up_takes_only_discovered_items_in_priority_order() {
        let mut state = cache_site(6);
        let mut hoarder = scavenger("alice");
        // Discovered four of six; requests i5 (known) and i0 first.
        for id in ["i0", "i1", "i2", "i5"] {
            hoarder.found_items.insert(ItemId::from(id));
        }
        let mut plan = PlannedAction::new(ActionKind::PickUp);
        plan.target_items = vec![ItemId::from("i5"), ItemId::from("i0")];
        hoarder.plan.main = Some(plan);
        state.join(hoarder);

        let events = run(&mut state, ActionKind::PickUp, 1);
        let picked = &events[0].as_player().unwrap().action.metadata.item_ids;
        assert_eq!(
            picked,
            &vec![ItemId::from("i5"), ItemId::from("i0"), ItemId::from("i1")]
        );

        let alice = state.character(&PlayerId::from("alice")).unwrap();
        assert_eq!(alice.inventory.quantity(ItemKind::Trinket), 3);
        assert_eq!(alice.load.current, 3);
        // Undiscovered items are untouched; picked ones left the world.
        assert_eq!(state.items.len(), 3);
        assert!(state.item(&ItemId::from("i5")).is_none());
        assert!(state.item(&ItemId::from("i3")).is_some());
        let tile_items = &state.map.tiles[0].item_ids;
        assert!(!tile_items.contains(&ItemId::from("i0")));
        assert!(tile_items.contains(&ItemId::from("i3")));
    }

    #[test]
    fn pick_up_never_takes_undiscovered_items() {
        let mut state = cache_site(2);
        let mut sneak = scavenger("alice");
        let mut plan = PlannedAction::new(ActionKind::PickUp);
        // Requesting an undiscovered item does not help.
        plan.target_items = vec![ItemId::from("i0")];
        sneak.plan.main = Some(plan);
        state.join(sneak);

        let events = run(&mut state, ActionKind::PickUp, 1);
        assert!(events.is_empty());
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn pick_up_leaves_items_that_overflow_the_load() {
        let mut state = cache_site(3);
        for item in &mut state.items {
            item.weight = 4;
        }
        let mut hauler = scavenger("alice");
        hauler.load = Meter::new(0, 5);
        for id in ["i0", "i1", "i2"] {
            hauler.found_items.insert(ItemId::from(id));
        }
        hauler.plan.main = Some(PlannedAction::new(ActionKind::PickUp));
        state.join(hauler);

        let events = run(&mut state, ActionKind::PickUp, 1);
        let picked = &events[0].as_player().unwrap().action.metadata.item_ids;
        assert_eq!(picked.len(), 1);
        let alice = state.character(&PlayerId::from("alice")).unwrap();
        assert_eq!(alice.load.current, 4);
        assert_eq!(state.items.len(), 2);
    }
}
