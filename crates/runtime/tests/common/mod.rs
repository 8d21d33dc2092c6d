//! Shared fixtures for runtime integration tests.

use longnight_core::{
    AxialCoord, EnergyMeter, ItemId, ItemKind, ItemRecord, LocationType, MapSnapshot, MatchId,
    MatchSettings, MatchState, Meter, PlayerCharacter, PlayerId, Position, TileId, TileSnapshot,
};

/// Opt-in log output for debugging test runs: `RUST_LOG=debug cargo test`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A five-tile line: t0..t4 at q = 0..4, with a spring on t3 and loose items
/// on t0.
pub fn line_map() -> MapSnapshot {
    let tile = |id: &str, q: i32, location: LocationType, items: Vec<ItemId>| TileSnapshot {
        id: TileId::from(id),
        coord: AxialCoord::new(q, 0),
        location,
        walkable: true,
        item_ids: items,
    };
    MapSnapshot {
        tiles: vec![
            tile(
                "t0",
                0,
                LocationType::Ruins,
                vec![
                    ItemId::from("i0"),
                    ItemId::from("i1"),
                    ItemId::from("i2"),
                ],
            ),
            tile("t1", 1, LocationType::Meadow, Vec::new()),
            tile("t2", 2, LocationType::Forest, Vec::new()),
            tile("t3", 3, LocationType::Spring, Vec::new()),
            tile("t4", 4, LocationType::Meadow, Vec::new()),
        ],
    }
}

pub fn character_at(id: &str, tile: &str, q: i32) -> PlayerCharacter {
    let mut c = PlayerCharacter::new(
        PlayerId::from(id),
        Meter::new(10, 12),
        EnergyMeter::new(20, 30),
        Meter::new(0, 50),
    );
    c.position = Some(Position {
        tile_id: TileId::from(tile),
        coord: AxialCoord::new(q, 0),
    });
    c
}

/// A match on [`line_map`] with the given characters joined and item records
/// matching t0's loose items.
pub fn match_with(id: &str, characters: Vec<PlayerCharacter>) -> MatchState {
    let mut state = MatchState::new(MatchId::from(id), line_map(), MatchSettings::default());
    state.items = ["i0", "i1", "i2"]
        .into_iter()
        .enumerate()
        .map(|(i, item_id)| ItemRecord {
            id: ItemId::from(item_id),
            kind: if i == 0 {
                ItemKind::Food
            } else {
                ItemKind::Bandage
            },
            tile_id: TileId::from("t0"),
            weight: 1,
        })
        .collect();
    for c in characters {
        state.join(c);
    }
    state
}
