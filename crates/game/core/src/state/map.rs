//! Map snapshot: the ordered tile list a match was created with.
//!
//! Map generation is external; the engine only reads geometry and moves
//! items between tiles and inventories.

use super::common::{AxialCoord, ItemId, TileId};
use crate::env::LocationType;

/// One hex tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TileSnapshot {
    pub id: TileId,
    pub coord: AxialCoord,
    pub location: LocationType,
    pub walkable: bool,
    /// Items currently lying on this tile, in discovery-independent order.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub item_ids: Vec<ItemId>,
}

/// Ordered tile list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MapSnapshot {
    pub tiles: Vec<TileSnapshot>,
}

impl MapSnapshot {
    pub fn tile(&self, id: &TileId) -> Option<&TileSnapshot> {
        self.tiles.iter().find(|t| &t.id == id)
    }

    pub fn tile_mut(&mut self, id: &TileId) -> Option<&mut TileSnapshot> {
        self.tiles.iter_mut().find(|t| &t.id == id)
    }

    pub fn tile_at(&self, coord: AxialCoord) -> Option<&TileSnapshot> {
        self.tiles.iter().find(|t| t.coord == coord)
    }

    /// Walkable tiles adjacent to the given coordinate, in tile-list order.
    pub fn walkable_neighbors(&self, coord: AxialCoord) -> Vec<&TileSnapshot> {
        self.tiles
            .iter()
            .filter(|t| t.walkable && coord.distance(&t.coord) == 1)
            .collect()
    }
}
