//! Item records: world items lying on tiles until someone picks them up.

use super::common::{ItemId, TileId};

/// What an item is, and therefore what it can be used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ItemKind {
    Food,
    Drink,
    Bandage,
    Knife,
    Axe,
    Trinket,
}

impl ItemKind {
    /// Consumables restore energy when eaten or drunk.
    pub fn is_consumable(self) -> bool {
        matches!(self, ItemKind::Food | ItemKind::Drink)
    }
}

/// One item instance somewhere on the map.
///
/// Items are invisible to a character until discovered by searching; the
/// discovery set lives on [`crate::state::PlayerCharacter::found_items`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ItemRecord {
    pub id: ItemId,
    pub kind: ItemKind,
    pub tile_id: TileId,
    pub weight: u32,
}
