//! Match state: the aggregate the engine mutates during a resolution pass.
//!
//! The persistent store owns the canonical record; the engine receives one
//! full copy, mutates it in place, and hands it back to the caller to
//! persist. Nothing in this module performs I/O.

mod character;
mod common;
mod inventory;
mod item;
mod map;
mod plan;

pub use character::{Condition, CooldownEntry, EnergyMeter, Meter, PlayerCharacter};
pub use common::{AxialCoord, ItemId, MatchId, PlayerId, Position, TileId};
pub use inventory::{InventoryState, ItemStack};
pub use item::{ItemKind, ItemRecord};
pub use map::{MapSnapshot, TileSnapshot};
pub use plan::{PlanKey, PlanSlots, PlannedAction};

// Location types live with the catalogs in `env`; re-exported here because
// tiles embed them.
pub use crate::env::LocationType;

use std::collections::BTreeMap;

use crate::env::{RngSource, pick};

/// Raised when a character cannot be placed on the map. Unlike game-logic
/// dead ends this is a hard error: a match without walkable ground is
/// corrupt.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("match {0} has no walkable tile to spawn on")]
pub struct SpawnError(pub MatchId);

/// Per-match tuning knobs submitted at match creation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSettings {
    /// Fog-of-war radius in hex distance.
    pub view_distance: u32,
    /// Roster capacity, humans and bots combined.
    pub max_players: u32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            view_distance: crate::GameConfig::DEFAULT_VIEW_DISTANCE,
            max_players: 12,
        }
    }
}

/// Match-scoped aggregate mutated in place by a resolution pass.
///
/// # Invariants
///
/// - `roster` holds every participating player id; `characters` is keyed by
///   the same ids. Roster order is the canonical iteration order wherever
///   ordering matters (participant collection, bot planning).
/// - `ready` carries one entry per roster member after every resolved turn.
/// - `removed` is a soft delete: a removed match never resolves again, but
///   its record remains readable for replay.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub id: MatchId,
    pub roster: Vec<PlayerId>,
    pub characters: BTreeMap<PlayerId, PlayerCharacter>,
    pub current_turn: u32,
    pub ready: BTreeMap<PlayerId, bool>,
    pub map: MapSnapshot,
    pub items: Vec<ItemRecord>,
    pub settings: MatchSettings,
    pub removed: bool,
}

impl MatchState {
    /// Creates an empty match on the given map.
    pub fn new(id: MatchId, map: MapSnapshot, settings: MatchSettings) -> Self {
        Self {
            id,
            roster: Vec::new(),
            characters: BTreeMap::new(),
            current_turn: 0,
            ready: BTreeMap::new(),
            map,
            items: Vec::new(),
            settings,
            removed: false,
        }
    }

    pub fn character(&self, id: &PlayerId) -> Option<&PlayerCharacter> {
        self.characters.get(id)
    }

    pub fn character_mut(&mut self, id: &PlayerId) -> Option<&mut PlayerCharacter> {
        self.characters.get_mut(id)
    }

    /// Adds a character to the roster. Replaces any existing entry with the
    /// same id.
    pub fn join(&mut self, character: PlayerCharacter) {
        if !self.roster.contains(&character.id) {
            self.roster.push(character.id.clone());
        }
        self.ready.insert(character.id.clone(), false);
        self.characters.insert(character.id.clone(), character);
    }

    /// Places a character on a uniformly chosen walkable tile.
    pub fn assign_spawn(
        &mut self,
        id: &PlayerId,
        rng: &mut dyn RngSource,
    ) -> Result<(), SpawnError> {
        let walkable: Vec<Position> = self
            .map
            .tiles
            .iter()
            .filter(|t| t.walkable)
            .map(|t| Position {
                tile_id: t.id.clone(),
                coord: t.coord,
            })
            .collect();
        let spawn = pick(rng, &walkable)
            .cloned()
            .ok_or_else(|| SpawnError(self.id.clone()))?;
        if let Some(character) = self.characters.get_mut(id) {
            character.position = Some(spawn);
        }
        Ok(())
    }

    /// Number of roster members that are neither dead nor unconscious.
    pub fn living_count(&self) -> usize {
        self.roster
            .iter()
            .filter_map(|id| self.characters.get(id))
            .filter(|c| !c.is_incapacitated())
            .count()
    }

    /// Looks up the item record for an id, if it is still in the world.
    pub fn item(&self, id: &ItemId) -> Option<&ItemRecord> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Removes an item from the world: both the match item list and the tile
    /// holding it. Returns the removed record.
    pub fn take_item(&mut self, id: &ItemId) -> Option<ItemRecord> {
        let idx = self.items.iter().position(|i| &i.id == id)?;
        let record = self.items.remove(idx);
        if let Some(tile) = self.map.tile_mut(&record.tile_id) {
            tile.item_ids.retain(|i| i != id);
        }
        Some(record)
    }

    /// Deterministic SHA-256 digest of the full match state.
    ///
    /// Computed over the bincode encoding, so two states with identical
    /// contents always hash identically. Used by determinism tests and for
    /// forensics when an optimistic write is rejected.
    #[cfg(feature = "serde")]
    pub fn digest(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        let bytes = bincode::serialize(self).expect("match state serialization is infallible");
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        hasher.finalize().into()
    }
}
