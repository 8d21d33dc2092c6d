//! Replay events: the tailored log a turn resolution emits.
//!
//! Event shapes are wire types: they serialize with camelCase field names
//! and must round-trip byte-for-byte through JSON once persisted.

mod visibility;

pub use visibility::{tailor_map_for_character, tailor_match_for_player, tailor_replay_events};

use crate::env::ActionKind;
use crate::state::{AxialCoord, ItemId, ItemKind, PlayerId, Position};

/// One entry in a turn's event log.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ReplayEvent {
    Player(PlayerEvent),
    Map(MapEvent),
}

impl ReplayEvent {
    pub fn as_player(&self) -> Option<&PlayerEvent> {
        match self {
            ReplayEvent::Player(e) => Some(e),
            ReplayEvent::Map(_) => None,
        }
    }
}

/// Something a character did.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayerEvent {
    pub actor_id: PlayerId,
    pub action: ActionEvent,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub targets: Vec<TargetEntry>,
}

/// The action half of a player event.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ActionEvent {
    pub action_id: ActionKind,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub origin_location: Option<Position>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub target_location: Option<Position>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub damage_dealt: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub effects: Vec<EventEffect>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "EventMetadata::is_empty")
    )]
    pub metadata: EventMetadata,
}

impl ActionEvent {
    pub fn new(action_id: ActionKind) -> Self {
        Self {
            action_id,
            origin_location: None,
            target_location: None,
            damage_dealt: None,
            effects: Vec::new(),
            metadata: EventMetadata::default(),
        }
    }
}

/// Per-target outcome attached to a player event.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TargetEntry {
    pub target_id: PlayerId,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub damage_taken: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub effects: Vec<EventEffect>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub eliminated: Option<bool>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "EventMetadata::is_empty")
    )]
    pub metadata: EventMetadata,
}

impl TargetEntry {
    pub fn new(target_id: PlayerId) -> Self {
        Self {
            target_id,
            damage_taken: None,
            effects: Vec::new(),
            eliminated: None,
            metadata: EventMetadata::default(),
        }
    }
}

/// Effect markers on events and target entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventEffect {
    Guard,
    Heal,
    Exhausted,
    Failed,
}

/// Machine-readable failure reason on a `Failed` event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailReason {
    MissingItem,
}

/// Optional event details. Every field serializes only when set, so the wire
/// shape stays minimal and stable.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EventMetadata {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub reason: Option<FailReason>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub missing_item_id: Option<ItemKind>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub moved_from: Option<Position>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub moved_to: Option<Position>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub energy_lost: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub health_lost: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub health_restored: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub energy_restored: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub item_ids: Vec<ItemId>,
}

impl EventMetadata {
    pub fn is_empty(&self) -> bool {
        self == &EventMetadata::default()
    }
}

/// Something that happened to the map itself.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MapEvent {
    pub cell: AxialCoord,
    pub action: MapEventKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MapEventKind {
    Destroyed,
    Gas,
    Flame,
}
