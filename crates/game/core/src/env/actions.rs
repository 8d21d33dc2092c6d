//! Action catalog: the static table every component consults.

use std::collections::BTreeMap;

/// Every action the engine can dispatch.
///
/// Wire ids are the snake_case variant names (`axe_attack`, `pick_up`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(strum::Display, strum::EnumString, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    Move,
    Punch,
    AxeAttack,
    KnifeAttack,
    Protect,
    Scare,
    Sleep,
    Recover,
    Feed,
    Focus,
    UseBandage,
    Search,
    PickUp,
}

/// Submission-time grouping; the RPC layer rejects plans whose slot does not
/// match the action's category rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionCategory {
    Movement,
    Combat,
    Support,
    Recovery,
    Scavenge,
}

/// Behavioral tags consumed by the bot weight tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionTag {
    Attack,
    Guard,
    Mobility,
    Rest,
    Forage,
    Utility,
}

/// Immutable definition of one action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ActionDefinition {
    pub kind: ActionKind,
    pub energy_cost: u32,
    /// Cooldown length in turns; `<= 1` means no cooldown.
    pub cooldown: u32,
    /// Allowed hex distances to a target (0 = same tile).
    pub range: Vec<u32>,
    pub category: ActionCategory,
    pub tags: Vec<ActionTag>,
    /// Dispatch ordering within a turn, most significant first.
    pub order: u16,
    pub sub_order: u16,
    /// Undeveloped actions exist in the table but are never offered to bots
    /// and are rejected at submission.
    pub developed: bool,
}

impl ActionDefinition {
    pub fn allows_distance(&self, distance: u32) -> bool {
        self.range.contains(&distance)
    }
}

/// The loaded catalog, keyed by action kind.
#[derive(Clone, Debug, Default)]
pub struct ActionCatalog {
    definitions: BTreeMap<ActionKind, ActionDefinition>,
}

impl ActionCatalog {
    pub fn new(definitions: impl IntoIterator<Item = ActionDefinition>) -> Self {
        Self {
            definitions: definitions.into_iter().map(|d| (d.kind, d)).collect(),
        }
    }

    pub fn get(&self, kind: ActionKind) -> Option<&ActionDefinition> {
        self.definitions.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionDefinition> {
        self.definitions.values()
    }

    /// Action kinds in dispatch order: sorted by `(order, sub_order)`.
    pub fn dispatch_order(&self) -> Vec<ActionKind> {
        let mut kinds: Vec<&ActionDefinition> = self.definitions.values().collect();
        kinds.sort_by_key(|d| (d.order, d.sub_order));
        kinds.iter().map(|d| d.kind).collect()
    }
}
