//! Planned actions: what a character intends to do this turn.

use super::common::{ItemId, PlayerId, TileId};
use crate::env::ActionKind;

/// A submitted plan for one slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlannedAction {
    pub action: ActionKind,
    /// Requested destination (move, scare) or search focus.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub target_location: Option<TileId>,
    /// Requested targets, in priority order.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub target_players: Vec<PlayerId>,
    /// Requested item priority order for pick-up.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub target_items: Vec<ItemId>,
    /// Raises search/pick-up yields. Zero for every other action.
    #[cfg_attr(feature = "serde", serde(default))]
    pub extra_effort: u32,
}

impl PlannedAction {
    pub fn new(action: ActionKind) -> Self {
        Self {
            action,
            target_location: None,
            target_players: Vec::new(),
            target_items: Vec::new(),
            extra_effort: 0,
        }
    }

    pub fn at(mut self, location: TileId) -> Self {
        self.target_location = Some(location);
        self
    }

    pub fn against(mut self, target: PlayerId) -> Self {
        self.target_players.push(target);
        self
    }
}

/// Which plan slot a participant matched on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PlanKey {
    Main,
    Secondary,
}

/// A character's plan slots for the current turn.
///
/// Invariant: a slot is always cleared after the action it names is
/// dispatched, whether or not the action produced an effect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanSlots {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub main: Option<PlannedAction>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub secondary: Option<PlannedAction>,
}

impl PlanSlots {
    pub fn get(&self, key: PlanKey) -> Option<&PlannedAction> {
        match key {
            PlanKey::Main => self.main.as_ref(),
            PlanKey::Secondary => self.secondary.as_ref(),
        }
    }

    pub fn set(&mut self, key: PlanKey, plan: PlannedAction) {
        match key {
            PlanKey::Main => self.main = Some(plan),
            PlanKey::Secondary => self.secondary = Some(plan),
        }
    }

    pub fn clear(&mut self, key: PlanKey) {
        match key {
            PlanKey::Main => self.main = None,
            PlanKey::Secondary => self.secondary = None,
        }
    }

    /// Slots whose plan names the given action, main first.
    pub fn slots_naming(&self, action: ActionKind) -> Vec<(PlanKey, PlannedAction)> {
        let mut matched = Vec::new();
        if let Some(plan) = &self.main
            && plan.action == action
        {
            matched.push((PlanKey::Main, plan.clone()));
        }
        if let Some(plan) = &self.secondary
            && plan.action == action
        {
            matched.push((PlanKey::Secondary, plan.clone()));
        }
        matched
    }
}
