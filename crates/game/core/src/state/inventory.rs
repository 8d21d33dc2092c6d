//! Carried items, stacked by kind.

use super::item::ItemKind;

/// One inventory stack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ItemStack {
    pub kind: ItemKind,
    pub quantity: u32,
    /// Carry weight of a single item of this kind.
    pub unit_weight: u32,
}

/// A character's carried items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct InventoryState {
    pub stacks: Vec<ItemStack>,
}

impl InventoryState {
    pub fn quantity(&self, kind: ItemKind) -> u32 {
        self.stacks
            .iter()
            .filter(|s| s.kind == kind)
            .map(|s| s.quantity)
            .sum()
    }

    pub fn has(&self, kind: ItemKind) -> bool {
        self.quantity(kind) > 0
    }

    /// Adds one item of the given kind, merging into an existing stack.
    pub fn add(&mut self, kind: ItemKind, unit_weight: u32) {
        if let Some(stack) = self.stacks.iter_mut().find(|s| s.kind == kind) {
            stack.quantity += 1;
        } else {
            self.stacks.push(ItemStack {
                kind,
                quantity: 1,
                unit_weight,
            });
        }
    }

    /// Consumes one item of the given kind. Empty stacks are dropped.
    /// Returns false if none was carried.
    pub fn consume(&mut self, kind: ItemKind) -> bool {
        let Some(stack) = self.stacks.iter_mut().find(|s| s.kind == kind) else {
            return false;
        };
        stack.quantity -= 1;
        if stack.quantity == 0 {
            self.stacks.retain(|s| !(s.kind == kind && s.quantity == 0));
        }
        true
    }
}
