//! Cooldown ledger.
//!
//! Each character carries a list of `{action, available_on_turn}` entries.
//! An action is usable on a turn when `current_turn + 1 >= available_on_turn`;
//! expired entries are pruned lazily whenever cooldowns are recomputed.

use crate::env::ActionKind;
use crate::state::{CooldownEntry, PlayerCharacter};

impl PlayerCharacter {
    /// Drops entries that no longer gate anything for the next turn.
    pub fn prune_cooldowns(&mut self, current_turn: u32) {
        self.cooldowns
            .retain(|e| e.available_on_turn > current_turn + 1);
    }

    /// Read-only cooldown check, for callers holding a shared borrow.
    pub fn cooldown_active(&self, action: ActionKind, current_turn: u32) -> bool {
        self.cooldowns
            .iter()
            .any(|e| e.action == action && e.available_on_turn > current_turn + 1)
    }

    /// Turns left before the action is usable again. Zero when usable.
    pub fn action_cooldown_remaining(&mut self, action: ActionKind, current_turn: u32) -> u32 {
        self.prune_cooldowns(current_turn);
        self.cooldowns
            .iter()
            .find(|e| e.action == action)
            .map(|e| e.available_on_turn.saturating_sub(current_turn + 1))
            .unwrap_or(0)
    }

    pub fn is_action_on_cooldown(&mut self, action: ActionKind, current_turn: u32) -> bool {
        self.action_cooldown_remaining(action, current_turn) > 0
    }

    /// Records a cooldown for an action resolved on `current_turn`.
    ///
    /// A length of `<= 1` is a no-op cooldown and removes any existing entry;
    /// a longer length sets `available_on_turn = current_turn + length`,
    /// replacing any existing entry for the action.
    pub fn apply_action_cooldown(&mut self, action: ActionKind, length: u32, current_turn: u32) {
        self.cooldowns.retain(|e| e.action != action);
        if length > 1 {
            self.cooldowns.push(CooldownEntry {
                action,
                available_on_turn: current_turn + length,
            });
        }
    }
}
