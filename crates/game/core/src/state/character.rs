//! Character state: stats, conditions, cooldowns, position, and plans.

use bitflags::bitflags;

use super::common::{PlayerId, Position};
use super::inventory::InventoryState;
use super::plan::PlanSlots;
use crate::env::ActionKind;
use crate::state::ItemId;
use std::collections::BTreeSet;

/// A bounded resource with a current and maximum value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meter {
    pub current: u32,
    pub maximum: u32,
}

impl Meter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn deficit(&self) -> u32 {
        self.maximum.saturating_sub(self.current)
    }

    /// Adds up to `amount`, clamped at the maximum. Returns the amount
    /// actually gained.
    pub fn gain(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.deficit());
        self.current += gained;
        gained
    }

    /// Removes up to `amount`, clamped at zero. Returns the amount actually
    /// lost.
    pub fn lose(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current);
        self.current -= lost;
        lost
    }
}

/// Energy with a temporary bonus pool consumed before the ordinary reserve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyMeter {
    pub current: u32,
    pub maximum: u32,
    pub temporary: u32,
}

impl EnergyMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current,
            maximum,
            temporary: 0,
        }
    }

    /// Total energy available for spending this turn.
    pub fn available(&self) -> u32 {
        self.current + self.temporary
    }

    pub fn deficit(&self) -> u32 {
        self.maximum.saturating_sub(self.current)
    }

    /// Drains up to `amount`, temporary pool first. Returns the amount
    /// actually drained.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let from_temporary = amount.min(self.temporary);
        self.temporary -= from_temporary;
        let from_current = (amount - from_temporary).min(self.current);
        self.current -= from_current;
        from_temporary + from_current
    }

    /// Restores up to `amount` of ordinary energy, clamped at the maximum.
    /// The temporary pool is unaffected. Returns the amount gained.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.deficit());
        self.current += gained;
        gained
    }
}

bitflags! {
    /// Condition flags attached to a character.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Condition: u8 {
        /// Incoming damage is reduced by one third.
        const PROTECTED = 1 << 0;
        /// Eliminated. Dead characters are skipped by targeting and bots.
        const DEAD = 1 << 1;
        /// Downed but not eliminated. Counts as incapacitated for readiness.
        const UNCONSCIOUS = 1 << 2;
    }
}

/// One cooldown ledger entry: the action becomes usable again on the turn
/// where `current_turn + 1 >= available_on_turn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CooldownEntry {
    pub action: ActionKind,
    pub available_on_turn: u32,
}

/// One participant, human or bot.
///
/// Created on first join (or bot allocation) and destroyed only with the
/// match. The engine mutates characters in place during a resolution pass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerCharacter {
    pub id: PlayerId,
    pub health: Meter,
    pub energy: EnergyMeter,
    pub load: Meter,
    pub inventory: InventoryState,
    pub conditions: Condition,
    /// Cooldown ledger; pruned lazily whenever cooldowns are recomputed.
    pub cooldowns: Vec<CooldownEntry>,
    pub position: Option<Position>,
    pub plan: PlanSlots,
    /// Item ids this character has personally discovered via searching.
    /// Gates what the character can pick up or see on the map.
    pub found_items: BTreeSet<ItemId>,
}

impl PlayerCharacter {
    pub fn new(id: PlayerId, health: Meter, energy: EnergyMeter, load: Meter) -> Self {
        Self {
            id,
            health,
            energy,
            load,
            inventory: InventoryState::default(),
            conditions: Condition::empty(),
            cooldowns: Vec::new(),
            position: None,
            plan: PlanSlots::default(),
            found_items: BTreeSet::new(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.conditions.contains(Condition::DEAD)
    }

    /// Dead or unconscious characters never block turn readiness.
    pub fn is_incapacitated(&self) -> bool {
        self.conditions
            .intersects(Condition::DEAD | Condition::UNCONSCIOUS)
    }

    pub fn is_protected(&self) -> bool {
        self.conditions.contains(Condition::PROTECTED)
    }

    /// Applies damage floored at remaining health. Marks the character dead
    /// at zero health. Returns `(taken, eliminated)`; `eliminated` is true
    /// only on the transition to zero.
    pub fn apply_damage(&mut self, amount: u32) -> (u32, bool) {
        let taken = self.health.lose(amount);
        if self.health.current == 0 && taken > 0 && !self.is_dead() {
            self.conditions.insert(Condition::DEAD);
            return (taken, true);
        }
        (taken, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character() -> PlayerCharacter {
        PlayerCharacter::new(
            PlayerId::from("alice"),
            Meter::new(10, 12),
            EnergyMeter::new(20, 30),
            Meter::new(0, 50),
        )
    }

    #[test]
    fn energy_drains_temporary_pool_first() {
        let mut energy = EnergyMeter::new(10, 30);
        energy.temporary = 4;

        assert_eq!(energy.drain(6), 6);
        assert_eq!(energy.temporary, 0);
        assert_eq!(energy.current, 8);
    }

    #[test]
    fn energy_drain_clamps_at_zero() {
        let mut energy = EnergyMeter::new(3, 30);
        energy.temporary = 1;

        assert_eq!(energy.drain(10), 4);
        assert_eq!(energy.available(), 0);
    }

    #[test]
    fn damage_is_floored_at_remaining_health() {
        let mut c = character();
        let (taken, eliminated) = c.apply_damage(25);

        assert_eq!(taken, 10);
        assert!(eliminated);
        assert!(c.is_dead());
    }

    #[test]
    fn eliminated_reported_once_at_transition() {
        let mut c = character();
        assert_eq!(c.apply_damage(8), (8, false));
        assert_eq!(c.apply_damage(8), (2, true));
        // Already dead: nothing left to take, no second elimination.
        assert_eq!(c.apply_damage(8), (0, false));
    }

    #[test]
    fn meter_gain_clamps_at_maximum() {
        let mut health = Meter::new(10, 12);
        assert_eq!(health.gain(5), 2);
        assert_eq!(health.current, 12);
    }
}
