//! Action dispatch and per-action effect resolvers.
//!
//! Each action kind maps to an [`ActionRoutine`]: an eligibility gate, a
//! cost-charging timing, and a resolver function. The routine table replaces
//! a long per-action branch; the per-action differences in eligibility and
//! cost ordering are data on the entry, not ad hoc control flow.

mod combat;
mod dispatch;
mod movement;
mod recovery;
mod scavenge;
mod support;

pub use dispatch::dispatch_action;

use crate::env::{ActionCatalog, ActionDefinition, ActionKind, LocationCatalog, RngSource};
use crate::replay::ReplayEvent;
use crate::state::{ItemKind, MatchState, PlanKey, PlannedAction, PlayerId};

/// A character whose plan slot names the action being dispatched.
#[derive(Clone, Debug)]
pub struct Participant {
    pub player: PlayerId,
    pub plan_key: PlanKey,
    pub plan: PlannedAction,
}

/// What a participant must satisfy to take part in the action's effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EligibilityGate {
    /// Everyone collected participates.
    None,
    /// Must carry at least one item of this kind. Missing participants get
    /// an explicit failed event instead of the action's normal event.
    CarriedItem(ItemKind),
    /// Must stand on a tile whose location type allow-lists the action.
    /// Ineligible participants are dropped silently.
    Location,
    /// Must carry a consumable (food or drink). Ineligible participants are
    /// dropped silently.
    Consumable,
}

/// When the energy cost is charged relative to eligibility filtering.
///
/// The asymmetry is deliberate and per action: item-gated attacks charge the
/// full collected list (a missing weapon still costs the attempt), while
/// location- and resource-gated actions charge only the eligible subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostTiming {
    CollectedList,
    EligibleOnly,
}

/// Everything a resolver may touch during one action's dispatch.
pub struct ResolveCx<'a> {
    pub state: &'a mut MatchState,
    pub catalog: &'a ActionCatalog,
    pub locations: &'a LocationCatalog,
    pub rng: &'a mut dyn RngSource,
    /// The turn the action resolves on (pre-increment).
    pub turn: u32,
    pub def: &'a ActionDefinition,
}

type ResolveFn = fn(&mut ResolveCx<'_>, &[Participant], &mut Vec<ReplayEvent>);

/// Dispatch configuration for one action kind.
pub struct ActionRoutine {
    pub gate: EligibilityGate,
    pub cost: CostTiming,
    pub run: ResolveFn,
}

/// The routine table.
pub fn routine(kind: ActionKind) -> ActionRoutine {
    match kind {
        ActionKind::Move => ActionRoutine {
            gate: EligibilityGate::None,
            cost: CostTiming::CollectedList,
            run: movement::resolve_move,
        },
        ActionKind::Scare => ActionRoutine {
            gate: EligibilityGate::None,
            cost: CostTiming::CollectedList,
            run: movement::resolve_scare,
        },
        ActionKind::Punch => ActionRoutine {
            gate: EligibilityGate::None,
            cost: CostTiming::CollectedList,
            run: combat::resolve_punch,
        },
        ActionKind::AxeAttack => ActionRoutine {
            gate: EligibilityGate::CarriedItem(ItemKind::Axe),
            cost: CostTiming::CollectedList,
            run: combat::resolve_axe,
        },
        ActionKind::KnifeAttack => ActionRoutine {
            gate: EligibilityGate::CarriedItem(ItemKind::Knife),
            cost: CostTiming::CollectedList,
            run: combat::resolve_knife,
        },
        ActionKind::Protect => ActionRoutine {
            gate: EligibilityGate::None,
            cost: CostTiming::CollectedList,
            run: support::resolve_protect,
        },
        ActionKind::Focus => ActionRoutine {
            gate: EligibilityGate::None,
            cost: CostTiming::CollectedList,
            run: support::resolve_focus,
        },
        ActionKind::Sleep => ActionRoutine {
            gate: EligibilityGate::None,
            cost: CostTiming::CollectedList,
            run: recovery::resolve_sleep,
        },
        ActionKind::Recover => ActionRoutine {
            gate: EligibilityGate::Location,
            cost: CostTiming::EligibleOnly,
            run: recovery::resolve_recover,
        },
        ActionKind::UseBandage => ActionRoutine {
            gate: EligibilityGate::CarriedItem(ItemKind::Bandage),
            cost: CostTiming::CollectedList,
            run: recovery::resolve_use_bandage,
        },
        ActionKind::Feed => ActionRoutine {
            gate: EligibilityGate::Consumable,
            cost: CostTiming::EligibleOnly,
            run: recovery::resolve_feed,
        },
        ActionKind::Search => ActionRoutine {
            gate: EligibilityGate::None,
            cost: CostTiming::CollectedList,
            run: scavenge::resolve_search,
        },
        ActionKind::PickUp => ActionRoutine {
            gate: EligibilityGate::None,
            cost: CostTiming::CollectedList,
            run: scavenge::resolve_pick_up,
        },
    }
}
