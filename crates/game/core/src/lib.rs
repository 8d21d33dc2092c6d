//! Deterministic turn-resolution core for Longnight matches.
//!
//! `longnight-core` defines the canonical rules of the game: match state,
//! the action catalog types, per-action effect resolvers, the bot decision
//! engine, and fog-of-war tailoring of replay events. All state mutation for
//! a turn flows through [`engine::TurnEngine::resolve_turn`], and supporting
//! crates depend on the types re-exported here.
//!
//! The core performs no I/O. Persistence, transport, and scheduling live in
//! the runtime crate; randomness is injected through [`env::RngSource`].
pub mod action;
pub mod bot;
pub mod config;
pub mod cooldown;
pub mod engine;
pub mod env;
pub mod replay;
pub mod state;
pub mod targeting;

pub use config::GameConfig;
pub use engine::{EngineError, TurnEngine, TurnOutcome};
pub use env::{
    ActionCatalog, ActionCategory, ActionDefinition, ActionKind, ActionTag, LocationCatalog,
    LocationProfile, LocationType, RngSource, SplitMixRng,
};
pub use replay::{
    ActionEvent, EventEffect, EventMetadata, MapEvent, MapEventKind, PlayerEvent, ReplayEvent,
    TargetEntry, tailor_match_for_player, tailor_replay_events,
};
pub use state::{
    AxialCoord, Condition, CooldownEntry, EnergyMeter, InventoryState, ItemId, ItemKind,
    ItemRecord, ItemStack, MapSnapshot, MatchId, MatchSettings, MatchState, Meter, PlanKey,
    PlanSlots, PlannedAction, PlayerCharacter, PlayerId, Position, SpawnError, TileId,
    TileSnapshot,
};
