//! Read-only collaborators of the engine.
//!
//! The action and location catalogs are static tables loaded once at startup
//! (the content crate provides the data files); the RNG is the single
//! injectable randomness source every shuffle, tie-break, and weighted draw
//! flows through.

mod actions;
mod locations;
mod rng;

pub use actions::{ActionCatalog, ActionCategory, ActionDefinition, ActionKind, ActionTag};
pub use locations::{LocationCatalog, LocationProfile, LocationType};
pub use rng::{RngSource, SplitMixRng, pick, sample_indices, shuffle, weighted_index};
