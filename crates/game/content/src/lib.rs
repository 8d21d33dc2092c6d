//! Data-driven content for Longnight matches.
//!
//! This crate houses the static catalogs and loads them from embedded RON
//! data files: the action table (`data/actions/*.ron`) and the location
//! profiles (`data/locations.ron`). Content is consumed by the engine and
//! the runtime; it never appears in match state.
//!
//! All loaders use longnight-core types directly with serde for RON
//! deserialization.

pub mod loaders;

pub use loaders::{ContentError, default_action_catalog, default_location_catalog};

use longnight_core::{ActionCatalog, LocationCatalog};

/// Loads both built-in catalogs.
pub fn load_default_catalogs() -> Result<(ActionCatalog, LocationCatalog), ContentError> {
    Ok((default_action_catalog()?, default_location_catalog()?))
}
