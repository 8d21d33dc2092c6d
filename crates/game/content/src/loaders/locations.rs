//! Location catalog loader.

use longnight_core::{LocationCatalog, LocationProfile};

use super::ContentError;

const LOCATIONS_FILE: &str = "locations.ron";
const LOCATIONS_DATA: &str = include_str!("../../data/locations.ron");

/// Loads the built-in location catalog from the embedded RON data file.
pub fn default_location_catalog() -> Result<LocationCatalog, ContentError> {
    let profiles: Vec<LocationProfile> =
        ron::from_str(LOCATIONS_DATA).map_err(|source| ContentError::Parse {
            file: LOCATIONS_FILE,
            source,
        })?;
    Ok(LocationCatalog::new(profiles))
}
