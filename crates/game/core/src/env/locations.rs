//! Location catalog: per-terrain rules for location-gated actions.

use std::collections::BTreeMap;

use super::actions::ActionKind;

/// Terrain classes a tile can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum LocationType {
    Meadow,
    Forest,
    Ruins,
    Spring,
    Swamp,
    Camp,
}

/// Rules for one location type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LocationProfile {
    pub location: LocationType,
    pub walkable: bool,
    /// Actions usable only while standing on this location type.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub special_actions: Vec<ActionKind>,
}

/// The loaded location catalog.
#[derive(Clone, Debug, Default)]
pub struct LocationCatalog {
    profiles: BTreeMap<LocationType, LocationProfile>,
}

impl LocationCatalog {
    pub fn new(profiles: impl IntoIterator<Item = LocationProfile>) -> Self {
        Self {
            profiles: profiles.into_iter().map(|p| (p.location, p)).collect(),
        }
    }

    pub fn get(&self, location: LocationType) -> Option<&LocationProfile> {
        self.profiles.get(&location)
    }

    /// Whether a location-gated action is usable on the given location type.
    pub fn allows_action(&self, location: LocationType, action: ActionKind) -> bool {
        self.profiles
            .get(&location)
            .is_some_and(|p| p.special_actions.contains(&action))
    }
}
