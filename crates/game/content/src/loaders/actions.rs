//! Action catalog loader.

use longnight_core::{ActionCatalog, ActionDefinition};

use super::ContentError;

/// One embedded data file per action category.
const FILES: [(&str, &str); 5] = [
    (
        "actions/movement.ron",
        include_str!("../../data/actions/movement.ron"),
    ),
    (
        "actions/combat.ron",
        include_str!("../../data/actions/combat.ron"),
    ),
    (
        "actions/support.ron",
        include_str!("../../data/actions/support.ron"),
    ),
    (
        "actions/recovery.ron",
        include_str!("../../data/actions/recovery.ron"),
    ),
    (
        "actions/scavenge.ron",
        include_str!("../../data/actions/scavenge.ron"),
    ),
];

/// Loads the built-in action catalog from the embedded RON data files.
pub fn default_action_catalog() -> Result<ActionCatalog, ContentError> {
    let mut definitions = Vec::new();
    for (file, data) in FILES {
        let parsed: Vec<ActionDefinition> =
            ron::from_str(data).map_err(|source| ContentError::Parse { file, source })?;
        definitions.extend(parsed);
    }
    Ok(ActionCatalog::new(definitions))
}
