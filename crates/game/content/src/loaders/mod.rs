//! Loaders for embedded RON data files.

mod actions;
mod locations;

pub use actions::default_action_catalog;
pub use locations::default_location_catalog;

/// Errors raised while parsing embedded content data.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: ron::error::SpannedError,
    },
}
