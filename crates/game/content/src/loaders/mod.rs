//! Content loaders for reading fighter data from files.
//!
//! Loaders convert RON/TOML files into `fight-core` tables. Parsing failures
//! are returned as errors; authoring mistakes that the simulation can survive
//! are logged through [`crate::ContentError`] and the data is kept.

pub mod bundled;
pub mod config;
pub mod factory;
pub mod fighter;

pub use bundled::{BUNDLED_FIGHTER, bundled_config, bundled_fighter};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use fighter::{FighterFile, FighterLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
