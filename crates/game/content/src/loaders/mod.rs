//! Content loaders for reading battle data from files.
//!
//! Catalog and scenario files are RON, the battle configuration is TOML.

pub mod catalog;
pub mod config;
pub mod factory;
pub mod scenario;

pub use catalog::{GenesLoader, ShipsLoader, WeaponsLoader};
pub use config::{BattleConfig, ConfigLoader};
pub use factory::ContentFactory;
pub use scenario::ScenarioLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
