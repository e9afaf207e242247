//! Content loaders for reading kingdom data from files.
//!
//! Each loader converts one RON/TOML file into kingdom-core types;
//! [`ContentFactory`] ties them to a data directory.

pub mod activities;
pub mod config;
pub mod factory;
pub mod settlements;
pub mod structures;

pub use activities::ActivityLoader;
pub use config::ConfigLoader;
pub use factory::{ContentFactory, KingdomContent};
pub use settlements::{SettlementLoader, SettlementSpec};
pub use structures::StructureLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
