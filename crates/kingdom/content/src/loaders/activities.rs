//! Activity table loader.
//!
//! Maps each kingdom activity to the skills it may be rolled with.

use std::path::Path;

use kingdom_core::ActivityTable;

use crate::loaders::{LoadResult, read_file};

/// Loader for the activity → skills table from TOML files.
pub struct ActivityLoader;

impl ActivityLoader {
    /// Load the activity table from a TOML file.
    ///
    /// TOML format: one key per activity, valued with its skills.
    ///
    /// ```toml
    /// "Quell Unrest" = ["arts", "folklore", "intrigue", "magic", "politics", "warfare"]
    /// "Go Fishing" = ["boating"]
    /// ```
    ///
    /// Activities listed without any skill are rejected; structures referencing
    /// them could never be evaluated.
    pub fn load(path: &Path) -> LoadResult<ActivityTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ActivityTable> {
        let table: ActivityTable = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse activity table TOML: {}", e))?;

        if let Some((activity, _)) = table.iter().find(|(_, skills)| skills.is_empty()) {
            anyhow::bail!("Activity '{}' lists no skills", activity);
        }

        Ok(table)
    }
}
