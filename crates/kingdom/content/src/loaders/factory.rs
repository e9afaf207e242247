//! Content factory for loading a kingdom from a data directory.

use std::path::{Path, PathBuf};

use kingdom_core::{ActivityTable, KingdomConfig, Settlement};

use crate::catalog::StructureCatalog;
use crate::loaders::{ActivityLoader, ConfigLoader, LoadResult, SettlementLoader, StructureLoader};

/// Everything needed to evaluate a kingdom.
#[derive(Clone, Debug)]
pub struct KingdomContent {
    pub config: KingdomConfig,
    pub activities: ActivityTable,
    pub structures: StructureCatalog,
    pub settlements: Vec<Settlement>,
}

/// Content factory that loads all kingdom content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── activities.toml
/// ├── structures.ron
/// └── settlements.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load kingdom configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<KingdomConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the activity table from `activities.toml`.
    pub fn load_activities(&self) -> LoadResult<ActivityTable> {
        ActivityLoader::load(&self.data_dir.join("activities.toml"))
    }

    /// Load the structure catalog from `structures.ron`.
    pub fn load_structures(&self) -> LoadResult<StructureCatalog> {
        StructureLoader::load(&self.data_dir.join("structures.ron"))
    }

    /// Load the settlement roster from `settlements.ron`.
    ///
    /// # Arguments
    ///
    /// * `catalog` - Catalog the roster's structure names resolve against
    pub fn load_settlements(&self, catalog: &StructureCatalog) -> LoadResult<Vec<Settlement>> {
        SettlementLoader::load(&self.data_dir.join("settlements.ron"), catalog)
    }

    /// Load every content file of the data directory.
    pub fn load_kingdom(&self) -> LoadResult<KingdomContent> {
        let config = self.load_config()?;
        let activities = self.load_activities()?;
        let structures = self.load_structures()?;
        let settlements = self.load_settlements(&structures)?;

        tracing::debug!(
            data_dir = %self.data_dir.display(),
            activities = activities.len(),
            structures = structures.len(),
            settlements = settlements.len(),
            "loaded kingdom content"
        );

        Ok(KingdomContent {
            config,
            activities,
            structures,
            settlements,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
