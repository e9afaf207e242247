//! Kingdom configuration loader.

use std::path::Path;

use kingdom_core::KingdomConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for kingdom configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`KingdomConfig::default`].
    pub fn load(path: &Path) -> LoadResult<KingdomConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<KingdomConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kingdom_core::StackingMode;

    #[test]
    fn reads_stacking_mode() {
        let config = ConfigLoader::parse(r#"stacking_mode = "all-structures-stack""#).unwrap();
        assert_eq!(config.stacking_mode, StackingMode::AllStructuresStack);
    }

    #[test]
    fn empty_file_is_the_default_config() {
        assert_eq!(ConfigLoader::parse("").unwrap(), KingdomConfig::default());
    }

    #[test]
    fn unknown_mode_is_an_error() {
        let err = ConfigLoader::parse(r#"stacking_mode = "everything""#).unwrap_err();
        assert!(err.to_string().contains("config TOML"));
    }
}
