//! CLI configuration from environment variables.
use std::env;
use std::path::PathBuf;

use kingdom_core::StackingMode;

/// Data directory bundled with kingdom-content.
pub const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../content/data");

/// Settings shared by every subcommand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory holding config.toml, activities.toml, structures.ron and settlements.ron.
    pub data_dir: PathBuf,
    /// Overrides the stacking mode from config.toml when set.
    pub stacking_mode: Option<StackingMode>,
    /// Pretty-print JSON reports.
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            stacking_mode: None,
            pretty: false,
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `KINGDOM_DATA_DIR` - Content directory (default: bundled data)
    /// - `KINGDOM_STACKING_MODE` - `same-structures-stack` or `all-structures-stack`
    /// - `KINGDOM_PRETTY` - `true` to pretty-print reports (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`CliConfig::from_env`] with an arbitrary variable source.
    /// Unparseable values are ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("KINGDOM_DATA_DIR").filter(|dir| !dir.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(mode) = parse_var::<StackingMode>(&lookup, "KINGDOM_STACKING_MODE") {
            config.stacking_mode = Some(mode);
        }
        if let Some(pretty) = parse_var::<bool>(&lookup, "KINGDOM_PRETTY") {
            config.pretty = pretty;
        }

        config
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment variable");
            None
        }
    }
}
