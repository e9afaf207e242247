//! Settlement roster loader.
//!
//! Settlements list the structures they contain by catalog name; the loader
//! resolves each name into a full definition.

use std::path::Path;

use kingdom_core::Settlement;
use serde::{Deserialize, Serialize};

use crate::catalog::StructureCatalog;
use crate::loaders::{LoadResult, read_file};

/// Settlement entry as written in `settlements.ron`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementSpec {
    pub name: String,
    pub level: i32,
    #[serde(default)]
    pub capital: bool,
    /// Catalog names, one entry per copy built.
    #[serde(default)]
    pub structures: Vec<String>,
}

impl SettlementSpec {
    /// Replaces structure names with their catalog definitions.
    pub fn resolve(&self, catalog: &StructureCatalog) -> LoadResult<Settlement> {
        let structures = catalog
            .build_list(self.structures.iter().map(String::as_str))
            .map_err(|name| {
                anyhow::anyhow!(
                    "Settlement '{}' references unknown structure '{}'",
                    self.name,
                    name
                )
            })?;

        Ok(Settlement {
            name: self.name.clone(),
            level: self.level,
            capital: self.capital,
            structures,
        })
    }
}

/// Loader for the settlement roster from RON files.
pub struct SettlementLoader;

impl SettlementLoader {
    /// Load the roster from a RON file and resolve it against `catalog`.
    ///
    /// RON format: `Vec<SettlementSpec>`.
    pub fn load(path: &Path, catalog: &StructureCatalog) -> LoadResult<Vec<Settlement>> {
        let content = read_file(path)?;
        Self::parse(&content, catalog)
    }

    pub fn parse(content: &str, catalog: &StructureCatalog) -> LoadResult<Vec<Settlement>> {
        let specs: Vec<SettlementSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse settlement roster RON: {}", e))?;

        specs.iter().map(|spec| spec.resolve(catalog)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kingdom_core::Structure;

    fn catalog() -> StructureCatalog {
        [Structure::named("Mill"), Structure::named("Houses")]
            .into_iter()
            .collect()
    }

    #[test]
    fn resolves_structures_by_name() {
        let roster = SettlementLoader::parse(
            r#"[
                (name: "Restov", level: 10, capital: true, structures: ["Houses", "Mill", "Houses"]),
                (name: "Oleg's", level: 1),
            ]"#,
            &catalog(),
        )
        .unwrap();

        assert_eq!(roster.len(), 2);
        assert!(roster[0].capital);
        assert_eq!(roster[0].structures.len(), 3);
        assert_eq!(roster[0].structures[2].name, "Houses");
        assert!(!roster[1].capital);
        assert!(roster[1].structures.is_empty());
    }

    #[test]
    fn unknown_structure_names_the_settlement() {
        let err = SettlementLoader::parse(
            r#"[(name: "Tuskwater", level: 2, structures: ["Moat"])]"#,
            &catalog(),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Settlement 'Tuskwater' references unknown structure 'Moat'"
        );
    }
}
