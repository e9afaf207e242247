//! Structure catalog loader.

use std::path::Path;

use kingdom_core::Structure;

use crate::catalog::StructureCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for the structure catalog from RON files.
pub struct StructureLoader;

impl StructureLoader {
    /// Load the structure catalog from a RON file.
    ///
    /// RON format: `Vec<Structure>`; omitted fields take their defaults.
    ///
    /// ```ron
    /// #![enable(implicit_some)]
    /// [
    ///     (
    ///         name: "Mill",
    ///         traits: [building],
    ///         consumption_reduction: 1,
    ///     ),
    /// ]
    /// ```
    pub fn load(path: &Path) -> LoadResult<StructureCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Names must be unique and non-blank.
    pub fn parse(content: &str) -> LoadResult<StructureCatalog> {
        let structures: Vec<Structure> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse structure catalog RON: {}", e))?;

        let mut catalog = StructureCatalog::new();
        for (index, structure) in structures.into_iter().enumerate() {
            if structure.name.trim().is_empty() {
                anyhow::bail!("Structure at position {} has no name", index);
            }
            if let Some(previous) = catalog.insert(structure) {
                anyhow::bail!("Structure '{}' is defined more than once", previous.name);
            }
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kingdom_core::{ItemGroup, Skill, StructureTrait};

    #[test]
    fn parses_rules_with_defaults() {
        let catalog = StructureLoader::parse(
            r#"#![enable(implicit_some)]
            [
                (
                    name: "Magic Shop",
                    traits: [building],
                    skill_bonus_rules: [(skill: magic, value: 1, activity: "Supernatural Solution")],
                    available_items_rules: [(value: 1, group: magical)],
                ),
                (name: "Houses", traits: [building, residential]),
            ]
            "#,
        )
        .unwrap();

        let shop = catalog.get("Magic Shop").unwrap();
        assert_eq!(shop.lot_count(), 1);
        assert_eq!(shop.skill_bonus_rules[0].skill, Skill::Magic);
        assert_eq!(
            shop.skill_bonus_rules[0].activity.as_ref().map(|a| a.as_str()),
            Some("Supernatural Solution")
        );
        assert_eq!(shop.available_items_rules[0].group, Some(ItemGroup::Magical));
        assert!(catalog.get("Houses").unwrap().has_trait(StructureTrait::Residential));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = StructureLoader::parse(r#"[(name: "Mill"), (name: "Mill")]"#).unwrap_err();
        assert_eq!(err.to_string(), "Structure 'Mill' is defined more than once");
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(StructureLoader::parse(r#"[(name: "Mill"), (name: "")]"#).is_err());
    }
}
