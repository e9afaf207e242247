//! Structure definitions indexed by name.

use std::collections::BTreeMap;

use kingdom_core::Structure;

/// Every structure a settlement may build, keyed by structure name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StructureCatalog {
    structures: BTreeMap<String, Structure>,
}

impl StructureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition, returning the one it replaced.
    pub fn insert(&mut self, structure: Structure) -> Option<Structure> {
        self.structures.insert(structure.name.clone(), structure)
    }

    pub fn get(&self, name: &str) -> Option<&Structure> {
        self.structures.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.structures.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    /// Structure names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.structures.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Structure> {
        self.structures.values()
    }

    /// Copies the named structures out of the catalog, preserving order and
    /// repetitions. Returns the first unknown name on failure.
    pub fn build_list<'n>(
        &self,
        names: impl IntoIterator<Item = &'n str>,
    ) -> Result<Vec<Structure>, &'n str> {
        names
            .into_iter()
            .map(|name| self.get(name).cloned().ok_or(name))
            .collect()
    }
}

impl FromIterator<Structure> for StructureCatalog {
    fn from_iter<I: IntoIterator<Item = Structure>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for structure in iter {
            catalog.insert(structure);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StructureCatalog {
        [Structure::named("Mill"), Structure::named("Houses")]
            .into_iter()
            .collect()
    }

    #[test]
    fn names_are_sorted() {
        let names: Vec<_> = catalog().names().map(str::to_owned).collect();
        assert_eq!(names, ["Houses", "Mill"]);
    }

    #[test]
    fn build_list_keeps_repetitions() {
        let built = catalog().build_list(["Mill", "Houses", "Mill"]).unwrap();
        let names: Vec<_> = built.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Mill", "Houses", "Mill"]);
    }

    #[test]
    fn build_list_reports_unknown_name() {
        assert_eq!(catalog().build_list(["Mill", "Moat"]), Err("Moat"));
    }

    #[test]
    fn insert_replaces_previous_definition() {
        let mut catalog = catalog();
        let previous = catalog.insert(Structure::named("Mill").with_lots(2));
        assert_eq!(previous, Some(Structure::named("Mill")));
        assert_eq!(catalog.get("Mill").map(Structure::lot_count), Some(2));
        assert_eq!(catalog.len(), 2);
    }
}
