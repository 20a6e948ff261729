use std::collections::{BTreeSet, HashMap};

/// Source scalar names and collection wrappers the mapper understands.
///
/// Scalar lookups are case-insensitive (`String` and `string` both resolve).
/// Collection wrapper names are matched exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarTable {
    scalars: HashMap<String, String>,
    collections: BTreeSet<String>,
}

impl ScalarTable {
    /// A table with no scalars and no collection wrappers
    pub fn empty() -> Self {
        Self {
            scalars: HashMap::new(),
            collections: BTreeSet::new(),
        }
    }

    /// The smallest useful table: `string`, `int` and `long`, wrapped by `List`
    pub fn minimal() -> Self {
        Self::empty()
            .with_scalar("string", "string")
            .with_scalar("int", "number")
            .with_scalar("long", "number")
            .with_collection("List")
    }

    pub fn with_scalar(mut self, source: &str, target: &str) -> Self {
        self.insert_scalar(source, target);
        self
    }

    pub fn with_collection(mut self, name: &str) -> Self {
        self.insert_collection(name);
        self
    }

    /// Add or override a scalar mapping
    pub fn insert_scalar(&mut self, source: &str, target: &str) {
        self.scalars
            .insert(source.to_lowercase(), target.to_string());
    }

    pub fn insert_collection(&mut self, name: &str) {
        self.collections.insert(name.to_string());
    }

    /// Target name for a bare source scalar, if it has one
    pub fn lookup(&self, source: &str) -> Option<&str> {
        self.scalars
            .get(&source.to_lowercase())
            .map(String::as_str)
    }

    pub fn is_collection(&self, name: &str) -> bool {
        self.collections.contains(name)
    }
}

impl Default for ScalarTable {
    fn default() -> Self {
        Self::minimal()
            .with_scalar("char", "string")
            .with_scalar("short", "number")
            .with_scalar("byte", "number")
            .with_scalar("float", "number")
            .with_scalar("double", "number")
            .with_scalar("decimal", "number")
            .with_scalar("bool", "boolean")
            .with_collection("IList")
            .with_collection("ICollection")
            .with_collection("IEnumerable")
            .with_collection("IReadOnlyList")
            .with_collection("IReadOnlyCollection")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_table() {
        let table = ScalarTable::minimal();
        assert_eq!(table.lookup("string"), Some("string"));
        assert_eq!(table.lookup("int"), Some("number"));
        assert_eq!(table.lookup("long"), Some("number"));
        assert_eq!(table.lookup("bool"), None);
        assert!(table.is_collection("List"));
        assert!(!table.is_collection("IEnumerable"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = ScalarTable::default();
        assert_eq!(table.lookup("String"), Some("string"));
        assert_eq!(table.lookup("INT"), Some("number"));
        assert_eq!(table.lookup("Boolean"), None);
    }

    #[test]
    fn test_collections_are_case_sensitive() {
        let table = ScalarTable::default();
        assert!(table.is_collection("IEnumerable"));
        assert!(!table.is_collection("list"));
    }

    #[test]
    fn test_insert_overrides() {
        let mut table = ScalarTable::default();
        table.insert_scalar("Long", "bigint");
        assert_eq!(table.lookup("long"), Some("bigint"));
    }
}
