use crate::error::{TypeMapError, TypeMapResult};
use crate::options::TypeMapOptions;
use crate::types::TsType;
use std::collections::HashSet;
use tracing::trace;

pub const OPTIONAL_MARKER: char = '?';

/// Deepest collection nesting `map` will unwrap before giving up
pub const MAX_NESTING_DEPTH: usize = 64;

/// Maps source type expressions (`int?`, `List<Address>`, ...) to target types
#[derive(Debug, Clone, Default)]
pub struct TypeMapper {
    options: TypeMapOptions,
    /// Declaration names that count as resolved in strict mode
    known_types: HashSet<String>,
}

impl TypeMapper {
    pub fn new(options: TypeMapOptions) -> Self {
        Self {
            options,
            known_types: HashSet::new(),
        }
    }

    pub fn with_known_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_types.extend(names.into_iter().map(Into::into));
        self
    }

    /// Map a source type expression.
    ///
    /// Trailing optional markers are stripped first and come back as a single
    /// `Optional` layer, then one collection wrapper is unwrapped per level,
    /// and finally the bare name is resolved. Expressions nested deeper than
    /// [`MAX_NESTING_DEPTH`] are rejected as malformed.
    pub fn map(&self, expr: &str) -> TypeMapResult<TsType> {
        self.map_at_depth(expr, 0)
    }

    fn map_at_depth(&self, expr: &str, depth: usize) -> TypeMapResult<TsType> {
        let expr = expr.trim();

        if depth > MAX_NESTING_DEPTH {
            return Err(TypeMapError::MalformedType(expr.to_string()));
        }

        if expr.ends_with(OPTIONAL_MARKER) {
            let base = expr.trim_end_matches(OPTIONAL_MARKER);
            return Ok(TsType::optional(self.map_at_depth(base, depth + 1)?));
        }

        if let Some(element) = self.collection_element(expr) {
            return Ok(TsType::array(self.map_at_depth(element, depth + 1)?));
        }

        self.resolve_name(expr)
    }

    /// Inner type of `Wrapper<Inner>` when `Wrapper` is a known collection
    fn collection_element<'a>(&self, expr: &'a str) -> Option<&'a str> {
        let body = expr.strip_suffix('>')?;
        let (wrapper, element) = body.split_once('<')?;

        if element.is_empty() || !self.options.table.is_collection(wrapper) {
            return None;
        }
        Some(element)
    }

    fn resolve_name(&self, name: &str) -> TypeMapResult<TsType> {
        if name.is_empty() {
            return Err(TypeMapError::MalformedType(name.to_string()));
        }

        if let Some(target) = self.options.table.lookup(name) {
            return Ok(TsType::primitive(target));
        }

        if self.options.strict && !self.known_types.contains(name) {
            return Err(TypeMapError::UnmappableType(name.to_string()));
        }

        trace!(name, "Treating unmapped name as a type reference");
        Ok(TsType::reference(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ScalarTable;

    fn mapper() -> TypeMapper {
        TypeMapper::default()
    }

    #[test]
    fn test_scalars() {
        let m = mapper();
        assert_eq!(m.map("string").unwrap(), TsType::primitive("string"));
        assert_eq!(m.map("int").unwrap(), TsType::primitive("number"));
        assert_eq!(m.map("long").unwrap(), TsType::primitive("number"));
        assert_eq!(m.map("Int").unwrap(), TsType::primitive("number"));
    }

    #[test]
    fn test_unknown_name_is_reference() {
        assert_eq!(mapper().map("Address").unwrap(), TsType::reference("Address"));
    }

    #[test]
    fn test_optional_scalar() {
        assert_eq!(
            mapper().map("long?").unwrap(),
            TsType::optional(TsType::primitive("number"))
        );
    }

    #[test]
    fn test_repeated_markers_collapse() {
        assert_eq!(
            mapper().map("int??").unwrap(),
            TsType::optional(TsType::primitive("number"))
        );
    }

    #[test]
    fn test_collection_of_scalar_unwraps_once() {
        assert_eq!(
            mapper().map("List<int>").unwrap(),
            TsType::array(TsType::primitive("number"))
        );
    }

    #[test]
    fn test_collection_of_reference() {
        assert_eq!(
            mapper().map("List<Address>").unwrap(),
            TsType::array(TsType::reference("Address"))
        );
    }

    #[test]
    fn test_optional_collection_of_optional() {
        assert_eq!(
            mapper().map("List<int?>?").unwrap(),
            TsType::optional(TsType::array(TsType::optional(TsType::primitive("number"))))
        );
    }

    #[test]
    fn test_unknown_generic_passes_through() {
        assert_eq!(
            mapper().map("Lookup<Address>").unwrap(),
            TsType::reference("Lookup<Address>")
        );
        assert_eq!(mapper().map("List<>").unwrap(), TsType::reference("List<>"));
    }

    #[test]
    fn test_alternate_table() {
        let table = ScalarTable::empty()
            .with_scalar("Guid", "string")
            .with_collection("Seq");
        let m = TypeMapper::new(TypeMapOptions::with_table(table));

        assert_eq!(
            m.map("Seq<guid>").unwrap(),
            TsType::array(TsType::primitive("string"))
        );
        assert_eq!(m.map("int").unwrap(), TsType::reference("int"));
        assert_eq!(m.map("List<int>").unwrap(), TsType::reference("List<int>"));
    }

    #[test]
    fn test_strict_rejects_unknown_names() {
        let m = TypeMapper::new(TypeMapOptions::strict());
        assert_eq!(
            m.map("List<Widget>"),
            Err(TypeMapError::UnmappableType("Widget".to_string()))
        );
        assert_eq!(m.map("int?").unwrap(), TsType::optional(TsType::primitive("number")));
    }

    #[test]
    fn test_strict_accepts_known_declarations() {
        let m = TypeMapper::new(TypeMapOptions::strict()).with_known_types(["Address"]);
        assert_eq!(
            m.map("Address?").unwrap(),
            TsType::optional(TsType::reference("Address"))
        );
    }

    fn nested_lists(depth: usize, inner: &str) -> String {
        format!("{}{}{}", "List<".repeat(depth), inner, ">".repeat(depth))
    }

    #[test]
    fn test_deeply_nested_collection_is_malformed() {
        let expr = nested_lists(10_000, "int");
        assert!(matches!(
            mapper().map(&expr),
            Err(TypeMapError::MalformedType(_))
        ));
    }

    #[test]
    fn test_nesting_within_limit_maps() {
        let mut expected = TsType::primitive("number");
        for _ in 0..32 {
            expected = TsType::array(expected);
        }
        assert_eq!(mapper().map(&nested_lists(32, "int")).unwrap(), expected);
    }

    #[test]
    fn test_empty_expression_is_malformed() {
        assert_eq!(
            mapper().map("?"),
            Err(TypeMapError::MalformedType(String::new()))
        );
    }
}
