use crate::table::ScalarTable;

/// Configuration options for type mapping
#[derive(Debug, Clone, Default)]
pub struct TypeMapOptions {
    /// Fail on bare names that are neither scalars nor known declarations.
    /// When false, such names pass through as references to other types.
    pub strict: bool,

    /// Scalar and collection names to resolve against
    pub table: ScalarTable,
}

impl TypeMapOptions {
    /// Create a new options instance with strict mode enabled
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Default::default()
        }
    }

    pub fn with_table(table: ScalarTable) -> Self {
        Self {
            table,
            ..Default::default()
        }
    }
}
