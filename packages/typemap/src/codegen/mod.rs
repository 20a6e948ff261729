pub mod typescript;

use crate::types::{PropertyType, TsType};

/// Renders mapped types in a target language
pub trait CodeGenerator {
    /// Generate code for a single type
    fn generate_type(&self, type_: &TsType) -> String;

    /// Generate code for a single property (name + optional marker + type)
    fn generate_property(&self, name: &str, prop: &PropertyType) -> String;
}
