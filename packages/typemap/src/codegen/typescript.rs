use crate::codegen::CodeGenerator;
use crate::types::{PropertyType, TsType};

/// TypeScript code generator for mapped types
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptGenerator;

impl TypeScriptGenerator {
    pub fn new() -> Self {
        Self
    }

    fn generate_array_type(&self, element: &TsType) -> String {
        match element {
            // `number | undefined[]` would bind the brackets to `undefined`
            TsType::Optional(_) => format!("({})[]", self.generate_type(element)),
            _ => format!("{}[]", self.generate_type(element)),
        }
    }
}

impl CodeGenerator for TypeScriptGenerator {
    fn generate_type(&self, type_: &TsType) -> String {
        match type_ {
            TsType::Primitive(name) | TsType::Reference(name) => name.clone(),
            TsType::Array(element) => self.generate_array_type(element),
            TsType::Optional(inner) => format!("{} | undefined", self.generate_type(inner)),
        }
    }

    fn generate_property(&self, name: &str, prop: &PropertyType) -> String {
        let optional_marker = if prop.optional { "?" } else { "" };
        format!("{}{}: {}", name, optional_marker, self.generate_type(&prop.type_))
    }
}
