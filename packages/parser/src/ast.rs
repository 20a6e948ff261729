use serde::{Deserialize, Serialize};

/// Ordered list of finalized declarations, outer declarations first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub declarations: Vec<Declaration>,
}

impl Document {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Names of every declaration in the document, in output order
    pub fn declaration_names(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(|decl| decl.name.as_str())
    }

    pub fn find(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|decl| decl.name == name)
    }
}

/// A named aggregate of fields (one `class` body in the source)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Declaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, source_type: impl Into<String>) -> Self {
        self.fields.push(Field::new(name, source_type));
        self
    }
}

/// One auto-property: `public TYPE Name { get; set; }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    /// Source type expression exactly as written, e.g. `List<Address>?`
    pub source_type: String,
}

impl Field {
    pub fn new(name: impl Into<String>, source_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_type: source_type.into(),
        }
    }
}
