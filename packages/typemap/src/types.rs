use serde::{Deserialize, Serialize};

/// A target (TypeScript) type expression
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TsType {
    /// Primitive resolved through the scalar table, e.g. `number`
    Primitive(String),

    /// Name of another declaration, passed through verbatim
    Reference(String),

    /// Homogeneous sequence (`T[]`)
    Array(Box<TsType>),

    /// Possibly absent value
    Optional(Box<TsType>),
}

/// A mapped type split into the binding's optional marker and the type itself
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyType {
    pub type_: TsType,
    pub optional: bool,
}

impl TsType {
    pub fn primitive(name: impl Into<String>) -> Self {
        TsType::Primitive(name.into())
    }

    pub fn reference(name: impl Into<String>) -> Self {
        TsType::Reference(name.into())
    }

    pub fn array(inner: TsType) -> Self {
        TsType::Array(Box::new(inner))
    }

    /// Wrap in `Optional`, leaving an already optional type untouched
    pub fn optional(inner: TsType) -> Self {
        match inner {
            TsType::Optional(_) => inner,
            other => TsType::Optional(Box::new(other)),
        }
    }

    /// Move a top-level optional layer onto the binding.
    ///
    /// Optional layers nested inside an array stay part of the type.
    pub fn into_property(self) -> PropertyType {
        match self {
            TsType::Optional(inner) => PropertyType {
                type_: *inner,
                optional: true,
            },
            other => PropertyType {
                type_: other,
                optional: false,
            },
        }
    }
}
