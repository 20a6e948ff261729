use thiserror::Error;
use tsconvert_typemap::TypeMapError;

/// Errors surfaced by a conversion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unmappable type '{type_name}' on {declaration}.{field}")]
    UnmappableType {
        declaration: String,
        field: String,
        type_name: String,
    },

    #[error("{declaration}.{field}: {source}")]
    TypeMap {
        declaration: String,
        field: String,
        #[source]
        source: TypeMapError,
    },
}

impl ConvertError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Attach the declaration and field a mapping error happened on
    pub fn from_type_map(declaration: &str, field: &str, error: TypeMapError) -> Self {
        match error {
            TypeMapError::UnmappableType(type_name) => Self::UnmappableType {
                declaration: declaration.to_string(),
                field: field.to_string(),
                type_name,
            },
            other => Self::TypeMap {
                declaration: declaration.to_string(),
                field: field.to_string(),
                source: other,
            },
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
