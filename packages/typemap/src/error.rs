use thiserror::Error;

/// Errors that can occur while mapping a source type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeMapError {
    #[error("Strict mode error: type '{0}' is neither a known scalar nor a declared type")]
    UnmappableType(String),

    #[error("Malformed type expression '{0}'")]
    MalformedType(String),
}

pub type TypeMapResult<T> = Result<T, TypeMapError>;
