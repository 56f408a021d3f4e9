//! Registry error types.

use thiserror::Error;

/// Errors that can occur when writing to a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Unknown property: {property} on type {type_name}")]
    UnknownProperty { type_name: String, property: String },

    #[error("Inheritance cycle detected involving type: {0}")]
    InheritanceCycle(String),
}

/// Result type for registry writes.
pub type RegistryResult<T> = Result<T, RegistryError>;
