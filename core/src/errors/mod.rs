//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

// Re-export seam error types
pub use types::{GatewayError, StoreError};

use thiserror::Error;

/// Core domain errors
///
/// Each variant maps to one HTTP outcome in the API layer. `Configuration`
/// only ever surfaces at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Service unavailable: {message}")]
    ServiceUnavailable { message: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Build a validation error for a missing or empty field
    pub fn required(field: &str) -> Self {
        DomainError::Validation {
            field: field.to_string(),
            message: format!("{} is required", field),
        }
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::Internal {
            message: err.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
