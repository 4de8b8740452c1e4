//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for CodeGate. It provides
//! concrete implementations of the core seams:
//!
//! - **Cache**: Redis client, the Redis-backed code store and an in-process
//!   code store for development
//! - **Messaging**: HTTP client for the WhatsApp messaging microservice
//!
//! Every client is constructed explicitly at startup and injected into the
//! core services.

// Re-export core seam types for convenience
pub use cg_core::errors::{GatewayError, StoreError};
pub use cg_core::services::{CodeStore, MessagingGateway};

/// Cache module - Redis client and code stores
pub mod cache;

/// Messaging module - Messaging microservice client
pub mod messaging;

pub use cache::{CodeStoreBackend, InMemoryCodeStore, RedisClient, VerificationCache};
pub use messaging::WhatsAppGatewayClient;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP client error for external services
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for StoreError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Cache(e) if e.is_io_error() || e.is_timeout() => {
                StoreError::Unavailable(e.to_string())
            }
            other => StoreError::Operation(other.to_string()),
        }
    }
}
