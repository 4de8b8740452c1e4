//! Errors raised at the boundaries to the code store and the messaging gateway
//!
//! Adapters translate transport failures into these types so that raw network
//! or driver details never travel further up the stack.

use thiserror::Error;

/// Failure reported by the messaging gateway client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The code could not be handed to the gateway (network, timeout or non-2xx)
    #[error("Message dispatch failed: {reason}")]
    DispatchFailure { reason: String },
}

impl GatewayError {
    pub fn dispatch(reason: impl Into<String>) -> Self {
        GatewayError::DispatchFailure {
            reason: reason.into(),
        }
    }
}

/// Failure reported by a code store backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Code store unavailable: {0}")]
    Unavailable(String),

    #[error("Code store operation failed: {0}")]
    Operation(String),
}
