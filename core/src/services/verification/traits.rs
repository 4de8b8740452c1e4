//! Traits for the code store and messaging gateway seams

use async_trait::async_trait;

use crate::errors::{GatewayError, StoreError};

/// Expiring key-value store holding pending verification codes
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Store `value` under `key` for `ttl_seconds`, replacing any existing value
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), StoreError>;
    /// Fetch the live value for `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Remove `key`; removing a missing key is not an error
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// Client for the external messaging microservice
///
/// Readiness fails closed and existence fails open. Implementations swallow
/// transport errors for both and only report failures from `send_code`.
#[async_trait]
pub trait MessagingGateway: Send + Sync {
    /// Whether the channel can deliver messages right now; `false` on any error
    async fn check_ready(&self) -> bool;
    /// Deliver a verification code to a phone number
    async fn send_code(&self, phone: &str, code: &str) -> Result<(), GatewayError>;
    /// Whether the number has an account on the channel; `true` on any error
    async fn check_number_exists(&self, phone: &str) -> bool;
}
