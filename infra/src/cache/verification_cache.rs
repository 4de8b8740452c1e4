//! Redis-backed verification code store
//!
//! Codes are stored under `verification:code:{phone}` (optionally behind the
//! configured key prefix) with a Redis expiry, so a new code for the same
//! number replaces the old one and expired codes disappear on their own.

use async_trait::async_trait;
use tracing::debug;

use cg_core::errors::StoreError;
use cg_core::services::CodeStore;
use cg_shared::phone::mask_phone_number;

use crate::cache::RedisClient;

/// Verification code store over a shared Redis connection
#[derive(Clone)]
pub struct VerificationCache {
    /// Redis client for cache operations
    redis_client: RedisClient,
}

impl VerificationCache {
    /// Create a new verification cache over an existing Redis client
    pub fn new(redis_client: RedisClient) -> Self {
        Self { redis_client }
    }

    /// Redis key for a phone number's pending code
    fn code_key(&self, phone: &str) -> String {
        self.redis_client.config().make_key(&format_code_key(phone))
    }
}

#[async_trait]
impl CodeStore for VerificationCache {
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), StoreError> {
        debug!(phone = %mask_phone_number(key), ttl_seconds, "Storing verification code");
        self.redis_client
            .set_with_expiry(&self.code_key(key), value, ttl_seconds)
            .await
            .map_err(StoreError::from)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.redis_client
            .get(&self.code_key(key))
            .await
            .map_err(StoreError::from)
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.redis_client
            .delete(&self.code_key(key))
            .await
            .map(|_| ())
            .map_err(StoreError::from)
    }
}

/// Format Redis key for verification code storage
pub(crate) fn format_code_key(phone: &str) -> String {
    format!("verification:code:{}", phone)
}
