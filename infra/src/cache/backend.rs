//! Code store selected from configuration

use async_trait::async_trait;
use tracing::info;

use cg_core::errors::StoreError;
use cg_core::services::CodeStore;
use cg_shared::config::{CacheBackend, CacheConfig};

use crate::cache::{InMemoryCodeStore, RedisClient, VerificationCache};
use crate::InfrastructureError;

/// The code store chosen at startup
#[derive(Clone)]
pub enum CodeStoreBackend {
    Redis(VerificationCache),
    Memory(InMemoryCodeStore),
}

impl CodeStoreBackend {
    /// Build the configured backend
    ///
    /// For Redis this connects eagerly and pings the server, so an unreachable
    /// or unhealthy server is reported here rather than on the first request.
    pub async fn from_config(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        let backend = match config.backend {
            CacheBackend::Redis => {
                let client = RedisClient::connect(config.clone()).await?;
                if !client.health_check().await? {
                    return Err(InfrastructureError::Config(
                        "Redis did not answer PING".to_string(),
                    ));
                }
                CodeStoreBackend::Redis(VerificationCache::new(client))
            }
            CacheBackend::Memory => CodeStoreBackend::Memory(InMemoryCodeStore::new()),
        };

        info!(backend = backend.name(), event = "code_store_ready", "Code store initialized");
        Ok(backend)
    }

    pub fn name(&self) -> &'static str {
        match self {
            CodeStoreBackend::Redis(_) => "redis",
            CodeStoreBackend::Memory(_) => "memory",
        }
    }
}

#[async_trait]
impl CodeStore for CodeStoreBackend {
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), StoreError> {
        match self {
            CodeStoreBackend::Redis(store) => store.put(key, value, ttl_seconds).await,
            CodeStoreBackend::Memory(store) => store.put(key, value, ttl_seconds).await,
        }
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            CodeStoreBackend::Redis(store) => store.get(key).await,
            CodeStoreBackend::Memory(store) => store.get(key).await,
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        match self {
            CodeStoreBackend::Redis(store) => store.delete(key).await,
            CodeStoreBackend::Memory(store) => store.delete(key).await,
        }
    }
}
