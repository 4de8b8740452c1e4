//! Unit tests for backend selection

use cg_core::services::CodeStore;
use cg_shared::config::{CacheBackend, CacheConfig};

use crate::cache::CodeStoreBackend;

#[tokio::test]
async fn test_memory_backend_from_config() {
    let config = CacheConfig {
        backend: CacheBackend::Memory,
        ..Default::default()
    };

    let backend = CodeStoreBackend::from_config(&config).await.unwrap();
    assert_eq!(backend.name(), "memory");

    backend.put("+15551234567", "123456", 300).await.unwrap();
    assert_eq!(
        backend.get("+15551234567").await.unwrap(),
        Some("123456".to_string())
    );
    backend.delete("+15551234567").await.unwrap();
    assert_eq!(backend.get("+15551234567").await.unwrap(), None);
}

#[tokio::test]
async fn test_redis_backend_unreachable_is_error() {
    let config = CacheConfig {
        backend: CacheBackend::Redis,
        url: "redis://127.0.0.1:1".to_string(),
        connect_attempts: 1,
        connection_timeout: 1,
        ..Default::default()
    };

    assert!(CodeStoreBackend::from_config(&config).await.is_err());
}
