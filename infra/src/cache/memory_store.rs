//! In-process verification code store
//!
//! Keeps codes in a map guarded by an async lock. Expiry is checked against
//! `tokio::time::Instant`, so tests can drive it with a paused clock. Every
//! write sweeps out expired entries, keeping the map bounded by the codes that
//! are still live. Contents are lost on restart; intended for development and
//! tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use cg_core::errors::StoreError;
use cg_core::services::CodeStore;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Expiring in-memory key-value store
#[derive(Debug, Clone, Default)]
pub struct InMemoryCodeStore {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl InMemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries held in the map, live or not
    #[cfg(test)]
    pub(crate) async fn held_count(&self) -> usize {
        self.entries.read().await.len()
    }
}

/// Drop every expired entry, returning how many were removed
fn purge_expired(entries: &mut HashMap<String, Entry>, now: Instant) -> usize {
    let before = entries.len();
    entries.retain(|_, entry| entry.is_live(now));
    before - entries.len()
}

#[async_trait]
impl CodeStore for InMemoryCodeStore {
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), StoreError> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        let purged = purge_expired(&mut entries, now);
        if purged > 0 {
            debug!(purged, "Purged expired verification codes");
        }

        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: now + Duration::from_secs(ttl_seconds),
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        match entries.get(key) {
            Some(entry) if entry.is_live(now) => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                debug!("Evicted expired entry on read");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
