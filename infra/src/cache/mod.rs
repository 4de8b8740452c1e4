//! Cache module for verification code storage
//!
//! This module provides the Redis client, the Redis-backed code store, an
//! in-process code store and the enum that picks between them at startup.

pub mod backend;
pub mod memory_store;
pub mod redis_client;
pub mod verification_cache;

#[cfg(test)]
mod tests;

pub use backend::CodeStoreBackend;
pub use memory_store::InMemoryCodeStore;
pub use redis_client::RedisClient;
pub use verification_cache::VerificationCache;

// Re-export commonly used types
pub use cg_shared::config::CacheConfig;
