//! Cache configuration module

use serde::{Deserialize, Serialize};

use super::{parse_setting, ConfigError};

/// Which store keeps pending verification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Redis server (production)
    #[default]
    Redis,
    /// In-process map, lost on restart (development)
    Memory,
}

impl std::str::FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "redis" => Ok(CacheBackend::Redis),
            "memory" | "in-memory" | "inmemory" => Ok(CacheBackend::Memory),
            _ => Err(format!("Invalid cache backend: {}", s)),
        }
    }
}

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Backend used for verification codes
    #[serde(default)]
    pub backend: CacheBackend,

    /// Redis connection URL
    #[serde(default = "default_url")]
    pub url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Connection attempts made at startup before giving up
    #[serde(default = "default_connect_attempts")]
    pub connect_attempts: u32,

    /// Enable cache key prefix
    #[serde(default)]
    pub key_prefix: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            url: default_url(),
            connection_timeout: default_connection_timeout(),
            connect_attempts: default_connect_attempts(),
            key_prefix: None,
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    ///
    /// An unrecognised `CACHE_BACKEND` is an error rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = parse_setting("CACHE_BACKEND", std::env::var("CACHE_BACKEND").ok())?;
        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| default_url());
        let connection_timeout = std::env::var("REDIS_CONNECTION_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_connection_timeout);
        let key_prefix = std::env::var("REDIS_KEY_PREFIX").ok().filter(|p| !p.is_empty());

        Ok(Self {
            backend,
            url,
            connection_timeout,
            key_prefix,
            ..Default::default()
        })
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the key prefix for all cache keys
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Generate a cache key with prefix
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}

fn default_url() -> String {
    String::from("redis://redis:6379/0")
}

fn default_connection_timeout() -> u64 {
    5
}

fn default_connect_attempts() -> u32 {
    3
}
