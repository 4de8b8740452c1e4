//! Redis cache client implementation
//!
//! This module provides a Redis client with startup retry logic and the basic
//! cache operations needed by the code store: set with expiry, get and
//! delete.
//!
//! Only the initial connection is retried. Operations run once and report
//! their failure to the caller.

use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{debug, error, info, warn};

use cg_shared::config::CacheConfig;

use crate::InfrastructureError;

/// Base delay between connection attempts
const RETRY_BASE_DELAY_MS: u64 = 100;

/// Upper bound for the backoff delay
const RETRY_MAX_DELAY_MS: u64 = 5000;

/// Redis cache client
///
/// Cloning is cheap; clones share the same multiplexed connection.
#[derive(Clone)]
pub struct RedisClient {
    /// Redis multiplexed connection for async operations
    connection: MultiplexedConnection,
    /// Configuration used to create this client
    config: CacheConfig,
}

impl RedisClient {
    /// Connect to Redis, retrying with exponential backoff
    ///
    /// Makes up to `config.connect_attempts` attempts, each bounded by
    /// `config.connection_timeout` seconds.
    ///
    /// # Returns
    /// * `Result<Self, InfrastructureError>` - Redis client or error
    pub async fn connect(config: CacheConfig) -> Result<Self, InfrastructureError> {
        info!(
            url = %mask_url(&config.url),
            attempts = config.connect_attempts,
            event = "redis_connecting",
            "Creating Redis client"
        );

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!(error = %e, "Failed to parse Redis URL");
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection = Self::create_connection_with_retry(&client, &config).await?;

        info!(event = "redis_connected", "Redis client created successfully");

        Ok(Self { connection, config })
    }

    /// Create multiplexed connection with retry logic
    async fn create_connection_with_retry(
        client: &Client,
        config: &CacheConfig,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let max_attempts = config.connect_attempts.max(1);
        let connect_timeout = Duration::from_secs(config.connection_timeout);
        let mut attempts = 0;
        let mut delay = RETRY_BASE_DELAY_MS;

        loop {
            attempts += 1;
            debug!("Attempting to connect to Redis (attempt {})", attempts);

            let outcome = match timeout(connect_timeout, client.get_multiplexed_async_connection()).await {
                Ok(result) => result.map_err(InfrastructureError::Cache),
                Err(_) => Err(InfrastructureError::Config(format!(
                    "Timed out connecting to Redis after {}s",
                    config.connection_timeout
                ))),
            };

            match outcome {
                Ok(connection) => return Ok(connection),
                Err(e) if attempts < max_attempts => {
                    warn!(
                        "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}ms...",
                        attempts, max_attempts, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(RETRY_MAX_DELAY_MS);
                }
                Err(e) => {
                    error!(
                        "Failed to connect to Redis after {} attempts: {}",
                        attempts, e
                    );
                    return Err(e);
                }
            }
        }
    }

    /// Set a value with expiration time, replacing any existing value
    ///
    /// # Arguments
    /// * `key` - Cache key
    /// * `value` - Value to cache
    /// * `expiry_seconds` - Time to live in seconds
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        let mut conn = self.connection.clone();

        conn.set_ex::<_, _, ()>(key, value, expiry_seconds)
            .await
            .map_err(|e| {
                error!(key = key, error = %e, "Failed to set key");
                InfrastructureError::Cache(e)
            })?;

        debug!(key = key, expiry_seconds = expiry_seconds, "Set key with expiry");
        Ok(())
    }

    /// Get a value from cache
    ///
    /// # Returns
    /// * `Result<Option<String>, InfrastructureError>` - Cached value or None if not found
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        let mut conn = self.connection.clone();

        let value = conn.get::<_, Option<String>>(key).await.map_err(|e| {
            error!(key = key, error = %e, "Failed to get key");
            InfrastructureError::Cache(e)
        })?;

        debug!(key = key, found = value.is_some(), "Got key");
        Ok(value)
    }

    /// Delete a key from cache
    ///
    /// # Returns
    /// * `Result<bool, InfrastructureError>` - True if key was deleted, false if not found
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();

        let deleted_count = conn.del::<_, u32>(key).await.map_err(|e| {
            error!(key = key, error = %e, "Failed to delete key");
            InfrastructureError::Cache(e)
        })?;

        debug!(key = key, deleted = deleted_count > 0, "Deleted key");
        Ok(deleted_count > 0)
    }

    /// Check if the Redis connection is healthy
    ///
    /// Performs a PING command to verify connectivity.
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();

        let response: String = redis::cmd("PING").query_async(&mut conn).await.map_err(|e| {
            error!(error = %e, "Redis health check failed");
            InfrastructureError::Cache(e)
        })?;

        Ok(response == "PONG")
    }

    /// Configuration used to create this client
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}

/// Mask sensitive parts of Redis URL for logging
pub(crate) fn mask_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}****{}", &url[..scheme_end + 3], &url[at..])
        }
        _ => url.to_string(),
    }
}
