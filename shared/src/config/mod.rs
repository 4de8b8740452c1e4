//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Session token signing and verification code lifetime
//! - `cache` - Code store backend and Redis configuration
//! - `environment` - Environment detection and logging configuration
//! - `messaging` - Messaging gateway endpoint and timeouts
//! - `server` - HTTP server and CORS configuration
//!
//! Configuration is loaded either from environment variables
//! ([`AppConfig::from_env`]) or from a TOML file overlaid by `CODEGATE__*`
//! variables ([`AppConfig::from_file`]). [`AppConfig::load`] picks one based on
//! `CONFIG_FILE` and validates the result.

pub mod auth;
pub mod cache;
pub mod environment;
pub mod messaging;
pub mod server;

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, DEFAULT_JWT_SECRET};
pub use cache::{CacheBackend, CacheConfig};
pub use environment::{Environment, LoggingConfig};
pub use messaging::MessagingConfig;
pub use server::{CorsConfig, ServerConfig};

/// HMAC algorithm identifiers accepted for session token signing
pub const SUPPORTED_JWT_ALGORITHMS: [&str; 3] = ["HS256", "HS384", "HS512"];

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration for {field}: {message}")]
    Invalid { field: String, message: String },
}

impl ConfigError {
    fn invalid(field: &str, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Parse an optional raw setting, falling back to the type's default when unset or blank
fn parse_setting<T>(field: &str, raw: Option<String>) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = String> + Default,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(value) => value
            .parse()
            .map_err(|message: String| ConfigError::invalid(field, message)),
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    pub cors: CorsConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Cache configuration
    pub cache: CacheConfig,

    /// Messaging gateway configuration
    pub messaging: MessagingConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment
    ///
    /// Fails when `ENVIRONMENT` or `CACHE_BACKEND` holds an unrecognised value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env()?;

        Ok(Self {
            environment,
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(),
            auth: AuthConfig::from_env(),
            cache: CacheConfig::from_env()?,
            messaging: MessagingConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        })
    }

    /// Load configuration from a TOML/YAML/JSON file
    ///
    /// Values can be overridden with `CODEGATE__<SECTION>__<KEY>` variables,
    /// e.g. `CODEGATE__AUTH__JWT__SECRET`. Without an explicit `logging.level`
    /// the level follows the configured environment.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("CODEGATE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let level_set = settings.get_string("logging.level").is_ok();
        let mut config: Self = settings.try_deserialize()?;
        if !level_set {
            config.logging = LoggingConfig::for_environment(config.environment);
        }

        Ok(config)
    }

    /// Load `.env`, read configuration from `CONFIG_FILE` or the environment, and validate it
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = match std::env::var("CONFIG_FILE") {
            Ok(path) if !path.is_empty() => Self::from_file(path)?,
            _ => Self::from_env()?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the service cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let jwt = &self.auth.jwt;
        if jwt.secret.trim().is_empty() {
            return Err(ConfigError::invalid("auth.jwt.secret", "must not be empty"));
        }
        if !SUPPORTED_JWT_ALGORITHMS.contains(&jwt.algorithm.as_str()) {
            return Err(ConfigError::invalid(
                "auth.jwt.algorithm",
                format!(
                    "unsupported algorithm '{}', expected one of {:?}",
                    jwt.algorithm, SUPPORTED_JWT_ALGORITHMS
                ),
            ));
        }
        if jwt.access_token_expiry_minutes <= 0 {
            return Err(ConfigError::invalid(
                "auth.jwt.access_token_expiry_minutes",
                "must be positive",
            ));
        }
        if self.auth.code_ttl_seconds == 0 {
            return Err(ConfigError::invalid("auth.code_ttl_seconds", "must be positive"));
        }

        let messaging = &self.messaging;
        if !(messaging.base_url.starts_with("http://") || messaging.base_url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "messaging.base_url",
                format!("'{}' is not an http(s) URL", messaging.base_url),
            ));
        }
        if messaging.status_timeout_secs == 0
            || messaging.send_timeout_secs == 0
            || messaging.check_timeout_secs == 0
        {
            return Err(ConfigError::invalid("messaging", "timeouts must be positive"));
        }

        if self.cache.backend == CacheBackend::Redis && self.cache.url.is_empty() {
            return Err(ConfigError::invalid("cache.url", "required for the redis backend"));
        }

        Ok(())
    }
}
