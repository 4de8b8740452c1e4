//! Shared utilities and common types for CodeGate services
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and loaders
//! - Phone number helpers for log output

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheBackend, CacheConfig, ConfigError, CorsConfig, Environment,
    JwtConfig, LoggingConfig, MessagingConfig, ServerConfig,
};
pub use utils::phone;
