//! Authentication configuration: session token signing and verification code lifetime

use serde::{Deserialize, Serialize};

/// Secret used when none is configured. Startup logs a warning when it is in use.
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Shared secret used to sign session tokens
    pub secret: String,

    /// Algorithm identifier for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Session token lifetime in minutes
    #[serde(default = "default_access_token_expiry_minutes")]
    pub access_token_expiry_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            algorithm: default_algorithm(),
            access_token_expiry_minutes: default_access_token_expiry_minutes(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set session token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry_minutes = minutes;
        self
    }

    /// Session token lifetime in seconds, as reported to clients in `expires_in`
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.access_token_expiry_minutes * 60
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Lifetime of a pending verification code in seconds
    #[serde(default = "default_code_ttl_seconds")]
    pub code_ttl_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            code_ttl_seconds: default_code_ttl_seconds(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// `JWT_SECRET` takes precedence over the legacy `SECRET_KEY` name.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .or_else(|_| std::env::var("SECRET_KEY"))
            .unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());
        let algorithm = std::env::var("JWT_ALGORITHM").unwrap_or_else(|_| default_algorithm());
        let access_token_expiry_minutes = std::env::var("JWT_ACCESS_TOKEN_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_access_token_expiry_minutes);
        let code_ttl_seconds = std::env::var("VERIFICATION_CODE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_code_ttl_seconds);

        Self {
            jwt: JwtConfig {
                secret,
                algorithm,
                access_token_expiry_minutes,
            },
            code_ttl_seconds,
        }
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn default_access_token_expiry_minutes() -> i64 {
    60
}

fn default_code_ttl_seconds() -> u64 {
    300
}
