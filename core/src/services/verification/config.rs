//! Configuration for the verification service

use cg_shared::config::AuthConfig;

use crate::domain::entities::verification_code::DEFAULT_CODE_TTL_SECONDS;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of seconds before a stored verification code expires
    pub code_ttl_seconds: u64,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: DEFAULT_CODE_TTL_SECONDS,
        }
    }
}

impl From<&AuthConfig> for VerificationServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            code_ttl_seconds: config.code_ttl_seconds,
        }
    }
}
