//! Session token issuer implementation

use std::str::FromStr;

use cg_shared::config::JwtConfig;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::domain::entities::token::Claims;
use crate::domain::value_objects::SessionToken;
use crate::errors::{DomainError, DomainResult};

/// Mints signed session tokens for verified phone numbers
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    header: Header,
    access_token_expiry_minutes: i64,
    expires_in_seconds: i64,
}

impl std::fmt::Debug for SessionIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionIssuer")
            .field("algorithm", &self.header.alg)
            .field("access_token_expiry_minutes", &self.access_token_expiry_minutes)
            .finish_non_exhaustive()
    }
}

impl SessionIssuer {
    /// Creates a new issuer from JWT settings
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` when the secret is empty, the
    /// algorithm is not an HMAC variant, or the expiry is not positive.
    pub fn new(config: &JwtConfig) -> DomainResult<Self> {
        if config.secret.trim().is_empty() {
            return Err(DomainError::Configuration {
                message: "JWT secret must not be empty".to_string(),
            });
        }

        let algorithm = Algorithm::from_str(&config.algorithm).map_err(|_| {
            DomainError::Configuration {
                message: format!("Unknown JWT algorithm: {}", config.algorithm),
            }
        })?;

        if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(DomainError::Configuration {
                message: format!(
                    "JWT algorithm {} is not supported, use an HMAC algorithm",
                    config.algorithm
                ),
            });
        }

        if config.access_token_expiry_minutes <= 0 {
            return Err(DomainError::Configuration {
                message: "JWT expiry must be positive".to_string(),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            header: Header::new(algorithm),
            access_token_expiry_minutes: config.access_token_expiry_minutes,
            expires_in_seconds: config.access_token_expiry_seconds(),
        })
    }

    /// Issues a session token bound to `phone`
    ///
    /// # Returns
    ///
    /// * `Ok(SessionToken)` - Bearer token with its lifetime in seconds
    /// * `Err(DomainError::Internal)` - Encoding failed
    pub fn issue_token(&self, phone: &str) -> DomainResult<SessionToken> {
        let claims = Claims::new_session(phone, self.access_token_expiry_minutes);

        let token = encode(&self.header, &claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("Failed to encode session token: {}", e),
            }
        })?;

        Ok(SessionToken::bearer(token, self.expires_in_seconds))
    }
}
