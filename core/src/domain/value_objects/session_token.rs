//! Session token value object returned after a successful verification.

use serde::{Deserialize, Serialize};

/// Token type reported to clients
pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// Signed session token together with its metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionToken {
    /// Signed JWT
    pub access_token: String,

    /// Always `"bearer"`
    pub token_type: String,

    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl SessionToken {
    /// Creates a bearer token response
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in,
        }
    }
}
