use serde::{Deserialize, Serialize};
use validator::Validate;

use cg_core::domain::value_objects::SessionToken;

// Fields default to empty so a missing field and an empty one are both
// reported by validation with the same message.

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequestCodeRequest {
    /// Phone number the code is sent to, E.164-like, not validated further
    #[serde(default)]
    #[validate(length(min = 1, message = "phone_number is required"))]
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "phone_number is required"))]
    pub phone_number: String,

    /// Code received through the messaging channel
    #[serde(default)]
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckExistenceRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "phone_number is required"))]
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<SessionToken> for TokenResponse {
    fn from(token: SessionToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistenceResponse {
    pub exists: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelStatusResponse {
    pub ready: bool,
    /// Always null; the QR code is served by the messaging microservice itself
    pub qr: Option<String>,
}
