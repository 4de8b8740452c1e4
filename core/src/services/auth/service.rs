//! Main authentication service implementation

use std::sync::Arc;

use cg_shared::config::AuthConfig;
use cg_shared::phone::mask_phone_number;

use crate::domain::value_objects::SessionToken;
use crate::errors::{DomainError, DomainResult};
use crate::services::session::SessionIssuer;
use crate::services::verification::{
    CodeStore, MessagingGateway, VerificationService, VerificationServiceConfig,
};

/// Message returned when a submitted code is wrong, consumed or expired
pub const INVALID_CODE_MESSAGE: &str = "Invalid or expired verification code";

/// Authentication service for the complete code-to-session flow
pub struct AuthService<G: MessagingGateway, S: CodeStore> {
    /// Verification service for code handling
    verification_service: Arc<VerificationService<G, S>>,
    /// Issuer for session tokens
    session_issuer: Arc<SessionIssuer>,
}

impl<G: MessagingGateway, S: CodeStore> AuthService<G, S> {
    /// Create a new authentication service
    pub fn new(
        verification_service: Arc<VerificationService<G, S>>,
        session_issuer: Arc<SessionIssuer>,
    ) -> Self {
        Self {
            verification_service,
            session_issuer,
        }
    }

    /// Build the service and its collaborators from configuration
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` when the JWT settings are unusable.
    pub fn from_config(gateway: Arc<G>, store: Arc<S>, config: &AuthConfig) -> DomainResult<Self> {
        let session_issuer = SessionIssuer::new(&config.jwt)?;
        let verification_service = VerificationService::new(
            gateway,
            store,
            VerificationServiceConfig::from(config),
        );

        Ok(Self::new(
            Arc::new(verification_service),
            Arc::new(session_issuer),
        ))
    }

    /// Issue and dispatch a verification code
    pub async fn request_code(&self, phone: &str) -> DomainResult<()> {
        let phone = require("phone_number", phone)?;
        self.verification_service.request_code(phone).await
    }

    /// Exchange a verification code for a session token
    ///
    /// # Returns
    ///
    /// * `Ok(SessionToken)` - The code matched and was consumed
    /// * `Err(DomainError::Unauthorized)` - Wrong, consumed or expired code
    pub async fn login(&self, phone: &str, code: &str) -> DomainResult<SessionToken> {
        let phone = require("phone_number", phone)?;
        let code = require("code", code)?;

        if !self.verification_service.verify_code(phone, code).await? {
            return Err(DomainError::Unauthorized {
                message: INVALID_CODE_MESSAGE.to_string(),
            });
        }

        let token = self.session_issuer.issue_token(phone)?;

        tracing::info!(
            phone = %mask_phone_number(phone),
            expires_in = token.expires_in,
            event = "session_issued",
            "Issued session token"
        );

        Ok(token)
    }

    /// Whether a number exists on the messaging channel (fail-open)
    pub async fn check_existence(&self, phone: &str) -> DomainResult<bool> {
        let phone = require("phone_number", phone)?;
        Ok(self.verification_service.check_existence(phone).await)
    }

    /// Live readiness of the messaging channel
    pub async fn channel_status(&self) -> bool {
        self.verification_service.channel_ready().await
    }
}

fn require<'a>(field: &str, value: &'a str) -> DomainResult<&'a str> {
    if value.trim().is_empty() {
        return Err(DomainError::required(field));
    }
    Ok(value)
}
