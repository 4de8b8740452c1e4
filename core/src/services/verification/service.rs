//! Main verification service implementation

use std::sync::Arc;

use cg_shared::phone::mask_phone_number;

use crate::domain::entities::verification_code::{codes_match, VerificationCode};
use crate::errors::{DomainError, DomainResult};

use super::config::VerificationServiceConfig;
use super::traits::{CodeStore, MessagingGateway};

/// Message returned when the messaging channel reports not ready
pub const CHANNEL_UNAVAILABLE_MESSAGE: &str = "messaging channel unavailable";

/// Message returned when the gateway rejects or cannot take a code
pub const DISPATCH_FAILED_MESSAGE: &str = "dispatch failed";

/// Verification service for issuing and checking one-time codes
pub struct VerificationService<G: MessagingGateway, S: CodeStore> {
    /// Messaging gateway used for readiness, dispatch and existence checks
    gateway: Arc<G>,
    /// Store holding pending codes keyed by phone number
    store: Arc<S>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<G: MessagingGateway, S: CodeStore> VerificationService<G, S> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `gateway` - Messaging gateway implementation
    /// * `store` - Code store implementation
    /// * `config` - Service configuration
    pub fn new(gateway: Arc<G>, store: Arc<S>, config: VerificationServiceConfig) -> Self {
        Self {
            gateway,
            store,
            config,
        }
    }

    /// Issue a fresh code for a phone number and dispatch it
    ///
    /// This method:
    /// 1. Requires the messaging channel to report ready
    /// 2. Generates a new code with the OS CSPRNG
    /// 3. Stores it under the phone number, replacing any pending code
    /// 4. Dispatches it through the messaging gateway
    ///
    /// When dispatch fails the stored code is kept; the next request overwrites it.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The code was stored and handed to the gateway
    /// * `Err(DomainError::ServiceUnavailable)` - Channel not ready or dispatch failed
    /// * `Err(DomainError::Internal)` - The code store failed
    pub async fn request_code(&self, phone: &str) -> DomainResult<()> {
        let masked = mask_phone_number(phone);

        if !self.gateway.check_ready().await {
            tracing::warn!(
                phone = %masked,
                event = "channel_not_ready",
                "Messaging channel not ready, refusing to issue code"
            );
            return Err(DomainError::ServiceUnavailable {
                message: CHANNEL_UNAVAILABLE_MESSAGE.to_string(),
            });
        }

        let verification_code = VerificationCode::new(self.config.code_ttl_seconds);

        self.store
            .put(phone, &verification_code.code, verification_code.ttl_seconds)
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %masked,
                    error = %e,
                    event = "code_storage_failed",
                    "Failed to store verification code"
                );
                DomainError::from(e)
            })?;

        tracing::info!(
            phone = %masked,
            ttl_seconds = verification_code.ttl_seconds,
            event = "code_generated",
            "Generated new verification code"
        );

        self.gateway
            .send_code(phone, &verification_code.code)
            .await
            .map_err(|e| {
                tracing::warn!(
                    phone = %masked,
                    error = %e,
                    event = "code_dispatch_failed",
                    "Failed to dispatch verification code"
                );
                DomainError::ServiceUnavailable {
                    message: DISPATCH_FAILED_MESSAGE.to_string(),
                }
            })?;

        tracing::info!(phone = %masked, event = "code_dispatched", "Verification code dispatched");
        Ok(())
    }

    /// Check a submitted code and consume it on success
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The code matched and has been deleted
    /// * `Ok(false)` - No pending code or a different one; nothing is deleted
    /// * `Err(DomainError::Internal)` - The code store failed
    pub async fn verify_code(&self, phone: &str, submitted: &str) -> DomainResult<bool> {
        let masked = mask_phone_number(phone);

        let stored = self.store.get(phone).await.map_err(|e| {
            tracing::error!(
                phone = %masked,
                error = %e,
                event = "code_lookup_failed",
                "Failed to read verification code"
            );
            DomainError::from(e)
        })?;

        let Some(stored) = stored else {
            tracing::info!(phone = %masked, event = "code_missing", "No pending verification code");
            return Ok(false);
        };

        if !codes_match(&stored, submitted) {
            tracing::info!(phone = %masked, event = "code_mismatch", "Verification code mismatch");
            return Ok(false);
        }

        self.store.delete(phone).await.map_err(|e| {
            tracing::error!(
                phone = %masked,
                error = %e,
                event = "code_delete_failed",
                "Failed to consume verification code"
            );
            DomainError::from(e)
        })?;

        tracing::info!(phone = %masked, event = "code_verified", "Verification code consumed");
        Ok(true)
    }

    /// Whether a phone number has an account on the messaging channel
    ///
    /// Fails open: a channel that is not ready, or any lookup failure, yields `true`.
    pub async fn check_existence(&self, phone: &str) -> bool {
        if !self.gateway.check_ready().await {
            tracing::debug!(
                phone = %mask_phone_number(phone),
                event = "existence_check_skipped",
                "Messaging channel not ready, assuming number exists"
            );
            return true;
        }

        self.gateway.check_number_exists(phone).await
    }

    /// Live readiness of the messaging channel
    pub async fn channel_ready(&self) -> bool {
        self.gateway.check_ready().await
    }
}
