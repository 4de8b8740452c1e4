//! Verification service module for phone-based authentication
//!
//! This module provides the verification code workflow:
//! - Messaging channel readiness gating code issuance
//! - Code generation, storage and dispatch
//! - One-time code verification
//! - Fail-open number existence checks

mod config;
mod service;
mod traits;

#[cfg(test)]
pub(crate) mod tests;

pub use config::VerificationServiceConfig;
pub use service::{VerificationService, CHANNEL_UNAVAILABLE_MESSAGE, DISPATCH_FAILED_MESSAGE};
pub use traits::{CodeStore, MessagingGateway};
