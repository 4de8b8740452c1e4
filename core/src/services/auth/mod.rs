//! Authentication service module
//!
//! This module ties the verification and session services together into the
//! flow exposed by the API:
//! - Requesting a code for a phone number
//! - Exchanging a code for a session token
//! - Number existence pre-checks and channel status

mod service;

#[cfg(test)]
mod tests;

pub use service::{AuthService, INVALID_CODE_MESSAGE};
