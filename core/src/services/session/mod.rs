//! Session service module for JWT issuance
//!
//! Tokens are signed with a shared HMAC secret and are never stored. Validation
//! is left to downstream consumers.

mod service;


pub use service::SessionIssuer;
