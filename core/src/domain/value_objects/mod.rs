//! Value objects representing immutable domain concepts.

pub mod session_token;

// Re-export commonly used types
pub use session_token::{SessionToken, TOKEN_TYPE_BEARER};
