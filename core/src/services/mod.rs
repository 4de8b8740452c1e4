//! Business services containing domain logic and use cases.

pub mod auth;
pub mod session;
pub mod verification;

// Re-export commonly used types
pub use auth::{AuthService, INVALID_CODE_MESSAGE};
pub use session::SessionIssuer;
pub use verification::{
    CodeStore, MessagingGateway, VerificationService, VerificationServiceConfig,
    CHANNEL_UNAVAILABLE_MESSAGE, DISPATCH_FAILED_MESSAGE,
};
