//! Domain entities representing core business objects.

pub mod token;
pub mod verification_code;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use token::Claims;
pub use verification_code::{
    codes_match, VerificationCode, CODE_LENGTH, CODE_MAX, CODE_MIN, DEFAULT_CODE_TTL_SECONDS,
};
