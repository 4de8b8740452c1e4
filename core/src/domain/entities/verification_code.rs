//! Verification code entity for phone-based authentication.

use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Smallest code that can be issued
pub const CODE_MIN: u32 = 100_000;

/// Largest code that can be issued
pub const CODE_MAX: u32 = 999_999;

/// Default lifetime of a pending code (5 minutes)
pub const DEFAULT_CODE_TTL_SECONDS: u64 = 300;

/// A freshly issued one-time code
///
/// Only the code string is persisted; the store key is the phone number and
/// expiry is delegated to the store's TTL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode {
    /// The 6-digit code
    pub code: String,

    /// Seconds until the stored code expires
    pub ttl_seconds: u64,
}

impl VerificationCode {
    /// Creates a new verification code with a cryptographically secure random 6-digit code
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            code: Self::generate_code(),
            ttl_seconds,
        }
    }

    /// Draws a code uniformly from `CODE_MIN..=CODE_MAX` using the OS CSPRNG
    pub fn generate_code() -> String {
        OsRng.gen_range(CODE_MIN..=CODE_MAX).to_string()
    }
}

/// Exact string equality, evaluated in constant time for equal-length inputs
pub fn codes_match(stored: &str, submitted: &str) -> bool {
    stored.len() == submitted.len() && constant_time_eq(stored.as_bytes(), submitted.as_bytes())
}
