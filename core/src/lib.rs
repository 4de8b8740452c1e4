//! # CodeGate Core
//!
//! Core business logic and domain layer for the CodeGate backend.
//! This crate contains domain entities, the verification and session services,
//! the seams to the code store and messaging gateway, and the error types
//! that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
