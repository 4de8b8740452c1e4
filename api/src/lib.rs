//! # CodeGate API
//!
//! Actix-web application exposing the phone verification flow. The binary in
//! `main.rs` wires configuration and infrastructure; everything needed to
//! build the application lives here so it can be exercised in tests.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{configure, create_app};
pub use routes::auth::AppState;
