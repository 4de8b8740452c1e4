//! Authentication route handlers
//!
//! This module contains the phone verification endpoints:
//! - Requesting and verifying codes
//! - Checking whether a number is reachable on the messaging channel
//! - Reporting messaging channel readiness

pub mod check_existence;
pub mod request_code;
pub mod verify_code;
pub mod whatsapp_status;

use std::sync::Arc;

use actix_web::{web, Scope};

use cg_core::services::{AuthService, CodeStore, MessagingGateway};

/// Application state shared by the auth handlers
pub struct AppState<G: MessagingGateway, S: CodeStore> {
    pub auth_service: Arc<AuthService<G, S>>,
}

impl<G: MessagingGateway, S: CodeStore> AppState<G, S> {
    pub fn new(auth_service: Arc<AuthService<G, S>>) -> Self {
        Self { auth_service }
    }
}

/// `/api/auth` scope with every auth route registered
pub fn scope<G, S>() -> Scope
where
    G: MessagingGateway + 'static,
    S: CodeStore + 'static,
{
    web::scope("/api/auth")
        .route(
            "/request-code",
            web::post().to(request_code::request_code::<G, S>),
        )
        .route(
            "/verify-code",
            web::post().to(verify_code::verify_code::<G, S>),
        )
        .route(
            "/check-wa-existence",
            web::post().to(check_existence::check_existence::<G, S>),
        )
        .route(
            "/whatsapp/status",
            web::get().to(whatsapp_status::whatsapp_status::<G, S>),
        )
}
