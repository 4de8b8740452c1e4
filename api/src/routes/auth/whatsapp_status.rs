use actix_web::{web, HttpResponse};

use cg_core::services::{CodeStore, MessagingGateway};

use crate::dto::ChannelStatusResponse;

use super::AppState;

/// Handler for GET /api/auth/whatsapp/status
///
/// Live readiness of the messaging channel. `qr` is always null here.
pub async fn whatsapp_status<G, S>(state: web::Data<AppState<G, S>>) -> HttpResponse
where
    G: MessagingGateway + 'static,
    S: CodeStore + 'static,
{
    let ready = state.auth_service.channel_status().await;

    HttpResponse::Ok().json(ChannelStatusResponse { ready, qr: None })
}
