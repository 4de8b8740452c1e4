use actix_web::{web, HttpResponse};
use validator::Validate;

use cg_core::services::{CodeStore, MessagingGateway};

use crate::dto::{MessageResponse, RequestCodeRequest};
use crate::handlers::error::{handle_domain_error, validation_error_response};

use super::AppState;

/// Message returned once the code has been handed to the messaging channel
pub const CODE_REQUESTED_MESSAGE: &str = "Verification code requested successfully.";

/// Handler for POST /api/auth/request-code
///
/// Generates a six-digit code, stores it for the configured TTL and sends it
/// to the number over WhatsApp.
///
/// # Request Body
///
/// ```json
/// { "phone_number": "+15551234567" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "Verification code requested successfully." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: `phone_number` missing or empty
/// - 503 Service Unavailable: channel not ready, or the code could not be sent
pub async fn request_code<G, S>(
    state: web::Data<AppState<G, S>>,
    request: web::Json<RequestCodeRequest>,
) -> HttpResponse
where
    G: MessagingGateway + 'static,
    S: CodeStore + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.auth_service.request_code(&request.phone_number).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: CODE_REQUESTED_MESSAGE.to_string(),
        }),
        Err(error) => handle_domain_error(&error),
    }
}
