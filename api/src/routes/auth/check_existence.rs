use actix_web::{web, HttpResponse};
use validator::Validate;

use cg_core::services::{CodeStore, MessagingGateway};

use crate::dto::{CheckExistenceRequest, ExistenceResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};

use super::AppState;

/// Handler for POST /api/auth/check-wa-existence
///
/// Reports whether the number has a WhatsApp account. Answers `true`
/// whenever the messaging channel cannot tell, so clients never block a
/// login on this pre-check.
pub async fn check_existence<G, S>(
    state: web::Data<AppState<G, S>>,
    request: web::Json<CheckExistenceRequest>,
) -> HttpResponse
where
    G: MessagingGateway + 'static,
    S: CodeStore + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .auth_service
        .check_existence(&request.phone_number)
        .await
    {
        Ok(exists) => HttpResponse::Ok().json(ExistenceResponse { exists }),
        Err(error) => handle_domain_error(&error),
    }
}
