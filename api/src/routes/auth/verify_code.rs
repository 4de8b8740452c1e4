use actix_web::{web, HttpResponse};
use validator::Validate;

use cg_core::services::{CodeStore, MessagingGateway};

use crate::dto::{TokenResponse, VerifyCodeRequest};
use crate::handlers::error::{handle_domain_error, validation_error_response};

use super::AppState;

/// Handler for POST /api/auth/verify-code
///
/// Consumes the pending code for the number and returns a bearer session
/// token.
///
/// # Request Body
///
/// ```json
/// { "phone_number": "+15551234567", "code": "123456" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "access_token": "eyJhbGciOiJIUzI1NiIs...", "token_type": "bearer", "expires_in": 3600 }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing fields
/// - 401 Unauthorized: wrong, used or expired code (`WWW-Authenticate: Bearer`)
/// - 500 Internal Server Error: code store failure
pub async fn verify_code<G, S>(
    state: web::Data<AppState<G, S>>,
    request: web::Json<VerifyCodeRequest>,
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
        .login(&request.phone_number, &request.code)
        .await
    {
        Ok(token) => HttpResponse::Ok().json(TokenResponse::from(token)),
        Err(error) => handle_domain_error(&error),
    }
}
