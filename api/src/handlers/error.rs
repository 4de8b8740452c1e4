//! Mapping of domain and request errors to HTTP responses
//!
//! Every error body has the shape `{"detail": "..."}`.

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::header,
    HttpRequest, HttpResponse,
};
use validator::ValidationErrors;

use cg_core::errors::DomainError;

use crate::dto::ErrorResponse;

/// Detail returned for every internal failure
pub const INTERNAL_ERROR_DETAIL: &str = "An internal error occurred";

/// Convert a domain error into its HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message, .. } => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message.clone()))
        }
        DomainError::ServiceUnavailable { message } => {
            log::warn!("Service unavailable: {}", message);
            HttpResponse::ServiceUnavailable().json(ErrorResponse::new(message.clone()))
        }
        DomainError::Unauthorized { message } => HttpResponse::Unauthorized()
            .insert_header((header::WWW_AUTHENTICATE, "Bearer"))
            .json(ErrorResponse::new(message.clone())),
        DomainError::Configuration { .. } | DomainError::Internal { .. } => {
            log::error!("Internal error: {}", error);
            HttpResponse::InternalServerError().json(ErrorResponse::new(INTERNAL_ERROR_DETAIL))
        }
    }
}

/// Build a 400 response from validator errors
///
/// Reports the first failing field in name order so responses are stable.
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let detail = fields
        .first()
        .and_then(|(field, errs)| {
            errs.first().map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .unwrap_or_else(|| "Invalid request".to_string());

    HttpResponse::BadRequest().json(ErrorResponse::new(detail))
}

/// Turn JSON extractor failures (malformed body, wrong types, bad content type) into 400s
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = match &err {
        JsonPayloadError::ContentType => "Content type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("Invalid JSON body: {}", e),
        _ => "Invalid request body".to_string(),
    };
    log::debug!("Rejected request body: {}", err);

    InternalError::from_response(err, HttpResponse::BadRequest().json(ErrorResponse::new(detail)))
        .into()
}

/// Default handler for unknown routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Not Found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode};
    use validator::Validate;

    use crate::dto::VerifyCodeRequest;

    async fn detail(resp: HttpResponse) -> String {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        body.detail
    }

    #[actix_rt::test]
    async fn test_unauthorized_sets_bearer_challenge() {
        let resp = handle_domain_error(&DomainError::Unauthorized {
            message: "Invalid or expired verification code".to_string(),
        });

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(resp.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
        assert_eq!(detail(resp).await, "Invalid or expired verification code");
    }

    #[actix_rt::test]
    async fn test_internal_errors_hide_details() {
        let resp = handle_domain_error(&DomainError::Internal {
            message: "redis connection refused".to_string(),
        });

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail(resp).await, INTERNAL_ERROR_DETAIL);
    }

    #[actix_rt::test]
    async fn test_service_unavailable_maps_to_503() {
        let resp = handle_domain_error(&DomainError::ServiceUnavailable {
            message: "messaging channel unavailable".to_string(),
        });
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_rt::test]
    async fn test_validation_reports_first_field_by_name() {
        let request = VerifyCodeRequest {
            phone_number: String::new(),
            code: String::new(),
        };
        let errors = request.validate().unwrap_err();

        let resp = validation_error_response(&errors);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(detail(resp).await, "code is required");
    }
}
