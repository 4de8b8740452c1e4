use crate::errors::{DomainError, GatewayError, StoreError};

#[test]
fn test_required_field_error() {
    let err = DomainError::required("phone_number");
    assert_eq!(
        err,
        DomainError::Validation {
            field: "phone_number".to_string(),
            message: "phone_number is required".to_string(),
        }
    );
}

#[test]
fn test_store_error_becomes_internal() {
    let err: DomainError = StoreError::Unavailable("connection refused".to_string()).into();
    match err {
        DomainError::Internal { message } => assert!(message.contains("connection refused")),
        other => panic!("Expected internal error, got {:?}", other),
    }
}

#[test]
fn test_gateway_error_display() {
    let err = GatewayError::dispatch("gateway returned status 500");
    assert_eq!(err.to_string(), "Message dispatch failed: gateway returned status 500");
}
