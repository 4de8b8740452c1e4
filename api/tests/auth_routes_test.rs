//! Route tests for the auth API running against an in-process code store

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::{http::header, http::StatusCode, test, web};
use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::{json, Value};

use cg_api::{create_app, AppState};
use cg_core::domain::entities::Claims;
use cg_core::errors::GatewayError;
use cg_core::services::{AuthService, MessagingGateway};
use cg_infra::InMemoryCodeStore;
use cg_shared::config::{AuthConfig, CorsConfig, JwtConfig};

const SECRET: &str = "route-test-secret";
const PHONE: &str = "+15551234567";

struct StubGateway {
    ready: AtomicBool,
    exists: AtomicBool,
    fail_send: AtomicBool,
    sent: Mutex<Vec<(String, String)>>,
}

impl StubGateway {
    fn new() -> Self {
        Self {
            ready: AtomicBool::new(true),
            exists: AtomicBool::new(true),
            fail_send: AtomicBool::new(false),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn last_code(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, code)| code.clone())
    }
}

#[async_trait]
impl MessagingGateway for StubGateway {
    async fn check_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    async fn send_code(&self, phone: &str, code: &str) -> Result<(), GatewayError> {
        if self.fail_send.load(Ordering::SeqCst) {
            return Err(GatewayError::dispatch("gateway returned 500"));
        }
        self.sent
            .lock()
            .unwrap()
            .push((phone.to_string(), code.to_string()));
        Ok(())
    }

    async fn check_number_exists(&self, _phone: &str) -> bool {
        self.exists.load(Ordering::SeqCst)
    }
}

fn state(gateway: Arc<StubGateway>) -> web::Data<AppState<StubGateway, InMemoryCodeStore>> {
    let config = AuthConfig {
        jwt: JwtConfig::new(SECRET),
        ..Default::default()
    };
    let service = AuthService::from_config(gateway, Arc::new(InMemoryCodeStore::new()), &config)
        .expect("valid auth config");
    web::Data::new(AppState::new(Arc::new(service)))
}

macro_rules! app {
    ($gateway:expr) => {
        test::init_service(create_app(state($gateway), &CorsConfig::default())).await
    };
}

#[actix_rt::test]
async fn test_request_code_success() {
    let gateway = Arc::new(StubGateway::new());
    let app = app!(gateway.clone());

    let req = test::TestRequest::post()
        .uri("/api/auth/request-code")
        .set_json(json!({ "phone_number": PHONE }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Verification code requested successfully.");

    let code = gateway.last_code().expect("code dispatched");
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));
}

#[actix_rt::test]
async fn test_request_code_missing_phone_is_bad_request() {
    let gateway = Arc::new(StubGateway::new());
    let app = app!(gateway.clone());

    let req = test::TestRequest::post()
        .uri("/api/auth/request-code")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "phone_number is required");
    assert!(gateway.last_code().is_none());
}

#[actix_rt::test]
async fn test_request_code_channel_not_ready_is_unavailable() {
    let gateway = Arc::new(StubGateway::new());
    gateway.ready.store(false, Ordering::SeqCst);
    let app = app!(gateway.clone());

    let req = test::TestRequest::post()
        .uri("/api/auth/request-code")
        .set_json(json!({ "phone_number": PHONE }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["detail"].is_string());
    assert!(gateway.last_code().is_none());
}

#[actix_rt::test]
async fn test_request_code_dispatch_failure_is_unavailable() {
    let gateway = Arc::new(StubGateway::new());
    gateway.fail_send.store(true, Ordering::SeqCst);
    let app = app!(gateway.clone());

    let req = test::TestRequest::post()
        .uri("/api/auth/request-code")
        .set_json(json!({ "phone_number": PHONE }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    let detail = body["detail"].as_str().unwrap();
    assert!(!detail.contains("500"));
}

#[actix_rt::test]
async fn test_verify_code_issues_token_once() {
    let gateway = Arc::new(StubGateway::new());
    let app = app!(gateway.clone());

    let req = test::TestRequest::post()
        .uri("/api/auth/request-code")
        .set_json(json!({ "phone_number": PHONE }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    let code = gateway.last_code().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-code")
        .set_json(json!({ "phone_number": PHONE, "code": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["expires_in"], 3600);

    let claims = decode::<Claims>(
        body["access_token"].as_str().unwrap(),
        &DecodingKey::from_secret(SECRET.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .unwrap()
    .claims;
    assert_eq!(claims.sub, PHONE);

    // Consumed on first use
    let req = test::TestRequest::post()
        .uri("/api/auth/verify-code")
        .set_json(json!({ "phone_number": PHONE, "code": code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_verify_code_wrong_code_is_unauthorized() {
    let gateway = Arc::new(StubGateway::new());
    let app = app!(gateway.clone());

    let req = test::TestRequest::post()
        .uri("/api/auth/request-code")
        .set_json(json!({ "phone_number": PHONE }))
        .to_request();
    test::call_service(&app, req).await;
    let code = gateway.last_code().unwrap();
    let wrong = if code == "000000" { "111111" } else { "000000" };

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-code")
        .set_json(json!({ "phone_number": PHONE, "code": wrong }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Invalid or expired verification code");

    // The right code still works after a wrong attempt
    let req = test::TestRequest::post()
        .uri("/api/auth/verify-code")
        .set_json(json!({ "phone_number": PHONE, "code": code }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_verify_code_missing_code_is_bad_request() {
    let app = app!(Arc::new(StubGateway::new()));

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-code")
        .set_json(json!({ "phone_number": PHONE }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "code is required");
}

#[actix_rt::test]
async fn test_check_existence_mirrors_gateway() {
    let gateway = Arc::new(StubGateway::new());
    gateway.exists.store(false, Ordering::SeqCst);
    let app = app!(gateway.clone());

    let req = test::TestRequest::post()
        .uri("/api/auth/check-wa-existence")
        .set_json(json!({ "phone_number": PHONE }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "exists": false }));
}

#[actix_rt::test]
async fn test_whatsapp_status_reports_readiness() {
    let gateway = Arc::new(StubGateway::new());
    gateway.ready.store(false, Ordering::SeqCst);
    let app = app!(gateway.clone());

    let req = test::TestRequest::get()
        .uri("/api/auth/whatsapp/status")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "ready": false, "qr": null }));
}

#[actix_rt::test]
async fn test_health_check() {
    let app = app!(Arc::new(StubGateway::new()));

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "Auth Service OK");
    assert_eq!(body["service"], "cg_api");
}

#[actix_rt::test]
async fn test_unknown_route_is_not_found() {
    let app = app!(Arc::new(StubGateway::new()));

    let req = test::TestRequest::get().uri("/api/auth/unknown").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["detail"].is_string());
}

#[actix_rt::test]
async fn test_malformed_json_is_bad_request() {
    let app = app!(Arc::new(StubGateway::new()));

    let req = test::TestRequest::post()
        .uri("/api/auth/request-code")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"phone_number\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["detail"].is_string());
}
