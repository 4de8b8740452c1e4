//! HTTP client for the WhatsApp messaging microservice
//!
//! Endpoints (relative to the configured base URL):
//! - `GET /api/whatsapp/status` returns `{"ready": bool}`
//! - `POST /api/whatsapp/send-code` with `{"phoneNumber", "code"}`
//! - `POST /api/whatsapp/check-number` with `{"phoneNumber"}` returns `{"exists": bool}`
//!
//! Each call carries its own timeout. Transport failures are translated here
//! and never leave the client with network details attached.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use cg_core::errors::GatewayError;
use cg_core::services::MessagingGateway;
use cg_shared::config::MessagingConfig;
use cg_shared::phone::mask_phone_number;

use crate::InfrastructureError;

const STATUS_PATH: &str = "/api/whatsapp/status";
const SEND_CODE_PATH: &str = "/api/whatsapp/send-code";
const CHECK_NUMBER_PATH: &str = "/api/whatsapp/check-number";

#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(default)]
    ready: bool,
}

#[derive(Debug, Deserialize)]
struct CheckNumberResponse {
    #[serde(default)]
    exists: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendCodeRequest<'a> {
    phone_number: &'a str,
    code: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckNumberRequest<'a> {
    phone_number: &'a str,
}

/// Messaging gateway backed by the WhatsApp microservice
#[derive(Clone)]
pub struct WhatsAppGatewayClient {
    http: Client,
    config: MessagingConfig,
}

impl WhatsAppGatewayClient {
    /// Create a client for the configured base URL
    pub fn new(config: MessagingConfig) -> Result<Self, InfrastructureError> {
        let http = Client::builder()
            .user_agent(concat!("codegate/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl MessagingGateway for WhatsAppGatewayClient {
    async fn check_ready(&self) -> bool {
        let response = self
            .http
            .get(self.config.endpoint(STATUS_PATH))
            .timeout(Duration::from_secs(self.config.status_timeout_secs))
            .send()
            .await;

        let response = match response {
            Ok(resp) if resp.status().is_success() => resp,
            Ok(resp) => {
                warn!(
                    status = resp.status().as_u16(),
                    event = "gateway_status_rejected",
                    "Messaging gateway status check returned an error status"
                );
                return false;
            }
            Err(e) => {
                warn!(
                    reason = describe(&e),
                    event = "gateway_status_failed",
                    "Messaging gateway status check failed"
                );
                return false;
            }
        };

        match response.json::<StatusResponse>().await {
            Ok(status) => {
                debug!(ready = status.ready, "Messaging gateway status");
                status.ready
            }
            Err(_) => {
                warn!(
                    event = "gateway_status_invalid",
                    "Messaging gateway status response could not be decoded"
                );
                false
            }
        }
    }

    async fn send_code(&self, phone: &str, code: &str) -> Result<(), GatewayError> {
        let response = self
            .http
            .post(self.config.endpoint(SEND_CODE_PATH))
            .timeout(Duration::from_secs(self.config.send_timeout_secs))
            .json(&SendCodeRequest {
                phone_number: phone,
                code,
            })
            .send()
            .await
            .map_err(|e| GatewayError::dispatch(describe(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::dispatch(format!(
                "gateway returned status {}",
                status.as_u16()
            )));
        }

        debug!(phone = %mask_phone_number(phone), "Messaging gateway accepted code");
        Ok(())
    }

    async fn check_number_exists(&self, phone: &str) -> bool {
        let masked = mask_phone_number(phone);
        let response = self
            .http
            .post(self.config.endpoint(CHECK_NUMBER_PATH))
            .timeout(Duration::from_secs(self.config.check_timeout_secs))
            .json(&CheckNumberRequest { phone_number: phone })
            .send()
            .await;

        let response = match response {
            Ok(resp) if resp.status().is_success() => resp,
            Ok(resp) => {
                warn!(
                    phone = %masked,
                    status = resp.status().as_u16(),
                    event = "gateway_check_rejected",
                    "Existence check rejected, assuming number exists"
                );
                return true;
            }
            Err(e) => {
                warn!(
                    phone = %masked,
                    reason = describe(&e),
                    event = "gateway_check_failed",
                    "Existence check failed, assuming number exists"
                );
                return true;
            }
        };

        match response.json::<CheckNumberResponse>().await {
            Ok(body) => body.exists,
            Err(_) => {
                warn!(
                    phone = %masked,
                    event = "gateway_check_invalid",
                    "Existence check response could not be decoded, assuming number exists"
                );
                true
            }
        }
    }
}

/// Reduce a transport error to a category without URLs or addresses
fn describe(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        "request timed out"
    } else if err.is_connect() {
        "gateway unreachable"
    } else if err.is_decode() {
        "invalid response"
    } else {
        "request failed"
    }
}
