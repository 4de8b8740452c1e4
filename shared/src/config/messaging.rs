//! Messaging gateway configuration
//!
//! The messaging gateway is the external microservice that owns the WhatsApp
//! session and delivers verification codes. Each endpoint gets its own timeout.

use serde::{Deserialize, Serialize};

/// Messaging gateway client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessagingConfig {
    /// Base URL of the messaging microservice, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for the readiness probe in seconds
    #[serde(default = "default_status_timeout")]
    pub status_timeout_secs: u64,

    /// Timeout for code dispatch in seconds
    #[serde(default = "default_send_timeout")]
    pub send_timeout_secs: u64,

    /// Timeout for the number existence lookup in seconds
    #[serde(default = "default_check_timeout")]
    pub check_timeout_secs: u64,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            status_timeout_secs: default_status_timeout(),
            send_timeout_secs: default_send_timeout(),
            check_timeout_secs: default_check_timeout(),
        }
    }
}

impl MessagingConfig {
    /// Create a configuration pointing at `base_url` with default timeouts
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("WHATSAPP_SERVICE_URL").unwrap_or_else(|_| default_base_url());
        let status_timeout_secs = std::env::var("WHATSAPP_STATUS_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_status_timeout);
        let send_timeout_secs = std::env::var("WHATSAPP_SEND_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_send_timeout);
        let check_timeout_secs = std::env::var("WHATSAPP_CHECK_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_check_timeout);

        Self {
            base_url,
            status_timeout_secs,
            send_timeout_secs,
            check_timeout_secs,
        }
    }

    /// Build an endpoint URL from a path starting with `/`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

fn default_base_url() -> String {
    String::from("http://whatsapp-service:3001")
}

fn default_status_timeout() -> u64 {
    2
}

fn default_send_timeout() -> u64 {
    30
}

fn default_check_timeout() -> u64 {
    15
}
