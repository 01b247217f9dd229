//! Vendor email channel (Resend-style JSON API).

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};

use crate::channel::EmailSender;
use crate::message::PurchaseOrderMessage;
use crate::present;
use crate::result::NotificationResult;

const ENDPOINT: &str = "https://api.resend.com/emails";
const DEFAULT_FROM: &str = "Restock <onboarding@resend.dev>";

/// Email channel configuration, consumed as plain values.
///
/// A real send needs the API key and a recipient address; otherwise the
/// channel runs in simulation mode.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub api_key: Option<String>,
    pub from: String,
    pub to: Option<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            from: DEFAULT_FROM.to_string(),
            to: None,
        }
    }
}

impl EmailConfig {
    pub fn is_configured(&self) -> bool {
        present(&self.api_key) && present(&self.to)
    }
}

/// Purchase-order email channel.
#[derive(Debug, Clone)]
pub struct EmailChannel {
    config: EmailConfig,
    http: Client,
}

impl EmailChannel {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Channel that always simulates (no credentials).
    pub fn unconfigured() -> Self {
        Self::new(EmailConfig::default())
    }

    /// Dispatch a purchase-order email to the vendor.
    ///
    /// Fire-and-forget: no retries; failure comes back as data.
    pub async fn send_vendor_email(&self, order: &PurchaseOrderMessage) -> NotificationResult {
        if !self.config.is_configured() {
            debug!(item = %order.item, "email channel in simulation mode (credentials absent)");
            return NotificationResult::simulated();
        }

        let payload = EmailPayload {
            from: &self.config.from,
            to: vec![self.config.to.clone().unwrap_or_default()],
            subject: order.subject(),
            html: order.html_body(),
        };
        let api_key = self.config.api_key.as_deref().unwrap_or_default();

        let response = self
            .http
            .post(ENDPOINT)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status();
                let body: JsonValue = response.json().await.unwrap_or(JsonValue::Null);
                if status.is_success() {
                    info!(item = %order.item, id = %body["id"], "vendor email sent");
                    NotificationResult::delivered(body)
                } else {
                    let detail = provider_error(&body, status);
                    warn!(item = %order.item, error = %detail, "vendor email rejected");
                    NotificationResult::failed(detail)
                }
            }
            Err(e) => {
                warn!(item = %order.item, error = %e, "vendor email transport failed");
                NotificationResult::failed(e.to_string())
            }
        }
    }
}

#[async_trait]
impl EmailSender for EmailChannel {
    async fn send_vendor_email(&self, order: &PurchaseOrderMessage) -> NotificationResult {
        EmailChannel::send_vendor_email(self, order).await
    }
}

#[derive(Debug, Serialize)]
struct EmailPayload<'a> {
    from: &'a str,
    to: Vec<String>,
    subject: String,
    html: String,
}

/// The provider puts its human-readable error under `message`.
pub(crate) fn provider_error(body: &JsonValue, status: StatusCode) -> String {
    body.get("message")
        .and_then(JsonValue::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("provider returned {status}"))
}
