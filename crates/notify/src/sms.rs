//! Owner SMS channel (Twilio-style form API, HTTP basic auth).

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};

use crate::channel::SmsSender;
use crate::email::provider_error;
use crate::message::OwnerAlertMessage;
use crate::present;
use crate::result::NotificationResult;

/// SMS channel configuration, consumed as plain values.
///
/// All four credentials must be present for a real send; otherwise the
/// channel runs in simulation mode.
#[derive(Debug, Clone, Default)]
pub struct SmsConfig {
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
    pub from_number: Option<String>,
    pub to_number: Option<String>,
}

impl SmsConfig {
    pub fn is_configured(&self) -> bool {
        present(&self.account_sid)
            && present(&self.auth_token)
            && present(&self.from_number)
            && present(&self.to_number)
    }
}

/// Escalation alert channel. Used only for `ESCALATE` decisions.
#[derive(Debug, Clone)]
pub struct SmsChannel {
    config: SmsConfig,
    http: Client,
}

impl SmsChannel {
    pub fn new(config: SmsConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Channel that always simulates (no credentials).
    pub fn unconfigured() -> Self {
        Self::new(SmsConfig::default())
    }

    /// Dispatch an approval alert to the owner.
    ///
    /// Fire-and-forget: no retries; failure comes back as data.
    pub async fn send_owner_alert(&self, alert: &OwnerAlertMessage) -> NotificationResult {
        if !self.config.is_configured() {
            debug!(item = %alert.item, "sms channel in simulation mode (credentials absent)");
            return NotificationResult::simulated();
        }

        let sid = self.config.account_sid.as_deref().unwrap_or_default();
        let token = self.config.auth_token.as_deref().unwrap_or_default();
        let endpoint = messages_url(sid);
        let params = [
            ("To", self.config.to_number.clone().unwrap_or_default()),
            ("From", self.config.from_number.clone().unwrap_or_default()),
            ("Body", alert.text_body()),
        ];

        let response = self
            .http
            .post(&endpoint)
            .basic_auth(sid, Some(token))
            .form(&params)
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status();
                let body: JsonValue = response.json().await.unwrap_or(JsonValue::Null);
                if status.is_success() {
                    info!(item = %alert.item, sid = %body["sid"], "owner alert sent");
                    NotificationResult::delivered(body)
                } else {
                    let detail = provider_error(&body, status);
                    warn!(item = %alert.item, error = %detail, "owner alert rejected");
                    NotificationResult::failed(detail)
                }
            }
            Err(e) => {
                warn!(item = %alert.item, error = %e, "owner alert transport failed");
                NotificationResult::failed(e.to_string())
            }
        }
    }
}

#[async_trait]
impl SmsSender for SmsChannel {
    async fn send_owner_alert(&self, alert: &OwnerAlertMessage) -> NotificationResult {
        SmsChannel::send_owner_alert(self, alert).await
    }
}

fn messages_url(account_sid: &str) -> String {
    format!("https://api.twilio.com/2010-04-01/Accounts/{account_sid}/Messages.json")
}
