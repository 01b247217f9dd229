use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Outcome of one dispatch attempt.
///
/// `simulated: true` means no network call was made because the channel's
/// credentials were absent; the attempt is treated as trivially successful.
/// Not persisted beyond the session — used to update a decision's sent flags
/// and to render status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationResult {
    pub success: bool,
    pub simulated: bool,
    pub error: Option<String>,
    /// Raw provider response payload (message id etc), when a call was made.
    pub data: Option<JsonValue>,
}

impl NotificationResult {
    /// Credentials absent: the call was skipped and counts as success.
    pub fn simulated() -> Self {
        Self {
            success: true,
            simulated: true,
            error: None,
            data: None,
        }
    }

    /// The provider accepted the message.
    pub fn delivered(data: JsonValue) -> Self {
        Self {
            success: true,
            simulated: false,
            error: None,
            data: Some(data),
        }
    }

    /// The provider rejected the message or transport failed.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            simulated: false,
            error: Some(error.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn simulated_is_a_success_without_payload() {
        let r = NotificationResult::simulated();
        assert!(r.success);
        assert!(r.simulated);
        assert!(r.error.is_none());
        assert!(r.data.is_none());
    }

    #[test]
    fn delivered_carries_the_provider_payload() {
        let r = NotificationResult::delivered(json!({"id": "msg_123"}));
        assert!(r.success);
        assert!(!r.simulated);
        assert_eq!(r.data.unwrap()["id"], "msg_123");
    }

    #[test]
    fn failed_carries_the_error_detail() {
        let r = NotificationResult::failed("invalid recipient");
        assert!(!r.success);
        assert!(!r.simulated);
        assert_eq!(r.error.as_deref(), Some("invalid recipient"));
    }
}
