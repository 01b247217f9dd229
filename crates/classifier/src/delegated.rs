//! Delegated classification via an external reasoning service.
//!
//! Speaks the chat-completions convention: one request per flagged item,
//! demanding a JSON object with `decision`, `reasoning`, and `vendorEmail`.
//! Model output is scrubbed of code-fence noise and reduced to its outermost
//! object before parsing. Every failure path falls back to the heuristic
//! result; callers never see an error.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::classification::{Classification, ItemSnapshot, ReorderAction, ReorderMath};
use crate::heuristic;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Classifier backed by an external reasoning service.
#[derive(Debug, Clone)]
pub struct DelegatedClassifier {
    http: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl DelegatedClassifier {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Classify a flagged item, degrading to the heuristic on any failure.
    ///
    /// The service may only override the action and the wording; quantity and
    /// cost always come from the local reorder math.
    pub async fn classify(&self, item: &ItemSnapshot) -> Classification {
        let math = ReorderMath::for_item(item);

        match self.request_verdict(item, math).await {
            Ok(verdict) => {
                debug!(item = %item.name, decision = %verdict.decision, "reasoning service verdict");
                match apply_verdict(math, verdict) {
                    Ok(classification) => classification,
                    Err(e) => {
                        warn!(item = %item.name, error = %e, "unusable verdict, falling back to heuristic");
                        heuristic::classify(item)
                    }
                }
            }
            Err(e) => {
                warn!(item = %item.name, error = %e, "delegated classification failed, falling back to heuristic");
                heuristic::classify(item)
            }
        }
    }

    async fn request_verdict(
        &self,
        item: &ItemSnapshot,
        math: ReorderMath,
    ) -> Result<Verdict, DelegatedError> {
        let prompt = format!(
            "Decide: AUTO_APPROVE (under $500) or ESCALATE. Item: {}, Cost: ${}, Stock: {}, \
             Days: {}. JSON format: \
             {{\"decision\":\"AUTO_APPROVE\",\"reasoning\":\"...\",\"vendorEmail\":\"...\"}}",
            item.name, math.cost, item.stock, math.days_until_stockout,
        );

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a business operations AI. Respond with ONLY valid JSON."
                        .to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.5,
            max_tokens: 400,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DelegatedError::Status(status));
        }

        let payload: ChatResponse = response.json().await?;
        let content = payload
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DelegatedError::malformed("no choices in response"))?
            .message
            .content;

        parse_verdict(&content)
    }
}

#[derive(Debug, Error)]
enum DelegatedError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned {0}")]
    Status(StatusCode),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl DelegatedError {
    fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Structured verdict the reasoning service must return.
#[derive(Debug, Deserialize)]
struct Verdict {
    decision: String,
    reasoning: String,
    #[serde(rename = "vendorEmail")]
    vendor_email: String,
}

fn apply_verdict(math: ReorderMath, verdict: Verdict) -> Result<Classification, DelegatedError> {
    let action = ReorderAction::from_label(&verdict.decision)
        .ok_or_else(|| DelegatedError::malformed(format!("unknown decision {:?}", verdict.decision)))?;

    Ok(Classification {
        action,
        reasoning: verdict.reasoning,
        vendor_message: verdict.vendor_email,
        quantity: math.quantity,
        cost: math.cost,
        days_until_stockout: math.days_until_stockout,
    })
}

fn parse_verdict(raw: &str) -> Result<Verdict, DelegatedError> {
    let scrubbed = scrub_fences(raw);
    let object = extract_object(&scrubbed)
        .ok_or_else(|| DelegatedError::malformed("no JSON object in content"))?;

    serde_json::from_str(object)
        .map_err(|e| DelegatedError::malformed(format!("verdict does not parse: {e}")))
}

/// Strip markdown code-fence markers the model sometimes wraps around its JSON.
fn scrub_fences(raw: &str) -> String {
    let text = raw.replace("```", "");
    let trimmed = text.trim_start();
    if let Some(rest) = trimmed.strip_prefix("json").or_else(|| trimmed.strip_prefix("JSON")) {
        return rest.to_string();
    }
    text
}

/// The outermost `{...}` span, if any.
fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end >= start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_json() {
        let v = parse_verdict(
            r#"{"decision":"AUTO_APPROVE","reasoning":"cheap","vendorEmail":"please send 30"}"#,
        )
        .unwrap();
        assert_eq!(v.decision, "AUTO_APPROVE");
        assert_eq!(v.vendor_email, "please send 30");
    }

    #[test]
    fn parses_fenced_json_with_surrounding_prose() {
        let raw = "Sure, here you go:\n```json\n{\"decision\":\"ESCALATE\",\n\"reasoning\":\"too expensive\",\"vendorEmail\":\"hold\"}\n```\nLet me know!";
        let v = parse_verdict(raw).unwrap();
        assert_eq!(v.decision, "ESCALATE");
        assert_eq!(v.reasoning, "too expensive");
    }

    #[test]
    fn rejects_content_without_an_object() {
        let err = parse_verdict("I cannot decide.").unwrap_err();
        assert!(matches!(err, DelegatedError::Malformed(_)));
    }

    #[test]
    fn rejects_object_missing_fields() {
        let err = parse_verdict(r#"{"decision":"AUTO_APPROVE"}"#).unwrap_err();
        assert!(matches!(err, DelegatedError::Malformed(_)));
    }

    #[test]
    fn unknown_decision_label_is_rejected() {
        let math = ReorderMath {
            days_until_stockout: 5,
            quantity: 30,
            cost: 450.0,
        };
        let verdict = Verdict {
            decision: "MAYBE".into(),
            reasoning: "unsure".into(),
            vendor_email: "hold".into(),
        };
        assert!(apply_verdict(math, verdict).is_err());
    }

    #[test]
    fn verdict_never_overrides_the_numbers() {
        let math = ReorderMath {
            days_until_stockout: 1,
            quantity: 60,
            cost: 3600.0,
        };
        let verdict = Verdict {
            decision: "ESCALATE".into(),
            reasoning: "high value".into(),
            vendor_email: "quote please".into(),
        };
        let c = apply_verdict(math, verdict).unwrap();
        assert_eq!(c.quantity, 60);
        assert_eq!(c.cost, 3600.0);
        assert_eq!(c.action, ReorderAction::Escalate);
    }

    #[tokio::test]
    async fn unreachable_service_degrades_to_heuristic() {
        let item = ItemSnapshot {
            name: "Wireless Mouse".into(),
            stock: 5,
            unit_price: 15.0,
            sales_per_day: 1.0,
        };
        let classifier =
            DelegatedClassifier::new("sk-test").with_endpoint("http://127.0.0.1:9/v1/chat");

        let c = classifier.classify(&item).await;
        assert_eq!(c, heuristic::classify(&item));
    }
}
