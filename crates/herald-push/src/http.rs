//! HTTP push gateway client
//!
//! One logical send regardless of recipient count. When exactly one token
//! is addressed the smaller single-recipient wire shape is used; that is an
//! optimization and callers still receive a per-token outcome list.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use herald_core::error::DomainError;
use herald_core::traits::{PushGateway, PushMessage, RepoResult, SendOutcome};

use crate::outcome::{decode_outcomes, GatewayResponse};

/// FCM-style HTTP gateway client.
pub struct HttpPushGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpPushGateway {
    /// Create a client for the given gateway endpoint.
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    fn build_body(message: &PushMessage) -> serde_json::Value {
        let mut body = json!({
            "notification": {
                "title": message.title,
                "body": message.body,
            },
            "data": message.data,
            "android": {
                "priority": "high",
                "notification": {
                    "channel_id": message.channel_id,
                    "tag": message.collapse_tag,
                    "sound": "default",
                },
            },
        });

        // Single-recipient fast path uses the smaller wire shape.
        if let [token] = message.tokens.as_slice() {
            body["to"] = json!(token);
        } else {
            body["registration_ids"] = json!(message.tokens);
        }
        body
    }
}

#[async_trait]
impl PushGateway for HttpPushGateway {
    async fn send(&self, message: &PushMessage) -> RepoResult<Vec<SendOutcome>> {
        if message.tokens.is_empty() {
            return Ok(Vec::new());
        }

        let body = Self::build_body(message);
        debug!(
            tokens = message.tokens.len(),
            tag = %message.collapse_tag,
            "Sending push message"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::GatewayError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::GatewayError(format!(
                "gateway returned status {status}"
            )));
        }

        let payload: GatewayResponse = response
            .json()
            .await
            .map_err(|e| DomainError::GatewayError(format!("malformed gateway response: {e}")))?;

        Ok(decode_outcomes(&message.tokens, &payload))
    }
}

impl std::fmt::Debug for HttpPushGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPushGateway")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn message(tokens: &[&str]) -> PushMessage {
        let mut data = BTreeMap::new();
        data.insert("type".to_string(), "dm".to_string());
        data.insert("chatId".to_string(), "c1".to_string());
        PushMessage {
            tokens: tokens.iter().map(ToString::to_string).collect(),
            title: "New message".to_string(),
            body: "hi".to_string(),
            data,
            channel_id: "chat_channel".to_string(),
            collapse_tag: "c1".to_string(),
        }
    }

    #[test]
    fn test_single_token_uses_to_field() {
        let body = HttpPushGateway::build_body(&message(&["tok-a"]));
        assert_eq!(body["to"], "tok-a");
        assert!(body.get("registration_ids").is_none());
        assert_eq!(body["android"]["notification"]["tag"], "c1");
    }

    #[test]
    fn test_multiple_tokens_use_registration_ids() {
        let body = HttpPushGateway::build_body(&message(&["tok-a", "tok-b"]));
        assert!(body.get("to").is_none());
        assert_eq!(body["registration_ids"][1], "tok-b");
        assert_eq!(body["notification"]["body"], "hi");
        assert_eq!(body["android"]["notification"]["channel_id"], "chat_channel");
    }
}
