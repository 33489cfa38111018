//! Gateway response decoding and error classification

use serde::Deserialize;

use herald_core::traits::{SendErrorKind, SendOutcome};

/// Wire response of a send call.
///
/// Batched sends return one result per token; single sends may return only
/// a top-level message id and no results array.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayResponse {
    #[serde(default)]
    pub success: Option<u32>,
    #[serde(default)]
    pub failure: Option<u32>,
    #[serde(default)]
    pub results: Vec<GatewayResult>,
}

/// Per-token wire result.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayResult {
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Classify a gateway error code.
///
/// Codes vary between gateway API revisions, so matching is by substring:
/// both `NotRegistered` and `registration-token-not-registered` mean the
/// token is dead.
pub fn classify_error(code: &str) -> SendErrorKind {
    if code.contains("NotRegistered") || code.contains("registration-token-not-registered") {
        SendErrorKind::Unregistered
    } else if code.contains("InvalidRegistration") || code.contains("invalid-registration-token") {
        SendErrorKind::InvalidToken
    } else if code.contains("Unavailable") {
        SendErrorKind::Unavailable
    } else {
        SendErrorKind::Other
    }
}

/// Pair tokens with their wire results.
///
/// A token without a matching result slot is treated as delivered: the
/// single-send response shape carries no results array at all.
pub fn decode_outcomes(tokens: &[String], response: &GatewayResponse) -> Vec<SendOutcome> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| match response.results.get(i) {
            Some(result) => match &result.error {
                Some(code) => SendOutcome::failed(token.clone(), classify_error(code)),
                None => SendOutcome::ok(token.clone()),
            },
            None => SendOutcome::ok(token.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_dead_token_codes() {
        assert_eq!(
            classify_error("NotRegistered"),
            SendErrorKind::Unregistered
        );
        assert_eq!(
            classify_error("messaging/registration-token-not-registered"),
            SendErrorKind::Unregistered
        );
        assert_eq!(
            classify_error("InvalidRegistration"),
            SendErrorKind::InvalidToken
        );
        assert_eq!(
            classify_error("messaging/invalid-registration-token"),
            SendErrorKind::InvalidToken
        );
    }

    #[test]
    fn test_classify_transient_codes() {
        assert_eq!(classify_error("Unavailable"), SendErrorKind::Unavailable);
        assert_eq!(classify_error("InternalServerError"), SendErrorKind::Other);
    }

    #[test]
    fn test_decode_batch_response() {
        let tokens = vec!["tok-a".to_string(), "tok-b".to_string()];
        let response: GatewayResponse = serde_json::from_str(
            r#"{
                "success": 1,
                "failure": 1,
                "results": [
                    { "message_id": "m1" },
                    { "error": "NotRegistered" }
                ]
            }"#,
        )
        .unwrap();

        let outcomes = decode_outcomes(&tokens, &response);
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].success);
        assert!(!outcomes[1].success);
        assert_eq!(outcomes[1].error, Some(SendErrorKind::Unregistered));
    }

    #[test]
    fn test_decode_single_response_without_results() {
        let tokens = vec!["tok-a".to_string()];
        let response: GatewayResponse =
            serde_json::from_str(r#"{ "message_id": "m1" }"#).unwrap();

        let outcomes = decode_outcomes(&tokens, &response);
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].success);
    }
}
