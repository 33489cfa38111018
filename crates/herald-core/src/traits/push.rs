//! Push gateway port - batched delivery with per-token outcomes
//!
//! There is exactly one send operation regardless of recipient count; the
//! result is always a per-token outcome list. Implementations may use a
//! single-recipient wire call when one token is addressed, but that is an
//! optimization, not a behavioral branch.

use std::collections::BTreeMap;

use async_trait::async_trait;

use super::repositories::RepoResult;

/// Grouping tag used when an event has no correlation id.
pub const DEFAULT_COLLAPSE_TAG: &str = "default";

/// A platform-agnostic notification addressed to one or more device tokens.
///
/// Data values are plain strings: the client platform requires string-typed
/// extras, so coercion happens before a message is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushMessage {
    pub tokens: Vec<String>,
    pub title: String,
    pub body: String,
    pub data: BTreeMap<String, String>,
    /// Platform notification channel identifier.
    pub channel_id: String,
    /// Dedup/grouping tag; repeated notifications for the same conversation
    /// collapse on the client.
    pub collapse_tag: String,
}

/// Classified delivery error for a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendErrorKind {
    /// The token is no longer registered with the gateway.
    Unregistered,
    /// The token was malformed or rejected outright.
    InvalidToken,
    /// Transient gateway-side unavailability.
    Unavailable,
    /// Anything else the gateway reported.
    Other,
}

impl SendErrorKind {
    /// True when the token should be removed from storage.
    #[must_use]
    pub fn is_dead_token(self) -> bool {
        matches!(self, Self::Unregistered | Self::InvalidToken)
    }
}

/// Per-token delivery outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    pub token: String,
    pub success: bool,
    pub error: Option<SendErrorKind>,
}

impl SendOutcome {
    /// Successful delivery to a token.
    pub fn ok(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            success: true,
            error: None,
        }
    }

    /// Failed delivery with a classified error.
    pub fn failed(token: impl Into<String>, kind: SendErrorKind) -> Self {
        Self {
            token: token.into(),
            success: false,
            error: Some(kind),
        }
    }
}

/// Port to the external push gateway.
#[async_trait]
pub trait PushGateway: Send + Sync {
    /// Deliver one message to every addressed token.
    ///
    /// Returns one outcome per token, in token order. An `Err` means the
    /// gateway could not be reached at all.
    async fn send(&self, message: &PushMessage) -> RepoResult<Vec<SendOutcome>>;
}
