//! Operation outcome types
//!
//! A notification or moderation operation has one primary outcome plus a
//! list of non-fatal side-effect failures (token cleanup, audit write,
//! mark-sent). Keeping the two apart lets callers and tests assert on both
//! without conflating them with the operation's success.

/// Which best-effort side effect failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffectKind {
    /// Removing dead device tokens after a delivery.
    TokenCleanup,
    /// Appending the audit entry after a primary mutation.
    AuditWrite,
    /// Marking a mention notice as sent.
    MarkSent,
    /// Reading a parent document on the notification path.
    StoreRead,
}

impl SideEffectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TokenCleanup => "token_cleanup",
            Self::AuditWrite => "audit_write",
            Self::MarkSent => "mark_sent",
            Self::StoreRead => "store_read",
        }
    }
}

/// A swallowed sub-failure inside a larger operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideEffectFailure {
    pub kind: SideEffectKind,
    pub detail: String,
}

impl SideEffectFailure {
    pub fn new(kind: SideEffectKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for SideEffectFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.detail)
    }
}

/// Why a per-recipient delivery was skipped without contacting the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The recipient's user record does not exist.
    UserMissing,
    /// The merged token set is empty.
    NoTokens,
}

/// Primary outcome of one per-recipient delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The gateway was contacted; counts are per token.
    Delivered { delivered: usize, failed: usize },
    /// Nothing was sent; not an error.
    Skipped(SkipReason),
    /// The gateway (or the user read) failed outright; absorbed locally.
    Failed(String),
}

/// Result of delivering one notification to one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub user_id: String,
    pub outcome: DeliveryOutcome,
    /// Dead tokens removed from the recipient's stored set.
    pub invalidated: Vec<String>,
    pub side_effects: Vec<SideEffectFailure>,
}

impl DeliveryReport {
    pub fn delivered(user_id: impl Into<String>, delivered: usize, failed: usize) -> Self {
        Self {
            user_id: user_id.into(),
            outcome: DeliveryOutcome::Delivered { delivered, failed },
            invalidated: Vec::new(),
            side_effects: Vec::new(),
        }
    }

    pub fn skipped(user_id: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            user_id: user_id.into(),
            outcome: DeliveryOutcome::Skipped(reason),
            invalidated: Vec::new(),
            side_effects: Vec::new(),
        }
    }

    pub fn failed(user_id: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            outcome: DeliveryOutcome::Failed(detail.into()),
            invalidated: Vec::new(),
            side_effects: Vec::new(),
        }
    }

    /// True when the gateway was actually contacted for this recipient.
    pub fn attempted(&self) -> bool {
        !matches!(self.outcome, DeliveryOutcome::Skipped(_))
    }
}

/// Result of fanning one trigger event out to all resolved recipients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FanoutReport {
    pub event_type: &'static str,
    pub deliveries: Vec<DeliveryReport>,
    /// Event-level side effects (parent reads, mark-sent).
    pub side_effects: Vec<SideEffectFailure>,
}

impl FanoutReport {
    pub fn new(event_type: &'static str) -> Self {
        Self {
            event_type,
            deliveries: Vec::new(),
            side_effects: Vec::new(),
        }
    }

    /// Recipients for which a dispatch was attempted.
    pub fn attempts(&self) -> usize {
        self.deliveries.iter().filter(|d| d.attempted()).count()
    }

    /// Ids of every resolved recipient, attempted or skipped.
    pub fn targets(&self) -> Vec<&str> {
        self.deliveries.iter().map(|d| d.user_id.as_str()).collect()
    }
}

/// Result of one sanction-engine action.
///
/// The primary mutation succeeded if this value exists at all; audit-write
/// failures ride along as side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub action: &'static str,
    pub side_effects: Vec<SideEffectFailure>,
}

impl ActionReport {
    pub fn new(action: &'static str) -> Self {
        Self {
            action,
            side_effects: Vec::new(),
        }
    }

    pub fn with_side_effect(mut self, failure: Option<SideEffectFailure>) -> Self {
        if let Some(failure) = failure {
            self.side_effects.push(failure);
        }
        self
    }
}
