//! Sanction entity - immutable record of a punitive moderation action

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

/// Kind of sanction applied to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanctionKind {
    Mute,
    Ban,
    ShadowBan,
}

impl SanctionKind {
    /// String form stored in documents and audit details.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mute => "mute",
            Self::Ban => "ban",
            Self::ShadowBan => "shadowBan",
        }
    }
}

/// Append-only child record of a user; never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Sanction {
    pub id: String,
    pub user_id: String,
    pub kind: SanctionKind,
    /// Free text, may be empty.
    pub reason: String,
    pub metadata: JsonValue,
    pub actor_id: String,
    pub actor_name: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Sanction {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        kind: SanctionKind,
        reason: impl Into<String>,
        actor_id: impl Into<String>,
        actor_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            kind,
            reason: reason.into(),
            metadata: JsonValue::Null,
            actor_id: actor_id.into(),
            actor_name: actor_name.into(),
            created_at: Utc::now(),
            expires_at: None,
        }
    }

    /// Attach structured metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = metadata;
        self
    }

    /// Attach an expiry timestamp.
    #[must_use]
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanction_builder() {
        let expires = Utc::now();
        let sanction = Sanction::new("s1", "u1", SanctionKind::Mute, "spam", "m1", "mod")
            .with_metadata(serde_json::json!({ "durationMinutes": 30 }))
            .with_expiry(expires);

        assert_eq!(sanction.kind.as_str(), "mute");
        assert_eq!(sanction.expires_at, Some(expires));
        assert_eq!(sanction.metadata["durationMinutes"], 30);
    }
}
