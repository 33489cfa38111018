//! Audit entry entity - append-only ledger of privileged actions

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

/// One privileged action, recorded once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub id: String,
    pub actor_id: String,
    pub actor_name: String,
    pub action: String,
    pub object_type: String,
    pub object_id: String,
    pub details: JsonValue,
    pub created_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(
        id: impl Into<String>,
        actor_id: impl Into<String>,
        actor_name: impl Into<String>,
        action: impl Into<String>,
        object_type: impl Into<String>,
        object_id: impl Into<String>,
        details: JsonValue,
    ) -> Self {
        Self {
            id: id.into(),
            actor_id: actor_id.into(),
            actor_name: actor_name.into(),
            action: action.into(),
            object_type: object_type.into(),
            object_id: object_id.into(),
            details,
            created_at: Utc::now(),
        }
    }
}
