//! Audit log service
//!
//! Records one immutable entry per privileged action, after the primary
//! mutation has succeeded. Audit is best-effort observability: a failed
//! write is logged and reported as a side effect, never rolled back into
//! the action's result.

use serde_json::Value as JsonValue;
use tracing::{info, warn};

use herald_core::entities::AuditEntry;

use super::authority::Actor;
use super::context::{new_id, ServiceContext};
use super::error::ServiceResult;
use super::outcome::{SideEffectFailure, SideEffectKind};

/// Audit log service
pub struct AuditService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditService<'a> {
    /// Create a new AuditService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Append one audit entry with a server-assigned timestamp.
    pub async fn record(
        &self,
        actor: &Actor,
        action: &str,
        object_type: &str,
        object_id: &str,
        details: JsonValue,
    ) -> ServiceResult<()> {
        let entry = AuditEntry::new(
            new_id(),
            &actor.id,
            &actor.display_name,
            action,
            object_type,
            object_id,
            details,
        );
        self.ctx.audit_repo().append(&entry).await?;

        info!(
            actor_id = %actor.id,
            action,
            object_type,
            object_id,
            "Audit entry recorded"
        );
        Ok(())
    }

    /// Best-effort variant: absorbs the failure and reports it as a side
    /// effect instead of surfacing it.
    pub async fn record_soft(
        &self,
        actor: &Actor,
        action: &str,
        object_type: &str,
        object_id: &str,
        details: JsonValue,
    ) -> Option<SideEffectFailure> {
        match self
            .record(actor, action, object_type, object_id, details)
            .await
        {
            Ok(()) => None,
            Err(e) => {
                warn!(action, object_id, error = %e, "Audit write failed");
                Some(SideEffectFailure::new(
                    SideEffectKind::AuditWrite,
                    e.to_string(),
                ))
            }
        }
    }
}
