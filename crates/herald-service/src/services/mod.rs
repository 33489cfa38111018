//! Business logic services
//!
//! This module contains the service layer implementations: recipient
//! resolution and push fan-out, the sanction engine, authority resolution,
//! the audit log, and the backfill job.

pub mod audit;
pub mod authority;
pub mod backfill;
pub mod context;
pub mod error;
pub mod moderation;
pub mod notification;
pub mod outcome;

// Re-export all services for convenience
pub use audit::AuditService;
pub use authority::{Actor, AuthorityService, CallerIdentity};
pub use backfill::{BackfillService, BackfillSummary};
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use moderation::ModerationService;
pub use notification::{NotificationService, OutboundNotification};
pub use outcome::{
    ActionReport, DeliveryOutcome, DeliveryReport, FanoutReport, SideEffectFailure,
    SideEffectKind, SkipReason,
};

#[cfg(test)]
pub(crate) mod test_support;
