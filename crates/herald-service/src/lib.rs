//! # herald-service
//!
//! Application layer containing the notification fan-out pipeline, the
//! sanction engine, the audit log, and their typed command DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    ActionResponse, AssignReportCommand, AssignRoomModeratorCommand, BackfillResponse,
    BanUserCommand, ClearRoomMessagesCommand, DeleteAnnouncementCommand, DeleteRoomCommand,
    HealthResponse, KickRoomMemberCommand, MuteRoomMemberCommand, MuteUserCommand,
    ResolveReportCommand, SaveAnnouncementCommand, SaveRoomCommand, SetUserRoleCommand,
    ShadowBanUserCommand, UnbanUserCommand, UnmuteUserCommand,
};
pub use services::{
    Actor, ActionReport, AuditService, AuthorityService, BackfillService, BackfillSummary,
    CallerIdentity, DeliveryOutcome, DeliveryReport, FanoutReport, ModerationService,
    NotificationService, OutboundNotification, ServiceContext, ServiceError, ServiceResult,
    SideEffectFailure, SideEffectKind, SkipReason,
};
