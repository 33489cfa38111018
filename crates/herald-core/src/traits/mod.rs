//! Ports - repository and push gateway traits

mod push;
mod repositories;

pub use push::{PushGateway, PushMessage, SendErrorKind, SendOutcome, DEFAULT_COLLAPSE_TAG};
pub use repositories::{
    AnnouncementRepository, AuditLogRepository, ChatRepository, CommentRepository,
    MembershipRepository, NotificationRepository, ReportRepository, RepoResult,
    RoomMessageRepository, RoomRepository, SanctionRepository, UserRepository,
};
