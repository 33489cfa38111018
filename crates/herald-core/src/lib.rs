//! # herald-core
//!
//! Domain layer containing entities, value objects, repository traits, and
//! trigger events. This crate has zero dependencies on infrastructure
//! (document store, web framework, push gateway implementations, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Announcement, AnnouncementScope, AnnouncementStatus, AuditEntry, AuthClaims, Chat, Comment,
    MembershipRole, MentionNotice, Report, ReportStatus, Room, RoomMembership, RoomMessage,
    RoomMessageStatus, RoomVisibility, Sanction, SanctionKind, User, UserStatus,
};
pub use error::DomainError;
pub use events::TriggerEvent;
pub use traits::{
    AnnouncementRepository, AuditLogRepository, ChatRepository, CommentRepository,
    MembershipRepository, NotificationRepository, PushGateway, PushMessage, ReportRepository,
    RepoResult, RoomMessageRepository, RoomRepository, SanctionRepository, SendErrorKind,
    SendOutcome, UserRepository,
};
pub use value_objects::{ActorRole, ModerationPatch, Patch};
