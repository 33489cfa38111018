//! Domain entities

mod announcement;
mod audit;
mod chat;
mod comment;
mod mention;
mod report;
mod room;
mod room_message;
mod sanction;
mod user;

pub use announcement::{Announcement, AnnouncementScope, AnnouncementStatus};
pub use audit::AuditEntry;
pub use chat::Chat;
pub use comment::Comment;
pub use mention::MentionNotice;
pub use report::{Report, ReportStatus};
pub use room::{MembershipRole, Room, RoomMembership, RoomVisibility};
pub use room_message::{RoomMessage, RoomMessageStatus};
pub use sanction::{Sanction, SanctionKind};
pub use user::{AuthClaims, User, UserStatus};
