//! Repository traits (ports) - define the interface to the document store
//!
//! The domain layer defines what it needs from the external document store;
//! adapters provide the implementation. The operations are deliberately
//! limited to what a document database offers: point reads by id,
//! field-level merge upserts, array-union/array-remove, numeric increments,
//! and bounded delete-by-query pages.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    Announcement, AuditEntry, Chat, Comment, MembershipRole, MentionNotice, Report, Room,
    RoomMembership, RoomMessage, Sanction, User,
};
use crate::error::DomainError;
use crate::value_objects::{ActorRole, ModerationPatch};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Point-read a user by id
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>>;

    /// Merge-upsert a whole user record (creates the document if absent)
    async fn upsert(&self, user: &User) -> RepoResult<()>;

    /// Set the role field and mirror it into the authorization claims,
    /// preserving the `banned` claim
    async fn set_role(&self, id: &str, role: ActorRole) -> RepoResult<()>;

    /// Set or clear the `banned` authorization claim
    async fn set_banned_claim(&self, id: &str, banned: bool) -> RepoResult<()>;

    /// Apply a merge-style moderation patch; creates the document if absent
    async fn apply_moderation(&self, id: &str, patch: &ModerationPatch) -> RepoResult<()>;

    /// Remove exactly the given tokens from the stored set (array-remove);
    /// idempotent - removing an absent token or targeting an absent user is
    /// a no-op
    async fn remove_tokens(&self, id: &str, tokens: &[String]) -> RepoResult<()>;

    /// Merge-set the last-seen timestamp
    async fn set_last_seen(&self, id: &str, at: DateTime<Utc>) -> RepoResult<()>;

    /// Page through users ordered by id, for backfill jobs
    async fn list_page(&self, after: Option<&str>, limit: usize) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Sanction Repository (subcollection of users)
// ============================================================================

#[async_trait]
pub trait SanctionRepository: Send + Sync {
    /// Append an immutable sanction record
    async fn append(&self, sanction: &Sanction) -> RepoResult<()>;

    /// List sanctions for a user, oldest first
    async fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<Sanction>>;
}

// ============================================================================
// Chat / Comment / Notification Repositories (notification-path parents)
// ============================================================================

#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Point-read a chat by id
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Chat>>;

    /// Merge-upsert a chat record
    async fn upsert(&self, chat: &Chat) -> RepoResult<()>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Point-read a comment by id
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Comment>>;

    /// Merge-upsert a comment record
    async fn upsert(&self, comment: &Comment) -> RepoResult<()>;
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Point-read a stored notification document by id
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<MentionNotice>>;

    /// Merge-upsert a notification document
    async fn upsert(&self, notice: &MentionNotice) -> RepoResult<()>;

    /// Mark a notification as sent with a server-assigned timestamp
    async fn mark_sent(&self, id: &str, at: DateTime<Utc>) -> RepoResult<()>;
}

// ============================================================================
// Room Repository
// ============================================================================

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Point-read a room by id
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Room>>;

    /// Merge-upsert a room record
    async fn upsert(&self, room: &Room) -> RepoResult<()>;

    /// Delete a room document; deleting an absent room is a no-op
    async fn delete(&self, id: &str) -> RepoResult<()>;

    /// Array-union/array-remove a user id on the room's moderator set
    async fn set_moderator(&self, room_id: &str, user_id: &str, grant: bool) -> RepoResult<()>;
}

// ============================================================================
// Membership Repository (subcollection of rooms)
// ============================================================================

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Point-read a membership by room and user id
    async fn find(&self, room_id: &str, user_id: &str) -> RepoResult<Option<RoomMembership>>;

    /// Merge-upsert a membership record
    async fn upsert(&self, membership: &RoomMembership) -> RepoResult<()>;

    /// Set the membership role; creates the record if absent
    async fn set_role(&self, room_id: &str, user_id: &str, role: MembershipRole)
        -> RepoResult<()>;

    /// Set the per-room mute flag and expiry; creates the record if absent
    async fn set_mute(
        &self,
        room_id: &str,
        user_id: &str,
        muted_until: DateTime<Utc>,
    ) -> RepoResult<()>;

    /// Delete a membership record; deleting an absent record is a no-op
    async fn delete(&self, room_id: &str, user_id: &str) -> RepoResult<()>;

    /// Delete up to `limit` membership records of a room, returning how many
    /// were removed. Callers recurse until a page comes back empty.
    async fn delete_page(&self, room_id: &str, limit: usize) -> RepoResult<u64>;
}

// ============================================================================
// Room Message Repository
// ============================================================================

#[async_trait]
pub trait RoomMessageRepository: Send + Sync {
    /// Create a message record
    async fn create(&self, message: &RoomMessage) -> RepoResult<()>;

    /// Most recent visible messages of a room, newest first
    async fn find_recent_visible(&self, room_id: &str, limit: usize)
        -> RepoResult<Vec<RoomMessage>>;

    /// Soft-delete the given messages, returning how many were updated
    async fn soft_delete(
        &self,
        room_id: &str,
        message_ids: &[String],
        deleted_by: &str,
        at: DateTime<Utc>,
    ) -> RepoResult<u64>;

    /// Delete up to `limit` message documents of a room, returning how many
    /// were removed. Callers recurse until a page comes back empty.
    async fn delete_page(&self, room_id: &str, limit: usize) -> RepoResult<u64>;
}

// ============================================================================
// Report Repository
// ============================================================================

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Point-read a report by id
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Report>>;

    /// Merge-upsert a report record
    async fn upsert(&self, report: &Report) -> RepoResult<()>;
}

// ============================================================================
// Announcement Repository
// ============================================================================

#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    /// Point-read an announcement by id
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Announcement>>;

    /// Merge-upsert an announcement record
    async fn upsert(&self, announcement: &Announcement) -> RepoResult<()>;

    /// Delete an announcement; deleting an absent record is a no-op
    async fn delete(&self, id: &str) -> RepoResult<()>;
}

// ============================================================================
// Audit Log Repository
// ============================================================================

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Append an immutable audit entry
    async fn append(&self, entry: &AuditEntry) -> RepoResult<()>;

    /// Most recent entries, newest first
    async fn recent(&self, limit: usize) -> RepoResult<Vec<AuditEntry>>;
}
