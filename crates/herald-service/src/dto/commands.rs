//! Command DTOs for admin/moderator actions
//!
//! One struct per action, deserialized from the RPC surface and validated
//! with the `validator` crate. Missing required identifiers surface as
//! invalid-argument before any handler logic runs.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use herald_core::value_objects::ActorRole;

// ============================================================================
// User sanctions
// ============================================================================

/// Set a user's role and mirror it into their authorization claims
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetUserRoleCommand {
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    pub role: ActorRole,
}

/// Mute a user globally
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MuteUserCommand {
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    /// Minutes to mute for; non-positive or absent falls back to the
    /// configured default.
    #[serde(default)]
    pub duration_minutes: Option<i64>,

    #[serde(default)]
    pub reason: Option<String>,
}

/// Lift a user's mute
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UnmuteUserCommand {
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,
}

/// Ban a user globally
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BanUserCommand {
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    /// Minutes to ban for. Absent means indefinite; supplied but
    /// non-positive falls back to the configured default.
    #[serde(default)]
    pub duration_minutes: Option<i64>,

    #[serde(default)]
    pub reason: Option<String>,
}

/// Lift a user's ban
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UnbanUserCommand {
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,
}

/// Enable or disable a shadow ban
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShadowBanUserCommand {
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    pub enabled: bool,
}

// ============================================================================
// Room moderation
// ============================================================================

/// Grant or revoke a user's room moderator role
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoomModeratorCommand {
    #[validate(length(min = 1, message = "roomId is required"))]
    pub room_id: String,

    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    #[serde(default = "default_true")]
    pub grant: bool,
}

/// Mute a member within one room only
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MuteRoomMemberCommand {
    #[validate(length(min = 1, message = "roomId is required"))]
    pub room_id: String,

    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    #[serde(default)]
    pub duration_minutes: Option<i64>,
}

/// Remove a member from a room
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct KickRoomMemberCommand {
    #[validate(length(min = 1, message = "roomId is required"))]
    pub room_id: String,

    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,
}

/// Soft-delete the most recent messages in a room
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClearRoomMessagesCommand {
    #[validate(length(min = 1, message = "roomId is required"))]
    pub room_id: String,

    /// How many messages to clear; non-positive or absent falls back to
    /// the configured default.
    #[serde(default)]
    pub limit: Option<i64>,
}

// ============================================================================
// Reports
// ============================================================================

/// Put a report in review, optionally assigning a moderator
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignReportCommand {
    #[validate(length(min = 1, message = "reportId is required"))]
    pub report_id: String,

    /// Defaults to the acting moderator.
    #[serde(default)]
    pub assignee_id: Option<String>,
}

/// Close out a report
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResolveReportCommand {
    #[validate(length(min = 1, message = "reportId is required"))]
    pub report_id: String,

    /// One of `resolved`, `rejected`, `inReview`, `open`; anything else is
    /// treated as `resolved`.
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub actions: Vec<String>,
}

// ============================================================================
// Rooms and announcements
// ============================================================================

/// Create or update a room
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveRoomCommand {
    /// Absent for creation; the server assigns an id.
    #[serde(default)]
    pub room_id: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Room name must be 1-100 characters"))]
    pub name: String,

    /// `public` (default) or `private`.
    #[serde(default)]
    pub visibility: Option<String>,

    /// Clear-text passcode; hashed before storage. Empty string removes the
    /// passcode.
    #[serde(default)]
    pub passcode: Option<String>,
}

/// Delete a room and cascade to its messages and memberships
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRoomCommand {
    #[validate(length(min = 1, message = "roomId is required"))]
    pub room_id: String,
}

/// Create or update an announcement
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveAnnouncementCommand {
    /// Absent for creation; the server assigns an id.
    #[serde(default)]
    pub announcement_id: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Body is required"))]
    pub body: String,

    /// Scopes the announcement to one room; absent means global.
    #[serde(default)]
    pub room_id: Option<String>,

    /// One of `draft`, `scheduled`, `published`, `archived`.
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub publish_at: Option<DateTime<Utc>>,
}

/// Delete an announcement
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAnnouncementCommand {
    #[validate(length(min = 1, message = "announcementId is required"))]
    pub announcement_id: String,
}

fn default_true() -> bool {
    true
}
