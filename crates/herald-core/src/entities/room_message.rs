//! Room message entity

use chrono::{DateTime, Utc};

/// Visibility status of a room message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomMessageStatus {
    #[default]
    Visible,
    /// Soft-deleted by a moderator; the document is kept for audit purposes.
    Deleted,
}

/// A message posted in a room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomMessage {
    pub id: String,
    pub room_id: String,
    pub sender_id: String,
    pub body: String,
    pub status: RoomMessageStatus,
    pub deleted_by: Option<String>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl RoomMessage {
    pub fn new(
        id: impl Into<String>,
        room_id: impl Into<String>,
        sender_id: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            room_id: room_id.into(),
            sender_id: sender_id.into(),
            body: body.into(),
            status: RoomMessageStatus::Visible,
            deleted_by: None,
            deleted_at: None,
            created_at: Utc::now(),
        }
    }
}
