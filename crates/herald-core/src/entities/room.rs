//! Room and room membership entities

use chrono::{DateTime, Utc};

/// Room visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomVisibility {
    #[default]
    Public,
    Private,
}

impl RoomVisibility {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

/// Role of a user within a single room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MembershipRole {
    #[default]
    Member,
    Moderator,
}

impl MembershipRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Moderator => "moderator",
        }
    }
}

/// A chat room managed by administrators.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub visibility: RoomVisibility,
    pub passcode_hash: Option<String>,
    /// User ids granted per-room moderator authority.
    pub moderator_ids: Vec<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            visibility: RoomVisibility::Public,
            passcode_hash: None,
            moderator_ids: Vec::new(),
            created_by: created_by.into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn is_moderator(&self, user_id: &str) -> bool {
        self.moderator_ids.iter().any(|id| id == user_id)
    }
}

/// Membership record of a user in a room.
///
/// The per-room mute flag is independent of the user's global status.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomMembership {
    pub room_id: String,
    pub user_id: String,
    pub role: MembershipRole,
    pub muted: bool,
    pub muted_until: Option<DateTime<Utc>>,
    pub joined_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RoomMembership {
    pub fn new(room_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            room_id: room_id.into(),
            user_id: user_id.into(),
            role: MembershipRole::Member,
            muted: false,
            muted_until: None,
            joined_at: now,
            updated_at: now,
        }
    }
}
