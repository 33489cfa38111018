//! Announcement entity - broadcast content managed by administrators

use chrono::{DateTime, Utc};

/// Where an announcement is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnouncementScope {
    Global,
    Room(String),
}

/// Publication status of an announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnouncementStatus {
    #[default]
    Draft,
    Scheduled,
    Published,
    Archived,
}

impl AnnouncementStatus {
    /// Parse a status argument, falling back to `Draft`.
    #[must_use]
    pub fn parse_or_draft(value: &str) -> Self {
        match value {
            "scheduled" => Self::Scheduled,
            "published" => Self::Published,
            "archived" => Self::Archived,
            _ => Self::Draft,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

/// Broadcast content, optionally scheduled for a future publish time.
#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub body: String,
    pub scope: AnnouncementScope,
    pub status: AnnouncementStatus,
    pub publish_at: Option<DateTime<Utc>>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            scope: AnnouncementScope::Global,
            status: AnnouncementStatus::Draft,
            publish_at: None,
            created_by: created_by.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
