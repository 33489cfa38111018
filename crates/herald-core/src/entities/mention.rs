//! Mention notice entity - a stored notification document for forum mentions

use chrono::{DateTime, Utc};

/// A document in the notifications collection describing a forum mention.
///
/// After the push delivery is attempted the record is marked `sent` with a
/// server-assigned timestamp so clients can distinguish pending notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionNotice {
    pub id: String,
    /// Notification kind; this core only reacts to `"mention"`.
    pub kind: String,
    pub recipient_id: String,
    pub sender_id: Option<String>,
    pub sender_name: Option<String>,
    pub forum_id: Option<String>,
    pub forum_name: Option<String>,
    pub message: Option<String>,
    pub sent: bool,
    pub sent_at: Option<DateTime<Utc>>,
}

impl MentionNotice {
    pub fn new(id: impl Into<String>, recipient_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: "mention".to_string(),
            recipient_id: recipient_id.into(),
            sender_id: None,
            sender_name: None,
            forum_id: None,
            forum_name: None,
            message: None,
            sent: false,
            sent_at: None,
        }
    }
}
