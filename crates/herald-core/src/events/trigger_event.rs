//! Trigger events - the closed set of document-created events that drive
//! notification fan-out
//!
//! Each variant carries the typed payload of the created document. Payloads
//! are validated once at the boundary; handlers never inspect loose JSON.

use serde::{Deserialize, Serialize};

/// All trigger kinds the notification path reacts to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum TriggerEvent {
    MessagePosted(MessagePostedEvent),
    CommentLiked(CommentLikedEvent),
    FollowCreated(FollowCreatedEvent),
    MentionRecorded(MentionRecordedEvent),
}

impl TriggerEvent {
    /// Get the event type name.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::MessagePosted(_) => "message_posted",
            Self::CommentLiked(_) => "comment_liked",
            Self::FollowCreated(_) => "follow_created",
            Self::MentionRecorded(_) => "mention_recorded",
        }
    }

    /// Id of the acting user, used by the self-action guard.
    pub fn actor_id(&self) -> Option<&str> {
        match self {
            Self::MessagePosted(e) => Some(&e.sender_id),
            Self::CommentLiked(e) => Some(&e.user_id),
            Self::FollowCreated(e) => Some(&e.follower_id),
            Self::MentionRecorded(e) => e.sender_uid.as_deref(),
        }
    }
}

/// A new document in `chat_messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePostedEvent {
    #[serde(default)]
    pub message_id: Option<String>,
    pub chat_id: String,
    pub sender_id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A new document in `comment_likes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentLikedEvent {
    #[serde(default)]
    pub like_id: Option<String>,
    pub comment_id: String,
    /// The liking user.
    pub user_id: String,
}

/// A new document in `follows`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowCreatedEvent {
    #[serde(default)]
    pub follow_id: Option<String>,
    pub follower_id: String,
    pub following_id: String,
}

/// A new document in `notifications`; only `kind == "mention"` is handled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionRecordedEvent {
    pub notification_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub recipient_uid: Option<String>,
    #[serde(default)]
    pub sender_uid: Option<String>,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub forum_id: Option<String>,
    #[serde(default)]
    pub forum_name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names() {
        let event = TriggerEvent::FollowCreated(FollowCreatedEvent {
            follow_id: None,
            follower_id: "u1".to_string(),
            following_id: "u2".to_string(),
        });
        assert_eq!(event.event_type(), "follow_created");
        assert_eq!(event.actor_id(), Some("u1"));
    }

    #[test]
    fn test_message_posted_deserializes_camel_case() {
        let event: MessagePostedEvent = serde_json::from_str(
            r#"{"chatId":"c1","senderId":"u1","text":"hi"}"#,
        )
        .unwrap();
        assert_eq!(event.chat_id, "c1");
        assert_eq!(event.sender_id, "u1");
        assert_eq!(event.text.as_deref(), Some("hi"));
        assert!(event.image_url.is_none());
    }

    #[test]
    fn test_mention_event_type_field() {
        let event: MentionRecordedEvent = serde_json::from_str(
            r#"{"notificationId":"n1","type":"mention","recipientUid":"u2"}"#,
        )
        .unwrap();
        assert_eq!(event.kind, "mention");
        assert_eq!(event.recipient_uid.as_deref(), Some("u2"));
    }
}
