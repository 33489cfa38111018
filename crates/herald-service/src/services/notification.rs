//! Notification fan-out service
//!
//! Resolves the recipients of a trigger event, builds the platform-agnostic
//! payload, and delivers it through the push gateway. Every failure on this
//! path is absorbed locally: a failed notification never fails the domain
//! event that triggered it. Per-recipient deliveries run concurrently with
//! no ordering guarantee and no rollback when a subset fails.

use std::collections::BTreeMap;

use chrono::Utc;
use futures::future::join_all;
use serde_json::Value as JsonValue;
use tracing::{debug, info, instrument, warn};

use herald_core::events::{
    CommentLikedEvent, FollowCreatedEvent, MentionRecordedEvent, MessagePostedEvent, TriggerEvent,
};
use herald_core::traits::{PushMessage, SendErrorKind, DEFAULT_COLLAPSE_TAG};

use super::context::ServiceContext;
use super::outcome::{
    DeliveryReport, FanoutReport, SideEffectFailure, SideEffectKind, SkipReason,
};

/// A notification before data-value coercion.
///
/// Data values may be any JSON scalar here; they are stringified on the way
/// to the gateway because the client platform requires string-typed extras.
#[derive(Debug, Clone)]
pub struct OutboundNotification {
    pub title: String,
    pub body: String,
    pub data: BTreeMap<String, JsonValue>,
}

/// Notification fan-out service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Handle one trigger event end to end.
    ///
    /// Infallible: everything that can go wrong on this path is logged and
    /// carried in the report.
    #[instrument(skip(self, event), fields(event_type = event.event_type()))]
    pub async fn handle_event(&self, event: TriggerEvent) -> FanoutReport {
        match event {
            TriggerEvent::MessagePosted(e) => self.on_message_posted(e).await,
            TriggerEvent::CommentLiked(e) => self.on_comment_liked(e).await,
            TriggerEvent::FollowCreated(e) => self.on_follow_created(e).await,
            TriggerEvent::MentionRecorded(e) => self.on_mention_recorded(e).await,
        }
    }

    async fn on_message_posted(&self, event: MessagePostedEvent) -> FanoutReport {
        let mut report = FanoutReport::new("message_posted");

        let chat = match self.ctx.chat_repo().find_by_id(&event.chat_id).await {
            Ok(Some(chat)) => chat,
            Ok(None) => {
                debug!(chat_id = %event.chat_id, "Parent chat missing, skipping fan-out");
                return report;
            }
            Err(e) => {
                warn!(chat_id = %event.chat_id, error = %e, "Chat read failed");
                report
                    .side_effects
                    .push(SideEffectFailure::new(SideEffectKind::StoreRead, e.to_string()));
                return report;
            }
        };

        let sender_name = chat
            .last_message_sender_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Someone".to_string());

        let mut data = BTreeMap::new();
        data.insert("type".to_string(), JsonValue::from("dm"));
        data.insert("chatId".to_string(), JsonValue::from(event.chat_id.clone()));
        data.insert("senderId".to_string(), JsonValue::from(event.sender_id.clone()));
        data.insert("senderName".to_string(), JsonValue::from(sender_name.clone()));

        let note = OutboundNotification {
            title: format!("New message from {sender_name}"),
            body: message_body(&event),
            data,
        };

        let targets = chat.recipients_excluding(&event.sender_id);
        report.deliveries =
            join_all(targets.iter().map(|uid| self.notify_user(uid, &note))).await;

        info!(
            chat_id = %event.chat_id,
            attempts = report.attempts(),
            "Message fan-out complete"
        );
        report
    }

    async fn on_comment_liked(&self, event: CommentLikedEvent) -> FanoutReport {
        let mut report = FanoutReport::new("comment_liked");

        let comment = match self.ctx.comment_repo().find_by_id(&event.comment_id).await {
            Ok(Some(comment)) => comment,
            Ok(None) => {
                debug!(comment_id = %event.comment_id, "Parent comment missing, skipping");
                return report;
            }
            Err(e) => {
                warn!(comment_id = %event.comment_id, error = %e, "Comment read failed");
                report
                    .side_effects
                    .push(SideEffectFailure::new(SideEffectKind::StoreRead, e.to_string()));
                return report;
            }
        };

        // Self-like guard: the owner is never notified of their own like.
        if comment.user_id.is_empty() || comment.user_id == event.user_id {
            return report;
        }

        let mut data = BTreeMap::new();
        data.insert("type".to_string(), JsonValue::from("like"));
        data.insert("commentId".to_string(), JsonValue::from(comment.id.clone()));
        data.insert(
            "itemId".to_string(),
            match comment.title_id {
                Some(title_id) => JsonValue::from(title_id),
                None => JsonValue::Null,
            },
        );

        let note = OutboundNotification {
            title: "Someone liked your comment".to_string(),
            body: "Tap to view".to_string(),
            data,
        };

        report
            .deliveries
            .push(self.notify_user(&comment.user_id, &note).await);
        report
    }

    async fn on_follow_created(&self, event: FollowCreatedEvent) -> FanoutReport {
        let mut report = FanoutReport::new("follow_created");

        // Self-follow guard.
        if event.following_id.is_empty() || event.following_id == event.follower_id {
            return report;
        }

        let mut data = BTreeMap::new();
        data.insert("type".to_string(), JsonValue::from("follow"));
        data.insert(
            "followerId".to_string(),
            JsonValue::from(event.follower_id.clone()),
        );

        let note = OutboundNotification {
            title: "New follower".to_string(),
            body: "You have a new follower".to_string(),
            data,
        };

        report
            .deliveries
            .push(self.notify_user(&event.following_id, &note).await);
        report
    }

    async fn on_mention_recorded(&self, event: MentionRecordedEvent) -> FanoutReport {
        let mut report = FanoutReport::new("mention_recorded");

        if event.kind != "mention" {
            return report;
        }
        let recipient = match event.recipient_uid.as_deref().filter(|id| !id.is_empty()) {
            Some(recipient) => recipient,
            None => return report,
        };

        let sender_name = event
            .sender_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Someone".to_string());
        let forum_name = event
            .forum_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "a forum".to_string());

        let mut data = BTreeMap::new();
        data.insert("type".to_string(), JsonValue::from("mention"));
        data.insert(
            "forumId".to_string(),
            match &event.forum_id {
                Some(forum_id) => JsonValue::from(forum_id.clone()),
                None => JsonValue::Null,
            },
        );
        data.insert(
            "senderUid".to_string(),
            match &event.sender_uid {
                Some(sender_uid) => JsonValue::from(sender_uid.clone()),
                None => JsonValue::Null,
            },
        );
        data.insert("senderName".to_string(), JsonValue::from(sender_name.clone()));
        data.insert("forumName".to_string(), JsonValue::from(forum_name.clone()));

        let note = OutboundNotification {
            title: format!("{sender_name} mentioned you in {forum_name}"),
            body: event.message.clone().unwrap_or_default(),
            data,
        };

        report.deliveries.push(self.notify_user(recipient, &note).await);

        // Mark the stored notice as sent; failure is a non-fatal side effect.
        if let Err(e) = self
            .ctx
            .notification_repo()
            .mark_sent(&event.notification_id, Utc::now())
            .await
        {
            warn!(notification_id = %event.notification_id, error = %e, "Mark-sent failed");
            report
                .side_effects
                .push(SideEffectFailure::new(SideEffectKind::MarkSent, e.to_string()));
        }
        report
    }

    /// Deliver one notification to one user.
    ///
    /// Resolves the merged token set, sends through the gateway, and removes
    /// tokens the gateway reports as dead. Cleanup failures are swallowed.
    pub async fn notify_user(&self, user_id: &str, note: &OutboundNotification) -> DeliveryReport {
        let user = match self.ctx.user_repo().find_by_id(user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => return DeliveryReport::skipped(user_id, SkipReason::UserMissing),
            Err(e) => {
                warn!(user_id, error = %e, "Recipient read failed");
                return DeliveryReport::failed(user_id, e.to_string());
            }
        };

        let tokens = user.merged_tokens();
        if tokens.is_empty() {
            return DeliveryReport::skipped(user_id, SkipReason::NoTokens);
        }

        let data = stringify_data(&note.data);
        let message = PushMessage {
            collapse_tag: collapse_tag(&data),
            tokens,
            title: note.title.clone(),
            body: note.body.clone(),
            data,
            channel_id: self.ctx.config().push.channel_id.clone(),
        };

        let outcomes = match self.ctx.push_gateway().send(&message).await {
            Ok(outcomes) => outcomes,
            Err(e) => {
                warn!(user_id, error = %e, "Push delivery failed");
                return DeliveryReport::failed(user_id, e.to_string());
            }
        };

        let delivered = outcomes.iter().filter(|o| o.success).count();
        let mut report =
            DeliveryReport::delivered(user_id, delivered, outcomes.len() - delivered);

        let dead: Vec<String> = outcomes
            .iter()
            .filter(|o| !o.success && o.error.is_some_and(SendErrorKind::is_dead_token))
            .map(|o| o.token.clone())
            .collect();

        if !dead.is_empty() {
            match self.ctx.user_repo().remove_tokens(user_id, &dead).await {
                Ok(()) => {
                    info!(user_id, count = dead.len(), "Removed dead device tokens");
                    report.invalidated = dead;
                }
                Err(e) => {
                    warn!(user_id, error = %e, "Dead token cleanup failed");
                    report.side_effects.push(SideEffectFailure::new(
                        SideEffectKind::TokenCleanup,
                        e.to_string(),
                    ));
                }
            }
        }
        report
    }
}

/// Coerce every data value to its string representation.
///
/// JSON null becomes the empty string; everything else keeps its literal
/// form.
fn stringify_data(data: &BTreeMap<String, JsonValue>) -> BTreeMap<String, String> {
    data.iter()
        .map(|(key, value)| (key.clone(), stringify_value(value)))
        .collect()
}

fn stringify_value(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Grouping tag from the event's primary correlation id.
fn collapse_tag(data: &BTreeMap<String, String>) -> String {
    data.get("chatId")
        .filter(|id| !id.is_empty())
        .or_else(|| data.get("forumId").filter(|id| !id.is_empty()))
        .cloned()
        .unwrap_or_else(|| DEFAULT_COLLAPSE_TAG.to_string())
}

/// Notification body for a posted message.
fn message_body(event: &MessagePostedEvent) -> String {
    if let Some(text) = event.text.as_deref().filter(|t| !t.is_empty()) {
        return text.to_string();
    }
    if let Some(url) = event.image_url.as_deref().filter(|u| !u.is_empty()) {
        let is_gif = url.contains("giphy") || url.contains(".gif");
        return if is_gif {
            "Sent a GIF 🎬".to_string()
        } else {
            "Sent an image 📷".to_string()
        };
    }
    "New message".to_string()
}
