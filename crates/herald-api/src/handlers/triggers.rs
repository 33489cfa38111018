//! Trigger handlers for document-created events
//!
//! The trigger surface mirrors the document store's create events for
//! `chat_messages`, `comment_likes`, `follows`, and mention notifications.
//! Fan-out failures are absorbed inside the notification service, so these
//! endpoints always acknowledge the event.

use axum::{extract::State, Json};
use serde::Serialize;

use herald_core::events::{
    CommentLikedEvent, FollowCreatedEvent, MentionRecordedEvent, MessagePostedEvent, TriggerEvent,
};
use herald_service::{FanoutReport, NotificationService};

use crate::state::AppState;

/// Acknowledgement returned for every trigger invocation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerAck {
    pub success: bool,
    pub event_type: &'static str,
    /// Recipients for which a dispatch was attempted.
    pub attempts: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub side_effect_failures: Vec<String>,
}

impl From<FanoutReport> for TriggerAck {
    fn from(report: FanoutReport) -> Self {
        let mut side_effect_failures: Vec<String> = report
            .side_effects
            .iter()
            .map(ToString::to_string)
            .collect();
        for delivery in &report.deliveries {
            side_effect_failures.extend(delivery.side_effects.iter().map(ToString::to_string));
        }

        Self {
            success: true,
            event_type: report.event_type,
            attempts: report.attempts(),
            side_effect_failures,
        }
    }
}

/// Document created in `chat_messages`
///
/// POST /triggers/chat-messages
pub async fn on_chat_message_created(
    State(state): State<AppState>,
    Json(event): Json<MessagePostedEvent>,
) -> Json<TriggerAck> {
    let report = NotificationService::new(state.service_context())
        .handle_event(TriggerEvent::MessagePosted(event))
        .await;
    Json(TriggerAck::from(report))
}

/// Document created in `comment_likes`
///
/// POST /triggers/comment-likes
pub async fn on_comment_like_created(
    State(state): State<AppState>,
    Json(event): Json<CommentLikedEvent>,
) -> Json<TriggerAck> {
    let report = NotificationService::new(state.service_context())
        .handle_event(TriggerEvent::CommentLiked(event))
        .await;
    Json(TriggerAck::from(report))
}

/// Document created in `follows`
///
/// POST /triggers/follows
pub async fn on_follow_created(
    State(state): State<AppState>,
    Json(event): Json<FollowCreatedEvent>,
) -> Json<TriggerAck> {
    let report = NotificationService::new(state.service_context())
        .handle_event(TriggerEvent::FollowCreated(event))
        .await;
    Json(TriggerAck::from(report))
}

/// Document created in `notifications`
///
/// POST /triggers/notifications
pub async fn on_notification_created(
    State(state): State<AppState>,
    Json(event): Json<MentionRecordedEvent>,
) -> Json<TriggerAck> {
    let report = NotificationService::new(state.service_context())
        .handle_event(TriggerEvent::MentionRecorded(event))
        .await;
    Json(TriggerAck::from(report))
}
