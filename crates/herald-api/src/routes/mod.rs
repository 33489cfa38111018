//! Route definitions
//!
//! Admin RPC endpoints, trigger endpoints, and the backfill entry point,
//! mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{backfill, health, moderation, triggers};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_v1_routes())
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(admin_routes())
        .merge(trigger_routes())
        .route("/backfill/last-seen", post(backfill::backfill_last_seen))
}

/// Authenticated admin/moderator RPC routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users/role", post(moderation::set_user_role))
        .route("/admin/users/mute", post(moderation::mute_user))
        .route("/admin/users/unmute", post(moderation::unmute_user))
        .route("/admin/users/ban", post(moderation::ban_user))
        .route("/admin/users/unban", post(moderation::unban_user))
        .route("/admin/users/shadow-ban", post(moderation::shadow_ban_user))
        .route(
            "/admin/rooms/moderators",
            post(moderation::assign_room_moderator),
        )
        .route(
            "/admin/rooms/members/mute",
            post(moderation::mute_room_member),
        )
        .route(
            "/admin/rooms/members/kick",
            post(moderation::kick_room_member),
        )
        .route(
            "/admin/rooms/messages/clear",
            post(moderation::clear_room_messages),
        )
        .route("/admin/rooms/save", post(moderation::save_room))
        .route("/admin/rooms/delete", post(moderation::delete_room))
        .route("/admin/reports/assign", post(moderation::assign_report))
        .route("/admin/reports/resolve", post(moderation::resolve_report))
        .route(
            "/admin/announcements/save",
            post(moderation::save_announcement),
        )
        .route(
            "/admin/announcements/delete",
            post(moderation::delete_announcement),
        )
}

/// Document-created trigger routes
fn trigger_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/triggers/chat-messages",
            post(triggers::on_chat_message_created),
        )
        .route(
            "/triggers/comment-likes",
            post(triggers::on_comment_like_created),
        )
        .route("/triggers/follows", post(triggers::on_follow_created))
        .route(
            "/triggers/notifications",
            post(triggers::on_notification_created),
        )
}
