//! Admin/moderator RPC handlers
//!
//! One endpoint per sanction-engine action. Each takes a typed, validated
//! command and returns a `{"success": true, ...}` envelope or a typed
//! error.

use axum::{extract::State, Json};
use herald_service::{
    ActionResponse, AssignReportCommand, AssignRoomModeratorCommand, BanUserCommand,
    ClearRoomMessagesCommand, DeleteAnnouncementCommand, DeleteRoomCommand, KickRoomMemberCommand,
    ModerationService, MuteRoomMemberCommand, MuteUserCommand, ResolveReportCommand,
    SaveAnnouncementCommand, SaveRoomCommand, SetUserRoleCommand, ShadowBanUserCommand,
    UnbanUserCommand, UnmuteUserCommand,
};

use crate::extractors::{AuthCaller, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Set a user's role
///
/// POST /admin/users/role
pub async fn set_user_role(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(cmd): ValidatedJson<SetUserRoleCommand>,
) -> ApiResult<Json<ActionResponse>> {
    let report = ModerationService::new(state.service_context())
        .set_user_role(&caller, cmd)
        .await?;
    Ok(Json(ActionResponse::from(report)))
}

/// Mute a user
///
/// POST /admin/users/mute
pub async fn mute_user(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(cmd): ValidatedJson<MuteUserCommand>,
) -> ApiResult<Json<ActionResponse>> {
    let report = ModerationService::new(state.service_context())
        .mute_user(&caller, cmd)
        .await?;
    Ok(Json(ActionResponse::from(report)))
}

/// Unmute a user
///
/// POST /admin/users/unmute
pub async fn unmute_user(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(cmd): ValidatedJson<UnmuteUserCommand>,
) -> ApiResult<Json<ActionResponse>> {
    let report = ModerationService::new(state.service_context())
        .unmute_user(&caller, cmd)
        .await?;
    Ok(Json(ActionResponse::from(report)))
}

/// Ban a user
///
/// POST /admin/users/ban
pub async fn ban_user(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(cmd): ValidatedJson<BanUserCommand>,
) -> ApiResult<Json<ActionResponse>> {
    let report = ModerationService::new(state.service_context())
        .ban_user(&caller, cmd)
        .await?;
    Ok(Json(ActionResponse::from(report)))
}

/// Unban a user
///
/// POST /admin/users/unban
pub async fn unban_user(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(cmd): ValidatedJson<UnbanUserCommand>,
) -> ApiResult<Json<ActionResponse>> {
    let report = ModerationService::new(state.service_context())
        .unban_user(&caller, cmd)
        .await?;
    Ok(Json(ActionResponse::from(report)))
}

/// Toggle a shadow ban
///
/// POST /admin/users/shadow-ban
pub async fn shadow_ban_user(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(cmd): ValidatedJson<ShadowBanUserCommand>,
) -> ApiResult<Json<ActionResponse>> {
    let report = ModerationService::new(state.service_context())
        .shadow_ban_user(&caller, cmd)
        .await?;
    Ok(Json(ActionResponse::from(report)))
}

/// Grant or revoke a room moderator
///
/// POST /admin/rooms/moderators
pub async fn assign_room_moderator(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(cmd): ValidatedJson<AssignRoomModeratorCommand>,
) -> ApiResult<Json<ActionResponse>> {
    let report = ModerationService::new(state.service_context())
        .assign_room_moderator(&caller, cmd)
        .await?;
    Ok(Json(ActionResponse::from(report)))
}

/// Mute a room member
///
/// POST /admin/rooms/members/mute
pub async fn mute_room_member(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(cmd): ValidatedJson<MuteRoomMemberCommand>,
) -> ApiResult<Json<ActionResponse>> {
    let report = ModerationService::new(state.service_context())
        .mute_room_member(&caller, cmd)
        .await?;
    Ok(Json(ActionResponse::from(report)))
}

/// Kick a room member
///
/// POST /admin/rooms/members/kick
pub async fn kick_room_member(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(cmd): ValidatedJson<KickRoomMemberCommand>,
) -> ApiResult<Json<ActionResponse>> {
    let report = ModerationService::new(state.service_context())
        .kick_room_member(&caller, cmd)
        .await?;
    Ok(Json(ActionResponse::from(report)))
}

/// Clear recent room messages
///
/// POST /admin/rooms/messages/clear
pub async fn clear_room_messages(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(cmd): ValidatedJson<ClearRoomMessagesCommand>,
) -> ApiResult<Json<ActionResponse>> {
    let report = ModerationService::new(state.service_context())
        .clear_room_messages(&caller, cmd)
        .await?;
    Ok(Json(ActionResponse::from(report)))
}

/// Assign a report for review
///
/// POST /admin/reports/assign
pub async fn assign_report(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(cmd): ValidatedJson<AssignReportCommand>,
) -> ApiResult<Json<ActionResponse>> {
    let report = ModerationService::new(state.service_context())
        .assign_report(&caller, cmd)
        .await?;
    Ok(Json(ActionResponse::from(report)))
}

/// Resolve a report
///
/// POST /admin/reports/resolve
pub async fn resolve_report(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(cmd): ValidatedJson<ResolveReportCommand>,
) -> ApiResult<Json<ActionResponse>> {
    let report = ModerationService::new(state.service_context())
        .resolve_report(&caller, cmd)
        .await?;
    Ok(Json(ActionResponse::from(report)))
}

/// Create or update a room
///
/// POST /admin/rooms/save
pub async fn save_room(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(cmd): ValidatedJson<SaveRoomCommand>,
) -> ApiResult<Json<ActionResponse>> {
    let report = ModerationService::new(state.service_context())
        .save_room(&caller, cmd)
        .await?;
    Ok(Json(ActionResponse::from(report)))
}

/// Delete a room and cascade
///
/// POST /admin/rooms/delete
pub async fn delete_room(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(cmd): ValidatedJson<DeleteRoomCommand>,
) -> ApiResult<Json<ActionResponse>> {
    let report = ModerationService::new(state.service_context())
        .delete_room(&caller, cmd)
        .await?;
    Ok(Json(ActionResponse::from(report)))
}

/// Create or update an announcement
///
/// POST /admin/announcements/save
pub async fn save_announcement(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(cmd): ValidatedJson<SaveAnnouncementCommand>,
) -> ApiResult<Json<ActionResponse>> {
    let report = ModerationService::new(state.service_context())
        .save_announcement(&caller, cmd)
        .await?;
    Ok(Json(ActionResponse::from(report)))
}

/// Delete an announcement
///
/// POST /admin/announcements/delete
pub async fn delete_announcement(
    State(state): State<AppState>,
    AuthCaller(caller): AuthCaller,
    ValidatedJson(cmd): ValidatedJson<DeleteAnnouncementCommand>,
) -> ApiResult<Json<ActionResponse>> {
    let report = ModerationService::new(state.service_context())
        .delete_announcement(&caller, cmd)
        .await?;
    Ok(Json(ActionResponse::from(report)))
}
