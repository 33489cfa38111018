//! Sanction engine
//!
//! Applies the fixed set of moderation state transitions to users, rooms,
//! reports, and announcements. Every action re-derives the caller's
//! authority (stored role first, claims fallback), performs its primary
//! mutation, and then records one audit entry best-effort. Re-applying an
//! idempotent action (the same mute twice) is harmless; there is no retry.

use chrono::{Duration, Utc};
use serde_json::json;
use tracing::{info, instrument};
use validator::Validate;

use herald_core::entities::{
    Announcement, AnnouncementScope, AnnouncementStatus, MembershipRole, ReportStatus, Room,
    RoomVisibility, Sanction, SanctionKind, UserStatus,
};
use herald_core::value_objects::{ActorRole, ModerationPatch, Patch};
use herald_common::auth::hash_passcode;

use crate::dto::{
    AssignReportCommand, AssignRoomModeratorCommand, BanUserCommand, ClearRoomMessagesCommand,
    DeleteAnnouncementCommand, DeleteRoomCommand, KickRoomMemberCommand, MuteRoomMemberCommand,
    MuteUserCommand, ResolveReportCommand, SaveAnnouncementCommand, SaveRoomCommand,
    SetUserRoleCommand, ShadowBanUserCommand, UnbanUserCommand, UnmuteUserCommand,
};

use super::audit::AuditService;
use super::authority::{AuthorityService, CallerIdentity};
use super::context::{new_id, ServiceContext};
use super::error::{ServiceError, ServiceResult};
use super::outcome::ActionReport;

/// Sanction engine service
pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn authority(&self) -> AuthorityService<'_> {
        AuthorityService::new(self.ctx)
    }

    fn audit(&self) -> AuditService<'_> {
        AuditService::new(self.ctx)
    }

    // ========================================================================
    // User sanctions
    // ========================================================================

    /// Set a user's role and mirror it into their authorization claims
    #[instrument(skip(self, caller, cmd))]
    pub async fn set_user_role(
        &self,
        caller: &CallerIdentity,
        cmd: SetUserRoleCommand,
    ) -> ServiceResult<ActionReport> {
        let actor = self.authority().require(caller, ActorRole::Admin).await?;
        cmd.validate()?;

        self.ctx.user_repo().set_role(&cmd.user_id, cmd.role).await?;

        info!(user_id = %cmd.user_id, role = %cmd.role, actor_id = %actor.id, "User role set");

        let side_effect = self
            .audit()
            .record_soft(
                &actor,
                "set_user_role",
                "user",
                &cmd.user_id,
                json!({ "role": cmd.role.as_str() }),
            )
            .await;
        Ok(ActionReport::new("set_user_role").with_side_effect(side_effect))
    }

    /// Mute a user globally
    #[instrument(skip(self, caller, cmd))]
    pub async fn mute_user(
        &self,
        caller: &CallerIdentity,
        cmd: MuteUserCommand,
    ) -> ServiceResult<ActionReport> {
        let actor = self
            .authority()
            .require(caller, ActorRole::Moderator)
            .await?;
        cmd.validate()?;

        let minutes = effective_minutes(
            cmd.duration_minutes,
            self.ctx.config().moderation.default_mute_minutes,
        );
        let muted_until = Utc::now() + Duration::minutes(minutes);
        let reason = cmd.reason.clone().unwrap_or_default();

        self.ctx
            .user_repo()
            .apply_moderation(
                &cmd.user_id,
                &ModerationPatch {
                    status: Some(UserStatus::Muted),
                    muted_until: Patch::Set(muted_until),
                    last_sanction_reason: Patch::Set(reason.clone()),
                    bump_sanction_count: true,
                    ..ModerationPatch::default()
                },
            )
            .await?;

        let sanction = Sanction::new(
            new_id(),
            &cmd.user_id,
            SanctionKind::Mute,
            &reason,
            &actor.id,
            &actor.display_name,
        )
        .with_metadata(json!({ "durationMinutes": minutes }))
        .with_expiry(muted_until);
        self.ctx.sanction_repo().append(&sanction).await?;

        info!(user_id = %cmd.user_id, minutes, actor_id = %actor.id, "User muted");

        let side_effect = self
            .audit()
            .record_soft(
                &actor,
                "mute_user",
                "user",
                &cmd.user_id,
                json!({ "durationMinutes": minutes, "mutedUntil": muted_until.to_rfc3339() }),
            )
            .await;
        Ok(ActionReport::new("mute_user").with_side_effect(side_effect))
    }

    /// Lift a user's mute
    #[instrument(skip(self, caller, cmd))]
    pub async fn unmute_user(
        &self,
        caller: &CallerIdentity,
        cmd: UnmuteUserCommand,
    ) -> ServiceResult<ActionReport> {
        let actor = self
            .authority()
            .require(caller, ActorRole::Moderator)
            .await?;
        cmd.validate()?;

        self.ctx
            .user_repo()
            .apply_moderation(
                &cmd.user_id,
                &ModerationPatch {
                    status: Some(UserStatus::Active),
                    muted_until: Patch::Clear,
                    last_sanction_reason: Patch::Clear,
                    ..ModerationPatch::default()
                },
            )
            .await?;

        info!(user_id = %cmd.user_id, actor_id = %actor.id, "User unmuted");

        let side_effect = self
            .audit()
            .record_soft(&actor, "unmute_user", "user", &cmd.user_id, json!({}))
            .await;
        Ok(ActionReport::new("unmute_user").with_side_effect(side_effect))
    }

    /// Ban a user globally
    #[instrument(skip(self, caller, cmd))]
    pub async fn ban_user(
        &self,
        caller: &CallerIdentity,
        cmd: BanUserCommand,
    ) -> ServiceResult<ActionReport> {
        let actor = self.authority().require(caller, ActorRole::Admin).await?;
        cmd.validate()?;

        // Absent duration means an indefinite ban; a supplied but invalid
        // duration falls back to the configured default.
        let banned_until = cmd.duration_minutes.map(|requested| {
            let minutes = effective_minutes(
                Some(requested),
                self.ctx.config().moderation.default_ban_minutes,
            );
            Utc::now() + Duration::minutes(minutes)
        });
        let reason = cmd.reason.clone().unwrap_or_default();

        self.ctx
            .user_repo()
            .apply_moderation(
                &cmd.user_id,
                &ModerationPatch {
                    status: Some(UserStatus::Banned),
                    banned_until: match banned_until {
                        Some(until) => Patch::Set(until),
                        None => Patch::Clear,
                    },
                    last_sanction_reason: Patch::Set(reason.clone()),
                    bump_sanction_count: true,
                    ..ModerationPatch::default()
                },
            )
            .await?;

        let mut sanction = Sanction::new(
            new_id(),
            &cmd.user_id,
            SanctionKind::Ban,
            &reason,
            &actor.id,
            &actor.display_name,
        )
        .with_metadata(json!({ "permanent": banned_until.is_none() }));
        if let Some(until) = banned_until {
            sanction = sanction.with_expiry(until);
        }
        self.ctx.sanction_repo().append(&sanction).await?;

        self.ctx
            .user_repo()
            .set_banned_claim(&cmd.user_id, true)
            .await?;

        info!(
            user_id = %cmd.user_id,
            permanent = banned_until.is_none(),
            actor_id = %actor.id,
            "User banned"
        );

        let side_effect = self
            .audit()
            .record_soft(
                &actor,
                "ban_user",
                "user",
                &cmd.user_id,
                json!({
                    "bannedUntil": banned_until.map(|t| t.to_rfc3339()),
                    "reason": reason,
                }),
            )
            .await;
        Ok(ActionReport::new("ban_user").with_side_effect(side_effect))
    }

    /// Lift a user's ban
    #[instrument(skip(self, caller, cmd))]
    pub async fn unban_user(
        &self,
        caller: &CallerIdentity,
        cmd: UnbanUserCommand,
    ) -> ServiceResult<ActionReport> {
        let actor = self.authority().require(caller, ActorRole::Admin).await?;
        cmd.validate()?;

        self.ctx
            .user_repo()
            .apply_moderation(
                &cmd.user_id,
                &ModerationPatch {
                    status: Some(UserStatus::Active),
                    banned_until: Patch::Clear,
                    ..ModerationPatch::default()
                },
            )
            .await?;
        self.ctx
            .user_repo()
            .set_banned_claim(&cmd.user_id, false)
            .await?;

        info!(user_id = %cmd.user_id, actor_id = %actor.id, "User unbanned");

        let side_effect = self
            .audit()
            .record_soft(&actor, "unban_user", "user", &cmd.user_id, json!({}))
            .await;
        Ok(ActionReport::new("unban_user").with_side_effect(side_effect))
    }

    /// Enable or disable a shadow ban
    ///
    /// The flag always follows the command; the visible status is mirrored
    /// only when enabling.
    #[instrument(skip(self, caller, cmd))]
    pub async fn shadow_ban_user(
        &self,
        caller: &CallerIdentity,
        cmd: ShadowBanUserCommand,
    ) -> ServiceResult<ActionReport> {
        let actor = self.authority().require(caller, ActorRole::Admin).await?;
        cmd.validate()?;

        self.ctx
            .user_repo()
            .apply_moderation(
                &cmd.user_id,
                &ModerationPatch {
                    status: cmd.enabled.then_some(UserStatus::ShadowBanned),
                    shadow_banned: Some(cmd.enabled),
                    ..ModerationPatch::default()
                },
            )
            .await?;

        info!(user_id = %cmd.user_id, enabled = cmd.enabled, actor_id = %actor.id, "Shadow ban toggled");

        let side_effect = self
            .audit()
            .record_soft(
                &actor,
                "shadow_ban_user",
                "user",
                &cmd.user_id,
                json!({ "enabled": cmd.enabled }),
            )
            .await;
        Ok(ActionReport::new("shadow_ban_user").with_side_effect(side_effect))
    }

    // ========================================================================
    // Room moderation
    // ========================================================================

    /// Grant or revoke per-room moderator authority
    #[instrument(skip(self, caller, cmd))]
    pub async fn assign_room_moderator(
        &self,
        caller: &CallerIdentity,
        cmd: AssignRoomModeratorCommand,
    ) -> ServiceResult<ActionReport> {
        let actor = self.authority().require(caller, ActorRole::Admin).await?;
        cmd.validate()?;

        self.ctx
            .room_repo()
            .set_moderator(&cmd.room_id, &cmd.user_id, cmd.grant)
            .await?;

        let role = if cmd.grant {
            MembershipRole::Moderator
        } else {
            MembershipRole::Member
        };
        self.ctx
            .membership_repo()
            .set_role(&cmd.room_id, &cmd.user_id, role)
            .await?;

        info!(room_id = %cmd.room_id, user_id = %cmd.user_id, grant = cmd.grant, "Room moderator updated");

        let side_effect = self
            .audit()
            .record_soft(
                &actor,
                "assign_room_moderator",
                "room",
                &cmd.room_id,
                json!({ "userId": cmd.user_id, "grant": cmd.grant }),
            )
            .await;
        Ok(ActionReport::new("assign_room_moderator").with_side_effect(side_effect))
    }

    /// Mute a member within one room; the global user status is untouched
    #[instrument(skip(self, caller, cmd))]
    pub async fn mute_room_member(
        &self,
        caller: &CallerIdentity,
        cmd: MuteRoomMemberCommand,
    ) -> ServiceResult<ActionReport> {
        let actor = self
            .authority()
            .require(caller, ActorRole::Moderator)
            .await?;
        cmd.validate()?;

        let minutes = effective_minutes(
            cmd.duration_minutes,
            self.ctx.config().moderation.default_mute_minutes,
        );
        let muted_until = Utc::now() + Duration::minutes(minutes);

        self.ctx
            .membership_repo()
            .set_mute(&cmd.room_id, &cmd.user_id, muted_until)
            .await?;

        info!(room_id = %cmd.room_id, user_id = %cmd.user_id, minutes, "Room member muted");

        let side_effect = self
            .audit()
            .record_soft(
                &actor,
                "mute_room_member",
                "room_member",
                &cmd.user_id,
                json!({ "roomId": cmd.room_id, "durationMinutes": minutes }),
            )
            .await;
        Ok(ActionReport::new("mute_room_member").with_side_effect(side_effect))
    }

    /// Remove a member from a room
    #[instrument(skip(self, caller, cmd))]
    pub async fn kick_room_member(
        &self,
        caller: &CallerIdentity,
        cmd: KickRoomMemberCommand,
    ) -> ServiceResult<ActionReport> {
        let actor = self
            .authority()
            .require(caller, ActorRole::Moderator)
            .await?;
        cmd.validate()?;

        self.ctx
            .membership_repo()
            .delete(&cmd.room_id, &cmd.user_id)
            .await?;

        info!(room_id = %cmd.room_id, user_id = %cmd.user_id, actor_id = %actor.id, "Room member kicked");

        let side_effect = self
            .audit()
            .record_soft(
                &actor,
                "kick_room_member",
                "room_member",
                &cmd.user_id,
                json!({ "roomId": cmd.room_id }),
            )
            .await;
        Ok(ActionReport::new("kick_room_member").with_side_effect(side_effect))
    }

    /// Soft-delete the most recent messages of a room
    #[instrument(skip(self, caller, cmd))]
    pub async fn clear_room_messages(
        &self,
        caller: &CallerIdentity,
        cmd: ClearRoomMessagesCommand,
    ) -> ServiceResult<ActionReport> {
        let actor = self
            .authority()
            .require(caller, ActorRole::Moderator)
            .await?;
        cmd.validate()?;

        let limit = match cmd.limit {
            Some(n) if n > 0 => n as usize,
            _ => self.ctx.config().moderation.default_clear_limit,
        };

        let messages = self
            .ctx
            .room_message_repo()
            .find_recent_visible(&cmd.room_id, limit)
            .await?;
        let ids: Vec<String> = messages.iter().map(|m| m.id.clone()).collect();
        let cleared = self
            .ctx
            .room_message_repo()
            .soft_delete(&cmd.room_id, &ids, &actor.id, Utc::now())
            .await?;

        info!(room_id = %cmd.room_id, cleared, actor_id = %actor.id, "Room messages cleared");

        let side_effect = self
            .audit()
            .record_soft(
                &actor,
                "clear_room_messages",
                "room",
                &cmd.room_id,
                json!({ "cleared": cleared }),
            )
            .await;
        Ok(ActionReport::new("clear_room_messages").with_side_effect(side_effect))
    }

    // ========================================================================
    // Reports
    // ========================================================================

    /// Put a report in review
    #[instrument(skip(self, caller, cmd))]
    pub async fn assign_report(
        &self,
        caller: &CallerIdentity,
        cmd: AssignReportCommand,
    ) -> ServiceResult<ActionReport> {
        let actor = self
            .authority()
            .require(caller, ActorRole::Moderator)
            .await?;
        cmd.validate()?;

        let mut report = self
            .ctx
            .report_repo()
            .find_by_id(&cmd.report_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Report", cmd.report_id.clone()))?;

        report.status = ReportStatus::InReview;
        report.assigned_to = Some(
            cmd.assignee_id
                .clone()
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| actor.id.clone()),
        );
        report.updated_at = Utc::now();
        self.ctx.report_repo().upsert(&report).await?;

        info!(report_id = %cmd.report_id, assignee = ?report.assigned_to, "Report assigned");

        let side_effect = self
            .audit()
            .record_soft(
                &actor,
                "assign_report",
                "report",
                &cmd.report_id,
                json!({ "assignee": report.assigned_to }),
            )
            .await;
        Ok(ActionReport::new("assign_report").with_side_effect(side_effect))
    }

    /// Close out a report
    #[instrument(skip(self, caller, cmd))]
    pub async fn resolve_report(
        &self,
        caller: &CallerIdentity,
        cmd: ResolveReportCommand,
    ) -> ServiceResult<ActionReport> {
        let actor = self
            .authority()
            .require(caller, ActorRole::Moderator)
            .await?;
        cmd.validate()?;

        let mut report = self
            .ctx
            .report_repo()
            .find_by_id(&cmd.report_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Report", cmd.report_id.clone()))?;

        let status = ReportStatus::parse_or_resolved(cmd.status.as_deref().unwrap_or_default());
        report.status = status;
        if let Some(notes) = cmd.notes.clone() {
            report.resolution_notes = Some(notes);
        }
        if !cmd.actions.is_empty() {
            report.resolution_actions = cmd.actions.clone();
        }
        report.updated_at = Utc::now();
        self.ctx.report_repo().upsert(&report).await?;

        info!(report_id = %cmd.report_id, status = status.as_str(), "Report resolved");

        let side_effect = self
            .audit()
            .record_soft(
                &actor,
                "resolve_report",
                "report",
                &cmd.report_id,
                json!({ "status": status.as_str() }),
            )
            .await;
        Ok(ActionReport::new("resolve_report").with_side_effect(side_effect))
    }

    // ========================================================================
    // Rooms and announcements
    // ========================================================================

    /// Create or update a room
    #[instrument(skip(self, caller, cmd))]
    pub async fn save_room(
        &self,
        caller: &CallerIdentity,
        cmd: SaveRoomCommand,
    ) -> ServiceResult<ActionReport> {
        let actor = self.authority().require(caller, ActorRole::Admin).await?;
        cmd.validate()?;

        let id = cmd.room_id.clone().unwrap_or_else(new_id);
        let mut room = self
            .ctx
            .room_repo()
            .find_by_id(&id)
            .await?
            .unwrap_or_else(|| Room::new(&id, &cmd.name, &actor.id));

        room.name = cmd.name.clone();
        room.visibility = match cmd.visibility.as_deref() {
            Some("private") => RoomVisibility::Private,
            _ => RoomVisibility::Public,
        };
        if let Some(passcode) = cmd.passcode.as_deref() {
            room.passcode_hash = if passcode.is_empty() {
                None
            } else {
                Some(hash_passcode(passcode)?)
            };
        }
        room.updated_at = Utc::now();
        self.ctx.room_repo().upsert(&room).await?;

        info!(room_id = %id, actor_id = %actor.id, "Room saved");

        let side_effect = self
            .audit()
            .record_soft(
                &actor,
                "save_room",
                "room",
                &id,
                json!({ "name": room.name, "visibility": room.visibility.as_str() }),
            )
            .await;
        Ok(ActionReport::new("save_room").with_side_effect(side_effect))
    }

    /// Delete a room and everything under it
    ///
    /// Cascades in bounded pages: messages first, then memberships, then
    /// the room document itself.
    #[instrument(skip(self, caller, cmd))]
    pub async fn delete_room(
        &self,
        caller: &CallerIdentity,
        cmd: DeleteRoomCommand,
    ) -> ServiceResult<ActionReport> {
        let actor = self.authority().require(caller, ActorRole::Admin).await?;
        cmd.validate()?;

        let batch = self.ctx.config().moderation.delete_batch_size;

        loop {
            let removed = self
                .ctx
                .room_message_repo()
                .delete_page(&cmd.room_id, batch)
                .await?;
            if removed == 0 {
                break;
            }
        }
        loop {
            let removed = self
                .ctx
                .membership_repo()
                .delete_page(&cmd.room_id, batch)
                .await?;
            if removed == 0 {
                break;
            }
        }
        self.ctx.room_repo().delete(&cmd.room_id).await?;

        info!(room_id = %cmd.room_id, actor_id = %actor.id, "Room deleted");

        let side_effect = self
            .audit()
            .record_soft(&actor, "delete_room", "room", &cmd.room_id, json!({}))
            .await;
        Ok(ActionReport::new("delete_room").with_side_effect(side_effect))
    }

    /// Create or update an announcement
    #[instrument(skip(self, caller, cmd))]
    pub async fn save_announcement(
        &self,
        caller: &CallerIdentity,
        cmd: SaveAnnouncementCommand,
    ) -> ServiceResult<ActionReport> {
        let actor = self.authority().require(caller, ActorRole::Admin).await?;
        cmd.validate()?;

        let id = cmd.announcement_id.clone().unwrap_or_else(new_id);
        let mut announcement = self
            .ctx
            .announcement_repo()
            .find_by_id(&id)
            .await?
            .unwrap_or_else(|| Announcement::new(&id, &cmd.title, &cmd.body, &actor.id));

        announcement.title = cmd.title.clone();
        announcement.body = cmd.body.clone();
        announcement.scope = match cmd.room_id.clone().filter(|id| !id.is_empty()) {
            Some(room_id) => AnnouncementScope::Room(room_id),
            None => AnnouncementScope::Global,
        };
        if let Some(status) = cmd.status.as_deref() {
            announcement.status = AnnouncementStatus::parse_or_draft(status);
        }
        if cmd.publish_at.is_some() {
            announcement.publish_at = cmd.publish_at;
        }
        announcement.updated_at = Utc::now();
        self.ctx.announcement_repo().upsert(&announcement).await?;

        info!(announcement_id = %id, actor_id = %actor.id, "Announcement saved");

        let side_effect = self
            .audit()
            .record_soft(
                &actor,
                "save_announcement",
                "announcement",
                &id,
                json!({ "status": announcement.status.as_str() }),
            )
            .await;
        Ok(ActionReport::new("save_announcement").with_side_effect(side_effect))
    }

    /// Delete an announcement
    #[instrument(skip(self, caller, cmd))]
    pub async fn delete_announcement(
        &self,
        caller: &CallerIdentity,
        cmd: DeleteAnnouncementCommand,
    ) -> ServiceResult<ActionReport> {
        let actor = self.authority().require(caller, ActorRole::Admin).await?;
        cmd.validate()?;

        self.ctx
            .announcement_repo()
            .delete(&cmd.announcement_id)
            .await?;

        info!(announcement_id = %cmd.announcement_id, actor_id = %actor.id, "Announcement deleted");

        let side_effect = self
            .audit()
            .record_soft(
                &actor,
                "delete_announcement",
                "announcement",
                &cmd.announcement_id,
                json!({}),
            )
            .await;
        Ok(ActionReport::new("delete_announcement").with_side_effect(side_effect))
    }
}

/// Effective sanction duration: non-positive or absent input falls back to
/// the action's documented default.
fn effective_minutes(requested: Option<i64>, default: i64) -> i64 {
    match requested {
        Some(minutes) if minutes > 0 => minutes,
        _ => default,
    }
}
