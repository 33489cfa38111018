//! Data transfer objects
//!
//! Typed command structs for every admin/moderator action, plus response
//! envelopes. Commands are validated once at the boundary.

mod commands;
mod responses;

pub use commands::{
    AssignReportCommand, AssignRoomModeratorCommand, BanUserCommand, ClearRoomMessagesCommand,
    DeleteAnnouncementCommand, DeleteRoomCommand, KickRoomMemberCommand, MuteRoomMemberCommand,
    MuteUserCommand, ResolveReportCommand, SaveAnnouncementCommand, SaveRoomCommand,
    SetUserRoleCommand, ShadowBanUserCommand, UnbanUserCommand, UnmuteUserCommand,
};
pub use responses::{ActionResponse, BackfillResponse, HealthResponse};
