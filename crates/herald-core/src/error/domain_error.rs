//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Chat not found: {0}")]
    ChatNotFound(String),

    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    #[error("Room not found: {0}")]
    RoomNotFound(String),

    #[error("Membership not found: {0}")]
    MembershipNotFound(String),

    #[error("Report not found: {0}")]
    ReportNotFound(String),

    #[error("Announcement not found: {0}")]
    AnnouncementNotFound(String),

    #[error("Notification not found: {0}")]
    NotificationNotFound(String),

    // =========================================================================
    // Caller Errors
    // =========================================================================
    #[error("Missing caller identity")]
    Unauthenticated,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // =========================================================================
    // Collaborator Errors (wrapped)
    // =========================================================================
    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Push gateway error: {0}")]
    GatewayError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ChatNotFound(_) => "UNKNOWN_CHAT",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::RoomNotFound(_) => "UNKNOWN_ROOM",
            Self::MembershipNotFound(_) => "UNKNOWN_MEMBERSHIP",
            Self::ReportNotFound(_) => "UNKNOWN_REPORT",
            Self::AnnouncementNotFound(_) => "UNKNOWN_ANNOUNCEMENT",
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",

            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::PermissionDenied(_) => "PERMISSION_DENIED",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",

            Self::StoreError(_) => "STORE_ERROR",
            Self::GatewayError(_) => "GATEWAY_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ChatNotFound(_)
                | Self::CommentNotFound(_)
                | Self::RoomNotFound(_)
                | Self::MembershipNotFound(_)
                | Self::ReportNotFound(_)
                | Self::AnnouncementNotFound(_)
                | Self::NotificationNotFound(_)
        )
    }

    /// Check if this is a caller authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::PermissionDenied(_))
    }

    /// Check if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
