//! Service context - dependency container for services
//!
//! Holds the repository ports, the push gateway, and the application
//! configuration. All durable state lives behind the ports in the external
//! document store; the context itself carries no mutable state.

use std::sync::Arc;

use herald_common::AppConfig;
use herald_core::traits::{
    AnnouncementRepository, AuditLogRepository, ChatRepository, CommentRepository,
    MembershipRepository, NotificationRepository, PushGateway, ReportRepository,
    RoomMessageRepository, RoomRepository, SanctionRepository, UserRepository,
};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    sanction_repo: Arc<dyn SanctionRepository>,
    chat_repo: Arc<dyn ChatRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
    room_repo: Arc<dyn RoomRepository>,
    membership_repo: Arc<dyn MembershipRepository>,
    room_message_repo: Arc<dyn RoomMessageRepository>,
    report_repo: Arc<dyn ReportRepository>,
    announcement_repo: Arc<dyn AnnouncementRepository>,
    audit_repo: Arc<dyn AuditLogRepository>,
    push_gateway: Arc<dyn PushGateway>,
    config: Arc<AppConfig>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        sanction_repo: Arc<dyn SanctionRepository>,
        chat_repo: Arc<dyn ChatRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
        room_repo: Arc<dyn RoomRepository>,
        membership_repo: Arc<dyn MembershipRepository>,
        room_message_repo: Arc<dyn RoomMessageRepository>,
        report_repo: Arc<dyn ReportRepository>,
        announcement_repo: Arc<dyn AnnouncementRepository>,
        audit_repo: Arc<dyn AuditLogRepository>,
        push_gateway: Arc<dyn PushGateway>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            user_repo,
            sanction_repo,
            chat_repo,
            comment_repo,
            notification_repo,
            room_repo,
            membership_repo,
            room_message_repo,
            report_repo,
            announcement_repo,
            audit_repo,
            push_gateway,
            config,
        }
    }

    /// Create a context whose every repository is served by one store
    /// adapter, which is how both the production binary and the tests wire
    /// things up.
    pub fn from_store<S>(store: Arc<S>, push_gateway: Arc<dyn PushGateway>, config: AppConfig) -> Self
    where
        S: UserRepository
            + SanctionRepository
            + ChatRepository
            + CommentRepository
            + NotificationRepository
            + RoomRepository
            + MembershipRepository
            + RoomMessageRepository
            + ReportRepository
            + AnnouncementRepository
            + AuditLogRepository
            + 'static,
    {
        Self::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
            push_gateway,
            Arc::new(config),
        )
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the sanction repository
    pub fn sanction_repo(&self) -> &dyn SanctionRepository {
        self.sanction_repo.as_ref()
    }

    /// Get the chat repository
    pub fn chat_repo(&self) -> &dyn ChatRepository {
        self.chat_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the notification repository
    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    /// Get the room repository
    pub fn room_repo(&self) -> &dyn RoomRepository {
        self.room_repo.as_ref()
    }

    /// Get the room membership repository
    pub fn membership_repo(&self) -> &dyn MembershipRepository {
        self.membership_repo.as_ref()
    }

    /// Get the room message repository
    pub fn room_message_repo(&self) -> &dyn RoomMessageRepository {
        self.room_message_repo.as_ref()
    }

    /// Get the report repository
    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }

    /// Get the announcement repository
    pub fn announcement_repo(&self) -> &dyn AnnouncementRepository {
        self.announcement_repo.as_ref()
    }

    /// Get the audit log repository
    pub fn audit_repo(&self) -> &dyn AuditLogRepository {
        self.audit_repo.as_ref()
    }

    // === Collaborators ===

    /// Get the push gateway
    pub fn push_gateway(&self) -> &dyn PushGateway {
        self.push_gateway.as_ref()
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("push_gateway", &"PushGateway")
            .finish()
    }
}

/// Generate a new document id.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
