//! Notification repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use herald_core::entities::MentionNotice;
use herald_core::error::DomainError;
use herald_core::traits::{NotificationRepository, RepoResult};

use crate::memory::MemoryStore;

#[async_trait]
impl NotificationRepository for MemoryStore {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<MentionNotice>> {
        Ok(self.inner.notifications.get(id).map(|n| n.clone()))
    }

    async fn upsert(&self, notice: &MentionNotice) -> RepoResult<()> {
        self.inner
            .notifications
            .insert(notice.id.clone(), notice.clone());
        Ok(())
    }

    async fn mark_sent(&self, id: &str, at: DateTime<Utc>) -> RepoResult<()> {
        let mut notice = self
            .inner
            .notifications
            .get_mut(id)
            .ok_or_else(|| DomainError::NotificationNotFound(id.to_string()))?;
        notice.sent = true;
        notice.sent_at = Some(at);
        Ok(())
    }
}
