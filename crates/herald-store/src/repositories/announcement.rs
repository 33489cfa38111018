//! Announcement repository implementation

use async_trait::async_trait;

use herald_core::entities::Announcement;
use herald_core::traits::{AnnouncementRepository, RepoResult};

use crate::memory::MemoryStore;

#[async_trait]
impl AnnouncementRepository for MemoryStore {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Announcement>> {
        Ok(self.inner.announcements.get(id).map(|a| a.clone()))
    }

    async fn upsert(&self, announcement: &Announcement) -> RepoResult<()> {
        self.inner
            .announcements
            .insert(announcement.id.clone(), announcement.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> RepoResult<()> {
        self.inner.announcements.remove(id);
        Ok(())
    }
}
