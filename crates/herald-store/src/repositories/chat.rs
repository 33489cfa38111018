//! Chat repository implementation

use async_trait::async_trait;

use herald_core::entities::Chat;
use herald_core::traits::{ChatRepository, RepoResult};

use crate::memory::MemoryStore;

#[async_trait]
impl ChatRepository for MemoryStore {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Chat>> {
        Ok(self.inner.chats.get(id).map(|c| c.clone()))
    }

    async fn upsert(&self, chat: &Chat) -> RepoResult<()> {
        self.inner.chats.insert(chat.id.clone(), chat.clone());
        Ok(())
    }
}
