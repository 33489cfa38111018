//! Sanction repository implementation

use async_trait::async_trait;

use herald_core::entities::Sanction;
use herald_core::traits::{RepoResult, SanctionRepository};

use crate::memory::MemoryStore;

#[async_trait]
impl SanctionRepository for MemoryStore {
    async fn append(&self, sanction: &Sanction) -> RepoResult<()> {
        self.inner
            .sanctions
            .entry(sanction.user_id.clone())
            .or_default()
            .push(sanction.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<Sanction>> {
        Ok(self
            .inner
            .sanctions
            .get(user_id)
            .map(|s| s.clone())
            .unwrap_or_default())
    }
}
