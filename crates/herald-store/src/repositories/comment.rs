//! Comment repository implementation

use async_trait::async_trait;

use herald_core::entities::Comment;
use herald_core::traits::{CommentRepository, RepoResult};

use crate::memory::MemoryStore;

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Comment>> {
        Ok(self.inner.comments.get(id).map(|c| c.clone()))
    }

    async fn upsert(&self, comment: &Comment) -> RepoResult<()> {
        self.inner
            .comments
            .insert(comment.id.clone(), comment.clone());
        Ok(())
    }
}
