//! User repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use herald_core::entities::User;
use herald_core::traits::{RepoResult, UserRepository};
use herald_core::value_objects::{ActorRole, ModerationPatch};

use crate::memory::MemoryStore;

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        Ok(self.inner.users.get(id).map(|u| u.clone()))
    }

    async fn upsert(&self, user: &User) -> RepoResult<()> {
        self.inner.users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn set_role(&self, id: &str, role: ActorRole) -> RepoResult<()> {
        let mut user = self
            .inner
            .users
            .entry(id.to_string())
            .or_insert_with(|| User::new(id, ""));
        user.role = role;
        user.claims.mirror_role(role);
        user.updated_at = Utc::now();
        Ok(())
    }

    async fn set_banned_claim(&self, id: &str, banned: bool) -> RepoResult<()> {
        let mut user = self
            .inner
            .users
            .entry(id.to_string())
            .or_insert_with(|| User::new(id, ""));
        user.claims.banned = banned;
        user.updated_at = Utc::now();
        Ok(())
    }

    async fn apply_moderation(&self, id: &str, patch: &ModerationPatch) -> RepoResult<()> {
        // Merge semantics: the document is created if absent.
        let mut user = self
            .inner
            .users
            .entry(id.to_string())
            .or_insert_with(|| User::new(id, ""));
        user.apply_moderation(patch);
        Ok(())
    }

    async fn remove_tokens(&self, id: &str, tokens: &[String]) -> RepoResult<()> {
        // Array-remove on the multi-token set only; removing absent tokens
        // or targeting an absent user is a no-op.
        if let Some(mut user) = self.inner.users.get_mut(id) {
            user.device_tokens.retain(|t| !tokens.contains(t));
            user.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn set_last_seen(&self, id: &str, at: DateTime<Utc>) -> RepoResult<()> {
        let mut user = self
            .inner
            .users
            .entry(id.to_string())
            .or_insert_with(|| User::new(id, ""));
        user.last_seen = Some(at);
        Ok(())
    }

    async fn list_page(&self, after: Option<&str>, limit: usize) -> RepoResult<Vec<User>> {
        let mut ids: Vec<String> = self
            .inner
            .users
            .iter()
            .map(|entry| entry.key().clone())
            .filter(|id| after.is_none_or(|a| id.as_str() > a))
            .collect();
        ids.sort();
        ids.truncate(limit);

        Ok(ids
            .iter()
            .filter_map(|id| self.inner.users.get(id).map(|u| u.clone()))
            .collect())
    }
}
