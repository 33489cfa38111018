//! Room membership repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use herald_core::entities::{MembershipRole, RoomMembership};
use herald_core::traits::{MembershipRepository, RepoResult};

use crate::memory::MemoryStore;

fn key(room_id: &str, user_id: &str) -> (String, String) {
    (room_id.to_string(), user_id.to_string())
}

#[async_trait]
impl MembershipRepository for MemoryStore {
    async fn find(&self, room_id: &str, user_id: &str) -> RepoResult<Option<RoomMembership>> {
        Ok(self
            .inner
            .memberships
            .get(&key(room_id, user_id))
            .map(|m| m.clone()))
    }

    async fn upsert(&self, membership: &RoomMembership) -> RepoResult<()> {
        self.inner.memberships.insert(
            key(&membership.room_id, &membership.user_id),
            membership.clone(),
        );
        Ok(())
    }

    async fn set_role(
        &self,
        room_id: &str,
        user_id: &str,
        role: MembershipRole,
    ) -> RepoResult<()> {
        let mut membership = self
            .inner
            .memberships
            .entry(key(room_id, user_id))
            .or_insert_with(|| RoomMembership::new(room_id, user_id));
        membership.role = role;
        membership.updated_at = Utc::now();
        Ok(())
    }

    async fn set_mute(
        &self,
        room_id: &str,
        user_id: &str,
        muted_until: DateTime<Utc>,
    ) -> RepoResult<()> {
        let mut membership = self
            .inner
            .memberships
            .entry(key(room_id, user_id))
            .or_insert_with(|| RoomMembership::new(room_id, user_id));
        membership.muted = true;
        membership.muted_until = Some(muted_until);
        membership.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, room_id: &str, user_id: &str) -> RepoResult<()> {
        self.inner.memberships.remove(&key(room_id, user_id));
        Ok(())
    }

    async fn delete_page(&self, room_id: &str, limit: usize) -> RepoResult<u64> {
        let page: Vec<(String, String)> = self
            .inner
            .memberships
            .iter()
            .filter(|entry| entry.key().0 == room_id)
            .take(limit)
            .map(|entry| entry.key().clone())
            .collect();

        for k in &page {
            self.inner.memberships.remove(k);
        }
        Ok(page.len() as u64)
    }
}
