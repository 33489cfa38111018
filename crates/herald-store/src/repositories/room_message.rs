//! Room message repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use herald_core::entities::{RoomMessage, RoomMessageStatus};
use herald_core::traits::{RepoResult, RoomMessageRepository};

use crate::memory::MemoryStore;

#[async_trait]
impl RoomMessageRepository for MemoryStore {
    async fn create(&self, message: &RoomMessage) -> RepoResult<()> {
        self.inner
            .room_messages
            .insert(message.id.clone(), message.clone());
        Ok(())
    }

    async fn find_recent_visible(
        &self,
        room_id: &str,
        limit: usize,
    ) -> RepoResult<Vec<RoomMessage>> {
        let mut messages: Vec<RoomMessage> = self
            .inner
            .room_messages
            .iter()
            .filter(|entry| {
                entry.room_id == room_id && entry.status == RoomMessageStatus::Visible
            })
            .map(|entry| entry.clone())
            .collect();

        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        messages.truncate(limit);
        Ok(messages)
    }

    async fn soft_delete(
        &self,
        room_id: &str,
        message_ids: &[String],
        deleted_by: &str,
        at: DateTime<Utc>,
    ) -> RepoResult<u64> {
        let mut updated = 0;
        for id in message_ids {
            if let Some(mut message) = self.inner.room_messages.get_mut(id) {
                if message.room_id != room_id || message.status == RoomMessageStatus::Deleted {
                    continue;
                }
                message.status = RoomMessageStatus::Deleted;
                message.deleted_by = Some(deleted_by.to_string());
                message.deleted_at = Some(at);
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn delete_page(&self, room_id: &str, limit: usize) -> RepoResult<u64> {
        let page: Vec<String> = self
            .inner
            .room_messages
            .iter()
            .filter(|entry| entry.room_id == room_id)
            .take(limit)
            .map(|entry| entry.key().clone())
            .collect();

        for id in &page {
            self.inner.room_messages.remove(id);
        }
        Ok(page.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn test_find_recent_visible_orders_newest_first() {
        let store = MemoryStore::new();
        let base = Utc::now();
        for i in 0..3 {
            let mut message = RoomMessage::new(format!("m{i}"), "r1", "u1", "hello");
            message.created_at = base + Duration::seconds(i);
            store.create(&message).await.unwrap();
        }

        let recent = store.find_recent_visible("r1", 2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, "m2");
        assert_eq!(recent[1].id, "m1");
    }

    #[tokio::test]
    async fn test_soft_delete_skips_foreign_and_deleted() {
        let store = MemoryStore::new();
        store
            .create(&RoomMessage::new("m1", "r1", "u1", "hello"))
            .await
            .unwrap();
        store
            .create(&RoomMessage::new("m2", "r2", "u1", "other room"))
            .await
            .unwrap();

        let ids = vec!["m1".to_string(), "m2".to_string()];
        let now = Utc::now();
        let updated = store.soft_delete("r1", &ids, "mod1", now).await.unwrap();
        assert_eq!(updated, 1);

        // Second pass is a no-op for already-deleted messages
        let updated = store.soft_delete("r1", &ids, "mod1", now).await.unwrap();
        assert_eq!(updated, 0);

        let visible = store.find_recent_visible("r1", 10).await.unwrap();
        assert!(visible.is_empty());
    }
}
