//! Room repository implementation

use async_trait::async_trait;
use chrono::Utc;

use herald_core::entities::Room;
use herald_core::error::DomainError;
use herald_core::traits::{RepoResult, RoomRepository};

use crate::memory::MemoryStore;

#[async_trait]
impl RoomRepository for MemoryStore {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Room>> {
        Ok(self.inner.rooms.get(id).map(|r| r.clone()))
    }

    async fn upsert(&self, room: &Room) -> RepoResult<()> {
        self.inner.rooms.insert(room.id.clone(), room.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> RepoResult<()> {
        self.inner.rooms.remove(id);
        Ok(())
    }

    async fn set_moderator(&self, room_id: &str, user_id: &str, grant: bool) -> RepoResult<()> {
        // Array ops require the document to exist.
        let mut room = self
            .inner
            .rooms
            .get_mut(room_id)
            .ok_or_else(|| DomainError::RoomNotFound(room_id.to_string()))?;

        if grant {
            if !room.is_moderator(user_id) {
                room.moderator_ids.push(user_id.to_string());
            }
        } else {
            room.moderator_ids.retain(|id| id != user_id);
        }
        room.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_moderator_union_and_remove() {
        let store = MemoryStore::new();
        store.upsert(&Room::new("r1", "general", "a1")).await.unwrap();

        store.set_moderator("r1", "u1", true).await.unwrap();
        store.set_moderator("r1", "u1", true).await.unwrap();
        let room = RoomRepository::find_by_id(&store, "r1").await.unwrap().unwrap();
        assert_eq!(room.moderator_ids, vec!["u1"]);

        store.set_moderator("r1", "u1", false).await.unwrap();
        let room = RoomRepository::find_by_id(&store, "r1").await.unwrap().unwrap();
        assert!(room.moderator_ids.is_empty());
    }

    #[tokio::test]
    async fn test_set_moderator_missing_room_errors() {
        let store = MemoryStore::new();
        let err = store.set_moderator("nope", "u1", true).await.unwrap_err();
        assert!(matches!(err, DomainError::RoomNotFound(_)));
    }
}
