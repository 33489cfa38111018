//! In-memory document store
//!
//! Collections are concurrent maps keyed by document id; the audit log is an
//! append-only vector. Cloning the store is cheap and shares the underlying
//! data, mirroring how repository handles share one database pool.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;

use herald_core::entities::{
    Announcement, AuditEntry, Chat, Comment, MentionNotice, Report, Room, RoomMembership,
    RoomMessage, Sanction, User,
};

#[derive(Default)]
pub(crate) struct Collections {
    pub users: DashMap<String, User>,
    /// Sanctions are a subcollection of users, keyed by the parent user id.
    pub sanctions: DashMap<String, Vec<Sanction>>,
    pub chats: DashMap<String, Chat>,
    pub comments: DashMap<String, Comment>,
    pub notifications: DashMap<String, MentionNotice>,
    pub rooms: DashMap<String, Room>,
    /// Memberships are a subcollection of rooms, keyed by (room id, user id).
    pub memberships: DashMap<(String, String), RoomMembership>,
    pub room_messages: DashMap<String, RoomMessage>,
    pub reports: DashMap<String, Report>,
    pub announcements: DashMap<String, Announcement>,
    pub audit_log: RwLock<Vec<AuditEntry>>,
}

/// Shared in-memory store implementing every repository port.
#[derive(Clone, Default)]
pub struct MemoryStore {
    pub(crate) inner: Arc<Collections>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("users", &self.inner.users.len())
            .field("rooms", &self.inner.rooms.len())
            .field("audit_log", &self.inner.audit_log.read().len())
            .finish()
    }
}
