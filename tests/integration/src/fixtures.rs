//! Fixtures for seeding the in-memory store
//!
//! Repository methods share names across collections, so fixtures call the
//! ports with fully qualified syntax.

use herald_core::entities::{Chat, Comment, MentionNotice, Report, Room, RoomMembership, RoomMessage, User};
use herald_core::traits::{
    ChatRepository, CommentRepository, MembershipRepository, NotificationRepository,
    ReportRepository, RoomMessageRepository, RoomRepository, UserRepository,
};
use herald_core::value_objects::ActorRole;
use herald_store::MemoryStore;

/// Seed a user with the given device tokens.
pub async fn seed_user(store: &MemoryStore, id: &str, name: &str, tokens: &[&str]) {
    let mut user = User::new(id, name);
    user.device_tokens = tokens.iter().map(ToString::to_string).collect();
    UserRepository::upsert(store, &user).await.unwrap();
}

/// Seed a user holding the given role.
pub async fn seed_user_with_role(store: &MemoryStore, id: &str, name: &str, role: ActorRole) {
    let mut user = User::new(id, name);
    user.role = role;
    user.claims.mirror_role(role);
    UserRepository::upsert(store, &user).await.unwrap();
}

/// Seed a chat with participants.
pub async fn seed_chat(store: &MemoryStore, id: &str, participants: &[&str], sender_name: &str) {
    let mut chat = Chat::new(id, participants.iter().map(ToString::to_string).collect());
    chat.last_message_sender_name = Some(sender_name.to_string());
    ChatRepository::upsert(store, &chat).await.unwrap();
}

/// Seed a comment owned by a user.
pub async fn seed_comment(store: &MemoryStore, id: &str, owner_id: &str, title_id: &str) {
    let mut comment = Comment::new(id, owner_id);
    comment.title_id = Some(title_id.to_string());
    CommentRepository::upsert(store, &comment).await.unwrap();
}

/// Seed a pending mention notice.
pub async fn seed_mention_notice(store: &MemoryStore, id: &str, recipient_id: &str) {
    let notice = MentionNotice::new(id, recipient_id);
    NotificationRepository::upsert(store, &notice).await.unwrap();
}

/// Seed a room with messages and memberships.
pub async fn seed_room_with_contents(
    store: &MemoryStore,
    room_id: &str,
    message_count: usize,
    member_count: usize,
) {
    RoomRepository::upsert(store, &Room::new(room_id, "general", "admin1"))
        .await
        .unwrap();
    for i in 0..message_count {
        let message = RoomMessage::new(format!("{room_id}-m{i}"), room_id, "u1", "hello");
        RoomMessageRepository::create(store, &message).await.unwrap();
    }
    for i in 0..member_count {
        let membership = RoomMembership::new(room_id, format!("member{i}"));
        MembershipRepository::upsert(store, &membership).await.unwrap();
    }
}

/// Seed an open report.
pub async fn seed_report(store: &MemoryStore, id: &str, reporter: &str) {
    let report = Report::new(id, reporter, "user:u9", "spam");
    ReportRepository::upsert(store, &report).await.unwrap();
}
