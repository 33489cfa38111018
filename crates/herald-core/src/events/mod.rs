//! Trigger events consumed by the notification path

mod trigger_event;

pub use trigger_event::{
    CommentLikedEvent, FollowCreatedEvent, MentionRecordedEvent, MessagePostedEvent, TriggerEvent,
};
