//! Repository implementations backed by [`crate::MemoryStore`]
//!
//! One module per collection family, mirroring the ports in `herald-core`.

mod announcement;
mod audit;
mod chat;
mod comment;
mod membership;
mod notice;
mod report;
mod room;
mod room_message;
mod sanction;
mod user;
