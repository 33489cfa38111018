//! Request handlers

pub mod backfill;
pub mod health;
pub mod moderation;
pub mod triggers;
