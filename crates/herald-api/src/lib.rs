//! # herald-api
//!
//! RPC surface for admin/moderator actions, trigger endpoints for
//! document-created events, and the backfill entry point. Built with Axum.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
