//! # herald-push
//!
//! Adapter crate for the external push gateway. `HttpPushGateway` speaks an
//! FCM-style HTTP API and decodes per-token results into the outcome list
//! the dispatcher consumes.

mod http;
mod outcome;

pub use http::HttpPushGateway;
pub use outcome::{classify_error, decode_outcomes, GatewayResponse, GatewayResult};
