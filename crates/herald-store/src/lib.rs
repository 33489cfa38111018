//! # herald-store
//!
//! Adapter crate for the external document store. The durable store is an
//! external collaborator reached through the repository ports in
//! `herald-core`; this crate ships the in-memory implementation used by
//! tests and local runs. It honors the same contract the managed store
//! offers: point reads, field-level merge upserts, array-union/remove,
//! numeric increments, and bounded delete-by-query pages.

mod memory;
pub mod repositories;

pub use memory::MemoryStore;
