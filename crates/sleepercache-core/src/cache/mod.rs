//! In-memory response caching.
//!
//! This module provides the `ResponseCache` used by the API client to bound
//! request volume. Response bodies are stored as raw JSON keyed by request
//! URL (or an explicit key for parameterized resources) and are considered
//! stale five minutes after they were stored.
//!
//! Nothing is persisted; the cache lives exactly as long as its client.

pub mod store;

pub use store::{CacheEntry, ResponseCache};
