//! REST client module for the Sleeper fantasy football API.
//!
//! This module provides the `SleeperClient` for fetching league, roster,
//! matchup, transaction, draft and player data. The API is public and
//! read-only, so no authentication is involved.

pub mod client;
pub mod error;

pub use client::SleeperClient;
pub use error::FetchError;
