//! Cached client for the Sleeper fantasy football API.
//!
//! `SleeperClient` fetches league, roster, matchup, transaction, draft and
//! player data from the public read-only API, reusing responses for five
//! minutes, and builds standings, upcoming-matchup and activity views on top.

pub mod api;
pub mod cache;
pub mod config;
pub mod models;
pub mod utils;
pub mod views;

pub use api::{FetchError, SleeperClient};
pub use cache::{CacheEntry, ResponseCache};
pub use config::ClientConfig;
pub use views::{StandingsRow, UpcomingMatchup, DEFAULT_ACTIVITY_LIMIT};
