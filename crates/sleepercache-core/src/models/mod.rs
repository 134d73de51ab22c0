//! Typed models for Sleeper API resources.
//!
//! This module contains the structures decoded from the raw JSON the API
//! returns:
//!
//! - `League`, `LeagueSettings`, `User`, `Roster`, `RosterSettings`
//! - `Matchup`, `Transaction`: weekly scoring and league activity
//! - `Draft`, `DraftPick`, `TradedPick`: draft history and pick trades
//! - `Player`, `PlayerDirectory`: the NFL player catalog
//!
//! The API schema is not under our control, so every field beyond the
//! identifiers is optional or defaulted, and unknown fields are kept in a
//! flattened `extra` map.

pub mod draft;
pub mod league;
pub mod matchup;
pub mod player;

pub use draft::{Draft, DraftPick, TradedPick};
pub use league::{League, LeagueSettings, Roster, RosterSettings, User, FALLBACK_WEEK};
pub use matchup::{Matchup, Transaction};
pub use player::{Player, PlayerDirectory};

use serde::{Deserialize, Deserializer};

// Helper to treat an explicit JSON null like a missing field
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
