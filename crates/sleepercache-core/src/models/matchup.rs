use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::deserialize_null_default;

/// One roster's side of a weekly pairing. Two entries sharing a
/// `matchup_id` play each other; byes have no `matchup_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub roster_id: u32,
    pub matchup_id: Option<u32>,
    pub points: Option<f64>,
    pub custom_points: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub starters: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub players: Vec<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Matchup {
    /// Whether `other` is this entry's opponent: same pairing, different roster.
    pub fn is_opponent(&self, other: &Matchup) -> bool {
        self.matchup_id.is_some()
            && self.matchup_id == other.matchup_id
            && self.roster_id != other.roster_id
    }
}

/// A trade, waiver claim, or free-agent move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    pub leg: Option<u32>,
    pub created: Option<i64>,
    pub status_updated: Option<i64>,
    pub creator: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub roster_ids: Vec<u32>,
    /// Player id to receiving roster id
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub adds: HashMap<String, u32>,
    /// Player id to releasing roster id
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub drops: HashMap<String, u32>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
