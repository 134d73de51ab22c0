use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    pub draft_id: String,
    pub league_id: Option<String>,
    pub season: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub start_time: Option<i64>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftPick {
    pub player_id: Option<String>,
    pub picked_by: Option<String>,
    pub roster_id: Option<u32>,
    pub round: Option<u32>,
    pub draft_slot: Option<u32>,
    pub pick_no: Option<u32>,
    pub draft_id: Option<String>,
    pub metadata: Option<Value>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// A future pick that changed hands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradedPick {
    pub season: Option<String>,
    pub round: Option<u32>,
    /// Roster the pick originally belonged to
    pub roster_id: Option<u32>,
    pub previous_owner_id: Option<u32>,
    pub owner_id: Option<u32>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
