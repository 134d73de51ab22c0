use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::deserialize_null_default;

/// The full NFL player catalog, keyed by player id.
pub type PlayerDirectory = HashMap<String, Player>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub position: Option<String>,
    pub team: Option<String>,
    pub status: Option<String>,
    pub injury_status: Option<String>,
    pub age: Option<u32>,
    pub years_exp: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub fantasy_positions: Vec<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Player {
    /// Full name, else "First Last", else the player id.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.full_name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            self.player_id.clone().unwrap_or_else(|| "Unknown".to_string())
        } else {
            parts.join(" ")
        }
    }
}
