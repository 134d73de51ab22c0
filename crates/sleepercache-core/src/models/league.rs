use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::deserialize_null_default;
use crate::utils::format::{decode_points, format_record};

/// Week used when the league settings carry no usable week.
pub const FALLBACK_WEEK: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub league_id: String,
    pub name: Option<String>,
    pub season: Option<String>,
    pub status: Option<String>,
    pub sport: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub total_rosters: u32,
    pub draft_id: Option<String>,
    pub previous_league_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub settings: LeagueSettings,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeagueSettings {
    /// The week the league is currently scoring
    pub leg: Option<u32>,
    pub start_week: Option<u32>,
    pub playoff_week_start: Option<u32>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl LeagueSettings {
    /// `leg`, else `start_week`, else week 1. A zero counts as unset.
    ///
    /// This is a heuristic: nothing checks it against the season state.
    pub fn current_week(&self) -> u32 {
        self.leg
            .filter(|week| *week > 0)
            .or(self.start_week.filter(|week| *week > 0))
            .unwrap_or(FALLBACK_WEEK)
    }
}

impl League {
    pub fn current_week(&self) -> u32 {
        self.settings.current_week()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: Option<String>,
    pub display_name: Option<String>,
    pub username: Option<String>,
    pub avatar: Option<String>,
    pub metadata: Option<Value>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl User {
    /// Display name, else username, skipping empty strings.
    pub fn preferred_name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| self.username.as_deref().filter(|name| !name.is_empty()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub roster_id: u32,
    pub owner_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub co_owners: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub players: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub starters: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub reserve: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub taxi: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub settings: RosterSettings,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Roster {
    /// A roster is identified either by its owner's user id or by its own
    /// roster id written as a decimal string.
    pub fn is_identified_by(&self, id: &str) -> bool {
        self.owner_id.as_deref() == Some(id) || self.roster_id.to_string() == id
    }
}

/// Season record. Points come split into whole and hundredths fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterSettings {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub wins: u32,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub losses: u32,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub ties: u32,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub fpts: u32,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub fpts_decimal: u32,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub fpts_against: u32,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub fpts_against_decimal: u32,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl RosterSettings {
    pub fn points_for(&self) -> f64 {
        decode_points(self.fpts, self.fpts_decimal)
    }

    pub fn points_against(&self) -> f64 {
        decode_points(self.fpts_against, self.fpts_against_decimal)
    }

    pub fn record(&self) -> String {
        format_record(self.wins, self.losses, self.ties)
    }
}
