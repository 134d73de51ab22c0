use std::collections::HashMap;

use serde::Serialize;

use crate::api::{FetchError, SleeperClient};
use crate::models::{Roster, User};
use crate::utils::format::team_name_fallback;

/// One line of the league table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct StandingsRow {
    pub roster_id: u32,
    pub user_id: Option<String>,
    pub team_name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub record: String,
}

impl StandingsRow {
    pub fn from_roster(roster: &Roster, owner: Option<&User>) -> Self {
        let settings = &roster.settings;
        let team_name = owner
            .and_then(User::preferred_name)
            .map(str::to_string)
            .unwrap_or_else(|| team_name_fallback(roster.roster_id));

        Self {
            roster_id: roster.roster_id,
            user_id: roster.owner_id.clone(),
            team_name,
            wins: settings.wins,
            losses: settings.losses,
            ties: settings.ties,
            points_for: settings.points_for(),
            points_against: settings.points_against(),
            record: settings.record(),
        }
    }
}

/// Join rosters with their owners and rank them: most wins first, then most
/// points scored. The sort is stable, so exact ties keep roster order.
pub fn build_standings(rosters: &[Roster], users: &[User]) -> Vec<StandingsRow> {
    let users_by_id: HashMap<&str, &User> = users
        .iter()
        .filter_map(|user| user.user_id.as_deref().map(|id| (id, user)))
        .collect();

    let mut rows: Vec<StandingsRow> = rosters
        .iter()
        .map(|roster| {
            let owner = roster
                .owner_id
                .as_deref()
                .and_then(|id| users_by_id.get(id).copied());
            StandingsRow::from_roster(roster, owner)
        })
        .collect();

    rows.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.points_for.total_cmp(&a.points_for))
    });
    rows
}

impl SleeperClient {
    /// League standings, recomputed from the current rosters and users.
    pub async fn get_standings(&self) -> Result<Vec<StandingsRow>, FetchError> {
        let (rosters, users) = tokio::try_join!(self.get_rosters(), self.get_users())?;
        Ok(build_standings(&rosters, &users))
    }
}
