use serde::Serialize;

use crate::api::{FetchError, SleeperClient};
use crate::models::{Matchup, Roster};

/// A roster's pairing for the current week.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingMatchup {
    pub week: u32,
    pub user_matchup: Matchup,
    /// `None` on a bye or when the schedule has no opponent yet
    pub opponent_matchup: Option<Matchup>,
}

/// Find the roster identified by `id` (owner user id or roster id).
pub fn find_user_roster<'a>(rosters: &'a [Roster], id: &str) -> Option<&'a Roster> {
    rosters.iter().find(|roster| roster.is_identified_by(id))
}

/// Locate `roster_id`'s entry in a week of matchups and the opponent sharing
/// its `matchup_id`. Returns `None` if the roster has no entry that week.
pub fn pair_matchup(week: u32, matchups: &[Matchup], roster_id: u32) -> Option<UpcomingMatchup> {
    let user_matchup = matchups.iter().find(|m| m.roster_id == roster_id)?;
    let opponent_matchup = matchups
        .iter()
        .find(|m| user_matchup.is_opponent(m))
        .cloned();

    Some(UpcomingMatchup {
        week,
        user_matchup: user_matchup.clone(),
        opponent_matchup,
    })
}

impl SleeperClient {
    /// The week the league is currently on, from the league settings.
    pub async fn get_current_week(&self) -> Result<u32, FetchError> {
        Ok(self.get_league().await?.current_week())
    }

    /// The roster owned by `user_id`, or whose roster id is `user_id`.
    pub async fn get_user_roster(&self, user_id: &str) -> Result<Option<Roster>, FetchError> {
        let rosters = self.get_rosters().await?;
        Ok(find_user_roster(&rosters, user_id).cloned())
    }

    /// This week's matchup for the given user and their opponent.
    pub async fn get_upcoming_matchup(
        &self,
        user_id: &str,
    ) -> Result<Option<UpcomingMatchup>, FetchError> {
        let week = self.get_current_week().await?;
        let (matchups, roster) =
            tokio::try_join!(self.get_matchups(week), self.get_user_roster(user_id))?;

        Ok(roster.and_then(|roster| pair_matchup(week, &matchups, roster.roster_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn matchups() -> Vec<Matchup> {
        serde_json::from_value(json!([
            {"roster_id": 1, "matchup_id": 9, "points": 101.5},
            {"roster_id": 2, "matchup_id": 9, "points": 88.2},
            {"roster_id": 3, "matchup_id": 10, "points": 0.0}
        ]))
        .expect("parse matchups")
    }

    #[test]
    fn test_pairs_opponent_by_matchup_id() {
        let result = pair_matchup(4, &matchups(), 1).expect("roster 1 plays");
        assert_eq!(result.week, 4);
        assert_eq!(result.user_matchup.roster_id, 1);
        assert_eq!(result.opponent_matchup.map(|m| m.roster_id), Some(2));
    }

    #[test]
    fn test_unpaired_matchup_has_no_opponent() {
        let result = pair_matchup(4, &matchups(), 3).expect("roster 3 has an entry");
        assert_eq!(result.user_matchup.roster_id, 3);
        assert!(result.opponent_matchup.is_none());
    }

    #[test]
    fn test_missing_roster_yields_none() {
        assert!(pair_matchup(4, &matchups(), 12).is_none());
    }

    #[test]
    fn test_find_user_roster() {
        let rosters: Vec<Roster> = serde_json::from_value(json!([
            {"roster_id": 1, "owner_id": "alice"},
            {"roster_id": 2, "owner_id": "bob"}
        ]))
        .expect("parse rosters");

        assert_eq!(find_user_roster(&rosters, "bob").map(|r| r.roster_id), Some(2));
        assert_eq!(find_user_roster(&rosters, "1").map(|r| r.roster_id), Some(1));
        assert!(find_user_roster(&rosters, "carol").is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = pair_matchup(1, &matchups(), 3).expect("roster 3 has an entry");
        let value = serde_json::to_value(&result).expect("serialize");
        assert_eq!(value["week"], json!(1));
        assert_eq!(value["userMatchup"]["roster_id"], json!(3));
        assert!(value["opponentMatchup"].is_null());
    }
}
