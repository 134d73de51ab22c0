//! Derived views computed from raw API resources.
//!
//! Views are never cached themselves. Every call goes back through the
//! client's accessors (which may hit the response cache) and recomputes:
//!
//! - `standings`: rosters joined with owners and ranked
//! - `matchup`: current week, the user's roster and this week's opponent
//! - `activity`: the recent transaction feed
//!
//! Independent fetches within a view run concurrently; the first failure
//! fails the whole view.

pub mod activity;
pub mod matchup;
pub mod standings;

pub use activity::{recent_activity, DEFAULT_ACTIVITY_LIMIT};
pub use matchup::{find_user_roster, pair_matchup, UpcomingMatchup};
pub use standings::{build_standings, StandingsRow};
