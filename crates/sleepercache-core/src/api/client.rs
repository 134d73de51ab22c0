//! API client for the Sleeper read-only REST API.
//!
//! This module provides the `SleeperClient` struct, a cache-backed fetcher
//! plus one accessor per remote resource.

use std::sync::Arc;

use chrono::Utc;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::config::ClientConfig;
use crate::models::{
    Draft, DraftPick, League, Matchup, Player, PlayerDirectory, Roster, TradedPick, Transaction,
    User,
};

use super::FetchError;

/// Cache key for one week of matchups. Matchups and transactions share a
/// URL shape, so parameterized resources get explicit keys.
pub fn matchups_key(week: u32) -> String {
    format!("matchups-{}", week)
}

/// Cache key for one round of transactions
pub fn transactions_key(round: u32) -> String {
    format!("transactions-{}", round)
}

/// Sleeper API client with its own response cache.
/// Clone is cheap and clones share both the connection pool and the cache.
#[derive(Clone)]
pub struct SleeperClient {
    client: Client,
    config: Arc<ClientConfig>,
    cache: Arc<ResponseCache>,
}

impl SleeperClient {
    /// Create a client for the default league
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(config.request_timeout()).build()?;
        let cache = ResponseCache::new(config.freshness_window());

        Ok(Self {
            client,
            config: Arc::new(config),
            cache: Arc::new(cache),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn league_id(&self) -> &str {
        &self.config.league_id
    }

    /// The response cache, for diagnostics.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    fn league_url(&self, path: &str) -> String {
        format!(
            "{}/league/{}{}",
            self.config.api_base(),
            self.config.league_id,
            path
        )
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base(), path)
    }

    // ===== Cached Fetching =====

    /// Fetch `url` as JSON, serving from the cache while the stored response
    /// is fresh. The cache key is `cache_key` when given, otherwise the URL.
    ///
    /// A failed request leaves any existing entry untouched and is returned
    /// to the caller as-is; stale data is never served in its place.
    pub async fn fetch_json(&self, url: &str, cache_key: Option<&str>) -> Result<Value, FetchError> {
        let key = cache_key.unwrap_or(url);

        if let Some(data) = self.cache.get_fresh(key, Utc::now()) {
            return Ok(data);
        }

        match self.get(url).await {
            Ok(data) => {
                self.cache.insert(key, data.clone(), Utc::now());
                Ok(data)
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Error fetching");
                Err(e)
            }
        }
    }

    async fn get(&self, url: &str) -> Result<Value, FetchError> {
        debug!(url = %url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::from_status(url, status, &body));
        }

        let text = response.text().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| FetchError::InvalidBody {
            url: url.to_string(),
            source,
        })
    }

    async fn fetch_as<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        url: &str,
        cache_key: Option<&str>,
    ) -> Result<T, FetchError> {
        let data = self.fetch_json(url, cache_key).await?;
        decode(resource, url, data)
    }

    // ===== Resource Accessors =====

    /// Fetch league information and settings
    pub async fn get_league(&self) -> Result<League, FetchError> {
        self.fetch_as("league", &self.league_url(""), None).await
    }

    /// Fetch the users (team owners) in the league
    pub async fn get_users(&self) -> Result<Vec<User>, FetchError> {
        self.fetch_as("users", &self.league_url("/users"), None).await
    }

    pub async fn get_rosters(&self) -> Result<Vec<Roster>, FetchError> {
        self.fetch_as("rosters", &self.league_url("/rosters"), None).await
    }

    /// Fetch every roster's matchup entry for a week
    pub async fn get_matchups(&self, week: u32) -> Result<Vec<Matchup>, FetchError> {
        let url = self.league_url(&format!("/matchups/{}", week));
        let key = matchups_key(week);
        self.fetch_as("matchups", &url, Some(key.as_str())).await
    }

    /// Fetch transactions for a round (a round is a week of the season)
    pub async fn get_transactions(&self, round: u32) -> Result<Vec<Transaction>, FetchError> {
        let url = self.league_url(&format!("/transactions/{}", round));
        let key = transactions_key(round);
        self.fetch_as("transactions", &url, Some(key.as_str())).await
    }

    pub async fn get_traded_picks(&self) -> Result<Vec<TradedPick>, FetchError> {
        self.fetch_as("traded picks", &self.league_url("/traded_picks"), None)
            .await
    }

    pub async fn get_drafts(&self) -> Result<Vec<Draft>, FetchError> {
        self.fetch_as("drafts", &self.league_url("/drafts"), None).await
    }

    pub async fn get_draft_picks(&self, draft_id: &str) -> Result<Vec<DraftPick>, FetchError> {
        let url = self.api_url(&format!("/draft/{}/picks", draft_id));
        self.fetch_as("draft picks", &url, None).await
    }

    /// Fetch the full NFL player directory. This is a large payload; the
    /// cache keeps repeat lookups from refetching it.
    pub async fn get_players(&self) -> Result<PlayerDirectory, FetchError> {
        self.fetch_as("players", &self.api_url("/players/nfl"), None)
            .await
    }

    /// Look up a single player in the directory. Unknown ids yield `None`.
    pub async fn get_player(&self, player_id: &str) -> Result<Option<Player>, FetchError> {
        let mut players = self.get_players().await?;
        Ok(players.remove(player_id))
    }
}

fn decode<T: DeserializeOwned>(
    resource: &'static str,
    url: &str,
    data: Value,
) -> Result<T, FetchError> {
    serde_json::from_value(data).map_err(|source| {
        warn!(url = %url, resource = resource, error = %source, "Unexpected response shape");
        FetchError::Decode {
            url: url.to_string(),
            resource,
            source,
        }
    })
}
