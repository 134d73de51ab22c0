//! Client configuration.
//!
//! The league and API endpoint are fixed constants; `ClientConfig` exists so
//! a host (or a test against a mock server) can override them explicitly.
//! Nothing is read from the environment or from disk.

use serde::{Deserialize, Serialize};

/// Base URL for the Sleeper v1 API
pub const DEFAULT_BASE_URL: &str = "https://api.sleeper.app/v1";

/// The dynasty league this client serves
pub const DEFAULT_LEAGUE_ID: &str = "1194798912048705536";

/// Responses are reused for 5 minutes before the next call refetches them.
pub const DEFAULT_FRESHNESS_SECS: u64 = 5 * 60;

/// HTTP request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub league_id: String,
    pub freshness_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            league_id: DEFAULT_LEAGUE_ID.to_string(),
            freshness_secs: DEFAULT_FRESHNESS_SECS,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_league_id(mut self, league_id: impl Into<String>) -> Self {
        self.league_id = league_id.into();
        self
    }

    pub fn with_freshness_secs(mut self, secs: u64) -> Self {
        self.freshness_secs = secs;
        self
    }

    /// Freshness window, saturating at `Duration::MAX` for huge values.
    pub fn freshness_window(&self) -> chrono::Duration {
        i64::try_from(self.freshness_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }

    /// Base URL with any trailing slash removed.
    pub fn api_base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base(), "https://api.sleeper.app/v1");
        assert_eq!(config.league_id, DEFAULT_LEAGUE_ID);
        assert_eq!(config.freshness_window(), chrono::Duration::minutes(5));
        assert_eq!(config.request_timeout(), std::time::Duration::from_secs(30));
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:8080/")
            .with_league_id("42")
            .with_freshness_secs(0);
        assert_eq!(config.api_base(), "http://127.0.0.1:8080");
        assert_eq!(config.league_id, "42");
        assert_eq!(config.freshness_window(), chrono::Duration::zero());
    }

    #[test]
    fn test_huge_freshness_saturates() {
        let config = ClientConfig::default().with_freshness_secs(u64::MAX);
        assert_eq!(config.freshness_window(), chrono::Duration::MAX);

        let config: ClientConfig =
            serde_json::from_str(r#"{"freshness_secs": 100000000000000000}"#)
                .expect("Failed to parse config");
        assert_eq!(config.freshness_window(), chrono::Duration::MAX);

        let client = crate::SleeperClient::with_config(config).expect("Failed to build client");
        assert_eq!(client.cache().freshness_window(), chrono::Duration::MAX);
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"league_id": "7"}"#)
            .expect("Failed to parse partial config");
        assert_eq!(config.league_id, "7");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.freshness_secs, DEFAULT_FRESHNESS_SECS);
    }
}
