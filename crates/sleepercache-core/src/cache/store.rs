use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use tracing::debug;

/// A response body and the moment it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub data: Value,
    pub stored_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(data: Value, stored_at: DateTime<Utc>) -> Self {
        Self { data, stored_at }
    }

    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.stored_at
    }

    /// Fresh while strictly younger than `window`.
    pub fn is_fresh(&self, window: Duration, now: DateTime<Utc>) -> bool {
        self.age(now) < window
    }

    pub fn age_display(&self, now: DateTime<Utc>) -> String {
        let minutes = self.age(now).num_minutes();
        if minutes < 1 {
            // Also covers clock skew
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else {
            format!("{}h ago", minutes / 60)
        }
    }
}

/// In-memory response cache owned by a single client.
///
/// Entries are only ever superseded, never evicted. Staleness is decided at
/// read time against the freshness window.
#[derive(Debug)]
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    freshness_window: Duration,
}

impl ResponseCache {
    pub fn new(freshness_window: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            freshness_window,
        }
    }

    pub fn freshness_window(&self) -> Duration {
        self.freshness_window
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
        // A panic while holding the lock cannot leave a half-written entry
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the cached body for `key` if it is still fresh at `now`.
    pub fn get_fresh(&self, key: &str, now: DateTime<Utc>) -> Option<Value> {
        let entries = self.lock();
        match entries.get(key) {
            Some(entry) if entry.is_fresh(self.freshness_window, now) => {
                debug!(key = %key, "Cache hit");
                Some(entry.data.clone())
            }
            Some(_) => {
                debug!(key = %key, "Cache entry stale");
                None
            }
            None => {
                debug!(key = %key, "Cache miss");
                None
            }
        }
    }

    /// Store `data` under `key`, replacing any previous entry.
    pub fn insert(&self, key: &str, data: Value, now: DateTime<Utc>) {
        debug!(key = %key, "Caching response");
        self.lock().insert(key.to_string(), CacheEntry::new(data, now));
    }

    /// Snapshot of the entry for `key`, fresh or not.
    pub fn entry(&self, key: &str) -> Option<CacheEntry> {
        self.lock().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How long ago `key` was stored, for status displays.
    pub fn age_display(&self, key: &str) -> String {
        self.entry(key)
            .map(|entry| entry.age_display(Utc::now()))
            .unwrap_or_else(|| "never".to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn window() -> Duration {
        Duration::minutes(5)
    }

    #[test]
    fn test_entry_fresh_inside_window() {
        let now = Utc::now();
        let entry = CacheEntry::new(json!([1]), now - Duration::seconds(299));
        assert!(entry.is_fresh(window(), now));
    }

    #[test]
    fn test_entry_stale_at_window_boundary() {
        let now = Utc::now();
        let entry = CacheEntry::new(json!([1]), now - Duration::minutes(5));
        assert!(!entry.is_fresh(window(), now));
    }

    #[test]
    fn test_age_display() {
        let now = Utc::now();
        assert_eq!(CacheEntry::new(json!(null), now).age_display(now), "just now");
        assert_eq!(
            CacheEntry::new(json!(null), now + Duration::minutes(2)).age_display(now),
            "just now"
        );
        assert_eq!(
            CacheEntry::new(json!(null), now - Duration::minutes(4)).age_display(now),
            "4m ago"
        );
        assert_eq!(
            CacheEntry::new(json!(null), now - Duration::minutes(130)).age_display(now),
            "2h ago"
        );
    }

    #[test]
    fn test_get_fresh_returns_stored_data() {
        let cache = ResponseCache::new(window());
        let t0 = Utc::now();
        cache.insert("matchups-1", json!([{"roster_id": 1}]), t0);

        let hit = cache.get_fresh("matchups-1", t0 + Duration::minutes(4));
        assert_eq!(hit, Some(json!([{"roster_id": 1}])));
    }

    #[test]
    fn test_get_fresh_ignores_stale_but_keeps_entry() {
        let cache = ResponseCache::new(window());
        let t0 = Utc::now();
        cache.insert("league", json!({"name": "x"}), t0);

        assert_eq!(cache.get_fresh("league", t0 + Duration::minutes(6)), None);
        assert!(cache.contains_key("league"));
        assert_eq!(cache.entry("league").map(|e| e.stored_at), Some(t0));
    }

    #[test]
    fn test_keys_are_isolated() {
        let cache = ResponseCache::new(window());
        let now = Utc::now();
        cache.insert("matchups-1", json!("week one"), now);
        cache.insert("matchups-2", json!("week two"), now);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get_fresh("matchups-1", now), Some(json!("week one")));
        assert_eq!(cache.get_fresh("matchups-2", now), Some(json!("week two")));
    }

    #[test]
    fn test_insert_overwrites() {
        let cache = ResponseCache::new(window());
        let t0 = Utc::now();
        cache.insert("users", json!(1), t0);
        cache.insert("users", json!(2), t0 + Duration::minutes(10));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get_fresh("users", t0 + Duration::minutes(11)), Some(json!(2)));
    }

    #[test]
    fn test_age_display_missing_key() {
        let cache = ResponseCache::new(window());
        assert!(cache.is_empty());
        assert_eq!(cache.age_display("nothing"), "never");
    }
}
