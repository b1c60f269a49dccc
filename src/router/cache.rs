//! TTL-bounded cache for page template bodies.

use std::collections::HashMap;

use chrono::Utc;

/// How long a cached template body stays valid.
/// Five minutes keeps an editing round trip on disk visible without
/// re-reading templates on every navigation.
const CACHE_TTL_MS: i64 = 5 * 60 * 1000;

/// Maximum number of cached template bodies.
const MAX_CACHE_SIZE: usize = 15;

struct CacheEntry {
    body: String,
    /// Insertion time, epoch milliseconds.
    stamp: i64,
}

/// Keyed by page slug. Eviction is by insertion time, not access time:
/// when full, the entry written longest ago goes first, even if it was
/// read a moment earlier.
#[derive(Default)]
pub struct PageCache {
    entries: HashMap<String, CacheEntry>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A present, unexpired body. Stale entries are deleted on read.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let expired = match self.entries.get(key) {
            None => return None,
            Some(entry) => Utc::now().timestamp_millis() - entry.stamp > CACHE_TTL_MS,
        };
        if expired {
            self.entries.remove(key);
            return None;
        }
        self.entries.get(key).map(|e| e.body.clone())
    }

    pub fn set(&mut self, key: &str, body: String) {
        if self.entries.len() >= MAX_CACHE_SIZE {
            self.evict_oldest();
        }
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                body,
                stamp: Utc::now().timestamp_millis(),
            },
        );
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.stamp)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shift an entry's insertion stamp into the past.
    #[cfg(test)]
    pub(crate) fn backdate(&mut self, key: &str, ms: i64) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.stamp -= ms;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_what_was_set() {
        let mut cache = PageCache::new();
        assert_eq!(cache.get("home"), None);

        cache.set("home", "# Home\n".to_string());
        assert_eq!(cache.get("home"), Some("# Home\n".to_string()));
    }

    #[test]
    fn test_stale_entry_misses_and_is_purged() {
        let mut cache = PageCache::new();
        cache.set("home", "# Home\n".to_string());
        cache.backdate("home", CACHE_TTL_MS + 1);

        assert_eq!(cache.get("home"), None);
        assert!(cache.is_empty()); // Deleted on read
    }

    #[test]
    fn test_entry_just_inside_ttl_still_hits() {
        let mut cache = PageCache::new();
        cache.set("home", "# Home\n".to_string());
        cache.backdate("home", CACHE_TTL_MS - 1000);
        assert!(cache.get("home").is_some());
    }

    #[test]
    fn test_size_never_exceeds_bound() {
        let mut cache = PageCache::new();
        for i in 0..MAX_CACHE_SIZE + 5 {
            cache.set(&format!("page-{:02}", i), "body".to_string());
            // Distinct stamps so eviction order is well defined
            cache.backdate(&format!("page-{:02}", i), (MAX_CACHE_SIZE + 5 - i) as i64);
            assert!(cache.len() <= MAX_CACHE_SIZE);
        }
        assert_eq!(cache.len(), MAX_CACHE_SIZE);
    }

    #[test]
    fn test_eviction_removes_oldest_insertion_not_recent_read() {
        let mut cache = PageCache::new();
        for i in 0..MAX_CACHE_SIZE {
            let key = format!("page-{:02}", i);
            cache.set(&key, "body".to_string());
            cache.backdate(&key, (MAX_CACHE_SIZE - i) as i64 * 1000);
        }

        // Reading the oldest entry does not protect it
        assert!(cache.get("page-00").is_some());

        cache.set("fresh-a", "body".to_string());
        assert_eq!(cache.get("page-00"), None); // Oldest stamp went first
        assert!(cache.get("page-01").is_some());

        cache.set("fresh-b", "body".to_string());
        assert_eq!(cache.get("page-01"), None); // Next oldest follows
        assert!(cache.get("page-02").is_some());
        assert_eq!(cache.len(), MAX_CACHE_SIZE);
    }
}
