//! JSON key-value persistence for everything the application tracks.
//!
//! Each key lives in its own file under `<data_root>/store/<key>.json`. Reads
//! go through a bounded in-memory cache so hot keys (goal lists, today's
//! plan) are not re-read and re-parsed on every page visit.

use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::models::{Asset, DailyPlan, Dimension, Goal, IndicatorEntry, MedalLog, Profile, Reflection, XpState};

/// Bound on the in-memory read cache. When full, the entry with the oldest
/// (re)insertion is evicted; reads do not refresh recency.
const READ_CACHE_SIZE: usize = 50;

/// Bounded map preserving (re)insertion order so the oldest entry can be
/// dropped once the bound is hit.
struct ReadCache {
    values: HashMap<String, Value>,
    order: VecDeque<String>,
}

impl ReadCache {
    fn new() -> Self {
        Self {
            values: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Insert or refresh a key at the most-recent end, evicting the entry at
    /// the least-recent end if the bound is hit.
    fn insert(&mut self, key: &str, value: Value) {
        if self.values.remove(key).is_some() {
            self.order.retain(|k| k != key);
        }
        if self.values.len() >= READ_CACHE_SIZE {
            if let Some(oldest) = self.order.pop_front() {
                self.values.remove(&oldest);
            }
        }
        self.order.push_back(key.to_string());
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.order.retain(|k| k != key);
        }
    }
}

pub struct Store {
    store_dir: PathBuf,
    cache: ReadCache,
}

impl Store {
    /// The directory is created lazily on first write, so a store can be
    /// constructed against a read-only location until something is saved.
    pub fn new(store_dir: PathBuf) -> Self {
        Self {
            store_dir,
            cache: ReadCache::new(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.store_dir.join(format!("{}.json", key))
    }

    /// Load and deserialize a key. A missing key reads as `None`; unreadable
    /// or malformed files also read as `None` with a logged warning.
    pub fn load<T: DeserializeOwned>(&mut self, key: &str) -> Option<T> {
        if let Some(value) = self.cache.get(key) {
            return match serde_json::from_value(value.clone()) {
                Ok(data) => Some(data),
                Err(e) => {
                    warn!(key, error = %e, "Cached store value has unexpected shape");
                    None
                }
            };
        }

        let path = self.key_path(key);
        if !path.exists() {
            return None;
        }
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(key, error = %e, "Failed to read store file");
                return None;
            }
        };
        let value: Value = match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Failed to parse store file");
                return None;
            }
        };
        match serde_json::from_value(value.clone()) {
            Ok(data) => {
                self.cache.insert(key, value);
                Some(data)
            }
            Err(e) => {
                warn!(key, error = %e, "Store value has unexpected shape");
                None
            }
        }
    }

    /// Serialize and write a key. The read cache is refreshed only after the
    /// write lands, so a failed save leaves the cache untouched.
    pub fn save<T: Serialize>(&mut self, key: &str, data: &T) -> Result<()> {
        let value = serde_json::to_value(data)
            .with_context(|| format!("Failed to serialize store value: {}", key))?;
        std::fs::create_dir_all(&self.store_dir).with_context(|| {
            format!("Failed to create store directory: {}", self.store_dir.display())
        })?;
        let contents = serde_json::to_string_pretty(&value)?;
        std::fs::write(self.key_path(key), contents)
            .with_context(|| format!("Failed to write store file: {}", key))?;
        self.cache.insert(key, value);
        Ok(())
    }

    /// Delete a key from disk and cache. A key that was never saved is fine.
    pub fn remove(&mut self, key: &str) {
        self.cache.remove(key);
        let path = self.key_path(key);
        if path.exists() {
            if let Err(e) = std::fs::remove_file(&path) {
                warn!(key, error = %e, "Failed to remove store file");
            }
        }
    }

    /// Parse every key file into one JSON object keyed by file stem, sorted
    /// by key. Backs the `--export` flag.
    pub fn export(&self) -> Result<Value> {
        let mut dump = serde_json::Map::new();
        let entries = match std::fs::read_dir(&self.store_dir) {
            Ok(entries) => entries,
            // Nothing stored yet
            Err(_) => return Ok(Value::Object(dump)),
        };

        let mut keys: Vec<(String, PathBuf)> = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push((stem.to_string(), path.clone()));
            }
        }
        keys.sort();

        for (key, path) in keys {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read store file: {}", key))?;
            let value: Value = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse store file: {}", key))?;
            dump.insert(key, value);
        }
        Ok(Value::Object(dump))
    }

    // ===== Goals =====

    pub fn load_goals(&mut self, dimension: Dimension) -> Option<Vec<Goal>> {
        self.load(&format!("goals_{}", dimension.slug()))
    }

    pub fn save_goals(&mut self, dimension: Dimension, goals: &[Goal]) -> Result<()> {
        self.save(&format!("goals_{}", dimension.slug()), &goals)
    }

    // ===== Daily plans =====

    pub fn load_plan(&mut self, date: NaiveDate) -> Option<DailyPlan> {
        self.load(&format!("plan_{}", date.format("%Y-%m-%d")))
    }

    pub fn save_plan(&mut self, date: NaiveDate, plan: &DailyPlan) -> Result<()> {
        self.save(&format!("plan_{}", date.format("%Y-%m-%d")), plan)
    }

    pub fn load_last_plan_date(&mut self) -> Option<NaiveDate> {
        self.load("plan_last_date")
    }

    pub fn save_last_plan_date(&mut self, date: NaiveDate) -> Result<()> {
        self.save("plan_last_date", &date)
    }

    // ===== Reflections =====

    pub fn load_reflections(&mut self) -> Option<Vec<Reflection>> {
        self.load("reflections")
    }

    pub fn save_reflections(&mut self, reflections: &[Reflection]) -> Result<()> {
        self.save("reflections", &reflections)
    }

    // ===== Gamification =====

    pub fn load_xp(&mut self) -> Option<XpState> {
        self.load("xp_state")
    }

    pub fn save_xp(&mut self, xp: &XpState) -> Result<()> {
        self.save("xp_state", xp)
    }

    pub fn load_medals(&mut self) -> Option<MedalLog> {
        self.load("daily_medals")
    }

    pub fn save_medals(&mut self, medals: &MedalLog) -> Result<()> {
        self.save("daily_medals", medals)
    }

    // ===== Preventive health =====

    pub fn load_profile(&mut self) -> Option<Profile> {
        self.load("profile")
    }

    pub fn save_profile(&mut self, profile: &Profile) -> Result<()> {
        self.save("profile", profile)
    }

    pub fn load_vaccine_dates(&mut self) -> Option<HashMap<String, NaiveDate>> {
        self.load("vaccine_dates")
    }

    pub fn save_vaccine_dates(&mut self, dates: &HashMap<String, NaiveDate>) -> Result<()> {
        self.save("vaccine_dates", dates)
    }

    pub fn load_indicator_history(&mut self, indicator_id: &str) -> Option<Vec<IndicatorEntry>> {
        self.load(&format!("indicator_{}", indicator_id))
    }

    pub fn save_indicator_history(
        &mut self,
        indicator_id: &str,
        entries: &[IndicatorEntry],
    ) -> Result<()> {
        self.save(&format!("indicator_{}", indicator_id), &entries)
    }

    // ===== Assets =====

    pub fn load_assets(&mut self) -> Option<Vec<Asset>> {
        self.load("assets")
    }

    pub fn save_assets(&mut self, assets: &[Asset]) -> Result<()> {
        self.save("assets", &assets)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh store rooted under the system temp dir, unique per test.
    fn temp_store(name: &str) -> Store {
        let dir = std::env::temp_dir().join(format!(
            "vitalog-store-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        Store::new(dir)
    }

    fn sample_goals() -> Vec<Goal> {
        vec![
            Goal::new("a", "First"),
            Goal::new("b", "Second"),
            Goal::new("c", "Third"),
        ]
    }

    #[test]
    fn test_load_missing_key_is_none() {
        let mut store = temp_store("missing");
        assert_eq!(store.load::<Vec<Goal>>("nothing_here"), None);
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let mut store = temp_store("round-trip");
        let goals = sample_goals();
        store.save_goals(Dimension::Physical, &goals).unwrap();

        // Re-open from disk so the read cache cannot answer
        let mut reopened = Store::new(store.store_dir.clone());
        let back = reopened.load_goals(Dimension::Physical).unwrap();
        assert_eq!(back, goals);
    }

    #[test]
    fn test_read_cache_serves_hits_without_disk() {
        let mut store = temp_store("cache-hit");
        store.save("greeting", &"hello".to_string()).unwrap();

        // Remove the backing file; the cached value must still answer
        std::fs::remove_file(store.key_path("greeting")).unwrap();
        assert_eq!(store.load::<String>("greeting"), Some("hello".to_string()));
    }

    #[test]
    fn test_read_cache_evicts_oldest_insertion() {
        let mut store = temp_store("cache-evict");
        for i in 0..READ_CACHE_SIZE {
            store.save(&format!("k{:02}", i), &i).unwrap();
        }

        // Refresh k00, then push one past the bound: k01 is now the oldest
        store.save("k00", &999usize).unwrap();
        store.save("extra", &0usize).unwrap();

        // Strip the backing files so only cached entries can answer
        std::fs::remove_dir_all(&store.store_dir).unwrap();
        assert_eq!(store.load::<usize>("k00"), Some(999));
        assert_eq!(store.load::<usize>("k01"), None); // Evicted
        assert_eq!(store.load::<usize>("extra"), Some(0));
    }

    #[test]
    fn test_malformed_file_reads_as_none() {
        let mut store = temp_store("malformed");
        std::fs::create_dir_all(&store.store_dir).unwrap();
        std::fs::write(store.key_path("broken"), "{not json").unwrap();
        assert_eq!(store.load::<Vec<Goal>>("broken"), None);
    }

    #[test]
    fn test_save_fails_under_unwritable_root() {
        let blocker = std::env::temp_dir().join(format!(
            "vitalog-store-blocker-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&blocker);
        std::fs::write(&blocker, "plain file").unwrap();

        // Rooting the store below a regular file makes directory creation fail
        let mut store = Store::new(blocker.join("store"));
        assert!(store.save("anything", &1).is_err());
        assert_eq!(store.load::<i32>("anything"), None);
    }

    #[test]
    fn test_remove_clears_file_and_cache() {
        let mut store = temp_store("remove");
        store.save("ephemeral", &vec![1, 2, 3]).unwrap();
        store.remove("ephemeral");
        assert!(!store.key_path("ephemeral").exists());
        assert_eq!(store.load::<Vec<i32>>("ephemeral"), None);
    }

    #[test]
    fn test_plans_are_isolated_per_date() {
        let mut store = temp_store("plans");
        let d1 = NaiveDate::from_ymd_opt(2026, 8, 22).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();

        let mut short = DailyPlan::template();
        short.tasks.truncate(3);
        let full = DailyPlan::template();

        store.save_plan(d1, &short).unwrap();
        store.save_plan(d2, &full).unwrap();

        assert_eq!(store.load_plan(d1).unwrap().tasks.len(), 3);
        assert_eq!(store.load_plan(d2).unwrap().tasks.len(), full.tasks.len());
    }

    #[test]
    fn test_export_collects_all_keys() {
        let mut store = temp_store("export");
        store.save_xp(&XpState::default()).unwrap();
        store.save_goals(Dimension::Social, &sample_goals()).unwrap();

        let dump = store.export().unwrap();
        let obj = dump.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("xp_state"));
        assert!(obj.contains_key("goals_social"));
    }
}
