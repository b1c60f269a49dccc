//! XP, levels, and the daily medal book.
//!
//! Completing a goal credits its dimension: the first completion per
//! dimension per day records a medal and grants the big bonus, repeats grant
//! the smaller per-goal credit. Level-ups and medals surface as notices.

use tracing::warn;

use crate::models::{Dimension, MedalLog, XpState, XP_DAILY_MEDAL, XP_GOAL_COMPLETED};
use crate::notify::NoticeQueue;
use crate::store::Store;

/// Gamification state, loaded once at startup and written back best-effort
/// on every mutation.
pub struct Gamification {
    pub xp: XpState,
    pub medals: MedalLog,
}

impl Gamification {
    pub fn load(store: &mut Store) -> Self {
        Self {
            xp: store.load_xp().unwrap_or_default(),
            medals: store.load_medals().unwrap_or_default(),
        }
    }

    /// Medals recorded for the given `YYYY-MM-DD` day key.
    pub fn medals_for(&self, day: &str) -> &[Dimension] {
        self.medals.get(day).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn has_medal(&self, day: &str, dimension: Dimension) -> bool {
        self.medals_for(day).contains(&dimension)
    }

    /// Add XP, persist, and surface any level-up.
    pub fn add_xp(&mut self, amount: u32, store: &mut Store, notices: &mut NoticeQueue) {
        let gained = self.xp.add(amount);
        if let Err(e) = store.save_xp(&self.xp) {
            warn!(error = %e, "Failed to save XP state");
            notices.error("Could not save progress");
        }
        if gained > 0 {
            notices.success(format!("Level up! You reached level {}", self.xp.level));
        }
    }

    /// Credit a completed goal in `dimension` on day `today`.
    ///
    /// Returns true when this was the day's first completion for the
    /// dimension, which records the medal. The XP credit lands either way.
    pub fn record_completion(
        &mut self,
        dimension: Dimension,
        today: &str,
        store: &mut Store,
        notices: &mut NoticeQueue,
    ) -> bool {
        let already = self
            .medals
            .get(today)
            .map(|list| list.contains(&dimension))
            .unwrap_or(false);

        if already {
            self.add_xp(XP_GOAL_COMPLETED, store, notices);
            return false;
        }

        self.medals
            .entry(today.to_string())
            .or_default()
            .push(dimension);
        if let Err(e) = store.save_medals(&self.medals) {
            warn!(error = %e, "Failed to save medals");
            notices.error("Could not save progress");
        }
        self.add_xp(XP_DAILY_MEDAL, store, notices);
        notices.success(format!(
            "{} medal earned today! +{} XP",
            dimension, XP_DAILY_MEDAL
        ));
        true
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Severity;

    fn temp_store_dir(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "vitalog-gamification-{}-{}",
            name,
            std::process::id()
        ))
    }

    fn temp_store(name: &str) -> Store {
        let dir = temp_store_dir(name);
        let _ = std::fs::remove_dir_all(&dir);
        Store::new(dir)
    }

    #[test]
    fn test_first_completion_earns_medal_and_bonus() {
        let mut store = temp_store("first");
        let mut notices = NoticeQueue::new();
        let mut game = Gamification::load(&mut store);

        let earned = game.record_completion(Dimension::Physical, "2026-08-23", &mut store, &mut notices);

        assert!(earned);
        assert!(game.has_medal("2026-08-23", Dimension::Physical));
        assert_eq!(game.xp.current_xp, XP_DAILY_MEDAL);
        assert_eq!(notices.current().unwrap().severity, Severity::Success);

        // Medal and XP both landed on disk
        let mut fresh = Store::new(temp_store_dir("first"));
        let reopened = Gamification::load(&mut fresh);
        assert!(reopened.has_medal("2026-08-23", Dimension::Physical));
        assert_eq!(reopened.xp.current_xp, XP_DAILY_MEDAL);
    }

    #[test]
    fn test_repeat_completion_credits_without_second_medal() {
        let mut store = temp_store("repeat");
        let mut notices = NoticeQueue::new();
        let mut game = Gamification::load(&mut store);

        assert!(game.record_completion(Dimension::Mental, "2026-08-23", &mut store, &mut notices));
        assert!(!game.record_completion(Dimension::Mental, "2026-08-23", &mut store, &mut notices));

        assert_eq!(game.medals_for("2026-08-23"), &[Dimension::Mental]);
        assert_eq!(game.xp.current_xp, XP_DAILY_MEDAL + XP_GOAL_COMPLETED);
    }

    #[test]
    fn test_medals_reset_across_days() {
        let mut store = temp_store("days");
        let mut notices = NoticeQueue::new();
        let mut game = Gamification::load(&mut store);

        assert!(game.record_completion(Dimension::Social, "2026-08-22", &mut store, &mut notices));
        assert!(game.record_completion(Dimension::Social, "2026-08-23", &mut store, &mut notices));
        assert_eq!(game.medals_for("2026-08-22"), &[Dimension::Social]);
        assert_eq!(game.medals_for("2026-08-23"), &[Dimension::Social]);
    }

    #[test]
    fn test_level_up_surfaces_notice() {
        let mut store = temp_store("level");
        let mut notices = NoticeQueue::new();
        let mut game = Gamification::load(&mut store);

        game.add_xp(200, &mut store, &mut notices);

        assert_eq!(game.xp.level, 2);
        assert_eq!(game.xp.xp_to_next_level, 300);
        let notice = notices.current().unwrap();
        assert_eq!(notice.severity, Severity::Success);
        assert!(notice.text.contains("level 2"));
    }

    #[test]
    fn test_write_failure_keeps_memory_and_reports() {
        let blocker = std::env::temp_dir().join(format!(
            "vitalog-gamification-blocker-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&blocker);
        std::fs::write(&blocker, "plain file").unwrap();

        let mut store = Store::new(blocker.join("store"));
        let mut notices = NoticeQueue::new();
        let mut game = Gamification::load(&mut store);

        let earned = game.record_completion(Dimension::Family, "2026-08-23", &mut store, &mut notices);

        // The mutation stands even though nothing was written
        assert!(earned);
        assert!(game.has_medal("2026-08-23", Dimension::Family));
        assert!(notices
            .iter()
            .any(|n| n.text.contains("Could not save progress")));
    }
}
