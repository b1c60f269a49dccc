//! Ordered goal lists, one per life dimension.
//!
//! Every mutation persists best-effort: a failed write is logged and
//! surfaced as a notice, and the in-memory list keeps the change. Memory and
//! store may diverge until the next successful write.

use tracing::warn;

use crate::gamification::Gamification;
use crate::models::{Dimension, Goal};
use crate::notify::NoticeQueue;
use crate::store::Store;
use crate::utils::next_millis_id;

pub struct GoalManager {
    pub dimension: Dimension,
    pub goals: Vec<Goal>,
    /// Floor for generated ids, so two adds in the same millisecond still
    /// get distinct ids.
    last_id_millis: i64,
}

impl GoalManager {
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            goals: Vec::new(),
            last_id_millis: 0,
        }
    }

    /// Load the list from the store. An absent or empty list seeds the
    /// dimension's defaults; seeding itself does not persist, the seeds
    /// reach disk with the first real mutation.
    pub fn show(&mut self, store: &mut Store) {
        self.goals = match store.load_goals(self.dimension) {
            Some(goals) if !goals.is_empty() => goals,
            _ => self.dimension.default_goals(),
        };
    }

    fn next_id(&mut self) -> String {
        next_millis_id(&mut self.last_id_millis)
    }

    /// Prepend a new goal. Whitespace-only text is silently ignored: no
    /// record is created and nothing is written.
    pub fn add(&mut self, text: &str, store: &mut Store, notices: &mut NoticeQueue) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let id = self.next_id();
        self.goals.insert(0, Goal::new(id, text));
        self.save(store, notices);
        true
    }

    /// Flip a goal's completion. A false-to-true flip credits the
    /// dimension's daily achievement; the return value reports whether the
    /// row earned its reward flash.
    pub fn toggle(
        &mut self,
        id: &str,
        today: &str,
        store: &mut Store,
        game: &mut Gamification,
        notices: &mut NoticeQueue,
    ) -> bool {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) else {
            return false;
        };
        let was_completed = goal.completed;
        goal.completed = !was_completed;
        let rewarded = !was_completed;
        if rewarded {
            game.record_completion(self.dimension, today, store, notices);
        }
        self.save(store, notices);
        rewarded
    }

    /// Replace a goal's text. Empty text leaves the original unchanged and
    /// writes nothing.
    pub fn edit(&mut self, id: &str, text: &str, store: &mut Store, notices: &mut NoticeQueue) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) else {
            return false;
        };
        goal.text = text.to_string();
        self.save(store, notices);
        true
    }

    pub fn delete(&mut self, id: &str, store: &mut Store, notices: &mut NoticeQueue) {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        if self.goals.len() != before {
            self.save(store, notices);
        }
    }

    /// Re-sort the list to match the supplied id order and persist. Ids
    /// missing from `ids` sort to the front, like an index of -1.
    pub fn reorder(&mut self, ids: &[String], store: &mut Store, notices: &mut NoticeQueue) {
        self.goals.sort_by_key(|g| {
            ids.iter()
                .position(|id| *id == g.id)
                .map(|i| i as i64)
                .unwrap_or(-1)
        });
        self.save(store, notices);
    }

    fn save(&mut self, store: &mut Store, notices: &mut NoticeQueue) {
        if let Err(e) = store.save_goals(self.dimension, &self.goals) {
            warn!(dimension = self.dimension.slug(), error = %e, "Failed to save goals");
            notices.error("Could not save goals");
        }
    }
}

/// A reorder gesture in flight. Holds a transient id order while a grabbed
/// row moves; the list itself is untouched until the drop commits through
/// [`GoalManager::reorder`]. Cancelling simply drops the session.
pub struct MoveSession {
    pub grabbed: String,
    order: Vec<String>,
}

impl MoveSession {
    pub fn grab(goals: &[Goal], id: &str) -> Option<Self> {
        if !goals.iter().any(|g| g.id == id) {
            return None;
        }
        Some(Self {
            grabbed: id.to_string(),
            order: goals.iter().map(|g| g.id.clone()).collect(),
        })
    }

    fn position(&self) -> Option<usize> {
        self.order.iter().position(|id| *id == self.grabbed)
    }

    pub fn move_up(&mut self) {
        if let Some(i) = self.position() {
            if i > 0 {
                self.order.swap(i, i - 1);
            }
        }
    }

    pub fn move_down(&mut self) {
        if let Some(i) = self.position() {
            if i + 1 < self.order.len() {
                self.order.swap(i, i + 1);
            }
        }
    }

    /// Visual position of the grabbed row within the transient order.
    pub fn grabbed_index(&self) -> usize {
        self.position().unwrap_or(0)
    }

    /// The transient order, for rendering the gesture in progress.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// The order to commit on drop.
    pub fn into_order(self) -> Vec<String> {
        self.order
    }
}

// ============================================================================
// Tests
// ============================================================================
