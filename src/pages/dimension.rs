//! Controller state for the seven dimension pages.
//!
//! Each page wraps a `GoalManager` with the interactive state the views
//! need: the cursor, the text buffer shared by the add and edit prompts,
//! an in-flight move gesture, and the short-lived highlight on a freshly
//! completed row.

use std::time::{Duration, Instant};

use crate::gamification::Gamification;
use crate::goals::{GoalManager, MoveSession};
use crate::models::{Dimension, Goal};
use crate::notify::NoticeQueue;
use crate::store::Store;

/// How long a freshly completed row keeps its highlight.
pub const REWARD_FLASH: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalMode {
    Browse,
    Adding,
    Editing,
    Moving,
}

pub struct DimensionPage {
    pub manager: GoalManager,
    pub mode: GoalMode,
    pub selection: usize,
    /// Text buffer for the add and edit prompts. The add prompt keeps its
    /// contents across a cancel, so a half-typed goal is not lost.
    pub input: String,
    pub editing_id: Option<String>,
    pub move_session: Option<MoveSession>,
    flash: Option<(String, Instant)>,
}

impl DimensionPage {
    pub fn new(dimension: Dimension) -> Self {
        Self {
            manager: GoalManager::new(dimension),
            mode: GoalMode::Browse,
            selection: 0,
            input: String::new(),
            editing_id: None,
            move_session: None,
            flash: None,
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.manager.dimension
    }

    /// Refresh from the store for a new visit. An in-flight move gesture is
    /// abandoned; an in-flight edit survives if its goal still exists.
    pub fn show(&mut self, store: &mut Store) {
        self.manager.show(store);

        if self.mode == GoalMode::Moving {
            self.move_session = None;
            self.mode = GoalMode::Browse;
        }
        if self.mode == GoalMode::Editing {
            let still_there = self
                .editing_id
                .as_ref()
                .is_some_and(|id| self.manager.goals.iter().any(|g| g.id == *id));
            if !still_there {
                self.editing_id = None;
                self.input.clear();
                self.mode = GoalMode::Browse;
            }
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let max = self.manager.goals.len().saturating_sub(1);
        self.selection = self.selection.min(max);
    }

    /// Goals in display order. While a move is in flight the transient
    /// gesture order wins; the stored list is untouched until the drop.
    pub fn display_goals(&self) -> Vec<&Goal> {
        match &self.move_session {
            Some(session) => session
                .order()
                .iter()
                .filter_map(|id| self.manager.goals.iter().find(|g| g.id == *id))
                .collect(),
            None => self.manager.goals.iter().collect(),
        }
    }

    pub fn selected_goal(&self) -> Option<&Goal> {
        self.display_goals().get(self.selection).copied()
    }

    pub fn select_next(&mut self) {
        let max = self.manager.goals.len().saturating_sub(1);
        self.selection = (self.selection + 1).min(max);
    }

    pub fn select_prev(&mut self) {
        self.selection = self.selection.saturating_sub(1);
    }

    // ===== Add =====

    pub fn begin_add(&mut self) {
        self.mode = GoalMode::Adding;
    }

    /// Commit the add prompt. Whitespace-only input is silently ignored and
    /// the prompt stays open with the buffer intact.
    pub fn commit_add(&mut self, store: &mut Store, notices: &mut NoticeQueue) {
        if self.manager.add(&self.input.clone(), store, notices) {
            self.input.clear();
            self.selection = 0;
            self.mode = GoalMode::Browse;
        }
    }

    /// Drop an AI suggestion into the add prompt for review.
    pub fn apply_suggestion(&mut self, text: String) {
        self.input = text;
        self.mode = GoalMode::Adding;
    }

    // ===== Edit =====

    pub fn begin_edit(&mut self) {
        if let Some((id, text)) = self
            .selected_goal()
            .map(|goal| (goal.id.clone(), goal.text.clone()))
        {
            self.editing_id = Some(id);
            self.input = text;
            self.mode = GoalMode::Editing;
        }
    }

    /// Commit the edit prompt. Empty text discards the edit without a write.
    pub fn commit_edit(&mut self, store: &mut Store, notices: &mut NoticeQueue) {
        if let Some(id) = self.editing_id.take() {
            self.manager.edit(&id, &self.input.clone(), store, notices);
        }
        self.input.clear();
        self.mode = GoalMode::Browse;
    }

    /// Leave the current prompt. The add buffer is kept; an edit buffer is
    /// discarded with the edit.
    pub fn cancel_input(&mut self) {
        if self.mode == GoalMode::Editing {
            self.editing_id = None;
            self.input.clear();
        }
        self.mode = GoalMode::Browse;
    }

    // ===== Toggle and delete =====

    pub fn toggle_selected(
        &mut self,
        today: &str,
        store: &mut Store,
        game: &mut Gamification,
        notices: &mut NoticeQueue,
    ) {
        let Some(id) = self.selected_goal().map(|g| g.id.clone()) else {
            return;
        };
        let rewarded = self.manager.toggle(&id, today, store, game, notices);
        if rewarded {
            self.flash = Some((id, Instant::now()));
        }
    }

    pub fn delete_selected(&mut self, store: &mut Store, notices: &mut NoticeQueue) {
        let Some(id) = self.selected_goal().map(|g| g.id.clone()) else {
            return;
        };
        self.manager.delete(&id, store, notices);
        self.clamp_selection();
    }

    // ===== Move =====

    pub fn begin_move(&mut self) {
        let Some(id) = self.selected_goal().map(|g| g.id.clone()) else {
            return;
        };
        if let Some(session) = MoveSession::grab(&self.manager.goals, &id) {
            self.selection = session.grabbed_index();
            self.move_session = Some(session);
            self.mode = GoalMode::Moving;
        }
    }

    pub fn move_up(&mut self) {
        if let Some(session) = &mut self.move_session {
            session.move_up();
            self.selection = session.grabbed_index();
        }
    }

    pub fn move_down(&mut self) {
        if let Some(session) = &mut self.move_session {
            session.move_down();
            self.selection = session.grabbed_index();
        }
    }

    /// Drop the grabbed row, committing the gesture order to the list.
    pub fn commit_move(&mut self, store: &mut Store, notices: &mut NoticeQueue) {
        if let Some(session) = self.move_session.take() {
            self.selection = session.grabbed_index();
            self.manager.reorder(&session.into_order(), store, notices);
        }
        self.mode = GoalMode::Browse;
    }

    /// Abandon the gesture; the list keeps its stored order.
    pub fn cancel_move(&mut self) {
        self.move_session = None;
        self.mode = GoalMode::Browse;
    }

    // ===== Reward flash =====

    pub fn is_flashing(&self, id: &str) -> bool {
        self.flash
            .as_ref()
            .is_some_and(|(flash_id, at)| flash_id == id && at.elapsed() < REWARD_FLASH)
    }

    /// Drop an expired flash. Called once per frame.
    pub fn tick(&mut self) {
        if let Some((_, at)) = &self.flash {
            if at.elapsed() >= REWARD_FLASH {
                self.flash = None;
            }
        }
    }

    #[cfg(test)]
    fn backdate_flash(&mut self, by: Duration) {
        if let Some((_, at)) = &mut self.flash {
            *at -= by;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "vitalog-dimension-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn temp_store(name: &str) -> Store {
        Store::new(temp_store_dir(name))
    }

    #[test]
    fn test_add_flow_clears_buffer() {
        let mut store = temp_store("add-flow");
        let mut notices = NoticeQueue::new();
        let mut page = DimensionPage::new(Dimension::Mental);
        page.show(&mut store);
        let seeded = page.manager.goals.len();

        page.begin_add();
        page.input.push_str("Read ten pages");
        page.commit_add(&mut store, &mut notices);

        assert_eq!(page.mode, GoalMode::Browse);
        assert!(page.input.is_empty());
        assert_eq!(page.manager.goals.len(), seeded + 1);
        assert_eq!(page.manager.goals[0].text, "Read ten pages");
        assert_eq!(page.selection, 0); // cursor lands on the new row
    }

    #[test]
    fn test_blank_add_keeps_prompt_and_writes_nothing() {
        let mut store = temp_store("blank-add");
        let mut notices = NoticeQueue::new();
        let mut page = DimensionPage::new(Dimension::Social);
        page.show(&mut store);

        page.begin_add();
        page.input.push_str("   ");
        page.commit_add(&mut store, &mut notices);

        assert_eq!(page.mode, GoalMode::Adding);
        assert_eq!(page.input, "   "); // buffer survives
        assert!(store.load_goals(Dimension::Social).is_none()); // nothing persisted
    }

    #[test]
    fn test_cancel_keeps_add_buffer_but_drops_edit_buffer() {
        let mut store = temp_store("cancel");
        let mut page = DimensionPage::new(Dimension::Family);
        page.show(&mut store);

        page.begin_add();
        page.input.push_str("half typed");
        page.cancel_input();
        assert_eq!(page.mode, GoalMode::Browse);
        assert_eq!(page.input, "half typed");

        page.input.clear();
        page.begin_edit();
        assert_eq!(page.mode, GoalMode::Editing);
        assert!(!page.input.is_empty());
        page.cancel_input();
        assert!(page.input.is_empty());
        assert_eq!(page.editing_id, None);
    }

    #[test]
    fn test_edit_survives_refresh_until_goal_disappears() {
        let mut store = temp_store("edit-refresh");
        let mut notices = NoticeQueue::new();
        let mut page = DimensionPage::new(Dimension::Spiritual);
        page.show(&mut store);
        page.manager.add("Evening walk", &mut store, &mut notices);

        page.selection = 0;
        page.begin_edit();
        let edited = page.editing_id.clone().unwrap();

        // A refresh with the goal still present keeps the edit open
        page.show(&mut store);
        assert_eq!(page.mode, GoalMode::Editing);
        assert_eq!(page.editing_id.as_deref(), Some(edited.as_str()));

        // Remove the goal behind the page's back; the next refresh drops out
        let remaining: Vec<Goal> = page
            .manager
            .goals
            .iter()
            .filter(|g| g.id != edited)
            .cloned()
            .collect();
        store.save_goals(Dimension::Spiritual, &remaining).unwrap();
        page.show(&mut store);
        assert_eq!(page.mode, GoalMode::Browse);
        assert_eq!(page.editing_id, None);
    }

    #[test]
    fn test_move_cancel_restores_stored_order() {
        let mut store = temp_store("move-cancel");
        let mut page = DimensionPage::new(Dimension::Financial);
        page.show(&mut store);
        let before: Vec<String> = page.manager.goals.iter().map(|g| g.id.clone()).collect();

        page.selection = 0;
        page.begin_move();
        page.move_down();
        page.move_down();

        // The gesture order differs from the list order until the drop
        let display: Vec<&str> = page.display_goals().iter().map(|g| g.id.as_str()).collect();
        assert_eq!(display[2], before[0]);

        page.cancel_move();
        let after: Vec<String> = page.manager.goals.iter().map(|g| g.id.clone()).collect();
        assert_eq!(after, before);
        assert!(store.load_goals(Dimension::Financial).is_none());
    }

    #[test]
    fn test_move_commit_persists_gesture_order() {
        let mut store = temp_store("move-commit");
        let mut notices = NoticeQueue::new();
        let mut page = DimensionPage::new(Dimension::Physical);
        page.show(&mut store);
        let first = page.manager.goals[0].id.clone();

        page.selection = 0;
        page.begin_move();
        page.move_down();
        page.commit_move(&mut store, &mut notices);

        assert_eq!(page.mode, GoalMode::Browse);
        assert_eq!(page.manager.goals[1].id, first);
        assert_eq!(page.selection, 1); // cursor follows the dropped row

        let saved = store.load_goals(Dimension::Physical).unwrap();
        assert_eq!(saved[1].id, first);
    }

    #[test]
    fn test_refresh_abandons_move_gesture() {
        let mut store = temp_store("move-refresh");
        let mut page = DimensionPage::new(Dimension::Mental);
        page.show(&mut store);
        let before: Vec<String> = page.manager.goals.iter().map(|g| g.id.clone()).collect();

        page.begin_move();
        page.move_down();
        page.show(&mut store);

        assert_eq!(page.mode, GoalMode::Browse);
        assert!(page.move_session.is_none());
        let after: Vec<String> = page.manager.goals.iter().map(|g| g.id.clone()).collect();
        assert_eq!(after, before);
    }

    #[test]
    fn test_toggle_flashes_only_on_completion() {
        let mut store = temp_store("flash");
        let mut notices = NoticeQueue::new();
        let mut game = Gamification::load(&mut store);
        let mut page = DimensionPage::new(Dimension::Social);
        page.show(&mut store);
        let id = page.manager.goals[0].id.clone();

        page.selection = 0;
        page.toggle_selected("2026-08-23", &mut store, &mut game, &mut notices);
        assert!(page.is_flashing(&id));

        // Flash expires
        page.backdate_flash(REWARD_FLASH + Duration::from_millis(50));
        assert!(!page.is_flashing(&id));
        page.tick();

        // Un-completing does not flash
        page.toggle_selected("2026-08-23", &mut store, &mut game, &mut notices);
        assert!(!page.is_flashing(&id));
    }

    #[test]
    fn test_suggestion_opens_add_prompt() {
        let mut page = DimensionPage::new(Dimension::Professional);
        page.apply_suggestion("Block one hour for deep work".to_string());
        assert_eq!(page.mode, GoalMode::Adding);
        assert_eq!(page.input, "Block one hour for deep work");
    }
}
