//! Reflections journal controller.
//!
//! Entries are stored in creation order; the list view applies the
//! active search, category, and date-range filters and then sorts. The
//! AI insights feature reads whatever the filters currently show, so
//! the user can scope an analysis to one category or week.

use chrono::Utc;
use tracing::warn;

use crate::models::{Dimension, Reflection};
use crate::notify::NoticeQueue;
use crate::store::Store;
use crate::utils::{next_millis_id, today_key};

const WEEK_MILLIS: i64 = 7 * 24 * 60 * 60 * 1000;
const MONTH_MILLIS: i64 = 30 * 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReflectMode {
    Browse,
    Form,
    /// Typing into the search filter.
    Search,
    /// Holds the id of the entry awaiting delete confirmation.
    ConfirmDelete(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    All,
    Today,
    Week,
    Month,
}

impl DateRange {
    pub fn next(self) -> Self {
        match self {
            DateRange::All => DateRange::Today,
            DateRange::Today => DateRange::Week,
            DateRange::Week => DateRange::Month,
            DateRange::Month => DateRange::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::All => "All time",
            DateRange::Today => "Today",
            DateRange::Week => "Past week",
            DateRange::Month => "Past month",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Recent,
    Oldest,
    Category,
}

impl SortOrder {
    pub fn next(self) -> Self {
        match self {
            SortOrder::Recent => SortOrder::Oldest,
            SortOrder::Oldest => SortOrder::Category,
            SortOrder::Category => SortOrder::Recent,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Recent => "Newest first",
            SortOrder::Oldest => "Oldest first",
            SortOrder::Category => "By category",
        }
    }
}

#[derive(Debug, Default)]
pub struct ReflectionFilters {
    pub search: String,
    pub category: Option<Dimension>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectField {
    Category,
    Title,
    Text,
}

impl ReflectField {
    pub fn next(self) -> Self {
        match self {
            ReflectField::Category => ReflectField::Title,
            ReflectField::Title => ReflectField::Text,
            ReflectField::Text => ReflectField::Category,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ReflectField::Category => ReflectField::Text,
            ReflectField::Title => ReflectField::Category,
            ReflectField::Text => ReflectField::Title,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReflectionForm {
    pub editing_id: Option<String>,
    pub category: Dimension,
    pub title: String,
    pub text: String,
    pub field: ReflectField,
}

impl Default for ReflectionForm {
    fn default() -> Self {
        Self {
            editing_id: None,
            category: Dimension::Mental,
            title: String::new(),
            text: String::new(),
            field: ReflectField::Title,
        }
    }
}

pub struct ReflectionsPage {
    pub reflections: Vec<Reflection>,
    /// Cursor into the filtered view.
    pub selection: usize,
    pub mode: ReflectMode,
    pub form: ReflectionForm,
    pub filters: ReflectionFilters,
    pub range: DateRange,
    pub sort: SortOrder,
    /// Last AI analysis of the filtered entries, shown in an overlay.
    pub insights: Option<String>,
    pub insights_scroll: u16,
    pub awaiting_insights: bool,
    last_id_millis: i64,
}

impl ReflectionsPage {
    pub fn new() -> Self {
        Self {
            reflections: Vec::new(),
            selection: 0,
            mode: ReflectMode::Browse,
            form: ReflectionForm::default(),
            filters: ReflectionFilters::default(),
            range: DateRange::All,
            sort: SortOrder::Recent,
            insights: None,
            insights_scroll: 0,
            awaiting_insights: false,
            last_id_millis: 0,
        }
    }

    pub fn show(&mut self, store: &mut Store) {
        self.reflections = store.load_reflections().unwrap_or_default();
        self.mode = ReflectMode::Browse;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let max = self.filtered().len().saturating_sub(1);
        self.selection = self.selection.min(max);
    }

    /// Entries passing the active filters, in the active sort order.
    pub fn filtered(&self) -> Vec<&Reflection> {
        let needle = self.filters.search.trim().to_lowercase();
        let today = today_key();
        let now = Utc::now().timestamp_millis();

        let mut view: Vec<&Reflection> = self
            .reflections
            .iter()
            .filter(|r| {
                if !needle.is_empty()
                    && !r.title.to_lowercase().contains(&needle)
                    && !r.text.to_lowercase().contains(&needle)
                {
                    return false;
                }
                if let Some(category) = self.filters.category {
                    if r.category != category {
                        return false;
                    }
                }
                match self.range {
                    DateRange::All => true,
                    DateRange::Today => r.date == today,
                    DateRange::Week => now - r.timestamp < WEEK_MILLIS,
                    DateRange::Month => now - r.timestamp < MONTH_MILLIS,
                }
            })
            .collect();

        match self.sort {
            SortOrder::Recent => view.sort_by_key(|r| std::cmp::Reverse(r.timestamp)),
            SortOrder::Oldest => view.sort_by_key(|r| r.timestamp),
            SortOrder::Category => {
                view.sort_by(|a, b| {
                    a.category
                        .slug()
                        .cmp(b.category.slug())
                        .then(b.timestamp.cmp(&a.timestamp))
                });
            }
        }
        view
    }

    pub fn selected(&self) -> Option<&Reflection> {
        self.filtered().get(self.selection).copied()
    }

    pub fn select_next(&mut self) {
        let max = self.filtered().len().saturating_sub(1);
        self.selection = (self.selection + 1).min(max);
    }

    pub fn select_prev(&mut self) {
        self.selection = self.selection.saturating_sub(1);
    }

    // ===== Filters =====

    pub fn begin_search(&mut self) {
        self.mode = ReflectMode::Search;
    }

    pub fn end_search(&mut self) {
        self.mode = ReflectMode::Browse;
        self.clamp_selection();
    }

    pub fn clear_search(&mut self) {
        self.filters.search.clear();
        self.clamp_selection();
    }

    /// Cycle the category filter through every dimension and back to "all".
    pub fn cycle_category_filter(&mut self) {
        self.filters.category = match self.filters.category {
            None => Some(Dimension::all()[0]),
            Some(current) => {
                let all = Dimension::all();
                let pos = all.iter().position(|d| *d == current).unwrap_or(0);
                all.get(pos + 1).copied()
            }
        };
        self.clamp_selection();
    }

    pub fn cycle_range(&mut self) {
        self.range = self.range.next();
        self.clamp_selection();
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
    }

    // ===== Form =====

    pub fn begin_add(&mut self) {
        self.form = ReflectionForm::default();
        self.mode = ReflectMode::Form;
    }

    pub fn begin_edit(&mut self) {
        let Some(entry) = self.selected() else {
            return;
        };
        self.form = ReflectionForm {
            editing_id: Some(entry.id.clone()),
            category: entry.category,
            title: entry.title.clone(),
            text: entry.text.clone(),
            field: ReflectField::Title,
        };
        self.mode = ReflectMode::Form;
    }

    pub fn cycle_form_category(&mut self) {
        let all = Dimension::all();
        let pos = all
            .iter()
            .position(|d| *d == self.form.category)
            .unwrap_or(0);
        self.form.category = all[(pos + 1) % all.len()];
    }

    pub fn cycle_form_category_back(&mut self) {
        let all = Dimension::all();
        let pos = all
            .iter()
            .position(|d| *d == self.form.category)
            .unwrap_or(0);
        self.form.category = all[(pos + all.len() - 1) % all.len()];
    }

    /// Commit the form. Both the title and the text are required. Edits keep
    /// the entry's id, date, and timestamp.
    pub fn commit_form(&mut self, store: &mut Store, notices: &mut NoticeQueue) {
        let title = self.form.title.trim().to_string();
        let text = self.form.text.trim().to_string();
        if title.is_empty() || text.is_empty() {
            notices.warning("Enter a title and some text");
            return;
        }

        match self.form.editing_id.take() {
            Some(id) => {
                if let Some(entry) = self.reflections.iter_mut().find(|r| r.id == id) {
                    entry.category = self.form.category;
                    entry.title = title;
                    entry.text = text;
                }
            }
            None => {
                self.reflections.push(Reflection {
                    id: next_millis_id(&mut self.last_id_millis),
                    category: self.form.category,
                    title,
                    text,
                    date: today_key(),
                    timestamp: Utc::now().timestamp_millis(),
                });
            }
        }

        match store.save_reflections(&self.reflections) {
            Ok(()) => notices.success("Reflection saved"),
            Err(err) => {
                warn!(error = %err, "failed to save reflections");
                notices.error("Could not save reflections");
            }
        }
        self.form = ReflectionForm::default();
        self.mode = ReflectMode::Browse;
        self.clamp_selection();
    }

    pub fn cancel(&mut self) {
        self.form = ReflectionForm::default();
        self.mode = ReflectMode::Browse;
    }

    // ===== Delete =====

    pub fn request_delete(&mut self) {
        if let Some(entry) = self.selected() {
            self.mode = ReflectMode::ConfirmDelete(entry.id.clone());
        }
    }

    pub fn confirm_delete(&mut self, store: &mut Store, notices: &mut NoticeQueue) {
        let ReflectMode::ConfirmDelete(id) =
            std::mem::replace(&mut self.mode, ReflectMode::Browse)
        else {
            return;
        };
        self.reflections.retain(|r| r.id != id);
        match store.save_reflections(&self.reflections) {
            Ok(()) => notices.success("Reflection deleted"),
            Err(err) => {
                warn!(error = %err, "failed to save reflections");
                notices.error("Could not save reflections");
            }
        }
        self.clamp_selection();
    }

    // ===== Insights =====

    /// Snapshot of the filtered entries for a background analysis.
    pub fn insight_entries(&self) -> Vec<Reflection> {
        self.filtered().into_iter().cloned().collect()
    }

    pub fn set_insights(&mut self, text: String) {
        self.insights = Some(text);
        self.insights_scroll = 0;
        self.awaiting_insights = false;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> Store {
        let dir = std::env::temp_dir().join(format!(
            "vitalog-reflections-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        Store::new(dir)
    }

    fn entry(id: &str, category: Dimension, title: &str, text: &str, age_days: i64) -> Reflection {
        let now = Utc::now().timestamp_millis();
        let timestamp = now - age_days * 24 * 60 * 60 * 1000;
        let date = if age_days == 0 {
            today_key()
        } else {
            "2020-01-01".to_string()
        };
        Reflection {
            id: id.to_string(),
            category,
            title: title.to_string(),
            text: text.to_string(),
            date,
            timestamp,
        }
    }

    // ----- form -----

    #[test]
    fn test_add_requires_title_and_text() {
        let mut store = temp_store("require");
        let mut notices = NoticeQueue::new();
        let mut page = ReflectionsPage::new();
        page.show(&mut store);

        page.begin_add();
        page.form.title = "Alone".to_string();
        page.commit_form(&mut store, &mut notices);
        assert_eq!(page.mode, ReflectMode::Form);
        assert!(store.load_reflections().is_none());

        page.form.text = "A quiet hour helped more than expected.".to_string();
        page.commit_form(&mut store, &mut notices);
        assert_eq!(page.mode, ReflectMode::Browse);

        let saved = store.load_reflections().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].date, today_key());
        assert!(saved[0].timestamp > 0);
    }

    #[test]
    fn test_edit_keeps_id_date_and_timestamp() {
        let mut store = temp_store("edit");
        let mut notices = NoticeQueue::new();
        let mut page = ReflectionsPage::new();
        page.reflections = vec![entry("r1", Dimension::Mental, "Draft", "text", 2)];
        let original = page.reflections[0].clone();

        page.selection = 0;
        page.begin_edit();
        page.form.title = "Final".to_string();
        page.cycle_form_category();
        page.commit_form(&mut store, &mut notices);

        let edited = &page.reflections[0];
        assert_eq!(edited.id, original.id);
        assert_eq!(edited.date, original.date);
        assert_eq!(edited.timestamp, original.timestamp);
        assert_eq!(edited.title, "Final");
        assert_ne!(edited.category, original.category);
    }

    // ----- filters -----

    #[test]
    fn test_search_matches_title_and_text_case_insensitive() {
        let mut page = ReflectionsPage::new();
        page.reflections = vec![
            entry("r1", Dimension::Mental, "Gratitude list", "three things", 1),
            entry("r2", Dimension::Social, "Dinner", "felt GRATEFUL after", 1),
            entry("r3", Dimension::Family, "Weekend", "nothing special", 1),
        ];

        page.filters.search = "grat".to_string();
        let ids: Vec<&str> = page.filtered().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"r1") && ids.contains(&"r2"));
    }

    #[test]
    fn test_category_and_range_filters() {
        let mut page = ReflectionsPage::new();
        page.reflections = vec![
            entry("today", Dimension::Mental, "a", "b", 0),
            entry("this-week", Dimension::Mental, "a", "b", 3),
            entry("older", Dimension::Social, "a", "b", 12),
        ];

        page.filters.category = Some(Dimension::Mental);
        assert_eq!(page.filtered().len(), 2);

        page.range = DateRange::Today;
        let ids: Vec<&str> = page.filtered().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["today"]);

        page.filters.category = None;
        page.range = DateRange::Week;
        assert_eq!(page.filtered().len(), 2); // 12-day-old entry excluded

        page.range = DateRange::Month;
        assert_eq!(page.filtered().len(), 3);
    }

    #[test]
    fn test_sort_orders() {
        let mut page = ReflectionsPage::new();
        page.reflections = vec![
            entry("old", Dimension::Social, "a", "b", 10),
            entry("new", Dimension::Mental, "a", "b", 1),
        ];

        let ids: Vec<&str> = page.filtered().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]); // Recent is the default

        page.cycle_sort();
        let ids: Vec<&str> = page.filtered().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["old", "new"]);

        page.cycle_sort();
        let ids: Vec<&str> = page.filtered().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]); // mental sorts before social
    }

    #[test]
    fn test_category_filter_cycles_back_to_all() {
        let mut page = ReflectionsPage::new();
        assert_eq!(page.filters.category, None);
        for _ in 0..Dimension::all().len() {
            page.cycle_category_filter();
            assert!(page.filters.category.is_some());
        }
        page.cycle_category_filter();
        assert_eq!(page.filters.category, None);
    }

    // ----- delete -----

    #[test]
    fn test_delete_goes_through_confirmation() {
        let mut store = temp_store("delete");
        let mut notices = NoticeQueue::new();
        let mut page = ReflectionsPage::new();
        page.reflections = vec![
            entry("keep", Dimension::Mental, "a", "b", 1),
            entry("drop", Dimension::Mental, "c", "d", 2),
        ];

        page.selection = 1; // "drop" is older, sorts second under Recent
        page.request_delete();
        assert_eq!(page.mode, ReflectMode::ConfirmDelete("drop".to_string()));

        page.confirm_delete(&mut store, &mut notices);
        assert_eq!(page.reflections.len(), 1);
        assert_eq!(page.reflections[0].id, "keep");
        assert_eq!(store.load_reflections().unwrap().len(), 1);
    }

    // ----- insights -----

    #[test]
    fn test_insight_entries_respect_filters() {
        let mut page = ReflectionsPage::new();
        page.reflections = vec![
            entry("r1", Dimension::Mental, "a", "b", 1),
            entry("r2", Dimension::Social, "c", "d", 1),
        ];
        page.filters.category = Some(Dimension::Social);

        let snapshot = page.insight_entries();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, "r2");
    }
}
