//! Asset registry shown on the financial page.
//!
//! Tracks durable purchases and flags the ones past their planned
//! replacement horizon. Defaults are seeded in memory when nothing has
//! been stored yet and only written once the user changes something.

use chrono::NaiveDate;
use tracing::warn;

use crate::models::{default_assets, Asset};
use crate::notify::NoticeQueue;
use crate::store::Store;
use crate::utils::{next_millis_id, today_key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetMode {
    Browse,
    Adding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetField {
    Name,
    Purchased,
}

impl AssetField {
    pub fn next(self) -> Self {
        match self {
            AssetField::Name => AssetField::Purchased,
            AssetField::Purchased => AssetField::Name,
        }
    }
}

#[derive(Debug)]
pub struct AssetForm {
    pub name: String,
    pub purchased: String,
    pub field: AssetField,
}

impl Default for AssetForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            purchased: String::new(),
            field: AssetField::Name,
        }
    }
}

pub struct AssetPanel {
    pub assets: Vec<Asset>,
    pub selection: usize,
    pub mode: AssetMode,
    pub form: AssetForm,
    last_id_millis: i64,
}

impl AssetPanel {
    pub fn new() -> Self {
        Self {
            assets: Vec::new(),
            selection: 0,
            mode: AssetMode::Browse,
            form: AssetForm::default(),
            last_id_millis: 0,
        }
    }

    /// Reload from the store. A missing record falls back to the stock
    /// registry; an explicitly emptied one stays empty.
    pub fn show(&mut self, store: &mut Store) {
        self.assets = store.load_assets().unwrap_or_else(default_assets);
        self.mode = AssetMode::Browse;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let max = self.assets.len().saturating_sub(1);
        self.selection = self.selection.min(max);
    }

    pub fn selected(&self) -> Option<&Asset> {
        self.assets.get(self.selection)
    }

    pub fn select_next(&mut self) {
        let max = self.assets.len().saturating_sub(1);
        self.selection = (self.selection + 1).min(max);
    }

    pub fn select_prev(&mut self) {
        self.selection = self.selection.saturating_sub(1);
    }

    pub fn due_count(&self, today: NaiveDate) -> usize {
        self.assets
            .iter()
            .filter(|a| a.due_for_replacement(today))
            .count()
    }

    // ===== Form =====

    pub fn begin_add(&mut self) {
        self.form = AssetForm {
            purchased: today_key(),
            ..AssetForm::default()
        };
        self.mode = AssetMode::Adding;
    }

    pub fn cancel_form(&mut self) {
        self.form = AssetForm::default();
        self.mode = AssetMode::Browse;
    }

    pub fn commit_add(&mut self, store: &mut Store, notices: &mut NoticeQueue) {
        let name = self.form.name.trim();
        if name.is_empty() {
            notices.warning("Enter an asset name");
            return;
        }
        let Ok(purchased) = NaiveDate::parse_from_str(self.form.purchased.trim(), "%Y-%m-%d")
        else {
            notices.warning("Enter the purchase date as YYYY-MM-DD");
            return;
        };

        self.assets.push(Asset {
            id: next_millis_id(&mut self.last_id_millis),
            name: name.to_string(),
            purchased,
        });
        self.persist(store, notices);
        notices.success("Asset added");
        self.selection = self.assets.len().saturating_sub(1);
        self.form = AssetForm::default();
        self.mode = AssetMode::Browse;
    }

    pub fn delete_selected(&mut self, store: &mut Store, notices: &mut NoticeQueue) {
        if self.selection >= self.assets.len() {
            return;
        }
        self.assets.remove(self.selection);
        self.persist(store, notices);
        notices.success("Asset removed");
        self.clamp_selection();
    }

    fn persist(&mut self, store: &mut Store, notices: &mut NoticeQueue) {
        if let Err(err) = store.save_assets(&self.assets) {
            warn!(error = %err, "failed to save assets");
            notices.error("Could not save assets");
        }
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
            "vitalog-finance-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        Store::new(dir)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_show_seeds_defaults_without_writing() {
        let mut store = temp_store("seed");
        let mut panel = AssetPanel::new();
        panel.show(&mut store);

        assert_eq!(panel.assets.len(), default_assets().len());
        assert!(store.load_assets().is_none());
    }

    #[test]
    fn test_show_respects_emptied_registry() {
        let mut store = temp_store("emptied");
        store.save_assets(&[]).unwrap();

        let mut panel = AssetPanel::new();
        panel.show(&mut store);
        assert!(panel.assets.is_empty());
    }

    #[test]
    fn test_add_requires_name_and_valid_date() {
        let mut store = temp_store("validate");
        let mut notices = NoticeQueue::new();
        let mut panel = AssetPanel::new();
        panel.show(&mut store);

        panel.begin_add();
        panel.form.name.clear();
        panel.commit_add(&mut store, &mut notices);
        assert_eq!(panel.mode, AssetMode::Adding); // form stays open
        assert!(store.load_assets().is_none());

        panel.form.name.push_str("Laptop");
        panel.form.purchased = "soon".to_string();
        panel.commit_add(&mut store, &mut notices);
        assert_eq!(panel.mode, AssetMode::Adding);
        assert!(store.load_assets().is_none());
    }

    #[test]
    fn test_add_persists_and_selects_new_row() {
        let mut store = temp_store("add");
        let mut notices = NoticeQueue::new();
        let mut panel = AssetPanel::new();
        panel.show(&mut store);
        let before = panel.assets.len();

        panel.begin_add();
        panel.form.name = "Laptop".to_string();
        panel.form.purchased = "2024-02-10".to_string();
        panel.commit_add(&mut store, &mut notices);

        assert_eq!(panel.mode, AssetMode::Browse);
        assert_eq!(panel.assets.len(), before + 1);
        assert_eq!(panel.selection, before);
        let saved = store.load_assets().unwrap();
        assert_eq!(saved.last().unwrap().name, "Laptop");
    }

    #[test]
    fn test_delete_persists_remaining() {
        let mut store = temp_store("delete");
        let mut notices = NoticeQueue::new();
        let mut panel = AssetPanel::new();
        panel.show(&mut store);
        let before = panel.assets.len();

        panel.selection = 0;
        panel.delete_selected(&mut store, &mut notices);
        assert_eq!(panel.assets.len(), before - 1);
        assert_eq!(store.load_assets().unwrap().len(), before - 1);
    }

    #[test]
    fn test_due_count_uses_replacement_horizon() {
        let mut panel = AssetPanel::new();
        panel.assets = vec![
            Asset {
                id: "1".to_string(),
                name: "Old phone".to_string(),
                purchased: date("2015-01-01"),
            },
            Asset {
                id: "2".to_string(),
                name: "New chair".to_string(),
                purchased: date("2026-01-01"),
            },
        ];
        assert_eq!(panel.due_count(date("2026-08-23")), 1);
    }
}
