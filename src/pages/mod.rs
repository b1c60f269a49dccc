//! Per-page controllers and the registry that owns them.
//!
//! Each interactive page gets its own controller instance, created the
//! first time the page is visited and kept for the life of the app so
//! cursors, drafts, and filters survive navigation. Activating a page
//! runs its `show` refresh against the store, the same way every visit
//! re-reads the backing records.

pub mod dimension;
pub mod finance;
pub mod home;
pub mod planner;
pub mod preventive;
pub mod reflections;

use std::collections::HashMap;

use crate::models::Dimension;
use crate::router::PageId;
use crate::store::Store;

use dimension::DimensionPage;
use finance::AssetPanel;
use home::HomePage;
use planner::PlannerPage;
use preventive::PreventivePage;
use reflections::ReflectionsPage;

pub struct PageRegistry {
    pub home: HomePage,
    dimensions: HashMap<Dimension, DimensionPage>,
    planner: Option<PlannerPage>,
    reflections: Option<ReflectionsPage>,
    preventive: Option<PreventivePage>,
    assets: Option<AssetPanel>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self {
            home: HomePage::new(),
            dimensions: HashMap::new(),
            planner: None,
            reflections: None,
            preventive: None,
            assets: None,
        }
    }

    /// Create the page's controller on first visit, then refresh it for
    /// this visit. Content-only pages have nothing to refresh.
    pub fn activate(&mut self, page: PageId, store: &mut Store) {
        match page {
            PageId::Home | PageId::Sleep => {}
            PageId::DailyPlan => {
                self.planner
                    .get_or_insert_with(PlannerPage::new)
                    .show(store);
            }
            PageId::Reflections => {
                self.reflections
                    .get_or_insert_with(ReflectionsPage::new)
                    .show(store);
            }
            PageId::Preventive => {
                self.preventive
                    .get_or_insert_with(PreventivePage::new)
                    .show(store);
            }
            _ => {
                if let Some(dim) = page.dimension() {
                    self.dimensions
                        .entry(dim)
                        .or_insert_with(|| DimensionPage::new(dim))
                        .show(store);
                    // The financial page carries the asset registry
                    if dim == Dimension::Financial {
                        self.assets.get_or_insert_with(AssetPanel::new).show(store);
                    }
                    // The physical page reads the profile for its water target
                    if dim == Dimension::Physical {
                        self.preventive
                            .get_or_insert_with(PreventivePage::new)
                            .show(store);
                    }
                }
            }
        }
    }

    /// Per-frame upkeep for pages with time-based state.
    pub fn tick(&mut self) {
        for page in self.dimensions.values_mut() {
            page.tick();
        }
    }

    pub fn dimension(&self, dim: Dimension) -> Option<&DimensionPage> {
        self.dimensions.get(&dim)
    }

    pub fn dimension_mut(&mut self, dim: Dimension) -> Option<&mut DimensionPage> {
        self.dimensions.get_mut(&dim)
    }

    pub fn planner(&self) -> Option<&PlannerPage> {
        self.planner.as_ref()
    }

    pub fn planner_mut(&mut self) -> Option<&mut PlannerPage> {
        self.planner.as_mut()
    }

    pub fn reflections(&self) -> Option<&ReflectionsPage> {
        self.reflections.as_ref()
    }

    pub fn reflections_mut(&mut self) -> Option<&mut ReflectionsPage> {
        self.reflections.as_mut()
    }

    pub fn preventive(&self) -> Option<&PreventivePage> {
        self.preventive.as_ref()
    }

    pub fn preventive_mut(&mut self) -> Option<&mut PreventivePage> {
        self.preventive.as_mut()
    }

    pub fn assets(&self) -> Option<&AssetPanel> {
        self.assets.as_ref()
    }

    pub fn assets_mut(&mut self) -> Option<&mut AssetPanel> {
        self.assets.as_mut()
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
            "vitalog-registry-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        Store::new(dir)
    }

    #[test]
    fn test_pages_are_created_lazily() {
        let mut store = temp_store("lazy");
        let mut pages = PageRegistry::new();
        assert!(pages.planner().is_none());
        assert!(pages.dimension(Dimension::Mental).is_none());

        pages.activate(PageId::DailyPlan, &mut store);
        assert!(pages.planner().is_some());
        assert!(pages.dimension(Dimension::Mental).is_none());

        pages.activate(PageId::Mental, &mut store);
        assert!(pages.dimension(Dimension::Mental).is_some());
    }

    #[test]
    fn test_revisit_reuses_the_same_instance() {
        let mut store = temp_store("reuse");
        let mut pages = PageRegistry::new();
        pages.activate(PageId::Social, &mut store);

        // A draft in the add prompt survives leaving and coming back
        let page = pages.dimension_mut(Dimension::Social).unwrap();
        page.input.push_str("half-typed goal");
        pages.activate(PageId::Home, &mut store);
        pages.activate(PageId::Social, &mut store);
        assert_eq!(
            pages.dimension(Dimension::Social).unwrap().input,
            "half-typed goal"
        );
    }

    #[test]
    fn test_financial_page_brings_the_asset_panel() {
        let mut store = temp_store("assets");
        let mut pages = PageRegistry::new();
        assert!(pages.assets().is_none());

        pages.activate(PageId::Financial, &mut store);
        assert!(pages.assets().is_some());
        assert!(!pages.assets().unwrap().assets.is_empty()); // stock registry
    }

    #[test]
    fn test_content_pages_need_no_controller() {
        let mut store = temp_store("content");
        let mut pages = PageRegistry::new();
        pages.activate(PageId::Sleep, &mut store);
        pages.activate(PageId::Home, &mut store);
        assert!(pages.planner().is_none());
        assert!(pages.assets().is_none());
    }
}
