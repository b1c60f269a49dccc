//! Home page: a launcher grid over the other pages.
//!
//! The cards mirror the main navigation. Dimension cards show a medal
//! icon when that dimension earned its daily medal, which the view
//! reads from the gamification state at render time.

use crate::router::PageId;

pub struct HomePage {
    pub selection: usize,
}

impl HomePage {
    pub fn new() -> Self {
        Self { selection: 0 }
    }

    /// Pages that get a card, in display order. The sleep guide is reached
    /// from the mental-health page rather than the launcher.
    pub fn cards() -> Vec<PageId> {
        PageId::all()
            .into_iter()
            .filter(|p| !matches!(p, PageId::Home | PageId::Sleep))
            .collect()
    }

    pub fn selected(&self) -> PageId {
        let cards = Self::cards();
        cards[self.selection.min(cards.len() - 1)]
    }

    pub fn select_next(&mut self) {
        self.selection = (self.selection + 1).min(Self::cards().len() - 1);
    }

    pub fn select_prev(&mut self) {
        self.selection = self.selection.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_cover_every_page_but_home_and_sleep() {
        let cards = HomePage::cards();
        assert_eq!(cards.len(), 10);
        assert!(!cards.contains(&PageId::Home));
        assert!(!cards.contains(&PageId::Sleep));
        assert!(cards.contains(&PageId::DailyPlan));
        assert!(cards.contains(&PageId::Preventive));
    }

    #[test]
    fn test_selection_clamps_at_both_ends() {
        let mut home = HomePage::new();
        home.select_prev();
        assert_eq!(home.selection, 0);
        for _ in 0..50 {
            home.select_next();
        }
        assert_eq!(home.selection, HomePage::cards().len() - 1);
    }
}
