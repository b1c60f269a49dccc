//! Page identity and the navigation hierarchy.

use crate::models::Dimension;

/// Directly loadable pages. Each owns a content template and a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    Physical,
    Mental,
    Financial,
    Family,
    Professional,
    Social,
    Spiritual,
    Preventive,
    DailyPlan,
    Reflections,
    Sleep,
}

impl PageId {
    pub fn all() -> [PageId; 12] {
        [
            PageId::Home,
            PageId::Physical,
            PageId::Mental,
            PageId::Financial,
            PageId::Family,
            PageId::Professional,
            PageId::Social,
            PageId::Spiritual,
            PageId::Preventive,
            PageId::DailyPlan,
            PageId::Reflections,
            PageId::Sleep,
        ]
    }

    /// Navigation token and template file stem for this page.
    pub fn slug(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Physical => "physical",
            PageId::Mental => "mental",
            PageId::Financial => "financial",
            PageId::Family => "family",
            PageId::Professional => "professional",
            PageId::Social => "social",
            PageId::Spiritual => "spiritual",
            PageId::Preventive => "preventive",
            PageId::DailyPlan => "daily-plan",
            PageId::Reflections => "reflections",
            PageId::Sleep => "sleep",
        }
    }

    pub fn from_slug(slug: &str) -> Option<PageId> {
        PageId::all().into_iter().find(|p| p.slug() == slug)
    }

    /// Get the display title for this page.
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::Physical => "Physical Health",
            PageId::Mental => "Mental Health",
            PageId::Financial => "Financial Health",
            PageId::Family => "Family Health",
            PageId::Professional => "Professional Health",
            PageId::Social => "Social Health",
            PageId::Spiritual => "Spiritual Health",
            PageId::Preventive => "Preventive Health",
            PageId::DailyPlan => "Daily Plan",
            PageId::Reflections => "Reflections",
            PageId::Sleep => "Sleep Quality",
        }
    }

    /// Parent in the breadcrumb hierarchy. Only home has none.
    pub fn parent(&self) -> Option<PageId> {
        match self {
            PageId::Home => None,
            PageId::Sleep => Some(PageId::Mental),
            _ => Some(PageId::Home),
        }
    }

    /// The ancestor sitting directly under home, used for tab highlighting.
    /// Home answers for itself.
    pub fn top_level(&self) -> PageId {
        let mut current = *self;
        while let Some(parent) = current.parent() {
            if parent == PageId::Home {
                return current;
            }
            current = parent;
        }
        current
    }

    /// The goal-list dimension owned by this page, if it is a goal page.
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            PageId::Physical => Some(Dimension::Physical),
            PageId::Mental => Some(Dimension::Mental),
            PageId::Financial => Some(Dimension::Financial),
            PageId::Family => Some(Dimension::Family),
            PageId::Professional => Some(Dimension::Professional),
            PageId::Social => Some(Dimension::Social),
            PageId::Spiritual => Some(Dimension::Spiritual),
            _ => None,
        }
    }

    /// Get the next page (wrapping around)
    pub fn next(&self) -> Self {
        let pages = Self::all();
        let i = pages.iter().position(|p| p == self).unwrap_or(0);
        pages[(i + 1) % pages.len()]
    }

    /// Get the previous page (wrapping around)
    pub fn prev(&self) -> Self {
        let pages = Self::all();
        let i = pages.iter().position(|p| p == self).unwrap_or(0);
        pages[(i + pages.len() - 1) % pages.len()]
    }
}

/// A known navigation token with no controller of its own: it loads its
/// parent page and remembers itself as the post-render scroll target.
pub struct AnchorEntry {
    pub token: &'static str,
    pub parent: PageId,
    pub title: &'static str,
}

pub const ANCHORS: &[AnchorEntry] = &[
    AnchorEntry {
        token: "hydration",
        parent: PageId::Physical,
        title: "Hydration",
    },
    AnchorEntry {
        token: "stretching",
        parent: PageId::Physical,
        title: "Stretching",
    },
    AnchorEntry {
        token: "vaccines",
        parent: PageId::Preventive,
        title: "Vaccines",
    },
    AnchorEntry {
        token: "biomarkers",
        parent: PageId::Preventive,
        title: "Biomarkers",
    },
    AnchorEntry {
        token: "sleep-hygiene",
        parent: PageId::Sleep,
        title: "Sleep Hygiene",
    },
];

pub fn anchor(token: &str) -> Option<&'static AnchorEntry> {
    ANCHORS.iter().find(|a| a.token == token)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for page in PageId::all() {
            assert_eq!(PageId::from_slug(page.slug()), Some(page));
        }
        assert_eq!(PageId::from_slug("no-such-page"), None);
    }

    #[test]
    fn test_navigation_wraps_around() {
        assert_eq!(PageId::Sleep.next(), PageId::Home); // Wraps around
        assert_eq!(PageId::Home.prev(), PageId::Sleep);
        assert_eq!(PageId::Home.next(), PageId::Physical);
    }

    #[test]
    fn test_top_level_ancestor() {
        assert_eq!(PageId::Sleep.top_level(), PageId::Mental);
        assert_eq!(PageId::Physical.top_level(), PageId::Physical);
        assert_eq!(PageId::Home.top_level(), PageId::Home);
    }

    #[test]
    fn test_anchor_entries_resolve_to_loadable_parents() {
        for entry in ANCHORS {
            // Anchor tokens must not collide with page slugs
            assert_eq!(PageId::from_slug(entry.token), None);
            assert!(PageId::all().contains(&entry.parent));
        }
        assert_eq!(anchor("vaccines").unwrap().parent, PageId::Preventive);
        assert!(anchor("unknown").is_none());
    }

    #[test]
    fn test_goal_pages_carry_their_dimension() {
        assert_eq!(PageId::Physical.dimension(), Some(Dimension::Physical));
        assert_eq!(PageId::Spiritual.dimension(), Some(Dimension::Spiritual));
        assert_eq!(PageId::Home.dimension(), None);
        assert_eq!(PageId::DailyPlan.dimension(), None);
    }
}
