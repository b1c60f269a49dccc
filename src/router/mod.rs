//! Navigation token resolution, content caching, and breadcrumb state.
//!
//! Every way into a page (hotkeys, the goto prompt, the configured start
//! page) funnels through [`Router::navigate`], which resolves the token,
//! produces the template body through the cache, and keeps breadcrumb and
//! current-page state consistent, including the reset-to-home path when a
//! template cannot be fetched.

pub mod cache;
pub mod pages;

use tracing::warn;

use crate::content::{FetchError, PageFetcher};
use cache::PageCache;
pub use pages::{anchor, PageId, ANCHORS};

/// What a navigation token means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub page: PageId,
    /// Anchor token to scroll to after render, when the token named a
    /// sub-section rather than a page.
    pub anchor: Option<String>,
    /// False when the token was unknown and home is a fallback.
    pub recognized: bool,
}

/// Translate a free-form navigation token. An empty token means home; an
/// unknown one falls back to home with a logged diagnostic.
pub fn resolve(token: &str) -> Resolution {
    let token = token.trim();
    if token.is_empty() {
        return Resolution {
            page: PageId::Home,
            anchor: None,
            recognized: true,
        };
    }
    if let Some(page) = PageId::from_slug(token) {
        return Resolution {
            page,
            anchor: None,
            recognized: true,
        };
    }
    if let Some(entry) = anchor(token) {
        return Resolution {
            page: entry.parent,
            anchor: Some(entry.token.to_string()),
            recognized: true,
        };
    }
    warn!(token, "Unknown navigation token, defaulting to home");
    Resolution {
        page: PageId::Home,
        anchor: None,
        recognized: false,
    }
}

/// Breadcrumb titles from the root down to the requested token, anchors
/// included. Home and unknown tokens produce an empty trail.
fn breadcrumb_trail(token: &str) -> Vec<String> {
    if token.is_empty() || token == PageId::Home.slug() {
        return Vec::new();
    }
    if let Some(entry) = anchor(token) {
        let mut trail = page_trail(entry.parent);
        trail.push(entry.title.to_string());
        return trail;
    }
    match PageId::from_slug(token) {
        Some(page) => page_trail(page),
        None => Vec::new(),
    }
}

fn page_trail(page: PageId) -> Vec<String> {
    let mut trail = Vec::new();
    let mut current = Some(page);
    while let Some(p) = current {
        trail.push(p.title().to_string());
        current = p.parent();
    }
    trail.reverse();
    trail
}

/// A successful navigation: the page to activate and its template body.
pub struct NavOutcome {
    pub page: PageId,
    pub body: String,
    pub anchor: Option<String>,
    pub recognized: bool,
}

pub struct Router {
    cache: PageCache,
    pub current: PageId,
    pub breadcrumbs: Vec<String>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            cache: PageCache::new(),
            current: PageId::Home,
            breadcrumbs: Vec::new(),
        }
    }

    /// Resolve a token and produce the page body, from cache when fresh.
    ///
    /// On success the router points at the resolved page with a breadcrumb
    /// trail built from the requested token. On a fetch failure it points at
    /// home with a cleared trail, the failing page is never cached, and the
    /// error is returned for the caller to render.
    pub fn navigate(
        &mut self,
        token: &str,
        fetcher: &dyn PageFetcher,
    ) -> Result<NavOutcome, FetchError> {
        let resolution = resolve(token);
        let page = resolution.page;

        self.breadcrumbs = breadcrumb_trail(token.trim());

        let body = match self.cache.get(page.slug()) {
            Some(body) => body,
            None => match fetcher.fetch(page.slug()) {
                Ok(body) => {
                    self.cache.set(page.slug(), body.clone());
                    body
                }
                Err(e) => {
                    warn!(page = page.slug(), error = %e, "Failed to load page content");
                    self.breadcrumbs.clear();
                    self.current = PageId::Home;
                    return Err(e);
                }
            },
        };

        self.current = page;
        Ok(NavOutcome {
            page,
            body,
            anchor: resolution.anchor,
            recognized: resolution.recognized,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Serves a synthetic body for any slug and counts fetches.
    struct CountingFetcher {
        calls: RefCell<usize>,
    }

    impl CountingFetcher {
        fn new() -> Self {
            Self {
                calls: RefCell::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.borrow()
        }
    }

    impl PageFetcher for CountingFetcher {
        fn fetch(&self, slug: &str) -> Result<String, FetchError> {
            *self.calls.borrow_mut() += 1;
            Ok(format!("# {}\n", slug))
        }
    }

    struct FailingFetcher;

    impl PageFetcher for FailingFetcher {
        fn fetch(&self, slug: &str) -> Result<String, FetchError> {
            Err(FetchError::NotFound(slug.to_string()))
        }
    }

    // ----- resolve -----

    #[test]
    fn test_resolve_empty_token_is_home() {
        let r = resolve("");
        assert_eq!(r.page, PageId::Home);
        assert_eq!(r.anchor, None);
        assert!(r.recognized);
    }

    #[test]
    fn test_resolve_page_slug() {
        let r = resolve("physical");
        assert_eq!(r.page, PageId::Physical);
        assert_eq!(r.anchor, None);
        assert!(r.recognized);
    }

    #[test]
    fn test_resolve_anchor_loads_parent() {
        let r = resolve("biomarkers");
        assert_eq!(r.page, PageId::Preventive);
        assert_eq!(r.anchor.as_deref(), Some("biomarkers"));
        assert!(r.recognized);
    }

    #[test]
    fn test_resolve_unknown_token_falls_back_to_home() {
        let r = resolve("does-not-exist");
        assert_eq!(r.page, PageId::Home);
        assert_eq!(r.anchor, None);
        assert!(!r.recognized);
    }

    // ----- navigate -----

    #[test]
    fn test_repeat_navigation_hits_cache() {
        let mut router = Router::new();
        let fetcher = CountingFetcher::new();

        router.navigate("physical", &fetcher).unwrap();
        router.navigate("home", &fetcher).unwrap();
        router.navigate("physical", &fetcher).unwrap();

        // Second physical visit is served from cache
        assert_eq!(fetcher.calls(), 2);
    }

    #[test]
    fn test_stale_cache_entry_refetches() {
        let mut router = Router::new();
        let fetcher = CountingFetcher::new();

        router.navigate("physical", &fetcher).unwrap();
        router.cache.backdate("physical", 6 * 60 * 1000);
        router.navigate("physical", &fetcher).unwrap();

        assert_eq!(fetcher.calls(), 2);
    }

    #[test]
    fn test_failed_fetch_resets_to_home_and_caches_nothing() {
        let mut router = Router::new();
        router.navigate("physical", &CountingFetcher::new()).unwrap();
        assert_eq!(router.breadcrumbs.len(), 2);

        let err = router.navigate("preventive", &FailingFetcher);
        assert!(err.is_err());
        assert_eq!(router.current, PageId::Home);
        assert!(router.breadcrumbs.is_empty());

        // The failing page was never cached: a retry fetches again
        let fetcher = CountingFetcher::new();
        router.navigate("preventive", &fetcher).unwrap();
        assert_eq!(fetcher.calls(), 1);
    }

    #[test]
    fn test_unknown_token_lands_home_with_cleared_trail() {
        let mut router = Router::new();
        let fetcher = CountingFetcher::new();
        router.navigate("physical", &fetcher).unwrap();

        let outcome = router.navigate("garbage-token", &fetcher).unwrap();
        assert_eq!(outcome.page, PageId::Home);
        assert!(!outcome.recognized);
        assert_eq!(router.current, PageId::Home);
        assert!(router.breadcrumbs.is_empty());
    }

    #[test]
    fn test_anchor_navigation_keeps_anchor_and_full_trail() {
        let mut router = Router::new();
        let outcome = router.navigate("sleep-hygiene", &CountingFetcher::new()).unwrap();

        assert_eq!(outcome.page, PageId::Sleep);
        assert_eq!(outcome.anchor.as_deref(), Some("sleep-hygiene"));
        assert_eq!(
            router.breadcrumbs,
            vec!["Home", "Mental Health", "Sleep Quality", "Sleep Hygiene"]
        );
    }

    #[test]
    fn test_navigating_home_clears_trail() {
        let mut router = Router::new();
        let fetcher = CountingFetcher::new();
        router.navigate("vaccines", &fetcher).unwrap();
        assert!(!router.breadcrumbs.is_empty());

        router.navigate("home", &fetcher).unwrap();
        assert!(router.breadcrumbs.is_empty());
    }
}
