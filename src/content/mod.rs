//! Page template content.
//!
//! Every page renders a markdown-ish template fetched through [`PageFetcher`].
//! The production fetcher reads `pages/<slug>.md` under the data directory,
//! seeded on first run from the embedded defaults in [`defaults`].

pub mod defaults;

use std::path::PathBuf;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("page template not found: {0}")]
    NotFound(String),
    #[error("failed to read page template {slug}: {source}")]
    Read {
        slug: String,
        #[source]
        source: std::io::Error,
    },
}

/// Source of page template bodies. Injected into the router so tests can
/// count fetches or force failures.
pub trait PageFetcher {
    fn fetch(&self, slug: &str) -> Result<String, FetchError>;
}

/// Reads templates from `<pages_dir>/<slug>.md`.
pub struct DiskFetcher {
    pages_dir: PathBuf,
}

impl DiskFetcher {
    pub fn new(pages_dir: PathBuf) -> Self {
        Self { pages_dir }
    }

    fn template_path(&self, slug: &str) -> PathBuf {
        self.pages_dir.join(format!("{}.md", slug))
    }

    /// Write any missing template from the embedded defaults. Returns how
    /// many files were written. Existing files are left alone.
    pub fn seed(&self) -> Result<usize> {
        std::fs::create_dir_all(&self.pages_dir).with_context(|| {
            format!("Failed to create pages directory: {}", self.pages_dir.display())
        })?;
        let mut written = 0;
        for (slug, body) in defaults::TEMPLATES {
            let path = self.template_path(slug);
            if path.exists() {
                continue;
            }
            std::fs::write(&path, body)
                .with_context(|| format!("Failed to seed page template: {}", slug))?;
            written += 1;
        }
        if written > 0 {
            debug!(written, "Seeded page templates");
        }
        Ok(written)
    }

    /// Overwrite every template with its embedded default. Backs the
    /// `--reset-pages` flag.
    pub fn reset(&self) -> Result<usize> {
        std::fs::create_dir_all(&self.pages_dir).with_context(|| {
            format!("Failed to create pages directory: {}", self.pages_dir.display())
        })?;
        for (slug, body) in defaults::TEMPLATES {
            std::fs::write(self.template_path(slug), body)
                .with_context(|| format!("Failed to write page template: {}", slug))?;
        }
        Ok(defaults::TEMPLATES.len())
    }
}

impl PageFetcher for DiskFetcher {
    fn fetch(&self, slug: &str) -> Result<String, FetchError> {
        let path = self.template_path(slug);
        std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FetchError::NotFound(slug.to_string())
            } else {
                FetchError::Read {
                    slug: slug.to_string(),
                    source: e,
                }
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_pages(name: &str) -> DiskFetcher {
        let dir = std::env::temp_dir().join(format!(
            "vitalog-pages-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        DiskFetcher::new(dir)
    }

    #[test]
    fn test_seed_writes_every_template_once() {
        let fetcher = temp_pages("seed");
        assert_eq!(fetcher.seed().unwrap(), defaults::TEMPLATES.len());
        // Second run finds everything in place
        assert_eq!(fetcher.seed().unwrap(), 0);
    }

    #[test]
    fn test_seed_leaves_edited_templates_alone() {
        let fetcher = temp_pages("seed-edited");
        fetcher.seed().unwrap();
        std::fs::write(fetcher.template_path("sleep"), "# Custom\n").unwrap();

        fetcher.seed().unwrap();
        assert_eq!(fetcher.fetch("sleep").unwrap(), "# Custom\n");

        // Reset puts the default back
        fetcher.reset().unwrap();
        assert_ne!(fetcher.fetch("sleep").unwrap(), "# Custom\n");
    }

    #[test]
    fn test_fetch_missing_template_is_not_found() {
        let fetcher = temp_pages("missing");
        match fetcher.fetch("no-such-page") {
            Err(FetchError::NotFound(slug)) => assert_eq!(slug, "no-such-page"),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_every_template_has_a_title_line() {
        for (slug, body) in defaults::TEMPLATES {
            assert!(body.starts_with("# "), "template {} lacks a title", slug);
            assert!(body.ends_with('\n'), "template {} lacks a final newline", slug);
        }
    }
}
