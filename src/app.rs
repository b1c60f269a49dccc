//! Application state management for Vitalog.
//!
//! This module contains the core `App` struct that ties the router, the page
//! controllers, persistence, gamification, and background AI task
//! coordination together for the event loop.

use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::api::{AiClient, AiError};
use crate::config::Config;
use crate::content::DiskFetcher;
use crate::gamification::Gamification;
use crate::models::{Dimension, TaskCategory};
use crate::notify::NoticeQueue;
use crate::pages::PageRegistry;
use crate::router::{PageId, Router};
use crate::store::Store;
use crate::ui::views::content;

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background task message channel.
/// AI calls fire one at a time from the keyboard, 8 leaves headroom.
const CHANNEL_BUFFER_SIZE: usize = 8;

/// Number of lines to scroll on page up/down.
/// 10 rows provides a good balance of speed without losing context.
pub const PAGE_SCROLL_SIZE: usize = 10;

// ============================================================================
// UI State Types
// ============================================================================

/// Current UI focus area. Most pages cycle between the list panel and the
/// content pane; the financial page adds a stop for its asset panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Assets,
    Content,
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    Goto,
    ShowingHelp,
    ShowingInsights,
    ConfirmingQuit,
    Quitting,
}

// ============================================================================
// Background Task Results
// ============================================================================

/// Results sent back from spawned AI calls through the MPSC channel.
enum TaskResult {
    /// A goal suggestion for one dimension
    Suggestion {
        dimension: Dimension,
        result: Result<String, AiError>,
    },
    /// An analysis of the filtered reflection entries
    Insights { result: Result<String, AiError> },
}

// ============================================================================
// Main Application Struct
// ============================================================================

/// Main application state container
pub struct App {
    // Core services
    pub config: Config,
    pub store: Store,
    pub fetcher: DiskFetcher,
    pub ai: AiClient,

    // Navigation
    pub router: Router,
    pub pages: PageRegistry,

    // UI state
    pub state: AppState,
    pub focus: Focus,
    pub goto_input: String,

    // Current page template
    pub content_body: String,
    pub content_scroll: u16,

    // Shared services
    pub game: Gamification,
    pub notices: NoticeQueue,

    // Background task channel
    task_rx: mpsc::Receiver<TaskResult>,
    task_tx: mpsc::Sender<TaskResult>,
    pub ai_busy: bool,
}

impl App {
    /// Create a new application instance and land on the configured start
    /// page.
    pub fn new() -> Result<Self> {
        debug!("App::new() starting");
        let config = match Config::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };

        let data_dir = Config::data_dir().unwrap_or_else(|_| PathBuf::from("./vitalog"));
        debug!(?data_dir, "Data directory configured");

        let mut store = Store::new(data_dir.join("store"));

        // Write any missing page templates so every route resolves
        let fetcher = DiskFetcher::new(data_dir.join("pages"));
        match fetcher.seed() {
            Ok(n) if n > 0 => debug!(seeded = n, "Wrote missing page templates"),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Failed to seed page templates"),
        }

        let ai = AiClient::new(&config.ai_model)?;
        let game = Gamification::load(&mut store);

        let (task_tx, task_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        let start = config.start_page.clone().unwrap_or_default();

        let mut app = Self {
            config,
            store,
            fetcher,
            ai,

            router: Router::new(),
            pages: PageRegistry::new(),

            state: AppState::Normal,
            focus: Focus::List,
            goto_input: String::new(),

            content_body: String::new(),
            content_scroll: 0,

            game,
            notices: NoticeQueue::new(),

            task_rx,
            task_tx,
            ai_busy: false,
        };

        // An unknown start page falls through to home inside the router
        app.navigate(&start);
        Ok(app)
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Navigate to a token. On success the content pane shows the page body,
    /// scrolled to the requested anchor, and the page's controller reloads
    /// its state from the store. On a fetch failure the router has already
    /// fallen back to home; this surfaces the error and follows it there.
    pub fn navigate(&mut self, token: &str) {
        match self.router.navigate(token, &self.fetcher) {
            Ok(outcome) => {
                self.content_scroll = match outcome.anchor.as_deref() {
                    Some(anchor) => content::anchor_scroll(&outcome.body, anchor),
                    None => 0,
                };
                self.content_body = outcome.body;
                self.pages.activate(outcome.page, &mut self.store);
                self.focus = Focus::List;
            }
            Err(_) => {
                self.notices.error("Could not load this page");
                // The home body is usually still cached
                self.content_body = match self.router.navigate("", &self.fetcher) {
                    Ok(home) => home.body,
                    Err(_) => String::new(),
                };
                self.content_scroll = 0;
                self.pages.activate(PageId::Home, &mut self.store);
                self.focus = Focus::List;
            }
        }
    }

    /// Carry a goal onto the daily plan: jump to the planner and open the
    /// task form with the description and category filled in.
    pub fn send_to_plan(&mut self, description: String, category: TaskCategory) {
        self.navigate(PageId::DailyPlan.slug());
        if self.router.current != PageId::DailyPlan {
            return;
        }
        if let Some(page) = self.pages.planner_mut() {
            page.quick_add(description, category);
        }
    }

    // ========================================================================
    // Background AI tasks
    // ========================================================================

    /// Ask the AI for a goal suggestion on one dimension. The reply lands in
    /// the page's add prompt through the task channel.
    pub fn request_suggestion(&mut self, dimension: Dimension) {
        if !self.ai.has_key() {
            self.notices
                .warning(format!("Set {} to enable AI features", crate::api::API_KEY_ENV));
            return;
        }
        if self.ai_busy {
            return;
        }
        self.ai_busy = true;

        let client = self.ai.clone();
        let tx = self.task_tx.clone();
        tokio::spawn(async move {
            let result = client.suggest_goal(dimension).await;
            Self::send_result(&tx, TaskResult::Suggestion { dimension, result }).await;
        });
    }

    /// Ask the AI to analyze the reflections matching the current filters.
    pub fn request_insights(&mut self) {
        if !self.ai.has_key() {
            self.notices
                .warning(format!("Set {} to enable AI features", crate::api::API_KEY_ENV));
            return;
        }
        if self.ai_busy {
            return;
        }
        let Some(page) = self.pages.reflections_mut() else {
            return;
        };
        let entries = page.insight_entries();
        if entries.is_empty() {
            self.notices.info("No entries match the current filters");
            return;
        }
        page.awaiting_insights = true;
        self.ai_busy = true;

        let client = self.ai.clone();
        let tx = self.task_tx.clone();
        tokio::spawn(async move {
            let result = client.reflection_insights(&entries).await;
            Self::send_result(&tx, TaskResult::Insights { result }).await;
        });
    }

    /// Check for completed background tasks and process results
    pub fn check_background_tasks(&mut self) {
        // Collect all pending results first to avoid borrow conflicts
        let mut results = Vec::new();
        while let Ok(result) = self.task_rx.try_recv() {
            results.push(result);
        }
        for result in results {
            self.process_task_result(result);
        }
    }

    fn process_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Suggestion { dimension, result } => {
                self.ai_busy = false;
                match result {
                    Ok(text) => {
                        if let Some(page) = self.pages.dimension_mut(dimension) {
                            page.apply_suggestion(text);
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Goal suggestion failed");
                        self.notices.error(e.to_string());
                    }
                }
            }
            TaskResult::Insights { result } => {
                self.ai_busy = false;
                match result {
                    Ok(text) => {
                        if let Some(page) = self.pages.reflections_mut() {
                            page.set_insights(text);
                            self.state = AppState::ShowingInsights;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Reflection insights failed");
                        if let Some(page) = self.pages.reflections_mut() {
                            page.awaiting_insights = false;
                        }
                        self.notices.error(e.to_string());
                    }
                }
            }
        }
    }

    /// Helper to send task results, logging any channel errors
    async fn send_result(tx: &mpsc::Sender<TaskResult>, result: TaskResult) {
        if let Err(e) = tx.send(result).await {
            error!(error = %e, "Failed to send task result - channel closed");
        }
    }

    // ========================================================================
    // Housekeeping
    // ========================================================================

    /// Advance time-based UI state once per event-loop pass.
    pub fn tick(&mut self) {
        self.notices.prune();
        self.pages.tick();
    }
}
