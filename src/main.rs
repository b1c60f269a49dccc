//! Vitalog - a terminal dashboard for everyday wellness tracking.
//!
//! This application provides a fast, keyboard-driven interface for daily
//! goals, planning, reflections, and preventive health records, organized
//! into wellness dimension pages.

mod api;
mod app;
mod config;
mod content;
mod gamification;
mod goals;
mod models;
mod notify;
mod pages;
mod router;
mod store;
mod ui;
mod utils;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::{App, AppState};
use ui::input::handle_input;
use ui::render::render;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for polling terminal events (in milliseconds)
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Set up logging with environment-based filter
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    // Check for CLI commands
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "--export" {
        return export_store();
    }
    if args.len() > 1 && args[1] == "--reset-pages" {
        return reset_pages();
    }

    // Initialize logging
    init_tracing();
    info!("Vitalog starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let app = App::new();

    // Restore the terminal before reporting a startup failure
    let mut app = match app {
        Ok(app) => app,
        Err(e) => {
            disable_raw_mode()?;
            execute!(
                terminal.backend_mut(),
                LeaveAlternateScreen,
                DisableMouseCapture
            )?;
            terminal.show_cursor()?;
            eprintln!("Error: {}", e);
            return Ok(());
        }
    };

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    info!("Vitalog shutting down");
    Ok(())
}

/// Dump every stored document to stdout as one JSON object
fn export_store() -> Result<()> {
    let data_dir = config::Config::data_dir().unwrap_or_else(|_| PathBuf::from("./vitalog"));
    let store = store::Store::new(data_dir.join("store"));

    let dump = store.export()?;
    let json = serde_json::to_string_pretty(&dump)?;
    println!("{}", json);
    Ok(())
}

/// Rewrite all page templates, discarding local edits
fn reset_pages() -> Result<()> {
    let data_dir = config::Config::data_dir().unwrap_or_else(|_| PathBuf::from("./vitalog"));
    let fetcher = content::DiskFetcher::new(data_dir.join("pages"));

    let n = fetcher.reset()?;
    eprintln!("Restored {} page templates", n);
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| render(f, app))?;

        // Poll for events with timeout to allow background updates
        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            if let Event::Key(key) = event::read()? {
                // Ctrl+C to quit
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                // Handle input
                if handle_input(app, key)? {
                    return Ok(());
                }
            }
        }

        // Check for completed background tasks
        app.check_background_tasks();

        // Expire notices and reward flashes
        app.tick();

        // Check if we should quit
        if matches!(app.state, AppState::Quitting) {
            return Ok(());
        }
    }
}
