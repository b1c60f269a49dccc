// Allow dead code: Style functions defined for consistent UI
#![allow(dead_code)]

use ratatui::style::{Color, Modifier, Style};

use crate::models::{VaccineStatus, ZoneStatus};
use crate::notify::Severity;

// Color palette
pub const PRIMARY: Color = Color::Rgb(64, 128, 192);
pub const SECONDARY: Color = Color::Rgb(96, 160, 96);
pub const ACCENT: Color = Color::Rgb(192, 160, 64);
pub const ERROR: Color = Color::Rgb(192, 64, 64);
pub const MUTED: Color = Color::Rgb(128, 128, 128);
pub const HIGHLIGHT: Color = Color::Rgb(48, 48, 64);

// Styles
pub fn title_style() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default()
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

pub fn list_item_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn highlight_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn success_style() -> Style {
    Style::default().fg(SECONDARY)
}

pub fn error_style() -> Style {
    Style::default().fg(ERROR)
}

pub fn tab_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(PRIMARY)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::White)
    }
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(PRIMARY)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn search_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn status_bar_style() -> Style {
    Style::default().bg(Color::Rgb(32, 32, 40)).fg(Color::White)
}

pub fn help_key_style() -> Style {
    Style::default()
        .fg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn help_desc_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn heading_style() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn subheading_style() -> Style {
    Style::default().fg(SECONDARY).add_modifier(Modifier::BOLD)
}

// Goal list states
pub fn completed_style() -> Style {
    Style::default()
        .fg(SECONDARY)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn flash_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn grabbed_style() -> Style {
    Style::default()
        .fg(ACCENT)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

// Status-keyed colors
pub fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Info => Style::default().fg(PRIMARY),
        Severity::Success => success_style(),
        Severity::Warning => highlight_style(),
        Severity::Error => error_style(),
    }
}

pub fn zone_style(status: ZoneStatus) -> Style {
    match status {
        ZoneStatus::Optimal | ZoneStatus::Normal => success_style(),
        ZoneStatus::Attention => highlight_style(),
        ZoneStatus::Alert => error_style(),
    }
}

pub fn vaccine_style(status: VaccineStatus) -> Style {
    match status {
        VaccineStatus::UpToDate => success_style(),
        VaccineStatus::DueSoon => highlight_style(),
        VaccineStatus::Overdue => error_style(),
        VaccineStatus::NotRecorded => muted_style(),
        VaccineStatus::Consult => Style::default().fg(PRIMARY),
    }
}

pub fn gauge_style() -> Style {
    Style::default().fg(SECONDARY).bg(HIGHLIGHT)
}
