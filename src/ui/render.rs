use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, AppState, Focus};
use crate::models::{Sex, INDICATORS, VACCINES};
use crate::pages::dimension::GoalMode;
use crate::pages::finance::{AssetField, AssetMode};
use crate::pages::planner::{PlanMode, TaskField};
use crate::pages::preventive::{PreventiveMode, ProfileField, ReadingField};
use crate::pages::reflections::{ReflectField, ReflectMode};
use crate::router::PageId;

use super::styles;
use super::views::{content, goals, home, planner, preventive, reflections};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_tabs(frame, app, chunks[1]);
    render_main_content(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    // Render overlays
    render_form_overlays(frame, app);

    if matches!(app.state, AppState::Goto) {
        render_goto_overlay(frame, app);
    }

    if matches!(app.state, AppState::ShowingInsights) {
        render_insights_overlay(frame, app);
    }

    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame, app);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.config.display_name.as_deref() {
        Some(name) => format!("  Vitalog - {}", name),
        None => "  Vitalog".to_string(),
    };
    let help_hint = "[?] Help";
    let trail = app.router.breadcrumbs.join(" > ");

    let width = area.width as usize;
    let center_start = width.saturating_sub(trail.len()) / 2;
    let left_pad = center_start.saturating_sub(title.len());
    let right_start = center_start + trail.len();
    let right_pad = width
        .saturating_sub(right_start)
        .saturating_sub(help_hint.len() + 2);

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(left_pad)),
        Span::styled(trail, styles::muted_style()),
        Span::raw(" ".repeat(right_pad)),
        Span::styled(help_hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(title_line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let labels = [
        (PageId::Home, "[1]Home"),
        (PageId::Physical, "[2]Phys"),
        (PageId::Mental, "[3]Ment"),
        (PageId::Financial, "[4]Fin"),
        (PageId::Family, "[5]Fam"),
        (PageId::Professional, "[6]Pro"),
        (PageId::Social, "[7]Soc"),
        (PageId::Spiritual, "[8]Spi"),
        (PageId::Preventive, "[9]Prev"),
        (PageId::DailyPlan, "[0]Plan"),
        (PageId::Reflections, "Notes"),
        (PageId::Sleep, "Sleep"),
    ];
    let top_level = app.router.current.top_level();

    let mut spans = vec![Span::raw(" ")];
    for (i, (page, label)) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        if *page == top_level {
            spans.push(Span::styled(*label, styles::tab_style(true)));
        } else {
            spans.push(Span::styled(*label, styles::muted_style()));
        }
    }

    let line = Line::from(spans);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(dim) = app.router.current.dimension() {
        goals::render(frame, app, dim, area);
        return;
    }
    match app.router.current {
        PageId::Home => home::render(frame, app, area),
        PageId::Preventive => preventive::render(frame, app, area),
        PageId::DailyPlan => planner::render(frame, app, area),
        PageId::Reflections => reflections::render(frame, app, area),
        // Content-only page
        _ => content::render(
            frame,
            &app.content_body,
            app.content_scroll,
            app.router.current.title(),
            true,
            area,
        ),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (left_text, left_style) = match app.notices.current() {
        Some(notice) => (
            format!(" {} ", notice.text),
            styles::severity_style(notice.severity),
        ),
        None => (format!(" {} ", page_hints(app)), styles::muted_style()),
    };
    let right_text = format!(" Level {} | [?] help | [q]uit ", app.game.xp.level);
    let center_text = if app.ai_busy {
        "AI thinking...".to_string()
    } else {
        String::new()
    };

    let width = area.width as usize;

    if center_text.is_empty() {
        let padding_len = width
            .saturating_sub(left_text.len())
            .saturating_sub(right_text.len());
        let status_line = Line::from(vec![
            Span::styled(left_text, left_style),
            Span::raw(" ".repeat(padding_len)),
            Span::styled(right_text, styles::muted_style()),
        ]);
        let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
        frame.render_widget(paragraph, area);
    } else {
        // Center the AI indicator absolutely, regardless of left/right content
        let center_start = (width.saturating_sub(center_text.len())) / 2;
        let left_pad = center_start.saturating_sub(left_text.len());
        let right_start = center_start + center_text.len();
        let right_pad = width
            .saturating_sub(right_start)
            .saturating_sub(right_text.len());

        let status_line = Line::from(vec![
            Span::styled(left_text, left_style),
            Span::raw(" ".repeat(left_pad)),
            Span::styled(center_text, styles::search_style()),
            Span::raw(" ".repeat(right_pad)),
            Span::styled(right_text, styles::muted_style()),
        ]);
        let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
        frame.render_widget(paragraph, area);
    }
}

fn page_hints(app: &App) -> &'static str {
    if let Some(dim) = app.router.current.dimension() {
        if matches!(app.focus, Focus::Assets) {
            return "[a]dd asset | [d]elete | [j/k] select | [Tab] focus";
        }
        let moving = app
            .pages
            .dimension(dim)
            .is_some_and(|p| p.mode == GoalMode::Moving);
        if moving {
            return "[j/k] carry | [Enter] drop | [Esc] cancel";
        }
        return "[space] toggle | [a]dd | [e]dit | [d]el | [m]ove | [g] suggest | [p] plan";
    }
    match app.router.current {
        PageId::Home => "[Enter] open | [j/k] select",
        PageId::DailyPlan => "[space] done | [a]dd | [e]dit | [d]el | [[/]] day | [t]oday",
        PageId::Reflections => "[a]dd | [e]dit | [d]el | [/] search | [c/r/s] filters | [g] insights",
        PageId::Preventive => "[s]ection | [e] record | [j/k] select",
        _ => "[j/k] scroll | [Esc] back",
    }
}

// ===== Form overlays =====

fn render_form_overlays(frame: &mut Frame, app: &App) {
    if let Some(dim) = app.router.current.dimension() {
        if let Some(page) = app.pages.dimension(dim) {
            match page.mode {
                GoalMode::Adding => render_goal_prompt(frame, "Add a goal", &page.input),
                GoalMode::Editing => render_goal_prompt(frame, "Edit the goal", &page.input),
                _ => {}
            }
        }
        if dim == crate::models::Dimension::Financial {
            if let Some(panel) = app.pages.assets() {
                if panel.mode == AssetMode::Adding {
                    render_asset_form(frame, panel);
                }
            }
        }
        return;
    }

    match app.router.current {
        PageId::DailyPlan => {
            if let Some(page) = app.pages.planner() {
                match &page.mode {
                    PlanMode::Form => render_task_form(frame, page),
                    PlanMode::ConfirmDelete(id) => {
                        let what = page
                            .plan
                            .tasks
                            .iter()
                            .find(|t| t.id == *id)
                            .map(|t| t.description.clone())
                            .unwrap_or_default();
                        render_confirm_overlay(frame, "Delete this task?", &what);
                    }
                    PlanMode::Browse => {}
                }
            }
        }
        PageId::Reflections => {
            if let Some(page) = app.pages.reflections() {
                match &page.mode {
                    ReflectMode::Form => render_reflection_form(frame, page),
                    ReflectMode::ConfirmDelete(id) => {
                        let what = page
                            .reflections
                            .iter()
                            .find(|r| r.id == *id)
                            .map(|r| r.title.clone())
                            .unwrap_or_default();
                        render_confirm_overlay(frame, "Delete this reflection?", &what);
                    }
                    _ => {}
                }
            }
        }
        PageId::Preventive => {
            if let Some(page) = app.pages.preventive() {
                match page.mode {
                    PreventiveMode::ProfileForm => render_profile_form(frame, page),
                    PreventiveMode::DoseForm => render_dose_form(frame, page),
                    PreventiveMode::ReadingForm => render_reading_form(frame, page),
                    PreventiveMode::Browse => {}
                }
            }
        }
        _ => {}
    }
}

fn render_goal_prompt(frame: &mut Frame, heading: &str, input: &str) {
    let area = centered_rect_fixed(56, 7, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(format!(" {}", heading), styles::title_style())),
        Line::from(""),
        form_field("Goal", input, true, 36),
        Line::from(""),
        keys_hint(&[("Enter", "save"), ("Esc", "cancel")]),
    ];

    frame.render_widget(overlay_paragraph(lines), area);
}

fn render_task_form(frame: &mut Frame, page: &crate::pages::planner::PlannerPage) {
    let area = centered_rect_fixed(56, 12, frame.area());
    frame.render_widget(Clear, area);

    let form = &page.form;
    let heading = if form.editing_id.is_some() {
        "Edit the task"
    } else {
        "Add a task"
    };
    let lines = vec![
        Line::from(Span::styled(format!(" {}", heading), styles::title_style())),
        Line::from(""),
        form_field(
            "Description",
            &form.description,
            form.field == TaskField::Description,
            32,
        ),
        form_field("Start (HH:MM)", &form.start, form.field == TaskField::Start, 8),
        form_field("End (HH:MM)", &form.end, form.field == TaskField::End, 8),
        arrow_field(
            "Category",
            &form.category.to_string(),
            form.field == TaskField::Category,
        ),
        Line::from(""),
        keys_hint(&[
            ("Tab", "next field"),
            ("Enter", "save"),
            ("Esc", "cancel"),
        ]),
    ];

    frame.render_widget(overlay_paragraph(lines), area);
}

fn render_reflection_form(frame: &mut Frame, page: &crate::pages::reflections::ReflectionsPage) {
    let area = centered_rect_fixed(60, 11, frame.area());
    frame.render_widget(Clear, area);

    let form = &page.form;
    let heading = if form.editing_id.is_some() {
        "Edit the reflection"
    } else {
        "Write a reflection"
    };
    let lines = vec![
        Line::from(Span::styled(format!(" {}", heading), styles::title_style())),
        Line::from(""),
        arrow_field(
            "Category",
            form.category.title(),
            form.field == ReflectField::Category,
        ),
        form_field("Title", &form.title, form.field == ReflectField::Title, 36),
        form_field("Text", &form.text, form.field == ReflectField::Text, 36),
        Line::from(""),
        keys_hint(&[
            ("Tab", "next field"),
            ("Enter", "save"),
            ("Esc", "cancel"),
        ]),
    ];

    frame.render_widget(overlay_paragraph(lines), area);
}

fn render_asset_form(frame: &mut Frame, panel: &crate::pages::finance::AssetPanel) {
    let area = centered_rect_fixed(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let form = &panel.form;
    let lines = vec![
        Line::from(Span::styled(" Track an asset", styles::title_style())),
        Line::from(""),
        form_field("Name", &form.name, form.field == AssetField::Name, 32),
        form_field(
            "Purchased",
            &form.purchased,
            form.field == AssetField::Purchased,
            12,
        ),
        Line::from(""),
        keys_hint(&[
            ("Tab", "next field"),
            ("Enter", "save"),
            ("Esc", "cancel"),
        ]),
    ];

    frame.render_widget(overlay_paragraph(lines), area);
}

fn render_profile_form(frame: &mut Frame, page: &crate::pages::preventive::PreventivePage) {
    let area = centered_rect_fixed(56, 11, frame.area());
    frame.render_widget(Clear, area);

    let form = &page.profile_form;
    let sex = match form.sex {
        Some(Sex::Male) => "Male",
        Some(Sex::Female) => "Female",
        None => "-",
    };
    let lines = vec![
        Line::from(Span::styled(" Edit the profile", styles::title_style())),
        Line::from(""),
        form_field(
            "Birth date",
            &form.birth_date,
            form.field == ProfileField::BirthDate,
            12,
        ),
        arrow_field("Sex", sex, form.field == ProfileField::Sex),
        form_field(
            "Weight (kg)",
            &form.weight,
            form.field == ProfileField::Weight,
            8,
        ),
        Line::from(""),
        keys_hint(&[
            ("Tab", "next field"),
            ("Enter", "save"),
            ("Esc", "cancel"),
        ]),
    ];

    frame.render_widget(overlay_paragraph(lines), area);
}

fn render_dose_form(frame: &mut Frame, page: &crate::pages::preventive::PreventivePage) {
    let area = centered_rect_fixed(56, 8, frame.area());
    frame.render_widget(Clear, area);

    let vaccine = &VACCINES[page.vaccine_selection];
    let lines = vec![
        Line::from(Span::styled(
            format!(" Record a dose - {}", vaccine.name),
            styles::title_style(),
        )),
        Line::from(""),
        form_field("Date", &page.dose_form.date, true, 12),
        Line::from(""),
        keys_hint(&[("Enter", "save"), ("Esc", "cancel")]),
    ];

    frame.render_widget(overlay_paragraph(lines), area);
}

fn render_reading_form(frame: &mut Frame, page: &crate::pages::preventive::PreventivePage) {
    let area = centered_rect_fixed(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let indicator = &INDICATORS[page.indicator_selection];
    let form = &page.reading_form;
    let lines = vec![
        Line::from(Span::styled(
            format!(" Record a reading - {} ({})", indicator.name, indicator.unit),
            styles::title_style(),
        )),
        Line::from(""),
        form_field("Value", &form.value, form.field == ReadingField::Value, 10),
        form_field("Date", &form.date, form.field == ReadingField::Date, 12),
        Line::from(""),
        keys_hint(&[
            ("Tab", "next field"),
            ("Enter", "save"),
            ("Esc", "cancel"),
        ]),
    ];

    frame.render_widget(overlay_paragraph(lines), area);
}

fn render_confirm_overlay(frame: &mut Frame, question: &str, what: &str) {
    let area = centered_rect_fixed(46, 8, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("   {}", question),
            styles::highlight_style(),
        )),
        Line::from(Span::styled(format!("   {}", what), styles::muted_style())),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to delete, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to keep", styles::muted_style()),
        ]),
    ];

    frame.render_widget(overlay_paragraph(lines), area);
}

// ===== App-level overlays =====

fn render_goto_overlay(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(" Go to page", styles::title_style())),
        Line::from(""),
        form_field("Page", &app.goto_input, true, 28),
        Line::from(Span::styled(
            "  e.g. physical, daily-plan, sleep-hygiene",
            styles::muted_style(),
        )),
        keys_hint(&[("Enter", "go"), ("Esc", "cancel")]),
    ];

    frame.render_widget(overlay_paragraph(lines), area);
}

fn render_insights_overlay(frame: &mut Frame, app: &App) {
    let full = frame.area();
    let width = full.width.saturating_sub(8).min(76);
    let height = full.height.saturating_sub(6).min(24);
    let area = centered_rect_fixed(width, height, full);
    frame.render_widget(Clear, area);

    let Some(page) = app.pages.reflections() else {
        return;
    };
    let text = page.insights.as_deref().unwrap_or("No analysis yet.");

    let mut lines = vec![
        Line::from(Span::styled(" Reflection insights", styles::title_style())),
        Line::from(""),
    ];
    for raw in text.lines() {
        lines.push(Line::from(raw.to_string()));
    }

    let block = Block::default()
        .title(" [j/k] scroll | [Esc] close ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((page.insights_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_help_overlay(frame: &mut Frame, _app: &App) {
    // Fixed size dialog matching the quit overlay
    let area = centered_rect_fixed(54, 30, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");

    let help_text = vec![
        // ASCII Art Logo (centered for 54-width box)
        Line::from(Span::styled(
            "           ╦  ╦╦╔╦╗╔═╗╦  ╔═╗╔═╗",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "           ╚╗╔╝║ ║ ╠═╣║  ║ ║║ ╦",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "            ╚╝ ╩ ╩ ╩ ╩╩═╝╚═╝╚═╝",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            format!("              version {}", version),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Navigation", styles::highlight_style())),
        Line::from(vec![
            Span::styled("  1-9, 0    ", styles::help_key_style()),
            Span::styled("Jump to a page", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  ←/→       ", styles::help_key_style()),
            Span::styled("Previous/next page", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  :         ", styles::help_key_style()),
            Span::styled("Go to a page or section by name", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  Tab       ", styles::help_key_style()),
            Span::styled("Switch focus (list ↔ content)", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  j/k, ↑/↓  ", styles::help_key_style()),
            Span::styled("Move in the list or scroll", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  Esc       ", styles::help_key_style()),
            Span::styled("Back to the parent page", styles::help_desc_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(" Goal pages", styles::highlight_style())),
        Line::from(vec![
            Span::styled("  Space     ", styles::help_key_style()),
            Span::styled("Toggle done (earns XP and medals)", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  a/e/d     ", styles::help_key_style()),
            Span::styled("Add, edit, delete a goal", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  m         ", styles::help_key_style()),
            Span::styled("Pick up a goal; Enter drops it", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  g         ", styles::help_key_style()),
            Span::styled("AI goal suggestion", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  p         ", styles::help_key_style()),
            Span::styled("Send the goal to the daily plan", styles::help_desc_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(" Elsewhere", styles::highlight_style())),
        Line::from(vec![
            Span::styled("  [/]/t     ", styles::help_key_style()),
            Span::styled("Planner: previous/next day, today", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  //c/r/s   ", styles::help_key_style()),
            Span::styled("Reflections: search and filters", styles::help_desc_style()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("       Press ", styles::muted_style()),
            Span::styled("?", styles::help_key_style()),
            Span::styled(" or ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to close", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(help_text).block(block);

    frame.render_widget(paragraph, area);
}

fn render_quit_overlay(frame: &mut Frame) {
    // Fixed size dialog matching the help overlay
    let area = centered_rect_fixed(46, 10, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "       ╦  ╦╦╔╦╗╔═╗╦  ╔═╗╔═╗",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "       ╚╗╔╝║ ║ ╠═╣║  ║ ║║ ╦",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "        ╚╝ ╩ ╩ ╩ ╩╩═╝╚═╝╚═╝",
            styles::title_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "   Are you sure you want to quit?",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}

// ===== Overlay building blocks =====

fn overlay_paragraph(lines: Vec<Line<'static>>) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());
    Paragraph::new(lines).block(block)
}

/// One labelled input line. The focused field shows a cursor block; long
/// values scroll so the tail stays visible.
fn form_field(label: &str, value: &str, focused: bool, width: usize) -> Line<'static> {
    let style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let window = tail_window(value, width);
    let display = format!("{:<width$}", window, width = width);
    let cursor = if focused { "▌" } else { "" };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<14}", format!("{}:", label)), styles::muted_style()),
        Span::styled("[", styles::muted_style()),
        Span::styled(format!("{}{}", display, cursor), style),
        Span::styled("]", styles::muted_style()),
    ])
}

/// A choice field cycled with the arrow keys.
fn arrow_field(label: &str, value: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<14}", format!("{}:", label)), styles::muted_style()),
        Span::styled(format!("< {} >", value), style),
        if focused {
            Span::styled("  ←/→ change", styles::muted_style())
        } else {
            Span::raw("")
        },
    ])
}

fn keys_hint(keys: &[(&str, &str)]) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, (key, what)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        spans.push(Span::styled(format!("[{}]", key), styles::help_key_style()));
        spans.push(Span::styled(format!(" {}", what), styles::muted_style()));
    }
    Line::from(spans)
}

/// Keep the end of an overlong value visible in a fixed-width field.
fn tail_window(value: &str, width: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= width {
        value.to_string()
    } else {
        chars[chars.len() - width..].iter().collect()
    }
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
