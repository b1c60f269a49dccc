use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::models::{Sex, INDICATORS, VACCINES};
use crate::pages::preventive::{PreventivePage, PreventiveSection};
use crate::ui::styles;
use crate::ui::views::content;
use crate::utils::format_day;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(4)])
        .split(chunks[0]);

    if let Some(page) = app.pages.preventive() {
        render_overview(frame, page, left[0]);
        render_section(frame, app, page, left[1]);
    }
    content::render(
        frame,
        &app.content_body,
        app.content_scroll,
        app.router.current.title(),
        matches!(app.focus, Focus::Content),
        chunks[1],
    );
}

fn render_overview(frame: &mut Frame, page: &PreventivePage, area: Rect) {
    let today = chrono::Local::now().date_naive();
    let (covered, vaccine_total) = page.vaccine_coverage(today);
    let (fresh, reading_total) = page.reading_coverage(today);

    let profile_line = if page.profile == Default::default() {
        Line::from(Span::styled(
            "Profile not set. Press e in the Profile section.",
            styles::muted_style(),
        ))
    } else {
        let age = page
            .age_years(today)
            .map(|a| format!("age {}", a))
            .unwrap_or_else(|| "age -".to_string());
        let sex = match page.profile.sex {
            Some(Sex::Male) => "male",
            Some(Sex::Female) => "female",
            None => "-",
        };
        let weight = page
            .profile
            .weight_kg
            .map(|w| format!("{} kg", w))
            .unwrap_or_else(|| "- kg".to_string());
        Line::from(format!("{}, {}, {}", age, sex, weight))
    };

    let coverage_line = Line::from(vec![
        Span::raw("Vaccines up to date: "),
        Span::styled(
            format!("{}/{}", covered, vaccine_total),
            styles::success_style(),
        ),
        Span::raw("   Readings under a year old: "),
        Span::styled(
            format!("{}/{}", fresh, reading_total),
            styles::success_style(),
        ),
    ]);

    let paragraph = Paragraph::new(vec![profile_line, coverage_line]).block(
        Block::default()
            .title(" Overview ")
            .title_style(styles::title_style())
            .borders(Borders::ALL)
            .border_style(styles::border_style(false)),
    );
    frame.render_widget(paragraph, area);
}

fn render_section(frame: &mut Frame, app: &App, page: &PreventivePage, area: Rect) {
    match page.section {
        PreventiveSection::Profile => render_profile(frame, app, page, area),
        PreventiveSection::Vaccines => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(4), Constraint::Length(4)])
                .split(area);
            render_vaccine_list(frame, app, page, chunks[0]);
            render_vaccine_detail(frame, page, chunks[1]);
        }
        PreventiveSection::Indicators => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(4), Constraint::Length(4)])
                .split(area);
            render_indicator_list(frame, app, page, chunks[0]);
            render_indicator_detail(frame, page, chunks[1]);
        }
    }
}

fn render_profile(frame: &mut Frame, app: &App, page: &PreventivePage, area: Rect) {
    let today = chrono::Local::now().date_naive();
    let birth = match page.profile.birth_date {
        Some(date) => match page.age_years(today) {
            Some(age) => format!("{} (age {})", format_day(date), age),
            None => format_day(date),
        },
        None => "-".to_string(),
    };
    let sex = match page.profile.sex {
        Some(Sex::Male) => "Male",
        Some(Sex::Female) => "Female",
        None => "-",
    };
    let weight = page
        .profile
        .weight_kg
        .map(|w| format!("{} kg", w))
        .unwrap_or_else(|| "-".to_string());
    let water = page
        .profile
        .hydration_ml()
        .map(|ml| format!("{} ml/day", ml))
        .unwrap_or_else(|| "set a weight first".to_string());

    let lines = vec![
        Line::from(vec![
            Span::styled("Birth date: ", styles::highlight_style()),
            Span::raw(birth),
        ]),
        Line::from(vec![
            Span::styled("Sex: ", styles::highlight_style()),
            Span::raw(sex),
        ]),
        Line::from(vec![
            Span::styled("Weight: ", styles::highlight_style()),
            Span::raw(weight),
        ]),
        Line::from(vec![
            Span::styled("Water target: ", styles::highlight_style()),
            Span::raw(water),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "e: edit profile   s: next section",
            styles::muted_style(),
        )),
    ];

    let focused = matches!(app.focus, Focus::List);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Profile ")
            .title_style(styles::title_style())
            .borders(Borders::ALL)
            .border_style(styles::border_style(focused)),
    );
    frame.render_widget(paragraph, area);
}

fn render_vaccine_list(frame: &mut Frame, app: &App, page: &PreventivePage, area: Rect) {
    let focused = matches!(app.focus, Focus::List);
    let today = chrono::Local::now().date_naive();

    let items: Vec<ListItem> = VACCINES
        .iter()
        .enumerate()
        .map(|(i, vaccine)| {
            let last = page.vaccine_dates.get(vaccine.id).copied();
            let status = vaccine.status(last, today);
            let line = Line::from(format!("{:<40} {}", vaccine.name, status.label()));

            let style = if i == page.vaccine_selection && focused {
                styles::selected_style()
            } else {
                styles::vaccine_style(status)
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let block = Block::default()
        .title(format!(" Vaccines ({}) ", VACCINES.len()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(page.vaccine_selection));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_vaccine_detail(frame: &mut Frame, page: &PreventivePage, area: Rect) {
    let vaccine = &VACCINES[page.vaccine_selection];
    let last = page.vaccine_dates.get(vaccine.id).copied();

    let last_text = last.map(format_day).unwrap_or_else(|| "-".to_string());
    let due_text = vaccine
        .due_date(last)
        .map(format_day)
        .unwrap_or_else(|| "-".to_string());

    let lines = vec![
        Line::from(vaccine.note),
        Line::from(vec![
            Span::styled("Last dose: ", styles::highlight_style()),
            Span::raw(last_text),
            Span::styled("   Next due: ", styles::highlight_style()),
            Span::raw(due_text),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" e: record a dose ")
            .borders(Borders::ALL)
            .border_style(styles::border_style(false)),
    );
    frame.render_widget(paragraph, area);
}

fn render_indicator_list(frame: &mut Frame, app: &App, page: &PreventivePage, area: Rect) {
    let focused = matches!(app.focus, Focus::List);
    let sex = page.profile.sex;

    let items: Vec<ListItem> = INDICATORS
        .iter()
        .enumerate()
        .map(|(i, indicator)| {
            let (reading, zone_label) = match page.latest_reading(indicator.id) {
                Some(entry) => {
                    let zone = indicator.classify(entry.value, sex);
                    (
                        format!("{} {}", fmt_value(entry.value), indicator.unit),
                        zone.map(|z| z.status.label()).unwrap_or("off the scale"),
                    )
                }
                None => ("-".to_string(), ""),
            };
            let line = Line::from(format!(
                "{:<22} {:>14}  {}",
                indicator.name, reading, zone_label
            ));

            let style = if i == page.indicator_selection && focused {
                styles::selected_style()
            } else {
                match page
                    .latest_reading(indicator.id)
                    .and_then(|e| indicator.classify(e.value, sex))
                {
                    Some(zone) => styles::zone_style(zone.status),
                    None => styles::muted_style(),
                }
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let block = Block::default()
        .title(format!(" Biomarkers ({}) ", INDICATORS.len()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(page.indicator_selection));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_indicator_detail(frame: &mut Frame, page: &PreventivePage, area: Rect) {
    let indicator = &INDICATORS[page.indicator_selection];
    let today = chrono::Local::now().date_naive();

    let lines = match page.latest_reading(indicator.id) {
        Some(entry) => {
            let tip = indicator
                .classify(entry.value, page.profile.sex)
                .map(|z| z.tip)
                .unwrap_or("Outside the reference zones; worth discussing.");
            let stale = if crate::models::reading_is_stale(entry.date, today) {
                Span::styled(" (over a year old)", styles::error_style())
            } else {
                Span::raw("")
            };
            vec![
                Line::from(tip),
                Line::from(vec![
                    Span::styled("Recorded: ", styles::highlight_style()),
                    Span::raw(format_day(entry.date)),
                    stale,
                ]),
            ]
        }
        None => vec![Line::from(Span::styled(
            "No reading recorded yet.",
            styles::muted_style(),
        ))],
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" e: record a reading ")
            .borders(Borders::ALL)
            .border_style(styles::border_style(false)),
    );
    frame.render_widget(paragraph, area);
}

fn fmt_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
