use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use crate::pages::reflections::ReflectMode;
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(chunks[0]);

    render_filters(frame, app, left[0]);
    render_entry_list(frame, app, left[1]);
    render_detail(frame, app, chunks[1]);
}

fn render_filters(frame: &mut Frame, app: &App, area: Rect) {
    let Some(page) = app.pages.reflections() else {
        return;
    };
    let searching = page.mode == ReflectMode::Search;

    let search_text = if page.filters.search.is_empty() && !searching {
        "-".to_string()
    } else if searching {
        format!("{}_", page.filters.search)
    } else {
        page.filters.search.clone()
    };
    let category = page
        .filters
        .category
        .map(|c| c.title())
        .unwrap_or("All categories");

    let line = Line::from(vec![
        Span::styled("/ ", styles::help_key_style()),
        Span::styled(
            search_text,
            if searching {
                styles::search_style()
            } else {
                styles::list_item_style()
            },
        ),
        Span::styled("  c ", styles::help_key_style()),
        Span::raw(category),
        Span::styled("  r ", styles::help_key_style()),
        Span::raw(page.range.label()),
        Span::styled("  s ", styles::help_key_style()),
        Span::raw(page.sort.label()),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(" Filters ")
            .title_style(styles::title_style())
            .borders(Borders::ALL)
            .border_style(styles::border_style(searching)),
    );
    frame.render_widget(paragraph, area);
}

fn render_entry_list(frame: &mut Frame, app: &App, area: Rect) {
    let Some(page) = app.pages.reflections() else {
        return;
    };
    let focused = matches!(app.focus, Focus::List);
    let entries = page.filtered();

    let mut items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let line = Line::from(format!(
                "{}  [{}]  {}",
                entry.date,
                entry.category.slug(),
                entry.title
            ));
            let style = if i == page.selection && focused {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    if items.is_empty() {
        let text = if page.reflections.is_empty() {
            "No reflections yet. Press a to write one."
        } else {
            "Nothing matches the filters."
        };
        items.push(ListItem::new(Line::from(text)).style(styles::muted_style()));
    }

    let block = Block::default()
        .title(format!(
            " Reflections ({} of {}) ",
            entries.len(),
            page.reflections.len()
        ))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(page.selection));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let Some(page) = app.pages.reflections() else {
        return;
    };

    let lines = match page.selected() {
        Some(entry) => {
            let mut lines = vec![
                Line::from(Span::styled(entry.title.clone(), styles::title_style())),
                Line::from(Span::styled(
                    format!("{} - {}", entry.date, entry.category.title()),
                    styles::muted_style(),
                )),
                Line::from(""),
            ];
            for text_line in entry.text.lines() {
                lines.push(Line::from(text_line.to_string()));
            }
            lines.push(Line::from(""));
            if page.awaiting_insights {
                lines.push(Line::from(Span::styled(
                    "Analyzing the filtered entries...",
                    styles::search_style(),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    "g: AI insights on the filtered entries",
                    styles::muted_style(),
                )));
            }
            lines
        }
        None => vec![Line::from(Span::styled(
            "Select a reflection from the list",
            styles::muted_style(),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Entry ")
                .title_style(styles::title_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(false)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
