use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Gauge, List, ListItem, ListState},
    Frame,
};

use crate::app::{App, Focus};
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
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(chunks[0]);

    render_task_list(frame, app, left[0]);
    render_completion(frame, app, left[1]);
    content::render(
        frame,
        &app.content_body,
        app.content_scroll,
        app.router.current.title(),
        matches!(app.focus, Focus::Content),
        chunks[1],
    );
}

fn render_task_list(frame: &mut Frame, app: &App, area: Rect) {
    let Some(page) = app.pages.planner() else {
        return;
    };
    let focused = matches!(app.focus, Focus::List);
    let tasks = page.sorted_tasks();

    let mut items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let marker = if task.completed { "[x]" } else { "[ ]" };
            let time = if task.start_time.is_empty() && task.end_time.is_empty() {
                "unscheduled".to_string()
            } else {
                task.time_range()
            };
            let line = Line::from(format!(
                "{} {:<11} {} ({})",
                marker, time, task.description, task.category
            ));

            let style = if i == page.selection && focused {
                styles::selected_style()
            } else if task.completed {
                styles::completed_style()
            } else {
                styles::list_item_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    if items.is_empty() {
        items.push(
            ListItem::new(Line::from("Nothing planned. Press a to add a task."))
                .style(styles::muted_style()),
        );
    }

    let today = chrono::Local::now().date_naive();
    let day_marker = if page.date == today { " (today)" } else { "" };
    let block = Block::default()
        .title(format!(" {}{} ", format_day(page.date), day_marker))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(page.selection));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_completion(frame: &mut Frame, app: &App, area: Rect) {
    let Some(page) = app.pages.planner() else {
        return;
    };
    let percent = page.completion_percent();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Day Progress ")
                .title_style(styles::title_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(false)),
        )
        .gauge_style(styles::gauge_style())
        .percent(u16::from(percent))
        .label(format!("{}% of the plan done", percent));
    frame.render_widget(gauge, area);
}
