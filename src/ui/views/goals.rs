use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::models::Dimension;
use crate::pages::dimension::GoalMode;
use crate::ui::styles;
use crate::ui::views::{content, finance};
use crate::utils::today_key;

pub fn render(frame: &mut Frame, app: &App, dim: Dimension, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_goal_list(frame, app, dim, chunks[0]);

    // The financial page stacks the asset registry above its guide text
    if dim == Dimension::Financial {
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[1]);
        finance::render_assets(frame, app, right[0]);
        render_content_pane(frame, app, right[1]);
    } else {
        render_content_pane(frame, app, chunks[1]);
    }
}

fn render_content_pane(frame: &mut Frame, app: &App, area: Rect) {
    content::render(
        frame,
        &app.content_body,
        app.content_scroll,
        app.router.current.title(),
        matches!(app.focus, Focus::Content),
        area,
    );
}

fn render_goal_list(frame: &mut Frame, app: &App, dim: Dimension, area: Rect) {
    let Some(page) = app.pages.dimension(dim) else {
        return;
    };

    // The physical page keeps the water target in view under the list
    let (list_area, footer_area) = if dim == Dimension::Physical {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(2)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let focused = matches!(app.focus, Focus::List);
    let goals = page.display_goals();

    let mut items: Vec<ListItem> = goals
        .iter()
        .enumerate()
        .map(|(i, goal)| {
            let marker = if goal.completed { "[x]" } else { "[ ]" };
            let line = Line::from(format!("{} {}", marker, goal.text));

            let style = if page.is_flashing(&goal.id) {
                styles::flash_style()
            } else if page.mode == GoalMode::Moving && i == page.selection {
                styles::grabbed_style()
            } else if i == page.selection && focused {
                styles::selected_style()
            } else if goal.completed {
                styles::completed_style()
            } else {
                styles::list_item_style()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    if items.is_empty() {
        items.push(
            ListItem::new(Line::from("No goals yet. Press a to add one."))
                .style(styles::muted_style()),
        );
    }

    let medal = if app.game.has_medal(&today_key(), dim) {
        " [medal earned]"
    } else {
        ""
    };
    let title = match page.mode {
        GoalMode::Moving => format!(" Goals ({}) - moving, Enter to drop ", goals.len()),
        _ => format!(" Goals ({}){} ", goals.len(), medal),
    };

    let block = Block::default()
        .title(title)
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(page.selection));

    frame.render_stateful_widget(list, list_area, &mut state);

    if let Some(footer_area) = footer_area {
        render_hydration(frame, app, footer_area);
    }
}

fn render_hydration(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app
        .pages
        .preventive()
        .and_then(|p| p.profile.hydration_ml().map(|ml| (ml, p.profile.weight_kg)))
    {
        Some((ml, weight)) => Line::from(vec![
            Span::styled("Water target: ", styles::highlight_style()),
            Span::raw(format!(
                "{} ml/day ({} kg at 35 ml/kg)",
                ml,
                weight.unwrap_or_default()
            )),
        ]),
        None => Line::from(Span::styled(
            "Set your weight in the preventive profile for a water target",
            styles::muted_style(),
        )),
    };
    let paragraph =
        Paragraph::new(line).block(Block::default().borders(Borders::TOP).border_style(
            styles::border_style(false),
        ));
    frame.render_widget(paragraph, area);
}
