use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::{App, Focus};
use crate::ui::styles;
use crate::utils::format_day;

/// Asset registry pane on the financial page.
pub fn render_assets(frame: &mut Frame, app: &App, area: Rect) {
    let Some(panel) = app.pages.assets() else {
        return;
    };
    let focused = matches!(app.focus, Focus::Assets);
    let today = chrono::Local::now().date_naive();

    let mut items: Vec<ListItem> = panel
        .assets
        .iter()
        .enumerate()
        .map(|(i, asset)| {
            let due = asset.due_for_replacement(today);
            let replace_by = format_day(asset.replacement_date());
            let flag = if due { " [due]" } else { "" };
            let line = Line::from(format!(
                "{:<24} replace by {}{}",
                asset.name, replace_by, flag
            ));

            let style = if i == panel.selection && focused {
                styles::selected_style()
            } else if due {
                styles::error_style()
            } else {
                styles::list_item_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    if items.is_empty() {
        items.push(
            ListItem::new(Line::from("No assets tracked. Press a to add one."))
                .style(styles::muted_style()),
        );
    }

    let due_count = panel.due_count(today);
    let title = if due_count > 0 {
        format!(" Assets ({}, {} due) ", panel.assets.len(), due_count)
    } else {
        format!(" Assets ({}) ", panel.assets.len())
    };

    let block = Block::default()
        .title(title)
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(panel.selection));

    frame.render_stateful_widget(list, area, &mut state);
}
