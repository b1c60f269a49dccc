use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Gauge, List, ListItem, ListState},
    Frame,
};

use crate::app::{App, Focus};
use crate::pages::home::HomePage;
use crate::ui::styles;
use crate::ui::views::content;
use crate::utils::today_key;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(chunks[0]);

    render_cards(frame, app, left[0]);
    render_progress(frame, app, left[1]);
    content::render(
        frame,
        &app.content_body,
        app.content_scroll,
        "Welcome",
        matches!(app.focus, Focus::Content),
        chunks[1],
    );
}

fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let focused = matches!(app.focus, Focus::List);
    let today = today_key();

    let items: Vec<ListItem> = HomePage::cards()
        .into_iter()
        .enumerate()
        .map(|(i, page)| {
            let medal = page
                .dimension()
                .filter(|dim| app.game.has_medal(&today, *dim))
                .map(|_| " [medal]")
                .unwrap_or("");
            let line = Line::from(format!("{}{}", page.title(), medal));

            let style = if i == app.pages.home.selection && focused {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let medals_today = app.game.medals_for(&today).len();
    let block = Block::default()
        .title(format!(" Pages (medals today: {}) ", medals_today))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.pages.home.selection));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let xp = &app.game.xp;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .title_style(styles::title_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(false)),
        )
        .gauge_style(styles::gauge_style())
        .percent(u16::from(xp.percent()))
        .label(format!(
            "Level {}  ({}/{} XP)",
            xp.level, xp.current_xp, xp.xp_to_next_level
        ));
    frame.render_widget(gauge, area);
}
