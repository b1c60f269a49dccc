//! Content pane shared by every page.
//!
//! Page templates are markdown-ish text. Rendering understands the small
//! subset the templates use; anything else passes through as plain text.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::styles;
use crate::utils::heading_slug;

/// Turn a template body into styled lines.
pub fn markdown_lines(body: &str) -> Vec<Line<'static>> {
    body.lines()
        .map(|raw| {
            if let Some(rest) = raw.strip_prefix("### ") {
                Line::from(Span::styled(rest.to_string(), styles::subheading_style()))
            } else if let Some(rest) = raw.strip_prefix("## ") {
                Line::from(Span::styled(rest.to_string(), styles::heading_style()))
            } else if let Some(rest) = raw.strip_prefix("# ") {
                Line::from(Span::styled(rest.to_string(), styles::title_style()))
            } else if let Some(rest) = raw.strip_prefix("- ") {
                Line::from(vec![
                    Span::styled("  - ", styles::muted_style()),
                    Span::raw(rest.to_string()),
                ])
            } else if let Some(rest) = raw.strip_prefix("> ") {
                Line::from(Span::styled(format!("  {rest}"), styles::muted_style()))
            } else {
                Line::from(Span::raw(raw.to_string()))
            }
        })
        .collect()
}

/// Scroll offset that puts the section heading matching the anchor token at
/// the top of the pane. An unmatched token leaves the page at the top.
pub fn anchor_scroll(body: &str, token: &str) -> u16 {
    for (i, line) in body.lines().enumerate() {
        if let Some(heading) = line.strip_prefix("## ") {
            if heading_slug(heading) == token {
                return i.min(u16::MAX as usize) as u16;
            }
        }
    }
    0
}

pub fn render(
    frame: &mut Frame,
    body: &str,
    scroll: u16,
    title: &str,
    focused: bool,
    area: Rect,
) {
    let paragraph = Paragraph::new(markdown_lines(body))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles::border_style(focused))
                .title(format!(" {title} ")),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "# Page\n\nIntro text.\n\n## First Section\n- a bullet\n\n## Sleep Hygiene\nKeep the room dark.\n";

    #[test]
    fn test_anchor_scroll_finds_section_heading() {
        assert_eq!(anchor_scroll(BODY, "sleep-hygiene"), 7);
        assert_eq!(anchor_scroll(BODY, "first-section"), 4);
    }

    #[test]
    fn test_anchor_scroll_unknown_token_stays_at_top() {
        assert_eq!(anchor_scroll(BODY, "nowhere"), 0);
    }

    #[test]
    fn test_markdown_lines_keeps_line_count() {
        // Scroll offsets index into these lines, so the mapping must be 1:1
        assert_eq!(markdown_lines(BODY).len(), BODY.lines().count());
    }
}
