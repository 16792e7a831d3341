//! Category picker popup.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER, STORE_GREEN};

const TITLE: &str = " Category ";
const HINT: &str = "Up/Down: Move  Enter: Select  Esc: Close";
const MIN_WIDTH: u16 = 30;

fn entry_text(index: usize, label: &str) -> String {
    if index < 9 {
        format!("{}. {}", index + 1, label)
    } else {
        format!("   {label}")
    }
}

/// Popup area for `labels`, centered on `body`. Rows start one below the
/// top border, in label order.
pub fn picker_rect(body: Rect, labels: &[String]) -> Rect {
    let content_width = labels
        .iter()
        .enumerate()
        .map(|(i, label)| entry_text(i, label).chars().count())
        .chain(std::iter::once(HINT.chars().count()))
        .max()
        .unwrap_or(0) as u16;
    let width = content_width.saturating_add(4).max(MIN_WIDTH);
    // entries, blank, hint, borders
    let height = (labels.len() as u16).saturating_add(4);
    centered_rect_by_size(body, width, height)
}

/// Maps a click inside the popup to an entry index.
pub fn picker_hit(area: Rect, labels: &[String], column: u16, row: u16) -> Option<usize> {
    if column <= area.x || column + 1 >= area.x + area.width {
        return None;
    }
    let first = area.y + 1;
    if row < first {
        return None;
    }
    let index = (row - first) as usize;
    (index < labels.len() && row + 1 < area.y + area.height).then_some(index)
}

/// Draws the picker with `highlight` marked and `selected` shown in bold.
pub fn render_picker(
    frame: &mut Frame,
    body: Rect,
    labels: &[String],
    highlight: usize,
    selected: usize,
) {
    let area = picker_rect(body, labels);
    let mut lines: Vec<Line> = labels
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let mut style = Style::default().fg(HEADER_TEXT);
            if idx == selected {
                style = style.fg(STORE_GREEN).add_modifier(Modifier::BOLD);
            }
            let line = Line::from(Span::styled(entry_text(idx, label), style));
            if idx == highlight {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        HINT,
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
    )));

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(TITLE, Style::default().fg(STORE_GREEN)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}
