use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STORE_GREEN};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Store name, active category, and a short listing status.
pub struct Header<'a> {
    category: Option<&'a str>,
    status: HeaderStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStatus {
    Idle,
    Loading,
    Items(usize),
    Failed,
}

impl<'a> Header<'a> {
    pub fn new(category: Option<&'a str>, status: HeaderStatus) -> Self {
        Self { category, status }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status_text, status_style) = match self.status {
            HeaderStatus::Idle => (String::new(), text_style),
            HeaderStatus::Loading => ("loading…".to_string(), text_style),
            HeaderStatus::Items(1) => ("1 item".to_string(), text_style),
            HeaderStatus::Items(count) => (format!("{count} items"), text_style),
            HeaderStatus::Failed => ("offline".to_string(), Style::default().fg(STATUS_ERROR)),
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "FakeStore",
                Style::default().fg(STORE_GREEN).add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(category) = self.category {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(category.to_string(), text_style));
        }
        if !status_text.is_empty() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(status_text, status_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
