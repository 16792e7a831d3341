use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const GRID_HINTS: &str =
    " Arrows: Move │ Enter: Details │ a: Add │ c/Tab: Category │ r: Reload │ q: Quit";
const DETAIL_HINTS: &str = " Enter/a: Add to cart │ Esc/x: Close";
const PICKER_HINTS: &str = " Up/Down: Move │ Enter: Select │ 1-9: Jump │ Esc: Close";

/// Which key set the footer advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterMode {
    Grid,
    Detail,
    Picker,
}

pub struct Footer {
    mode: FooterMode,
}

impl Footer {
    pub fn new(mode: FooterMode) -> Self {
        Self { mode }
    }

    pub fn hints(&self) -> &'static str {
        match self.mode {
            FooterMode::Grid => GRID_HINTS,
            FooterMode::Detail => DETAIL_HINTS,
            FooterMode::Picker => PICKER_HINTS,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Unicode separators: pad by char count
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
