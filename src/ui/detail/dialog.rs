//! Detail overlay rendering and geometry.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::catalog::Product;
use crate::images::ImageSlot;
use crate::ui::image_view::ImageView;
use crate::ui::layout::{truncate, wrap_text};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STORE_GREEN};

/// Percentage of the body width the dialog occupies.
const WIDTH_PERCENT: u16 = 90;
const IMAGE_ROWS: u16 = 8;
const CLOSE_LABEL: &str = "[x]";
const ADD_LABEL: &str = "[ Add to cart ]";

/// Where each part of the dialog lands on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLayout {
    pub outer: Rect,
    pub inner: Rect,
    pub image: Rect,
    pub close: Rect,
    pub add: Rect,
}

/// Lays out the dialog for `product` inside `body`. The height follows
/// the wrapped description and is capped to the body.
pub fn detail_layout(body: Rect, product: &Product) -> DetailLayout {
    let width = (body.width as u32 * WIDTH_PERCENT as u32 / 100) as u16;
    let inner_width = width.saturating_sub(2);
    let description_rows = wrap_text(&product.description, inner_width as usize).len() as u16;
    // image, blank, title, category, price, blank, description, blank, button
    let content_rows = IMAGE_ROWS + 5 + description_rows + 2;
    let height = (content_rows + 2).min(body.height);

    let outer = Rect {
        x: body.x + (body.width - width) / 2,
        y: body.y + (body.height - height) / 2,
        width,
        height,
    };
    let inner = Rect {
        x: outer.x.saturating_add(1),
        y: outer.y.saturating_add(1),
        width: inner_width,
        height: height.saturating_sub(2),
    };

    let image_width = (IMAGE_ROWS * 2).min(inner.width);
    let image = Rect {
        x: inner.x + (inner.width - image_width) / 2,
        y: inner.y,
        width: image_width,
        height: IMAGE_ROWS.min(inner.height),
    };

    let close_width = CLOSE_LABEL.chars().count() as u16;
    let close = Rect {
        x: (outer.x + outer.width).saturating_sub(close_width + 1),
        y: outer.y,
        width: close_width.min(outer.width),
        height: outer.height.min(1),
    };

    let add_width = (ADD_LABEL.chars().count() as u16).min(inner.width);
    let add = Rect {
        x: inner.x + (inner.width - add_width) / 2,
        y: (inner.y + inner.height).saturating_sub(1),
        width: add_width,
        height: inner.height.min(1),
    };

    DetailLayout {
        outer,
        inner,
        image,
        close,
        add,
    }
}

/// Renders the detail overlay on top of the grid.
pub fn render_detail_dialog(
    frame: &mut Frame,
    body: Rect,
    product: &Product,
    image: Option<&ImageSlot>,
) {
    let layout = detail_layout(body, product);
    if layout.inner.width == 0 || layout.inner.height == 0 {
        return;
    }

    frame.render_widget(Clear, layout.outer);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(block, layout.outer);
    frame.render_widget(
        Paragraph::new(Span::styled(CLOSE_LABEL, Style::default().fg(HEADER_TEXT))),
        layout.close,
    );

    frame.render_widget(ImageView::new(image), layout.image);

    let width = layout.inner.width as usize;
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            truncate(&product.title, width),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {} ", truncate(&product.category, width.saturating_sub(2))),
            Style::default().fg(ACTIVE_HIGHLIGHT).bg(MUTED_TEXT),
        )),
        Line::from(Span::styled(
            product.display_price(),
            Style::default()
                .fg(STORE_GREEN)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(
        wrap_text(&product.description, width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(MUTED_TEXT)))),
    );

    let text_area = Rect {
        y: layout.image.y + layout.image.height,
        height: layout
            .add
            .y
            .saturating_sub(layout.image.y + layout.image.height),
        ..layout.inner
    };
    frame.render_widget(Paragraph::new(lines), text_area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            ADD_LABEL,
            Style::default()
                .fg(ACTIVE_HIGHLIGHT)
                .bg(STORE_GREEN)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        layout.add,
    );
}
