//! Product grid: card geometry, the per-product card widget, and the
//! adapter that turns clicks on a card into select/add actions.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::catalog::Product;
use crate::images::ImageSlot;
use crate::ui::image_view::ImageView;
use crate::ui::layout::{contains, truncate};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STORE_GREEN,
};

/// Card height including borders: 5 image rows, title, category, price row.
pub const CARD_HEIGHT: u16 = 10;
const IMAGE_ROWS: u16 = 5;
const ADD_LABEL: &str = " + Add ";

/// Which part of a card was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    Body,
    AddButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHit {
    pub index: usize,
    pub target: RowTarget,
}

/// What the screen should do after a card interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum RowAction {
    Select(Product),
    Add(Product),
}

/// Placement of the visible cards for a list of `len` products.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    cells: Vec<(usize, Rect)>,
}

impl GridLayout {
    pub fn compute(area: Rect, columns: u16, len: usize, cursor: usize) -> Self {
        let columns = columns.max(1);
        if len == 0 || area.width == 0 || area.height == 0 {
            return Self { cells: Vec::new() };
        }
        let card_width = area.width / columns;
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        let total_rows = len.div_ceil(columns as usize);
        let first_row = first_visible_row(cursor / columns as usize, visible_rows, total_rows);

        let mut cells = Vec::new();
        for (slot_row, row) in (first_row..total_rows).take(visible_rows).enumerate() {
            for col in 0..columns as usize {
                let index = row * columns as usize + col;
                if index >= len {
                    break;
                }
                let y = area.y + slot_row as u16 * CARD_HEIGHT;
                let height = CARD_HEIGHT.min(area.y + area.height - y);
                cells.push((
                    index,
                    Rect {
                        x: area.x + col as u16 * card_width,
                        y,
                        width: card_width,
                        height,
                    },
                ));
            }
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[(usize, Rect)] {
        &self.cells
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<RowHit> {
        self.cells
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|&(index, rect)| RowHit {
                index,
                target: if contains(add_button_rect(rect), column, row) {
                    RowTarget::AddButton
                } else {
                    RowTarget::Body
                },
            })
    }
}

/// Keeps the cursor's row on screen, scrolling only as far as needed.
pub fn first_visible_row(cursor_row: usize, visible_rows: usize, total_rows: usize) -> usize {
    let visible_rows = visible_rows.max(1);
    let max_first = total_rows.saturating_sub(visible_rows);
    cursor_row.saturating_sub(visible_rows - 1).min(max_first)
}

/// Location of the add control inside a card: bottom inner row, right-aligned.
pub fn add_button_rect(card: Rect) -> Rect {
    let label_width = ADD_LABEL.chars().count() as u16;
    let inner_right = card.x + card.width.saturating_sub(1);
    let width = label_width.min(card.width.saturating_sub(2));
    Rect {
        x: inner_right.saturating_sub(width),
        y: card.y + card.height.saturating_sub(2),
        width,
        height: card.height.min(1),
    }
}

/// Routes a card hit to the matching callback. A hit on the add control
/// produces only `Add`; everything else on the card produces `Select`.
pub struct ProductAdapter<'a> {
    products: &'a [Product],
}

impl<'a> ProductAdapter<'a> {
    pub fn new(products: &'a [Product]) -> Self {
        Self { products }
    }

    pub fn route(&self, hit: RowHit) -> Option<RowAction> {
        let product = self.products.get(hit.index)?.clone();
        Some(match hit.target {
            RowTarget::Body => RowAction::Select(product),
            RowTarget::AddButton => RowAction::Add(product),
        })
    }
}

/// One product card.
pub struct ProductCard<'a> {
    product: &'a Product,
    image: Option<&'a ImageSlot>,
    highlighted: bool,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a Product, image: Option<&'a ImageSlot>, highlighted: bool) -> Self {
        Self {
            product,
            image,
            highlighted,
        }
    }
}

impl Widget for ProductCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.highlighted {
            Style::default().fg(STORE_GREEN)
        } else {
            Style::default().fg(GLOBAL_BORDER)
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        if self.highlighted {
            block = block.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let image_rows = IMAGE_ROWS.min(inner.height.saturating_sub(3));
        let image_area = Rect {
            height: image_rows,
            ..inner
        };
        ImageView::new(self.image).render(image_area, buf);

        let width = inner.width as usize;
        let price = self.product.display_price();
        let button_width = ADD_LABEL.chars().count();
        let price_pad = width
            .saturating_sub(price.chars().count())
            .saturating_sub(button_width);
        let text = vec![
            Line::from(Span::styled(
                truncate(&self.product.title, width),
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate(&self.product.category, width),
                Style::default().fg(MUTED_TEXT),
            )),
            Line::from(vec![
                Span::styled(price, Style::default().fg(HEADER_TEXT)),
                Span::raw(" ".repeat(price_pad)),
                Span::styled(
                    ADD_LABEL,
                    Style::default()
                        .fg(ACTIVE_HIGHLIGHT)
                        .bg(STORE_GREEN)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];
        let text_area = Rect {
            y: inner.y + image_rows,
            height: inner.height - image_rows,
            ..inner
        };
        Paragraph::new(text).render(text_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            price: 19.5,
            description: String::new(),
            category: "electronics".into(),
            image: format!("https://img/{id}.jpg"),
        }
    }

    #[test]
    fn two_columns_fill_rows() {
        let layout = GridLayout::compute(Rect::new(0, 4, 80, 20), 2, 3, 0);
        let cells = layout.cells();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0], (0, Rect::new(0, 4, 40, 10)));
        assert_eq!(cells[1], (1, Rect::new(40, 4, 40, 10)));
        assert_eq!(cells[2], (2, Rect::new(0, 14, 40, 10)));
    }

    #[test]
    fn window_scrolls_to_cursor_row() {
        // 10 products, 2 columns, room for 2 rows; cursor on row 3
        let layout = GridLayout::compute(Rect::new(0, 0, 80, 20), 2, 10, 7);
        let indices: Vec<usize> = layout.cells().iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![4, 5, 6, 7]);
    }

    #[test]
    fn first_visible_row_bounds() {
        assert_eq!(first_visible_row(0, 2, 5), 0);
        assert_eq!(first_visible_row(1, 2, 5), 0);
        assert_eq!(first_visible_row(4, 2, 5), 3);
        assert_eq!(first_visible_row(9, 2, 5), 3);
        assert_eq!(first_visible_row(0, 3, 1), 0);
    }

    #[test]
    fn hit_distinguishes_add_button() {
        let layout = GridLayout::compute(Rect::new(0, 0, 80, 20), 2, 2, 0);
        // card 1 spans x 40..80, y 0..10; add button is on row 8, right edge
        assert_eq!(
            layout.hit(78, 8),
            Some(RowHit {
                index: 1,
                target: RowTarget::AddButton
            })
        );
        assert_eq!(
            layout.hit(45, 2),
            Some(RowHit {
                index: 1,
                target: RowTarget::Body
            })
        );
        assert_eq!(layout.hit(10, 15), None);
    }

    #[test]
    fn adapter_routes_to_exactly_one_callback() {
        let products = vec![product(1), product(2)];
        let adapter = ProductAdapter::new(&products);
        assert_eq!(
            adapter.route(RowHit {
                index: 1,
                target: RowTarget::AddButton
            }),
            Some(RowAction::Add(product(2)))
        );
        assert_eq!(
            adapter.route(RowHit {
                index: 0,
                target: RowTarget::Body
            }),
            Some(RowAction::Select(product(1)))
        );
        assert_eq!(
            adapter.route(RowHit {
                index: 5,
                target: RowTarget::Body
            }),
            None
        );
    }

    #[test]
    fn card_shows_title_category_and_price() {
        let area = Rect::new(0, 0, 30, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        let item = product(1);
        ProductCard::new(&item, Some(&ImageSlot::Pending), false).render(area, &mut buf);

        let row = |y: u16| -> String { (0..area.width).map(|x| buf[(x, y)].symbol()).collect() };
        assert!(row(6).contains("Product 1"));
        assert!(row(7).contains("electronics"));
        assert!(row(8).contains("$19.50"));
        assert!(row(8).contains("+ Add"));
    }
}
