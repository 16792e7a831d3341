//! Draws an `ImageSlot` with half-block cells, two pixels per cell.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::images::ImageSlot;
use crate::ui::theme::{MUTED_TEXT, PLACEHOLDER_FILL};

const UPPER_HALF: &str = "▀";
const LOWER_HALF: &str = "▄";
const PLACEHOLDER_GLYPH: &str = "▣";

pub struct ImageView<'a> {
    slot: Option<&'a ImageSlot>,
}

impl<'a> ImageView<'a> {
    /// `None` means no picture was requested (pictures disabled).
    pub fn new(slot: Option<&'a ImageSlot>) -> Self {
        Self { slot }
    }
}

impl Widget for ImageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        match self.slot.and_then(ImageSlot::thumbnail) {
            Some(thumb) => {
                let cols = area.width as u32;
                let rows = area.height as u32 * 2;
                let pixels = thumb.sample(cols, rows);
                for cy in 0..area.height {
                    for cx in 0..area.width {
                        let top = pixels[(cy as u32 * 2 * cols + cx as u32) as usize];
                        let bottom = pixels[((cy as u32 * 2 + 1) * cols + cx as u32) as usize];
                        let Some(cell) = buf.cell_mut((area.x + cx, area.y + cy)) else {
                            continue;
                        };
                        match (top, bottom) {
                            (Some(t), Some(b)) => {
                                cell.set_symbol(UPPER_HALF).set_fg(rgb(t)).set_bg(rgb(b));
                            }
                            (Some(t), None) => {
                                cell.set_symbol(UPPER_HALF).set_fg(rgb(t));
                            }
                            (None, Some(b)) => {
                                cell.set_symbol(LOWER_HALF).set_fg(rgb(b));
                            }
                            (None, None) => {}
                        }
                    }
                }
            }
            None => render_placeholder(area, buf),
        }
    }
}

fn render_placeholder(area: Rect, buf: &mut Buffer) {
    buf.set_style(area, Style::default().bg(PLACEHOLDER_FILL));
    let x = area.x + area.width / 2;
    let y = area.y + area.height / 2;
    buf.set_string(
        x,
        y,
        PLACEHOLDER_GLYPH,
        Style::default().fg(MUTED_TEXT).bg(PLACEHOLDER_FILL),
    );
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::Thumbnail;

    #[test]
    fn pending_slot_draws_placeholder() {
        let area = Rect::new(0, 0, 5, 3);
        let mut buf = Buffer::empty(area);
        ImageView::new(Some(&ImageSlot::Pending)).render(area, &mut buf);
        assert_eq!(buf[(2, 1)].symbol(), PLACEHOLDER_GLYPH);
        assert_eq!(buf[(0, 0)].bg, PLACEHOLDER_FILL);
    }

    #[test]
    fn failed_slot_draws_placeholder() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        ImageView::new(Some(&ImageSlot::Failed)).render(area, &mut buf);
        assert_eq!(buf[(2, 1)].symbol(), PLACEHOLDER_GLYPH);
    }

    #[test]
    fn ready_slot_draws_half_blocks() {
        let thumb = Thumbnail::from_rgba(2, 2, vec![[255, 0, 0, 255]; 4]).unwrap();
        let slot = ImageSlot::Ready(thumb);
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        ImageView::new(Some(&slot)).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), UPPER_HALF);
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(255, 0, 0));
        assert_eq!(buf[(0, 0)].bg, Color::Rgb(255, 0, 0));
    }
}
