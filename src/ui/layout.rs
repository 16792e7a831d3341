use ratatui::layout::Rect;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits the body into the section heading row and the product grid.
pub fn body_sections(body: Rect) -> (Rect, Rect) {
    let heading_height = body.height.min(1);
    let heading = Rect {
        height: heading_height,
        ..body
    };
    let grid = Rect {
        x: body.x,
        y: body.y + heading_height,
        width: body.width,
        height: body.height - heading_height,
    };
    (heading, grid)
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Greedy word wrap on character counts. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Cuts `text` to at most `width` characters, ending in `…` when shortened.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_screen() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header, Rect::new(0, 0, 80, 3));
        assert_eq!(body, Rect::new(0, 3, 80, 18));
        assert_eq!(footer, Rect::new(0, 21, 80, 3));
    }

    #[test]
    fn sections_reserve_heading_row() {
        let (heading, grid) = body_sections(Rect::new(0, 3, 80, 18));
        assert_eq!(heading, Rect::new(0, 3, 80, 1));
        assert_eq!(grid, Rect::new(0, 4, 80, 17));
    }

    #[test]
    fn centered_rect_is_clamped() {
        let rect = centered_rect_by_size(Rect::new(0, 0, 20, 10), 40, 4);
        assert_eq!(rect, Rect::new(0, 3, 20, 4));
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("slim fit cotton shirt for men", 10),
            vec!["slim fit", "cotton", "shirt for", "men"]
        );
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Fjällräven backpack", 8), "Fjällrä…");
    }

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(2, 2, 3, 3);
        assert!(contains(rect, 2, 2));
        assert!(contains(rect, 4, 4));
        assert!(!contains(rect, 5, 4));
        assert!(!contains(rect, 1, 3));
    }
}
