//! Decoded product pictures reduced to a small RGBA raster.

use image::imageops::FilterType;

use super::ImageError;

/// Longest edge, in pixels, a decoded picture is reduced to.
pub const MAX_EDGE: u32 = 64;

/// Pixels with alpha below this are treated as background.
const ALPHA_CUTOFF: u8 = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Thumbnail {
    /// Decodes PNG or JPEG bytes and scales the result to fit `MAX_EDGE`.
    pub fn decode(bytes: &[u8]) -> Result<Self, ImageError> {
        let decoded = image::load_from_memory(bytes)?;
        let scaled = if decoded.width() > MAX_EDGE || decoded.height() > MAX_EDGE {
            decoded.resize(MAX_EDGE, MAX_EDGE, FilterType::Triangle)
        } else {
            decoded
        };
        let rgba = scaled.to_rgba8();
        let (width, height) = rgba.dimensions();
        let pixels = rgba.pixels().map(|p| p.0).collect();
        Self::from_rgba(width, height, pixels).ok_or(ImageError::Empty)
    }

    pub fn from_rgba(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Option<Self> {
        if width == 0 || height == 0 || pixels.len() != (width * height) as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Samples the picture into a `cols` x `rows` target grid, preserving
    /// the aspect ratio and centering it. `None` marks background.
    pub fn sample(&self, cols: u32, rows: u32) -> Vec<Option<[u8; 3]>> {
        let mut out = vec![None; (cols * rows) as usize];
        if cols == 0 || rows == 0 {
            return out;
        }

        let scale = f64::min(
            cols as f64 / self.width as f64,
            rows as f64 / self.height as f64,
        );
        let fit_w = ((self.width as f64 * scale).round() as u32).clamp(1, cols);
        let fit_h = ((self.height as f64 * scale).round() as u32).clamp(1, rows);
        let off_x = (cols - fit_w) / 2;
        let off_y = (rows - fit_h) / 2;
        let radius = corner_radius(fit_w, fit_h);

        for y in 0..fit_h {
            for x in 0..fit_w {
                if !inside_rounded(x, y, fit_w, fit_h, radius) {
                    continue;
                }
                let src_x = ((x as u64 * self.width as u64) / fit_w as u64) as u32;
                let src_y = ((y as u64 * self.height as u64) / fit_h as u64) as u32;
                let [r, g, b, a] = self.pixels[(src_y * self.width + src_x) as usize];
                if a < ALPHA_CUTOFF {
                    continue;
                }
                out[((y + off_y) * cols + x + off_x) as usize] = Some([r, g, b]);
            }
        }
        out
    }
}

/// Corner radius used for every rendered picture.
pub fn corner_radius(width: u32, height: u32) -> u32 {
    width.min(height) / 6
}

/// Whether pixel `(x, y)` survives the rounded-corner mask of a
/// `width` x `height` rectangle.
pub fn inside_rounded(x: u32, y: u32, width: u32, height: u32, radius: u32) -> bool {
    if radius == 0 {
        return true;
    }
    let cx = if x < radius {
        radius
    } else if x >= width.saturating_sub(radius) {
        width.saturating_sub(radius + 1)
    } else {
        return true;
    };
    let cy = if y < radius {
        radius
    } else if y >= height.saturating_sub(radius) {
        height.saturating_sub(radius + 1)
    } else {
        return true;
    };
    let dx = x.abs_diff(cx) as u64;
    let dy = y.abs_diff(cy) as u64;
    dx * dx + dy * dy <= (radius as u64) * (radius as u64)
}
