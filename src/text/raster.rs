use crate::foundation::core::{Canvas, Pixel};
use crate::pixels::set::PixelSet;
use crate::text::font::{self, FontSelector, GLYPH_WIDTH};

/// Text-to-pixel renderer consumed by the engine as a black box.
pub trait Rasterizer {
    /// Render `text` with `font` onto a virtual canvas, returning only on-canvas lit pixels.
    ///
    /// Characters the font cannot draw render blank.
    fn render(&self, text: &str, font: FontSelector, canvas: Canvas) -> PixelSet;
}

/// Built-in rasterizer over the 5×7 ASCII glyph table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitmapRasterizer {
    /// Top-left corner of the first character cell.
    pub origin: Pixel,
}

impl BitmapRasterizer {
    /// Advance of a space (or undrawable character) in proportional mode.
    pub const PROPORTIONAL_SPACE: i32 = 2;
    /// Blank columns between characters.
    pub const SPACING: i32 = 1;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin(origin: Pixel) -> Self {
        Self { origin }
    }

    /// Width in columns `text` occupies, ignoring canvas clipping.
    pub fn measure(&self, text: &str, font: FontSelector) -> i32 {
        let mut width = 0;
        for ch in text.chars() {
            width += advance(ch, font);
        }
        (width - Self::SPACING).max(0)
    }
}

fn advance(ch: char, font: FontSelector) -> i32 {
    match font {
        FontSelector::Fixed => GLYPH_WIDTH as i32 + BitmapRasterizer::SPACING,
        FontSelector::Proportional => {
            let cols = font::glyph(ch).map(|g| font::trimmed(g)).unwrap_or(&[]);
            if cols.is_empty() {
                BitmapRasterizer::PROPORTIONAL_SPACE + BitmapRasterizer::SPACING
            } else {
                cols.len() as i32 + BitmapRasterizer::SPACING
            }
        }
    }
}

impl Rasterizer for BitmapRasterizer {
    fn render(&self, text: &str, font: FontSelector, canvas: Canvas) -> PixelSet {
        let mut out = PixelSet::new();
        let mut x = self.origin.x;
        for ch in text.chars() {
            if x >= canvas.width_i32() {
                break;
            }
            let columns: &[u8] = match (font::glyph(ch), font) {
                (Some(g), FontSelector::Fixed) => g,
                (Some(g), FontSelector::Proportional) => font::trimmed(g),
                (None, _) => &[],
            };
            for (dx, &bits) in columns.iter().enumerate() {
                for row in 0..8 {
                    if bits & (1 << row) != 0 {
                        let p = Pixel::new(x + dx as i32, self.origin.y + row);
                        if canvas.contains(p) {
                            out.insert(p);
                        }
                    }
                }
            }
            x += advance(ch, font);
        }
        out
    }
}

/// Rasterize `text` into the pixel set effects consume.
pub fn rasterize_to_pixelset(
    rasterizer: &dyn Rasterizer,
    text: &str,
    font: FontSelector,
    canvas: Canvas,
) -> PixelSet {
    rasterizer.render(text, font, canvas).clip(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/text/raster.rs"]
mod tests;
