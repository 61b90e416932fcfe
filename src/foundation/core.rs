use std::cmp::Ordering;

use crate::foundation::error::{MatrixFxError, MatrixFxResult};

/// One LED coordinate.
///
/// Pixels order row-major (`y` first, then `x`), which is the canonical iteration order of every
/// [`PixelSet`](crate::PixelSet) and the meaning of "pixel index" wherever an effect selects pixels
/// by position.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Pixel {
    /// Column, growing to the right.
    pub x: i32,
    /// Row, growing downwards.
    pub y: i32,
}

impl Pixel {
    /// Build a pixel from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the pixel moved by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl Ord for Pixel {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Pixel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Pixel {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Logical size of the LED matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 8 * Self::BLOCK,
            height: Self::BLOCK,
        }
    }
}

impl Canvas {
    /// Edge length of one cascaded MAX7219 block.
    pub const BLOCK: u32 = 8;

    pub fn new(width: u32, height: u32) -> MatrixFxResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// A single row of `blocks` cascaded 8×8 blocks.
    pub fn matrix(blocks: u32) -> MatrixFxResult<Self> {
        if blocks == 0 {
            return Err(MatrixFxError::validation("matrix needs at least one block"));
        }
        Self::new(blocks.saturating_mul(Self::BLOCK), Self::BLOCK)
    }

    pub fn validate(self) -> MatrixFxResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MatrixFxError::validation("canvas width and height must be > 0"));
        }
        if self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return Err(MatrixFxError::validation("canvas is too large"));
        }
        Ok(())
    }

    pub fn width_i32(self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    pub fn height_i32(self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX)
    }

    pub fn total_pixels(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    pub fn contains(self, p: Pixel) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width_i32() && p.y < self.height_i32()
    }

    /// Whether a continuous position lands on a canvas cell once floored.
    pub fn contains_point(self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x < f64::from(self.width) && y < f64::from(self.height)
    }

    /// Integer center (`width / 2`, `height / 2`).
    pub fn center(self) -> Pixel {
        Pixel::new(self.width_i32() / 2, self.height_i32() / 2)
    }

    /// Cell at a row-major index. Callers keep `index < total_pixels()`.
    pub fn cell_at(self, index: usize) -> Pixel {
        let w = self.width as usize;
        Pixel::new((index % w) as i32, (index / w) as i32)
    }

    /// All cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Pixel> {
        (0..self.total_pixels()).map(move |i| self.cell_at(i))
    }
}

/// Inclusive bounds of a non-empty pixel set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl BoundingBox {
    pub fn width(self) -> i32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(self) -> i32 {
        self.max_y - self.min_y + 1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
