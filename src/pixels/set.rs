use std::collections::BTreeSet;

use crate::foundation::core::{BoundingBox, Canvas, Pixel};

/// The lit coordinates of one frame or one rasterized string.
///
/// Backed by an ordered set so iteration is row-major and deterministic; seeded effects rely on
/// that to reproduce frame sequences bit for bit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PixelSet {
    pixels: BTreeSet<Pixel>,
}

impl PixelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn contains(&self, p: Pixel) -> bool {
        self.pixels.contains(&p)
    }

    /// Returns whether the pixel was newly lit.
    pub fn insert(&mut self, p: Pixel) -> bool {
        self.pixels.insert(p)
    }

    pub fn remove(&mut self, p: Pixel) -> bool {
        self.pixels.remove(&p)
    }

    /// Pixels in row-major order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Pixel> + '_ {
        self.pixels.iter().copied()
    }

    /// Row-major snapshot; index `i` is the pixel's "index" for parity-based dithering.
    pub fn row_major(&self) -> Vec<Pixel> {
        self.iter().collect()
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.pixels.first()?;
        let last = self.pixels.last()?;
        let (mut min_x, mut max_x) = (first.x, first.x);
        for p in &self.pixels {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
        }
        Some(BoundingBox {
            min_x,
            max_x,
            min_y: first.y,
            max_y: last.y,
        })
    }

    /// Drop every coordinate outside `canvas`.
    pub fn clip(&self, canvas: Canvas) -> Self {
        self.filter(|p| canvas.contains(p))
    }

    pub fn filter(&self, mut keep: impl FnMut(Pixel) -> bool) -> Self {
        self.iter().filter(|&p| keep(p)).collect()
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        self.iter().map(|p| p.offset(dx, dy)).collect()
    }

    pub fn union(&self, other: &Self) -> Self {
        self.pixels.union(&other.pixels).copied().collect()
    }

    pub fn intersection(&self, other: &Self) -> Self {
        self.pixels.intersection(&other.pixels).copied().collect()
    }

    pub fn difference(&self, other: &Self) -> Self {
        self.pixels.difference(&other.pixels).copied().collect()
    }

    /// Keep only pixels also present in `other`.
    pub fn retain_in(&mut self, other: &Self) {
        self.pixels.retain(|p| other.contains(*p));
    }

    /// Distinct lit columns, ascending.
    pub fn columns(&self) -> Vec<i32> {
        let cols: BTreeSet<i32> = self.pixels.iter().map(|p| p.x).collect();
        cols.into_iter().collect()
    }

    /// Pixels with `start_x <= x < end_x`.
    pub fn in_columns(&self, start_x: i32, end_x: i32) -> Self {
        self.filter(|p| p.x >= start_x && p.x < end_x)
    }
}

impl FromIterator<Pixel> for PixelSet {
    fn from_iter<I: IntoIterator<Item = Pixel>>(iter: I) -> Self {
        Self {
            pixels: iter.into_iter().collect(),
        }
    }
}

impl Extend<Pixel> for PixelSet {
    fn extend<I: IntoIterator<Item = Pixel>>(&mut self, iter: I) {
        self.pixels.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PixelSet {
    type Item = &'a Pixel;
    type IntoIter = std::collections::btree_set::Iter<'a, Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}

impl<const N: usize> From<[(i32, i32); N]> for PixelSet {
    fn from(coords: [(i32, i32); N]) -> Self {
        coords.into_iter().map(Pixel::from).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pixels/set.rs"]
mod tests;
