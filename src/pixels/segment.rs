use crate::pixels::set::PixelSet;

/// One character's horizontal slice of a rasterized string: extent `[start_x, end_x)` and the lit
/// pixels inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterSegment {
    pub start_x: i32,
    pub end_x: i32,
    pub pixels: PixelSet,
}

impl CharacterSegment {
    pub fn width(&self) -> i32 {
        self.end_x - self.start_x
    }
}

/// Split a rasterized string into per-character segments, left to right.
///
/// Characters are separated wherever two consecutive lit columns are more than one column apart.
/// When no such gap exists the bounding box is divided evenly into `char_count` segments that tile
/// it exactly.
pub fn segment_characters(pixels: &PixelSet, char_count: usize) -> Vec<CharacterSegment> {
    let Some(bbox) = pixels.bounding_box() else {
        return Vec::new();
    };

    let columns = pixels.columns();
    let mut bounds: Vec<(i32, i32)> = Vec::new();
    let mut start_x = bbox.min_x;
    for pair in columns.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        if right - left > 1 {
            bounds.push((start_x, left + 1));
            start_x = right;
        }
    }

    if bounds.is_empty() {
        bounds = even_bounds(bbox.min_x, bbox.width(), char_count.max(1));
    } else {
        bounds.push((start_x, bbox.max_x + 1));
    }

    bounds
        .into_iter()
        .map(|(start_x, end_x)| CharacterSegment {
            start_x,
            end_x,
            pixels: pixels.in_columns(start_x, end_x),
        })
        .collect()
}

fn even_bounds(min_x: i32, width: i32, count: usize) -> Vec<(i32, i32)> {
    let n = i64::try_from(count).unwrap_or(i64::MAX);
    let w = i64::from(width);
    let edge = |i: i64| min_x + (i * w / n) as i32;
    (0..n).map(|i| (edge(i), edge(i + 1))).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/pixels/segment.rs"]
mod tests;
