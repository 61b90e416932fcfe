use super::*;
use crate::foundation::core::Pixel;

fn solid_block(x0: i32, width: i32, height: i32) -> PixelSet {
    (x0..x0 + width)
        .flat_map(|x| (0..height).map(move |y| Pixel::new(x, y)))
        .collect()
}

#[test]
fn empty_set_has_no_segments() {
    assert!(segment_characters(&PixelSet::new(), 4).is_empty());
}

#[test]
fn gaps_split_characters() {
    // Columns 0..=1, 3..=5, 8.
    let mut s = solid_block(0, 2, 3);
    s.extend(solid_block(3, 3, 3).iter());
    s.insert(Pixel::new(8, 0));

    let segs = segment_characters(&s, 3);
    let extents: Vec<(i32, i32)> = segs.iter().map(|c| (c.start_x, c.end_x)).collect();
    assert_eq!(extents, vec![(0, 2), (3, 6), (8, 9)]);
    assert_eq!(segs[1].pixels.len(), 9);
    assert_eq!(segs[2].pixels, PixelSet::from([(8, 0)]));
}

#[test]
fn no_gap_falls_back_to_even_division_tiling_the_box() {
    let s = solid_block(3, 10, 8);
    let segs = segment_characters(&s, "HELLO".len());
    assert_eq!(segs.len(), 5);
    assert_eq!(segs.first().unwrap().start_x, 3);
    assert_eq!(segs.last().unwrap().end_x, 13);
    for pair in segs.windows(2) {
        assert_eq!(pair[0].end_x, pair[1].start_x);
    }
    let total: usize = segs.iter().map(|c| c.pixels.len()).sum();
    assert_eq!(total, s.len());
}

#[test]
fn uneven_fallback_still_tiles() {
    let s = solid_block(0, 7, 1);
    let segs = segment_characters(&s, 3);
    let widths: Vec<i32> = segs.iter().map(CharacterSegment::width).collect();
    assert_eq!(widths.iter().sum::<i32>(), 7);
    assert!(widths.iter().all(|&w| w == 2 || w == 3));
}

#[test]
fn zero_char_count_is_one_segment() {
    let s = solid_block(0, 4, 2);
    let segs = segment_characters(&s, 0);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].pixels, s);
}
