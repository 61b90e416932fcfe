use super::*;

#[test]
fn duplicates_collapse_and_equality_is_set_equality() {
    let a = PixelSet::from([(1, 1), (0, 0), (1, 1)]);
    let b = PixelSet::from([(0, 0), (1, 1)]);
    assert_eq!(a.len(), 2);
    assert_eq!(a, b);
}

#[test]
fn bounding_box_of_empty_is_none() {
    assert!(PixelSet::new().bounding_box().is_none());
}

#[test]
fn bounding_box_spans_all_pixels() {
    let s = PixelSet::from([(5, 0), (2, 3), (9, 1)]);
    let bb = s.bounding_box().unwrap();
    assert_eq!(
        bb,
        BoundingBox {
            min_x: 2,
            max_x: 9,
            min_y: 0,
            max_y: 3
        }
    );
    assert_eq!(bb.width(), 8);
    assert_eq!(bb.height(), 4);
}

#[test]
fn clip_drops_out_of_range() {
    let canvas = Canvas::new(4, 2).unwrap();
    let s = PixelSet::from([(-1, 0), (0, 0), (3, 1), (4, 1), (2, 2)]);
    assert_eq!(s.clip(canvas), PixelSet::from([(0, 0), (3, 1)]));
}

#[test]
fn iteration_is_row_major() {
    let s = PixelSet::from([(3, 1), (7, 0), (0, 1)]);
    assert_eq!(
        s.row_major(),
        vec![Pixel::new(7, 0), Pixel::new(0, 1), Pixel::new(3, 1)]
    );
}

#[test]
fn columns_and_column_slices() {
    let s = PixelSet::from([(4, 0), (1, 2), (4, 5), (2, 1)]);
    assert_eq!(s.columns(), vec![1, 2, 4]);
    assert_eq!(s.in_columns(2, 4), PixelSet::from([(2, 1)]));
}

#[test]
fn set_algebra() {
    let a = PixelSet::from([(0, 0), (1, 0), (2, 0)]);
    let b = PixelSet::from([(1, 0), (3, 0)]);
    assert_eq!(a.union(&b).len(), 4);
    assert_eq!(a.intersection(&b), PixelSet::from([(1, 0)]));
    assert_eq!(a.difference(&b), PixelSet::from([(0, 0), (2, 0)]));
    let mut c = a.clone();
    c.retain_in(&b);
    assert_eq!(c, PixelSet::from([(1, 0)]));
    assert_eq!(b.shifted(-1, 2), PixelSet::from([(0, 2), (2, 2)]));
}
