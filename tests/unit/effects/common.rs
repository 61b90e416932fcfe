use super::*;

#[test]
fn endpoints_clip_to_canvas() {
    let canvas = Canvas::new(4, 4).unwrap();
    let e = Endpoints::new(
        PixelSet::from([(0, 0), (8, 0)]),
        PixelSet::from([(3, 3), (-1, 2)]),
        canvas,
    );
    assert_eq!(e.old, PixelSet::from([(0, 0)]));
    assert_eq!(e.new, PixelSet::from([(3, 3)]));
    assert_eq!((e.old_chars, e.new_chars), (1, 1));
    let e = e.with_char_counts(5, 2);
    assert_eq!((e.old_chars, e.new_chars), (5, 2));
}

#[test]
fn compose_picks_side_per_pixel() {
    let old = PixelSet::from([(0, 0), (3, 0)]);
    let new = PixelSet::from([(1, 0), (2, 0)]);
    let out = compose(&old, &new, |p| p.x < 2);
    assert_eq!(out, PixelSet::from([(1, 0), (3, 0)]));
}
