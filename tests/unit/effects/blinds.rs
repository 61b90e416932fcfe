use super::*;
use crate::foundation::core::{Canvas, Pixel};
use crate::foundation::random::seeded;

fn run(params: &BlindsParams, old: PixelSet, new: PixelSet, canvas: Canvas) -> Vec<PixelSet> {
    let mut rng = seeded(0);
    params
        .frames(Endpoints::new(old, new, canvas), &mut rng)
        .map(|f| f.pixels)
        .collect()
}

fn full(canvas: Canvas) -> PixelSet {
    canvas.cells().collect()
}

#[test]
fn band_count_is_rounded_down_to_a_divisor() {
    assert_eq!(effective_blinds(8, 4), 4);
    assert_eq!(effective_blinds(8, 3), 2);
    assert_eq!(effective_blinds(8, 100), 8);
    assert_eq!(effective_blinds(64, 8), 8);
    assert_eq!(effective_blinds(64, 6), 4);
    assert_eq!(effective_blinds(7, 0), 1);
}

#[test]
fn frame_count_is_bands_times_substeps_plus_final() {
    let canvas = Canvas::default();
    let params = BlindsParams::default();
    let f = run(&params, PixelSet::new(), full(canvas), canvas);
    assert_eq!(f.len(), 4 * 9 + 1);
    assert_eq!(*f.last().unwrap(), full(canvas));
}

#[test]
fn bands_transition_sequentially() {
    let canvas = Canvas::new(4, 8).unwrap();
    let params = BlindsParams {
        num_blinds: 4,
        steps: 2,
        ..BlindsParams::default()
    };
    let f = run(&params, PixelSet::new(), full(canvas), canvas);
    // Band 0 (rows 0..2): substep 0 flips row 0, substep 2 flips row 1 too.
    let rows = |s: &PixelSet| {
        let mut r: Vec<i32> = s.iter().map(|p| p.y).collect();
        r.dedup();
        r
    };
    assert_eq!(rows(&f[0]), vec![0]);
    assert_eq!(rows(&f[2]), vec![0, 1]);
    // First frame of band 1: band 0 complete, row 2 flipped, rows 3.. untouched.
    assert_eq!(rows(&f[3]), vec![0, 1, 2]);
}

#[test]
fn reverse_keeps_completed_far_bands_new() {
    let canvas = Canvas::new(4, 8).unwrap();
    let params = BlindsParams {
        num_blinds: 2,
        steps: 1,
        reverse: true,
        ..BlindsParams::default()
    };
    let f = run(&params, PixelSet::new(), full(canvas), canvas);
    // Bands: rows 4..8 first, then rows 0..4.
    assert!(f[0].iter().all(|p| p.y == 4));
    assert!(f[1].iter().all(|p| p.y >= 4));
    assert_eq!(f[1].len(), 16);
    // Band 1 stays new while band 0 animates.
    assert!(f[2].contains(Pixel::new(0, 7)));
    assert!(f[2].contains(Pixel::new(0, 0)));
    assert!(!f[2].contains(Pixel::new(0, 1)));
}

#[test]
fn vertical_bands_split_columns() {
    let canvas = Canvas::default();
    let params = BlindsParams {
        num_blinds: 8,
        orientation: BlindsOrientation::Vertical,
        steps: 1,
        ..BlindsParams::default()
    };
    let f = run(&params, full(canvas), PixelSet::new(), canvas);
    // Band 0 at close ratio 0 flips only column 0.
    assert!(!f[0].contains(Pixel::new(0, 3)));
    assert!(f[0].contains(Pixel::new(1, 3)));
    assert_eq!(f.len(), 8 * 2 + 1);
    assert!(f.last().unwrap().is_empty());
}

#[test]
fn invalid_params_are_rejected() {
    let p = BlindsParams {
        num_blinds: 0,
        ..BlindsParams::default()
    };
    assert!(p.validate().is_err());
    let p = BlindsParams {
        steps: 0,
        ..BlindsParams::default()
    };
    assert!(p.validate().is_err());
}
