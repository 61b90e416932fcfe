use super::*;
use crate::foundation::core::Canvas;
use crate::foundation::random::seeded;

fn run(params: &StripeParams, old: &PixelSet, new: &PixelSet, canvas: Canvas) -> Vec<PixelSet> {
    let mut rng = seeded(0);
    params
        .frames(Endpoints::new(old.clone(), new.clone(), canvas), &mut rng)
        .map(|f| f.pixels)
        .collect()
}

#[test]
fn band_inverts_old_columns_and_leaves_new_behind() {
    let canvas = Canvas::new(8, 2).unwrap();
    let old = PixelSet::from([(1, 0)]);
    let new = PixelSet::from([(2, 1)]);
    let params = StripeParams {
        stripe_width: 2,
        frame_ms: 10,
    };
    let frames = run(&params, &old, &new, canvas);
    // Text columns [1, 3); band left edge runs -1..=3.
    assert_eq!(frames.len(), 5);
    assert_eq!(frames[0], old);
    // Band over columns 1 and 2: both inverted.
    assert_eq!(frames[2], PixelSet::from([(1, 1), (2, 0), (2, 1)]));
    // Band over columns 2 and 3: column 1 already shows new (dark), column 2 inverted.
    assert_eq!(frames[3], PixelSet::from([(2, 0), (2, 1)]));
    assert_eq!(frames[4], new);
}

#[test]
fn sweep_ends_exactly_on_new_text() {
    let canvas = Canvas::default();
    let old: PixelSet = (0..20).map(|x| Pixel::new(x, 3)).collect();
    let new: PixelSet = (5..40).map(|x| Pixel::new(x, 5)).collect();
    let frames = run(&StripeParams::default(), &old, &new, canvas);
    // 40 text columns + 4 band columns + final position.
    assert_eq!(frames.len(), 45);
    assert_eq!(frames[0], old);
    assert_eq!(frames.last(), Some(&new));
}

#[test]
fn empty_texts_emit_one_frame() {
    let frames = run(
        &StripeParams::default(),
        &PixelSet::new(),
        &PixelSet::new(),
        Canvas::default(),
    );
    assert_eq!(frames, vec![PixelSet::new()]);
}

#[test]
fn zero_width_rejected() {
    let params = StripeParams {
        stripe_width: 0,
        ..StripeParams::default()
    };
    assert!(params.validate().is_err());
}
