use super::*;
use crate::foundation::core::Canvas;
use crate::foundation::random::seeded;
use crate::pixels::set::PixelSet;

fn run(params: &RollParams, old: &PixelSet, new: &PixelSet, canvas: Canvas) -> Vec<PixelSet> {
    let mut rng = seeded(0);
    params
        .frames(Endpoints::new(old.clone(), new.clone(), canvas), &mut rng)
        .map(|f| f.pixels)
        .collect()
}

#[test]
fn down_roll_leaves_then_enters() {
    let canvas = Canvas::new(2, 3).unwrap();
    let old = PixelSet::from([(0, 0), (1, 2)]);
    let new = PixelSet::from([(1, 1), (0, 2)]);
    let frames = run(&RollParams::default(), &old, &new, canvas);
    assert_eq!(frames.len(), 6);
    assert_eq!(frames[0], PixelSet::from([(0, 1)]));
    assert!(frames[2].is_empty());
    // New enters from the top, offset 2 then 1 then 0.
    assert_eq!(frames[3], PixelSet::from([(0, 0)]));
    assert_eq!(frames[4], PixelSet::from([(1, 0), (0, 1)]));
    assert_eq!(frames[5], new);
}

#[test]
fn up_roll_mirrors() {
    let canvas = Canvas::new(1, 4).unwrap();
    let old = PixelSet::from([(0, 3)]);
    let new = PixelSet::from([(0, 0)]);
    let params = RollParams {
        direction: RollDirection::Up,
        frame_ms: 80,
    };
    let frames = run(&params, &old, &new, canvas);
    assert_eq!(frames[0], PixelSet::from([(0, 2)]));
    assert!(frames[3].is_empty());
    assert_eq!(frames[4], PixelSet::from([(0, 3)]));
    assert_eq!(frames[6], PixelSet::from([(0, 1)]));
    assert_eq!(frames[7], new);
}

#[test]
fn direction_parses_from_snake_case() {
    let p: RollParams = serde_json::from_str(r#"{"direction":"up"}"#).unwrap();
    assert_eq!(p.direction, RollDirection::Up);
    assert_eq!(p.frame_ms, 80);
}
