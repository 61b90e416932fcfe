use super::*;
use crate::foundation::core::Canvas;
use crate::foundation::random::seeded;
use crate::text::font::FontSelector;
use crate::text::raster::{BitmapRasterizer, Rasterizer};

fn text(s: &str) -> PixelSet {
    BitmapRasterizer::new().render(s, FontSelector::Proportional, Canvas::default())
}

fn run(params: &CrossfadeParams, old: &str, new: &str, seed: u64) -> Vec<Frame> {
    let mut rng = seeded(seed);
    let endpoints = Endpoints::new(text(old), text(new), Canvas::default())
        .with_char_counts(old.chars().count(), new.chars().count());
    params.frames(endpoints, &mut rng).collect()
}

#[test]
fn progress_counts_whole_ticks() {
    let mut p = FadeProgress::new(4);
    assert_eq!(p.value(), 0.0);
    for _ in 0..10 {
        p.advance();
    }
    assert!(p.is_complete());
    assert_eq!(p.value(), 1.0);
}

#[test]
fn hello_to_hi_runs_every_slot_to_completion() {
    let frames = run(&CrossfadeParams::default(), "HELLO", "HI", 4);
    // Slot 4 starts at frame 8 and needs 8 ticks: 16 fade frames, then the clean frame.
    assert_eq!(frames.len(), 17);
    // The last fade frame has every slot at 1.0, so dithering is already exact.
    assert_eq!(frames[15].pixels, text("HI"));
    assert_eq!(frames[16].pixels, text("HI"));
}

#[test]
fn slot_without_new_character_fades_out() {
    let old = text("HELLO");
    let slot2 = segment_characters(&old, 5)[2].clone();
    let frames = run(&CrossfadeParams::default(), "HELLO", "HI", 9);
    // Slot 2 starts at frame 4; before that the third letter is fully lit.
    for frame in &frames[..4] {
        assert_eq!(frame.pixels.in_columns(slot2.start_x, slot2.end_x), slot2.pixels);
    }
    assert!(frames[12].pixels.in_columns(slot2.start_x, slot2.end_x).is_empty());
}

#[test]
fn first_frame_keeps_late_slots_untouched() {
    let frames = run(&CrossfadeParams::default(), "HELLO", "HI", 2);
    let old = text("HELLO");
    let last = segment_characters(&old, 5)[4].clone();
    assert_eq!(
        frames[0].pixels.in_columns(last.start_x, last.end_x),
        last.pixels
    );
}

#[test]
fn empty_sides_short_circuit() {
    let frames = run(&CrossfadeParams::default(), "", "HI", 0);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].pixels, text("HI"));

    let frames = run(&CrossfadeParams::default(), "HI", "", 0);
    assert_eq!(frames.len(), 1);
    assert!(frames[0].pixels.is_empty());
}

#[test]
fn zero_delay_fades_all_slots_together() {
    let params = CrossfadeParams {
        fade_steps: 3,
        char_delay: 0,
        frame_ms: 10,
    };
    let frames = run(&params, "AB", "CD", 1);
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[0].hold, millis(10));
}

#[test]
fn zero_fade_steps_rejected() {
    let params = CrossfadeParams {
        fade_steps: 0,
        ..CrossfadeParams::default()
    };
    assert!(params.validate().is_err());
}

#[test]
fn slot_starts_do_not_wrap_for_huge_delays() {
    assert_eq!(slot_start(0, u32::MAX), 0);
    assert_eq!(slot_start(3, 2), 6);
    let late = slot_start(4, u32::MAX);
    assert_eq!(late, 4 * u64::from(u32::MAX));
    assert!(late > u64::from(u32::MAX));
    assert_eq!(slot_start(usize::MAX, u32::MAX), u64::MAX);
}

#[test]
fn huge_delay_keeps_second_slot_waiting() {
    let params = CrossfadeParams {
        fade_steps: 2,
        char_delay: u32::MAX,
        frame_ms: 0,
    };
    let old = text("AB");
    let second = segment_characters(&old, 2)[1].clone();
    let mut rng = seeded(8);
    let endpoints = Endpoints::new(old, text("CD"), Canvas::default()).with_char_counts(2, 2);
    let frames: Vec<Frame> = params.frames(endpoints, &mut rng).take(6).collect();
    assert_eq!(frames.len(), 6);
    for frame in &frames {
        assert_eq!(
            frame.pixels.in_columns(second.start_x, second.end_x),
            second.pixels
        );
    }
}
