use super::*;
use crate::render::scheduler::CancelToken;
use crate::render::sink::InMemorySink;
use crate::text::raster::{BitmapRasterizer, Rasterizer};

const SHOW: &str = r#"{
    "canvas": { "width": 32, "height": 8 },
    "font": "fixed",
    "seed": 7,
    "steps": [
        { "from": "", "to": "HI", "effect": { "kind": "implode" } },
        { "from": "HI", "to": "YO", "effect": { "kind": "wipe", "direction": "rtl", "steps": 4 } }
    ]
}"#;

fn target(text: &str, canvas: Canvas) -> crate::pixels::set::PixelSet {
    BitmapRasterizer::new().render(text, FontSelector::Fixed, canvas)
}

#[test]
fn parses_and_round_trips() {
    let config = ShowConfig::from_json_str(SHOW).unwrap();
    assert_eq!(config.canvas, Canvas::new(32, 8).unwrap());
    assert_eq!(config.font, FontSelector::Fixed);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.steps.len(), 2);
    assert_eq!(config.steps[0].effect.name(), "explode");

    let back = ShowConfig::from_json_str(&config.to_json_pretty().unwrap()).unwrap();
    assert_eq!(back, config);
}

#[test]
fn defaults_fill_missing_fields() {
    let config = ShowConfig::from_json_str(r#"{ "steps": [{ "from": "A", "to": "B" }] }"#).unwrap();
    assert_eq!(config.canvas, Canvas::default());
    assert_eq!(config.font, FontSelector::Proportional);
    assert_eq!(config.steps[0].effect.name(), "wipe");
    assert_eq!(config.steps[0].hold_ms, 0);
}

#[test]
fn rejects_invalid_effect_parameters() {
    let json = r#"{ "steps": [{ "from": "A", "to": "B", "effect": { "kind": "crossfade", "fade_steps": 0 } }] }"#;
    let err = ShowConfig::from_json_str(json).unwrap_err();
    assert!(matches!(err, MatrixFxError::Validation(_)));
    assert!(err.to_string().contains("steps[0]"));

    let err = ShowConfig::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, MatrixFxError::Serde(_)));
}

#[test]
fn runs_every_step_and_ends_on_last_target() {
    let config = ShowConfig::from_json_str(SHOW).unwrap();
    let mut sink = InMemorySink::new(config.canvas);
    let report = run_show(&config, &mut sink, FrameScheduler::unpaced(CancelToken::new())).unwrap();
    assert!(!report.cancelled);
    assert_eq!(report.steps.len(), 2);
    assert_eq!(report.steps[1].frames, 5);
    assert_eq!(report.frames_presented(), sink.frames().len());
    assert_eq!(sink.last_frame(), Some(&target("YO", config.canvas)));
}

#[test]
fn cancelled_show_settles_first_step() {
    let config = ShowConfig::from_json_str(SHOW).unwrap();
    let cancel = CancelToken::new();
    cancel.cancel();
    let mut sink = InMemorySink::new(config.canvas);
    let report = run_show(&config, &mut sink, FrameScheduler::unpaced(cancel)).unwrap();
    assert!(report.cancelled);
    assert_eq!(report.steps.len(), 1);
    assert_eq!(sink.frames(), &[target("HI", config.canvas)]);
}

#[test]
fn canvas_mismatch_is_rejected() {
    let config = ShowConfig::from_json_str(SHOW).unwrap();
    let mut sink = InMemorySink::new(Canvas::default());
    let err = run_show(&config, &mut sink, FrameScheduler::unpaced(CancelToken::new())).unwrap_err();
    assert!(matches!(err, MatrixFxError::Validation(_)));
}

#[test]
fn step_kinds_accept_cli_spellings() {
    let json = r#"{ "steps": [
        { "from": "A", "to": "B", "effect": { "kind": "Venetian-Blinds", "num_blinds": 2 } },
        { "from": "B", "to": "C", "effect": { "kind": "Wipe" } },
        { "from": "C", "to": "D", "effect": { "kind": "stripe", "stripe_width": 3 } }
    ] }"#;
    let config = ShowConfig::from_json_str(json).unwrap();
    let names: Vec<_> = config.steps.iter().map(|s| s.effect.name()).collect();
    assert_eq!(names, ["blinds", "wipe", "stripe"]);
}
