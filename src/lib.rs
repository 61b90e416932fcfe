//! matrixfx animates text transitions on small monochrome LED pixel matrices.
//!
//! A transition takes two strings, rasterizes each into a [`PixelSet`] on a [`Canvas`], and runs
//! an [`Effect`] that yields a lazy stream of [`Frame`]s morphing one set into the other. A
//! [`FrameScheduler`] paces those frames onto a [`CanvasSink`] (a real display, a terminal, an
//! in-memory recorder, or a PNG strip).
//!
//! # Pipeline overview
//!
//! 1. **Rasterize**: `&str -> PixelSet` via a [`Rasterizer`] (built-in 5×7 [`BitmapRasterizer`])
//! 2. **Animate**: `(old, new, params, rng) -> FrameStream` via one of nine effects
//! 3. **Present**: `FrameStream -> CanvasSink` via [`FrameScheduler`], cancellable at every frame
//!    boundary through a [`CancelToken`]
//!
//! [`Player`] bundles the three steps for a single transition and [`run_show`] plays a scripted
//! [`ShowConfig`] loaded from JSON.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic with a seed**: all randomness is drawn from an injected [`RandomSource`].
//! - **Exact endings**: the last frame of every completed transition equals the target text.
#![forbid(unsafe_code)]

mod effects;
mod foundation;
mod pixels;
mod render;
mod session;
mod text;

pub use effects::blinds::{BlindsOrientation, BlindsParams, effective_blinds};
pub use effects::crossfade::{CrossfadeParams, FadeProgress};
pub use effects::curtain::{CurtainParams, REVEAL_SCHEDULE, RevealCoverage};
pub use effects::explode::{DEFAULT_SPAWN_RADIUS, ExplodeParams, ExplodePlan, MotionParticle};
pub use effects::marquee::MarqueeParams;
pub use effects::pixelate::PixelateParams;
pub use effects::roll::{RollDirection, RollParams};
pub use effects::spec::{EffectSpec, parse_effect};
pub use effects::stripe::{StripeParams, stripe_frame};
pub use effects::wipe::{WipeDir, WipeParams, wipe_frame};
pub use effects::{Effect, Endpoints, FrameStream};
pub use foundation::core::{BoundingBox, Canvas, Pixel};
pub use foundation::error::{MatrixFxError, MatrixFxResult};
pub use foundation::random::{RandomSource, from_entropy, sample_distinct, seeded, shuffle};
pub use pixels::segment::{CharacterSegment, segment_characters};
pub use pixels::set::PixelSet;
pub use render::png::{PngStripSink, strip_image};
pub use render::scheduler::{CancelToken, Frame, FrameScheduler, RunOutcome, Tick};
pub use render::sink::{CanvasSink, InMemorySink, TerminalSink, frame_to_text};
pub use session::player::{PlayReport, Player};
pub use session::show::{ShowConfig, ShowReport, ShowStep, run_show};
pub use text::font::{FontSelector, GLYPH_WIDTH, glyph, trimmed};
pub use text::raster::{BitmapRasterizer, Rasterizer, rasterize_to_pixelset};
