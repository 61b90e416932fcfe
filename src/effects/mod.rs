//! Transition effects.
//!
//! Every effect is a state machine that turns `(old, new, parameters, randomness)` into a lazy
//! stream of [`Frame`]s. Streams never touch a sink or sleep; the
//! [`FrameScheduler`](crate::FrameScheduler) paces them. The last frame of every completed stream
//! equals the new pixel set exactly.

use std::time::Duration;

use crate::foundation::core::{Canvas, Pixel};
use crate::foundation::error::MatrixFxResult;
use crate::foundation::random::RandomSource;
use crate::pixels::set::PixelSet;
use crate::render::scheduler::Frame;

pub(crate) mod blinds;
pub(crate) mod crossfade;
pub(crate) mod curtain;
pub(crate) mod explode;
pub(crate) mod marquee;
pub(crate) mod pixelate;
pub(crate) mod roll;
pub(crate) mod spec;
pub(crate) mod stripe;
pub(crate) mod wipe;

/// Lazy frame sequence produced by an effect.
pub type FrameStream<'r> = Box<dyn Iterator<Item = Frame> + 'r>;

/// The two rendered states a transition moves between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub old: PixelSet,
    pub new: PixelSet,
    pub canvas: Canvas,
    /// Character count of the old text; only consulted when characters cannot be told apart by
    /// column gaps.
    pub old_chars: usize,
    pub new_chars: usize,
}

impl Endpoints {
    /// Both sets are clipped to `canvas`. Character counts default to 1.
    pub fn new(old: PixelSet, new: PixelSet, canvas: Canvas) -> Self {
        Self {
            old: old.clip(canvas),
            new: new.clip(canvas),
            canvas,
            old_chars: 1,
            new_chars: 1,
        }
    }

    pub fn with_char_counts(mut self, old_chars: usize, new_chars: usize) -> Self {
        self.old_chars = old_chars;
        self.new_chars = new_chars;
        self
    }
}

/// A transition algorithm.
pub trait Effect {
    /// Stable identifier used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Reject parameters that cannot produce a sensible animation.
    fn validate(&self) -> MatrixFxResult<()>;

    /// Build the frame stream. Parameters are copied into the stream; `rng` is only borrowed by
    /// effects that sample while running.
    fn frames<'r>(&self, endpoints: Endpoints, rng: &'r mut dyn RandomSource) -> FrameStream<'r>;
}

pub(crate) fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Merge old and new membership: pixels for which `shows_new` holds come from `new`, the rest
/// from `old`.
pub(crate) fn compose(
    old: &PixelSet,
    new: &PixelSet,
    mut shows_new: impl FnMut(Pixel) -> bool,
) -> PixelSet {
    let mut out = old.filter(|p| !shows_new(p));
    out.extend(new.iter().filter(|&p| shows_new(p)));
    out
}

#[cfg(test)]
#[path = "../../tests/unit/effects/common.rs"]
mod tests;
