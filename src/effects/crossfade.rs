use crate::effects::{Effect, Endpoints, FrameStream, millis};
use crate::foundation::core::Pixel;
use crate::foundation::error::{MatrixFxError, MatrixFxResult};
use crate::foundation::random::RandomSource;
use crate::pixels::segment::{CharacterSegment, segment_characters};
use crate::pixels::set::PixelSet;
use crate::render::scheduler::Frame;

/// Per-character crossfade: each character dithers from old to new, staggered left to right.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CrossfadeParams {
    /// Frames a single character needs to go from old to new.
    pub fade_steps: u32,
    /// Frames between the starts of consecutive characters.
    pub char_delay: u32,
    pub frame_ms: u64,
}

impl Default for CrossfadeParams {
    fn default() -> Self {
        Self {
            fade_steps: 8,
            char_delay: 2,
            frame_ms: 50,
        }
    }
}

/// Fade position of one character slot, counted in whole ticks so that completion is exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeProgress {
    ticks: u32,
    fade_steps: u32,
}

impl FadeProgress {
    pub fn new(fade_steps: u32) -> Self {
        Self {
            ticks: 0,
            fade_steps: fade_steps.max(1),
        }
    }

    pub fn advance(&mut self) {
        self.ticks = (self.ticks + 1).min(self.fade_steps);
    }

    /// Progress in `[0, 1]`.
    pub fn value(self) -> f64 {
        f64::from(self.ticks) / f64::from(self.fade_steps)
    }

    pub fn is_complete(self) -> bool {
        self.ticks >= self.fade_steps
    }
}

impl Effect for CrossfadeParams {
    fn name(&self) -> &'static str {
        "crossfade"
    }

    fn validate(&self) -> MatrixFxResult<()> {
        if self.fade_steps == 0 {
            return Err(MatrixFxError::validation("crossfade.fade_steps must be >= 1"));
        }
        Ok(())
    }

    fn frames<'r>(&self, endpoints: Endpoints, rng: &'r mut dyn RandomSource) -> FrameStream<'r> {
        let hold = millis(self.frame_ms);
        if endpoints.old.is_empty() || endpoints.new.is_empty() {
            return Box::new(std::iter::once(Frame::new(endpoints.new, hold)));
        }

        let old_segments = segment_characters(&endpoints.old, endpoints.old_chars);
        let new_segments = segment_characters(&endpoints.new, endpoints.new_chars);
        let slot_count = old_segments.len().max(new_segments.len());
        let slots = (0..slot_count)
            .map(|i| Slot::new(old_segments.get(i), new_segments.get(i), self.fade_steps))
            .collect();
        tracing::debug!(slots = slot_count, "crossfade segmented");

        Box::new(CrossfadeFrames {
            slots,
            char_delay: self.char_delay,
            height: endpoints.canvas.height_i32(),
            new: endpoints.new,
            hold,
            frame: 0,
            finished: false,
            rng,
        })
    }
}

struct Slot {
    start_x: i32,
    end_x: i32,
    old: PixelSet,
    new: PixelSet,
    progress: FadeProgress,
}

impl Slot {
    fn new(
        old: Option<&CharacterSegment>,
        new: Option<&CharacterSegment>,
        fade_steps: u32,
    ) -> Self {
        let start_x = [old, new]
            .into_iter()
            .flatten()
            .map(|s| s.start_x)
            .min()
            .unwrap_or(0);
        let end_x = [old, new]
            .into_iter()
            .flatten()
            .map(|s| s.end_x)
            .max()
            .unwrap_or(0);
        Self {
            start_x,
            end_x,
            old: old.map(|s| s.pixels.clone()).unwrap_or_default(),
            new: new.map(|s| s.pixels.clone()).unwrap_or_default(),
            progress: FadeProgress::new(fade_steps),
        }
    }

    fn dither(&self, height: i32, rng: &mut dyn RandomSource, out: &mut PixelSet) {
        let progress = self.progress.value();
        for y in 0..height {
            for x in self.start_x..self.end_x {
                let p = Pixel::new(x, y);
                let shown = match (self.old.contains(p), self.new.contains(p)) {
                    (true, true) => true,
                    (true, false) => rng.next_f64() > progress,
                    (false, true) => rng.chance(progress),
                    (false, false) => false,
                };
                if shown {
                    out.insert(p);
                }
            }
        }
    }
}

/// Frame at which slot `index` starts fading.
fn slot_start(index: usize, char_delay: u32) -> u64 {
    u64::try_from(index)
        .unwrap_or(u64::MAX)
        .saturating_mul(u64::from(char_delay))
}

struct CrossfadeFrames<'r> {
    slots: Vec<Slot>,
    char_delay: u32,
    height: i32,
    new: PixelSet,
    hold: std::time::Duration,
    frame: u64,
    finished: bool,
    rng: &'r mut dyn RandomSource,
}

impl Iterator for CrossfadeFrames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.finished {
            return None;
        }
        if self.slots.iter().all(|s| s.progress.is_complete()) {
            self.finished = true;
            return Some(Frame::new(std::mem::take(&mut self.new), self.hold));
        }

        for (index, slot) in self.slots.iter_mut().enumerate() {
            if self.frame >= slot_start(index, self.char_delay) {
                slot.progress.advance();
            }
        }

        let mut pixels = PixelSet::new();
        for slot in &self.slots {
            slot.dither(self.height, &mut *self.rng, &mut pixels);
        }
        self.frame = self.frame.saturating_add(1);
        Some(Frame::new(pixels, self.hold))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/crossfade.rs"]
mod tests;
