use crate::effects::{Effect, Endpoints, FrameStream, millis};
use crate::foundation::error::{MatrixFxError, MatrixFxResult};
use crate::foundation::random::RandomSource;
use crate::render::scheduler::Frame;

/// Marquee: old text scrolls out to the left while new text follows it in from the right edge.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MarqueeParams {
    /// Columns scrolled per frame.
    pub step: u32,
    pub frame_ms: u64,
}

impl Default for MarqueeParams {
    fn default() -> Self {
        Self {
            step: 1,
            frame_ms: 24,
        }
    }
}

impl Effect for MarqueeParams {
    fn name(&self) -> &'static str {
        "marquee"
    }

    fn validate(&self) -> MatrixFxResult<()> {
        if self.step == 0 {
            return Err(MatrixFxError::validation("marquee.step must be >= 1"));
        }
        Ok(())
    }

    fn frames<'r>(&self, endpoints: Endpoints, _rng: &'r mut dyn RandomSource) -> FrameStream<'r> {
        let width = endpoints.canvas.width_i32();
        let step = i32::try_from(self.step.max(1)).unwrap_or(i32::MAX);
        let hold = millis(self.frame_ms);
        let Endpoints {
            old, new, canvas, ..
        } = endpoints;

        let mut shifts: Vec<i32> = (0..width).step_by(step as usize).collect();
        shifts.push(width);
        Box::new(shifts.into_iter().map(move |s| {
            let pixels = old.shifted(-s, 0).union(&new.shifted(width - s, 0)).clip(canvas);
            Frame::new(pixels, hold)
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/marquee.rs"]
mod tests;
