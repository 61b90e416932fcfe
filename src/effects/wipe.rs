use crate::effects::{Effect, Endpoints, FrameStream, compose, millis};
use crate::foundation::core::Canvas;
use crate::foundation::error::{MatrixFxError, MatrixFxResult};
use crate::foundation::random::RandomSource;
use crate::pixels::set::PixelSet;
use crate::render::scheduler::Frame;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WipeDir {
    #[default]
    #[serde(alias = "ltr", alias = "left-to-right")]
    LeftToRight,
    #[serde(alias = "rtl", alias = "right-to-left")]
    RightToLeft,
    #[serde(alias = "ttb", alias = "top-to-bottom")]
    TopToBottom,
    #[serde(alias = "btt", alias = "bottom-to-top")]
    BottomToTop,
}

impl WipeDir {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::LeftToRight | Self::RightToLeft)
    }

    pub fn is_reversed(self) -> bool {
        matches!(self, Self::RightToLeft | Self::BottomToTop)
    }
}

/// Directional wipe: a straight edge sweeps across the canvas, new text behind it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WipeParams {
    pub direction: WipeDir,
    pub steps: u32,
    pub frame_ms: u64,
}

impl Default for WipeParams {
    fn default() -> Self {
        Self {
            direction: WipeDir::LeftToRight,
            steps: 30,
            frame_ms: 20,
        }
    }
}

/// Frame at `step` of `steps`. Step 0 is the old set, step `steps` the new set.
pub fn wipe_frame(
    old: &PixelSet,
    new: &PixelSet,
    canvas: Canvas,
    dir: WipeDir,
    step: u32,
    steps: u32,
) -> PixelSet {
    let extent = i64::from(if dir.is_horizontal() {
        canvas.width
    } else {
        canvas.height
    });
    let steps = steps.max(1);
    let position = if step >= steps {
        extent
    } else {
        extent * i64::from(step) / i64::from(steps)
    };
    let edge = if dir.is_reversed() {
        extent - position
    } else {
        position
    };

    compose(old, new, |p| {
        let coord = i64::from(if dir.is_horizontal() { p.x } else { p.y });
        if dir.is_reversed() {
            coord >= edge
        } else {
            coord < edge
        }
    })
}

impl Effect for WipeParams {
    fn name(&self) -> &'static str {
        "wipe"
    }

    fn validate(&self) -> MatrixFxResult<()> {
        if self.steps == 0 {
            return Err(MatrixFxError::validation("wipe.steps must be >= 1"));
        }
        Ok(())
    }

    fn frames<'r>(&self, endpoints: Endpoints, _rng: &'r mut dyn RandomSource) -> FrameStream<'r> {
        let params = self.clone();
        let steps = params.steps.max(1);
        let hold = millis(params.frame_ms);
        Box::new((0..=steps).map(move |step| {
            let pixels = wipe_frame(
                &endpoints.old,
                &endpoints.new,
                endpoints.canvas,
                params.direction,
                step,
                steps,
            );
            Frame::new(pixels, hold)
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/wipe.rs"]
mod tests;
