use crate::effects::{Effect, Endpoints, FrameStream, millis};
use crate::foundation::core::Pixel;
use crate::foundation::error::{MatrixFxError, MatrixFxResult};
use crate::foundation::random::RandomSource;
use crate::pixels::set::PixelSet;
use crate::render::scheduler::Frame;

/// Which row-major indices of the new set a reveal frame lights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealCoverage {
    Even,
    EveryThird,
    Odd,
    Full,
}

impl RevealCoverage {
    pub fn includes(self, index: usize) -> bool {
        match self {
            Self::Even => index % 2 == 0,
            Self::EveryThird => index % 3 == 0,
            Self::Odd => index % 2 == 1,
            Self::Full => true,
        }
    }

    pub fn apply(self, pixels: &PixelSet) -> PixelSet {
        pixels
            .iter()
            .enumerate()
            .filter(|&(i, _)| self.includes(i))
            .map(|(_, p)| p)
            .collect()
    }
}

/// Reveal frames shown after the curtain is open, in order.
pub const REVEAL_SCHEDULE: [RevealCoverage; 5] = [
    RevealCoverage::Even,
    RevealCoverage::EveryThird,
    RevealCoverage::Odd,
    RevealCoverage::Full,
    RevealCoverage::Full,
];

/// Curtain: the old text splits at the centre and slides apart, then the new text is revealed in
/// dithered passes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CurtainParams {
    pub steps: u32,
    pub frame_ms: u64,
    /// Extra hold once the curtain is fully open.
    pub pause_ms: u64,
    pub reveal_ms: u64,
}

impl Default for CurtainParams {
    fn default() -> Self {
        Self {
            steps: 15,
            frame_ms: 50,
            pause_ms: 500,
            reveal_ms: 100,
        }
    }
}

impl Effect for CurtainParams {
    fn name(&self) -> &'static str {
        "curtain"
    }

    fn validate(&self) -> MatrixFxResult<()> {
        if self.steps == 0 {
            return Err(MatrixFxError::validation("curtain.steps must be >= 1"));
        }
        Ok(())
    }

    fn frames<'r>(&self, endpoints: Endpoints, _rng: &'r mut dyn RandomSource) -> FrameStream<'r> {
        let params = self.clone();
        let steps = params.steps.max(1);
        let width = endpoints.canvas.width_i32();
        let center = width / 2;
        let max_distance = f64::from((width / 2).max(1));
        let (left, right): (Vec<Pixel>, Vec<Pixel>) =
            endpoints.old.iter().partition(|p| p.x < center);
        let new = endpoints.new;
        let first_reveal = RevealCoverage::Even.apply(&new);

        let opening = (0..=steps).map(move |step| {
            let progress = f64::from(step) / f64::from(steps);
            let offset = (max_distance * progress * progress).floor() as i32;
            let mut pixels: PixelSet = left
                .iter()
                .map(|p| Pixel::new((p.x - offset).max(0), p.y))
                .chain(
                    right
                        .iter()
                        .map(|p| Pixel::new((p.x + offset).min(width - 1), p.y)),
                )
                .collect();
            let mut hold = millis(params.frame_ms);
            if step == steps {
                pixels.extend(first_reveal.iter());
                hold += millis(params.pause_ms);
            }
            Frame::new(pixels, hold)
        });

        let reveal_hold = millis(self.reveal_ms);
        let reveal_source = new.clone();
        let reveal = REVEAL_SCHEDULE
            .into_iter()
            .map(move |coverage| Frame::new(coverage.apply(&reveal_source), reveal_hold));
        let settle = std::iter::once(Frame::new(new, reveal_hold));

        Box::new(opening.chain(reveal).chain(settle))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/curtain.rs"]
mod tests;
