use crate::effects::{Effect, Endpoints, FrameStream, millis};
use crate::foundation::error::MatrixFxResult;
use crate::foundation::random::RandomSource;
use crate::render::scheduler::Frame;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollDirection {
    /// Old text drops out of the bottom edge, new text descends from the top.
    #[default]
    Down,
    Up,
}

impl RollDirection {
    fn sign(self) -> i32 {
        match self {
            Self::Down => 1,
            Self::Up => -1,
        }
    }
}

/// Roll: old text leaves the canvas one row per frame, then new text enters from the opposite
/// edge.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RollParams {
    pub direction: RollDirection,
    pub frame_ms: u64,
}

impl Default for RollParams {
    fn default() -> Self {
        Self {
            direction: RollDirection::Down,
            frame_ms: 80,
        }
    }
}

impl Effect for RollParams {
    fn name(&self) -> &'static str {
        "roll"
    }

    fn validate(&self) -> MatrixFxResult<()> {
        Ok(())
    }

    fn frames<'r>(&self, endpoints: Endpoints, _rng: &'r mut dyn RandomSource) -> FrameStream<'r> {
        let height = endpoints.canvas.height_i32();
        let sign = self.direction.sign();
        let hold = millis(self.frame_ms);
        let Endpoints {
            old, new, canvas, ..
        } = endpoints;

        let leaving = (1..=height)
            .map(move |k| Frame::new(old.shifted(0, sign * k).clip(canvas), hold));
        let entering = (0..height)
            .rev()
            .map(move |k| Frame::new(new.shifted(0, -sign * k).clip(canvas), hold));
        Box::new(leaving.chain(entering))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/roll.rs"]
mod tests;
