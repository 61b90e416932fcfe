use crate::effects::{Effect, Endpoints, FrameStream, compose, millis};
use crate::foundation::error::{MatrixFxError, MatrixFxResult};
use crate::foundation::random::RandomSource;
use crate::pixels::set::PixelSet;
use crate::render::scheduler::Frame;

/// Which way the slats run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlindsOrientation {
    /// Horizontal slats: the canvas height is split into bands of rows.
    #[default]
    Horizontal,
    /// Vertical slats: the canvas width is split into bands of columns.
    Vertical,
}

/// Venetian blinds: bands flip to the new text one after another, each with a sliding reveal.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BlindsParams {
    pub num_blinds: u32,
    pub orientation: BlindsOrientation,
    /// Process bands from the far edge first.
    pub reverse: bool,
    /// Sub-steps per band.
    pub steps: u32,
    pub frame_ms: u64,
}

impl Default for BlindsParams {
    fn default() -> Self {
        Self {
            num_blinds: 4,
            orientation: BlindsOrientation::Horizontal,
            reverse: false,
            steps: 8,
            frame_ms: 20,
        }
    }
}

/// Band count actually used: the largest divisor of `extent` not above `requested`, so every band
/// has the same integer size of at least one pixel.
pub fn effective_blinds(extent: u32, requested: u32) -> u32 {
    let max = requested.clamp(1, extent.max(1));
    (1..=max).rev().find(|n| extent % n == 0).unwrap_or(1)
}

impl Effect for BlindsParams {
    fn name(&self) -> &'static str {
        "blinds"
    }

    fn validate(&self) -> MatrixFxResult<()> {
        if self.num_blinds == 0 {
            return Err(MatrixFxError::validation("blinds.num_blinds must be >= 1"));
        }
        if self.steps == 0 {
            return Err(MatrixFxError::validation("blinds.steps must be >= 1"));
        }
        Ok(())
    }

    fn frames<'r>(&self, endpoints: Endpoints, _rng: &'r mut dyn RandomSource) -> FrameStream<'r> {
        Box::new(BlindsFrames::new(self.clone(), endpoints))
    }
}

struct BlindsFrames {
    params: BlindsParams,
    endpoints: Endpoints,
    band_size: i32,
    order: Vec<i32>,
    completed: Vec<bool>,
    /// Position in `order` of the band being animated.
    cursor: usize,
    substep: u32,
    finished: bool,
}

impl BlindsFrames {
    fn new(params: BlindsParams, endpoints: Endpoints) -> Self {
        let extent = match params.orientation {
            BlindsOrientation::Horizontal => endpoints.canvas.height,
            BlindsOrientation::Vertical => endpoints.canvas.width,
        };
        let bands = effective_blinds(extent, params.num_blinds);
        let band_size = (extent / bands) as i32;
        let mut order: Vec<i32> = (0..bands as i32).collect();
        if params.reverse {
            order.reverse();
        }
        Self {
            completed: vec![false; bands as usize],
            params,
            endpoints,
            band_size,
            order,
            cursor: 0,
            substep: 0,
            finished: false,
        }
    }

    fn band_frame(&self, band: i32, close_ratio: f64) -> PixelSet {
        let vertical = self.params.orientation == BlindsOrientation::Vertical;
        let size = self.band_size;
        let start = band * size;
        compose(&self.endpoints.old, &self.endpoints.new, |p| {
            let coord = if vertical { p.x } else { p.y };
            let b = coord / size;
            if b == band {
                f64::from(coord - start) / f64::from(size) <= close_ratio
            } else {
                self.completed.get(b as usize).copied().unwrap_or(false)
            }
        })
    }
}

impl Iterator for BlindsFrames {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.finished {
            return None;
        }
        let hold = millis(self.params.frame_ms);
        let Some(&band) = self.order.get(self.cursor) else {
            self.finished = true;
            return Some(Frame::new(self.endpoints.new.clone(), hold));
        };

        let steps = self.params.steps.max(1);
        let close_ratio = f64::from(self.substep) / f64::from(steps);
        let pixels = self.band_frame(band, close_ratio);

        if self.substep >= steps {
            self.completed[band as usize] = true;
            self.cursor += 1;
            self.substep = 0;
        } else {
            self.substep += 1;
        }
        Some(Frame::new(pixels, hold))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blinds.rs"]
mod tests;
