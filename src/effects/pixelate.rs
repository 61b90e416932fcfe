use crate::effects::{Effect, Endpoints, FrameStream, millis};
use crate::foundation::core::Pixel;
use crate::foundation::error::{MatrixFxError, MatrixFxResult};
use crate::foundation::random::{RandomSource, sample_distinct, shuffle};
use crate::pixels::set::PixelSet;
use crate::render::scheduler::Frame;

/// Pixelate: old text dissolves into rising noise, new text forms out of fading noise.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PixelateParams {
    pub dissolve_steps: u32,
    pub form_steps: u32,
    /// Peak share of canvas cells considered for noise, in `[0, 1]`.
    pub noise_ratio_max: f64,
    /// Chance that a considered cell actually lights up.
    pub noise_probability: f64,
    pub frame_ms: u64,
    /// Extra hold on the last dissolve frame.
    pub pause_ms: u64,
}

impl Default for PixelateParams {
    fn default() -> Self {
        Self {
            dissolve_steps: 10,
            form_steps: 10,
            noise_ratio_max: 0.6,
            noise_probability: 0.5,
            frame_ms: 50,
            pause_ms: 500,
        }
    }
}

impl Effect for PixelateParams {
    fn name(&self) -> &'static str {
        "pixelate"
    }

    fn validate(&self) -> MatrixFxResult<()> {
        if self.dissolve_steps == 0 || self.form_steps == 0 {
            return Err(MatrixFxError::validation(
                "pixelate.dissolve_steps and pixelate.form_steps must be >= 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.noise_ratio_max) {
            return Err(MatrixFxError::validation(
                "pixelate.noise_ratio_max must be within [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.noise_probability) {
            return Err(MatrixFxError::validation(
                "pixelate.noise_probability must be within [0, 1]",
            ));
        }
        Ok(())
    }

    fn frames<'r>(&self, endpoints: Endpoints, rng: &'r mut dyn RandomSource) -> FrameStream<'r> {
        Box::new(PixelateFrames {
            params: self.clone(),
            visible: endpoints.old.clone(),
            endpoints,
            order: Vec::new(),
            per_step: 1,
            phase: Phase::Dissolve(0),
            rng,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Dissolve(u32),
    Form(u32),
    Clean,
    Done,
}

struct PixelateFrames<'r> {
    params: PixelateParams,
    endpoints: Endpoints,
    /// Pixels lit in the current frame; each frame is emitted as a snapshot of it.
    visible: PixelSet,
    /// Shuffled removal (dissolve) or addition (form) order.
    order: Vec<Pixel>,
    per_step: usize,
    phase: Phase,
    rng: &'r mut dyn RandomSource,
}

impl PixelateFrames<'_> {
    fn start_phase(&mut self, pixels: &PixelSet, steps: u32) {
        self.order = pixels.row_major();
        shuffle(&mut *self.rng, &mut self.order);
        self.per_step = (self.order.len() / steps.max(1) as usize).max(1);
    }

    fn slice(&self, step: u32) -> &[Pixel] {
        let start = (step as usize).saturating_mul(self.per_step).min(self.order.len());
        let end = start.saturating_add(self.per_step).min(self.order.len());
        &self.order[start..end]
    }

    /// Cells considered for noise at `ratio` of the canvas.
    fn noise_candidates(&mut self, ratio: f64) -> Vec<Pixel> {
        let canvas = self.endpoints.canvas;
        let total = canvas.total_pixels();
        let count = (total as f64 * ratio).floor().max(0.0) as usize;
        sample_distinct(&mut *self.rng, total, count)
            .into_iter()
            .map(|i| canvas.cell_at(i))
            .collect()
    }

    fn dissolve(&mut self, step: u32) -> PixelSet {
        let steps = self.params.dissolve_steps.max(1);
        if step == 0 {
            let old = self.endpoints.old.clone();
            self.start_phase(&old, steps);
        }
        let removed: Vec<Pixel> = self.slice(step).to_vec();
        for p in removed {
            self.visible.remove(p);
        }

        let ratio = f64::from(step) / f64::from(steps) * self.params.noise_ratio_max;
        for cell in self.noise_candidates(ratio) {
            if self.rng.chance(self.params.noise_probability) {
                self.visible.insert(cell);
            }
        }
        self.visible.clone()
    }

    fn form(&mut self, step: u32) -> PixelSet {
        let steps = self.params.form_steps.max(1);
        if step == 0 {
            let new = self.endpoints.new.clone();
            self.start_phase(&new, steps);
            self.visible = PixelSet::new();
        }
        if step < steps {
            let added: Vec<Pixel> = self.slice(step).to_vec();
            self.visible.extend(added);
        } else {
            self.visible.extend(self.order.iter().copied());
        }

        self.visible.retain_in(&self.endpoints.new);
        let ratio = (1.0 - f64::from(step) / f64::from(steps)) * self.params.noise_ratio_max;
        for cell in self.noise_candidates(ratio) {
            let roll = self.rng.chance(self.params.noise_probability);
            if roll && !self.endpoints.new.contains(cell) {
                self.visible.insert(cell);
            }
        }
        self.visible.clone()
    }
}

impl Iterator for PixelateFrames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let hold = millis(self.params.frame_ms);
        let dissolve_steps = self.params.dissolve_steps.max(1);
        let form_steps = self.params.form_steps.max(1);
        match self.phase {
            Phase::Dissolve(step) => {
                let pixels = self.dissolve(step);
                let last = step + 1 >= dissolve_steps;
                self.phase = if last {
                    Phase::Form(0)
                } else {
                    Phase::Dissolve(step + 1)
                };
                let hold = if last {
                    hold + millis(self.params.pause_ms)
                } else {
                    hold
                };
                Some(Frame::new(pixels, hold))
            }
            Phase::Form(step) => {
                let pixels = self.form(step);
                self.phase = if step >= form_steps {
                    Phase::Clean
                } else {
                    Phase::Form(step + 1)
                };
                Some(Frame::new(pixels, hold))
            }
            Phase::Clean => {
                self.phase = Phase::Done;
                Some(Frame::new(self.endpoints.new.clone(), hold))
            }
            Phase::Done => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pixelate.rs"]
mod tests;
