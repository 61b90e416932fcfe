use std::f64::consts::TAU;

use kurbo::Vec2;

use crate::effects::{Effect, Endpoints, FrameStream, millis};
use crate::foundation::core::{Canvas, Pixel};
use crate::foundation::error::{MatrixFxError, MatrixFxResult};
use crate::foundation::random::RandomSource;
use crate::pixels::set::PixelSet;
use crate::render::scheduler::Frame;

/// Default off-canvas spawn radius range for implosion particles, in pixels from the center.
pub const DEFAULT_SPAWN_RADIUS: (f64, f64) = (10.0, 30.0);

/// Radial explode/implode: old pixels fly outwards, then new pixels converge from off-canvas.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ExplodeParams {
    pub explosion_steps: u32,
    pub implosion_steps: u32,
    pub min_speed: f64,
    pub max_speed: f64,
    pub spawn_radius_min: f64,
    pub spawn_radius_max: f64,
    pub frame_ms: u64,
    /// Extra hold on the last explosion frame.
    pub pause_ms: u64,
}

impl Default for ExplodeParams {
    fn default() -> Self {
        Self {
            explosion_steps: 15,
            implosion_steps: 15,
            min_speed: 1.0,
            max_speed: 3.0,
            spawn_radius_min: DEFAULT_SPAWN_RADIUS.0,
            spawn_radius_max: DEFAULT_SPAWN_RADIUS.1,
            frame_ms: 50,
            pause_ms: 500,
        }
    }
}

/// One moving pixel. `pixel` is the origin for explosion particles and the destination for
/// implosion particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub pixel: Pixel,
}

impl MotionParticle {
    fn cell(&self) -> Pixel {
        Pixel::new(self.position.x.floor() as i32, self.position.y.floor() as i32)
    }
}

/// Particles for both phases, indexed by stable id (their position in the vector).
#[derive(Clone, Debug, PartialEq)]
pub struct ExplodePlan {
    pub explosion: Vec<MotionParticle>,
    pub implosion: Vec<MotionParticle>,
}

impl ExplodeParams {
    /// Sample every particle up front: explosion speeds first, then implosion spawn points.
    pub fn plan(
        &self,
        old: &PixelSet,
        new: &PixelSet,
        canvas: Canvas,
        rng: &mut dyn RandomSource,
    ) -> ExplodePlan {
        let center = canvas.center();
        let center = Vec2::new(f64::from(center.x), f64::from(center.y));

        let explosion = old
            .iter()
            .map(|p| {
                let origin = Vec2::new(f64::from(p.x), f64::from(p.y));
                let dir = origin - center;
                let length = dir.hypot().max(0.1);
                let speed = rng.uniform(self.min_speed, self.max_speed);
                MotionParticle {
                    position: origin,
                    velocity: dir / length * speed,
                    pixel: p,
                }
            })
            .collect();

        let steps = f64::from(self.implosion_steps.max(1));
        let implosion = new
            .iter()
            .map(|p| {
                let angle = rng.uniform(0.0, TAU);
                let distance = rng.uniform(self.spawn_radius_min, self.spawn_radius_max);
                let start = center + Vec2::from_angle(angle) * distance;
                let dest = Vec2::new(f64::from(p.x), f64::from(p.y));
                MotionParticle {
                    position: start,
                    velocity: (dest - start) / steps,
                    pixel: p,
                }
            })
            .collect();

        ExplodePlan {
            explosion,
            implosion,
        }
    }
}

impl Effect for ExplodeParams {
    fn name(&self) -> &'static str {
        "explode"
    }

    fn validate(&self) -> MatrixFxResult<()> {
        if self.explosion_steps == 0 || self.implosion_steps == 0 {
            return Err(MatrixFxError::validation(
                "explode.explosion_steps and explode.implosion_steps must be >= 1",
            ));
        }
        let finite = [
            self.min_speed,
            self.max_speed,
            self.spawn_radius_min,
            self.spawn_radius_max,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(MatrixFxError::validation("explode speeds and radii must be finite"));
        }
        if self.min_speed < 0.0 || self.min_speed > self.max_speed {
            return Err(MatrixFxError::validation(
                "explode speeds must satisfy 0 <= min_speed <= max_speed",
            ));
        }
        if self.spawn_radius_min < 0.0 || self.spawn_radius_min > self.spawn_radius_max {
            return Err(MatrixFxError::validation(
                "explode radii must satisfy 0 <= spawn_radius_min <= spawn_radius_max",
            ));
        }
        Ok(())
    }

    fn frames<'r>(&self, endpoints: Endpoints, rng: &'r mut dyn RandomSource) -> FrameStream<'r> {
        let plan = self.plan(&endpoints.old, &endpoints.new, endpoints.canvas, rng);
        tracing::debug!(
            explosion = plan.explosion.len(),
            implosion = plan.implosion.len(),
            "explode particles spawned"
        );
        Box::new(ExplodeFrames {
            params: self.clone(),
            canvas: endpoints.canvas,
            alive: vec![true; plan.explosion.len()],
            plan,
            phase: Phase::Explosion(0),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Explosion(u32),
    Implosion(u32),
    Done,
}

struct ExplodeFrames {
    params: ExplodeParams,
    canvas: Canvas,
    plan: ExplodePlan,
    /// Explosion particles still on the canvas; once cleared a particle never comes back.
    alive: Vec<bool>,
    phase: Phase,
}

impl ExplodeFrames {
    fn explosion_frame(&mut self) -> PixelSet {
        let mut frame = PixelSet::new();
        for (particle, alive) in self.plan.explosion.iter_mut().zip(self.alive.iter_mut()) {
            if !*alive {
                continue;
            }
            particle.position += particle.velocity;
            if self
                .canvas
                .contains_point(particle.position.x, particle.position.y)
            {
                frame.insert(particle.cell());
            } else {
                *alive = false;
            }
        }
        frame
    }

    fn implosion_frame(&mut self, last: bool) -> PixelSet {
        let mut frame = PixelSet::new();
        for particle in &mut self.plan.implosion {
            particle.position = if last {
                Vec2::new(f64::from(particle.pixel.x), f64::from(particle.pixel.y))
            } else {
                particle.position + particle.velocity
            };
            let cell = particle.cell();
            if self.canvas.contains(cell) {
                frame.insert(cell);
            }
        }
        frame
    }
}

impl Iterator for ExplodeFrames {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let hold = millis(self.params.frame_ms);
        let explosion_steps = self.params.explosion_steps.max(1);
        let implosion_steps = self.params.implosion_steps.max(1);
        match self.phase {
            Phase::Explosion(step) => {
                let pixels = self.explosion_frame();
                let last = step + 1 >= explosion_steps;
                self.phase = if last {
                    Phase::Implosion(0)
                } else {
                    Phase::Explosion(step + 1)
                };
                let hold = if last {
                    hold + millis(self.params.pause_ms)
                } else {
                    hold
                };
                Some(Frame::new(pixels, hold))
            }
            Phase::Implosion(step) => {
                let last = step + 1 >= implosion_steps;
                let pixels = self.implosion_frame(last);
                self.phase = if last {
                    Phase::Done
                } else {
                    Phase::Implosion(step + 1)
                };
                Some(Frame::new(pixels, hold))
            }
            Phase::Done => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/explode.rs"]
mod tests;
