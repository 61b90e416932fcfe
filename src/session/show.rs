use std::path::Path;
use std::time::Duration;

use anyhow::Context;

use crate::effects::Effect;
use crate::effects::spec::EffectSpec;
use crate::foundation::core::Canvas;
use crate::foundation::error::{MatrixFxError, MatrixFxResult};
use crate::foundation::random::{from_entropy, seeded};
use crate::render::scheduler::FrameScheduler;
use crate::render::sink::CanvasSink;
use crate::session::player::{PlayReport, Player};
use crate::text::font::FontSelector;

/// One transition in a show.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShowStep {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub effect: EffectSpec,
    /// How long the target text stays up after the transition.
    #[serde(default)]
    pub hold_ms: u64,
}

/// A scripted sequence of transitions, loaded from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShowConfig {
    #[serde(default)]
    pub canvas: Canvas,
    #[serde(default)]
    pub font: FontSelector,
    /// Fixed seed for reproducible runs; entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub steps: Vec<ShowStep>,
}

impl ShowConfig {
    pub fn from_json_str(json: &str) -> MatrixFxResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| MatrixFxError::serde(format!("show config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> MatrixFxResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read show config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> MatrixFxResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MatrixFxError::serde(e.to_string()))
    }

    pub fn validate(&self) -> MatrixFxResult<()> {
        self.canvas.validate()?;
        for (i, step) in self.steps.iter().enumerate() {
            step.effect
                .validate()
                .map_err(|e| MatrixFxError::validation(format!("steps[{i}]: {e}")))?;
        }
        Ok(())
    }
}

/// What a show run did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShowReport {
    pub steps: Vec<PlayReport>,
    pub cancelled: bool,
}

impl ShowReport {
    pub fn frames_presented(&self) -> usize {
        self.steps.iter().map(|s| s.frames).sum()
    }
}

/// Play every step of `config` on `sink`, in order.
///
/// A cancelled step is settled onto its target text and ends the show.
#[tracing::instrument(skip(config, sink, scheduler), fields(steps = config.steps.len()))]
pub fn run_show<S>(
    config: &ShowConfig,
    sink: &mut S,
    scheduler: FrameScheduler,
) -> MatrixFxResult<ShowReport>
where
    S: CanvasSink + ?Sized,
{
    config.validate()?;
    if sink.canvas() != config.canvas {
        return Err(MatrixFxError::validation(format!(
            "show canvas {}x{} does not match sink {}x{}",
            config.canvas.width,
            config.canvas.height,
            sink.width(),
            sink.height()
        )));
    }

    let mut rng = config.seed.map(seeded).unwrap_or_else(from_entropy);
    let mut player = Player::new(sink, scheduler).with_font(config.font);
    let mut report = ShowReport::default();

    for (index, step) in config.steps.iter().enumerate() {
        let played = player.play_text(&step.effect, &step.from, &step.to, &mut rng)?;
        report.steps.push(played);
        if played.is_cancelled() {
            tracing::info!(step = index, "show cancelled");
            let target = player.rasterize(&step.to);
            player.settle(&target)?;
            report.cancelled = true;
            break;
        }
        if !player
            .scheduler()
            .pause(Duration::from_millis(step.hold_ms))
        {
            tracing::info!(step = index, "show cancelled during hold");
            report.cancelled = true;
            break;
        }
    }
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/session/show.rs"]
mod tests;
