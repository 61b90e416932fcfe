use crate::effects::{Effect, Endpoints};
use crate::foundation::core::Canvas;
use crate::foundation::error::MatrixFxResult;
use crate::foundation::random::RandomSource;
use crate::pixels::set::PixelSet;
use crate::render::scheduler::{CancelToken, FrameScheduler, RunOutcome};
use crate::render::sink::CanvasSink;
use crate::text::font::FontSelector;
use crate::text::raster::{BitmapRasterizer, Rasterizer, rasterize_to_pixelset};

/// Summary of one transition run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayReport {
    pub effect: &'static str,
    pub frames: usize,
    pub outcome: RunOutcome,
}

impl PlayReport {
    pub fn is_cancelled(&self) -> bool {
        self.outcome.is_cancelled()
    }
}

/// Runs transitions on an exclusively borrowed sink.
pub struct Player<'s, S: CanvasSink + ?Sized> {
    sink: &'s mut S,
    scheduler: FrameScheduler,
    rasterizer: Box<dyn Rasterizer>,
    font: FontSelector,
}

impl<'s, S: CanvasSink + ?Sized> Player<'s, S> {
    /// Player with the built-in bitmap rasterizer and proportional font.
    pub fn new(sink: &'s mut S, scheduler: FrameScheduler) -> Self {
        Self {
            sink,
            scheduler,
            rasterizer: Box::new(BitmapRasterizer::new()),
            font: FontSelector::default(),
        }
    }

    pub fn with_rasterizer(mut self, rasterizer: Box<dyn Rasterizer>) -> Self {
        self.rasterizer = rasterizer;
        self
    }

    pub fn with_font(mut self, font: FontSelector) -> Self {
        self.font = font;
        self
    }

    pub fn canvas(&self) -> Canvas {
        self.sink.canvas()
    }

    pub fn font(&self) -> FontSelector {
        self.font
    }

    /// Token that stops the current and any later animation on this player.
    pub fn cancel_token(&self) -> CancelToken {
        self.scheduler.cancel_token().clone()
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn rasterize(&self, text: &str) -> PixelSet {
        rasterize_to_pixelset(self.rasterizer.as_ref(), text, self.font, self.canvas())
    }

    /// Transition from `old` to `new` text.
    #[tracing::instrument(skip(self, effect, rng), fields(effect = effect.name()))]
    pub fn play_text(
        &mut self,
        effect: &dyn Effect,
        old: &str,
        new: &str,
        rng: &mut dyn RandomSource,
    ) -> MatrixFxResult<PlayReport> {
        let endpoints = Endpoints::new(self.rasterize(old), self.rasterize(new), self.canvas())
            .with_char_counts(old.chars().count(), new.chars().count());
        self.play(effect, endpoints, rng)
    }

    /// Transition between pre-rasterized sets. Character counts default to one per set.
    pub fn play_pixels(
        &mut self,
        effect: &dyn Effect,
        old: PixelSet,
        new: PixelSet,
        rng: &mut dyn RandomSource,
    ) -> MatrixFxResult<PlayReport> {
        let endpoints = Endpoints::new(old, new, self.canvas());
        self.play(effect, endpoints, rng)
    }

    /// Run prepared endpoints.
    pub fn play(
        &mut self,
        effect: &dyn Effect,
        endpoints: Endpoints,
        rng: &mut dyn RandomSource,
    ) -> MatrixFxResult<PlayReport> {
        effect.validate()?;
        tracing::debug!(
            old = endpoints.old.len(),
            new = endpoints.new.len(),
            "transition start"
        );
        let outcome = self
            .scheduler
            .play(&mut *self.sink, effect.frames(endpoints, rng))?;
        Ok(PlayReport {
            effect: effect.name(),
            frames: outcome.frames_presented(),
            outcome,
        })
    }

    /// Present `target` directly, bypassing the scheduler. Restores a clean frame after a
    /// cancelled transition.
    pub fn settle(&mut self, target: &PixelSet) -> MatrixFxResult<()> {
        self.sink.present(&target.clip(self.canvas()))
    }

    /// Present `text` as a static frame and return its pixels.
    pub fn show_text(&mut self, text: &str) -> MatrixFxResult<PixelSet> {
        let pixels = self.rasterize(text);
        self.sink.present(&pixels)?;
        Ok(pixels)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/player.rs"]
mod tests;
