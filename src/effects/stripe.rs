use crate::effects::{Effect, Endpoints, FrameStream, millis};
use crate::foundation::core::Pixel;
use crate::foundation::error::{MatrixFxError, MatrixFxResult};
use crate::foundation::random::RandomSource;
use crate::pixels::set::PixelSet;
use crate::render::scheduler::Frame;

/// Stripe sweep: an inverting band of columns moves left to right over the text, leaving the new
/// text behind it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StripeParams {
    /// Columns covered by the band.
    pub stripe_width: u32,
    pub frame_ms: u64,
}

impl Default for StripeParams {
    fn default() -> Self {
        Self {
            stripe_width: 4,
            frame_ms: 10,
        }
    }
}

/// Frame with the band's left edge at `stripe_left`, over text columns `[min_x, max_x)`.
///
/// Columns left of the band show `new`, columns right of it show `old`, and columns under it show
/// the old column inverted over the full canvas height.
pub fn stripe_frame(
    endpoints: &Endpoints,
    columns: (i32, i32),
    stripe_left: i32,
    stripe_width: i32,
) -> PixelSet {
    let (min_x, max_x) = columns;
    let stripe_right = stripe_left.saturating_add(stripe_width);
    let mut frame = endpoints
        .new
        .filter(|p| p.x < stripe_left)
        .union(&endpoints.old.filter(|p| p.x >= stripe_right));

    let first = min_x.max(stripe_left);
    let last = max_x.min(stripe_right);
    for x in first..last {
        for y in 0..endpoints.canvas.height_i32() {
            let p = Pixel::new(x, y);
            if !endpoints.old.contains(p) {
                frame.insert(p);
            }
        }
    }
    frame.clip(endpoints.canvas)
}

impl Effect for StripeParams {
    fn name(&self) -> &'static str {
        "stripe"
    }

    fn validate(&self) -> MatrixFxResult<()> {
        if self.stripe_width == 0 {
            return Err(MatrixFxError::validation("stripe.stripe_width must be >= 1"));
        }
        Ok(())
    }

    fn frames<'r>(&self, endpoints: Endpoints, _rng: &'r mut dyn RandomSource) -> FrameStream<'r> {
        let hold = millis(self.frame_ms);
        let span = endpoints
            .old
            .union(&endpoints.new)
            .bounding_box()
            .map(|b| (b.min_x, b.max_x + 1));
        let Some(columns) = span else {
            return Box::new(std::iter::once(Frame::new(endpoints.new, hold)));
        };

        let width = i32::try_from(self.stripe_width.max(1)).unwrap_or(i32::MAX);
        let (min_x, max_x) = columns;
        Box::new(
            (min_x.saturating_sub(width)..=max_x)
                .map(move |left| Frame::new(stripe_frame(&endpoints, columns, left, width), hold)),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/stripe.rs"]
mod tests;
