use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::foundation::error::MatrixFxResult;
use crate::pixels::set::PixelSet;
use crate::render::sink::CanvasSink;

/// Longest uninterrupted sleep; waits are sliced so a stop request lands within one slice.
const WAIT_SLICE: Duration = Duration::from_millis(10);

/// One rendered frame and how long it stays on the display before the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub pixels: PixelSet,
    pub hold: Duration,
}

impl Frame {
    pub fn new(pixels: PixelSet, hold: Duration) -> Self {
        Self { pixels, hold }
    }
}

/// Position of one frame within a fixed-length run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    pub index: usize,
    pub count: usize,
}

impl Tick {
    /// Elapsed fraction `index / (count - 1)`; a run of one frame is complete at its only frame.
    pub fn fraction(self) -> f64 {
        if self.count <= 1 {
            return 1.0;
        }
        self.index as f64 / (self.count - 1) as f64
    }

    pub fn is_last(self) -> bool {
        self.index + 1 >= self.count
    }
}

/// Cooperative stop signal shared between the animating thread and whoever wants it to stop.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Clear a previous request so the token can be reused for the next animation.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// How a scheduled run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { frames_presented: usize },
    /// Stopped at a frame boundary. The sink shows the last presented frame, which is not
    /// necessarily the target.
    Cancelled { frames_presented: usize },
}

impl RunOutcome {
    pub fn frames_presented(self) -> usize {
        match self {
            Self::Completed { frames_presented } | Self::Cancelled { frames_presented } => {
                frames_presented
            }
        }
    }

    pub fn is_cancelled(self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Paces frames onto a sink, strictly one after another.
#[derive(Clone, Debug)]
pub struct FrameScheduler {
    cancel: CancelToken,
    paced: bool,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(CancelToken::new())
    }
}

impl FrameScheduler {
    pub fn new(cancel: CancelToken) -> Self {
        Self {
            cancel,
            paced: true,
        }
    }

    /// Scheduler that never sleeps; frame holds are ignored. For tests and offline export.
    pub fn unpaced(cancel: CancelToken) -> Self {
        Self {
            cancel,
            paced: false,
        }
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    pub fn is_paced(&self) -> bool {
        self.paced
    }

    /// Present `frame_count` frames produced by `body`, waiting `interval` after each.
    pub fn run<S, F>(
        &self,
        sink: &mut S,
        frame_count: usize,
        interval: Duration,
        mut body: F,
    ) -> MatrixFxResult<RunOutcome>
    where
        S: CanvasSink + ?Sized,
        F: FnMut(Tick) -> PixelSet,
    {
        let frames = (0..frame_count).map(|index| {
            let pixels = body(Tick {
                index,
                count: frame_count,
            });
            Frame::new(pixels, interval)
        });
        self.play(sink, frames)
    }

    /// Drive a lazy frame stream to completion or cancellation.
    ///
    /// The token is checked before each frame is computed and during each wait, so a stop request
    /// never yields a half-built frame.
    pub fn play<S, I>(&self, sink: &mut S, frames: I) -> MatrixFxResult<RunOutcome>
    where
        S: CanvasSink + ?Sized,
        I: IntoIterator<Item = Frame>,
    {
        let mut presented = 0usize;
        let mut frames = frames.into_iter();
        loop {
            if self.cancel.is_cancelled() {
                return Ok(self.cancelled(presented));
            }
            let Some(frame) = frames.next() else {
                break;
            };
            sink.present(&frame.pixels)?;
            presented += 1;
            if !self.pause(frame.hold) {
                return Ok(self.cancelled(presented));
            }
        }
        Ok(RunOutcome::Completed {
            frames_presented: presented,
        })
    }

    fn cancelled(&self, presented: usize) -> RunOutcome {
        tracing::info!(frames_presented = presented, "animation cancelled");
        RunOutcome::Cancelled {
            frames_presented: presented,
        }
    }

    /// Block for `hold` (immediately when unpaced); returns `false` when cancelled meanwhile.
    pub fn pause(&self, hold: Duration) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        if !self.paced || hold.is_zero() {
            return true;
        }
        let deadline = Instant::now() + hold;
        loop {
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            std::thread::sleep((deadline - now).min(WAIT_SLICE));
            if self.cancel.is_cancelled() {
                return false;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scheduler.rs"]
mod tests;
