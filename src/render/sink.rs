use std::io::Write;

use crate::foundation::core::{Canvas, Pixel};
use crate::foundation::error::{MatrixFxError, MatrixFxResult};
use crate::pixels::set::PixelSet;

/// Display contract consumed by the scheduler.
///
/// `present` replaces the whole visible frame; there is no partial-update API. The sink is borrowed
/// mutably by whoever is animating, so two effects can never write to it at the same time.
pub trait CanvasSink {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Replace the visible frame with `frame`.
    fn present(&mut self, frame: &PixelSet) -> MatrixFxResult<()>;

    fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width(),
            height: self.height(),
        }
    }
}

impl<S: CanvasSink + ?Sized> CanvasSink for &mut S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn present(&mut self, frame: &PixelSet) -> MatrixFxResult<()> {
        (**self).present(frame)
    }
}

/// Records every presented frame; used by tests and offline export.
#[derive(Debug, Clone)]
pub struct InMemorySink {
    canvas: Canvas,
    frames: Vec<PixelSet>,
}

impl InMemorySink {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            frames: Vec::new(),
        }
    }

    /// Frames in presentation order.
    pub fn frames(&self) -> &[PixelSet] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&PixelSet> {
        self.frames.last()
    }

    pub fn into_frames(self) -> Vec<PixelSet> {
        self.frames
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl CanvasSink for InMemorySink {
    fn width(&self) -> u32 {
        self.canvas.width
    }

    fn height(&self) -> u32 {
        self.canvas.height
    }

    fn present(&mut self, frame: &PixelSet) -> MatrixFxResult<()> {
        self.frames.push(frame.clip(self.canvas));
        Ok(())
    }
}

/// Draws frames as text rows (`#` lit, `.` dark) on any writer.
pub struct TerminalSink<W: Write> {
    canvas: Canvas,
    out: W,
    /// Move the cursor home before each frame so the matrix redraws in place.
    ansi_home: bool,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(canvas: Canvas, out: W) -> Self {
        Self {
            canvas,
            out,
            ansi_home: false,
        }
    }

    pub fn with_ansi_home(mut self, enabled: bool) -> Self {
        self.ansi_home = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render a frame as `height` lines of `width` characters.
pub fn frame_to_text(frame: &PixelSet, canvas: Canvas) -> String {
    let mut s = String::with_capacity(canvas.total_pixels() + canvas.height as usize);
    for y in 0..canvas.height_i32() {
        for x in 0..canvas.width_i32() {
            s.push(if frame.contains(Pixel::new(x, y)) {
                '#'
            } else {
                '.'
            });
        }
        s.push('\n');
    }
    s
}

impl<W: Write> CanvasSink for TerminalSink<W> {
    fn width(&self) -> u32 {
        self.canvas.width
    }

    fn height(&self) -> u32 {
        self.canvas.height
    }

    fn present(&mut self, frame: &PixelSet) -> MatrixFxResult<()> {
        let text = frame_to_text(frame, self.canvas);
        let res = if self.ansi_home {
            write!(self.out, "\x1b[H{text}")
        } else {
            writeln!(self.out, "{text}")
        };
        res.and_then(|()| self.out.flush())
            .map_err(|e| MatrixFxError::sink(format!("terminal write failed: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
