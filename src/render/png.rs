use std::path::Path;

use anyhow::Context as _;
use image::{GrayImage, Luma};

use crate::foundation::core::{Canvas, Pixel};
use crate::foundation::error::{MatrixFxError, MatrixFxResult};
use crate::pixels::set::PixelSet;
use crate::render::sink::CanvasSink;

const LIT: Luma<u8> = Luma([255]);
const DARK: Luma<u8> = Luma([24]);
const SEPARATOR: Luma<u8> = Luma([96]);

/// Collects frames and writes them as one vertical PNG strip, top to bottom.
#[derive(Debug, Clone)]
pub struct PngStripSink {
    canvas: Canvas,
    scale: u32,
    frames: Vec<PixelSet>,
}

impl PngStripSink {
    /// `scale` is the edge length in image pixels of one LED.
    pub fn new(canvas: Canvas, scale: u32) -> MatrixFxResult<Self> {
        if scale == 0 {
            return Err(MatrixFxError::validation("png scale must be > 0"));
        }
        strip_dimensions(canvas, scale, 1)?;
        Ok(Self {
            canvas,
            scale,
            frames: Vec::new(),
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn to_image(&self) -> MatrixFxResult<GrayImage> {
        strip_image(&self.frames, self.canvas, self.scale)
    }

    pub fn write(&self, path: &Path) -> MatrixFxResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        self.to_image()?
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

impl CanvasSink for PngStripSink {
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

/// Image size of a strip of `frames` frames; fails when it does not fit in `u32`.
fn strip_dimensions(canvas: Canvas, scale: u32, frames: usize) -> MatrixFxResult<(u32, u32)> {
    let too_large = || {
        MatrixFxError::validation(format!(
            "png strip of {frames} frames at scale {scale} is too large"
        ))
    };
    let width = canvas.width.checked_mul(scale).ok_or_else(too_large)?;
    let frame_h = canvas.height.checked_mul(scale).ok_or_else(too_large)?;
    let n = u32::try_from(frames).map_err(|_| too_large())?;
    let height = n
        .checked_mul(frame_h)
        .and_then(|h| h.checked_add(n.saturating_sub(1).checked_mul(scale)?))
        .ok_or_else(too_large)?;
    Ok((width, height.max(1)))
}

/// Lay frames out vertically, one scaled separator row between consecutive frames.
pub fn strip_image(frames: &[PixelSet], canvas: Canvas, scale: u32) -> MatrixFxResult<GrayImage> {
    let (width, height) = strip_dimensions(canvas, scale, frames.len())?;
    let frame_h = canvas.height * scale;
    let mut img = GrayImage::from_pixel(width, height, SEPARATOR);

    for (i, frame) in frames.iter().enumerate() {
        let i = i as u32;
        let top = i * frame_h + i * scale;
        for y in 0..canvas.height {
            for x in 0..canvas.width {
                let lit = frame.contains(Pixel::new(x as i32, y as i32));
                let color = if lit { LIT } else { DARK };
                for dy in 0..scale {
                    for dx in 0..scale {
                        img.put_pixel(x * scale + dx, top + y * scale + dy, color);
                    }
                }
            }
        }
    }
    Ok(img)
}

#[cfg(test)]
#[path = "../../tests/unit/render/png.rs"]
mod tests;
