use std::path::PathBuf;

use anyhow::Context as _;

use crate::foundation::core::Canvas;
use crate::foundation::error::{InkError, InkResult};
use crate::palette::color::PaletteColor;
use crate::raster::buffer::checked_frame;

/// Destination for finished packed frames.
///
/// The panel transport lives behind this trait. `present` receives exactly
/// `canvas.packed_len()` bytes and must not retain the slice.
pub trait FrameSink: Send {
    /// Push one full frame to the display.
    fn present(&mut self, canvas: Canvas, packed: &[u8]) -> InkResult<()>;
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn present(&mut self, canvas: Canvas, packed: &[u8]) -> InkResult<()> {
        (**self).present(canvas, packed)
    }
}

/// A frame captured by [`InMemorySink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresentedFrame {
    /// Geometry the frame was presented with.
    pub canvas: Canvas,
    /// Packed pixels.
    pub data: Vec<u8>,
}

impl PresentedFrame {
    /// Palette colour at `(x, y)`, or `None` off-canvas or for a non-palette nibble.
    pub fn pixel(&self, x: u32, y: u32) -> Option<PaletteColor> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let byte = *self
            .data
            .get(y as usize * self.canvas.stride() + (x / 2) as usize)?;
        let code = if x % 2 == 0 { byte >> 4 } else { byte & 0x0F };
        PaletteColor::from_code(code)
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    pub(crate) frames: Vec<PresentedFrame>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames in presentation order.
    pub fn frames(&self) -> &[PresentedFrame] {
        &self.frames
    }

    /// Most recently presented frame.
    pub fn last(&self) -> Option<&PresentedFrame> {
        self.frames.last()
    }
}

impl FrameSink for InMemorySink {
    fn present(&mut self, canvas: Canvas, packed: &[u8]) -> InkResult<()> {
        self.frames.push(PresentedFrame {
            canvas,
            data: packed.to_vec(),
        });
        Ok(())
    }
}

/// Writes each presented frame's raw packed bytes to `path`, replacing the previous one.
#[derive(Clone, Debug)]
pub struct PackedFileSink {
    path: PathBuf,
}

impl PackedFileSink {
    /// Sink writing to `path`. Parent directories are created on first present.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FrameSink for PackedFileSink {
    fn present(&mut self, canvas: Canvas, packed: &[u8]) -> InkResult<()> {
        let frame = checked_frame(canvas, packed)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, frame)?;
        tracing::debug!(path = %self.path.display(), bytes = frame.len(), "wrote packed frame");
        Ok(())
    }
}

/// Renders each presented frame to a PNG using the palette's reference colours.
#[derive(Clone, Debug)]
pub struct PngPreviewSink {
    path: PathBuf,
}

impl PngPreviewSink {
    /// Sink writing to `path`. Parent directories are created on first present.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FrameSink for PngPreviewSink {
    fn present(&mut self, canvas: Canvas, packed: &[u8]) -> InkResult<()> {
        let rgb = unpack_rgb8(canvas, packed)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        image::save_buffer_with_format(
            &self.path,
            &rgb,
            canvas.width,
            canvas.height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "wrote png preview");
        Ok(())
    }
}

/// Expand a packed frame to interleaved RGB888 using [`PaletteColor::reference_rgb`].
pub fn unpack_rgb8(canvas: Canvas, packed: &[u8]) -> InkResult<Vec<u8>> {
    canvas.validate()?;
    let frame = checked_frame(canvas, packed)?;
    let mut out = Vec::with_capacity(frame.len() * 6);
    for (offset, &byte) in frame.iter().enumerate() {
        for code in [byte >> 4, byte & 0x0F] {
            let color = PaletteColor::from_code(code).ok_or_else(|| {
                InkError::validation(format!(
                    "packed frame byte {offset} (0x{byte:02x}) holds a non-palette nibble"
                ))
            })?;
            out.extend_from_slice(&color.reference_rgb());
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
