use crate::foundation::config::{CONFIGURATION_STATUS, RenderConfig};
use crate::foundation::core::Canvas;
use crate::foundation::error::{InkError, InkResult};
use crate::overlay::badge::composite_badge;
use crate::palette::color::PaletteColor;
use crate::qr::grid::ModuleGrid;
use crate::qr::placement::place_qr;
use crate::raster::buffer::{BufferAllocator, PixelBuffer, checked_frame};
use crate::raster::text::{draw_text, text_height, text_width};
use crate::render::sink::FrameSink;

/// Whether the battery badge made it onto the presented frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayStatus {
    /// The frame was presented with the badge composited.
    Applied,
    /// The badge could not be composited; the frame was presented unmodified.
    Skipped,
}

/// Which screen a presenter call ended up showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Centred status text.
    Message,
    /// Setup code with instructions.
    Setup,
    /// Seven-band palette test pattern.
    ColorBlocks,
}

/// Render a white screen with `text` centred on it.
pub fn message_screen(
    canvas: Canvas,
    text: &str,
    scale: i32,
    alloc: &BufferAllocator,
) -> InkResult<PixelBuffer> {
    let mut buf = alloc.blank(canvas, PaletteColor::White)?;
    let b = canvas.bounds();
    let x = (b.width - text_width(text, scale)) / 2;
    let y = b.height / 2 - text_height(scale) / 2;
    draw_text(&mut buf, text, x, y, scale, PaletteColor::Black);
    Ok(buf)
}

/// Render the setup screen: the code (if any) at the configured placement, then every caption.
pub fn setup_screen(
    config: &RenderConfig,
    grid: Option<&ModuleGrid>,
    alloc: &BufferAllocator,
) -> InkResult<PixelBuffer> {
    let mut buf = alloc.blank(config.canvas, PaletteColor::White)?;
    if let Some(grid) = grid {
        place_qr(&mut buf, grid, &config.setup.qr);
    }
    for caption in config.setup.all_captions() {
        caption.draw(&mut buf);
    }
    Ok(buf)
}

/// Seven vertical bands in palette order, left to right.
///
/// This is the panel's own test pattern and the screen of last resort, so it ignores any
/// allocation ceiling.
pub fn color_blocks(canvas: Canvas) -> InkResult<PixelBuffer> {
    let bands = PaletteColor::ALL.len() as u64;
    let width = u64::from(canvas.width);
    PixelBuffer::from_fn(canvas, |x, _| {
        let band = (u64::from(x) * bands / width) as usize;
        PaletteColor::ALL[band.min(PaletteColor::ALL.len() - 1)]
    })
}

/// Owns the frame sink and decides what reaches it.
///
/// Every entry point either presents exactly one full frame or returns an error without touching
/// the sink.
pub struct Presenter<S: FrameSink> {
    sink: S,
    config: RenderConfig,
    alloc: BufferAllocator,
}

impl<S: FrameSink> std::fmt::Debug for Presenter<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Presenter")
            .field("canvas", &self.config.canvas)
            .field("alloc", &self.alloc)
            .finish_non_exhaustive()
    }
}

impl<S: FrameSink> Presenter<S> {
    /// Validate `config` and wrap `sink`.
    pub fn new(sink: S, config: RenderConfig) -> InkResult<Self> {
        config.validate()?;
        let alloc = config.allocator();
        Ok(Self {
            sink,
            config,
            alloc,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Give the sink back.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Present a pre-packed frame unchanged. Surplus bytes are dropped; a short frame is an error
    /// and nothing is presented.
    #[tracing::instrument(skip(self, frame), fields(bytes = frame.len()))]
    pub fn display_frame(&mut self, frame: &[u8]) -> InkResult<()> {
        let canvas = self.config.canvas;
        let packed = checked_frame(canvas, frame).inspect_err(|e| {
            tracing::warn!(error = %e, "frame rejected; display left unchanged");
        })?;
        self.sink.present(canvas, packed)
    }

    /// Present a pre-packed frame with the battery badge composited over it.
    ///
    /// The caller's frame is never modified. If no scratch buffer can be had, or the frame holds
    /// nibbles outside the palette and cannot be copied, the frame is shown without the badge and
    /// [`OverlayStatus::Skipped`] is returned.
    #[tracing::instrument(skip(self, frame), fields(bytes = frame.len()))]
    pub fn display_frame_with_badge(
        &mut self,
        frame: &[u8],
        percentage: i32,
    ) -> InkResult<OverlayStatus> {
        let canvas = self.config.canvas;
        match composite_badge(canvas, frame, &self.config.badge, percentage, &self.alloc) {
            Ok(composited) => {
                self.sink.present(canvas, composited.as_bytes())?;
                Ok(OverlayStatus::Applied)
            }
            Err(e) if e.is_recoverable() => {
                tracing::warn!(error = %e, "badge skipped; presenting frame without overlay");
                self.display_frame(frame)?;
                Ok(OverlayStatus::Skipped)
            }
            Err(e @ InkError::Validation(_)) => {
                tracing::warn!(error = %e, "badge skipped; frame content is not palette-only");
                self.display_frame(frame)?;
                Ok(OverlayStatus::Skipped)
            }
            Err(e) => {
                tracing::warn!(error = %e, "frame rejected; display left unchanged");
                Err(e)
            }
        }
    }

    /// Present `text` centred on a white screen.
    #[tracing::instrument(skip(self))]
    pub fn show_message(&mut self, text: &str) -> InkResult<Screen> {
        let buf = message_screen(self.config.canvas, text, self.config.message_scale, &self.alloc)
            .inspect_err(|e| tracing::warn!(error = %e, "message screen not rendered"))?;
        self.sink.present(buf.canvas(), buf.as_bytes())?;
        Ok(Screen::Message)
    }

    /// Present the setup screen, falling back to colour blocks when it cannot be rendered.
    #[tracing::instrument(skip(self, grid), fields(has_code = grid.is_some()))]
    pub fn show_setup(&mut self, grid: Option<&ModuleGrid>) -> InkResult<Screen> {
        if grid.is_none() {
            tracing::warn!("no setup code supplied; drawing captions only");
        }
        match setup_screen(&self.config, grid, &self.alloc) {
            Ok(buf) => {
                self.sink.present(buf.canvas(), buf.as_bytes())?;
                Ok(Screen::Setup)
            }
            Err(e) if e.is_recoverable() => {
                tracing::warn!(error = %e, "setup screen not rendered; showing colour blocks");
                self.show_color_blocks()
            }
            Err(e) => Err(e),
        }
    }

    /// Present the seven-band test pattern.
    #[tracing::instrument(skip(self))]
    pub fn show_color_blocks(&mut self) -> InkResult<Screen> {
        let buf = color_blocks(self.config.canvas)?;
        self.sink.present(buf.canvas(), buf.as_bytes())?;
        Ok(Screen::ColorBlocks)
    }

    /// Route a device status: the configuration status shows the setup screen, anything else
    /// shows colour blocks.
    #[tracing::instrument(skip(self, grid))]
    pub fn show_status(&mut self, status: &str, grid: Option<&ModuleGrid>) -> InkResult<Screen> {
        if status == CONFIGURATION_STATUS {
            self.show_setup(grid)
        } else {
            self.show_color_blocks()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
