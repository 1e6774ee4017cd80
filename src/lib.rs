//! inkframe composes packed framebuffers for seven-colour e-paper panels.
//!
//! Frames are 4 bits per pixel, two pixels per byte, high nibble first, each nibble one of the
//! seven [`PaletteColor`] codes. The crate covers:
//!
//! - Quantizing RGB into the palette ([`quantize`], [`pack_rgb888`])
//! - Drawing into a [`PixelBuffer`]: bitmap text, rounded rectangles, QR modules
//! - Compositing the battery status badge over a caller-supplied frame without touching it
//! - A [`Presenter`] that owns a [`FrameSink`] and degrades gracefully when memory is short
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Geometry, errors, and configuration.
pub mod foundation;
/// Battery badge overlay.
pub mod overlay;
/// Palette colours and the RGB quantizer.
pub mod palette;
/// Module grid drawing.
pub mod qr;
/// Pixel storage and drawing primitives.
pub mod raster;
/// Sinks and the presenter.
pub mod render;

pub use crate::foundation::config::{CONFIGURATION_STATUS, RenderConfig, SetupScreen};
pub use crate::foundation::core::{Canvas, Rect};
pub use crate::foundation::error::{InkError, InkResult};

pub use crate::overlay::badge::{BadgeLayout, composite_badge, composite_badge_in_place};
pub use crate::overlay::battery::{draw_battery_icon, fill_color, fill_height, percent_label};
pub use crate::palette::color::PaletteColor;
pub use crate::palette::quantize::{Rgb, pack_rgb888, quantize, quantize_channels};
pub use crate::qr::grid::{ModuleGrid, wifi_payload};
pub use crate::qr::placement::{Caption, QrAnchor, QrPlacement, place_qr};
pub use crate::raster::buffer::{BufferAllocator, PixelBuffer};
pub use crate::raster::shapes::{draw_modules, draw_rounded_rect, fill_rect};
pub use crate::raster::target::{Clipped, PixelTarget};
pub use crate::raster::text::{draw_text, text_width};
pub use crate::render::pipeline::{OverlayStatus, Presenter, Screen};
pub use crate::render::sink::{
    FrameSink, InMemorySink, PackedFileSink, PngPreviewSink, PresentedFrame,
};
