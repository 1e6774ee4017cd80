//! Packed framebuffer storage and the primitives that draw into it.
//!
//! Every primitive draws through [`target::PixelTarget`], so the same code paints a full
//! [`buffer::PixelBuffer`] or a [`target::Clipped`] view of one.

/// Packed 4bpp pixel storage and its allocator.
pub mod buffer;
/// Bitmap font.
pub mod font;
/// Rectangles, rounded rectangles, and module blocks.
pub mod shapes;
/// Draw target seam and clipping view.
pub mod target;
/// Scaled bitmap text.
pub mod text;
