use crate::foundation::core::Rect;
use crate::palette::color::PaletteColor;

/// Anything the rasterizer can draw into.
///
/// `put` must silently drop coordinates outside [`PixelTarget::bounds`]; primitives rely on that
/// and never pre-clip.
pub trait PixelTarget {
    /// Drawable area.
    fn bounds(&self) -> Rect;

    /// Write one pixel, ignoring out-of-bounds coordinates.
    fn put(&mut self, x: i32, y: i32, color: PaletteColor);
}

/// A view that forwards only pixels inside `clip`.
pub struct Clipped<'a, T: PixelTarget + ?Sized> {
    inner: &'a mut T,
    clip: Rect,
}

impl<'a, T: PixelTarget + ?Sized> Clipped<'a, T> {
    /// Restrict `inner` to `clip` (further limited to the inner bounds).
    pub fn new(inner: &'a mut T, clip: Rect) -> Self {
        let clip = clip
            .intersect(inner.bounds())
            .unwrap_or(Rect::new(0, 0, 0, 0));
        Self { inner, clip }
    }
}

impl<T: PixelTarget + ?Sized> PixelTarget for Clipped<'_, T> {
    fn bounds(&self) -> Rect {
        self.clip
    }

    fn put(&mut self, x: i32, y: i32, color: PaletteColor) {
        if self.clip.contains(x, y) {
            self.inner.put(x, y, color);
        }
    }
}
