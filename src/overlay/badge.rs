use crate::foundation::core::{Canvas, Rect};
use crate::foundation::error::{InkError, InkResult};
use crate::overlay::battery::{ICON_WIDTH, clamp_percentage, draw_battery_icon, percent_label};
use crate::palette::color::PaletteColor;
use crate::raster::buffer::{BufferAllocator, PixelBuffer};
use crate::raster::shapes::draw_rounded_rect;
use crate::raster::target::{Clipped, PixelTarget};
use crate::raster::text::{draw_text, text_width};

/// Placement constants for the status badge.
///
/// The panel is mounted rotated 90°, so the viewer's "top" edge is the buffer's right edge
/// (`x = width - 1`). `width`/`height` are the badge size as the viewer sees it; in buffer space
/// the rectangle is `height` wide and `width` tall. The values are calibrated against the
/// physical mounting rather than derived from a rotation transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BadgeLayout {
    /// Viewer-space width (buffer-space height).
    pub width: i32,
    /// Viewer-space height (buffer-space width).
    pub height: i32,
    /// Gap between the badge and the viewer's top edge.
    pub edge_margin: i32,
    /// Backdrop corner radius before clamping.
    pub corner_radius: i32,
    /// Percentage text scale.
    pub text_scale: i32,
    /// Text offset from the badge's buffer-space top.
    pub text_top: i32,
    /// Battery icon offset measured back from the badge's buffer-space bottom.
    pub icon_bottom_offset: i32,
    /// Backdrop colour.
    pub fill: PaletteColor,
    /// Backdrop border and text colour.
    pub border: PaletteColor,
}

impl Default for BadgeLayout {
    fn default() -> Self {
        Self {
            width: 90,
            height: 30,
            edge_margin: 10,
            corner_radius: 8,
            text_scale: 2,
            text_top: 8,
            icon_bottom_offset: 25,
            fill: PaletteColor::White,
            border: PaletteColor::Black,
        }
    }
}

impl BadgeLayout {
    /// Reject layouts that cannot produce a badge.
    pub fn validate(&self) -> InkResult<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(InkError::validation("badge width/height must be > 0"));
        }
        for (name, v) in [
            ("edge_margin", self.edge_margin),
            ("corner_radius", self.corner_radius),
            ("text_top", self.text_top),
            ("icon_bottom_offset", self.icon_bottom_offset),
        ] {
            if v < 0 {
                return Err(InkError::validation(format!("badge {name} must be >= 0")));
            }
        }
        if self.text_scale <= 0 {
            return Err(InkError::validation("badge text_scale must be > 0"));
        }
        Ok(())
    }

    /// Badge rectangle in buffer space, before clipping to the canvas.
    pub fn region(&self, canvas: Canvas) -> Rect {
        let cw = canvas.width as i32;
        let ch = canvas.height as i32;
        Rect::new(
            cw.saturating_sub(self.height).saturating_sub(self.edge_margin),
            ch.saturating_sub(self.width) / 2,
            self.height,
            self.width,
        )
    }

    /// The part of [`BadgeLayout::region`] that lands on the canvas; the only pixels compositing
    /// may change.
    pub fn visible_region(&self, canvas: Canvas) -> Option<Rect> {
        self.region(canvas).intersect(canvas.bounds())
    }
}

/// Draw the badge for `percentage` into `target`, clipped to the badge rectangle.
///
/// Returns the rectangle drawing was confined to.
pub fn draw_badge<T: PixelTarget + ?Sized>(
    target: &mut T,
    layout: &BadgeLayout,
    region: Rect,
    percentage: i32,
) -> Rect {
    let percentage = clamp_percentage(percentage);
    let mut view = Clipped::new(target, region);

    draw_rounded_rect(
        &mut view,
        region,
        layout.corner_radius,
        layout.fill,
        layout.border,
    );

    let label = percent_label(percentage);
    let text_x = region.x + (region.width - text_width(&label, layout.text_scale)) / 2;
    let text_y = region.y + layout.text_top;
    draw_text(
        &mut view,
        &label,
        text_x,
        text_y,
        layout.text_scale,
        layout.border,
    );

    let icon_x = region.x + (region.width - ICON_WIDTH) / 2;
    let icon_y = region.bottom() - layout.icon_bottom_offset;
    draw_battery_icon(&mut view, icon_x, icon_y, percentage);

    tracing::debug!(
        percentage,
        x = region.x,
        y = region.y,
        w = region.width,
        h = region.height,
        "drew status badge"
    );
    view.bounds()
}

/// Draw the badge directly into `frame`. Pixels outside the visible badge region are untouched.
pub fn composite_badge_in_place(
    frame: &mut PixelBuffer,
    layout: &BadgeLayout,
    percentage: i32,
) -> Option<Rect> {
    let canvas = frame.canvas();
    let visible = layout.visible_region(canvas)?;
    draw_badge(frame, layout, layout.region(canvas), percentage);
    Some(visible)
}

/// Composite the badge onto a copy of a packed frame.
///
/// The input is never modified. A short frame is a [`InkError::SizeMismatch`]; a scratch buffer
/// the allocator cannot provide is an [`InkError::Allocation`], which callers treat as "show the
/// frame without the badge".
pub fn composite_badge(
    canvas: Canvas,
    frame: &[u8],
    layout: &BadgeLayout,
    percentage: i32,
    alloc: &BufferAllocator,
) -> InkResult<PixelBuffer> {
    let mut scratch = alloc.copy_of(canvas, frame)?;
    composite_badge_in_place(&mut scratch, layout, percentage);
    Ok(scratch)
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/badge.rs"]
mod tests;
