use crate::foundation::core::Rect;
use crate::palette::color::PaletteColor;
use crate::qr::grid::ModuleGrid;
use crate::raster::target::PixelTarget;

/// Fill `rect` with `color`. Only the part inside the target is visited.
pub fn fill_rect<T: PixelTarget + ?Sized>(target: &mut T, rect: Rect, color: PaletteColor) {
    let Some(area) = rect.intersect(target.bounds()) else {
        return;
    };
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            target.put(x, y, color);
        }
    }
}

/// Corner radius actually used for a `width`×`height` rectangle.
pub fn clamp_radius(width: i32, height: i32, radius: i32) -> i32 {
    radius.min(width / 2).min(height / 2).max(0)
}

/// Visit each corner pixel of a radius-`r` rectangle together with its squared distance from
/// the corner circle centre, which sits `r - 1` pixels into the corner.
fn for_each_corner_pixel(rect: Rect, r: i32, mut f: impl FnMut(i32, i32, i64)) {
    let Rect {
        x,
        y,
        width: w,
        height: h,
    } = rect;
    for oy in 0..r {
        for ox in 0..r {
            let dist_sq = i64::from(ox) * i64::from(ox) + i64::from(oy) * i64::from(oy);
            let left = x.saturating_add(r - 1 - ox);
            let right = x.saturating_add(w - r).saturating_add(ox);
            let top = y.saturating_add(r - 1 - oy);
            let bottom = y.saturating_add(h - r).saturating_add(oy);
            f(left, top, dist_sq);
            f(right, top, dist_sq);
            f(left, bottom, dist_sq);
            f(right, bottom, dist_sq);
        }
    }
}

/// Filled rectangle with circular corners and a 1px border.
///
/// The radius is clamped to half the smaller side. The interior is filled first (body band,
/// top and bottom bands, then corner quarter-discs) and the border is drawn afterwards, so border
/// pixels overwrite the outer ring of the fill. Nothing is written outside `rect`.
pub fn draw_rounded_rect<T: PixelTarget + ?Sized>(
    target: &mut T,
    rect: Rect,
    radius: i32,
    fill: PaletteColor,
    border: PaletteColor,
) {
    if rect.is_empty()
        || rect.x.checked_add(rect.width).is_none()
        || rect.y.checked_add(rect.height).is_none()
        || rect.intersect(target.bounds()).is_none()
    {
        return;
    }
    let Rect {
        x,
        y,
        width: w,
        height: h,
    } = rect;
    let r = clamp_radius(w, h, radius);
    let r_sq = i64::from(r) * i64::from(r);
    let inner_sq = i64::from(r - 1) * i64::from(r - 1);

    fill_rect(target, Rect::new(x, y + r, w, h - 2 * r), fill);
    fill_rect(target, Rect::new(x + r, y, w - 2 * r, r), fill);
    fill_rect(target, Rect::new(x + r, y + h - r, w - 2 * r, r), fill);
    for_each_corner_pixel(rect, r, |px, py, d| {
        if d <= r_sq {
            target.put(px, py, fill);
        }
    });

    // Straight edges reach one pixel into each corner column/row to meet the arc.
    let edge_start = (r - 1).max(0);
    let edge_w = (w - r).saturating_add(1).min(w) - edge_start;
    let edge_h = (h - r).saturating_add(1).min(h) - edge_start;
    fill_rect(target, Rect::new(x + edge_start, y, edge_w, 1), border);
    fill_rect(target, Rect::new(x + edge_start, y + h - 1, edge_w, 1), border);
    fill_rect(target, Rect::new(x, y + edge_start, 1, edge_h), border);
    fill_rect(target, Rect::new(x + w - 1, y + edge_start, 1, edge_h), border);
    for_each_corner_pixel(rect, r, |px, py, d| {
        if d <= r_sq && d > inner_sq {
            target.put(px, py, border);
        }
    });
}

/// Draw a module grid with its top-left module at `(x0, y0)`.
///
/// Cell `(row, col)` becomes an `scale`×`scale` block at `(x0 + col*scale, y0 + row*scale)`:
/// black for dark modules and white for light ones, so the code never inherits whatever was
/// underneath.
pub fn draw_modules<T: PixelTarget + ?Sized>(
    target: &mut T,
    grid: &ModuleGrid,
    x0: i32,
    y0: i32,
    scale: i32,
) {
    if scale <= 0 {
        return;
    }
    for (row, col, dark) in grid.cells() {
        let color = if dark {
            PaletteColor::Black
        } else {
            PaletteColor::White
        };
        let block = Rect::new(
            x0.saturating_add((col as i32).saturating_mul(scale)),
            y0.saturating_add((row as i32).saturating_mul(scale)),
            scale,
            scale,
        );
        fill_rect(target, block, color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/shapes.rs"]
mod tests;
