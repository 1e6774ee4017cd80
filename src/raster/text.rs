use crate::foundation::core::Rect;
use crate::palette::color::PaletteColor;
use crate::raster::font::{GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH, glyph};
use crate::raster::shapes::fill_rect;
use crate::raster::target::PixelTarget;

/// Width covered by `text` at `scale`, including the trailing spacing column.
pub fn text_width(text: &str, scale: i32) -> i32 {
    let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
    chars.saturating_mul(GLYPH_ADVANCE).saturating_mul(scale.max(0))
}

/// Height of one line of text at `scale`.
pub fn text_height(scale: i32) -> i32 {
    GLYPH_HEIGHT * scale.max(0)
}

/// Draw `text` with its top-left corner at `(x, y)`.
///
/// Every set glyph bit becomes a `scale`×`scale` block. Characters without a bitmap draw nothing
/// but still advance. A non-positive scale draws nothing.
pub fn draw_text<T: PixelTarget + ?Sized>(
    target: &mut T,
    text: &str,
    x: i32,
    y: i32,
    scale: i32,
    color: PaletteColor,
) {
    if scale <= 0 {
        return;
    }
    for (i, ch) in text.chars().enumerate() {
        let g = glyph(ch);
        if g.is_blank() {
            continue;
        }
        let advance = GLYPH_ADVANCE.saturating_mul(scale);
        let origin_x = x.saturating_add((i as i32).saturating_mul(advance));
        for row in 0..GLYPH_HEIGHT {
            for col in 0..GLYPH_WIDTH {
                if g.is_set(col, row) {
                    let block = Rect::new(
                        origin_x.saturating_add(col.saturating_mul(scale)),
                        y.saturating_add(row.saturating_mul(scale)),
                        scale,
                        scale,
                    );
                    fill_rect(target, block, color);
                }
            }
        }
    }
}

/// Draw `text` horizontally centred on `center_x`.
pub fn draw_text_centered<T: PixelTarget + ?Sized>(
    target: &mut T,
    text: &str,
    center_x: i32,
    y: i32,
    scale: i32,
    color: PaletteColor,
) {
    let x = center_x - text_width(text, scale) / 2;
    draw_text(target, text, x, y, scale, color);
}

#[cfg(test)]
#[path = "../../tests/unit/raster/text.rs"]
mod tests;
