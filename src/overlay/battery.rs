use crate::foundation::core::Rect;
use crate::palette::color::PaletteColor;
use crate::raster::shapes::fill_rect;
use crate::raster::target::PixelTarget;

/// Icon width in pixels.
pub const ICON_WIDTH: i32 = 10;
/// Icon height in pixels: 3px terminal plus 15px body.
pub const ICON_HEIGHT: i32 = 18;
/// Tallest fill inside the body outline.
pub const MAX_FILL: i32 = 13;

const TERMINAL: Rect = Rect {
    x: 3,
    y: 0,
    width: 4,
    height: 3,
};
const BODY_TOP: i32 = 3;
const BODY_BOTTOM: i32 = 17;

/// Clamp a percentage into `0..=100`.
pub fn clamp_percentage(percentage: i32) -> i32 {
    percentage.clamp(0, 100)
}

/// Filled rows for `percentage`: `floor(p * 13 / 100)`.
pub fn fill_height(percentage: i32) -> i32 {
    (clamp_percentage(percentage) * MAX_FILL / 100).clamp(0, MAX_FILL)
}

/// Fill colour: red below 20%, orange below 50%, green otherwise.
pub fn fill_color(percentage: i32) -> PaletteColor {
    match clamp_percentage(percentage) {
        p if p < 20 => PaletteColor::Red,
        p if p < 50 => PaletteColor::Orange,
        _ => PaletteColor::Green,
    }
}

/// Badge text for `percentage`, e.g. `"42%"`.
pub fn percent_label(percentage: i32) -> String {
    format!("{}%", clamp_percentage(percentage))
}

/// Draw an upright battery with its top-left at `(x, y)`: terminal on top, black outline, and
/// a level bar growing up from the bottom of the body.
pub fn draw_battery_icon<T: PixelTarget + ?Sized>(
    target: &mut T,
    x: i32,
    y: i32,
    percentage: i32,
) {
    let outline = PaletteColor::Black;

    fill_rect(
        target,
        Rect::new(x + TERMINAL.x, y + TERMINAL.y, TERMINAL.width, TERMINAL.height),
        outline,
    );

    fill_rect(target, Rect::new(x, y + BODY_TOP, ICON_WIDTH, 1), outline);
    fill_rect(target, Rect::new(x, y + BODY_BOTTOM, ICON_WIDTH, 1), outline);
    let body_h = BODY_BOTTOM - BODY_TOP + 1;
    fill_rect(target, Rect::new(x, y + BODY_TOP, 1, body_h), outline);
    fill_rect(target, Rect::new(x + ICON_WIDTH - 1, y + BODY_TOP, 1, body_h), outline);

    let level = fill_height(percentage);
    if level > 0 {
        let bottom_row = y + BODY_BOTTOM - 1;
        fill_rect(
            target,
            Rect::new(x + 1, bottom_row - level + 1, ICON_WIDTH - 2, level),
            fill_color(percentage),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/battery.rs"]
mod tests;
