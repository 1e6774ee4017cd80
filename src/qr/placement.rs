use crate::foundation::core::Rect;
use crate::palette::color::PaletteColor;
use crate::qr::grid::ModuleGrid;
use crate::raster::shapes::{draw_modules, fill_rect};
use crate::raster::target::PixelTarget;
use crate::raster::text::{draw_text, draw_text_centered};

/// Which point of the code `QrPlacement::{x, y}` refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QrAnchor {
    /// `(x, y)` is the top-left corner of the first module.
    TopLeft,
    /// `(x, y)` is the centre of the module area.
    #[default]
    Center,
}

/// Where and how large to draw a module grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct QrPlacement {
    /// Interpretation of `x`/`y`.
    pub anchor: QrAnchor,
    /// Anchor x.
    pub x: i32,
    /// Anchor y.
    pub y: i32,
    /// Pixels per module side.
    pub scale: i32,
    /// Light margin around the code, in modules.
    pub quiet_zone: i32,
}

impl Default for QrPlacement {
    fn default() -> Self {
        Self {
            anchor: QrAnchor::Center,
            x: 400,
            y: 190,
            scale: 7,
            quiet_zone: 2,
        }
    }
}

impl QrPlacement {
    /// Top-left pixel of module `(0, 0)`.
    pub fn origin(&self, grid: &ModuleGrid) -> (i32, i32) {
        match self.anchor {
            QrAnchor::TopLeft => (self.x, self.y),
            QrAnchor::Center => {
                let half = self.side_px(grid) / 2;
                (self.x.saturating_sub(half), self.y.saturating_sub(half))
            }
        }
    }

    fn side_px(&self, grid: &ModuleGrid) -> i32 {
        i32::try_from(grid.size())
            .unwrap_or(i32::MAX)
            .saturating_mul(self.scale.max(0))
    }

    /// Area cleared to white before modules are drawn: the code plus its quiet zone.
    pub fn footprint(&self, grid: &ModuleGrid) -> Rect {
        let (x0, y0) = self.origin(grid);
        let margin = self.quiet_zone.max(0).saturating_mul(self.scale.max(0));
        let side = self.side_px(grid).saturating_add(margin.saturating_mul(2));
        Rect::new(x0.saturating_sub(margin), y0.saturating_sub(margin), side, side)
    }
}

/// A line of instructional text drawn around a code.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Caption {
    /// Text; characters outside `' '..='Z'` render blank.
    pub text: String,
    /// Left edge, or `None` to centre on the target.
    #[serde(default)]
    pub x: Option<i32>,
    /// Top edge.
    pub y: i32,
    /// Glyph scale.
    #[serde(default = "default_caption_scale")]
    pub scale: i32,
}

fn default_caption_scale() -> i32 {
    1
}

impl Caption {
    /// Caption centred horizontally at `y`.
    pub fn centered(text: impl Into<String>, y: i32, scale: i32) -> Self {
        Self {
            text: text.into(),
            x: None,
            y,
            scale,
        }
    }

    /// Draw in black.
    pub fn draw<T: PixelTarget + ?Sized>(&self, target: &mut T) {
        match self.x {
            Some(x) => draw_text(target, &self.text, x, self.y, self.scale, PaletteColor::Black),
            None => {
                let b = target.bounds();
                let center_x = b.x + b.width / 2;
                draw_text_centered(
                    target,
                    &self.text,
                    center_x,
                    self.y,
                    self.scale,
                    PaletteColor::Black,
                );
            }
        }
    }
}

/// Clear the code's footprint to white and draw every module. Returns the footprint.
pub fn place_qr<T: PixelTarget + ?Sized>(
    target: &mut T,
    grid: &ModuleGrid,
    placement: &QrPlacement,
) -> Rect {
    let footprint = placement.footprint(grid);
    fill_rect(target, footprint, PaletteColor::White);
    let (x0, y0) = placement.origin(grid);
    draw_modules(target, grid, x0, y0, placement.scale);
    tracing::debug!(
        modules = grid.size(),
        x0,
        y0,
        scale = placement.scale,
        "placed module grid"
    );
    footprint
}

/// [`place_qr`] followed by the captions, which are drawn on top in order.
pub fn place_qr_with_captions<T: PixelTarget + ?Sized>(
    target: &mut T,
    grid: &ModuleGrid,
    placement: &QrPlacement,
    captions: &[Caption],
) -> Rect {
    let footprint = place_qr(target, grid, placement);
    for caption in captions {
        caption.draw(target);
    }
    footprint
}

#[cfg(test)]
#[path = "../../tests/unit/qr/placement.rs"]
mod tests;
