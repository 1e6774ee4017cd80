use crate::foundation::core::Canvas;
use crate::foundation::error::InkResult;
use crate::palette::color::PaletteColor;
use crate::raster::buffer::PixelBuffer;

/// An 8-bit RGB triplet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build from raw channel values, clamping each into `0..=255`.
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        fn ch(v: i32) -> u8 {
            v.clamp(0, 255) as u8
        }
        Self {
            r: ch(r),
            g: ch(g),
            b: ch(b),
        }
    }
}

/// One step of the classification cascade.
#[derive(Clone, Copy)]
pub struct QuantizeRule {
    /// Short identifier, stable for diagnostics and tests.
    pub name: &'static str,
    /// Colour produced when the rule matches.
    pub color: PaletteColor,
    test: fn(Rgb) -> bool,
}

impl QuantizeRule {
    /// Whether this rule accepts `rgb` in isolation (ignoring earlier rules).
    pub fn matches(&self, rgb: Rgb) -> bool {
        (self.test)(rgb)
    }
}

impl std::fmt::Debug for QuantizeRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuantizeRule")
            .field("name", &self.name)
            .field("color", &self.color)
            .finish()
    }
}

/// Ordered cascade; the first matching rule wins and anything unmatched is white.
///
/// Rules overlap, so order is part of the output contract. Red dominance precedes the warm
/// tones: any colour with red above both green and blue is red, which leaves orange (and yellow
/// with `r > g`) shadowed in the cascade.
pub static QUANTIZE_RULES: [QuantizeRule; 7] = [
    QuantizeRule {
        name: "dark",
        color: PaletteColor::Black,
        test: |c| c.r < 50 && c.g < 50 && c.b < 50,
    },
    QuantizeRule {
        name: "light",
        color: PaletteColor::White,
        test: |c| c.r > 200 && c.g > 200 && c.b > 200,
    },
    QuantizeRule {
        name: "green_dominant",
        color: PaletteColor::Green,
        test: |c| c.g > c.r && c.g > c.b,
    },
    QuantizeRule {
        name: "blue_dominant",
        color: PaletteColor::Blue,
        test: |c| c.b > c.r && c.b > c.g,
    },
    QuantizeRule {
        name: "red_dominant",
        color: PaletteColor::Red,
        test: |c| c.r > c.g && c.r > c.b,
    },
    QuantizeRule {
        name: "yellow",
        color: PaletteColor::Yellow,
        test: |c| c.r > 150 && c.g > 150 && c.b < 100,
    },
    QuantizeRule {
        name: "orange",
        color: PaletteColor::Orange,
        test: |c| c.r > 150 && c.g > 100 && c.b < 100,
    },
];

/// The rule that decides `rgb`, or `None` when the white fallback applies.
pub fn classify(rgb: Rgb) -> Option<&'static QuantizeRule> {
    QUANTIZE_RULES.iter().find(|rule| rule.matches(rgb))
}

/// Map an RGB triplet to its palette colour.
pub fn quantize(rgb: Rgb) -> PaletteColor {
    classify(rgb).map_or(PaletteColor::White, |rule| rule.color)
}

/// Quantize unclamped channel values.
pub fn quantize_channels(r: i32, g: i32, b: i32) -> PaletteColor {
    quantize(Rgb::clamped(r, g, b))
}

/// Quantize interleaved RGB888 into a packed frame.
///
/// Pixels are consumed row-major. Input shorter than the canvas leaves the remaining pixels
/// white; surplus input is ignored.
pub fn pack_rgb888(rgb: &[u8], canvas: Canvas) -> InkResult<PixelBuffer> {
    let width = canvas.width as usize;
    PixelBuffer::from_fn(canvas, |x, y| {
        let base = (y as usize * width + x as usize) * 3;
        match rgb.get(base..base + 3) {
            Some(px) => quantize(Rgb {
                r: px[0],
                g: px[1],
                b: px[2],
            }),
            None => PaletteColor::White,
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/palette/quantize.rs"]
mod tests;
