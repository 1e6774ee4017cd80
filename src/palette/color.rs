/// One of the seven inks the panel can show.
///
/// Discriminants are the 4-bit codes consumed by the display transport; they are a wire
/// contract and must not be renumbered.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteColor {
    /// Code 0.
    Black = 0,
    /// Code 1.
    White = 1,
    /// Code 2.
    Green = 2,
    /// Code 3.
    Blue = 3,
    /// Code 4.
    Red = 4,
    /// Code 5.
    Yellow = 5,
    /// Code 6.
    Orange = 6,
}

impl PaletteColor {
    /// All palette entries in code order.
    pub const ALL: [PaletteColor; 7] = [
        PaletteColor::Black,
        PaletteColor::White,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Red,
        PaletteColor::Yellow,
        PaletteColor::Orange,
    ];

    /// The nibble written into packed frames.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`PaletteColor::code`]; `None` for 7..=15.
    pub const fn from_code(code: u8) -> Option<PaletteColor> {
        match code {
            0 => Some(PaletteColor::Black),
            1 => Some(PaletteColor::White),
            2 => Some(PaletteColor::Green),
            3 => Some(PaletteColor::Blue),
            4 => Some(PaletteColor::Red),
            5 => Some(PaletteColor::Yellow),
            6 => Some(PaletteColor::Orange),
            _ => None,
        }
    }

    /// Both pixels of a byte set to this colour.
    pub const fn packed_pair(self) -> u8 {
        (self.code() << 4) | self.code()
    }

    /// Approximate on-screen appearance, used for previews.
    pub const fn reference_rgb(self) -> [u8; 3] {
        match self {
            PaletteColor::Black => [0, 0, 0],
            PaletteColor::White => [255, 255, 255],
            PaletteColor::Green => [0, 255, 0],
            PaletteColor::Blue => [0, 0, 255],
            PaletteColor::Red => [255, 0, 0],
            PaletteColor::Yellow => [255, 255, 0],
            PaletteColor::Orange => [255, 128, 0],
        }
    }

    /// Lower-case name.
    pub const fn name(self) -> &'static str {
        match self {
            PaletteColor::Black => "black",
            PaletteColor::White => "white",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
            PaletteColor::Red => "red",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Orange => "orange",
        }
    }
}

impl std::fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/color.rs"]
mod tests;
