//! Fixed 5×7 bitmap font covering `' '..='Z'`.

/// Glyph cell width in pixels.
pub const GLYPH_WIDTH: i32 = 5;
/// Glyph cell height in pixels.
pub const GLYPH_HEIGHT: i32 = 7;
/// Horizontal advance per character: glyph width plus one blank column.
pub const GLYPH_ADVANCE: i32 = 6;

const FIRST: char = ' ';
const LAST: char = 'Z';

/// Column-major source table: one byte per column, bit 0 is the top row.
const COLUMNS: [[u8; 5]; 59] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x08, 0x2A, 0x1C, 0x2A, 0x08], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x00, 0x08, 0x14, 0x22, 0x41], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x41, 0x22, 0x14, 0x08, 0x00], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x01, 0x01], // F
    [0x3E, 0x41, 0x41, 0x51, 0x32], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x04, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x7F, 0x20, 0x18, 0x20, 0x7F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x03, 0x04, 0x78, 0x04, 0x03], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
];

/// One character bitmap, stored as 7 row masks.
///
/// Within a row mask the leftmost column is the most significant of the five used bits, so
/// column `col` lives at bit `4 - col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; 7],
}

impl Glyph {
    /// Whether the bit at `(col, row)` is ink. Out-of-cell positions are blank.
    pub fn is_set(&self, col: i32, row: i32) -> bool {
        if !(0..GLYPH_WIDTH).contains(&col) || !(0..GLYPH_HEIGHT).contains(&row) {
            return false;
        }
        self.rows[row as usize] & (1 << (4 - col)) != 0
    }

    /// Whether the glyph draws nothing.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&r| r == 0)
    }

    /// Row masks, top to bottom.
    pub fn rows(&self) -> [u8; 7] {
        self.rows
    }
}

const fn to_rows(cols: [u8; 5]) -> [u8; 7] {
    let mut rows = [0u8; 7];
    let mut row = 0;
    while row < 7 {
        let mut col = 0;
        while col < 5 {
            if cols[col] & (1 << row) != 0 {
                rows[row] |= 1 << (4 - col);
            }
            col += 1;
        }
        row += 1;
    }
    rows
}

const fn build_glyphs() -> [Glyph; 59] {
    let mut out = [Glyph { rows: [0; 7] }; 59];
    let mut i = 0;
    while i < COLUMNS.len() {
        out[i] = Glyph {
            rows: to_rows(COLUMNS[i]),
        };
        i += 1;
    }
    out
}

static GLYPHS: [Glyph; 59] = build_glyphs();

/// Whether `ch` has its own bitmap.
pub fn is_supported(ch: char) -> bool {
    (FIRST..=LAST).contains(&ch)
}

/// Bitmap for `ch`; anything outside `' '..='Z'` gets the blank space glyph.
pub fn glyph(ch: char) -> &'static Glyph {
    if is_supported(ch) {
        &GLYPHS[ch as usize - FIRST as usize]
    } else {
        &GLYPHS[0]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/font.rs"]
mod tests;
