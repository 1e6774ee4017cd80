use super::*;
use crate::foundation::core::Canvas;
use crate::raster::buffer::PixelBuffer;

fn blank(w: u32, h: u32) -> PixelBuffer {
    PixelBuffer::new(Canvas::new(w, h).unwrap(), PaletteColor::White).unwrap()
}

fn black_pixels(buf: &PixelBuffer) -> Vec<(i32, i32)> {
    let c = buf.canvas();
    let mut out = Vec::new();
    for y in 0..c.height as i32 {
        for x in 0..c.width as i32 {
            if buf.get_pixel(x, y) == Some(PaletteColor::Black) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn width_counts_advance_per_char() {
    assert_eq!(text_width("", 2), 0);
    assert_eq!(text_width("50%", 1), 18);
    assert_eq!(text_width("100%", 2), 48);
    assert_eq!(text_height(2), 14);
}

#[test]
fn scale_one_matches_glyph_bits() {
    let mut buf = blank(8, 8);
    draw_text(&mut buf, "L", 1, 0, 1, PaletteColor::Black);
    let mut expected: Vec<(i32, i32)> = (0..7).map(|y| (1, y)).collect();
    expected.extend((2..6).map(|x| (x, 6)));
    expected.sort_by_key(|&(x, y)| (y, x));
    assert_eq!(black_pixels(&buf), expected);
}

#[test]
fn each_bit_becomes_a_scale_block() {
    let mut buf = blank(12, 16);
    draw_text(&mut buf, "L", 0, 0, 2, PaletteColor::Black);
    // Column 0 spans x 0..2 for all 14 rows.
    for y in 0..14 {
        assert_eq!(buf.get_pixel(0, y), Some(PaletteColor::Black));
        assert_eq!(buf.get_pixel(1, y), Some(PaletteColor::Black));
        assert_eq!(buf.get_pixel(2, y), Some(PaletteColor::White));
    }
    // Bottom row block covers y 12..14 across x 0..10.
    for x in 0..10 {
        assert_eq!(buf.get_pixel(x, 12), Some(PaletteColor::Black));
        assert_eq!(buf.get_pixel(x, 13), Some(PaletteColor::Black));
    }
    assert_eq!(buf.get_pixel(10, 13), Some(PaletteColor::White));
    assert_eq!(buf.get_pixel(0, 14), Some(PaletteColor::White));
}

#[test]
fn unsupported_characters_still_advance() {
    let mut a = blank(20, 8);
    draw_text(&mut a, "aL", 0, 0, 1, PaletteColor::Black);
    let mut b = blank(20, 8);
    draw_text(&mut b, "L", 6, 0, 1, PaletteColor::Black);
    assert_eq!(a, b);
}

#[test]
fn text_off_canvas_is_clipped() {
    let mut buf = blank(4, 4);
    draw_text(&mut buf, "TEST", -3, -2, 1, PaletteColor::Black);
    draw_text(&mut buf, "TEST", 100, 100, 3, PaletteColor::Black);
    assert!(!black_pixels(&buf).is_empty());
    assert!(black_pixels(&buf).iter().all(|&(x, y)| x < 4 && y < 4));
}

#[test]
fn zero_scale_draws_nothing() {
    let mut buf = blank(8, 8);
    draw_text(&mut buf, "Z", 0, 0, 0, PaletteColor::Black);
    assert!(black_pixels(&buf).is_empty());
}

#[test]
fn centered_text_is_offset_by_half_width() {
    let mut a = blank(40, 8);
    draw_text_centered(&mut a, "HI", 20, 0, 1, PaletteColor::Black);
    let mut b = blank(40, 8);
    draw_text(&mut b, "HI", 14, 0, 1, PaletteColor::Black);
    assert_eq!(a, b);
}
