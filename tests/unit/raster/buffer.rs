use super::*;
use crate::raster::target::Clipped;

fn small() -> Canvas {
    Canvas::new(4, 2).unwrap()
}

#[test]
fn new_buffer_is_white_filled() {
    let buf = PixelBuffer::new(small(), PaletteColor::White).unwrap();
    assert_eq!(buf.as_bytes(), &[0x11, 0x11, 0x11, 0x11]);
}

#[test]
fn two_pixels_share_a_byte() {
    let mut buf = PixelBuffer::new(small(), PaletteColor::White).unwrap();
    buf.set_pixel(0, 0, PaletteColor::Black);
    buf.set_pixel(1, 0, PaletteColor::Red);

    let expected0 = (PaletteColor::Black.code() << 4) | PaletteColor::Red.code();
    let expected1 = (PaletteColor::White.code() << 4) | PaletteColor::White.code();
    assert_eq!(buf.as_bytes()[0], expected0);
    assert_eq!(buf.as_bytes()[1], expected1);
}

#[test]
fn set_then_get_roundtrips_and_preserves_neighbour() {
    let canvas = Canvas::new(6, 3).unwrap();
    for y in 0..3 {
        for x in 0..6 {
            for c in PaletteColor::ALL {
                let mut buf = PixelBuffer::new(canvas, PaletteColor::Orange).unwrap();
                buf.set_pixel(x, y, c);
                assert_eq!(buf.get_pixel(x, y), Some(c));

                let neighbour = if x % 2 == 0 { x + 1 } else { x - 1 };
                assert_eq!(buf.get_pixel(neighbour, y), Some(PaletteColor::Orange));

                let idx = (y * 3 + x / 2) as usize;
                let nibble = if x % 2 == 0 {
                    buf.as_bytes()[idx] >> 4
                } else {
                    buf.as_bytes()[idx] & 0x0F
                };
                assert_eq!(nibble, c.code());
            }
        }
    }
}

#[test]
fn out_of_bounds_writes_are_ignored() {
    let mut buf = PixelBuffer::new(small(), PaletteColor::Green).unwrap();
    let before = buf.as_bytes().to_vec();
    for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 2), (i32::MAX, 1), (1, i32::MIN)] {
        buf.set_pixel(x, y, PaletteColor::Black);
        assert_eq!(buf.get_pixel(x, y), None);
    }
    assert_eq!(buf.as_bytes(), before.as_slice());
}

#[test]
fn fill_overwrites_everything() {
    let mut buf = PixelBuffer::new(small(), PaletteColor::White).unwrap();
    buf.set_pixel(3, 1, PaletteColor::Red);
    buf.fill(PaletteColor::Blue);
    assert!(buf.as_bytes().iter().all(|&b| b == 0x33));
}

#[test]
fn from_packed_rejects_short_input() {
    let err = PixelBuffer::from_packed(small(), &[0x11, 0x11, 0x11]).unwrap_err();
    match err {
        InkError::SizeMismatch { expected, actual } => {
            assert_eq!(expected, 4);
            assert_eq!(actual, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn from_packed_trims_surplus_bytes() {
    let buf = PixelBuffer::from_packed(small(), &[0x01, 0x23, 0x45, 0x60, 0xFF]).unwrap();
    assert_eq!(buf.as_bytes(), &[0x01, 0x23, 0x45, 0x60]);
    assert_eq!(buf.get_pixel(3, 0), Some(PaletteColor::Blue));
}

#[test]
fn from_packed_rejects_non_palette_nibbles() {
    let err = PixelBuffer::from_packed(small(), &[0x11, 0x17, 0x11, 0x11]).unwrap_err();
    assert!(matches!(err, InkError::Validation(_)));
}

#[test]
fn allocator_limit_reports_allocation_failure() {
    let alloc = BufferAllocator::with_limit(3);
    let err = alloc.blank(small(), PaletteColor::White).unwrap_err();
    assert!(matches!(err, InkError::Allocation { bytes: 4 }));

    let err = alloc.copy_of(small(), &[0x11; 4]).unwrap_err();
    assert!(err.is_recoverable());

    assert!(BufferAllocator::with_limit(4).blank(small(), PaletteColor::White).is_ok());
}

#[test]
fn from_fn_visits_every_pixel() {
    let buf = PixelBuffer::from_fn(small(), |x, y| {
        PaletteColor::from_code(((x + y) % 7) as u8).unwrap()
    })
    .unwrap();
    for y in 0..2i32 {
        for x in 0..4i32 {
            assert_eq!(buf.get_pixel(x, y).unwrap().code(), ((x + y) % 7) as u8);
        }
    }
}

#[test]
fn clipped_view_only_forwards_inside_pixels() {
    let mut buf = PixelBuffer::new(small(), PaletteColor::White).unwrap();
    {
        let mut view = Clipped::new(&mut buf, Rect::new(1, 0, 2, 1));
        for x in -1..5 {
            for y in -1..3 {
                view.put(x, y, PaletteColor::Black);
            }
        }
    }
    assert_eq!(buf.as_bytes(), &[0x10, 0x01, 0x11, 0x11]);
}
