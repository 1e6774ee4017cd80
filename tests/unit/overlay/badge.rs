use super::*;

fn patterned(canvas: Canvas) -> Vec<u8> {
    PixelBuffer::from_fn(canvas, |x, y| {
        PaletteColor::ALL[((x * 3 + y * 5) % 7) as usize]
    })
    .unwrap()
    .into_bytes()
}

#[test]
fn panel_region_hugs_the_viewer_top_edge() {
    let layout = BadgeLayout::default();
    let region = layout.region(Canvas::PANEL_7IN3);
    assert_eq!(region, Rect::new(760, 195, 30, 90));
    assert_eq!(layout.visible_region(Canvas::PANEL_7IN3), Some(region));
}

#[test]
fn tiny_canvas_has_no_visible_badge() {
    let canvas = Canvas::new(8, 8).unwrap();
    let layout = BadgeLayout::default();
    assert_eq!(layout.visible_region(canvas), None);

    let frame = patterned(canvas);
    for p in [0, 19, 20, 50, 100] {
        let out = composite_badge(canvas, &frame, &layout, p, &BufferAllocator::unbounded())
            .unwrap();
        assert_eq!(out.as_bytes(), frame.as_slice());
    }
}

#[test]
fn badge_draws_backdrop_text_and_icon() {
    let canvas = Canvas::new(60, 100).unwrap();
    let layout = BadgeLayout::default();
    let frame = PixelBuffer::new(canvas, PaletteColor::Blue).unwrap().into_bytes();
    let out = composite_badge(canvas, &frame, &layout, 75, &BufferAllocator::unbounded()).unwrap();

    let region = layout.region(canvas);
    assert_eq!(region, Rect::new(20, 5, 30, 90));
    // Border on the left edge midway down, backdrop just inside it.
    assert_eq!(out.get_pixel(20, 50), Some(PaletteColor::Black));
    assert_eq!(out.get_pixel(21, 50), Some(PaletteColor::White));
    // Rounded corner leaves the frame showing through.
    assert_eq!(out.get_pixel(20, 5), Some(PaletteColor::Blue));
    // Battery fill: icon at (30, 70), body interior bottom row at y = 86.
    assert_eq!(out.get_pixel(31, 86), Some(PaletteColor::Green));
    // Outside the badge nothing changed.
    assert_eq!(out.get_pixel(19, 50), Some(PaletteColor::Blue));
    assert_eq!(out.get_pixel(50, 50), Some(PaletteColor::Blue));
}

#[test]
fn percentage_is_clamped_before_drawing() {
    let canvas = Canvas::new(60, 100).unwrap();
    let layout = BadgeLayout::default();
    let frame = patterned(canvas);
    let alloc = BufferAllocator::unbounded();
    let high = composite_badge(canvas, &frame, &layout, 250, &alloc).unwrap();
    let full = composite_badge(canvas, &frame, &layout, 100, &alloc).unwrap();
    assert_eq!(high, full);
    let low = composite_badge(canvas, &frame, &layout, -9, &alloc).unwrap();
    let empty = composite_badge(canvas, &frame, &layout, 0, &alloc).unwrap();
    assert_eq!(low, empty);
}

#[test]
fn short_frame_is_a_size_mismatch() {
    let canvas = Canvas::new(60, 100).unwrap();
    let err = composite_badge(
        canvas,
        &[0x11; 10],
        &BadgeLayout::default(),
        50,
        &BufferAllocator::unbounded(),
    )
    .unwrap_err();
    assert!(matches!(err, InkError::SizeMismatch { expected: 3000, actual: 10 }));
}

#[test]
fn scratch_allocation_failure_is_reported() {
    let canvas = Canvas::new(60, 100).unwrap();
    let frame = patterned(canvas);
    let err = composite_badge(
        canvas,
        &frame,
        &BadgeLayout::default(),
        50,
        &BufferAllocator::with_limit(100),
    )
    .unwrap_err();
    assert!(err.is_recoverable());
}

#[test]
fn in_place_reports_visible_region() {
    let canvas = Canvas::new(60, 100).unwrap();
    let mut buf = PixelBuffer::new(canvas, PaletteColor::White).unwrap();
    let region = composite_badge_in_place(&mut buf, &BadgeLayout::default(), 10);
    assert_eq!(region, Some(Rect::new(20, 5, 30, 90)));
    assert!(buf.get_pixel(31, 86) == Some(PaletteColor::Red));
}

#[test]
fn layout_validation() {
    assert!(BadgeLayout::default().validate().is_ok());
    let bad = BadgeLayout {
        text_scale: 0,
        ..BadgeLayout::default()
    };
    assert!(bad.validate().is_err());
    let bad = BadgeLayout {
        edge_margin: -1,
        ..BadgeLayout::default()
    };
    assert!(bad.validate().is_err());
}
