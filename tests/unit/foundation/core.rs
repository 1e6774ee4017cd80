use super::*;

#[test]
fn panel_packed_len_matches_two_pixels_per_byte() {
    let c = Canvas::PANEL_7IN3;
    assert_eq!(c.stride(), 400);
    assert_eq!(c.packed_len(), 800 * 480 / 2);
}

#[test]
fn canvas_rejects_odd_or_empty_dimensions() {
    assert!(Canvas::new(0, 4).is_err());
    assert!(Canvas::new(4, 0).is_err());
    assert!(Canvas::new(5, 2).is_err());
    assert!(Canvas::new(4, 2).is_ok());
}

#[test]
fn canvas_contains_boundaries() {
    let c = Canvas::new(4, 2).unwrap();
    assert!(c.contains(0, 0));
    assert!(c.contains(3, 1));
    assert!(!c.contains(4, 0));
    assert!(!c.contains(0, 2));
    assert!(!c.contains(-1, 0));
    assert!(!c.contains(0, -1));
}

#[test]
fn rect_contains_is_end_exclusive() {
    let r = Rect::new(2, 3, 4, 5);
    assert!(r.contains(2, 3));
    assert!(r.contains(5, 7));
    assert!(!r.contains(6, 7));
    assert!(!r.contains(5, 8));
    assert_eq!(r.right(), 6);
    assert_eq!(r.bottom(), 8);
}

#[test]
fn rect_intersect_clips_and_detects_disjoint() {
    let a = Rect::new(-5, -5, 10, 10);
    let b = Rect::new(0, 0, 8, 8);
    assert_eq!(a.intersect(b), Some(Rect::new(0, 0, 5, 5)));

    let far = Rect::new(100, 100, 3, 3);
    assert_eq!(a.intersect(far), None);
}

#[test]
fn negative_sizes_collapse_to_empty() {
    let r = Rect::new(0, 0, -3, 4);
    assert!(r.is_empty());
    assert!(!r.contains(0, 0));
}
