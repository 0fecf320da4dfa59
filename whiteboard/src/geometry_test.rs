#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_add_and_sub() {
    let a = pt(3.0, 4.0);
    let b = pt(1.0, 2.0);
    assert_eq!(a.add(b), pt(4.0, 6.0));
    assert_eq!(a.sub(b), pt(2.0, 2.0));
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), pt(0.0, 0.0));
}

// =============================================================
// Size
// =============================================================

#[test]
fn size_zero_is_unmeasured() {
    assert!(!Size::default().is_measured());
    assert!(!Size::new(100.0, 0.0).is_measured());
    assert!(Size::new(1.0, 1.0).is_measured());
}

// =============================================================
// Rect containment
// =============================================================

#[test]
fn contains_point_is_inclusive_of_edges() {
    let r = Rect::new(10.0, 10.0, 100.0, 50.0);
    assert!(r.contains_point(pt(10.0, 10.0)));
    assert!(r.contains_point(pt(110.0, 60.0)));
    assert!(r.contains_point(pt(50.0, 30.0)));
    assert!(!r.contains_point(pt(9.9, 30.0)));
    assert!(!r.contains_point(pt(50.0, 60.1)));
}

#[test]
fn contains_rect_requires_full_enclosure() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 50.0, 50.0)));
    assert!(outer.contains_rect(&outer));
    assert!(!outer.contains_rect(&Rect::new(60.0, 60.0, 50.0, 50.0)));
}

// =============================================================
// Rect overlap
// =============================================================

#[test]
fn intersects_detects_overlap() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(50.0, 50.0, 100.0, 100.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn touching_edges_do_not_intersect() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(100.0, 0.0, 100.0, 100.0);
    assert!(!a.intersects(&b));
}

#[test]
fn disjoint_rects_do_not_intersect() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(50.0, 50.0, 10.0, 10.0);
    assert!(!a.intersects(&b));
}

#[test]
fn note_at_uses_fixed_note_size() {
    let r = Rect::note_at(pt(5.0, 6.0));
    assert_eq!(r.width, NOTE_WIDTH);
    assert_eq!(r.height, NOTE_HEIGHT);
    assert_eq!(r.origin(), pt(5.0, 6.0));
}

// =============================================================
// clamp_origin
// =============================================================

#[test]
fn clamp_origin_keeps_box_inside() {
    let r = Rect::new(0.0, 0.0, 300.0, 200.0);
    let size = Size::new(100.0, 50.0);
    assert_eq!(r.clamp_origin(pt(-20.0, -5.0), size), pt(0.0, 0.0));
    assert_eq!(r.clamp_origin(pt(250.0, 190.0), size), pt(200.0, 150.0));
    assert_eq!(r.clamp_origin(pt(40.0, 40.0), size), pt(40.0, 40.0));
}

#[test]
fn clamp_origin_pins_oversized_box_to_top_left() {
    let r = Rect::new(10.0, 20.0, 50.0, 50.0);
    let size = Size::new(100.0, 100.0);
    assert_eq!(r.clamp_origin(pt(500.0, 500.0), size), pt(10.0, 20.0));
}

// =============================================================
// centroid
// =============================================================

#[test]
fn centroid_of_empty_is_none() {
    assert!(centroid(&[]).is_none());
}

#[test]
fn centroid_averages_points() {
    let c = centroid(&[pt(0.0, 0.0), pt(10.0, 0.0), pt(5.0, 30.0)]);
    assert_eq!(c, Some(pt(5.0, 10.0)));
}
