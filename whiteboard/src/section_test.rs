#![allow(clippy::float_cmp)]

use super::*;

fn canvas() -> Size {
    Size::new(2180.0, 1000.0)
}

fn note_at(category: Category, x: f64, y: f64) -> Note {
    Note::new(category, "note", Point::new(x, y))
}

// =============================================================
// compute_initial_sections
// =============================================================

#[test]
fn initial_sections_are_three_equal_columns() {
    let sections = compute_initial_sections(canvas());
    assert_eq!(sections.len(), 3);
    for s in &sections {
        assert_eq!(s.bounds.width, 700.0);
        assert_eq!(s.bounds.height, 960.0);
        assert_eq!(s.bounds.y, CANVAS_PADDING);
        assert!(!s.expanded);
    }
    assert_eq!(sections[0].bounds.x, 20.0);
    assert_eq!(sections[1].bounds.x, 740.0);
    assert_eq!(sections[2].bounds.x, 1460.0);
}

#[test]
fn initial_sections_follow_category_order() {
    let sections = compute_initial_sections(canvas());
    let cats: Vec<_> = sections.iter().map(|s| s.category).collect();
    assert_eq!(cats, Category::ALL.to_vec());
}

#[test]
fn sections_do_not_overlap() {
    let sections = compute_initial_sections(canvas());
    for (i, a) in sections.iter().enumerate() {
        for b in sections.iter().skip(i + 1) {
            assert!(!a.bounds.intersects(&b.bounds));
        }
    }
}

#[test]
fn unmeasured_canvas_yields_no_sections() {
    assert!(compute_initial_sections(Size::new(0.0, 0.0)).is_empty());
    assert!(compute_initial_sections(Size::new(800.0, 0.0)).is_empty());
}

#[test]
fn content_rect_sits_below_header() {
    let s = compute_initial_sections(canvas())[0];
    let content = s.content_rect();
    assert_eq!(content.y, s.bounds.y + SECTION_HEADER_HEIGHT);
    assert_eq!(content.x, s.bounds.x + SECTION_INNER_PADDING);
    assert_eq!(content.width, 680.0);
}

#[test]
fn columns_floor_content_width() {
    let s = compute_initial_sections(canvas())[0];
    assert_eq!(s.columns(), 3);
}

#[test]
fn minimum_canvas_width_fits_exactly_one_note() {
    use crate::consts::{MIN_CANVAS_WIDTH, NOTE_WIDTH};
    let s = compute_initial_sections(Size::new(MIN_CANVAS_WIDTH, 600.0))[0];
    assert_eq!(s.content_rect().width, NOTE_WIDTH);
    assert_eq!(s.columns(), 1);
}

#[test]
fn sections_leave_padding_above_and_below() {
    for s in compute_initial_sections(canvas()) {
        assert_eq!(s.bounds.y, CANVAS_PADDING);
        assert_eq!(s.bounds.bottom(), canvas().height - CANVAS_PADDING);
    }
}

#[test]
fn narrow_section_still_has_one_column() {
    let s = compute_initial_sections(Size::new(300.0, 600.0))[0];
    assert_eq!(s.columns(), 1);
}

// =============================================================
// adjust_for_content
// =============================================================

#[test]
fn adjust_without_notes_keeps_base_height() {
    let sections = compute_initial_sections(canvas());
    let adjusted = adjust_for_content(&sections, &[]);
    assert_eq!(adjusted, sections);
}

#[test]
fn adjust_grows_section_with_low_note() {
    let sections = compute_initial_sections(canvas());
    let notes = vec![note_at(Category::Start, 750.0, 1200.0)];
    let adjusted = adjust_for_content(&sections, &notes);

    let start = section_for(&adjusted, Category::Start).unwrap();
    assert!(start.expanded);
    assert_eq!(start.bounds.bottom(), 1200.0 + NOTE_HEIGHT + SECTION_BOTTOM_MARGIN);

    let stop = section_for(&adjusted, Category::Stop).unwrap();
    assert!(!stop.expanded);
    assert_eq!(stop.bounds.height, 960.0);
}

#[test]
fn adjust_note_within_bounds_does_not_expand() {
    let sections = compute_initial_sections(canvas());
    let notes = vec![note_at(Category::Stop, 30.0, 100.0)];
    let adjusted = adjust_for_content(&sections, &notes);
    assert!(adjusted.iter().all(|s| !s.expanded));
}

#[test]
fn adjust_is_idempotent() {
    let sections = compute_initial_sections(canvas());
    let notes = vec![
        note_at(Category::Stop, 30.0, 1500.0),
        note_at(Category::Continue, 1470.0, 300.0),
    ];
    let once = adjust_for_content(&sections, &notes);
    let twice = adjust_for_content(&once, &notes);
    assert_eq!(once, twice);
}

#[test]
fn adjust_shrinks_back_when_note_removed() {
    let sections = compute_initial_sections(canvas());
    let grown = adjust_for_content(&sections, &[note_at(Category::Stop, 30.0, 1500.0)]);
    assert!(grown[0].expanded);
    let shrunk = adjust_for_content(&grown, &[]);
    assert!(!shrunk[0].expanded);
    assert_eq!(shrunk[0].bounds.height, shrunk[0].base_height);
}

// =============================================================
// resolve_category / canvas_bounds
// =============================================================

#[test]
fn resolve_category_finds_containing_section() {
    let sections = compute_initial_sections(canvas());
    assert_eq!(resolve_category(Point::new(100.0, 100.0), &sections), Some(Category::Stop));
    assert_eq!(resolve_category(Point::new(800.0, 100.0), &sections), Some(Category::Start));
    assert_eq!(resolve_category(Point::new(1500.0, 900.0), &sections), Some(Category::Continue));
}

#[test]
fn resolve_category_in_gap_is_none() {
    let sections = compute_initial_sections(canvas());
    assert_eq!(resolve_category(Point::new(730.0, 100.0), &sections), None);
    assert_eq!(resolve_category(Point::new(5.0, 5.0), &sections), None);
}

#[test]
fn canvas_bounds_reach_tallest_section() {
    let sections = compute_initial_sections(canvas());
    let grown = adjust_for_content(&sections, &[note_at(Category::Stop, 30.0, 1500.0)]);
    let bounds = canvas_bounds(canvas(), &grown);
    assert_eq!(bounds.width, 2180.0);
    assert_eq!(bounds.height, grown[0].bounds.bottom() + CANVAS_PADDING);
}

#[test]
fn canvas_bounds_never_smaller_than_canvas() {
    let bounds = canvas_bounds(canvas(), &compute_initial_sections(canvas()));
    assert_eq!(bounds.height, 1000.0);
}

// =============================================================
// settle_drop
// =============================================================

#[test]
fn settle_drop_switches_category() {
    let sections = compute_initial_sections(canvas());
    let (category, pos) = settle_drop(Point::new(800.0, 200.0), Category::Stop, &sections).unwrap();
    assert_eq!(category, Category::Start);
    assert_eq!(pos, Point::new(800.0, 200.0));
}

#[test]
fn settle_drop_in_header_moves_below_it() {
    let sections = compute_initial_sections(canvas());
    let (category, pos) = settle_drop(Point::new(100.0, 30.0), Category::Start, &sections).unwrap();
    assert_eq!(category, Category::Stop);
    assert_eq!(pos.y, sections[0].content_origin().y);
}

#[test]
fn settle_drop_near_right_edge_keeps_note_inside() {
    let sections = compute_initial_sections(canvas());
    let (category, pos) = settle_drop(Point::new(700.0, 200.0), Category::Stop, &sections).unwrap();
    assert_eq!(category, Category::Stop);
    assert!(sections[0].content_rect().contains_rect(&crate::geometry::Rect::note_at(pos)));
}

#[test]
fn settle_drop_in_gap_keeps_current_category() {
    let sections = compute_initial_sections(canvas());
    let (category, pos) = settle_drop(Point::new(730.0, 200.0), Category::Continue, &sections).unwrap();
    assert_eq!(category, Category::Continue);
    assert!(section_for(&sections, Category::Continue).unwrap().bounds.contains_point(pos));
}

#[test]
fn settle_drop_without_sections_is_none() {
    assert!(settle_drop(Point::new(10.0, 10.0), Category::Stop, &[]).is_none());
}
