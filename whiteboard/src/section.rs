//! Section layout: the three fixed category regions and their auto-expansion.
//!
//! Sections are derived state. They are rebuilt from the canvas size and the
//! current note set whenever either changes, so nothing here mutates in place.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CANVAS_PADDING, CELL_WIDTH, NOTE_HEIGHT, NOTE_WIDTH, SECTION_BOTTOM_MARGIN, SECTION_GAP, SECTION_HEADER_HEIGHT,
    SECTION_INNER_PADDING,
};
use crate::doc::{Category, Note};
use crate::geometry::{Point, Rect, Size};

/// One category column on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Column index, left to right.
    pub id: usize,
    pub category: Category,
    pub bounds: Rect,
    /// Height from the even split, before any growth.
    pub base_height: f64,
    /// True iff `bounds.height` exceeds `base_height`.
    pub expanded: bool,
}

impl Section {
    /// Area where notes may sit: below the header, inset left and right.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x + SECTION_INNER_PADDING,
            self.bounds.y + SECTION_HEADER_HEIGHT,
            (self.bounds.width - 2.0 * SECTION_INNER_PADDING).max(0.0),
            (self.bounds.height - SECTION_HEADER_HEIGHT).max(0.0),
        )
    }

    /// Top-left of the first grid cell, just below the header.
    #[must_use]
    pub fn content_origin(&self) -> Point {
        self.content_rect().origin()
    }

    /// Number of grid columns that fit in the content width. Never zero.
    #[must_use]
    pub fn columns(&self) -> usize {
        let cols = (self.content_rect().width / CELL_WIDTH).floor();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cols = cols.max(1.0) as usize;
        cols
    }

    /// Whether the section has usable, measured dimensions.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.bounds.width > 0.0 && self.bounds.height > 0.0
    }
}

/// Split the canvas width into three equal columns, one per category in
/// stop/start/continue order. Each column spans the canvas height less the
/// outer padding above and below.
///
/// Returns no sections when the canvas has not been measured yet. On a canvas
/// narrower than [`MIN_CANVAS_WIDTH`](crate::consts::MIN_CANVAS_WIDTH) a note
/// is wider than the content area, so notes overhang into the gap; hosts
/// should refuse such sizes.
#[must_use]
pub fn compute_initial_sections(canvas: Size) -> Vec<Section> {
    if !canvas.is_measured() {
        return Vec::new();
    }
    let width = ((canvas.width - 2.0 * CANVAS_PADDING - 2.0 * SECTION_GAP) / 3.0).max(0.0);
    let height = (canvas.height - 2.0 * CANVAS_PADDING).max(0.0);

    Category::ALL
        .iter()
        .map(|&category| {
            #[allow(clippy::cast_precision_loss)]
            let column = category.index() as f64;
            let x = CANVAS_PADDING + column * (width + SECTION_GAP);
            Section {
                id: category.index(),
                category,
                bounds: Rect::new(x, CANVAS_PADDING, width, height),
                base_height: height,
                expanded: false,
            }
        })
        .collect()
}

/// Grow each section just enough to hold its lowest note plus a margin.
///
/// Height is always recomputed from `base_height`, so a section that no
/// longer needs the extra room shrinks back, and calling this twice with the
/// same notes yields the same sections.
#[must_use]
pub fn adjust_for_content(sections: &[Section], notes: &[Note]) -> Vec<Section> {
    sections
        .iter()
        .map(|section| {
            let lowest = notes
                .iter()
                .filter(|n| n.category == section.category)
                .map(|n| n.position.y + NOTE_HEIGHT)
                .fold(f64::NEG_INFINITY, f64::max);
            let required = lowest + SECTION_BOTTOM_MARGIN - section.bounds.y;

            let mut adjusted = *section;
            if required > section.base_height {
                adjusted.bounds.height = required;
                adjusted.expanded = true;
            } else {
                adjusted.bounds.height = section.base_height;
                adjusted.expanded = false;
            }
            adjusted
        })
        .collect()
}

/// Find the section for a category.
#[must_use]
pub fn section_for(sections: &[Section], category: Category) -> Option<&Section> {
    sections.iter().find(|s| s.category == category)
}

/// Which category's section contains `point`. The first match in
/// stop/start/continue order wins; `None` when the point is in a gap or off
/// the board.
#[must_use]
pub fn resolve_category(point: Point, sections: &[Section]) -> Option<Category> {
    Category::ALL
        .iter()
        .filter_map(|&c| section_for(sections, c))
        .find(|s| s.bounds.contains_point(point))
        .map(|s| s.category)
}

/// Where a dropped note ends up: the category whose section contains its
/// top-left corner (keeping `current` when it lands in a gap), and the
/// position clamped into that section's content rectangle.
///
/// Returns `None` when the resulting category has no measured section.
#[must_use]
pub fn settle_drop(position: Point, current: Category, sections: &[Section]) -> Option<(Category, Point)> {
    let category = resolve_category(position, sections).unwrap_or(current);
    let section = section_for(sections, category).filter(|s| s.is_measured())?;
    let settled = section.content_rect().clamp_origin(position, Size::new(NOTE_WIDTH, NOTE_HEIGHT));
    Some((category, settled))
}

/// The draggable area: the full canvas width, and tall enough to reach the
/// bottom of the tallest section.
#[must_use]
pub fn canvas_bounds(canvas: Size, sections: &[Section]) -> Rect {
    let tallest = sections
        .iter()
        .map(|s| s.bounds.bottom() + CANVAS_PADDING)
        .fold(canvas.height, f64::max);
    Rect::new(0.0, 0.0, canvas.width, tallest)
}
