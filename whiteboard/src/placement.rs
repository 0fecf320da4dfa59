//! Grid placement for new notes.
//!
//! Each section's content area is an implicit grid whose cells are one note
//! plus the margin. Existing notes mark every cell their footprint touches,
//! then rows are scanned top to bottom and columns left to right for the first
//! free cell. Rows grow without bound, so the jittered fallback is only taken
//! when the section is unmeasured or the scan cap is hit.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use std::collections::HashSet;

use rand::Rng;

use crate::consts::{CELL_HEIGHT, CELL_WIDTH, MAX_GRID_ROWS, PLACEMENT_FALLBACK_JITTER};
use crate::doc::{Category, Note};
use crate::geometry::{Point, Rect};
use crate::section::{Section, section_for};

/// A (row, column) index in a section's placement grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

/// Canvas position of a grid cell's top-left corner.
#[must_use]
pub fn cell_origin(section: &Section, cell: GridCell) -> Point {
    let origin = section.content_origin();
    #[allow(clippy::cast_precision_loss)]
    let (row, col) = (cell.row as f64, cell.col as f64);
    Point::new(origin.x + col * CELL_WIDTH, origin.y + row * CELL_HEIGHT)
}

/// Every grid cell whose note footprint overlaps `rect`.
///
/// A grid-aligned note maps to exactly its own cell; a note dropped between
/// cells marks each cell it straddles.
#[must_use]
pub fn covered_cells(section: &Section, rect: &Rect) -> Vec<GridCell> {
    let origin = section.content_origin();
    #[allow(clippy::cast_possible_truncation)]
    let index = |offset: f64, pitch: f64| (offset / pitch).floor() as i64;

    let col_lo = index(rect.x - origin.x, CELL_WIDTH) - 1;
    let col_hi = index(rect.right() - origin.x, CELL_WIDTH);
    let row_lo = index(rect.y - origin.y, CELL_HEIGHT) - 1;
    let row_hi = index(rect.bottom() - origin.y, CELL_HEIGHT);

    let columns = section.columns();
    let mut cells = Vec::new();
    for row in row_lo.max(0)..=row_hi {
        for col in col_lo.max(0)..=col_hi {
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            let cell = GridCell { row: row as usize, col: col as usize };
            if cell.col >= columns {
                continue;
            }
            if Rect::note_at(cell_origin(section, cell)).intersects(rect) {
                cells.push(cell);
            }
        }
    }
    cells
}

/// Position for a new note in `category` that overlaps none of `existing`.
///
/// `existing` should hold the notes already in that category. An empty
/// category gets the first cell directly below the header.
pub fn find_free_position<R: Rng + ?Sized>(
    category: Category,
    existing: &[&Note],
    sections: &[Section],
    rng: &mut R,
) -> Point {
    let Some(section) = section_for(sections, category).filter(|s| s.is_measured()) else {
        tracing::debug!(?category, "section not measured; using jittered fallback");
        return jittered(Point::default(), rng);
    };

    let occupied: HashSet<GridCell> = existing
        .iter()
        .flat_map(|note| covered_cells(section, &note.rect()))
        .collect();

    let columns = section.columns();
    for row in 0..MAX_GRID_ROWS {
        for col in 0..columns {
            let cell = GridCell { row, col };
            if !occupied.contains(&cell) {
                return cell_origin(section, cell);
            }
        }
    }

    tracing::debug!(?category, notes = existing.len(), "placement grid exhausted; using jittered fallback");
    jittered(section.content_origin(), rng)
}

fn jittered<R: Rng + ?Sized>(origin: Point, rng: &mut R) -> Point {
    Point::new(
        origin.x + rng.random_range(-PLACEMENT_FALLBACK_JITTER..=PLACEMENT_FALLBACK_JITTER),
        origin.y + rng.random_range(-PLACEMENT_FALLBACK_JITTER..=PLACEMENT_FALLBACK_JITTER),
    )
}
