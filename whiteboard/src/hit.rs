#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{NoteId, NoteStore};
use crate::geometry::Point;

/// Which note (if any) is under `canvas_pt`.
///
/// Later notes are drawn over earlier ones, so the scan runs newest first.
#[must_use]
pub fn hit_test(canvas_pt: Point, doc: &NoteStore) -> Option<NoteId> {
    doc.all()
        .iter()
        .rev()
        .find(|note| note.rect().contains_point(canvas_pt))
        .map(|note| note.id)
}
