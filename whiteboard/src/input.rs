//! Input model: pointer buttons and the gesture state machine.
//!
//! `InputState` is the active gesture between pointer-down and pointer-up.
//! At most one gesture runs at a time; a drag always wins over a pan because
//! the note hit-test happens first on pointer-down.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::NoteId;
use crate::geometry::Point;

/// Which pointer button a host event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Drags a note, or pans over empty canvas.
    Primary,
    /// Always pans.
    Middle,
    /// Starts nothing.
    Secondary,
}

/// Gesture in progress, if any.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    #[default]
    Idle,
    /// The user is panning the viewport.
    Panning {
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
    },
    /// The user is moving a note.
    DraggingNote {
        /// Id of the note being dragged.
        id: NoteId,
        /// Canvas-space offset from the note's top-left corner to the pointer.
        pointer_offset: Point,
        /// Whether the pointer has moved since pick-up.
        moved: bool,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The note being dragged, if any.
    #[must_use]
    pub fn dragged_note(&self) -> Option<NoteId> {
        match self {
            Self::DraggingNote { id, .. } => Some(*id),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }
}
