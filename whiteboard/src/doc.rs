//! Document model: categories, note cards, the in-memory note store, and the
//! save snapshot.
//!
//! The store keeps notes in creation order. That order is observable: the
//! clustering pass walks notes in collection order, so two boards holding the
//! same notes in a different order may group differently.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cluster::Cluster;
use crate::geometry::{Point, Rect};
use crate::theme::Theme;

/// Unique identifier for a note card.
pub type NoteId = Uuid;

/// One of the three fixed retrospective columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Stop,
    Start,
    Continue,
}

impl Category {
    /// Every category in fixed left-to-right order.
    pub const ALL: [Category; 3] = [Category::Stop, Category::Start, Category::Continue];

    /// Column index in left-to-right order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Stop => 0,
            Self::Start => 1,
            Self::Continue => 2,
        }
    }

    /// Background colour of this category's section and its notes.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Stop => "#fde2e2",
            Self::Start => "#dcfce7",
            Self::Continue => "#dbeafe",
        }
    }

    /// Section header title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Stop => "Stop",
            Self::Start => "Start",
            Self::Continue => "Continue",
        }
    }

    /// Parse the lowercase wire name. Returns `None` for anything else.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "stop" => Some(Self::Stop),
            "start" => Some(Self::Start),
            "continue" => Some(Self::Continue),
            _ => None,
        }
    }
}

/// A note card on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier for this note.
    pub id: NoteId,
    /// Free-form note text.
    pub text: String,
    /// Owning category; always matches the section the note sits in.
    pub category: Category,
    /// Top-left corner in canvas coordinates.
    pub position: Point,
    /// Cluster id from the most recent grouping pass, if any.
    #[serde(default)]
    pub cluster: Option<usize>,
    /// Theme label from the most recent grouping pass, if any.
    #[serde(default)]
    pub theme: Option<String>,
    /// Whether the text editor is open for this note. Suppresses dragging.
    #[serde(default)]
    pub editing: bool,
}

impl Note {
    /// Create a note with a fresh id.
    #[must_use]
    pub fn new(category: Category, text: impl Into<String>, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            category,
            position,
            cluster: None,
            theme: None,
            editing: false,
        }
    }

    /// Card colour, derived from the category so the two never disagree.
    #[must_use]
    pub fn color(&self) -> &'static str {
        self.category.color()
    }

    /// The card's footprint on the canvas.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::note_at(self.position)
    }

    /// Whether the note takes part in similarity scoring and clustering.
    #[must_use]
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Drop any grouping labels carried from the last grouping pass.
    pub fn clear_grouping(&mut self) {
        self.cluster = None;
        self.theme = None;
    }
}

/// In-memory store of notes, in creation order.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Insert a note, replacing any existing note with the same id in place.
    pub fn insert(&mut self, note: Note) {
        if let Some(existing) = self.notes.iter_mut().find(|n| n.id == note.id) {
            *existing = note;
        } else {
            self.notes.push(note);
        }
    }

    /// Remove a note by id, returning it if it was present.
    pub fn remove(&mut self, id: &NoteId) -> Option<Note> {
        let index = self.notes.iter().position(|n| &n.id == id)?;
        Some(self.notes.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    pub fn get_mut(&mut self, id: &NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| &n.id == id)
    }

    /// All notes in creation order.
    #[must_use]
    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Note> {
        self.notes.iter_mut()
    }

    /// Notes of one category, in creation order.
    #[must_use]
    pub fn in_category(&self, category: Category) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.category == category).collect()
    }

    /// Replace all notes with a full snapshot.
    pub fn load(&mut self, notes: Vec<Note>) {
        self.notes.clear();
        for note in notes {
            self.insert(note);
        }
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Errors raised while encoding or decoding a [`Snapshot`].
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot encode failed: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("snapshot decode failed: {0}")]
    Decode(#[source] serde_json::Error),
}

/// The save payload. Sections and the viewport are presentation state and
/// are rebuilt on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub notes: Vec<Note>,
    #[serde(default)]
    pub clusters: Vec<Cluster>,
    #[serde(default)]
    pub themes: Vec<Theme>,
}

impl Snapshot {
    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(SnapshotError::Encode)
    }

    /// Parse a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Decode`] if the input is not a valid snapshot.
    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(raw).map_err(SnapshotError::Decode)
    }
}
