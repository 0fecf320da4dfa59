//! Whiteboard session orchestrator.
//!
//! `EngineCore` owns everything one whiteboard session holds: notes, derived
//! sections, the last grouping pass (clusters and themes), the viewport, and
//! the active gesture. Host events go in; [`Action`]s come out for the host to
//! render or forward. Nothing here blocks or performs I/O.
//!
//! ERROR HANDLING
//! ==============
//! Every handler recovers locally. Unknown ids, an unmeasured canvas, and
//! gestures that are not allowed in the current state return no actions
//! rather than an error; a slightly wrong placement beats a broken session.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::cluster::{Cluster, cluster_all};
use crate::consts::{MIN_CANVAS_WIDTH, MIN_CLUSTER_SIZE, NOTE_HEIGHT, NOTE_WIDTH};
use crate::doc::{Category, Note, NoteId, NoteStore, Snapshot};
use crate::geometry::{Point, Size};
use crate::hit::hit_test;
use crate::input::{Button, InputState};
use crate::layout::layout_cluster;
use crate::placement::find_free_position;
use crate::section::{Section, adjust_for_content, canvas_bounds, compute_initial_sections, section_for, settle_drop};
use crate::theme::{Theme, name_themes};
use crate::viewport::Viewport;

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    NoteCreated(Note),
    NoteUpdated(Note),
    NoteDeleted { id: NoteId },
    SectionsChanged,
    GroupingStarted,
    GroupingApplied { clusters: usize },
    SaveRequested(Snapshot),
    Closed,
    RenderNeeded,
}

/// Core whiteboard state for one session.
pub struct EngineCore {
    pub doc: NoteStore,
    pub sections: Vec<Section>,
    pub clusters: Vec<Cluster>,
    pub themes: Vec<Theme>,
    pub viewport: Viewport,
    pub input: InputState,
    pub canvas: Size,
    /// Set between `begin_grouping` and `group_notes`.
    pub analyzing: bool,
    rng: StdRng,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineCore {
    /// Engine whose jitter is seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Engine with a fixed seed. Same seed and same event sequence give the
    /// same board.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            doc: NoteStore::new(),
            sections: Vec::new(),
            clusters: Vec::new(),
            themes: Vec::new(),
            viewport: Viewport::default(),
            input: InputState::default(),
            canvas: Size::default(),
            analyzing: false,
            rng,
        }
    }

    // --- Session ---

    /// Start a fresh session on a canvas of the given size.
    pub fn open(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.discard();
        info!(width, height, "whiteboard opened");
        let mut actions = self.set_canvas_size(width, height);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// End the session. All unsaved state is discarded.
    pub fn close(&mut self) -> Vec<Action> {
        info!(notes = self.doc.len(), "whiteboard closed");
        self.discard();
        vec![Action::Closed]
    }

    /// Hand the current notes, clusters, and themes to the host.
    pub fn save(&self) -> Vec<Action> {
        let snapshot = self.snapshot();
        info!(
            notes = snapshot.notes.len(),
            clusters = snapshot.clusters.len(),
            themes = snapshot.themes.len(),
            "whiteboard save requested"
        );
        vec![Action::SaveRequested(snapshot)]
    }

    /// The save payload.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { notes: self.doc.all().to_vec(), clusters: self.clusters.clone(), themes: self.themes.clone() }
    }

    /// Replace the board contents with a saved snapshot.
    ///
    /// Editors are closed and every note is pulled back inside its own
    /// category's section, so a hand-edited or stale save cannot leave notes
    /// stranded.
    pub fn load_snapshot(&mut self, snapshot: Snapshot) -> Vec<Action> {
        self.doc.load(snapshot.notes);
        for note in self.doc.iter_mut() {
            note.editing = false;
        }
        self.clusters = snapshot.clusters;
        self.themes = snapshot.themes;
        self.input = InputState::Idle;
        self.relayout();
        let mut actions = self.settle_notes();
        actions.extend([Action::SectionsChanged, Action::RenderNeeded]);
        actions
    }

    fn discard(&mut self) {
        self.doc.clear();
        self.sections.clear();
        self.clusters.clear();
        self.themes.clear();
        self.viewport = Viewport::default();
        self.input = InputState::Idle;
        self.canvas = Size::default();
        self.analyzing = false;
    }

    // --- Canvas ---

    /// Record the measured canvas size and rebuild sections. Notes left
    /// outside their own section by a resize are moved back in.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.canvas = Size::new(width, height);
        if !self.relayout() {
            return Vec::new();
        }
        if width < MIN_CANVAS_WIDTH {
            debug!(width, min = MIN_CANVAS_WIDTH, "canvas narrower than one note per section");
        }
        let mut actions = self.settle_notes();
        actions.push(Action::SectionsChanged);
        actions
    }

    /// Rebuild sections from the canvas size and current notes. Returns false
    /// (and leaves sections empty) until the canvas has been measured.
    fn relayout(&mut self) -> bool {
        if !self.canvas.is_measured() {
            debug!(width = self.canvas.width, height = self.canvas.height, "canvas not measured; layout deferred");
            self.sections.clear();
            return false;
        }
        let initial = compute_initial_sections(self.canvas);
        self.sections = adjust_for_content(&initial, self.doc.all());
        true
    }

    /// Clamp every note into its own category's content rectangle, keeping
    /// its category, then re-expand sections. Returns `NoteUpdated` for each
    /// note that moved.
    fn settle_notes(&mut self) -> Vec<Action> {
        let note_size = Size::new(NOTE_WIDTH, NOTE_HEIGHT);
        let mut actions = Vec::new();
        for note in self.doc.iter_mut() {
            let Some(section) = section_for(&self.sections, note.category).filter(|s| s.is_measured()) else {
                continue;
            };
            let settled = section.content_rect().clamp_origin(note.position, note_size);
            if settled != note.position {
                debug!(id = %note.id, category = ?note.category, x = settled.x, y = settled.y, "note pulled back into section");
                note.position = settled;
                actions.push(Action::NoteUpdated(note.clone()));
            }
        }
        if !actions.is_empty() {
            self.relayout();
        }
        actions
    }

    // --- Notes ---

    /// Create a note in the first free grid cell of its category.
    pub fn add_note(&mut self, category: Category, text: impl Into<String>) -> Vec<Action> {
        if self.sections.is_empty() {
            debug!(?category, "add_note before canvas measured; ignored");
            return Vec::new();
        }
        let position = {
            let existing = self.doc.in_category(category);
            find_free_position(category, &existing, &self.sections, &mut self.rng)
        };
        let note = Note::new(category, text, position);
        info!(id = %note.id, ?category, x = position.x, y = position.y, "note created");
        self.doc.insert(note.clone());
        self.relayout();
        vec![Action::NoteCreated(note), Action::SectionsChanged, Action::RenderNeeded]
    }

    /// Delete a note and drop it from any cluster or theme.
    pub fn delete_note(&mut self, id: &NoteId) -> Vec<Action> {
        let Some(note) = self.doc.remove(id) else {
            debug!(%id, "delete of unknown note ignored");
            return Vec::new();
        };
        if self.input.dragged_note() == Some(*id) {
            self.input = InputState::Idle;
        }
        self.strip_membership(id);
        self.relayout();
        info!(%id, category = ?note.category, "note deleted");
        vec![Action::NoteDeleted { id: *id }, Action::SectionsChanged, Action::RenderNeeded]
    }

    /// Open the text editor on a note. Suppresses dragging it.
    pub fn begin_edit(&mut self, id: &NoteId) -> Vec<Action> {
        self.update_note(id, |note| note.editing = true)
    }

    /// Commit edited text and close the editor.
    pub fn commit_text(&mut self, id: &NoteId, text: impl Into<String>) -> Vec<Action> {
        let text = text.into();
        self.update_note(id, |note| {
            note.text = text;
            note.editing = false;
        })
    }

    /// Close the editor without changing the text.
    pub fn cancel_edit(&mut self, id: &NoteId) -> Vec<Action> {
        self.update_note(id, |note| note.editing = false)
    }

    fn update_note(&mut self, id: &NoteId, apply: impl FnOnce(&mut Note)) -> Vec<Action> {
        let Some(note) = self.doc.get_mut(id) else {
            debug!(%id, "update of unknown note ignored");
            return Vec::new();
        };
        apply(note);
        vec![Action::NoteUpdated(note.clone()), Action::RenderNeeded]
    }

    /// Remove `id` from every cluster and theme. A cluster left with fewer
    /// than two members is dissolved along with its theme.
    fn strip_membership(&mut self, id: &NoteId) {
        for cluster in &mut self.clusters {
            cluster.note_ids.retain(|n| n != id);
        }
        for theme in &mut self.themes {
            theme.note_ids.retain(|n| n != id);
        }

        let (kept, dissolved): (Vec<Cluster>, Vec<Cluster>) =
            self.clusters.drain(..).partition(|c| c.len() >= MIN_CLUSTER_SIZE);
        self.clusters = kept;
        for cluster in dissolved {
            debug!(cluster = cluster.id, "cluster dissolved");
            self.themes.retain(|t| t.id != cluster.id);
            for member in &cluster.note_ids {
                if let Some(note) = self.doc.get_mut(member) {
                    note.clear_grouping();
                }
            }
        }
    }

    // --- Grouping ---

    /// Mark the board as analysing. The host runs `group_notes` once its
    /// pacing delay has elapsed.
    pub fn begin_grouping(&mut self) -> Vec<Action> {
        self.analyzing = true;
        vec![Action::GroupingStarted, Action::RenderNeeded]
    }

    /// Cluster every category, lay each cluster out in a circle, and name the
    /// resulting themes. Replaces any previous grouping wholesale.
    pub fn group_notes(&mut self) -> Vec<Action> {
        let clusters = cluster_all(self.doc.all());
        let themes = name_themes(&clusters, &mut self.rng);

        for note in self.doc.iter_mut() {
            note.clear_grouping();
        }

        for (cluster, theme) in clusters.iter().zip(&themes) {
            let placed = match section_for(&self.sections, cluster.category) {
                Some(section) => layout_cluster(cluster, section, &mut self.rng),
                None => Vec::new(),
            };
            for (id, position) in placed {
                if let Some(note) = self.doc.get_mut(&id) {
                    note.position = position;
                }
            }
            for id in &cluster.note_ids {
                if let Some(note) = self.doc.get_mut(id) {
                    note.cluster = Some(cluster.id);
                    note.theme = Some(theme.name.clone());
                }
            }
        }

        info!(clusters = clusters.len(), notes = self.doc.len(), "notes grouped");
        let count = clusters.len();
        self.clusters = clusters;
        self.themes = themes;
        self.analyzing = false;
        self.relayout();
        vec![Action::GroupingApplied { clusters: count }, Action::SectionsChanged, Action::RenderNeeded]
    }

    /// Discard clusters and themes and clear every note's grouping labels.
    pub fn reset_grouping(&mut self) -> Vec<Action> {
        self.clusters.clear();
        self.themes.clear();
        self.analyzing = false;
        for note in self.doc.iter_mut() {
            note.clear_grouping();
        }
        vec![Action::RenderNeeded]
    }

    // --- Viewport ---

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.viewport.zoom_in();
        vec![Action::RenderNeeded]
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.viewport.zoom_out();
        vec![Action::RenderNeeded]
    }

    pub fn set_zoom(&mut self, zoom: f64) -> Vec<Action> {
        self.viewport.set_zoom(zoom);
        vec![Action::RenderNeeded]
    }

    pub fn reset_view(&mut self) -> Vec<Action> {
        self.viewport.reset_view();
        vec![Action::RenderNeeded]
    }

    /// Record where the board's top-left corner sits on screen.
    pub fn set_board_origin(&mut self, origin: Point) {
        self.viewport.board_origin = origin;
    }

    // --- Pointer input ---

    /// Start a drag (primary button over a non-editing note) or a pan
    /// (primary over empty canvas, or middle anywhere).
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if !self.input.is_idle() {
            return Vec::new();
        }
        let canvas_pt = self.viewport.to_canvas(screen_pt);

        match button {
            Button::Primary => {
                if let Some(id) = hit_test(canvas_pt, &self.doc) {
                    let Some(note) = self.doc.get(&id) else {
                        return Vec::new();
                    };
                    if note.editing {
                        return Vec::new();
                    }
                    self.input =
                        InputState::DraggingNote { id, pointer_offset: canvas_pt.sub(note.position), moved: false };
                    return Vec::new();
                }
                self.input = InputState::Panning { last_screen: screen_pt };
            }
            Button::Middle => {
                self.input = InputState::Panning { last_screen: screen_pt };
            }
            Button::Secondary => {}
        }
        Vec::new()
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { last_screen } => {
                self.viewport
                    .pan_by_screen_delta(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                self.input = InputState::Panning { last_screen: screen_pt };
                vec![Action::RenderNeeded]
            }
            InputState::DraggingNote { id, pointer_offset, moved } => {
                let bounds = canvas_bounds(self.canvas, &self.sections);
                let target = self.viewport.to_canvas(screen_pt).sub(pointer_offset);
                let position = bounds.clamp_origin(target, Size::new(NOTE_WIDTH, NOTE_HEIGHT));

                if !moved {
                    self.strip_membership(&id);
                }
                self.input = InputState::DraggingNote { id, pointer_offset, moved: true };

                let Some(note) = self.doc.get_mut(&id) else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                note.position = position;
                note.clear_grouping();
                vec![Action::NoteUpdated(note.clone()), Action::RenderNeeded]
            }
        }
    }

    /// Finish the active gesture. A moved note settles into the section it
    /// was dropped on, taking that section's category and colour.
    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button) -> Vec<Action> {
        let state = std::mem::take(&mut self.input);
        let InputState::DraggingNote { id, moved: true, .. } = state else {
            return Vec::new();
        };
        let Some(note) = self.doc.get_mut(&id) else {
            return Vec::new();
        };
        let Some((category, position)) = settle_drop(note.position, note.category, &self.sections) else {
            return vec![Action::NoteUpdated(note.clone()), Action::RenderNeeded];
        };
        if category != note.category {
            info!(%id, from = ?note.category, to = ?category, "note moved to another section");
        }
        note.category = category;
        note.position = position;
        let updated = note.clone();
        self.relayout();
        vec![Action::NoteUpdated(updated), Action::SectionsChanged, Action::RenderNeeded]
    }

    // --- Queries ---

    #[must_use]
    pub fn note(&self, id: &NoteId) -> Option<&Note> {
        self.doc.get(id)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Theme for a cluster id, if the cluster still exists.
    #[must_use]
    pub fn theme_for(&self, cluster_id: usize) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == cluster_id)
    }
}
