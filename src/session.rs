//! One whiteboard session driven headlessly: an engine plus a save sink.
//!
//! The session is the host side of the engine's action protocol. It feeds
//! events in, routes the resulting actions (saves go to the sink, the rest are
//! logged), and owns the pacing delay in front of grouping.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::Duration;

use tracing::{debug, info};
use whiteboard::doc::{Category, NoteId};
use whiteboard::engine::{Action, EngineCore};
use whiteboard::geometry::Point;

use crate::config::HostConfig;
use crate::sample::NoteInput;
use crate::save::{SaveError, SaveSink};

pub struct Session {
    engine: EngineCore,
    sink: Box<dyn SaveSink>,
    grouping_delay: Duration,
}

impl Session {
    /// Open a fresh board sized and seeded from `config`.
    pub fn open(config: &HostConfig, sink: Box<dyn SaveSink>) -> Result<Self, SaveError> {
        let engine = match config.seed {
            Some(seed) => EngineCore::with_seed(seed),
            None => EngineCore::new(),
        };
        let mut session = Self { engine, sink, grouping_delay: config.grouping_delay };
        let actions = session.engine.open(config.canvas_width, config.canvas_height);
        session.process_actions(actions)?;
        Ok(session)
    }

    #[must_use]
    pub fn engine(&self) -> &EngineCore {
        &self.engine
    }

    /// Add each note in order; returns the ids actually created.
    pub fn add_notes(&mut self, notes: &[NoteInput]) -> Result<Vec<NoteId>, SaveError> {
        let mut ids = Vec::with_capacity(notes.len());
        for input in notes {
            let actions = self.engine.add_note(input.category, input.text.clone());
            ids.extend(actions.iter().filter_map(|a| match a {
                Action::NoteCreated(note) => Some(note.id),
                _ => None,
            }));
            self.process_actions(actions)?;
        }
        Ok(ids)
    }

    /// Add `count` blank notes to one category and report where each landed.
    pub fn place(&mut self, category: Category, count: usize) -> Result<Vec<Point>, SaveError> {
        let inputs = vec![NoteInput::new(category, ""); count];
        let ids = self.add_notes(&inputs)?;
        Ok(ids.iter().filter_map(|id| self.engine.note(id)).map(|n| n.position).collect())
    }

    /// Mark the board as analysing, wait out the pacing delay, then group.
    /// Returns the number of clusters formed.
    pub async fn group_with_ai(&mut self) -> Result<usize, SaveError> {
        let started = self.engine.begin_grouping();
        self.process_actions(started)?;

        if !self.grouping_delay.is_zero() {
            debug!(delay = ?self.grouping_delay, "grouping paced");
            tokio::time::sleep(self.grouping_delay).await;
        }

        let applied = self.engine.group_notes();
        let clusters = applied
            .iter()
            .find_map(|a| match a {
                Action::GroupingApplied { clusters } => Some(*clusters),
                _ => None,
            })
            .unwrap_or_default();
        self.process_actions(applied)?;
        Ok(clusters)
    }

    pub fn save(&mut self) -> Result<(), SaveError> {
        let actions = self.engine.save();
        self.process_actions(actions)
    }

    /// End the session. Unsaved changes are dropped without a prompt.
    pub fn close(mut self) -> Result<(), SaveError> {
        let actions = self.engine.close();
        self.process_actions(actions)
    }

    fn process_actions(&mut self, actions: Vec<Action>) -> Result<(), SaveError> {
        for action in actions {
            match action {
                Action::SaveRequested(snapshot) => self.sink.save(&snapshot)?,
                Action::NoteCreated(note) | Action::NoteUpdated(note) => {
                    debug!(id = %note.id, category = ?note.category, x = note.position.x, y = note.position.y, "note");
                }
                Action::NoteDeleted { id } => debug!(%id, "note removed"),
                Action::GroupingStarted => info!("analysing notes"),
                Action::GroupingApplied { clusters } => info!(clusters, "grouping applied"),
                Action::Closed => info!("session closed"),
                Action::SectionsChanged | Action::RenderNeeded => {}
            }
        }
        Ok(())
    }
}
