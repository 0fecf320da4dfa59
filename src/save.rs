//! Save seam: where a board snapshot goes when the user saves.

#[cfg(test)]
#[path = "save_test.rs"]
mod save_test;

use std::path::{Path, PathBuf};

use whiteboard::doc::{Snapshot, SnapshotError};

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Receives snapshots from a session.
pub trait SaveSink: Send {
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), SaveError>;
}

/// Logs a summary of each snapshot and keeps nothing.
#[derive(Debug, Default)]
pub struct LogSink {
    saves: usize,
}

impl SaveSink for LogSink {
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), SaveError> {
        self.saves += 1;
        tracing::info!(
            save = self.saves,
            notes = snapshot.notes.len(),
            clusters = snapshot.clusters.len(),
            themes = snapshot.themes.len(),
            "board saved (log only)"
        );
        Ok(())
    }
}

/// Writes each snapshot to a JSON file, replacing the previous one.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SaveSink for JsonFileSink {
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), SaveError> {
        let json = snapshot.to_json()?;
        std::fs::write(&self.path, json).map_err(|source| SaveError::Io { path: self.path.clone(), source })?;
        tracing::info!(path = %self.path.display(), notes = snapshot.notes.len(), "board saved");
        Ok(())
    }
}

/// Pick the sink for an optional output path.
#[must_use]
pub fn sink_for(output: Option<&Path>) -> Box<dyn SaveSink> {
    match output {
        Some(path) => Box::new(JsonFileSink::new(path)),
        None => Box::new(LogSink::default()),
    }
}
