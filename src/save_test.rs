use whiteboard::doc::{Category, Note};
use whiteboard::geometry::Point;

use super::*;

fn snapshot_with(texts: &[&str]) -> Snapshot {
    Snapshot {
        notes: texts
            .iter()
            .map(|t| Note::new(Category::Continue, *t, Point::new(30.0, 80.0)))
            .collect(),
        ..Snapshot::default()
    }
}

#[test]
fn log_sink_counts_saves() {
    let mut sink = LogSink::default();
    sink.save(&snapshot_with(&["a"])).unwrap();
    sink.save(&snapshot_with(&["a", "b"])).unwrap();
    assert_eq!(sink.saves, 2);
}

#[test]
fn json_sink_writes_readable_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");
    let snapshot = snapshot_with(&["pairing works", "demos on friday"]);

    let mut sink = JsonFileSink::new(&path);
    sink.save(&snapshot).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(Snapshot::from_json(&raw).unwrap(), snapshot);
}

#[test]
fn json_sink_overwrites_previous_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");
    let mut sink = JsonFileSink::new(&path);
    sink.save(&snapshot_with(&["a", "b", "c"])).unwrap();
    sink.save(&snapshot_with(&["a"])).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(Snapshot::from_json(&raw).unwrap().notes.len(), 1);
}

#[test]
fn json_sink_reports_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("board.json");
    let mut sink = JsonFileSink::new(&path);
    let err = sink.save(&snapshot_with(&["a"])).unwrap_err();
    match err {
        SaveError::Io { path: reported, .. } => assert_eq!(reported, path),
        SaveError::Snapshot(e) => panic!("expected io error, got {e}"),
    }
}

#[test]
fn sink_for_picks_file_sink_when_output_given() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    let mut sink = sink_for(Some(&path));
    sink.save(&snapshot_with(&["x"])).unwrap();
    assert!(path.exists());

    let mut log = sink_for(None);
    log.save(&snapshot_with(&["x"])).unwrap();
}
