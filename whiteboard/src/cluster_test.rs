#![allow(clippy::float_cmp)]

use super::*;

fn note(category: Category, text: &str, x: f64, y: f64) -> Note {
    Note::new(category, text, Point::new(x, y))
}

fn refs(notes: &[Note]) -> Vec<&Note> {
    notes.iter().collect()
}

// =============================================================
// Degenerate inputs
// =============================================================

#[test]
fn empty_category_has_no_clusters() {
    assert!(cluster_category(&[], 0).is_empty());
}

#[test]
fn single_note_has_no_clusters() {
    let notes = vec![note(Category::Stop, "communication issue", 0.0, 0.0)];
    assert!(cluster_category(&refs(&notes), 0).is_empty());
}

#[test]
fn blank_notes_do_not_participate() {
    let notes = vec![
        note(Category::Stop, "communication issue", 0.0, 0.0),
        note(Category::Stop, "", 10.0, 0.0),
        note(Category::Stop, "   ", 20.0, 0.0),
    ];
    assert!(cluster_category(&refs(&notes), 0).is_empty());
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn identical_notes_form_one_cluster() {
    let notes: Vec<Note> = (0..3)
        .map(|i| note(Category::Stop, "communication issue with standup", f64::from(i) * 220.0, 0.0))
        .collect();
    let clusters = cluster_all(&notes);
    assert_eq!(clusters.len(), 1);
    let ids: Vec<_> = notes.iter().map(|n| n.id).collect();
    assert_eq!(clusters[0].note_ids, ids);
    assert_eq!(clusters[0].category, Category::Stop);
    assert_eq!(clusters[0].id, 0);
}

#[test]
fn disjoint_pair_ends_up_as_residual_cluster() {
    let notes = vec![
        note(Category::Start, "coffee machine broken", 0.0, 0.0),
        note(Category::Start, "weather outside lovely", 220.0, 0.0),
    ];
    let clusters = cluster_all(&notes);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].len(), 2);
}

#[test]
fn similar_pair_and_leftovers_split() {
    let notes = vec![
        note(Category::Stop, "standup meetings run too long", 0.0, 0.0),
        note(Category::Stop, "coffee machine broken", 0.0, 140.0),
        note(Category::Stop, "communication issue with standup", 220.0, 0.0),
        note(Category::Stop, "weather outside lovely", 220.0, 140.0),
    ];
    let clusters = cluster_category(&refs(&notes), 0);
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].note_ids, vec![notes[0].id, notes[2].id]);
    assert_eq!(clusters[1].note_ids, vec![notes[1].id, notes[3].id]);
}

#[test]
fn single_leftover_stays_unclustered() {
    let notes = vec![
        note(Category::Stop, "communication issue with standup", 0.0, 0.0),
        note(Category::Stop, "communication issue with standup", 220.0, 0.0),
        note(Category::Stop, "coffee machine broken", 440.0, 0.0),
    ];
    let clusters = cluster_category(&refs(&notes), 0);
    assert_eq!(clusters.len(), 1);
    assert!(!clusters[0].contains(&notes[2].id));
}

// =============================================================
// Ids, centers, categories
// =============================================================

#[test]
fn center_is_centroid_of_members() {
    let notes = vec![
        note(Category::Continue, "pair programming helps", 0.0, 0.0),
        note(Category::Continue, "pair programming helps", 100.0, 50.0),
    ];
    let clusters = cluster_category(&refs(&notes), 0);
    assert_eq!(clusters[0].center, Point::new(50.0, 25.0));
}

#[test]
fn ids_are_sequential_across_categories() {
    let notes = vec![
        note(Category::Continue, "pair programming helps", 0.0, 0.0),
        note(Category::Stop, "communication issue with standup", 0.0, 0.0),
        note(Category::Continue, "pair programming helps", 0.0, 0.0),
        note(Category::Stop, "communication issue with standup", 0.0, 0.0),
    ];
    let clusters = cluster_all(&notes);
    assert_eq!(clusters.len(), 2);
    assert_eq!((clusters[0].id, clusters[0].category), (0, Category::Stop));
    assert_eq!((clusters[1].id, clusters[1].category), (1, Category::Continue));
}

#[test]
fn clusters_never_mix_categories() {
    let notes = vec![
        note(Category::Stop, "communication issue with standup", 0.0, 0.0),
        note(Category::Start, "communication issue with standup", 0.0, 0.0),
    ];
    assert!(cluster_all(&notes).is_empty());
}

#[test]
fn every_cluster_has_at_least_two_members() {
    let texts = [
        "standup meetings run too long",
        "flaky tests in the build pipeline",
        "coffee machine broken",
        "deploy pipeline keeps failing",
        "communication issue with standup",
        "weather outside lovely",
        "more pair programming",
    ];
    let notes: Vec<Note> = texts.iter().map(|t| note(Category::Stop, t, 0.0, 0.0)).collect();
    let clusters = cluster_all(&notes);
    assert!(!clusters.is_empty());
    for c in &clusters {
        assert!(c.len() >= MIN_CLUSTER_SIZE);
    }
    // No note is in two clusters.
    let mut seen = std::collections::HashSet::new();
    for id in clusters.iter().flat_map(|c| c.note_ids.iter()) {
        assert!(seen.insert(*id));
    }
}

#[test]
fn clustering_is_deterministic() {
    let notes = vec![
        note(Category::Stop, "standup meetings run too long", 0.0, 0.0),
        note(Category::Stop, "communication issue with standup", 0.0, 0.0),
        note(Category::Stop, "coffee machine broken", 0.0, 0.0),
    ];
    assert_eq!(cluster_all(&notes), cluster_all(&notes));
}

// =============================================================
// similarity_matrix
// =============================================================

#[test]
fn matrix_is_symmetric_with_zero_diagonal() {
    let notes = vec![
        note(Category::Stop, "standup meetings run too long", 0.0, 0.0),
        note(Category::Stop, "communication issue with standup", 0.0, 0.0),
        note(Category::Stop, "coffee machine broken", 0.0, 0.0),
    ];
    let m = similarity_matrix(&refs(&notes));
    for i in 0..3 {
        assert_eq!(m[i][i], 0.0);
        for j in 0..3 {
            assert_eq!(m[i][j], m[j][i]);
        }
    }
}
