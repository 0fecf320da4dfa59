//! Greedy threshold clustering of notes within one category.
//!
//! ALGORITHM
//! =========
//! Single pass, order dependent, deterministic for a fixed input order:
//!
//! 1. Score every pair of participating notes.
//! 2. Walk notes in collection order. Each unassigned note seeds a candidate
//!    group; every other unassigned note scoring at least the threshold
//!    against the seed joins it.
//! 3. A candidate with two or more members is committed. Otherwise the seed
//!    goes back to the pool.
//! 4. Two or more leftovers form one residual cluster regardless of their
//!    mutual similarity.
//!
//! This is not an optimal partition and is not meant to be one.

#[cfg(test)]
#[path = "cluster_test.rs"]
mod cluster_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MIN_CLUSTER_SIZE, SIMILARITY_THRESHOLD};
use crate::doc::{Category, Note, NoteId};
use crate::geometry::{Point, centroid};
use crate::similarity::{TextFeatures, feature_similarity};

/// A group of similar notes within one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Sequential id, unique across all categories of one grouping pass.
    pub id: usize,
    pub category: Category,
    /// Member ids in collection order. Never fewer than two.
    pub note_ids: Vec<NoteId>,
    /// Centroid of member positions when the cluster was formed.
    pub center: Point,
}

impl Cluster {
    #[must_use]
    pub fn contains(&self, id: &NoteId) -> bool {
        self.note_ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.note_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.note_ids.is_empty()
    }
}

/// Pairwise similarity matrix over `notes`, in input order.
#[must_use]
pub fn similarity_matrix(notes: &[&Note]) -> Vec<Vec<f64>> {
    let features: Vec<TextFeatures> = notes.iter().map(|n| TextFeatures::extract(&n.text)).collect();
    let n = features.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let score = feature_similarity(&features[i], &features[j]);
            matrix[i][j] = score;
            matrix[j][i] = score;
        }
    }
    matrix
}

/// Cluster the notes of a single category. Ids start at `first_id`.
///
/// Notes with blank text do not participate. Fewer than two participants
/// yields no clusters.
#[must_use]
pub fn cluster_category(notes: &[&Note], first_id: usize) -> Vec<Cluster> {
    let participants: Vec<&Note> = notes.iter().copied().filter(|n| n.has_text()).collect();
    if participants.len() < MIN_CLUSTER_SIZE {
        return Vec::new();
    }

    let matrix = similarity_matrix(&participants);
    let mut assigned = vec![false; participants.len()];
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for seed in 0..participants.len() {
        if assigned[seed] {
            continue;
        }
        let mut candidate = vec![seed];
        for other in 0..participants.len() {
            if other != seed && !assigned[other] && matrix[seed][other] >= SIMILARITY_THRESHOLD {
                candidate.push(other);
            }
        }
        if candidate.len() >= MIN_CLUSTER_SIZE {
            for &member in &candidate {
                assigned[member] = true;
            }
            groups.push(candidate);
        }
    }

    let leftovers: Vec<usize> = (0..participants.len()).filter(|&i| !assigned[i]).collect();
    if leftovers.len() >= MIN_CLUSTER_SIZE {
        groups.push(leftovers);
    }

    groups
        .into_iter()
        .enumerate()
        .filter_map(|(offset, mut members)| {
            members.sort_unstable();
            let positions: Vec<Point> = members.iter().map(|&i| participants[i].position).collect();
            let category = participants[members[0]].category;
            Some(Cluster {
                id: first_id + offset,
                category,
                note_ids: members.iter().map(|&i| participants[i].id).collect(),
                center: centroid(&positions)?,
            })
        })
        .collect()
}

/// Cluster every category independently, stop/start/continue in order, with
/// ids assigned sequentially across categories.
#[must_use]
pub fn cluster_all(notes: &[Note]) -> Vec<Cluster> {
    let mut clusters = Vec::new();
    for category in Category::ALL {
        let in_category: Vec<&Note> = notes.iter().filter(|n| n.category == category).collect();
        let found = cluster_category(&in_category, clusters.len());
        tracing::debug!(?category, notes = in_category.len(), clusters = found.len(), "category clustered");
        clusters.extend(found);
    }
    clusters
}
