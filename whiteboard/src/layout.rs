//! Circular arrangement of a cluster's members around its center.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::f64::consts::TAU;

use rand::Rng;

use crate::cluster::Cluster;
use crate::consts::{CLUSTER_JITTER_RATIO, CLUSTER_RADIUS_PER_NOTE, MIN_CLUSTER_RADIUS, NOTE_HEIGHT, NOTE_WIDTH};
use crate::doc::NoteId;
use crate::geometry::{Point, Size};
use crate::section::Section;

/// Circle radius for a cluster of `members` notes.
#[must_use]
pub fn cluster_radius(members: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let scaled = members as f64 * CLUSTER_RADIUS_PER_NOTE;
    scaled.max(MIN_CLUSTER_RADIUS)
}

/// New positions for every member of `cluster`, evenly spaced on a circle
/// around the cluster center with a little per-note jitter, each clamped into
/// `section`'s content rectangle.
pub fn layout_cluster<R: Rng + ?Sized>(cluster: &Cluster, section: &Section, rng: &mut R) -> Vec<(NoteId, Point)> {
    let count = cluster.note_ids.len();
    if count == 0 {
        return Vec::new();
    }
    let radius = cluster_radius(count);
    let jitter = radius * CLUSTER_JITTER_RATIO;
    let content = section.content_rect();
    let note_size = Size::new(NOTE_WIDTH, NOTE_HEIGHT);

    cluster
        .note_ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            #[allow(clippy::cast_precision_loss)]
            let angle = TAU * i as f64 / count as f64;
            let raw = Point::new(
                cluster.center.x + radius * angle.cos() + rng.random_range(-jitter..=jitter),
                cluster.center.y + radius * angle.sin() + rng.random_range(-jitter..=jitter),
            );
            (*id, content.clamp_origin(raw, note_size))
        })
        .collect()
}
