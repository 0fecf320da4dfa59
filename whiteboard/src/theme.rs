//! Theme naming: a label and a pastel colour for every cluster.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cluster::Cluster;
use crate::consts::{THEME_LIGHTNESS, THEME_SATURATION};
use crate::doc::{Category, NoteId};

/// Candidate names per category, cycled by a cluster's ordinal within its
/// category.
pub const THEME_NAMES: [[&str; 8]; 3] = [
    [
        "Process Bottlenecks",
        "Communication Gaps",
        "Technical Debt",
        "Meeting Overload",
        "Unclear Priorities",
        "Context Switching",
        "Manual Toil",
        "Scope Creep",
    ],
    [
        "New Practices",
        "Team Collaboration",
        "Automation Opportunities",
        "Knowledge Sharing",
        "Quality Improvements",
        "Planning Rituals",
        "Feedback Loops",
        "Learning & Growth",
    ],
    [
        "Working Well",
        "Team Strengths",
        "Effective Practices",
        "Good Communication",
        "Strong Delivery",
        "Positive Culture",
        "Reliable Processes",
        "Wins to Keep",
    ],
];

/// Label and colour for one cluster. Created and discarded with its cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Same as the owning cluster's id.
    pub id: usize,
    pub name: String,
    pub category: Category,
    pub note_ids: Vec<NoteId>,
    /// `#rrggbb` pastel.
    pub color: String,
}

/// Name for the `ordinal`-th cluster of `category`. Names repeat past eight.
#[must_use]
pub fn theme_name(category: Category, ordinal: usize) -> &'static str {
    let names = &THEME_NAMES[category.index()];
    names[ordinal % names.len()]
}

/// One theme per cluster. Colours are drawn fresh on every call.
pub fn name_themes<R: Rng + ?Sized>(clusters: &[Cluster], rng: &mut R) -> Vec<Theme> {
    let mut ordinals = [0usize; 3];
    clusters
        .iter()
        .map(|cluster| {
            let slot = &mut ordinals[cluster.category.index()];
            let name = theme_name(cluster.category, *slot);
            *slot += 1;
            Theme {
                id: cluster.id,
                name: name.to_string(),
                category: cluster.category,
                note_ids: cluster.note_ids.clone(),
                color: random_pastel(rng),
            }
        })
        .collect()
}

/// Random hue at fixed saturation and lightness, as `#rrggbb`.
pub fn random_pastel<R: Rng + ?Sized>(rng: &mut R) -> String {
    let hue = rng.random_range(0.0..360.0);
    let (r, g, b) = hsl_to_rgb(hue, THEME_SATURATION / 100.0, THEME_LIGHTNESS / 100.0);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Convert HSL (`h` in degrees, `s`/`l` in `[0, 1]`) to 8-bit RGB.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp {
        v if v < 1.0 => (c, x, 0.0),
        v if v < 2.0 => (x, c, 0.0),
        v if v < 3.0 => (0.0, c, x),
        v if v < 4.0 => (0.0, x, c),
        v if v < 5.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r1), channel(g1), channel(b1))
}
