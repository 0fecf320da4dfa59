//! Heuristic text similarity between two notes.
//!
//! The score blends three signals: shared keywords, overlapping three-word
//! phrases, and co-membership in a fixed set of retrospective topics. It is
//! symmetric and bounded to `[0, 1]`, and deliberately not transitive.

#[cfg(test)]
#[path = "similarity_test.rs"]
mod similarity_test;

use std::collections::BTreeSet;

use crate::consts::{KEYWORD_WEIGHT, MIN_KEYWORD_CHARS, PHRASE_WEIGHT, PHRASE_WORDS};
use crate::doc::Note;

/// A named vocabulary of stems. A text belongs to the topic when it contains
/// any of the stems.
#[derive(Debug, Clone, Copy)]
pub struct Topic {
    pub name: &'static str,
    pub stems: &'static [&'static str],
}

/// The six fixed retrospective topics.
pub const TOPICS: [Topic; 6] = [
    Topic {
        name: "communication",
        stems: &["communicat", "meeting", "standup", "feedback", "discuss", "sync", "slack", "email", "update"],
    },
    Topic {
        name: "process",
        stems: &["process", "workflow", "standup", "retro", "ceremon", "procedure", "approval", "bottleneck"],
    },
    Topic {
        name: "technical",
        stems: &["code", "bug", "deploy", "build", "technical", "architecture", "refactor", "debt", "pipeline"],
    },
    Topic {
        name: "collaboration",
        stems: &["team", "collaborat", "pair", "together", "help", "support", "share", "cross"],
    },
    Topic {
        name: "quality",
        stems: &["quality", "test", "review", "defect", "standard", "coverage", "reliab"],
    },
    Topic {
        name: "planning",
        stems: &["plan", "estimat", "priorit", "backlog", "roadmap", "scope", "deadline", "goal", "sprint"],
    },
];

/// Pre-tokenised view of one text, so pairwise scoring does not re-split.
#[derive(Debug, Clone, Default)]
pub struct TextFeatures {
    keywords: BTreeSet<String>,
    phrases: Vec<String>,
    topics: BTreeSet<&'static str>,
    empty: bool,
}

impl TextFeatures {
    #[must_use]
    pub fn extract(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let words = tokenize(&lowered);
        if words.is_empty() {
            return Self { empty: true, ..Self::default() };
        }

        let keywords = words
            .iter()
            .filter(|w| w.chars().count() > MIN_KEYWORD_CHARS)
            .cloned()
            .collect();
        let phrases = words.windows(PHRASE_WORDS).map(|w| w.join(" ")).collect();
        let topics = TOPICS
            .iter()
            .filter(|t| t.stems.iter().any(|stem| lowered.contains(stem)))
            .map(|t| t.name)
            .collect();

        Self { keywords, phrases, topics, empty: false }
    }

    /// Number of distinct keywords.
    #[must_use]
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    #[must_use]
    pub fn topics(&self) -> &BTreeSet<&'static str> {
        &self.topics
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.empty
    }
}

/// Lowercased words with surrounding punctuation stripped.
fn tokenize(lowered: &str) -> Vec<String> {
    lowered
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Similarity of two notes in `[0, 1]`.
#[must_use]
pub fn similarity(a: &Note, b: &Note) -> f64 {
    text_similarity(&a.text, &b.text)
}

/// Similarity of two raw texts in `[0, 1]`. Zero if either is empty.
#[must_use]
pub fn text_similarity(a: &str, b: &str) -> f64 {
    feature_similarity(&TextFeatures::extract(a), &TextFeatures::extract(b))
}

/// Score two pre-extracted feature sets.
///
/// `min(1, 2 * matches / (keywords_a + keywords_b))`, where keyword matches
/// weigh 1 and phrase matches and shared topics weigh 2.
#[must_use]
pub fn feature_similarity(a: &TextFeatures, b: &TextFeatures) -> f64 {
    if a.empty || b.empty {
        return 0.0;
    }
    let keyword_total = a.keyword_count() + b.keyword_count();
    if keyword_total == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let keyword_matches = a.keywords.intersection(&b.keywords).count() as f64;

    let phrase_matches = a
        .phrases
        .iter()
        .map(|pa| {
            b.phrases
                .iter()
                .filter(|pb| pa.contains(pb.as_str()) || pb.contains(pa.as_str()))
                .count()
        })
        .sum::<usize>();

    #[allow(clippy::cast_precision_loss)]
    let shared_topics = a.topics.intersection(&b.topics).count() as f64;

    #[allow(clippy::cast_precision_loss)]
    let matches =
        keyword_matches * KEYWORD_WEIGHT + phrase_matches as f64 * PHRASE_WEIGHT + shared_topics * PHRASE_WEIGHT;

    #[allow(clippy::cast_precision_loss)]
    let score = (matches * 2.0) / keyword_total as f64;
    score.min(1.0)
}
