//! Built-in retrospective notes for the `demo` command.

#[cfg(test)]
#[path = "sample_test.rs"]
mod sample_test;

use serde::Deserialize;
use whiteboard::doc::Category;

/// A note to seed: category plus text. Also the row shape of `group --input`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NoteInput {
    pub category: Category,
    pub text: String,
}

impl NoteInput {
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        Self { category, text: text.into() }
    }
}

const SAMPLE: &[(Category, &str)] = &[
    (Category::Stop, "Standup meetings keep running over time"),
    (Category::Stop, "Long standup meetings with no agenda"),
    (Category::Stop, "Merging without code review"),
    (Category::Stop, "Skipping code review on hotfixes"),
    (Category::Stop, "Late scope changes mid sprint"),
    (Category::Start, "Write tests before fixing bugs"),
    (Category::Start, "Add integration tests to the pipeline"),
    (Category::Start, "Share demo recordings with the wider team"),
    (Category::Start, "Pair programming on complex tickets"),
    (Category::Continue, "Pair programming sessions on Fridays"),
    (Category::Continue, "Weekly planning with clear priorities"),
    (Category::Continue, "Sprint planning estimates are accurate"),
    (Category::Continue, "Fast feedback on pull requests"),
];

#[must_use]
pub fn sample_notes() -> Vec<NoteInput> {
    SAMPLE.iter().map(|&(category, text)| NoteInput::new(category, text)).collect()
}

/// Parse a JSON array of `{category, text}` rows.
pub fn parse_notes(raw: &str) -> Result<Vec<NoteInput>, serde_json::Error> {
    serde_json::from_str(raw)
}
