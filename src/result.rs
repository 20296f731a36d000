//! Result types for summarization and article extraction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which path produced a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStrategy {
    /// The text had no more sentences than requested and was returned cleaned.
    Shortcut,

    /// Sentences were ranked by word-frequency score.
    Scored,

    /// Scoring failed; the first sentences were returned in original order.
    Truncated,
}

/// Why the scored path could not produce a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// No stopword data was loaded.
    #[error("stopword data unavailable")]
    StopwordsUnavailable,

    /// No sentence contained a scorable word.
    #[error("no sentence contains a scorable word")]
    NoScoredSentences,
}

/// Output of a summarization call.
///
/// `text` is always defined; it is empty for empty input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences joined by single spaces.
    pub text: String,

    /// Path that produced `text`.
    pub strategy: SummaryStrategy,

    /// Number of sentences in the cleaned input.
    pub sentence_count: usize,

    /// Reasons the scored path was abandoned (only set for `Truncated`).
    pub failures: Vec<FailureReason>,
}

impl Summary {
    /// Consumes the summary, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Whether the truncation fallback produced this summary.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.strategy == SummaryStrategy::Truncated
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Title and body text extracted from a news page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline text.
    pub title: String,

    /// Paragraph texts joined by single spaces.
    pub content: String,
}
