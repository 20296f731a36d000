//! Word-frequency extractive summarizer.
//!
//! Sentences are scored by summing the corpus frequency of every non-stopword,
//! fully alphanumeric word they contain, and the `n` best are returned in score
//! order. Two paths exist:
//!
//! 1. [`Summarizer::try_scored_summary`] ranks sentences or reports a
//!    [`FailureReason`].
//! 2. On failure, [`Summarizer::summarize`] falls back to the first `n`
//!    sentences in article order.
//!
//! Texts with no more than `n` sentences skip both and are returned cleaned.
//!
//! ## Tie-breaking
//!
//! Sentences with equal scores keep the order in which they entered the score
//! table. Entries are inserted while walking sentences in article order, so
//! ties resolve to the sentence that appears first. Repeated identical
//! sentences share one entry, at the position of their first occurrence, and
//! their scores add up.

use std::collections::HashMap;

use crate::normalize::{clean, sentences};
use crate::result::{FailureReason, Summary, SummaryStrategy};
use crate::stopwords::Stopwords;

/// Occurrence counts of scorable words over a whole cleaned text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    counts: HashMap<String, usize>,
}

impl WordFrequencies {
    /// Counts lowercase whitespace-delimited tokens of `clean_text` that are
    /// entirely alphanumeric and not stopwords.
    #[must_use]
    pub fn from_text(clean_text: &str, stopwords: &Stopwords) -> Self {
        let mut counts = HashMap::new();
        for word in clean_text.to_lowercase().split_whitespace() {
            if is_alphanumeric(word) && !stopwords.contains(word) {
                *counts.entry(word.to_string()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Count for `word`, if it is scorable.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct scorable words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the text had no scorable words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Insertion-ordered sentence scores.
///
/// Only sentences with at least one scorable word have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceScores<'a> {
    entries: Vec<(&'a str, usize)>,
    index: HashMap<&'a str, usize>,
}

impl<'a> SentenceScores<'a> {
    /// Scores each sentence against `frequencies`, in the given order.
    #[must_use]
    pub fn from_sentences<I>(sentences: I, frequencies: &WordFrequencies) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut scores = Self::default();
        for sentence in sentences {
            for word in sentence.to_lowercase().split_whitespace() {
                if let Some(count) = frequencies.get(word) {
                    scores.add(sentence, count);
                }
            }
        }
        scores
    }

    /// Adds `score` to `sentence`, creating its entry at the end if new.
    pub fn add(&mut self, sentence: &'a str, score: usize) {
        if let Some(&slot) = self.index.get(sentence) {
            self.entries[slot].1 += score;
        } else {
            self.index.insert(sentence, self.entries.len());
            self.entries.push((sentence, score));
        }
    }

    /// Score of `sentence`, or `None` if it has no scorable word.
    #[must_use]
    pub fn get(&self, sentence: &str) -> Option<usize> {
        self.index.get(sentence).map(|&slot| self.entries[slot].1)
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[(&'a str, usize)] {
        &self.entries
    }

    /// Number of scored sentences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no sentence was scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` highest-scoring sentences, best first.
    ///
    /// The sort is stable, so equal scores keep insertion order.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<&'a str> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(n).map(|(sentence, _)| sentence).collect()
    }
}

/// Frequency summarizer configured with a stopword set.
///
/// # Example
///
/// ```rust
/// use news_summarizer::{Stopwords, Summarizer};
///
/// let summarizer = Summarizer::new(Stopwords::english());
/// let summary = summarizer.summarize("The cat sat. The cat ran fast. Dogs bark loudly at night.", 1);
/// assert_eq!(summary.text, "The cat ran fast.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    stopwords: Stopwords,
}

impl Summarizer {
    /// Creates a summarizer using `stopwords`.
    #[must_use]
    pub fn new(stopwords: Stopwords) -> Self {
        Self { stopwords }
    }

    /// Stopwords in use.
    #[must_use]
    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Summarizes `text` into at most `n` sentences.
    ///
    /// Never fails: if the scored path cannot run, the first `n` sentences
    /// are returned in original order and the reason is recorded in
    /// [`Summary::failures`].
    #[must_use]
    pub fn summarize(&self, text: &str, n: usize) -> Summary {
        let clean_text = clean(text);
        let sentences: Vec<&str> = sentences(&clean_text).collect();
        let sentence_count = sentences.len();

        if sentence_count <= n {
            tracing::debug!(sentence_count, n, "text already short, returning cleaned text");
            return Summary {
                text: clean_text,
                strategy: SummaryStrategy::Shortcut,
                sentence_count,
                failures: Vec::new(),
            };
        }

        match self.try_scored_summary(&clean_text, &sentences, n) {
            Ok(selected) => {
                tracing::debug!(sentence_count, selected = selected.len(), "scored summary");
                Summary {
                    text: selected.join(" "),
                    strategy: SummaryStrategy::Scored,
                    sentence_count,
                    failures: Vec::new(),
                }
            }
            Err(reason) => {
                tracing::warn!("Scored summary failed, truncating: {reason}");
                Summary {
                    text: truncate(&sentences, n),
                    strategy: SummaryStrategy::Truncated,
                    sentence_count,
                    failures: vec![reason],
                }
            }
        }
    }

    /// Ranks `sentences` of `clean_text` and returns the `n` best, best first.
    ///
    /// # Errors
    ///
    /// - [`FailureReason::StopwordsUnavailable`] when the stopword set is the
    ///   degraded value.
    /// - [`FailureReason::NoScoredSentences`] when no sentence contains a
    ///   scorable word.
    pub fn try_scored_summary<'a>(
        &self,
        clean_text: &str,
        sentences: &[&'a str],
        n: usize,
    ) -> Result<Vec<&'a str>, FailureReason> {
        if !self.stopwords.is_available() {
            return Err(FailureReason::StopwordsUnavailable);
        }

        let frequencies = WordFrequencies::from_text(clean_text, &self.stopwords);
        let scores = SentenceScores::from_sentences(sentences.iter().copied(), &frequencies);
        if scores.is_empty() {
            return Err(FailureReason::NoScoredSentences);
        }

        Ok(scores.top(n))
    }
}

/// First `n` sentences joined by single spaces.
fn truncate(sentences: &[&str], n: usize) -> String {
    sentences.iter().take(n).copied().collect::<Vec<_>>().join(" ")
}

fn is_alphanumeric(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphanumeric)
}
