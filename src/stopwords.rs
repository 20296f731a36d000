//! Stopword sets used to filter term-frequency scoring.
//!
//! A [`Stopwords`] value is built once and handed to the summarizer. The
//! built-in English list is the one shipped with NLTK's corpus. When a list
//! cannot be loaded, [`Stopwords::unavailable`] gives a degraded value that
//! makes the summarizer fall back to truncation instead of failing.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::Result;

/// NLTK English stopword list.
pub const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

static DEFAULT_ENGLISH: LazyLock<Stopwords> = LazyLock::new(|| Stopwords::from_list(ENGLISH));

/// An immutable set of lowercase stopwords, or the degraded "unavailable" marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stopwords {
    words: Option<HashSet<String>>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::english()
    }
}

impl Stopwords {
    /// The built-in English set.
    #[must_use]
    pub fn english() -> Self {
        DEFAULT_ENGLISH.clone()
    }

    /// Builds a set from a word list. Words are lowercased.
    #[must_use]
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: Some(words.iter().map(|w| w.trim().to_lowercase()).collect()),
        }
    }

    /// Loads a newline-delimited list. Blank lines and `#` comments are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Stopwords`] if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Ok(Self { words: Some(words) })
    }

    /// Loads a list from `path`, degrading to [`Stopwords::unavailable`] on failure.
    #[must_use]
    pub fn from_file_or_unavailable(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::from_file(path).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), "Could not load stopwords: {err}");
            Self::unavailable()
        })
    }

    /// Degraded value used when no stopword data could be loaded.
    ///
    /// Summaries built with it always take the truncation fallback.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { words: None }
    }

    /// Whether stopword data was loaded.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.words.is_some()
    }

    /// Checks membership of an already-lowercased word.
    ///
    /// Always `false` for the unavailable set.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.as_ref().is_some_and(|words| words.contains(word))
    }

    /// Number of stopwords (zero when unavailable).
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.as_ref().map_or(0, HashSet::len)
    }

    /// Whether the set holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
