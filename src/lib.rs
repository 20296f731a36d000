//! # news-summarizer
//!
//! Fetches a news article, extracts its headline and body, and produces an
//! extractive summary by picking the sentences with the highest word-frequency
//! scores.
//!
//! ## Quick Start
//!
//! ```rust
//! use news_summarizer::summarize;
//!
//! let text = "The cat sat. The cat ran fast. Dogs bark loudly at night.";
//! let summary = summarize(text, 1);
//! assert_eq!(summary.text, "The cat ran fast.");
//! ```
//!
//! ## How sentences are chosen
//!
//! - Text is cleaned to word characters, whitespace and `.!?`, then split
//!   into sentences after terminal punctuation followed by whitespace.
//! - Texts with at most `n` sentences are returned cleaned, unchanged.
//! - Otherwise every non-stopword alphanumeric word is counted over the whole
//!   text, each sentence scores the sum of its words' counts, and the `n`
//!   best sentences are joined best-first. Ties keep article order.
//! - If scoring is impossible (no stopword data, or no scorable word) the
//!   first `n` sentences are returned in article order instead.
//!
//! Summarization never fails; [`Summary::failures`] records why the fallback
//! was taken.

use std::sync::LazyLock;

mod error;
mod options;
mod patterns;
mod result;

/// Text cleaning and sentence segmentation.
pub mod normalize;

/// Stopword sets.
pub mod stopwords;

/// Word-frequency scoring and sentence selection.
pub mod summarizer;

/// Headline and body extraction from news HTML.
pub mod article;

/// Character encoding detection and decoding of fetched pages.
pub mod encoding;

/// HTTP fetching of article pages.
#[cfg(feature = "fetch")]
pub mod fetch;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{FetchOptions, Options, DEFAULT_SENTENCE_COUNT};
pub use result::{Article, FailureReason, Summary, SummaryStrategy};
pub use stopwords::Stopwords;
pub use summarizer::Summarizer;

static ENGLISH_SUMMARIZER: LazyLock<Summarizer> = LazyLock::new(Summarizer::default);

/// Summarizes `text` into at most `n` sentences using English stopwords.
///
/// # Example
///
/// ```rust
/// use news_summarizer::{summarize, SummaryStrategy};
///
/// let summary = summarize("", 3);
/// assert_eq!(summary.text, "");
/// assert_eq!(summary.strategy, SummaryStrategy::Shortcut);
/// ```
#[must_use]
pub fn summarize(text: &str, n: usize) -> Summary {
    ENGLISH_SUMMARIZER.summarize(text, n)
}

/// Summarizes `text` with the sentence count taken from `options`.
#[must_use]
pub fn summarize_with_options(text: &str, options: &Options) -> Summary {
    summarize(text, options.sentence_count)
}

/// Extracts the article in `html` and summarizes its body.
///
/// # Errors
///
/// Returns [`Error::NoContent`] if no article could be extracted.
pub fn summarize_html(html: &str, summarizer: &Summarizer, n: usize) -> Result<(Article, Summary)> {
    let article = article::extract_article(html)?;
    let summary = summarizer.summarize(&article.content, n);
    Ok((article, summary))
}

/// Fetches `url`, extracts the article and summarizes its body.
///
/// # Errors
///
/// Returns fetch errors ([`Error::InvalidUrl`], [`Error::Http`],
/// [`Error::HttpStatus`]) or [`Error::NoContent`].
#[cfg(feature = "fetch")]
pub fn summarize_url(
    url: &str,
    fetcher: &fetch::Fetcher,
    summarizer: &Summarizer,
    n: usize,
) -> Result<(Article, Summary)> {
    let html = fetcher.fetch_html(url)?;
    summarize_html(&html, summarizer, n)
}
