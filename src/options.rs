//! Configuration options for summarization and fetching.
//!
//! Both structs have public fields and a `Default` impl so callers can use
//! struct-update syntax to override only what they need.

use std::time::Duration;

/// Default number of sentences in a summary.
pub const DEFAULT_SENTENCE_COUNT: usize = 3;

/// Options controlling summary size.
///
/// # Example
///
/// ```rust
/// use news_summarizer::Options;
///
/// let options = Options {
///     sentence_count: 5,
///     ..Options::default()
/// };
/// assert_eq!(options.sentence_count, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Number of sentences to select.
    ///
    /// Texts with this many sentences or fewer are returned cleaned but
    /// otherwise unchanged. Zero selects nothing.
    ///
    /// Default: `3`
    pub sentence_count: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            sentence_count: DEFAULT_SENTENCE_COUNT,
        }
    }
}

/// Options for fetching article pages over HTTP.
///
/// The header defaults mimic a desktop browser; some news sites refuse
/// requests without them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// `User-Agent` header.
    pub user_agent: String,

    /// `Accept` header.
    pub accept: String,

    /// `Accept-Language` header.
    pub accept_language: String,

    /// Whole-request timeout.
    ///
    /// Default: 10 seconds
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
            accept: "text/html,application/xhtml+xml,application/xml;q=0.9".to_string(),
            accept_language: "en-US,en;q=0.9".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();
        assert_eq!(opts.sentence_count, 3);
    }

    #[test]
    fn test_default_fetch_options() {
        let opts = FetchOptions::default();
        assert!(opts.user_agent.starts_with("Mozilla/5.0"));
        assert!(opts.accept.starts_with("text/html"));
        assert_eq!(opts.accept_language, "en-US,en;q=0.9");
        assert_eq!(opts.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_struct_update_overrides_selected_fields_only() {
        let opts = FetchOptions {
            timeout: Duration::from_secs(2),
            ..FetchOptions::default()
        };
        assert_eq!(opts.timeout, Duration::from_secs(2));
        assert_eq!(opts.accept_language, "en-US,en;q=0.9");
    }
}
