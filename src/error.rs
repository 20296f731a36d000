//! Error types for news-summarizer.
//!
//! Summarization itself never fails; these errors come from the layers around
//! it (fetching, article extraction, loading custom stopword lists).

/// Error type for fetching, extraction and configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL could not be parsed or is not an http(s) URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The server answered with a non-success status code.
    #[error("HTTP status {status} for {url}")]
    HttpStatus {
        /// Numeric status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// No title or article body could be found in the page.
    #[error("No article content found")]
    NoContent,

    /// A stopword list could not be loaded.
    #[error("Stopword list unavailable: {0}")]
    Stopwords(#[from] std::io::Error),
}

/// Result type alias for news-summarizer operations.
pub type Result<T> = std::result::Result<T, Error>;
