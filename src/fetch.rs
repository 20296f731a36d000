//! Blocking HTTP fetching of article pages.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, USER_AGENT};
use url::Url;

use crate::encoding::decode_html;
use crate::error::{Error, Result};
use crate::options::FetchOptions;

/// Parses `raw` and accepts only absolute http(s) URLs with a host.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] otherwise.
pub fn parse_article_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(Error::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

/// HTTP client configured for fetching news pages.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    options: FetchOptions,
}

impl Fetcher {
    /// Builds a client with the given timeout and headers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the TLS backend cannot be initialized.
    pub fn new(options: FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;
        Ok(Self { client, options })
    }

    /// Options in use.
    #[must_use]
    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Fetches `url` and returns the page decoded to UTF-8.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUrl`] for non-http(s) input
    /// - [`Error::Http`] on transport failure or timeout
    /// - [`Error::HttpStatus`] on a non-success status
    pub fn fetch_html(&self, url: &str) -> Result<String> {
        let url = parse_article_url(url)?;
        tracing::debug!(url = %url, "fetching article");

        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, &self.options.user_agent)
            .header(ACCEPT, &self.options.accept)
            .header(ACCEPT_LANGUAGE, &self.options.accept_language)
            .send()
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().map_err(|e| Error::Http(e.to_string()))?;
        tracing::debug!(bytes = body.len(), "article downloaded");

        Ok(decode_html(&body, content_type.as_deref()))
    }
}

/// Fetches `url` with a one-off client.
///
/// # Errors
///
/// See [`Fetcher::fetch_html`].
pub fn fetch_html(url: &str, options: &FetchOptions) -> Result<String> {
    Fetcher::new(options.clone())?.fetch_html(url)
}
