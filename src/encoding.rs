//! Decoding fetched page bytes to UTF-8.
//!
//! The charset is taken from the HTTP `Content-Type` header when present,
//! otherwise from a `<meta>` declaration near the top of the page, otherwise
//! UTF-8. Undecodable bytes become U+FFFD.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::{CHARSET_META, CONTENT_TYPE_CHARSET};

/// Bytes of the page examined for a `<meta>` charset.
const META_SNIFF_LEN: usize = 1024;

/// Picks the encoding for a page body.
#[must_use]
pub fn sniff_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    let from_header = content_type
        .and_then(|value| CONTENT_TYPE_CHARSET.captures(value))
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()));
    if let Some(encoding) = from_header {
        return encoding;
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(META_SNIFF_LEN)]);
    CHARSET_META
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decodes a page body to a UTF-8 string.
///
/// # Examples
///
/// ```
/// use news_summarizer::encoding::decode_html;
///
/// let body = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_html(body, None).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = sniff_encoding(body, content_type);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }
    let (decoded, _, had_errors) = encoding.decode(body);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "replaced undecodable bytes");
    }
    decoded.into_owned()
}
