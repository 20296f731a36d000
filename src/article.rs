//! Headline and body extraction from news pages.
//!
//! Selection is rule based: a short list of headline selectors and a list of
//! body-paragraph selectors, tried in order. The rules cover BBC News layouts
//! and degrade to generic `h1` / `article p` markup.

use dom_query::{Document, Selection};

use crate::error::{Error, Result};
use crate::result::Article;

/// Headline selectors, most specific first.
pub const TITLE_SELECTORS: &[&str] = &["h1#main-heading", "h1.article-headline", "h1"];

/// Body paragraph selectors. The first one matching any element is used.
pub const PARAGRAPH_SELECTORS: &[&str] = &[
    "article p",
    ".article__body-content p",
    r#"[data-component="text-block"]"#,
    ".story-body p",
];

/// Extracts the headline and body text of a news page.
///
/// # Errors
///
/// Returns [`Error::NoContent`] when no headline element exists, no
/// paragraph selector matches, or every matched paragraph is blank.
///
/// # Example
///
/// ```rust
/// use news_summarizer::article::extract_article;
///
/// let html = r#"<html><body>
///     <h1 id="main-heading">Markets rally</h1>
///     <article><p>Shares rose.</p><p> </p><p>Bonds fell.</p></article>
/// </body></html>"#;
/// let article = extract_article(html)?;
/// assert_eq!(article.title, "Markets rally");
/// assert_eq!(article.content, "Shares rose. Bonds fell.");
/// # Ok::<(), news_summarizer::Error>(())
/// ```
pub fn extract_article(html: &str) -> Result<Article> {
    let doc = Document::from(html);

    let title = find_title(&doc);
    let paragraphs = find_paragraphs(&doc);
    tracing::debug!(
        title_found = title.is_some(),
        paragraphs = paragraphs.len(),
        "article selectors evaluated"
    );

    let Some(title) = title else {
        tracing::info!("Could not find article headline using known selectors");
        return Err(Error::NoContent);
    };
    if paragraphs.is_empty() {
        tracing::info!("Could not find article paragraphs using known selectors");
        return Err(Error::NoContent);
    }

    let content = paragraphs
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if content.is_empty() {
        tracing::info!("Extracted article content is empty");
        return Err(Error::NoContent);
    }

    Ok(Article { title, content })
}

/// Trimmed text of the first headline element, if any exists.
fn find_title(doc: &Document) -> Option<String> {
    TITLE_SELECTORS.iter().find_map(|selector| {
        doc.select(selector)
            .nodes()
            .first()
            .map(|node| Selection::from(*node).text().trim().to_string())
    })
}

/// Raw texts of the paragraphs matched by the first productive selector.
fn find_paragraphs(doc: &Document) -> Vec<String> {
    for selector in PARAGRAPH_SELECTORS {
        let matched = doc.select(selector);
        let nodes = matched.nodes();
        if !nodes.is_empty() {
            return nodes
                .iter()
                .map(|node| Selection::from(*node).text().to_string())
                .collect();
        }
    }
    Vec::new()
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn prefers_main_heading_over_other_h1() {
        let html = r#"<body><h1>Site name</h1><h1 id="main-heading"> Real headline </h1>
            <article><p>Body.</p></article></body>"#;
        let article = extract_article(html).expect("article");
        assert_eq!(article.title, "Real headline");
    }

    #[test]
    fn falls_back_to_article_headline_class_then_any_h1() {
        let html = r#"<body><h1>Generic</h1><h1 class="article-headline">Classed</h1>
            <article><p>Body.</p></article></body>"#;
        assert_eq!(extract_article(html).expect("article").title, "Classed");

        let html = r#"<body><h1>Generic</h1><article><p>Body.</p></article></body>"#;
        assert_eq!(extract_article(html).expect("article").title, "Generic");
    }

    #[test]
    fn uses_first_matching_paragraph_selector() {
        let html = r#"<body><h1>T</h1>
            <div data-component="text-block">Block one.</div>
            <div data-component="text-block">Block two.</div>
            <div class="story-body"><p>Story text.</p></div></body>"#;
        let article = extract_article(html).expect("article");
        assert_eq!(article.content, "Block one. Block two.");
    }

    #[test]
    fn includes_nested_inline_text() {
        let html = r#"<body><h1>T</h1><article><p>A <b>bold</b> move.</p></article></body>"#;
        assert_eq!(extract_article(html).expect("article").content, "A bold move.");
    }

    #[test]
    fn missing_headline_is_no_content() {
        let html = "<body><article><p>Body.</p></article></body>";
        assert!(matches!(extract_article(html), Err(Error::NoContent)));
    }

    #[test]
    fn missing_paragraphs_is_no_content() {
        let html = "<body><h1>T</h1><div>Loose text.</div></body>";
        assert!(matches!(extract_article(html), Err(Error::NoContent)));
    }

    #[test]
    fn blank_paragraphs_are_no_content() {
        let html = "<body><h1>T</h1><article><p> </p><p>\n</p></article></body>";
        assert!(matches!(extract_article(html), Err(Error::NoContent)));
    }

    #[test]
    fn empty_headline_text_is_kept() {
        let html = "<body><h1> </h1><article><p>Body.</p></article></body>";
        let article = extract_article(html).expect("article");
        assert_eq!(article.title, "");
        assert_eq!(article.content, "Body.");
    }
}
