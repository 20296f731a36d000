//! Text cleaning and sentence segmentation.
//!
//! [`clean`] reduces raw article text to word characters, whitespace and
//! sentence-terminal punctuation, with whitespace collapsed to single spaces.
//! [`segment`] splits cleaned text after `.`, `!` or `?` when followed by
//! whitespace.

use crate::patterns::{DISALLOWED_CHARS, WHITESPACE_RUN};

/// Characters that may end a sentence.
const TERMINALS: [char; 3] = ['.', '!', '?'];

/// Cleans raw text for summarization.
///
/// Every character that is not a word character, whitespace, `.`, `!` or `?`
/// is removed, then whitespace runs are collapsed to a single space and the
/// result is trimmed. Removal runs first so that a dropped character between
/// two spaces cannot leave a double space behind, which keeps the function
/// idempotent.
///
/// # Examples
///
/// ```
/// use news_summarizer::normalize::clean;
///
/// assert_eq!(clean("  Hello,\n\tworld -- again!  "), "Hello world again!");
/// assert_eq!(clean(""), "");
/// ```
#[must_use]
pub fn clean(text: &str) -> String {
    let stripped = DISALLOWED_CHARS.replace_all(text, "");
    WHITESPACE_RUN.replace_all(stripped.trim(), " ").into_owned()
}

/// Cleans `text` and splits it into sentences.
///
/// Sentences keep their terminal punctuation and appear in original order.
/// Empty pieces are dropped.
///
/// # Examples
///
/// ```
/// use news_summarizer::normalize::segment;
///
/// let sentences = segment("Wait... what?! Yes. ");
/// assert_eq!(sentences, vec!["Wait...", "what?!", "Yes."]);
/// ```
#[must_use]
pub fn segment(text: &str) -> Vec<String> {
    sentences(&clean(text)).map(str::to_string).collect()
}

/// Returns a lazy iterator over the sentences of already-cleaned text.
///
/// No cleaning is applied; pass the output of [`clean`] to get the same
/// sentences as [`segment`].
#[must_use]
pub fn sentences(clean_text: &str) -> Sentences<'_> {
    Sentences { rest: clean_text }
}

/// Single-pass iterator over sentences, created by [`sentences`].
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while !self.rest.is_empty() {
            let (piece, rest) = split_at_boundary(self.rest);
            self.rest = rest;
            let piece = piece.trim();
            if !piece.is_empty() {
                return Some(piece);
            }
        }
        None
    }
}

/// Splits at the first whitespace run that directly follows a terminal.
///
/// The whitespace run is consumed. Without a boundary the whole input is the
/// piece and the remainder is empty.
fn split_at_boundary(text: &str) -> (&str, &str) {
    let mut after_terminal = false;
    for (idx, ch) in text.char_indices() {
        if after_terminal && ch.is_whitespace() {
            return (&text[..idx], text[idx..].trim_start());
        }
        after_terminal = TERMINALS.contains(&ch);
    }
    (text, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_collapses_whitespace() {
        assert_eq!(clean("one\n\ntwo\t three   four"), "one two three four");
    }

    #[test]
    fn clean_removes_punctuation_noise() {
        assert_eq!(clean("\"Quoted,\" she said; (really)?"), "Quoted she said really?");
    }

    #[test]
    fn clean_keeps_underscores_and_digits() {
        assert_eq!(clean("snake_case 42%"), "snake_case 42");
    }

    #[test]
    fn clean_does_not_leave_double_spaces() {
        assert_eq!(clean("left - right"), "left right");
        assert_eq!(clean("- leading"), "leading");
    }

    #[test]
    fn clean_is_idempotent() {
        let samples = [
            "",
            "   ",
            "a - b",
            "The cat sat.  The cat ran fast!",
            "Mixed\u{00A0}spaces, “quotes” and émigré café.",
        ];
        for sample in samples {
            let once = clean(sample);
            assert_eq!(clean(&once), once, "sample: {sample:?}");
        }
    }

    #[test]
    fn clean_keeps_unicode_letters() {
        assert_eq!(clean("Café — naïve"), "Café naïve");
    }

    #[test]
    fn segment_splits_after_terminals() {
        assert_eq!(
            segment("The cat sat. The cat ran fast! Did dogs bark? Yes."),
            vec!["The cat sat.", "The cat ran fast!", "Did dogs bark?", "Yes."]
        );
    }

    #[test]
    fn segment_requires_whitespace_after_terminal() {
        assert_eq!(segment("Version 1.2 shipped.Today"), vec!["Version 1.2 shipped.Today"]);
        assert_eq!(segment("Really?! Yes"), vec!["Really?!", "Yes"]);
    }

    #[test]
    fn segment_keeps_trailing_piece_without_terminal() {
        assert_eq!(segment("First. second part"), vec!["First.", "second part"]);
    }

    #[test]
    fn segment_of_empty_text_is_empty() {
        assert!(segment("").is_empty());
        assert!(segment(" \n\t ").is_empty());
        assert!(segment("---").is_empty());
    }

    #[test]
    fn segment_emits_lone_punctuation_pieces() {
        assert_eq!(segment("a. . b"), vec!["a.", ".", "b"]);
    }

    #[test]
    fn sentences_iterator_matches_segment() {
        let text = "One.  Two!\nThree? Four";
        let cleaned = clean(text);
        let lazy: Vec<&str> = sentences(&cleaned).collect();
        assert_eq!(lazy, segment(text));
    }

    #[test]
    fn split_at_boundary_consumes_whitespace_run() {
        assert_eq!(split_at_boundary("a.   b. c"), ("a.", "b. c"));
        assert_eq!(split_at_boundary("no boundary"), ("no boundary", ""));
    }
}
