#![allow(clippy::expect_used)]

use news_summarizer::normalize::{clean, segment};
use news_summarizer::{
    summarize, summarize_with_options, FailureReason, Options, Stopwords, Summarizer, SummaryStrategy,
};

const ARTICLE: &str = "
    Flood warnings were issued across the valley on Monday, as heavy rain continued.
    Residents near the river were told to move to higher ground.
    The river rose two metres overnight, and the flood barrier at Millford failed.
    Officials said the barrier had been inspected in March.
    Emergency crews spent the night pumping water from homes near the river, while the rain kept falling.
    Schools will stay closed on Tuesday.
";

#[test]
fn cat_example_selects_highest_scoring_sentence() {
    let summary = summarize("The cat sat. The cat ran fast. Dogs bark loudly at night.", 1);
    assert_eq!(summary.text, "The cat ran fast.");
    assert_eq!(summary.strategy, SummaryStrategy::Scored);
}

#[test]
fn empty_input_gives_empty_summary() {
    let summary = summarize("", 3);
    assert_eq!(summary.text, "");
    assert_eq!(summary.to_string(), "");
}

#[test]
fn exactly_n_sentences_returns_cleaned_text() {
    let text = "One — first!  Two, second.\n\nThree (third)?";
    assert_eq!(segment(text).len(), 3);
    let summary = summarize(text, 3);
    assert_eq!(summary.text, clean(text));
    assert_eq!(summary.strategy, SummaryStrategy::Shortcut);
}

#[test]
fn article_summary_uses_whole_cleaned_sentences() {
    let summary = summarize(ARTICLE, 3);
    assert_eq!(summary.strategy, SummaryStrategy::Scored);
    assert_eq!(summary.sentence_count, 6);

    let sentences = segment(ARTICLE);
    let selected: Vec<&str> = sentences
        .iter()
        .map(String::as_str)
        .filter(|s| summary.text.contains(s))
        .collect();
    assert_eq!(selected.len(), 3);
    assert_eq!(selected.iter().map(|s| s.len()).sum::<usize>() + 2, summary.text.len());
}

#[test]
fn article_summary_prefers_river_sentences() {
    let summary = summarize(ARTICLE, 1);
    assert_eq!(
        summary.text,
        "Emergency crews spent the night pumping water from homes near the river while the rain kept falling."
    );
}

#[test]
fn options_sentence_count_is_used() {
    let options = Options {
        sentence_count: 2,
        ..Options::default()
    };
    let summary = summarize_with_options(ARTICLE, &options);
    assert_eq!(segment(&summary.text).len(), 2);
}

#[test]
fn degraded_stopwords_truncate_in_article_order() {
    let summarizer = Summarizer::new(Stopwords::unavailable());
    let summary = summarizer.summarize(ARTICLE, 2);
    let sentences = segment(ARTICLE);
    assert_eq!(summary.text, format!("{} {}", sentences[0], sentences[1]));
    assert_eq!(summary.failures, vec![FailureReason::StopwordsUnavailable]);
}

#[test]
fn custom_stopwords_change_the_ranking() {
    let text = "Apples are red. Pears are green. Apples and pears are fruit. Grapes grow.";

    let default = summarize(text, 1);
    assert_eq!(default.text, "Apples and pears are fruit.");

    // trailing periods keep "red." and friends unscorable, leaving only "grapes"
    let custom = Summarizer::new(Stopwords::from_list(&["apples", "pears", "are", "and"]));
    assert_eq!(custom.summarize(text, 1).text, "Grapes grow.");
}

#[test]
fn summary_serializes_strategy_and_failures() {
    let summary = Summarizer::new(Stopwords::unavailable()).summarize(ARTICLE, 1);
    let json = serde_json::to_value(&summary).expect("serialize");
    assert_eq!(json["strategy"], "truncated");
    assert_eq!(json["failures"][0], "stopwords_unavailable");
    assert_eq!(json["sentence_count"], 6);
}
