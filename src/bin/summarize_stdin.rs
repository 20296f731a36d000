//! Reads article text from stdin and prints its summary as JSON.
//!
//! Usage: `summarize-stdin [SENTENCES]`

use std::io::{self, Read};

use news_summarizer::{summarize, DEFAULT_SENTENCE_COUNT};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let sentences = match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(n) => n,
            Err(e) => {
                eprintln!("Invalid sentence count {arg:?}: {e}");
                std::process::exit(2);
            }
        },
        None => DEFAULT_SENTENCE_COUNT,
    };

    let mut text = String::new();
    if io::stdin().read_to_string(&mut text).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let summary = summarize(&text, sentences);
    println!("{}", serde_json::to_string(&summary).unwrap_or_default());
}
