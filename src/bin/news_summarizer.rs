//! Interactive news summarizer.
//!
//! Usage: `news-summarizer [SENTENCES] [--stopwords FILE]`
//!
//! Prompts for article URLs until `quit` or end of input, printing the
//! headline and a summary of each article.

use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};

use news_summarizer::fetch::Fetcher;
use news_summarizer::{summarize_url, FetchOptions, Stopwords, Summarizer, DEFAULT_SENTENCE_COUNT};
use tracing_subscriber::EnvFilter;

struct Args {
    sentences: usize,
    stopwords: Option<String>,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = Args {
        sentences: DEFAULT_SENTENCE_COUNT,
        stopwords: None,
    };
    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--stopwords" {
            let path = iter.next().ok_or("--stopwords needs a file path")?;
            args.stopwords = Some(path);
        } else {
            args.sentences = arg
                .parse()
                .map_err(|e| format!("Invalid sentence count {arg:?}: {e}"))?;
        }
    }
    Ok(args)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = parse_args()?;
    let stopwords = match &args.stopwords {
        Some(path) => Stopwords::from_file_or_unavailable(path),
        None => Stopwords::english(),
    };
    let summarizer = Summarizer::new(stopwords);
    let fetcher = Fetcher::new(FetchOptions::default())?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "\nEnter the news article URL (or 'quit' to exit): ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let url = line.trim();
        if url.eq_ignore_ascii_case("quit") {
            break;
        }
        if url.is_empty() {
            continue;
        }

        writeln!(stdout, "\nFetching article...")?;
        let (article, summary) = match summarize_url(url, &fetcher, &summarizer, args.sentences) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(url, "{err}");
                writeln!(stdout, "Could not extract article content")?;
                continue;
            }
        };

        writeln!(stdout, "\nTitle: {}\n", article.title)?;
        writeln!(stdout, "Generating summary...")?;
        if summary.text.is_empty() {
            continue;
        }
        writeln!(stdout, "\nSummary:")?;
        writeln!(stdout, "{summary}")?;
    }

    Ok(())
}
