//! Performance benchmarks for news-summarizer.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use news_summarizer::normalize::{clean, segment};
use news_summarizer::{Stopwords, Summarizer};

const PARAGRAPH: &str = "Officials confirmed on Tuesday that the new bridge, which cost \
    $1.2bn, will open next spring. Engineers said the final inspection went well! \
    Commuters have waited nearly a decade for the crossing; many doubted it would \
    ever be finished. Will tolls apply? The council has not decided yet. ";

fn article(paragraphs: usize) -> String {
    PARAGRAPH.repeat(paragraphs)
}

fn bench_normalize(c: &mut Criterion) {
    let text = article(50);
    let mut group = c.benchmark_group("normalize");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("clean", |b| b.iter(|| clean(black_box(&text))));
    group.bench_function("segment", |b| b.iter(|| segment(black_box(&text))));
    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let summarizer = Summarizer::new(Stopwords::english());
    let mut group = c.benchmark_group("summarize");

    for paragraphs in [5, 50, 500] {
        let text = article(paragraphs);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &text, |b, text| {
            b.iter(|| summarizer.summarize(black_box(text), 3));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_summarize);
criterion_main!(benches);
