//! Benchmarks for similarity building and polarity scoring
//!
//! Run with: cargo bench --package nlp

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nlp::{SentimentAnalyzer, SimilarityMatrix};

const WORDS: &[&str] = &[
    "family", "crime", "love", "war", "space", "robot", "heist", "revenge", "journey", "prison",
    "detective", "town", "secret", "dream", "ghost", "king", "island", "music", "school", "city",
];

/// Synthetic catalog documents, roughly the size of an IMDB top-1000 export
fn make_documents(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let overview: Vec<&str> = (0..25).map(|k| WORDS[(i * 7 + k * 3) % WORDS.len()]).collect();
            format!("{} Drama, {}", overview.join(" "), WORDS[i % WORDS.len()])
        })
        .collect()
}

fn bench_similarity_build(c: &mut Criterion) {
    let documents = make_documents(1000);

    c.bench_function("similarity_build_1000", |b| {
        b.iter(|| {
            let matrix = SimilarityMatrix::build(black_box(&documents)).unwrap();
            black_box(matrix)
        })
    });
}

fn bench_polarity(c: &mut Criterion) {
    let analyzer = SentimentAnalyzer::new();
    let overview = "A very brave young detective uncovers a cruel secret \
                    that threatens the happy little town she loves.";

    c.bench_function("polarity_overview", |b| {
        b.iter(|| black_box(analyzer.polarity(black_box(overview))))
    });
}

criterion_group!(benches, bench_similarity_build, bench_polarity);
criterion_main!(benches);
