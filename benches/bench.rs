//! Criterion benchmarks for ptstem.
//!
//! Covers the stages that dominate a text stemming call:
//! - Per-backend word stemming
//! - Full text stemming, sequential and sharded
//! - Whole-word rewriting with a large replacement map

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use ptstem::prelude::*;
use ptstem::rewrite::{ReplacementMap, TextRewriter};
use std::hint::black_box;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = vec![
        "gosto", "gostei", "gostou", "gostamos", "gato", "gatos", "gatinho", "casa", "casas",
        "casinha", "falar", "falando", "falaram", "ação", "ações", "coração", "corações",
        "rapidamente", "livro", "livros", "escrever", "escrevi", "escreveu", "menina",
        "meninas", "menino", "meninos", "cidade", "cidades", "trabalho", "trabalhar",
        "trabalhando",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100); // Variable length documents
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc_words.push(words[word_idx]);
        }

        documents.push(format!("{}.", doc_words.join(" ")));
    }

    documents
}

/// Benchmark word stemming per backend.
fn bench_stem_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("stem_words");

    let words: Vec<String> = generate_test_documents(10)
        .iter()
        .flat_map(|doc| doc.split_whitespace().map(|w| w.trim_end_matches('.').to_string()))
        .collect();
    let options = StemOptions::new().with_dictionary(Dictionary::from_pairs(
        words.iter().map(|w| (w.clone(), w.chars().take(4).collect::<String>())),
    ));

    group.throughput(Throughput::Elements(words.len() as u64));
    for algorithm in Algorithm::ALL {
        let config = StemConfig::new().with_algorithm(algorithm);
        group.bench_function(algorithm.as_str(), |b| {
            b.iter(|| {
                let result = stem_words(black_box(&words), &config, &options);
                black_box(result)
            })
        });
    }

    group.finish();
}

/// Benchmark full text stemming.
fn bench_stem_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("stem_text");
    group.sample_size(20);

    let texts = generate_test_documents(500);
    let config = StemConfig::default();
    let options = StemOptions::default();

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("sequential", |b| {
        b.iter(|| {
            let result = stem_text(black_box(&texts), &config, &options);
            black_box(result)
        })
    });

    group.bench_function("parallel_8_shards", |b| {
        b.iter(|| {
            let result = stem_text_parallel(black_box(&texts), &config, &options, 8);
            black_box(result)
        })
    });

    group.finish();
}

/// Benchmark rewriting with many keys.
fn bench_rewrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("rewrite");

    let texts = generate_test_documents(100);
    let mut map = ReplacementMap::new();
    for i in 0..5000 {
        map.insert(format!("palavra{i}"), format!("p{i}"));
    }
    for word in ["gosto", "gostei", "gatos", "casas", "ações"] {
        map.insert(word, "x");
    }
    let rewriter = TextRewriter::new(&map).unwrap();

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("rewrite_documents", |b| {
        b.iter(|| black_box(rewriter.rewrite_all(black_box(&texts))))
    });

    group.finish();
}

criterion_group!(benches, bench_stem_words, bench_stem_text, bench_rewrite);
criterion_main!(benches);
