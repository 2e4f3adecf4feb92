//! Criterion benchmarks for the Strigil preprocessing pipeline.
//!
//! Covers the two hot paths: single-text processing with the default
//! options, and batch processing over ingested rows.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use strigil::batch::ingest::{Ingestor, PlainTextIngestor};
use strigil::batch::runner;
use strigil::pipeline::{Pipeline, PreprocessingOptions};

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "normalization",
        "pipeline",
        "token",
        "stream",
        "filter",
        "running",
        "studies",
        "dogs",
        "the",
        "quick",
        "brown",
        "foxes",
        "jumped",
        "over",
        "lazy",
        "punctuation",
        "special",
        "characters",
        "batch",
        "rows",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 20 + (i % 30);
        let doc: Vec<&str> = (0..doc_length).map(|j| words[(i + j) % words.len()]).collect();
        documents.push(doc.join(" "));
    }
    documents
}

fn bench_single_text(c: &mut Criterion) {
    let pipeline = Pipeline::new();
    let options = PreprocessingOptions::default();
    let text = generate_test_documents(1).remove(0);

    let mut group = c.benchmark_group("pipeline");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("process_default_options", |b| {
        b.iter(|| pipeline.process(black_box(&text), black_box(&options)).unwrap())
    });
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let pipeline = Pipeline::new();
    let options = PreprocessingOptions::default();
    let file = generate_test_documents(500).join("\n");
    let bytes = file.as_bytes();

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(500));
    group.bench_function("run_parallel_500_rows", |b| {
        b.iter(|| {
            let units = PlainTextIngestor::new().ingest(black_box(bytes)).unwrap();
            runner::run(&pipeline, units, &options)
        })
    });
    group.bench_function("run_sequential_500_rows", |b| {
        b.iter(|| {
            let units = PlainTextIngestor::new().ingest(black_box(bytes)).unwrap();
            runner::run_sequential(&pipeline, units, &options)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_single_text, bench_batch);
criterion_main!(benches);
