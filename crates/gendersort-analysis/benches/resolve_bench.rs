//! Normalization and resolution throughput.
//!
//! Run with: cargo bench -p gendersort-analysis --bench resolve_bench

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gendersort_analysis::{normalize, BatchResolver, GenderResolver, LookupTable};
use gendersort_core::GenderLabel;

const SAMPLE_NAMES: [&str; 8] = [
    "Ali (Roberta) Smith",
    "SmithJ.",
    "John-Paul",
    "François",
    "J. R. R. Tolkien",
    "Marie-Claire \"Coco\" Dupont",
    "Geo. Washington",
    "Zoë Müller",
];

fn synthetic_table(size: usize) -> LookupTable {
    let labels = [GenderLabel::Male, GenderLabel::Female, GenderLabel::Unisex];
    let mut records: Vec<(String, GenderLabel)> = (0..size)
        .map(|i| (format!("NAME{i:06}"), labels[i % labels.len()]))
        .collect();
    for (name, label) in [("ALI", GenderLabel::Male), ("FRANCOIS", GenderLabel::Male), ("MARIE", GenderLabel::Female)] {
        records.push((name.to_string(), label));
    }
    LookupTable::from_records(records)
}

fn normalize_bench(c: &mut Criterion) {
    c.bench_function("normalize_sample_names", |b| {
        b.iter(|| {
            for name in SAMPLE_NAMES {
                black_box(normalize(black_box(name)));
            }
        });
    });
}

fn resolve_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for size in [1_000, 100_000] {
        let resolver = GenderResolver::new(Arc::new(synthetic_table(size)));
        group.bench_with_input(BenchmarkId::new("assign", size), &size, |b, _| {
            b.iter(|| {
                for name in SAMPLE_NAMES {
                    black_box(resolver.assign(black_box(name)));
                }
            });
        });
    }
    group.finish();
}

fn batch_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(10);
    let resolver = GenderResolver::new(Arc::new(synthetic_table(100_000)));
    let batch = BatchResolver::new(resolver);
    let lines: Vec<&str> = SAMPLE_NAMES.iter().copied().cycle().take(50_000).collect();
    group.bench_function("assign_all_50k", |b| {
        b.iter(|| black_box(batch.assign_all(&lines)));
    });
    group.finish();
}

criterion_group!(benches, normalize_bench, resolve_bench, batch_bench);
criterion_main!(benches);
