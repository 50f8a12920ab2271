//! Benchmarks for auxiliary-vector decoding.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use procprobe::auxv::{decode, label_for, AuxEntry};

/// A realistic-size vector: twenty entries with non-zero keys, then the
/// terminator.
fn sample_vector() -> Vec<AuxEntry> {
    let mut entries: Vec<AuxEntry> = (0..20)
        .map(|i| AuxEntry::new(3 + (i % 30), i * 7))
        .collect();
    entries.push(AuxEntry::new(0, 0));
    entries
}

fn bench_label_for(c: &mut Criterion) {
    c.bench_function("label_for/known", |b| b.iter(|| label_for(black_box(6))));
    c.bench_function("label_for/unknown", |b| {
        b.iter(|| label_for(black_box(9999)))
    });
}

fn bench_decode(c: &mut Criterion) {
    let entries = sample_vector();
    c.bench_function("decode/21_entries", |b| {
        b.iter(|| decode(black_box(&entries)).count())
    });
}

criterion_group!(benches, bench_label_for, bench_decode);
criterion_main!(benches);
