//! Benchmarks for the carry-less multiply strategies
//!
//! This benchmark suite evaluates:
//! - Full 64-bit product cost per strategy
//! - Low-half-only product cost per strategy
//! - Barret byte and word steps built on each strategy

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxicrc_core::barret::{reduce_byte, reduce_word, reduce_word_reflected};
use oxicrc_core::pmul::{BitSerial, Clmul, Narrow16, Pmul, Reflected, Sparse};
use oxicrc_core::selftest::xorshift32;
use std::hint::black_box;

const OPERANDS: usize = 1024;

fn operands() -> Vec<(u32, u32)> {
    let mut state = 1;
    (0..OPERANDS)
        .map(|_| (xorshift32(&mut state), xorshift32(&mut state)))
        .collect()
}

fn bench_strategy<P: Pmul>(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    ops: &[(u32, u32)],
) {
    group.bench_with_input(BenchmarkId::new("full", P::NAME), ops, |b, ops| {
        b.iter(|| {
            let mut acc = 0u64;
            for &(x, y) in ops {
                acc ^= P::pmul(black_box(x), black_box(y));
            }
            acc
        });
    });
    group.bench_with_input(BenchmarkId::new("low", P::NAME), ops, |b, ops| {
        b.iter(|| {
            let mut acc = 0u32;
            for &(x, y) in ops {
                acc ^= P::pmul_lo(black_box(x), black_box(y));
            }
            acc
        });
    });
}

/// Benchmark raw multiplies
fn bench_pmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("pmul");
    group.throughput(Throughput::Elements(OPERANDS as u64));
    let ops = operands();

    bench_strategy::<BitSerial>(&mut group, &ops);
    bench_strategy::<Sparse>(&mut group, &ops);
    bench_strategy::<Narrow16>(&mut group, &ops);
    bench_strategy::<Reflected<Sparse>>(&mut group, &ops);
    bench_strategy::<Clmul>(&mut group, &ops);

    group.finish();
}

/// Benchmark Barret reduction steps
fn bench_barret(c: &mut Criterion) {
    let mut group = c.benchmark_group("barret");
    group.throughput(Throughput::Elements(OPERANDS as u64));
    let words: Vec<u32> = operands().into_iter().map(|(a, _)| a).collect();

    group.bench_function("byte/sparse", |b| {
        b.iter(|| words.iter().fold(0, |acc, &w| acc ^ reduce_byte::<Sparse>(black_box(w))));
    });
    group.bench_function("word/sparse", |b| {
        b.iter(|| words.iter().fold(0, |acc, &w| acc ^ reduce_word::<Sparse>(black_box(w))));
    });
    group.bench_function("word/narrow16", |b| {
        b.iter(|| words.iter().fold(0, |acc, &w| acc ^ reduce_word::<Narrow16>(black_box(w))));
    });
    group.bench_function("word_reflected/sparse", |b| {
        b.iter(|| {
            words
                .iter()
                .fold(0, |acc, &w| acc ^ reduce_word_reflected::<Sparse>(black_box(w)))
        });
    });
    group.bench_function("word/clmul", |b| {
        b.iter(|| words.iter().fold(0, |acc, &w| acc ^ reduce_word::<Clmul>(black_box(w))));
    });

    group.finish();
}

criterion_group!(benches, bench_pmul, bench_barret);
criterion_main!(benches);
