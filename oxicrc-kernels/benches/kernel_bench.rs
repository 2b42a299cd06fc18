//! Throughput benchmarks for the CRC-32C kernels
//!
//! This benchmark suite evaluates:
//! - Every registered kernel across data sizes
//! - Misaligned input against aligned input
//! - Incremental vs single-shot calculation through the hasher

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxicrc_core::selftest::xorshift_bytes;
use oxicrc_kernels::{Crc32c, KERNELS, Strategy, crc32c};
use std::hint::black_box;

/// Standard data sizes for benchmarking
mod data_sizes {
    pub const TINY: usize = 16; // 16 B
    pub const SMALL: usize = 512; // 512 B (self-test vector)
    pub const MEDIUM: usize = 4 * 1024; // 4 KB
    pub const LARGE: usize = 64 * 1024; // 64 KB
}

/// Benchmark every kernel across different data sizes
fn bench_kernels(c: &mut Criterion) {
    let sizes = [
        ("16B", data_sizes::TINY),
        ("512B", data_sizes::SMALL),
        ("4KB", data_sizes::MEDIUM),
        ("64KB", data_sizes::LARGE),
    ];

    for (label, size) in sizes {
        let mut group = c.benchmark_group(format!("kernels_{label}"));
        group.throughput(Throughput::Bytes(size as u64));
        let data = xorshift_bytes(size, 1);

        for kernel in KERNELS {
            // The bitwise kernels take far too long on the larger sizes
            if kernel.strategy == Strategy::Bitwise && size > data_sizes::MEDIUM {
                continue;
            }
            group.bench_with_input(BenchmarkId::from_parameter(kernel.name), &data, |b, data| {
                b.iter(|| kernel.checksum(black_box(0), black_box(data)));
            });
        }

        group.finish();
    }
}

/// Benchmark aligned vs misaligned starts
fn bench_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment");
    group.throughput(Throughput::Bytes(data_sizes::MEDIUM as u64));
    let data = xorshift_bytes(data_sizes::MEDIUM + 8, 1);

    for offset in [0usize, 1, 4] {
        let view = &data[offset..offset + data_sizes::MEDIUM];
        for name in ["crc32c_folding_narrow16_4x32", "crc32c_bitsliced_128x2x32"] {
            let Ok(kernel) = oxicrc_kernels::find(name) else {
                continue;
            };
            group.bench_with_input(BenchmarkId::new(name, offset), view, |b, view| {
                b.iter(|| kernel.checksum(0, black_box(view)));
            });
        }
    }

    group.finish();
}

/// Benchmark incremental vs single-shot
fn bench_incremental(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental");
    let data = xorshift_bytes(data_sizes::LARGE, 1);
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("single_shot", |b| {
        b.iter(|| crc32c(0, black_box(&data)));
    });

    for chunk_size in [64usize, 1024, 8192] {
        group.bench_with_input(
            BenchmarkId::new("chunked", chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.iter(|| {
                    let mut crc = <Crc32c>::new();
                    for chunk in data.chunks(chunk_size) {
                        crc.update(black_box(chunk));
                    }
                    crc.finalize()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_kernels, bench_alignment, bench_incremental);
criterion_main!(benches);
