//! Performance benchmarks for the bit cursor and primitive decoders.
//!
//! This benchmark suite evaluates:
//! - Raw bit field reads at common SWF widths
//! - Decoded primitive reads with position tracking
//! - Aligned little-endian integer reads

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxiswf_core::prelude::*;
use std::hint::black_box;

/// Generate reproducible pseudo-random data
fn random_data(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut seed: u64 = 0x123456789ABCDEF0;
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

/// Benchmark raw bit field reads across widths
fn bench_read_ubits(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_ubits");
    let data = random_data(64 * 1024);

    for width in [1u8, 5, 13, 32] {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| {
                let mut cursor = BitCursor::new(black_box(&data));
                let mut sum = 0u64;
                while cursor.has_bits_left(width as u64) {
                    sum += cursor.read_ubits(width).unwrap_or(0) as u64;
                }
                black_box(sum);
            });
        });
    }

    group.finish();
}

/// Benchmark decoded primitives with field paths
fn bench_parse_sbits(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_sbits");
    let data = random_data(16 * 1024);
    let root = FieldPath::root("Bench").expect("valid root");
    let code = ErrorCode(6);

    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("width_15", |b| {
        b.iter(|| {
            let mut cursor = BitCursor::new(black_box(&data));
            let field = root.child("Delta");
            let mut sum = 0i64;
            while let Ok(value) = parse_sbits(&mut cursor, 15, code, &field) {
                sum += value.value() as i64;
            }
            black_box(sum);
        });
    });

    group.finish();
}

/// Benchmark aligned integer reads
fn bench_read_u16(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_u16");
    let data = random_data(64 * 1024);

    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("64KB", |b| {
        b.iter(|| {
            let mut cursor = BitCursor::new(black_box(&data));
            let mut sum = 0u64;
            while let Ok(value) = cursor.read_u16() {
                sum += value as u64;
            }
            black_box(sum);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_read_ubits, bench_parse_sbits, bench_read_u16);
criterion_main!(benches);
