//! Performance benchmarks for oxitensor-bitonic.
//!
//! Measures compression and decompression throughput per layout over
//! tensor-shaped data patterns.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxitensor_bitonic::{Layout, compress, decompress};
use std::hint::black_box;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - every word identical (best compression)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0x3F; size]
    }

    /// Random data - no structure (worst compression)
    pub fn random(size: usize) -> Vec<u8> {
        // Simple PRNG for reproducible random data
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            // Linear congruential generator
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Weight-like FP32 data - small values, clustered exponents
    pub fn weights(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut i = 0u32;
        while data.len() < size {
            let x = ((i as f32) * 0.713).cos() * 0.05;
            data.extend_from_slice(&x.to_le_bytes());
            i += 1;
        }
        data.truncate(size);
        data
    }
}

fn bench_compress(c: &mut Criterion) {
    let size = 64 * 1024;
    let mut group = c.benchmark_group("compress");
    group.throughput(Throughput::Bytes(size as u64));
    group.sample_size(10);

    let patterns: [(&str, Vec<u8>); 3] = [
        ("uniform", test_data::uniform(size)),
        ("random", test_data::random(size)),
        ("weights", test_data::weights(size)),
    ];

    for (name, data) in &patterns {
        for layout in [Layout::Int8, Layout::Bf16, Layout::Fp32] {
            group.bench_with_input(
                BenchmarkId::new(*name, layout),
                data,
                |b, data| b.iter(|| compress(black_box(data), layout).unwrap()),
            );
        }
    }
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let size = 64 * 1024;
    let mut group = c.benchmark_group("decompress");
    group.throughput(Throughput::Bytes(size as u64));
    group.sample_size(10);

    for layout in [Layout::Int8, Layout::Bf16, Layout::Fp32] {
        let packed = compress(&test_data::weights(size), layout).unwrap();
        group.bench_with_input(
            BenchmarkId::new("weights", layout),
            &packed,
            |b, packed| b.iter(|| decompress(black_box(packed)).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
