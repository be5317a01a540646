//! Performance benchmarks for code-length construction
//!
//! This benchmark suite evaluates:
//! - Group-Dock-Merge against van Leeuwen and heap-based Huffman
//! - Uniform, exponential, classed and random weight distributions
//! - Scaling with the alphabet size

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxipfc_core::PartiallySortedArray;
use oxipfc_gdm::{Algorithm, GdmBuilder};
use std::hint::black_box;

/// Type alias for weight generator functions
type WeightGenerator = fn(usize) -> Vec<u64>;

/// Weight distributions for benchmarking
mod weights {
    /// All weights equal
    pub fn uniform(n: usize) -> Vec<u64> {
        vec![100; n]
    }

    /// Weights doubling every few symbols
    pub fn exponential(n: usize) -> Vec<u64> {
        (0..n).map(|i| 1u64 << ((i / 4) % 40)).collect()
    }

    /// A few magnitude classes with small jitter
    pub fn classed(n: usize) -> Vec<u64> {
        (0..n)
            .map(|i| (1u64 << (4 * (i % 5))) + (i as u64 % 3))
            .collect()
    }

    /// Pseudo-random weights
    pub fn random(n: usize) -> Vec<u64> {
        let mut seed: u64 = 0x123456789ABCDEF0;
        (0..n)
            .map(|_| {
                // Linear congruential generator
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                (seed >> 40) % 100_000
            })
            .collect()
    }
}

/// Standard alphabet sizes for benchmarking
mod sizes {
    pub const SMALL: usize = 256;
    pub const MEDIUM: usize = 4 * 1024;
    pub const LARGE: usize = 64 * 1024;
}

/// Benchmark every algorithm on every distribution
fn bench_algorithms(c: &mut Criterion) {
    let patterns: [(&str, WeightGenerator); 4] = [
        ("uniform", weights::uniform),
        ("exponential", weights::exponential),
        ("classed", weights::classed),
        ("random", weights::random),
    ];

    for (pattern_name, generator) in patterns {
        let mut group = c.benchmark_group(format!("algorithms_{pattern_name}"));
        let data = generator(sizes::MEDIUM);
        group.throughput(Throughput::Elements(data.len() as u64));

        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::from_parameter(algorithm.name()),
                &data,
                |b, data| {
                    b.iter(|| {
                        let lengths = algorithm.code_lengths(black_box(data));
                        black_box(lengths)
                    });
                },
            );
        }

        group.finish();
    }
}

/// Benchmark GDM scaling with the alphabet size
fn bench_gdm_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("gdm_scaling");

    for (size_name, size) in [
        ("256", sizes::SMALL),
        ("4K", sizes::MEDIUM),
        ("64K", sizes::LARGE),
    ] {
        let data = weights::random(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size_name), &data, |b, data| {
            b.iter(|| Algorithm::Gdm.code_lengths(black_box(data)));
        });
    }

    group.finish();
}

/// Benchmark tree construction alone, with the array prepared up front
fn bench_tree_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("gdm_tree_only");

    for (pattern_name, generator) in [
        ("exponential", weights::exponential as WeightGenerator),
        ("random", weights::random),
    ] {
        let array = match PartiallySortedArray::new(&generator(sizes::MEDIUM)) {
            Ok(array) => array,
            Err(e) => panic!("benchmark input rejected: {e}"),
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(pattern_name),
            &array,
            |b, array| {
                b.iter(|| {
                    let built = GdmBuilder::new(black_box(array)).build();
                    black_box(built.map(|(tree, stats)| (tree.len(), stats)))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_algorithms, bench_gdm_scaling, bench_tree_only);
criterion_main!(benches);
