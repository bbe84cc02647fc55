//! Criterion benchmarks for u-partition.
//!
//! Uses seeded random planet sets to measure enumeration, filtering and
//! scoring throughput as the entity count grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_partition::enumerate::SplitGenerator;
use u_partition::model::{Attributes, Entity, EntitySet, Position};
use u_partition::search::{PartitionConfig, PartitionRunner, ScoreWeights};

// ===========================================================================
// Synthetic planets
// ===========================================================================

fn random_planets(n: usize, seed: u64) -> EntitySet {
    let mut rng = StdRng::seed_from_u64(seed);
    let planets = (0..n)
        .map(|i| {
            Entity::new(
                format!("planet-{i}"),
                Attributes::new(
                    rng.random_range(0..20),
                    rng.random_range(0..3),
                    rng.random_range(0..3),
                ),
                Position::new(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0)),
            )
        })
        .collect();
    EntitySet::new(planets).expect("synthetic names are unique")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate");
    group.sample_size(10);

    for &n in &[10usize, 14, 18] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(SplitGenerator::new(black_box(n), 2).count()))
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for &n in &[10usize, 14, 18] {
        let planets = random_planets(n, 42);
        for (label, weights) in [
            ("composite", ScoreWeights::default()),
            ("attribute_only", ScoreWeights::attribute_only()),
        ] {
            let config = PartitionConfig::default().with_weights(weights);
            group.bench_with_input(
                BenchmarkId::new(label, n),
                &(&planets, config),
                |b, (p, c)| {
                    b.iter(|| {
                        let result = PartitionRunner::run(black_box(p), black_box(c));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_parallel");
    group.sample_size(10);

    for &n in &[14usize, 18, 20] {
        let planets = random_planets(n, 7);
        let config = PartitionConfig::default().with_parallel(true);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(&planets, config),
            |b, (p, c)| b.iter(|| black_box(PartitionRunner::run(black_box(p), black_box(c)))),
        );
    }
    group.finish();
}

#[cfg(feature = "parallel")]
criterion_group!(benches, bench_enumeration, bench_search, bench_parallel);
#[cfg(not(feature = "parallel"))]
criterion_group!(benches, bench_enumeration, bench_search);
criterion_main!(benches);
