// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Benchmark: segment-to-segment and point-to-segment distance
//!
//! Random segments cover every region of the minimization; a separate group
//! pins the near-parallel branch.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simgeom_geom::{distance_to_point, segment_distance};
use simgeom_math::Vec3;

type Segment = (Vec3, Vec3);

fn random_point(rng: &mut StdRng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
    )
}

fn random_pairs(n: usize, seed: u64) -> Vec<(Segment, Segment)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            (
                (random_point(&mut rng), random_point(&mut rng)),
                (random_point(&mut rng), random_point(&mut rng)),
            )
        })
        .collect()
}

fn parallel_pairs(n: usize, seed: u64) -> Vec<(Segment, Segment)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let start = random_point(&mut rng);
            let dir = random_point(&mut rng);
            let offset = random_point(&mut rng).scale(0.1);
            (
                (start, start.add(&dir)),
                (start.add(&offset), start.add(&offset).add(&dir.scale(0.5))),
            )
        })
        .collect()
}

fn bench_segment_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_distance");
    for &n in &[1usize, 100, 10_000] {
        let pairs = random_pairs(n, 0x5eed);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &pairs, |b, pairs| {
            b.iter(|| {
                for ((a0, a1), (b0, b1)) in pairs {
                    black_box(segment_distance(a0, a1, b0, b1));
                }
            });
        });
    }
    group.finish();
}

fn bench_parallel_segments(c: &mut Criterion) {
    let pairs = parallel_pairs(1_000, 0xa11e);
    let mut group = c.benchmark_group("segment_distance_parallel");
    group.throughput(Throughput::Elements(pairs.len() as u64));
    group.bench_function("1000", |b| {
        b.iter(|| {
            for ((a0, a1), (b0, b1)) in &pairs {
                black_box(segment_distance(a0, a1, b0, b1));
            }
        });
    });
    group.finish();
}

fn bench_point_distance(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let (start, end) = (random_point(&mut rng), random_point(&mut rng));
    let dir = end.sub(&start);
    let points: Vec<Vec3> = (0..10_000).map(|_| random_point(&mut rng)).collect();
    let mut group = c.benchmark_group("point_distance");
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("10000", |b| {
        b.iter(|| {
            for p in &points {
                black_box(distance_to_point(&start, &end, &dir, p));
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_segment_distance,
    bench_parallel_segments,
    bench_point_distance
);
criterion_main!(benches);
