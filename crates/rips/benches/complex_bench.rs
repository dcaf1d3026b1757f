//! Criterion benches for the Vietoris-Rips pipeline.
//! Sizes follow the interactive use case: N in {24, 72, 144}, max_dim in {2, 3}.
//! Results live under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rips::{build_graph, complex, intersect, intersect_sorted, Point2, PointId};

fn random_cloud(n: usize, seed: u64) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|id| Point2::xy(id, rng.gen_range(0.0..600.0), rng.gen_range(0.0..600.0)))
        .collect()
}

fn bench_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph");
    for &n in &[24usize, 72, 144] {
        group.bench_with_input(BenchmarkId::new("build_graph", n), &n, |b, &n| {
            b.iter_batched(
                || random_cloud(n, 42),
                |pts| {
                    let _ = build_graph(&pts, 80.0).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_intersect(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersect");
    for &m in &[8usize, 32, 128] {
        let a: Vec<PointId> = (0..m).map(|k| PointId(2 * k)).collect();
        let b: Vec<PointId> = (0..m).map(|k| PointId(3 * k)).collect();
        group.bench_with_input(BenchmarkId::new("general", m), &m, |bch, _| {
            bch.iter(|| intersect(&a, &b))
        });
        group.bench_with_input(BenchmarkId::new("sorted", m), &m, |bch, _| {
            bch.iter(|| intersect_sorted(&a, &b))
        });
    }
    group.finish();
}

fn bench_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("complex");
    for &n in &[24usize, 72, 144] {
        for &k in &[2usize, 3] {
            group.bench_with_input(
                BenchmarkId::new(format!("max_dim_{k}"), n),
                &n,
                |b, &n| {
                    b.iter_batched(
                        || random_cloud(n, 7),
                        |pts| {
                            let _ = complex(&pts, k, 80.0).unwrap();
                        },
                        BatchSize::SmallInput,
                    )
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_graph, bench_intersect, bench_complex);
criterion_main!(benches);
