//! Benchmarks for point configuration sampling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use punctum::{ConvexRegion, PointSampler};

fn bench_binomial_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("binomial_count");

    for n in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("n", n), &n, |b, &n| {
            b.iter(|| {
                let sampler = PointSampler::binomial_with_seed(black_box(n), 2, 12345).unwrap();
                sampler.points().unwrap().len()
            })
        });
    }

    group.finish();
}

fn bench_binomial_dimension(c: &mut Criterion) {
    let mut group = c.benchmark_group("binomial_dimension");

    for dim in [2, 3, 8, 32] {
        group.bench_with_input(BenchmarkId::new("dim", dim), &dim, |b, &dim| {
            b.iter(|| {
                let sampler =
                    PointSampler::binomial_with_seed(1_000, black_box(dim), 12345).unwrap();
                sampler.points().unwrap().len()
            })
        });
    }

    group.finish();
}

fn bench_rejection_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("rejection_sampling");

    // Regions of decreasing acceptance rate
    let half_box = ConvexRegion::from_points(&[[0.0, 0.0], [1.0, 0.0], [1.0, 0.5], [0.0, 0.5]])
        .unwrap();
    let triangle = ConvexRegion::from_points(&[[0.1, 0.1], [0.9, 0.1], [0.5, 0.8]]).unwrap();
    let small_triangle =
        ConvexRegion::from_points(&[[0.45, 0.45], [0.55, 0.45], [0.5, 0.55]]).unwrap();

    for (name, region) in [
        ("half_box", half_box),
        ("triangle", triangle),
        ("small_triangle", small_triangle),
    ] {
        group.bench_with_input(BenchmarkId::new("region", name), &region, |b, region| {
            b.iter(|| {
                let sampler = PointSampler::binomial_with_seed(500, 2, 12345)
                    .unwrap()
                    .in_region(region.clone())
                    .unwrap();
                sampler.points().unwrap().len()
            })
        });
    }

    group.finish();
}

fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");

    let square = ConvexRegion::unit_box(2).unwrap();
    let octagon = ConvexRegion::from_points(&[
        [0.3, 0.0],
        [0.7, 0.0],
        [1.0, 0.3],
        [1.0, 0.7],
        [0.7, 1.0],
        [0.3, 1.0],
        [0.0, 0.7],
        [0.0, 0.3],
    ])
    .unwrap();

    group.bench_function("unit_box", |b| {
        b.iter(|| punctum::in_hull(black_box(&[0.5, 0.5]), &square).unwrap())
    });

    group.bench_function("octagon", |b| {
        b.iter(|| punctum::in_hull(black_box(&[0.5, 0.5]), &octagon).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_binomial_count,
    bench_binomial_dimension,
    bench_rejection_sampling,
    bench_membership
);
criterion_main!(benches);
