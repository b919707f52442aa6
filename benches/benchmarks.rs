use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vector_math::{utils::generate_random_vectors, vector::AngleUnit};

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    for dimension in [3, 64, 1024] {
        let vectors = generate_random_vectors(dimension, 2);
        let (v, w) = (&vectors[0], &vectors[1]);

        group.bench_with_input(BenchmarkId::new("plus", dimension), &dimension, |b, _| {
            b.iter(|| black_box(v).plus(black_box(w)))
        });
        group.bench_with_input(BenchmarkId::new("dot", dimension), &dimension, |b, _| {
            b.iter(|| black_box(v).dot(black_box(w)))
        });
        group.bench_with_input(
            BenchmarkId::new("times_scalar", dimension),
            &dimension,
            |b, _| b.iter(|| black_box(v).times_scalar(black_box(2.5))),
        );
    }
    group.finish();
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    for dimension in [3, 64, 1024] {
        let vectors = generate_random_vectors(dimension, 2);
        let (v, w) = (&vectors[0], &vectors[1]);

        group.bench_with_input(
            BenchmarkId::new("normalized", dimension),
            &dimension,
            |b, _| b.iter(|| black_box(v).normalized()),
        );
        group.bench_with_input(
            BenchmarkId::new("angle_with", dimension),
            &dimension,
            |b, _| b.iter(|| black_box(v).angle_with(black_box(w), AngleUnit::Radians)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_arithmetic, bench_geometry);
criterion_main!(benches);
