//! Criterion micro-benchmarks for the purespeed kernel.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use purespeed_bench::{bench_grid, finite_point, nan_point};
use purespeed_core::{speedy, transform};

/// Benchmark: one full `speedy()` pass (grid build + 400 transforms).
fn bench_speedy_full_pass(c: &mut Criterion) {
    c.bench_function("speedy_full_pass", |b| b.iter(speedy));
}

/// Benchmark: a single transform evaluation on the finite branch.
fn bench_transform_single(c: &mut Criterion) {
    let x = finite_point();
    c.bench_function("transform_single", |b| {
        b.iter(|| black_box(transform(black_box(x))))
    });
}

/// Benchmark: a single transform evaluation on the NaN branch.
fn bench_transform_single_nan(c: &mut Criterion) {
    let x = nan_point();
    c.bench_function("transform_single_nan", |b| {
        b.iter(|| black_box(transform(black_box(x))))
    });
}

/// Benchmark: the 400-point sweep over the reference grid.
fn bench_transform_grid_400(c: &mut Criterion) {
    let xs = bench_grid();
    c.bench_function("transform_grid_400", |b| {
        b.iter(|| {
            for &x in xs.iter() {
                black_box(transform(black_box(x)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_speedy_full_pass,
    bench_transform_single,
    bench_transform_single_nan,
    bench_transform_grid_400
);
criterion_main!(benches);
