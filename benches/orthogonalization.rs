//! Orthogonalization Kernel Benchmark
//!
//! Run with: cargo bench --bench orthogonalization
//!
//! Benchmarks:
//! - Full orthogonalization of a random `n x m` block, per method
//! - Extension of an orthonormal frame by a new block, per method
//! - Krylov basis generation on a diagonal operator

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use faer::prelude::*;
use krylov_ortho::{
    Method, algorithms::householder::householder_qr, krylov_basis, orthogonalize,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::Duration;

const BENCHMARK_DURATION_SECS: u64 = 5;
const BENCHMARK_SAMPLE_SIZE: usize = 30;

fn random_matrix(n: usize, m: usize) -> Mat<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    Mat::from_fn(n, m, |_, _| rng.random::<f64>() - 0.5)
}

fn bench_full_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("Orthogonalization/Full Block");
    group.measurement_time(Duration::from_secs(BENCHMARK_DURATION_SECS));
    group.sample_size(BENCHMARK_SAMPLE_SIZE);

    let input = random_matrix(2000, 32);
    for method in [
        Method::Classical,
        Method::Modified,
        Method::TwiceIsEnough,
        Method::HouseholderQr,
    ] {
        group.bench_with_input(BenchmarkId::new(method.name(), "2000x32"), &input, |b, input| {
            b.iter(|| {
                let mut mat = input.clone();
                orthogonalize(mat.as_mut(), 0, method);
                black_box(mat)
            })
        });
    }

    group.finish();
}

fn bench_frame_extension(c: &mut Criterion) {
    let mut group = c.benchmark_group("Orthogonalization/Frame Extension");
    group.measurement_time(Duration::from_secs(BENCHMARK_DURATION_SECS));
    group.sample_size(BENCHMARK_SAMPLE_SIZE);

    let mut input = random_matrix(2000, 40);
    householder_qr(input.as_mut().get_mut(.., 0..32));
    for method in Method::ALL {
        if method == Method::HouseholderQr {
            continue;
        }
        group.bench_with_input(BenchmarkId::new(method.name(), "32+8"), &input, |b, input| {
            b.iter(|| {
                let mut mat = input.clone();
                orthogonalize(mat.as_mut(), 32, method);
                black_box(mat)
            })
        });
    }

    group.finish();
}

fn bench_krylov_basis(c: &mut Criterion) {
    let mut group = c.benchmark_group("Orthogonalization/Krylov Basis");
    group.measurement_time(Duration::from_secs(BENCHMARK_DURATION_SECS));
    group.sample_size(BENCHMARK_SAMPLE_SIZE);

    let n = 500;
    let a = Mat::<f64>::from_fn(n, n, |i, j| if i == j { (i + 1) as f64 } else { 0.0 });
    let b_vec = random_matrix(n, 1);
    for method in [Method::Modified, Method::TwiceIsEnough, Method::JensWehner] {
        group.bench_function(BenchmarkId::new(method.name(), "k=50"), |b| {
            b.iter(|| black_box(krylov_basis(&a, b_vec.as_ref(), 50, method)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_block, bench_frame_extension, bench_krylov_basis);
criterion_main!(benches);
