use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dct2::Matrix;
use dct2::direct::forward::dct2_direct;
use dct2::direct::inverse::idct2_direct;
use dct2::separable::two_pass::{dct2_separable, idct2_separable};
use dct2::threaded::dct_mt::dct2_direct_mt;
use std::hint::black_box;

fn input(size: usize) -> Matrix {
    Matrix::new(
        size,
        size,
        (0..size * size).map(|i| (i % 100) as f64).collect(),
    )
}

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward");
    for size in [8, 16, 32] {
        let src = input(size);
        let mut dst = Matrix::default();

        group.bench_with_input(BenchmarkId::new("direct", size), &src, |b, src| {
            b.iter(|| dct2_direct(black_box(src), &mut dst))
        });
        group.bench_with_input(BenchmarkId::new("separable", size), &src, |b, src| {
            b.iter(|| dct2_separable(black_box(src), &mut dst))
        });
        group.bench_with_input(BenchmarkId::new("direct_mt", size), &src, |b, src| {
            b.iter(|| dct2_direct_mt(black_box(src), &mut dst, 4))
        });
    }
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    for size in [8, 16, 32] {
        let src = input(size);
        let mut dst = Matrix::default();

        group.bench_with_input(BenchmarkId::new("direct", size), &src, |b, src| {
            b.iter(|| idct2_direct(black_box(src), &mut dst))
        });
        group.bench_with_input(BenchmarkId::new("separable", size), &src, |b, src| {
            b.iter(|| idct2_separable(black_box(src), &mut dst))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_forward, bench_inverse);
criterion_main!(benches);
