use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ndstride_blas::{level1, level2, Layout, Transpose};

fn bench_sdot(c: &mut Criterion) {
    let mut group = c.benchmark_group("sdot");
    for &n in &[64, 256, 1024, 4096, 16384] {
        let x: Vec<f32> = (0..n).map(|i| i as f32 * 0.001).collect();
        let y: Vec<f32> = (0..n).map(|i| i as f32 * 0.002).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| level1::sdot(n, &x, 1, &y, 1).unwrap());
        });
    }
    group.finish();
}

fn bench_ddot_strided(c: &mut Criterion) {
    let mut group = c.benchmark_group("ddot_strided");
    for &n in &[64, 256, 1024, 4096] {
        let x: Vec<f64> = (0..2 * n).map(|i| i as f64 * 0.001).collect();
        let y: Vec<f64> = (0..n).map(|i| i as f64 * 0.002).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| level1::ddot(n, &x, 2, &y, -1).unwrap());
        });
    }
    group.finish();
}

fn bench_saxpy(c: &mut Criterion) {
    let mut group = c.benchmark_group("saxpy");
    for &n in &[64, 256, 1024, 4096, 16384] {
        let x: Vec<f32> = (0..n).map(|i| i as f32 * 0.001).collect();
        let mut y: Vec<f32> = (0..n).map(|i| i as f32 * 0.002).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| {
                y.fill(0.0);
                level1::saxpy(n, 2.0, &x, 1, &mut y, 1).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_dnrm2(c: &mut Criterion) {
    let mut group = c.benchmark_group("dnrm2");
    for &n in &[64, 1024, 16384] {
        let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01).sin()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| level1::dnrm2(n, &x, 1).unwrap());
        });
    }
    group.finish();
}

fn bench_dgemv(c: &mut Criterion) {
    let mut group = c.benchmark_group("dgemv");
    for &n in &[32, 64, 128, 256, 512] {
        let a: Vec<f64> = (0..n * n).map(|i| (i as f64 * 0.001).sin()).collect();
        let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.002).cos()).collect();
        let mut y = vec![0.0f64; n];
        for (label, layout) in [("row", Layout::RowMajor), ("col", Layout::ColMajor)] {
            group.bench_with_input(BenchmarkId::new(label, n), &n, |bench, &n| {
                bench.iter(|| {
                    level2::dgemv(layout, Transpose::NoTrans, n, n, 1.0, &a, n, &x, 1, 0.0, &mut y, 1)
                        .unwrap();
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_sdot, bench_ddot_strided, bench_saxpy, bench_dnrm2, bench_dgemv);
criterion_main!(benches);
