use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ndstride_core::Layout;
use ndstride_ndarray::{unary, NdArray};

fn bench_unary_contiguous(c: &mut Criterion) {
    let mut group = c.benchmark_group("unary_contiguous");
    for &n in &[16usize, 64, 256, 512] {
        let data: Vec<f64> = (0..n * n).map(|i| i as f64 * 0.001).collect();
        let x = NdArray::from_shape(data, &[n, n], Layout::RowMajor).unwrap();
        let mut y = NdArray::<f64>::zeros(&[n, n], Layout::RowMajor);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| unary(&x, &mut y, |v| v * 2.0 + 1.0).unwrap());
        });
    }
    group.finish();
}

fn bench_unary_transposed(c: &mut Criterion) {
    let mut group = c.benchmark_group("unary_transposed");
    for &n in &[16usize, 64, 256, 512] {
        let data: Vec<f64> = (0..n * n).map(|i| i as f64 * 0.001).collect();
        let x = NdArray::from_shape(data, &[n, n], Layout::RowMajor).unwrap();
        let mut y = NdArray::<f64>::zeros(&[n, n], Layout::ColMajor);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| unary(&x, &mut y, |v| v * 2.0 + 1.0).unwrap());
        });
    }
    group.finish();
}

fn bench_unary_strided(c: &mut Criterion) {
    let mut group = c.benchmark_group("unary_strided");
    for &n in &[16usize, 64, 256] {
        let data: Vec<f64> = (0..4 * n * n).map(|i| i as f64 * 0.001).collect();
        let x = NdArray::new(data, &[n, n], &[-(4 * n as isize), 2], 4 * n * (n - 1), Layout::RowMajor).unwrap();
        let mut y = NdArray::<f64>::zeros(&[n, n], Layout::RowMajor);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| unary(&x, &mut y, |v| v.abs()).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_unary_contiguous, bench_unary_transposed, bench_unary_strided);
criterion_main!(benches);
