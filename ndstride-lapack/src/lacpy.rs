//! Matrix copy: `lacpy`.

use std::ops::Range;

use ndstride_core::strided::check_matrix;
use ndstride_core::{Layout, MatrixTriangle, Result};

use crate::{at, dense_strides};

/// Copy all of `A`, or its upper or lower triangle, into `B`.
///
/// Both matrices are `m x n`; elements of `B` outside the selected
/// region are left untouched.
pub fn lacpy<T: Copy>(
    layout: Layout,
    uplo: MatrixTriangle,
    m: usize,
    n: usize,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) -> Result<()> {
    let (sa1, sa2) = dense_strides("lda", layout, m, n, lda)?;
    let (sb1, sb2) = dense_strides("ldb", layout, m, n, ldb)?;
    lacpy_ndarray(uplo, m, n, a, sa1, sa2, 0, b, sb1, sb2, 0)
}

/// [`lacpy`] over explicitly strided matrices.
pub fn lacpy_ndarray<T: Copy>(
    uplo: MatrixTriangle,
    m: usize,
    n: usize,
    a: &[T],
    stride_a1: isize,
    stride_a2: isize,
    offset_a: usize,
    b: &mut [T],
    stride_b1: isize,
    stride_b2: isize,
    offset_b: usize,
) -> Result<()> {
    if m == 0 || n == 0 {
        return Ok(());
    }
    check_matrix("a", a.len(), m, n, stride_a1, stride_a2, offset_a)?;
    check_matrix("b", b.len(), m, n, stride_b1, stride_b2, offset_b)?;

    let copy = |b: &mut [T], i: usize, j: usize| {
        b[at(offset_b, stride_b1, stride_b2, i, j)] = a[at(offset_a, stride_a1, stride_a2, i, j)];
    };
    // Columns of row i, or rows of column j, inside the selected region.
    let cols_of = |i: usize| -> Range<usize> {
        match uplo {
            MatrixTriangle::Upper => i.min(n)..n,
            MatrixTriangle::Lower => 0..(i + 1).min(n),
            MatrixTriangle::All => 0..n,
        }
    };
    let rows_of = |j: usize| -> Range<usize> {
        match uplo {
            MatrixTriangle::Upper => 0..(j + 1).min(m),
            MatrixTriangle::Lower => j.min(m)..m,
            MatrixTriangle::All => 0..m,
        }
    };

    // Inner loop along the smaller stride of A, ties broken by B.
    let (da1, da2) = (stride_a1.unsigned_abs(), stride_a2.unsigned_abs());
    let rows_inner = da1 < da2 || (da1 == da2 && stride_b1.unsigned_abs() <= stride_b2.unsigned_abs());
    if rows_inner {
        for j in 0..n {
            for i in rows_of(j) {
                copy(b, i, j);
            }
        }
    } else {
        for i in 0..m {
            for j in cols_of(i) {
                copy(b, i, j);
            }
        }
    }
    Ok(())
}

typed!(/// Single-precision matrix copy.
    slacpy = lacpy::<f32>(layout: Layout, uplo: MatrixTriangle, m: usize, n: usize, a: &[f32], lda: usize,
        b: &mut [f32], ldb: usize) -> Result<()>);
typed!(/// Double-precision matrix copy.
    dlacpy = lacpy::<f64>(layout: Layout, uplo: MatrixTriangle, m: usize, n: usize, a: &[f64], lda: usize,
        b: &mut [f64], ldb: usize) -> Result<()>);
typed!(slacpy_ndarray = lacpy_ndarray::<f32>(uplo: MatrixTriangle, m: usize, n: usize, a: &[f32],
    stride_a1: isize, stride_a2: isize, offset_a: usize, b: &mut [f32], stride_b1: isize, stride_b2: isize,
    offset_b: usize) -> Result<()>);
typed!(dlacpy_ndarray = lacpy_ndarray::<f64>(uplo: MatrixTriangle, m: usize, n: usize, a: &[f64],
    stride_a1: isize, stride_a2: isize, offset_a: usize, b: &mut [f64], stride_b1: isize, stride_b2: isize,
    offset_b: usize) -> Result<()>);
