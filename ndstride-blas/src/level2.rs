//! BLAS Level 2: Matrix-vector operations.
//!
//! Matrices are addressed through a pair of strides and an offset, so the
//! kernels see row-major, column-major, transposed and reversed storage
//! the same way. Each kernel picks the sweep whose inner lanes run along
//! the smaller stride; unit-stride lanes go through the contiguous
//! `Element::dot` / `Element::axpy` primitives.
//!
//! Symmetric and triangular kernels are written for column sweeps only.
//! Row-major storage is handled by swapping the two strides, which turns
//! `A` into `A^T`: the referenced triangle flips and, for triangular
//! operators, so does the transpose flag.

use ndstride_core::strided::{check_matrix, check_stride, check_vector};
use ndstride_core::{stride2offset, Diag, Element, Error, Layout, Result, Transpose, Uplo};

use crate::level1::{gather, scatter};

// ============================================================================
// Matrix addressing and lane helpers
// ============================================================================

/// Strides and offset of a two-dimensional view.
#[derive(Debug, Clone, Copy)]
struct MatrixView {
    s1: isize,
    s2: isize,
    offset: usize,
}

impl MatrixView {
    fn new(s1: isize, s2: isize, offset: usize) -> Self {
        Self { s1, s2, offset }
    }

    /// Buffer index of element `(i, j)`.
    #[inline(always)]
    fn at(self, i: usize, j: usize) -> usize {
        (self.offset as isize + i as isize * self.s1 + j as isize * self.s2) as usize
    }

    /// The same memory viewed as the transpose.
    fn transposed(self) -> Self {
        Self {
            s1: self.s2,
            s2: self.s1,
            offset: self.offset,
        }
    }

    /// Rows are the short-stride lanes.
    fn is_row_major(self) -> bool {
        self.s2.unsigned_abs() < self.s1.unsigned_abs()
    }

    /// Reorient a symmetric or triangular view for column sweeps.
    fn column_oriented(self, uplo: Uplo) -> (Self, Uplo, bool) {
        if self.is_row_major() {
            (self.transposed(), uplo.flip(), true)
        } else {
            (self, uplo, false)
        }
    }
}

/// `sum(a[start + k*step] * x[k])`.
#[inline]
fn lane_dot<T: Element>(a: &[T], start: usize, step: isize, x: &[T]) -> T {
    let len = x.len();
    if len == 0 {
        return T::zero();
    }
    if step == 1 {
        return T::dot(&a[start..start + len], x);
    }
    let mut sum = T::zero();
    let mut ia = start as isize;
    for &v in x {
        sum = sum + a[ia as usize] * v;
        ia += step;
    }
    sum
}

/// `y[k] += alpha * a[start + k*step]`.
#[inline]
fn lane_axpy<T: Element>(alpha: T, a: &[T], start: usize, step: isize, y: &mut [T]) {
    let len = y.len();
    if len == 0 {
        return;
    }
    if step == 1 {
        T::axpy(alpha, &a[start..start + len], y);
        return;
    }
    let mut ia = start as isize;
    for v in y.iter_mut() {
        *v = *v + alpha * a[ia as usize];
        ia += step;
    }
}

/// `a[start + k*step] += alpha * x[k]`.
#[inline]
fn lane_update<T: Element>(a: &mut [T], start: usize, step: isize, alpha: T, x: &[T]) {
    let len = x.len();
    if len == 0 {
        return;
    }
    if step == 1 {
        T::axpy(alpha, x, &mut a[start..start + len]);
        return;
    }
    let mut ia = start as isize;
    for &v in x {
        a[ia as usize] = a[ia as usize] + alpha * v;
        ia += step;
    }
}

/// `y := beta * y`, with `beta == 0` clearing `y` outright.
#[inline]
fn scale_by_beta<T: Element>(beta: T, y: &mut [T]) {
    if beta == T::zero() {
        y.fill(T::zero());
    } else if beta != T::one() {
        T::scal(beta, y);
    }
}

/// Strides of a dense `rows x cols` matrix after validating `lda`.
fn dense_strides(layout: Layout, rows: usize, cols: usize, lda: usize) -> Result<(isize, isize)> {
    let min = layout.leading_dim(rows, cols).max(1);
    if lda < min {
        return Err(Error::InvalidLeadingDimension {
            arg: "lda",
            value: lda,
            min,
        });
    }
    Ok(layout.matrix_strides(lda))
}

// ============================================================================
// GEMV: General matrix-vector multiply
// y := alpha * op(A) * x + beta * y
// ============================================================================

/// `y := alpha * op(A) * x + beta * y` for an `m x n` matrix `A`.
pub fn gemv<T: Element>(
    layout: Layout,
    trans: Transpose,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    stride_x: isize,
    beta: T,
    y: &mut [T],
    stride_y: isize,
) -> Result<()> {
    let (sa1, sa2) = dense_strides(layout, m, n, lda)?;
    let (len_x, len_y) = if trans.is_transposed() { (m, n) } else { (n, m) };
    gemv_ndarray(
        trans,
        m,
        n,
        alpha,
        a,
        sa1,
        sa2,
        0,
        x,
        stride_x,
        stride2offset(len_x, stride_x),
        beta,
        y,
        stride_y,
        stride2offset(len_y, stride_y),
    )
}

/// [`gemv`] over an explicitly strided matrix.
pub fn gemv_ndarray<T: Element>(
    trans: Transpose,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    stride_a1: isize,
    stride_a2: isize,
    offset_a: usize,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    beta: T,
    y: &mut [T],
    stride_y: isize,
    offset_y: usize,
) -> Result<()> {
    check_stride("stride_x", stride_x)?;
    check_stride("stride_y", stride_y)?;
    if m == 0 || n == 0 || (alpha == T::zero() && beta == T::one()) {
        return Ok(());
    }
    let (len_x, len_y) = if trans.is_transposed() { (m, n) } else { (n, m) };
    check_matrix("a", a.len(), m, n, stride_a1, stride_a2, offset_a)?;
    check_vector("x", x.len(), len_x, stride_x, offset_x)?;
    check_vector("y", y.len(), len_y, stride_y, offset_y)?;

    let mut y_buf = gather(y, len_y, stride_y, offset_y);
    scale_by_beta(beta, &mut y_buf);

    if alpha != T::zero() {
        let x_buf = gather(x, len_x, stride_x, offset_x);
        let view = MatrixView::new(stride_a1, stride_a2, offset_a);
        // op(A) as a len_y x len_x view
        let op = if trans.is_transposed() { view.transposed() } else { view };
        if op.is_row_major() {
            // y[i] += alpha * dot(op(A)_row_i, x)
            for i in 0..len_y {
                y_buf[i] = y_buf[i] + alpha * lane_dot(a, op.at(i, 0), op.s2, &x_buf);
            }
        } else {
            // y += alpha * x[j] * op(A)_col_j
            for j in 0..len_x {
                lane_axpy(alpha * x_buf[j], a, op.at(0, j), op.s1, &mut y_buf);
            }
        }
    }

    scatter(&y_buf, y, stride_y, offset_y);
    Ok(())
}

// ============================================================================
// GER: Rank-1 update
// A := alpha * x * y^T + A
// ============================================================================

/// `A := alpha * x * y^T + A` for an `m x n` matrix `A`.
pub fn ger<T: Element>(
    layout: Layout,
    m: usize,
    n: usize,
    alpha: T,
    x: &[T],
    stride_x: isize,
    y: &[T],
    stride_y: isize,
    a: &mut [T],
    lda: usize,
) -> Result<()> {
    let (sa1, sa2) = dense_strides(layout, m, n, lda)?;
    ger_ndarray(
        m,
        n,
        alpha,
        x,
        stride_x,
        stride2offset(m, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
        a,
        sa1,
        sa2,
        0,
    )
}

/// [`ger`] over an explicitly strided matrix.
pub fn ger_ndarray<T: Element>(
    m: usize,
    n: usize,
    alpha: T,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    y: &[T],
    stride_y: isize,
    offset_y: usize,
    a: &mut [T],
    stride_a1: isize,
    stride_a2: isize,
    offset_a: usize,
) -> Result<()> {
    check_stride("stride_x", stride_x)?;
    check_stride("stride_y", stride_y)?;
    if m == 0 || n == 0 || alpha == T::zero() {
        return Ok(());
    }
    check_vector("x", x.len(), m, stride_x, offset_x)?;
    check_vector("y", y.len(), n, stride_y, offset_y)?;
    check_matrix("a", a.len(), m, n, stride_a1, stride_a2, offset_a)?;

    let x_buf = gather(x, m, stride_x, offset_x);
    let y_buf = gather(y, n, stride_y, offset_y);
    let view = MatrixView::new(stride_a1, stride_a2, offset_a);
    if view.is_row_major() {
        for i in 0..m {
            lane_update(a, view.at(i, 0), view.s2, alpha * x_buf[i], &y_buf);
        }
    } else {
        for j in 0..n {
            lane_update(a, view.at(0, j), view.s1, alpha * y_buf[j], &x_buf);
        }
    }
    Ok(())
}

// ============================================================================
// SYMV: Symmetric matrix-vector multiply
// y := alpha * A * x + beta * y
// ============================================================================

/// `y := alpha * A * x + beta * y`; only the `uplo` triangle of `A` is read.
pub fn symv<T: Element>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    stride_x: isize,
    beta: T,
    y: &mut [T],
    stride_y: isize,
) -> Result<()> {
    let (sa1, sa2) = dense_strides(layout, n, n, lda)?;
    symv_ndarray(
        uplo,
        n,
        alpha,
        a,
        sa1,
        sa2,
        0,
        x,
        stride_x,
        stride2offset(n, stride_x),
        beta,
        y,
        stride_y,
        stride2offset(n, stride_y),
    )
}

/// [`symv`] over an explicitly strided matrix.
pub fn symv_ndarray<T: Element>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    a: &[T],
    stride_a1: isize,
    stride_a2: isize,
    offset_a: usize,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    beta: T,
    y: &mut [T],
    stride_y: isize,
    offset_y: usize,
) -> Result<()> {
    check_stride("stride_x", stride_x)?;
    check_stride("stride_y", stride_y)?;
    if n == 0 || (alpha == T::zero() && beta == T::one()) {
        return Ok(());
    }
    check_matrix("a", a.len(), n, n, stride_a1, stride_a2, offset_a)?;
    check_vector("x", x.len(), n, stride_x, offset_x)?;
    check_vector("y", y.len(), n, stride_y, offset_y)?;

    let mut y_buf = gather(y, n, stride_y, offset_y);
    scale_by_beta(beta, &mut y_buf);

    if alpha != T::zero() {
        let x_buf = gather(x, n, stride_x, offset_x);
        let (view, uplo, _) = MatrixView::new(stride_a1, stride_a2, offset_a).column_oriented(uplo);
        for j in 0..n {
            let temp1 = alpha * x_buf[j];
            let diag = a[view.at(j, j)];
            // Off-diagonal part of column j: rows 0..j (upper) or j+1..n (lower).
            let (start, rows) = match uplo {
                Uplo::Upper => (view.at(0, j), 0..j),
                Uplo::Lower => (view.at(j + 1, j), j + 1..n),
            };
            lane_axpy(temp1, a, start, view.s1, &mut y_buf[rows.clone()]);
            let temp2 = lane_dot(a, start, view.s1, &x_buf[rows]);
            y_buf[j] = y_buf[j] + temp1 * diag + alpha * temp2;
        }
    }

    scatter(&y_buf, y, stride_y, offset_y);
    Ok(())
}

// ============================================================================
// SYR: Symmetric rank-1 update
// A := alpha * x * x^T + A
// ============================================================================

/// `A := alpha * x * x^T + A`; only the `uplo` triangle of `A` is written.
pub fn syr<T: Element>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    stride_x: isize,
    a: &mut [T],
    lda: usize,
) -> Result<()> {
    let (sa1, sa2) = dense_strides(layout, n, n, lda)?;
    syr_ndarray(uplo, n, alpha, x, stride_x, stride2offset(n, stride_x), a, sa1, sa2, 0)
}

/// [`syr`] over an explicitly strided matrix.
pub fn syr_ndarray<T: Element>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    a: &mut [T],
    stride_a1: isize,
    stride_a2: isize,
    offset_a: usize,
) -> Result<()> {
    check_stride("stride_x", stride_x)?;
    if n == 0 || alpha == T::zero() {
        return Ok(());
    }
    check_vector("x", x.len(), n, stride_x, offset_x)?;
    check_matrix("a", a.len(), n, n, stride_a1, stride_a2, offset_a)?;

    let x_buf = gather(x, n, stride_x, offset_x);
    let (view, uplo, _) = MatrixView::new(stride_a1, stride_a2, offset_a).column_oriented(uplo);
    for j in 0..n {
        let (start, rows) = match uplo {
            Uplo::Upper => (view.at(0, j), 0..j + 1),
            Uplo::Lower => (view.at(j, j), j..n),
        };
        lane_update(a, start, view.s1, alpha * x_buf[j], &x_buf[rows]);
    }
    Ok(())
}

// ============================================================================
// SYR2: Symmetric rank-2 update
// A := alpha * x * y^T + alpha * y * x^T + A
// ============================================================================

/// `A := alpha * x * y^T + alpha * y * x^T + A`; only the `uplo` triangle is written.
pub fn syr2<T: Element>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    stride_x: isize,
    y: &[T],
    stride_y: isize,
    a: &mut [T],
    lda: usize,
) -> Result<()> {
    let (sa1, sa2) = dense_strides(layout, n, n, lda)?;
    syr2_ndarray(
        uplo,
        n,
        alpha,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
        a,
        sa1,
        sa2,
        0,
    )
}

/// [`syr2`] over an explicitly strided matrix.
pub fn syr2_ndarray<T: Element>(
    uplo: Uplo,
    n: usize,
    alpha: T,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    y: &[T],
    stride_y: isize,
    offset_y: usize,
    a: &mut [T],
    stride_a1: isize,
    stride_a2: isize,
    offset_a: usize,
) -> Result<()> {
    check_stride("stride_x", stride_x)?;
    check_stride("stride_y", stride_y)?;
    if n == 0 || alpha == T::zero() {
        return Ok(());
    }
    check_vector("x", x.len(), n, stride_x, offset_x)?;
    check_vector("y", y.len(), n, stride_y, offset_y)?;
    check_matrix("a", a.len(), n, n, stride_a1, stride_a2, offset_a)?;

    let x_buf = gather(x, n, stride_x, offset_x);
    let y_buf = gather(y, n, stride_y, offset_y);
    let (view, uplo, _) = MatrixView::new(stride_a1, stride_a2, offset_a).column_oriented(uplo);
    for j in 0..n {
        let (start, rows) = match uplo {
            Uplo::Upper => (view.at(0, j), 0..j + 1),
            Uplo::Lower => (view.at(j, j), j..n),
        };
        lane_update(a, start, view.s1, alpha * y_buf[j], &x_buf[rows.clone()]);
        lane_update(a, start, view.s1, alpha * x_buf[j], &y_buf[rows]);
    }
    Ok(())
}

// ============================================================================
// SPMV: Symmetric packed matrix-vector multiply
// y := alpha * A * x + beta * y
// ============================================================================

/// `y := alpha * A * x + beta * y` with `A` in packed triangular storage.
///
/// `ap` holds the `uplo` triangle, `n * (n + 1) / 2` elements, packed by
/// rows for row-major and by columns for column-major.
pub fn spmv<T: Element>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    ap: &[T],
    x: &[T],
    stride_x: isize,
    beta: T,
    y: &mut [T],
    stride_y: isize,
) -> Result<()> {
    spmv_ndarray(
        layout,
        uplo,
        n,
        alpha,
        ap,
        1,
        0,
        x,
        stride_x,
        stride2offset(n, stride_x),
        beta,
        y,
        stride_y,
        stride2offset(n, stride_y),
    )
}

/// [`spmv`] with a strided packed array and explicit offsets.
pub fn spmv_ndarray<T: Element>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    ap: &[T],
    stride_ap: isize,
    offset_ap: usize,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    beta: T,
    y: &mut [T],
    stride_y: isize,
    offset_y: usize,
) -> Result<()> {
    check_stride("stride_ap", stride_ap)?;
    check_stride("stride_x", stride_x)?;
    check_stride("stride_y", stride_y)?;
    if n == 0 || (alpha == T::zero() && beta == T::one()) {
        return Ok(());
    }
    check_vector("ap", ap.len(), n * (n + 1) / 2, stride_ap, offset_ap)?;
    check_vector("x", x.len(), n, stride_x, offset_x)?;
    check_vector("y", y.len(), n, stride_y, offset_y)?;

    let mut y_buf = gather(y, n, stride_y, offset_y);
    scale_by_beta(beta, &mut y_buf);

    if alpha != T::zero() {
        let x_buf = gather(x, n, stride_x, offset_x);
        // Row-packed upper is column-packed lower of the transpose, and A = A^T.
        let uplo = match layout {
            Layout::RowMajor => uplo.flip(),
            Layout::ColMajor => uplo,
        };
        let packed = |k: usize| (offset_ap as isize + k as isize * stride_ap) as usize;
        let mut kk = 0;
        for j in 0..n {
            let temp1 = alpha * x_buf[j];
            let (diag, start, rows) = match uplo {
                Uplo::Upper => (kk + j, kk, 0..j),
                Uplo::Lower => (kk, kk + 1, j + 1..n),
            };
            let start = if rows.is_empty() { 0 } else { packed(start) };
            lane_axpy(temp1, ap, start, stride_ap, &mut y_buf[rows.clone()]);
            let temp2 = lane_dot(ap, start, stride_ap, &x_buf[rows]);
            y_buf[j] = y_buf[j] + temp1 * ap[packed(diag)] + alpha * temp2;
            kk += match uplo {
                Uplo::Upper => j + 1,
                Uplo::Lower => n - j,
            };
        }
    }

    scatter(&y_buf, y, stride_y, offset_y);
    Ok(())
}

// ============================================================================
// TRMV: Triangular matrix-vector multiply
// x := op(A) * x
// ============================================================================

/// `x := op(A) * x` for a triangular `n x n` matrix `A`.
pub fn trmv<T: Element>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    stride_x: isize,
) -> Result<()> {
    let (sa1, sa2) = dense_strides(layout, n, n, lda)?;
    trmv_ndarray(uplo, trans, diag, n, a, sa1, sa2, 0, x, stride_x, stride2offset(n, stride_x))
}

/// [`trmv`] over an explicitly strided matrix.
pub fn trmv_ndarray<T: Element>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[T],
    stride_a1: isize,
    stride_a2: isize,
    offset_a: usize,
    x: &mut [T],
    stride_x: isize,
    offset_x: usize,
) -> Result<()> {
    check_stride("stride_x", stride_x)?;
    if n == 0 {
        return Ok(());
    }
    check_matrix("a", a.len(), n, n, stride_a1, stride_a2, offset_a)?;
    check_vector("x", x.len(), n, stride_x, offset_x)?;

    let mut x_buf = gather(x, n, stride_x, offset_x);
    let (view, uplo, flipped) = MatrixView::new(stride_a1, stride_a2, offset_a).column_oriented(uplo);
    let transposed = trans.is_transposed() != flipped;
    let nonunit = diag == Diag::NonUnit;
    let s1 = view.s1;

    match (transposed, uplo) {
        (false, Uplo::Upper) => {
            for j in 0..n {
                let temp = x_buf[j];
                if temp != T::zero() {
                    lane_axpy(temp, a, view.at(0, j), s1, &mut x_buf[..j]);
                    if nonunit {
                        x_buf[j] = x_buf[j] * a[view.at(j, j)];
                    }
                }
            }
        }
        (false, Uplo::Lower) => {
            for j in (0..n).rev() {
                let temp = x_buf[j];
                if temp != T::zero() {
                    lane_axpy(temp, a, view.at(j + 1, j), s1, &mut x_buf[j + 1..]);
                    if nonunit {
                        x_buf[j] = x_buf[j] * a[view.at(j, j)];
                    }
                }
            }
        }
        (true, Uplo::Upper) => {
            for j in (0..n).rev() {
                let mut temp = x_buf[j];
                if nonunit {
                    temp = temp * a[view.at(j, j)];
                }
                temp = temp + lane_dot(a, view.at(0, j), s1, &x_buf[..j]);
                x_buf[j] = temp;
            }
        }
        (true, Uplo::Lower) => {
            for j in 0..n {
                let mut temp = x_buf[j];
                if nonunit {
                    temp = temp * a[view.at(j, j)];
                }
                temp = temp + lane_dot(a, view.at(j + 1, j), s1, &x_buf[j + 1..]);
                x_buf[j] = temp;
            }
        }
    }

    scatter(&x_buf, x, stride_x, offset_x);
    Ok(())
}

// ============================================================================
// TRSV: Triangular solve
// op(A) * x = b, x overwrites b
// ============================================================================

/// Solve `op(A) * x = b` in place for a triangular `n x n` matrix `A`.
///
/// No singularity test is performed; a zero diagonal yields infinities.
pub fn trsv<T: Element>(
    layout: Layout,
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    stride_x: isize,
) -> Result<()> {
    let (sa1, sa2) = dense_strides(layout, n, n, lda)?;
    trsv_ndarray(uplo, trans, diag, n, a, sa1, sa2, 0, x, stride_x, stride2offset(n, stride_x))
}

/// [`trsv`] over an explicitly strided matrix.
pub fn trsv_ndarray<T: Element>(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    a: &[T],
    stride_a1: isize,
    stride_a2: isize,
    offset_a: usize,
    x: &mut [T],
    stride_x: isize,
    offset_x: usize,
) -> Result<()> {
    check_stride("stride_x", stride_x)?;
    if n == 0 {
        return Ok(());
    }
    check_matrix("a", a.len(), n, n, stride_a1, stride_a2, offset_a)?;
    check_vector("x", x.len(), n, stride_x, offset_x)?;

    let mut x_buf = gather(x, n, stride_x, offset_x);
    let (view, uplo, flipped) = MatrixView::new(stride_a1, stride_a2, offset_a).column_oriented(uplo);
    let transposed = trans.is_transposed() != flipped;
    let nonunit = diag == Diag::NonUnit;
    let s1 = view.s1;

    match (transposed, uplo) {
        // Back substitution, eliminating column j from the rows above it.
        (false, Uplo::Upper) => {
            for j in (0..n).rev() {
                if x_buf[j] != T::zero() {
                    if nonunit {
                        x_buf[j] = x_buf[j] / a[view.at(j, j)];
                    }
                    let temp = x_buf[j];
                    lane_axpy(-temp, a, view.at(0, j), s1, &mut x_buf[..j]);
                }
            }
        }
        (false, Uplo::Lower) => {
            for j in 0..n {
                if x_buf[j] != T::zero() {
                    if nonunit {
                        x_buf[j] = x_buf[j] / a[view.at(j, j)];
                    }
                    let temp = x_buf[j];
                    lane_axpy(-temp, a, view.at(j + 1, j), s1, &mut x_buf[j + 1..]);
                }
            }
        }
        // Transposed: each x_j is a dot product against solved entries.
        (true, Uplo::Upper) => {
            for j in 0..n {
                let mut temp = x_buf[j] - lane_dot(a, view.at(0, j), s1, &x_buf[..j]);
                if nonunit {
                    temp = temp / a[view.at(j, j)];
                }
                x_buf[j] = temp;
            }
        }
        (true, Uplo::Lower) => {
            for j in (0..n).rev() {
                let mut temp = x_buf[j] - lane_dot(a, view.at(j + 1, j), s1, &x_buf[j + 1..]);
                if nonunit {
                    temp = temp / a[view.at(j, j)];
                }
                x_buf[j] = temp;
            }
        }
    }

    scatter(&x_buf, x, stride_x, offset_x);
    Ok(())
}

// ============================================================================
// Single / double precision entry points
// ============================================================================

typed!(/// Single-precision GEMV: y := alpha * op(A) * x + beta * y
    sgemv = gemv::<f32>(layout: Layout, trans: Transpose, m: usize, n: usize, alpha: f32, a: &[f32], lda: usize,
        x: &[f32], stride_x: isize, beta: f32, y: &mut [f32], stride_y: isize) -> Result<()>);
typed!(/// Double-precision GEMV: y := alpha * op(A) * x + beta * y
    dgemv = gemv::<f64>(layout: Layout, trans: Transpose, m: usize, n: usize, alpha: f64, a: &[f64], lda: usize,
        x: &[f64], stride_x: isize, beta: f64, y: &mut [f64], stride_y: isize) -> Result<()>);
typed!(sgemv_ndarray = gemv_ndarray::<f32>(trans: Transpose, m: usize, n: usize, alpha: f32, a: &[f32],
    stride_a1: isize, stride_a2: isize, offset_a: usize, x: &[f32], stride_x: isize, offset_x: usize,
    beta: f32, y: &mut [f32], stride_y: isize, offset_y: usize) -> Result<()>);
typed!(dgemv_ndarray = gemv_ndarray::<f64>(trans: Transpose, m: usize, n: usize, alpha: f64, a: &[f64],
    stride_a1: isize, stride_a2: isize, offset_a: usize, x: &[f64], stride_x: isize, offset_x: usize,
    beta: f64, y: &mut [f64], stride_y: isize, offset_y: usize) -> Result<()>);

typed!(/// Single-precision GER: A := alpha * x * y^T + A
    sger = ger::<f32>(layout: Layout, m: usize, n: usize, alpha: f32, x: &[f32], stride_x: isize,
        y: &[f32], stride_y: isize, a: &mut [f32], lda: usize) -> Result<()>);
typed!(/// Double-precision GER: A := alpha * x * y^T + A
    dger = ger::<f64>(layout: Layout, m: usize, n: usize, alpha: f64, x: &[f64], stride_x: isize,
        y: &[f64], stride_y: isize, a: &mut [f64], lda: usize) -> Result<()>);
typed!(sger_ndarray = ger_ndarray::<f32>(m: usize, n: usize, alpha: f32, x: &[f32], stride_x: isize, offset_x: usize,
    y: &[f32], stride_y: isize, offset_y: usize, a: &mut [f32], stride_a1: isize, stride_a2: isize,
    offset_a: usize) -> Result<()>);
typed!(dger_ndarray = ger_ndarray::<f64>(m: usize, n: usize, alpha: f64, x: &[f64], stride_x: isize, offset_x: usize,
    y: &[f64], stride_y: isize, offset_y: usize, a: &mut [f64], stride_a1: isize, stride_a2: isize,
    offset_a: usize) -> Result<()>);

typed!(/// Single-precision SYMV: y := alpha * A * x + beta * y
    ssymv = symv::<f32>(layout: Layout, uplo: Uplo, n: usize, alpha: f32, a: &[f32], lda: usize,
        x: &[f32], stride_x: isize, beta: f32, y: &mut [f32], stride_y: isize) -> Result<()>);
typed!(/// Double-precision SYMV: y := alpha * A * x + beta * y
    dsymv = symv::<f64>(layout: Layout, uplo: Uplo, n: usize, alpha: f64, a: &[f64], lda: usize,
        x: &[f64], stride_x: isize, beta: f64, y: &mut [f64], stride_y: isize) -> Result<()>);
typed!(ssymv_ndarray = symv_ndarray::<f32>(uplo: Uplo, n: usize, alpha: f32, a: &[f32], stride_a1: isize,
    stride_a2: isize, offset_a: usize, x: &[f32], stride_x: isize, offset_x: usize, beta: f32,
    y: &mut [f32], stride_y: isize, offset_y: usize) -> Result<()>);
typed!(dsymv_ndarray = symv_ndarray::<f64>(uplo: Uplo, n: usize, alpha: f64, a: &[f64], stride_a1: isize,
    stride_a2: isize, offset_a: usize, x: &[f64], stride_x: isize, offset_x: usize, beta: f64,
    y: &mut [f64], stride_y: isize, offset_y: usize) -> Result<()>);

typed!(/// Single-precision SYR: A := alpha * x * x^T + A
    ssyr = syr::<f32>(layout: Layout, uplo: Uplo, n: usize, alpha: f32, x: &[f32], stride_x: isize,
        a: &mut [f32], lda: usize) -> Result<()>);
typed!(/// Double-precision SYR: A := alpha * x * x^T + A
    dsyr = syr::<f64>(layout: Layout, uplo: Uplo, n: usize, alpha: f64, x: &[f64], stride_x: isize,
        a: &mut [f64], lda: usize) -> Result<()>);
typed!(ssyr_ndarray = syr_ndarray::<f32>(uplo: Uplo, n: usize, alpha: f32, x: &[f32], stride_x: isize,
    offset_x: usize, a: &mut [f32], stride_a1: isize, stride_a2: isize, offset_a: usize) -> Result<()>);
typed!(dsyr_ndarray = syr_ndarray::<f64>(uplo: Uplo, n: usize, alpha: f64, x: &[f64], stride_x: isize,
    offset_x: usize, a: &mut [f64], stride_a1: isize, stride_a2: isize, offset_a: usize) -> Result<()>);

typed!(/// Single-precision SYR2: A := alpha * x * y^T + alpha * y * x^T + A
    ssyr2 = syr2::<f32>(layout: Layout, uplo: Uplo, n: usize, alpha: f32, x: &[f32], stride_x: isize,
        y: &[f32], stride_y: isize, a: &mut [f32], lda: usize) -> Result<()>);
typed!(/// Double-precision SYR2: A := alpha * x * y^T + alpha * y * x^T + A
    dsyr2 = syr2::<f64>(layout: Layout, uplo: Uplo, n: usize, alpha: f64, x: &[f64], stride_x: isize,
        y: &[f64], stride_y: isize, a: &mut [f64], lda: usize) -> Result<()>);
typed!(ssyr2_ndarray = syr2_ndarray::<f32>(uplo: Uplo, n: usize, alpha: f32, x: &[f32], stride_x: isize,
    offset_x: usize, y: &[f32], stride_y: isize, offset_y: usize, a: &mut [f32], stride_a1: isize,
    stride_a2: isize, offset_a: usize) -> Result<()>);
typed!(dsyr2_ndarray = syr2_ndarray::<f64>(uplo: Uplo, n: usize, alpha: f64, x: &[f64], stride_x: isize,
    offset_x: usize, y: &[f64], stride_y: isize, offset_y: usize, a: &mut [f64], stride_a1: isize,
    stride_a2: isize, offset_a: usize) -> Result<()>);

typed!(/// Single-precision SPMV: y := alpha * A * x + beta * y, A packed
    sspmv = spmv::<f32>(layout: Layout, uplo: Uplo, n: usize, alpha: f32, ap: &[f32], x: &[f32],
        stride_x: isize, beta: f32, y: &mut [f32], stride_y: isize) -> Result<()>);
typed!(/// Double-precision SPMV: y := alpha * A * x + beta * y, A packed
    dspmv = spmv::<f64>(layout: Layout, uplo: Uplo, n: usize, alpha: f64, ap: &[f64], x: &[f64],
        stride_x: isize, beta: f64, y: &mut [f64], stride_y: isize) -> Result<()>);
typed!(sspmv_ndarray = spmv_ndarray::<f32>(layout: Layout, uplo: Uplo, n: usize, alpha: f32, ap: &[f32],
    stride_ap: isize, offset_ap: usize, x: &[f32], stride_x: isize, offset_x: usize, beta: f32,
    y: &mut [f32], stride_y: isize, offset_y: usize) -> Result<()>);
typed!(dspmv_ndarray = spmv_ndarray::<f64>(layout: Layout, uplo: Uplo, n: usize, alpha: f64, ap: &[f64],
    stride_ap: isize, offset_ap: usize, x: &[f64], stride_x: isize, offset_x: usize, beta: f64,
    y: &mut [f64], stride_y: isize, offset_y: usize) -> Result<()>);

typed!(/// Single-precision TRMV: x := op(A) * x
    strmv = trmv::<f32>(layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize, a: &[f32],
        lda: usize, x: &mut [f32], stride_x: isize) -> Result<()>);
typed!(/// Double-precision TRMV: x := op(A) * x
    dtrmv = trmv::<f64>(layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize, a: &[f64],
        lda: usize, x: &mut [f64], stride_x: isize) -> Result<()>);
typed!(strmv_ndarray = trmv_ndarray::<f32>(uplo: Uplo, trans: Transpose, diag: Diag, n: usize, a: &[f32],
    stride_a1: isize, stride_a2: isize, offset_a: usize, x: &mut [f32], stride_x: isize,
    offset_x: usize) -> Result<()>);
typed!(dtrmv_ndarray = trmv_ndarray::<f64>(uplo: Uplo, trans: Transpose, diag: Diag, n: usize, a: &[f64],
    stride_a1: isize, stride_a2: isize, offset_a: usize, x: &mut [f64], stride_x: isize,
    offset_x: usize) -> Result<()>);

typed!(/// Single-precision TRSV: solve op(A) * x = b
    strsv = trsv::<f32>(layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize, a: &[f32],
        lda: usize, x: &mut [f32], stride_x: isize) -> Result<()>);
typed!(/// Double-precision TRSV: solve op(A) * x = b
    dtrsv = trsv::<f64>(layout: Layout, uplo: Uplo, trans: Transpose, diag: Diag, n: usize, a: &[f64],
        lda: usize, x: &mut [f64], stride_x: isize) -> Result<()>);
typed!(strsv_ndarray = trsv_ndarray::<f32>(uplo: Uplo, trans: Transpose, diag: Diag, n: usize, a: &[f32],
    stride_a1: isize, stride_a2: isize, offset_a: usize, x: &mut [f32], stride_x: isize,
    offset_x: usize) -> Result<()>);
typed!(dtrsv_ndarray = trsv_ndarray::<f64>(uplo: Uplo, trans: Transpose, diag: Diag, n: usize, a: &[f64],
    stride_a1: isize, stride_a2: isize, offset_a: usize, x: &mut [f64], stride_x: isize,
    offset_x: usize) -> Result<()>);
