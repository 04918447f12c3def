//! Row interchanges: `laswp`.
//!
//! Applies `A[k, :] <-> A[ipiv_k, :]` for each `k` in `k1..=k2`, in
//! ascending order, or descending when the increment is negative (which
//! undoes a forward application).

use ndstride_core::strided::check_matrix;
use ndstride_core::{Error, Layout, Result};

use crate::{at, dense_strides};

/// Columns swapped together per pass when rows are not the short-stride lanes.
const COLUMN_BLOCK: usize = 32;

/// Apply the row interchanges `k1..=k2` to the `n` columns of `A`.
///
/// The pivot for row `k` is `ipiv[k1 + (k - k1) * |inc_ipiv|]`. A negative
/// `inc_ipiv` applies the interchanges from `k2` down to `k1`; a zero
/// increment leaves `A` untouched.
pub fn laswp<T: Copy>(
    layout: Layout,
    n: usize,
    a: &mut [T],
    lda: usize,
    k1: usize,
    k2: usize,
    ipiv: &[usize],
    inc_ipiv: isize,
) -> Result<()> {
    // The row count is implied by the pivots, so only row-major storage
    // constrains the leading dimension.
    let (sa1, sa2) = dense_strides("lda", layout, 0, n, lda)?;
    if inc_ipiv == 0 || n == 0 || k1 > k2 {
        return Ok(());
    }
    let step = inc_ipiv.unsigned_abs() as isize;
    let mut pivots = collect_pivots(k1, k2, ipiv, |k| (k1 + (k - k1) * step as usize) as isize)?;
    if inc_ipiv < 0 {
        pivots.reverse();
    }
    swap_rows(n, a, sa1, sa2, 0, &pivots)
}

/// [`laswp`] over an explicitly strided matrix.
///
/// The pivot for row `k` is read at `offset_ipiv + k * stride_ipiv`; `inck`
/// only selects the direction.
pub fn laswp_ndarray<T: Copy>(
    n: usize,
    a: &mut [T],
    stride_a1: isize,
    stride_a2: isize,
    offset_a: usize,
    k1: usize,
    k2: usize,
    inck: isize,
    ipiv: &[usize],
    stride_ipiv: isize,
    offset_ipiv: usize,
) -> Result<()> {
    if inck == 0 || n == 0 || k1 > k2 {
        return Ok(());
    }
    let mut pivots = collect_pivots(k1, k2, ipiv, |k| offset_ipiv as isize + k as isize * stride_ipiv)?;
    if inck < 0 {
        pivots.reverse();
    }
    swap_rows(n, a, stride_a1, stride_a2, offset_a, &pivots)
}

/// `(row, pivot)` pairs for `k1..=k2`, in ascending row order.
fn collect_pivots(
    k1: usize,
    k2: usize,
    ipiv: &[usize],
    position: impl Fn(usize) -> isize,
) -> Result<Vec<(usize, usize)>> {
    (k1..=k2)
        .map(|k| {
            let ip = position(k);
            if ip < 0 || ip >= ipiv.len() as isize {
                return Err(Error::OutOfBounds {
                    arg: "ipiv",
                    index: ip,
                    len: ipiv.len(),
                });
            }
            Ok((k, ipiv[ip as usize]))
        })
        .collect()
}

fn swap_rows<T: Copy>(
    n: usize,
    a: &mut [T],
    s1: isize,
    s2: isize,
    offset: usize,
    pivots: &[(usize, usize)],
) -> Result<()> {
    let rows = pivots.iter().map(|&(k, p)| k.max(p) + 1).max().unwrap_or(0);
    check_matrix("a", a.len(), rows, n, s1, s2, offset)?;

    if s2.unsigned_abs() < s1.unsigned_abs() {
        for &(k, p) in pivots.iter().filter(|(k, p)| k != p) {
            for j in 0..n {
                a.swap(at(offset, s1, s2, k, j), at(offset, s1, s2, p, j));
            }
        }
        return Ok(());
    }
    for j0 in (0..n).step_by(COLUMN_BLOCK) {
        let j1 = (j0 + COLUMN_BLOCK).min(n);
        for &(k, p) in pivots.iter().filter(|(k, p)| k != p) {
            for j in j0..j1 {
                a.swap(at(offset, s1, s2, k, j), at(offset, s1, s2, p, j));
            }
        }
    }
    Ok(())
}

typed!(/// Single-precision row interchanges.
    slaswp = laswp::<f32>(layout: Layout, n: usize, a: &mut [f32], lda: usize, k1: usize, k2: usize,
        ipiv: &[usize], inc_ipiv: isize) -> Result<()>);
typed!(/// Double-precision row interchanges.
    dlaswp = laswp::<f64>(layout: Layout, n: usize, a: &mut [f64], lda: usize, k1: usize, k2: usize,
        ipiv: &[usize], inc_ipiv: isize) -> Result<()>);
typed!(slaswp_ndarray = laswp_ndarray::<f32>(n: usize, a: &mut [f32], stride_a1: isize, stride_a2: isize,
    offset_a: usize, k1: usize, k2: usize, inck: isize, ipiv: &[usize], stride_ipiv: isize,
    offset_ipiv: usize) -> Result<()>);
typed!(dlaswp_ndarray = laswp_ndarray::<f64>(n: usize, a: &mut [f64], stride_a1: isize, stride_a2: isize,
    offset_a: usize, k1: usize, k2: usize, inck: isize, ipiv: &[usize], stride_ipiv: isize,
    offset_ipiv: usize) -> Result<()>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dlaswp_row_major() {
        // rows [0, 1, 2] of a 3x2 matrix
        let mut a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        // row 0 <-> row 2, then row 1 <-> row 2
        dlaswp(Layout::RowMajor, 2, &mut a, 2, 0, 1, &[2, 2], 1).unwrap();
        assert_eq!(a, vec![5.0, 6.0, 1.0, 2.0, 3.0, 4.0]);

        // Negative increment undoes the forward pass.
        dlaswp(Layout::RowMajor, 2, &mut a, 2, 0, 1, &[2, 2], -1).unwrap();
        assert_eq!(a, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_dlaswp_reverses_col_major_rows() {
        let (m, n) = (5, 3);
        let mut a: Vec<f64> = (0..m * n).map(|v| v as f64).collect();
        let original = a.clone();
        dlaswp(Layout::ColMajor, n, &mut a, m, 3, 4, &[9999, 9999, 9999, 1, 0], 1).unwrap();
        for i in 0..m {
            for j in 0..n {
                assert_eq!(a[j * m + i], original[j * m + (m - 1 - i)]);
            }
        }
    }

    #[test]
    fn test_slaswp_zero_increment_and_errors() {
        let mut a = vec![1.0f32, 2.0, 3.0, 4.0];
        slaswp(Layout::RowMajor, 2, &mut a, 2, 0, 1, &[1, 1], 0).unwrap();
        assert_eq!(a, vec![1.0, 2.0, 3.0, 4.0]);

        assert_eq!(
            slaswp(Layout::RowMajor, 2, &mut a, 1, 0, 1, &[1, 1], 1).unwrap_err(),
            Error::InvalidLeadingDimension { arg: "lda", value: 1, min: 2 }
        );
        assert!(matches!(
            slaswp(Layout::RowMajor, 2, &mut a, 2, 0, 1, &[1], 1),
            Err(Error::OutOfBounds { arg: "ipiv", .. })
        ));
        // pivot row outside the buffer
        assert!(matches!(
            slaswp(Layout::RowMajor, 2, &mut a, 2, 0, 0, &[5], 1),
            Err(Error::OutOfBounds { arg: "a", .. })
        ));
        assert_eq!(a, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_dlaswp_ndarray_strided_pivots() {
        // column-major 3x2 embedded at offset 1, pivots every other slot
        let mut a = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let ipiv = [7, 1, 7, 2];
        dlaswp_ndarray(2, &mut a, 1, 3, 1, 0, 1, 1, &ipiv, 2, 1).unwrap();
        // row 0 <-> row 1, then row 1 <-> row 2
        assert_eq!(a, vec![0.0, 2.0, 3.0, 1.0, 5.0, 6.0, 4.0]);
    }
}
