//! Out-of-place transpose: `ge_trans`.

use ndstride_core::config::block_size;
use ndstride_core::strided::check_matrix;
use ndstride_core::{Layout, Result};

use crate::{at, dense_strides};

/// `B = A^T` for an `m x n` matrix `A` and an `n x m` output `B`.
pub fn ge_trans<T: Copy>(
    layout: Layout,
    m: usize,
    n: usize,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) -> Result<()> {
    let (sa1, sa2) = dense_strides("lda", layout, m, n, lda)?;
    let (sb1, sb2) = dense_strides("ldb", layout, n, m, ldb)?;
    ge_trans_ndarray(m, n, a, sa1, sa2, 0, b, sb1, sb2, 0)
}

/// [`ge_trans`] over explicitly strided matrices.
///
/// Elements move tile by tile so that neither matrix is walked along its
/// long stride for more than a cache line at a time.
pub fn ge_trans_ndarray<T: Copy>(
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
    check_matrix("b", b.len(), n, m, stride_b1, stride_b2, offset_b)?;

    let bs = block_size(std::mem::size_of::<T>());
    for i0 in (0..m).step_by(bs) {
        let i1 = (i0 + bs).min(m);
        for j0 in (0..n).step_by(bs) {
            let j1 = (j0 + bs).min(n);
            for i in i0..i1 {
                for j in j0..j1 {
                    b[at(offset_b, stride_b1, stride_b2, j, i)] = a[at(offset_a, stride_a1, stride_a2, i, j)];
                }
            }
        }
    }
    Ok(())
}

typed!(/// Single-precision out-of-place transpose.
    sge_trans = ge_trans::<f32>(layout: Layout, m: usize, n: usize, a: &[f32], lda: usize, b: &mut [f32],
        ldb: usize) -> Result<()>);
typed!(/// Double-precision out-of-place transpose.
    dge_trans = ge_trans::<f64>(layout: Layout, m: usize, n: usize, a: &[f64], lda: usize, b: &mut [f64],
        ldb: usize) -> Result<()>);
typed!(sge_trans_ndarray = ge_trans_ndarray::<f32>(m: usize, n: usize, a: &[f32], stride_a1: isize,
    stride_a2: isize, offset_a: usize, b: &mut [f32], stride_b1: isize, stride_b2: isize,
    offset_b: usize) -> Result<()>);
typed!(dge_trans_ndarray = ge_trans_ndarray::<f64>(m: usize, n: usize, a: &[f64], stride_a1: isize,
    stride_a2: isize, offset_a: usize, b: &mut [f64], stride_b1: isize, stride_b2: isize,
    offset_b: usize) -> Result<()>);

#[cfg(test)]
mod tests {
    use super::*;
    use ndstride_core::Error;

    #[test]
    fn test_dge_trans_row_major() {
        // [[1, 2, 3], [4, 5, 6]] -> [[1, 4], [2, 5], [3, 6]]
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut b = [0.0; 6];
        dge_trans(Layout::RowMajor, 2, 3, &a, 3, &mut b, 2).unwrap();
        assert_eq!(b, [1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_sge_trans_col_major_padded() {
        // column-major 2x2 with lda 3: [[1, 3], [2, 4]]
        let a = [1.0f32, 2.0, -1.0, 3.0, 4.0, -1.0];
        let mut b = [0.0f32; 4];
        sge_trans(Layout::ColMajor, 2, 2, &a, 3, &mut b, 2).unwrap();
        assert_eq!(b, [1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_ge_trans_spans_several_tiles() {
        let (m, n) = (19, 13);
        let a: Vec<f64> = (0..m * n).map(|v| v as f64).collect();
        let mut b = vec![0.0; m * n];
        dge_trans(Layout::RowMajor, m, n, &a, n, &mut b, m).unwrap();
        for i in 0..m {
            for j in 0..n {
                assert_eq!(b[j * m + i], a[i * n + j]);
            }
        }
    }

    #[test]
    fn test_ge_trans_ndarray_reversed_output() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let mut b = [0.0; 4];
        // B rows written bottom to top
        dge_trans_ndarray(2, 2, &a, 2, 1, 0, &mut b, -2, 1, 2).unwrap();
        assert_eq!(b, [2.0, 4.0, 1.0, 3.0]);
        assert_eq!(
            dge_trans(Layout::RowMajor, 2, 3, &a, 3, &mut b, 1).unwrap_err(),
            Error::InvalidLeadingDimension { arg: "ldb", value: 1, min: 2 }
        );
    }
}
