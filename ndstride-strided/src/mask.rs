//! Masked element-wise loops.

use ndstride_core::strided::check_vector;
use ndstride_core::{stride2offset, Result};

/// `y[i] = f(x[i])` wherever `mask[i] == 0`; masked elements are left untouched.
pub fn mskunary<T, U, F>(
    n: usize,
    x: &[T],
    stride_x: isize,
    mask: &[u8],
    stride_mask: isize,
    y: &mut [U],
    stride_y: isize,
    f: F,
) -> Result<()>
where
    T: Copy,
    F: FnMut(T) -> U,
{
    mskunary_ndarray(
        n,
        x,
        stride_x,
        stride2offset(n, stride_x),
        mask,
        stride_mask,
        stride2offset(n, stride_mask),
        y,
        stride_y,
        stride2offset(n, stride_y),
        f,
    )
}

/// [`mskunary`] with explicit offsets.
pub fn mskunary_ndarray<T, U, F>(
    n: usize,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    mask: &[u8],
    stride_mask: isize,
    offset_mask: usize,
    y: &mut [U],
    stride_y: isize,
    offset_y: usize,
    mut f: F,
) -> Result<()>
where
    T: Copy,
    F: FnMut(T) -> U,
{
    if n == 0 {
        return Ok(());
    }
    check_vector("x", x.len(), n, stride_x, offset_x)?;
    check_vector("mask", mask.len(), n, stride_mask, offset_mask)?;
    check_vector("y", y.len(), n, stride_y, offset_y)?;
    let mut ix = offset_x as isize;
    let mut im = offset_mask as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        if mask[im as usize] == 0 {
            y[iy as usize] = f(x[ix as usize]);
        }
        ix += stride_x;
        im += stride_mask;
        iy += stride_y;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_elements_are_skipped() {
        let x = [1.0f64, 2.0, 3.0, 4.0];
        let mask = [0u8, 1, 0, 1];
        let mut y = [-1.0f64; 4];
        mskunary(4, &x, 1, &mask, 1, &mut y, 1, |v| v * 10.0).unwrap();
        assert_eq!(y, [10.0, -1.0, 30.0, -1.0]);
    }

    #[test]
    fn test_masked_negative_strides() {
        let x = [1.0f64, 2.0, 3.0, 4.0];
        let mask = [1u8, 0];
        let mut y = [0.0f64; 2];
        mskunary_ndarray(2, &x, -2, 3, &mask, 1, 0, &mut y, 1, 0, |v| v).unwrap();
        assert_eq!(y, [0.0, 2.0]);
        assert!(mskunary(3, &x, 1, &mask, 1, &mut y, 1, |v| v).is_err());
    }
}
