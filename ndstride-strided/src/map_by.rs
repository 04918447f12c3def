//! Element-wise loops with an accessor in front of the kernel.
//!
//! The accessor sees each input element together with its position and
//! decides what reaches the kernel: `Some(v)` writes `f(v)`, `None` leaves
//! the output element untouched.

use ndstride_core::strided::check_vector;
use ndstride_core::{stride2offset, Result};

/// `y[i] = f(accessor(x[i], i, [ix, iy]))`, skipping elements the accessor rejects.
pub fn map_by<T, V, U, F, A>(
    n: usize,
    x: &[T],
    stride_x: isize,
    y: &mut [U],
    stride_y: isize,
    f: F,
    accessor: A,
) -> Result<()>
where
    T: Copy,
    F: FnMut(V) -> U,
    A: FnMut(T, usize, [usize; 2]) -> Option<V>,
{
    map_by_ndarray(
        n,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
        f,
        accessor,
    )
}

/// [`map_by`] with explicit offsets.
pub fn map_by_ndarray<T, V, U, F, A>(
    n: usize,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    y: &mut [U],
    stride_y: isize,
    offset_y: usize,
    mut f: F,
    mut accessor: A,
) -> Result<()>
where
    T: Copy,
    F: FnMut(V) -> U,
    A: FnMut(T, usize, [usize; 2]) -> Option<V>,
{
    if n == 0 {
        return Ok(());
    }
    check_vector("x", x.len(), n, stride_x, offset_x)?;
    check_vector("y", y.len(), n, stride_y, offset_y)?;
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for i in 0..n {
        let (jx, jy) = (ix as usize, iy as usize);
        if let Some(v) = accessor(x[jx], i, [jx, jy]) {
            y[jy] = f(v);
        }
        ix += stride_x;
        iy += stride_y;
    }
    Ok(())
}

/// `z[i] = f(accessor(x[i], y[i], i, [ix, iy, iz]))` for two inputs.
pub fn map_by2<T1, T2, V1, V2, U, F, A>(
    n: usize,
    x: &[T1],
    stride_x: isize,
    y: &[T2],
    stride_y: isize,
    z: &mut [U],
    stride_z: isize,
    f: F,
    accessor: A,
) -> Result<()>
where
    T1: Copy,
    T2: Copy,
    F: FnMut(V1, V2) -> U,
    A: FnMut(T1, T2, usize, [usize; 3]) -> Option<(V1, V2)>,
{
    map_by2_ndarray(
        n,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
        z,
        stride_z,
        stride2offset(n, stride_z),
        f,
        accessor,
    )
}

/// [`map_by2`] with explicit offsets.
pub fn map_by2_ndarray<T1, T2, V1, V2, U, F, A>(
    n: usize,
    x: &[T1],
    stride_x: isize,
    offset_x: usize,
    y: &[T2],
    stride_y: isize,
    offset_y: usize,
    z: &mut [U],
    stride_z: isize,
    offset_z: usize,
    mut f: F,
    mut accessor: A,
) -> Result<()>
where
    T1: Copy,
    T2: Copy,
    F: FnMut(V1, V2) -> U,
    A: FnMut(T1, T2, usize, [usize; 3]) -> Option<(V1, V2)>,
{
    if n == 0 {
        return Ok(());
    }
    check_vector("x", x.len(), n, stride_x, offset_x)?;
    check_vector("y", y.len(), n, stride_y, offset_y)?;
    check_vector("z", z.len(), n, stride_z, offset_z)?;
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    let mut iz = offset_z as isize;
    for i in 0..n {
        let (jx, jy, jz) = (ix as usize, iy as usize, iz as usize);
        if let Some((a, b)) = accessor(x[jx], y[jy], i, [jx, jy, jz]) {
            z[jz] = f(a, b);
        }
        ix += stride_x;
        iy += stride_y;
        iz += stride_z;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_by_skips_rejected() {
        let x = [1.0f64, -2.0, 3.0, -4.0];
        let mut y = [0.0f64; 4];
        map_by(4, &x, 1, &mut y, 1, f64::sqrt, |v, _, _| (v >= 0.0).then_some(v)).unwrap();
        assert_eq!(y, [1.0, 0.0, 3.0f64.sqrt(), 0.0]);
    }

    #[test]
    fn test_map_by_reports_positions() {
        let x = [10, 20, 30];
        let mut y = [0usize; 3];
        let mut seen = Vec::new();
        map_by(3, &x, -1, &mut y, 1, |v: usize| v, |v, i, idx| {
            seen.push((i, idx));
            Some(v as usize + i)
        })
        .unwrap();
        assert_eq!(y, [30, 21, 12]);
        assert_eq!(seen, vec![(0, [2, 0]), (1, [1, 1]), (2, [0, 2])]);
    }

    #[test]
    fn test_map_by2() {
        let x = [1.0f64, 2.0, 3.0];
        let y = [4.0f64, 5.0, 6.0];
        let mut z = [0.0f64; 3];
        map_by2(3, &x, 1, &y, 1, &mut z, 1, |a: f64, b: f64| a * b, |a, b, i, _| {
            (i != 1).then_some((a, b))
        })
        .unwrap();
        assert_eq!(z, [4.0, 0.0, 18.0]);

        let mut z = [0.0f64; 4];
        map_by2_ndarray(2, &x, 1, 1, &y, -1, 2, &mut z, 2, 0, |a: f64, b: f64| a + b, |a, b, _, _| Some((a, b)))
            .unwrap();
        assert_eq!(z, [2.0 + 6.0, 0.0, 3.0 + 5.0, 0.0]);
    }
}
