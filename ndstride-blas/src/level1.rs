//! BLAS Level 1: Vector-vector operations.
//!
//! Kernels are generic over [`Element`]; `s*`/`d*` wrappers fix the
//! precision. Unit-stride vectors go straight to the contiguous
//! `Element` primitives (SIMD with the `simd` feature); other strides
//! either gather into contiguous buffers or walk indices directly.
//!
//! Each routine has a main form, whose offsets are derived from the
//! strides, and an `_ndarray` form taking explicit offsets.

use ndstride_core::strided::{check_stride, check_vector};
use ndstride_core::{stride2offset, Element, Result};

// ============================================================================
// Strided gather helpers: copy strided data into contiguous buffers
// ============================================================================

#[inline]
pub(crate) fn gather<T: Copy>(x: &[T], n: usize, stride: isize, offset: usize) -> Vec<T> {
    let mut buf = Vec::with_capacity(n);
    let mut ix = offset as isize;
    for _ in 0..n {
        buf.push(x[ix as usize]);
        ix += stride;
    }
    buf
}

#[inline]
pub(crate) fn scatter<T: Copy>(buf: &[T], dst: &mut [T], stride: isize, offset: usize) {
    let mut ix = offset as isize;
    for &v in buf {
        dst[ix as usize] = v;
        ix += stride;
    }
}

/// Contiguous window `x[offset..offset + n]`, when `stride == 1`.
#[inline]
fn unit<T>(x: &[T], n: usize, stride: isize, offset: usize) -> Option<&[T]> {
    (stride == 1).then(|| &x[offset..offset + n])
}

// ============================================================================
// DOT: inner product
// ============================================================================

/// Dot product `x^T * y`.
pub fn dot<T: Element>(n: usize, x: &[T], stride_x: isize, y: &[T], stride_y: isize) -> Result<T> {
    dot_ndarray(
        n,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
    )
}

/// [`dot`] with explicit offsets.
pub fn dot_ndarray<T: Element>(
    n: usize,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    y: &[T],
    stride_y: isize,
    offset_y: usize,
) -> Result<T> {
    if n == 0 {
        return Ok(T::zero());
    }
    check_vector("x", x.len(), n, stride_x, offset_x)?;
    check_vector("y", y.len(), n, stride_y, offset_y)?;
    if let (Some(xs), Some(ys)) = (unit(x, n, stride_x, offset_x), unit(y, n, stride_y, offset_y)) {
        return Ok(T::dot(xs, ys));
    }
    // Gather strided data into contiguous buffers → vector dot
    let x_buf = gather(x, n, stride_x, offset_x);
    let y_buf = gather(y, n, stride_y, offset_y);
    Ok(T::dot(&x_buf, &y_buf))
}

// ============================================================================
// AXPY: y = alpha * x + y
// ============================================================================

/// `y := alpha * x + y`.
pub fn axpy<T: Element>(
    n: usize,
    alpha: T,
    x: &[T],
    stride_x: isize,
    y: &mut [T],
    stride_y: isize,
) -> Result<()> {
    axpy_ndarray(
        n,
        alpha,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
    )
}

/// [`axpy`] with explicit offsets.
pub fn axpy_ndarray<T: Element>(
    n: usize,
    alpha: T,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    y: &mut [T],
    stride_y: isize,
    offset_y: usize,
) -> Result<()> {
    check_stride("stride_y", stride_y)?;
    if n == 0 || alpha == T::zero() {
        return Ok(());
    }
    check_vector("x", x.len(), n, stride_x, offset_x)?;
    check_vector("y", y.len(), n, stride_y, offset_y)?;
    if stride_y == 1 {
        let ys = &mut y[offset_y..offset_y + n];
        match unit(x, n, stride_x, offset_x) {
            Some(xs) => T::axpy(alpha, xs, ys),
            None => T::axpy(alpha, &gather(x, n, stride_x, offset_x), ys),
        }
        return Ok(());
    }
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        y[iy as usize] = y[iy as usize] + alpha * x[ix as usize];
        ix += stride_x;
        iy += stride_y;
    }
    Ok(())
}

// ============================================================================
// SCAL: x = alpha * x
// ============================================================================

/// `x := alpha * x`. A non-positive stride leaves `x` untouched.
pub fn scal<T: Element>(n: usize, alpha: T, x: &mut [T], stride_x: isize) -> Result<()> {
    if stride_x <= 0 {
        return Ok(());
    }
    scal_ndarray(n, alpha, x, stride_x, 0)
}

/// [`scal`] with an explicit offset; negative strides are allowed.
pub fn scal_ndarray<T: Element>(n: usize, alpha: T, x: &mut [T], stride_x: isize, offset_x: usize) -> Result<()> {
    check_stride("stride_x", stride_x)?;
    if n == 0 {
        return Ok(());
    }
    check_vector("x", x.len(), n, stride_x, offset_x)?;
    if stride_x == 1 {
        T::scal(alpha, &mut x[offset_x..offset_x + n]);
        return Ok(());
    }
    let mut ix = offset_x as isize;
    for _ in 0..n {
        x[ix as usize] = alpha * x[ix as usize];
        ix += stride_x;
    }
    Ok(())
}

// ============================================================================
// NRM2: Euclidean norm
// ============================================================================

/// `||x||_2`. A non-positive stride yields zero.
pub fn nrm2<T: Element>(n: usize, x: &[T], stride_x: isize) -> Result<T> {
    if stride_x <= 0 {
        return Ok(T::zero());
    }
    nrm2_ndarray(n, x, stride_x, 0)
}

/// [`nrm2`] with an explicit offset.
///
/// Accumulates a scaled sum of squares, so no intermediate over- or
/// underflows for representable results. Infinite entries give infinity
/// unless a NaN is also present.
pub fn nrm2_ndarray<T: Element>(n: usize, x: &[T], stride_x: isize, offset_x: usize) -> Result<T> {
    if n == 0 {
        return Ok(T::zero());
    }
    check_vector("x", x.len(), n, stride_x, offset_x)?;
    if n == 1 {
        return Ok(x[offset_x].abs());
    }
    let mut scale = T::zero();
    let mut ssq = T::one();
    let mut infinite = false;
    let mut ix = offset_x as isize;
    for _ in 0..n {
        let v = x[ix as usize];
        if v != T::zero() {
            let a = v.abs();
            if a.is_infinite() {
                infinite = true;
            } else if scale < a {
                let r = scale / a;
                ssq = T::one() + ssq * r * r;
                scale = a;
            } else {
                let r = a / scale;
                ssq = ssq + r * r;
            }
        }
        ix += stride_x;
    }
    let norm = scale * ssq.sqrt();
    if infinite && !norm.is_nan() {
        return Ok(T::infinity());
    }
    Ok(norm)
}

// ============================================================================
// ASUM: sum of absolute values
// ============================================================================

/// `sum(|x_i|)`. A non-positive stride yields zero.
pub fn asum<T: Element>(n: usize, x: &[T], stride_x: isize) -> Result<T> {
    if stride_x <= 0 {
        return Ok(T::zero());
    }
    asum_ndarray(n, x, stride_x, 0)
}

/// [`asum`] with an explicit offset.
pub fn asum_ndarray<T: Element>(n: usize, x: &[T], stride_x: isize, offset_x: usize) -> Result<T> {
    if n == 0 {
        return Ok(T::zero());
    }
    check_vector("x", x.len(), n, stride_x, offset_x)?;
    if let Some(xs) = unit(x, n, stride_x, offset_x) {
        return Ok(T::asum(xs));
    }
    let mut sum = T::zero();
    let mut ix = offset_x as isize;
    for _ in 0..n {
        sum = sum + x[ix as usize].abs();
        ix += stride_x;
    }
    Ok(sum)
}

// ============================================================================
// IAMAX: index of max absolute value
// ============================================================================

/// Index of the first element with maximal `|x_i|`.
///
/// `None` for an empty vector or a non-positive stride.
pub fn iamax<T: Element>(n: usize, x: &[T], stride_x: isize) -> Result<Option<usize>> {
    if stride_x <= 0 {
        return Ok(None);
    }
    iamax_ndarray(n, x, stride_x, 0)
}

/// [`iamax`] with an explicit offset.
pub fn iamax_ndarray<T: Element>(n: usize, x: &[T], stride_x: isize, offset_x: usize) -> Result<Option<usize>> {
    if n == 0 {
        return Ok(None);
    }
    check_vector("x", x.len(), n, stride_x, offset_x)?;
    let mut max_idx = 0;
    let mut max_val = x[offset_x].abs();
    let mut ix = offset_x as isize;
    for i in 1..n {
        ix += stride_x;
        let v = x[ix as usize].abs();
        if v > max_val {
            max_val = v;
            max_idx = i;
        }
    }
    Ok(Some(max_idx))
}

// ============================================================================
// COPY: y = x
// ============================================================================

/// `y := x`.
pub fn copy<T: Element>(n: usize, x: &[T], stride_x: isize, y: &mut [T], stride_y: isize) -> Result<()> {
    copy_ndarray(
        n,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
    )
}

/// [`copy`] with explicit offsets.
pub fn copy_ndarray<T: Element>(
    n: usize,
    x: &[T],
    stride_x: isize,
    offset_x: usize,
    y: &mut [T],
    stride_y: isize,
    offset_y: usize,
) -> Result<()> {
    check_stride("stride_y", stride_y)?;
    if n == 0 {
        return Ok(());
    }
    check_vector("x", x.len(), n, stride_x, offset_x)?;
    check_vector("y", y.len(), n, stride_y, offset_y)?;
    if stride_x == 1 && stride_y == 1 {
        y[offset_y..offset_y + n].copy_from_slice(&x[offset_x..offset_x + n]);
        return Ok(());
    }
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        y[iy as usize] = x[ix as usize];
        ix += stride_x;
        iy += stride_y;
    }
    Ok(())
}

// ============================================================================
// SWAP: x <-> y
// ============================================================================

/// Exchange the elements of `x` and `y`.
pub fn swap<T: Element>(n: usize, x: &mut [T], stride_x: isize, y: &mut [T], stride_y: isize) -> Result<()> {
    swap_ndarray(
        n,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
    )
}

/// [`swap`] with explicit offsets.
pub fn swap_ndarray<T: Element>(
    n: usize,
    x: &mut [T],
    stride_x: isize,
    offset_x: usize,
    y: &mut [T],
    stride_y: isize,
    offset_y: usize,
) -> Result<()> {
    check_stride("stride_x", stride_x)?;
    check_stride("stride_y", stride_y)?;
    if n == 0 {
        return Ok(());
    }
    check_vector("x", x.len(), n, stride_x, offset_x)?;
    check_vector("y", y.len(), n, stride_y, offset_y)?;
    if stride_x == 1 && stride_y == 1 {
        x[offset_x..offset_x + n].swap_with_slice(&mut y[offset_y..offset_y + n]);
        return Ok(());
    }
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        std::mem::swap(&mut x[ix as usize], &mut y[iy as usize]);
        ix += stride_x;
        iy += stride_y;
    }
    Ok(())
}

// ============================================================================
// ROT / ROTG: plane rotations
// ============================================================================

/// Apply the plane rotation `(c, s)` to the pairs `(x_i, y_i)`.
///
/// `x_i := c*x_i + s*y_i`, `y_i := c*y_i - s*x_i`.
pub fn rot<T: Element>(
    n: usize,
    x: &mut [T],
    stride_x: isize,
    y: &mut [T],
    stride_y: isize,
    c: T,
    s: T,
) -> Result<()> {
    rot_ndarray(
        n,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
        c,
        s,
    )
}

/// [`rot`] with explicit offsets.
pub fn rot_ndarray<T: Element>(
    n: usize,
    x: &mut [T],
    stride_x: isize,
    offset_x: usize,
    y: &mut [T],
    stride_y: isize,
    offset_y: usize,
    c: T,
    s: T,
) -> Result<()> {
    check_stride("stride_x", stride_x)?;
    check_stride("stride_y", stride_y)?;
    if n == 0 {
        return Ok(());
    }
    check_vector("x", x.len(), n, stride_x, offset_x)?;
    check_vector("y", y.len(), n, stride_y, offset_y)?;
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        let (xi, yi) = (x[ix as usize], y[iy as usize]);
        x[ix as usize] = c * xi + s * yi;
        y[iy as usize] = c * yi - s * xi;
        ix += stride_x;
        iy += stride_y;
    }
    Ok(())
}

/// Givens rotation constructed by [`rotg`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation<T> {
    /// Rotated length: `[c s; -s c] * [a; b] = [r; 0]`.
    pub r: T,
    /// Reconstruction parameter for `(c, s)`.
    pub z: T,
    pub c: T,
    pub s: T,
}

/// Construct the Givens rotation zeroing `b` in `(a, b)`.
///
/// The sign of `r` follows whichever of `a`, `b` has the larger
/// magnitude.
pub fn rotg<T: Element>(a: T, b: T) -> Rotation<T> {
    let aa = a.abs();
    let ab = b.abs();
    let sigma = if aa > ab { a.signum() } else { b.signum() };
    let scale = aa + ab;
    if scale == T::zero() {
        return Rotation {
            r: T::zero(),
            z: T::zero(),
            c: T::one(),
            s: T::zero(),
        };
    }
    let (sa, sb) = (a / scale, b / scale);
    let r = sigma * scale * (sa * sa + sb * sb).sqrt();
    let c = a / r;
    let s = b / r;
    let z = if aa > ab {
        s
    } else if c != T::zero() {
        T::one() / c
    } else {
        T::one()
    };
    Rotation { r, z, c, s }
}

// ============================================================================
// Single / double precision entry points
// ============================================================================

typed!(/// Single-precision dot product: result = x^T * y
    sdot = dot::<f32>(n: usize, x: &[f32], stride_x: isize, y: &[f32], stride_y: isize) -> Result<f32>);
typed!(/// Double-precision dot product: result = x^T * y
    ddot = dot::<f64>(n: usize, x: &[f64], stride_x: isize, y: &[f64], stride_y: isize) -> Result<f64>);
typed!(sdot_ndarray = dot_ndarray::<f32>(n: usize, x: &[f32], stride_x: isize, offset_x: usize,
    y: &[f32], stride_y: isize, offset_y: usize) -> Result<f32>);
typed!(ddot_ndarray = dot_ndarray::<f64>(n: usize, x: &[f64], stride_x: isize, offset_x: usize,
    y: &[f64], stride_y: isize, offset_y: usize) -> Result<f64>);

typed!(/// Single-precision axpy: y := alpha * x + y
    saxpy = axpy::<f32>(n: usize, alpha: f32, x: &[f32], stride_x: isize, y: &mut [f32], stride_y: isize) -> Result<()>);
typed!(/// Double-precision axpy: y := alpha * x + y
    daxpy = axpy::<f64>(n: usize, alpha: f64, x: &[f64], stride_x: isize, y: &mut [f64], stride_y: isize) -> Result<()>);
typed!(saxpy_ndarray = axpy_ndarray::<f32>(n: usize, alpha: f32, x: &[f32], stride_x: isize, offset_x: usize,
    y: &mut [f32], stride_y: isize, offset_y: usize) -> Result<()>);
typed!(daxpy_ndarray = axpy_ndarray::<f64>(n: usize, alpha: f64, x: &[f64], stride_x: isize, offset_x: usize,
    y: &mut [f64], stride_y: isize, offset_y: usize) -> Result<()>);

typed!(/// Single-precision scal: x := alpha * x
    sscal = scal::<f32>(n: usize, alpha: f32, x: &mut [f32], stride_x: isize) -> Result<()>);
typed!(/// Double-precision scal: x := alpha * x
    dscal = scal::<f64>(n: usize, alpha: f64, x: &mut [f64], stride_x: isize) -> Result<()>);
typed!(sscal_ndarray = scal_ndarray::<f32>(n: usize, alpha: f32, x: &mut [f32], stride_x: isize, offset_x: usize) -> Result<()>);
typed!(dscal_ndarray = scal_ndarray::<f64>(n: usize, alpha: f64, x: &mut [f64], stride_x: isize, offset_x: usize) -> Result<()>);

typed!(/// Single-precision nrm2: ||x||_2
    snrm2 = nrm2::<f32>(n: usize, x: &[f32], stride_x: isize) -> Result<f32>);
typed!(/// Double-precision nrm2: ||x||_2
    dnrm2 = nrm2::<f64>(n: usize, x: &[f64], stride_x: isize) -> Result<f64>);
typed!(snrm2_ndarray = nrm2_ndarray::<f32>(n: usize, x: &[f32], stride_x: isize, offset_x: usize) -> Result<f32>);
typed!(dnrm2_ndarray = nrm2_ndarray::<f64>(n: usize, x: &[f64], stride_x: isize, offset_x: usize) -> Result<f64>);

typed!(/// Single-precision asum: sum(|x_i|)
    sasum = asum::<f32>(n: usize, x: &[f32], stride_x: isize) -> Result<f32>);
typed!(/// Double-precision asum: sum(|x_i|)
    dasum = asum::<f64>(n: usize, x: &[f64], stride_x: isize) -> Result<f64>);
typed!(sasum_ndarray = asum_ndarray::<f32>(n: usize, x: &[f32], stride_x: isize, offset_x: usize) -> Result<f32>);
typed!(dasum_ndarray = asum_ndarray::<f64>(n: usize, x: &[f64], stride_x: isize, offset_x: usize) -> Result<f64>);

typed!(/// Single-precision iamax: index of max |x_i|
    isamax = iamax::<f32>(n: usize, x: &[f32], stride_x: isize) -> Result<Option<usize>>);
typed!(/// Double-precision iamax: index of max |x_i|
    idamax = iamax::<f64>(n: usize, x: &[f64], stride_x: isize) -> Result<Option<usize>>);
typed!(isamax_ndarray = iamax_ndarray::<f32>(n: usize, x: &[f32], stride_x: isize, offset_x: usize) -> Result<Option<usize>>);
typed!(idamax_ndarray = iamax_ndarray::<f64>(n: usize, x: &[f64], stride_x: isize, offset_x: usize) -> Result<Option<usize>>);

typed!(/// Single-precision copy: y := x
    scopy = copy::<f32>(n: usize, x: &[f32], stride_x: isize, y: &mut [f32], stride_y: isize) -> Result<()>);
typed!(/// Double-precision copy: y := x
    dcopy = copy::<f64>(n: usize, x: &[f64], stride_x: isize, y: &mut [f64], stride_y: isize) -> Result<()>);
typed!(scopy_ndarray = copy_ndarray::<f32>(n: usize, x: &[f32], stride_x: isize, offset_x: usize,
    y: &mut [f32], stride_y: isize, offset_y: usize) -> Result<()>);
typed!(dcopy_ndarray = copy_ndarray::<f64>(n: usize, x: &[f64], stride_x: isize, offset_x: usize,
    y: &mut [f64], stride_y: isize, offset_y: usize) -> Result<()>);

typed!(/// Single-precision swap: x <-> y
    sswap = swap::<f32>(n: usize, x: &mut [f32], stride_x: isize, y: &mut [f32], stride_y: isize) -> Result<()>);
typed!(/// Double-precision swap: x <-> y
    dswap = swap::<f64>(n: usize, x: &mut [f64], stride_x: isize, y: &mut [f64], stride_y: isize) -> Result<()>);
typed!(sswap_ndarray = swap_ndarray::<f32>(n: usize, x: &mut [f32], stride_x: isize, offset_x: usize,
    y: &mut [f32], stride_y: isize, offset_y: usize) -> Result<()>);
typed!(dswap_ndarray = swap_ndarray::<f64>(n: usize, x: &mut [f64], stride_x: isize, offset_x: usize,
    y: &mut [f64], stride_y: isize, offset_y: usize) -> Result<()>);

typed!(/// Single-precision plane rotation.
    srot = rot::<f32>(n: usize, x: &mut [f32], stride_x: isize, y: &mut [f32], stride_y: isize, c: f32, s: f32) -> Result<()>);
typed!(/// Double-precision plane rotation.
    drot = rot::<f64>(n: usize, x: &mut [f64], stride_x: isize, y: &mut [f64], stride_y: isize, c: f64, s: f64) -> Result<()>);
typed!(srot_ndarray = rot_ndarray::<f32>(n: usize, x: &mut [f32], stride_x: isize, offset_x: usize,
    y: &mut [f32], stride_y: isize, offset_y: usize, c: f32, s: f32) -> Result<()>);
typed!(drot_ndarray = rot_ndarray::<f64>(n: usize, x: &mut [f64], stride_x: isize, offset_x: usize,
    y: &mut [f64], stride_y: isize, offset_y: usize, c: f64, s: f64) -> Result<()>);

typed!(/// Single-precision Givens rotation construction.
    srotg = rotg::<f32>(a: f32, b: f32) -> Rotation<f32>);
typed!(/// Double-precision Givens rotation construction.
    drotg = rotg::<f64>(a: f64, b: f64) -> Rotation<f64>);
