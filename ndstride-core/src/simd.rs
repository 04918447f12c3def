//! Contiguous vector primitives on stable SIMD (`wide`): f32x8, f64x4.
//!
//! Only unit-stride slices reach this module; strided callers either
//! walk indices directly or hand over contiguous rows/columns.

use wide::{f32x8, f64x4};

pub const F32_LANES: usize = 8;
pub const F64_LANES: usize = 4;

#[inline(always)]
fn load_f32x8(slice: &[f32]) -> f32x8 {
    let mut arr = [0.0f32; F32_LANES];
    arr.copy_from_slice(&slice[..F32_LANES]);
    f32x8::from(arr)
}

#[inline(always)]
fn load_f64x4(slice: &[f64]) -> f64x4 {
    let mut arr = [0.0f64; F64_LANES];
    arr.copy_from_slice(&slice[..F64_LANES]);
    f64x4::from(arr)
}

// ============================================================================
// DOT
// ============================================================================

/// Inner product of two equal-length slices (4 accumulators).
#[inline]
pub fn dot_f32(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len().min(b.len());
    let step = 4 * F32_LANES;
    let full = n - n % step;

    let mut acc0 = f32x8::ZERO;
    let mut acc1 = f32x8::ZERO;
    let mut acc2 = f32x8::ZERO;
    let mut acc3 = f32x8::ZERO;
    let mut i = 0;
    while i < full {
        acc0 += load_f32x8(&a[i..]) * load_f32x8(&b[i..]);
        acc1 += load_f32x8(&a[i + F32_LANES..]) * load_f32x8(&b[i + F32_LANES..]);
        acc2 += load_f32x8(&a[i + 2 * F32_LANES..]) * load_f32x8(&b[i + 2 * F32_LANES..]);
        acc3 += load_f32x8(&a[i + 3 * F32_LANES..]) * load_f32x8(&b[i + 3 * F32_LANES..]);
        i += step;
    }
    while i + F32_LANES <= n {
        acc0 += load_f32x8(&a[i..]) * load_f32x8(&b[i..]);
        i += F32_LANES;
    }
    let mut sum = ((acc0 + acc1) + (acc2 + acc3)).reduce_add();
    for j in i..n {
        sum += a[j] * b[j];
    }
    sum
}

/// Inner product of two equal-length slices (4 accumulators).
#[inline]
pub fn dot_f64(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len().min(b.len());
    let step = 4 * F64_LANES;
    let full = n - n % step;

    let mut acc0 = f64x4::ZERO;
    let mut acc1 = f64x4::ZERO;
    let mut acc2 = f64x4::ZERO;
    let mut acc3 = f64x4::ZERO;
    let mut i = 0;
    while i < full {
        acc0 += load_f64x4(&a[i..]) * load_f64x4(&b[i..]);
        acc1 += load_f64x4(&a[i + F64_LANES..]) * load_f64x4(&b[i + F64_LANES..]);
        acc2 += load_f64x4(&a[i + 2 * F64_LANES..]) * load_f64x4(&b[i + 2 * F64_LANES..]);
        acc3 += load_f64x4(&a[i + 3 * F64_LANES..]) * load_f64x4(&b[i + 3 * F64_LANES..]);
        i += step;
    }
    while i + F64_LANES <= n {
        acc0 += load_f64x4(&a[i..]) * load_f64x4(&b[i..]);
        i += F64_LANES;
    }
    let mut sum = ((acc0 + acc1) + (acc2 + acc3)).reduce_add();
    for j in i..n {
        sum += a[j] * b[j];
    }
    sum
}

// ============================================================================
// AXPY: y += alpha * x
// ============================================================================

#[inline]
pub fn axpy_f32(alpha: f32, x: &[f32], y: &mut [f32]) {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len().min(y.len());
    let va = f32x8::splat(alpha);
    let mut i = 0;
    while i + F32_LANES <= n {
        let r = load_f32x8(&y[i..]) + va * load_f32x8(&x[i..]);
        y[i..i + F32_LANES].copy_from_slice(&r.to_array());
        i += F32_LANES;
    }
    for j in i..n {
        y[j] += alpha * x[j];
    }
}

#[inline]
pub fn axpy_f64(alpha: f64, x: &[f64], y: &mut [f64]) {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len().min(y.len());
    let va = f64x4::splat(alpha);
    let mut i = 0;
    while i + F64_LANES <= n {
        let r = load_f64x4(&y[i..]) + va * load_f64x4(&x[i..]);
        y[i..i + F64_LANES].copy_from_slice(&r.to_array());
        i += F64_LANES;
    }
    for j in i..n {
        y[j] += alpha * x[j];
    }
}

// ============================================================================
// SCAL: x *= alpha
// ============================================================================

#[inline]
pub fn scal_f32(alpha: f32, x: &mut [f32]) {
    let n = x.len();
    let va = f32x8::splat(alpha);
    let mut i = 0;
    while i + F32_LANES <= n {
        let r = load_f32x8(&x[i..]) * va;
        x[i..i + F32_LANES].copy_from_slice(&r.to_array());
        i += F32_LANES;
    }
    for v in &mut x[i..] {
        *v *= alpha;
    }
}

#[inline]
pub fn scal_f64(alpha: f64, x: &mut [f64]) {
    let n = x.len();
    let va = f64x4::splat(alpha);
    let mut i = 0;
    while i + F64_LANES <= n {
        let r = load_f64x4(&x[i..]) * va;
        x[i..i + F64_LANES].copy_from_slice(&r.to_array());
        i += F64_LANES;
    }
    for v in &mut x[i..] {
        *v *= alpha;
    }
}

// ============================================================================
// ASUM: sum(|x_i|)
// ============================================================================

#[inline]
pub fn asum_f32(x: &[f32]) -> f32 {
    let n = x.len();
    let mut acc = f32x8::ZERO;
    let mut i = 0;
    while i + F32_LANES <= n {
        acc += load_f32x8(&x[i..]).abs();
        i += F32_LANES;
    }
    let mut sum = acc.reduce_add();
    for v in &x[i..] {
        sum += v.abs();
    }
    sum
}

#[inline]
pub fn asum_f64(x: &[f64]) -> f64 {
    let n = x.len();
    let mut acc = f64x4::ZERO;
    let mut i = 0;
    while i + F64_LANES <= n {
        acc += load_f64x4(&x[i..]).abs();
        i += F64_LANES;
    }
    let mut sum = acc.reduce_add();
    for v in &x[i..] {
        sum += v.abs();
    }
    sum
}
