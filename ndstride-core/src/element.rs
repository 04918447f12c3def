//! Floating-point element trait used by the generic kernels.
//!
//! Kernels are written once over `T: Element`; the contiguous fast paths
//! route to the SIMD primitives for `f32`/`f64` when the `simd` feature is on.

use std::fmt::Debug;

use num_traits::Float;

#[cfg(feature = "simd")]
use crate::simd;

/// Real floating-point element with contiguous vector fast paths.
pub trait Element: Float + Default + Debug + Send + Sync + 'static {
    /// `sum(a[i] * b[i])` over two equal-length unit-stride slices.
    fn dot(a: &[Self], b: &[Self]) -> Self;

    /// `y[i] += alpha * x[i]` over two equal-length unit-stride slices.
    fn axpy(alpha: Self, x: &[Self], y: &mut [Self]);

    /// `x[i] *= alpha` over a unit-stride slice.
    fn scal(alpha: Self, x: &mut [Self]);

    /// `sum(|x[i]|)` over a unit-stride slice.
    fn asum(x: &[Self]) -> Self;
}

#[cfg(feature = "simd")]
impl Element for f32 {
    #[inline]
    fn dot(a: &[f32], b: &[f32]) -> f32 {
        simd::dot_f32(a, b)
    }
    #[inline]
    fn axpy(alpha: f32, x: &[f32], y: &mut [f32]) {
        simd::axpy_f32(alpha, x, y)
    }
    #[inline]
    fn scal(alpha: f32, x: &mut [f32]) {
        simd::scal_f32(alpha, x)
    }
    #[inline]
    fn asum(x: &[f32]) -> f32 {
        simd::asum_f32(x)
    }
}

#[cfg(feature = "simd")]
impl Element for f64 {
    #[inline]
    fn dot(a: &[f64], b: &[f64]) -> f64 {
        simd::dot_f64(a, b)
    }
    #[inline]
    fn axpy(alpha: f64, x: &[f64], y: &mut [f64]) {
        simd::axpy_f64(alpha, x, y)
    }
    #[inline]
    fn scal(alpha: f64, x: &mut [f64]) {
        simd::scal_f64(alpha, x)
    }
    #[inline]
    fn asum(x: &[f64]) -> f64 {
        simd::asum_f64(x)
    }
}

#[cfg(not(feature = "simd"))]
macro_rules! scalar_element {
    ($($t:ty),*) => {$(
        impl Element for $t {
            #[inline]
            fn dot(a: &[$t], b: &[$t]) -> $t {
                a.iter().zip(b).fold(0.0, |acc, (x, y)| acc + x * y)
            }
            #[inline]
            fn axpy(alpha: $t, x: &[$t], y: &mut [$t]) {
                for (yi, xi) in y.iter_mut().zip(x) {
                    *yi += alpha * xi;
                }
            }
            #[inline]
            fn scal(alpha: $t, x: &mut [$t]) {
                for v in x {
                    *v *= alpha;
                }
            }
            #[inline]
            fn asum(x: &[$t]) -> $t {
                x.iter().fold(0.0, |acc, v| acc + v.abs())
            }
        }
    )*};
}

#[cfg(not(feature = "simd"))]
scalar_element!(f32, f64);
