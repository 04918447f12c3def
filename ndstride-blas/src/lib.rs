// BLAS functions match CBLAS signatures; many parameters are inherent to the API.
// Numeric kernels use index loops on packed arrays where iterators hurt readability.
#![allow(clippy::too_many_arguments, clippy::needless_range_loop)]

//! # ndstride-blas
//!
//! Pure Rust level-1 and level-2 BLAS over strided buffers.
//!
//! ## BLAS Levels
//!
//! - **Level 1** (vector-vector): `sdot`, `ddot`, `saxpy`, `daxpy`, `sscal`, `dscal`,
//!   `snrm2`, `dnrm2`, `sasum`, `dasum`, `isamax`, `idamax`, `scopy`, `dcopy`,
//!   `sswap`, `dswap`, `srot`, `drot`, `srotg`, `drotg`
//! - **Level 2** (matrix-vector): `sgemv`, `dgemv`, `sger`, `dger`, `ssymv`, `dsymv`,
//!   `ssyr`, `dsyr`, `ssyr2`, `dsyr2`, `sspmv`, `dspmv`, `strmv`, `dtrmv`,
//!   `strsv`, `dtrsv`
//!
//! ## Strides and offsets
//!
//! Every routine has a CBLAS-like main form and an `_ndarray` form. The
//! main form derives each vector's starting offset from its stride, so a
//! negative stride walks the vector back to front; matrices take a
//! `Layout` and a leading dimension. The `_ndarray` form takes explicit
//! offsets and a pair of matrix strides, so transposed or reversed views
//! need no copy.
//!
//! ```
//! use ndstride_blas::level1::{daxpy, ddot};
//!
//! let x = [1.0, 2.0, 3.0];
//! let mut y = [1.0, 1.0, 1.0];
//! daxpy(3, 2.0, &x, 1, &mut y, -1).unwrap();
//! assert_eq!(y, [7.0, 5.0, 3.0]);
//! assert_eq!(ddot(3, &x, 1, &y, 1).unwrap(), 26.0);
//! ```
//!
//! Arguments are validated before any element is touched; a bad stride,
//! leading dimension or out-of-range access is returned as an
//! [`ndstride_core::Error`].

/// Fixed-precision entry point forwarding to a generic kernel.
macro_rules! typed {
    ($(#[$meta:meta])* $name:ident = $generic:ident::<$t:ty>($($arg:ident: $aty:ty),* $(,)?) -> $ret:ty) => {
        $(#[$meta])*
        #[inline]
        pub fn $name($($arg: $aty),*) -> $ret {
            $generic::<$t>($($arg),*)
        }
    };
}

pub mod level1;
pub mod level2;

pub use ndstride_core::{Diag, Element, Error, Layout, Result, Transpose, Uplo};
