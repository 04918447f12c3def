// LAPACK routines match reference signatures; many parameters are inherent to the API.
#![allow(clippy::too_many_arguments)]

//! # ndstride-lapack
//!
//! Auxiliary LAPACK routines over strided matrices:
//!
//! - **Row interchanges** (`slaswp` / `dlaswp`): apply the pivots produced by
//!   an LU factorization; pivots are 0-based row indices.
//! - **Matrix copy** (`slacpy` / `dlacpy`): copy all of `A`, or only its upper
//!   or lower triangle, into `B`.
//! - **Out-of-place transpose** (`sge_trans` / `dge_trans`): `B = A^T`.
//!
//! Like the BLAS crate, each routine has a main form taking a `Layout` and
//! leading dimensions and an `_ndarray` form taking explicit strides and
//! offsets. The kernels themselves only move elements, so they are generic
//! over any `T: Copy`.

use ndstride_core::{Error, Layout, Result};

/// Fixed-precision entry point forwarding to a generic routine.
macro_rules! typed {
    ($(#[$meta:meta])* $name:ident = $generic:ident::<$t:ty>($($arg:ident: $aty:ty),* $(,)?) -> $ret:ty) => {
        $(#[$meta])*
        #[inline]
        pub fn $name($($arg: $aty),*) -> $ret {
            $generic::<$t>($($arg),*)
        }
    };
}

pub mod ge_trans;
pub mod lacpy;
pub mod laswp;

pub use ge_trans::*;
pub use lacpy::*;
pub use laswp::*;
pub use ndstride_core::MatrixTriangle;

/// Buffer index of element `(i, j)` of a strided matrix.
#[inline(always)]
pub(crate) fn at(offset: usize, s1: isize, s2: isize, i: usize, j: usize) -> usize {
    (offset as isize + i as isize * s1 + j as isize * s2) as usize
}

/// Strides of a dense `rows x cols` matrix after validating its leading dimension.
pub(crate) fn dense_strides(
    arg: &'static str,
    layout: Layout,
    rows: usize,
    cols: usize,
    ld: usize,
) -> Result<(isize, isize)> {
    let min = layout.leading_dim(rows, cols).max(1);
    if ld < min {
        return Err(Error::InvalidLeadingDimension { arg, value: ld, min });
    }
    Ok(layout.matrix_strides(ld))
}
