//! # ndstride-strided
//!
//! Loops over one-dimensional strided arrays `(n, buffer, stride, offset)`:
//! - **apply**: `nullary` through `quinary` element-wise kernels.
//! - **mask**: `mskunary`, which skips elements whose mask entry is non-zero.
//! - **map_by**: kernels behind an accessor that may reject elements.
//!
//! Every loop has a `*_ndarray` twin taking explicit offsets.

#![allow(clippy::too_many_arguments)]

pub mod apply;
pub mod map_by;
pub mod mask;

pub use apply::{
    binary, binary_ndarray, nullary, nullary_ndarray, quaternary, quaternary_ndarray, quinary,
    quinary_ndarray, ternary, ternary_ndarray, unary, unary_ndarray,
};
pub use map_by::{map_by, map_by2, map_by2_ndarray, map_by_ndarray};
pub use mask::{mskunary, mskunary_ndarray};
