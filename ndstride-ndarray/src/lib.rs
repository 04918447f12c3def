//! # ndstride-ndarray
//!
//! Strided n-dimensional views over caller-owned buffers:
//! - **`NdArray`**: shape, strides, offset, order and index modes over any
//!   `AsRef<[T]>` storage, with subscript and linear element access.
//! - **Shape utilities**: dense strides, offsets, stride order, contiguity.
//! - **Index conversion**: `ind2sub`, `sub2ind`, `vind2bind`.
//! - **Slicing**: `start:stop:step` sub-views sharing the buffer.
//! - **Dispatch**: `nullary`, `unary`, `binary`, `map` over views of any
//!   dimensionality, with the traversal chosen from the views' geometry.

pub mod ctor;
pub mod dispatch;
pub mod ind2sub;
pub mod iter;
pub mod shape;
pub mod slice;

pub use ctor::{Flags, NdArray, NdView, NdViewMut};
pub use dispatch::{assign, binary, map, map2d, map3d, nullary, plan, unary, Operand, Strategy};
pub use ind2sub::{ind2sub, sub2ind, vind2bind};
pub use iter::ViewIndices;
pub use shape::{
    is_contiguous, iteration_order, minmax_view_buffer_index, numel, shape2strides, strides2offset,
    strides2order, StrideOrder,
};
pub use slice::{MultiSlice, Slice, SliceArg};
