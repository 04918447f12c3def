//! # ndstride-core
//!
//! Shared primitives for the ndstride crates:
//! - **Layouts**: CBLAS-style `Layout` / `Transpose` / `Uplo` / `Diag` enumerations.
//! - **Index modes**: resolution of out-of-range subscripts (`throw`, `wrap`, ...).
//! - **Strided addressing**: offsets, extents and bounds checks for strided views.
//! - **Elements**: the `Element` trait and its SIMD fast paths.
//! - **Errors**: the workspace-wide `Error` type.

pub mod config;
pub mod element;
pub mod error;
pub mod index;
pub mod layout;
pub mod strided;

#[cfg(feature = "simd")]
pub mod simd;

pub use element::Element;
pub use error::{Error, Result};
pub use index::{resolve_index, IndexMode};
pub use layout::{Diag, Layout, MatrixTriangle, Transpose, Uplo};
pub use strided::{stride2offset, StridedIter};
