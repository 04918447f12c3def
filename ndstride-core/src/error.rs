//! Error type shared by every ndstride crate.
//!
//! Variants follow two families: malformed enumerated arguments
//! (`InvalidArgument`) and values outside their admissible range
//! (strides, leading dimensions, indices, shapes, buffer extents).

use thiserror::Error;

/// Errors reported by ndstride kernels and array views.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An enumerated argument was given a value outside its domain.
    #[error("invalid argument `{arg}`: expected {expected}, got `{value}`")]
    InvalidArgument {
        arg: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A stride which must be non-zero was zero.
    #[error("invalid argument `{arg}`: stride must be non-zero")]
    ZeroStride { arg: &'static str },

    /// A leading dimension smaller than the matrix extent it describes.
    #[error("invalid argument `{arg}`: leading dimension must be >= {min}, got {value}")]
    InvalidLeadingDimension {
        arg: &'static str,
        value: usize,
        min: usize,
    },

    /// A strided access pattern reaches outside the backing buffer.
    #[error("invalid argument `{arg}`: access pattern reaches index {index} of a buffer of length {len}")]
    OutOfBounds {
        arg: &'static str,
        index: isize,
        len: usize,
    },

    /// A logical index exceeded its dimension under `IndexMode::Throw`.
    #[error("index {index} out of range [0, {max}]")]
    IndexOutOfRange { index: isize, max: isize },

    /// Arrays with different numbers of dimensions were combined.
    #[error("dimension mismatch: expected {expected} dimensions, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Arrays with different shapes were combined.
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    /// A strides array whose length disagrees with the shape.
    #[error("expected {expected} strides, got {actual}")]
    StrideCountMismatch { expected: usize, actual: usize },

    /// A slice expression that cannot be applied.
    #[error("invalid slice: {0}")]
    InvalidSlice(String),

    /// A PRNG seed outside the generator's domain.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    /// A PRNG state snapshot incompatible with the generator.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl Error {
    pub fn invalid_argument(
        arg: &'static str,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Error::InvalidArgument {
            arg,
            value: value.into(),
            expected,
        }
    }
}

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;
