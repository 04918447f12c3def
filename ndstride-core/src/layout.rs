//! CBLAS-style layout and matrix-argument enumerations.
//!
//! The discriminants match the CBLAS constants; the string forms match the
//! names accepted by the strided array APIs (`"row-major"`, `"upper"`, ...).

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Memory layout of a matrix or ndarray view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Layout {
    /// Row-major (C-style): the last dimension is contiguous.
    #[default]
    RowMajor = 101,
    /// Column-major (Fortran-style): the first dimension is contiguous.
    ColMajor = 102,
}

/// Transpose operation applied to a matrix argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Transpose {
    #[default]
    NoTrans = 111,
    Trans = 112,
    /// Conjugate transpose; identical to `Trans` for real matrices.
    ConjTrans = 113,
}

/// Which triangle of a symmetric or triangular matrix is referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Uplo {
    #[default]
    Upper = 121,
    Lower = 122,
}

/// Whether a triangular matrix has an implicit unit diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Diag {
    #[default]
    NonUnit = 131,
    Unit = 132,
}

/// Region of a general matrix to operate on (LAPACK `uplo` with an "all" option).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatrixTriangle {
    Upper,
    Lower,
    #[default]
    All,
}

impl Layout {
    /// Leading dimension of a dense M x N matrix.
    #[inline(always)]
    pub fn leading_dim(self, rows: usize, cols: usize) -> usize {
        match self {
            Layout::RowMajor => cols,
            Layout::ColMajor => rows,
        }
    }

    /// Linear index into a flat array for element (i, j) with leading dimension `ld`.
    #[inline(always)]
    pub fn index(self, i: usize, j: usize, ld: usize) -> usize {
        match self {
            Layout::RowMajor => i * ld + j,
            Layout::ColMajor => j * ld + i,
        }
    }

    /// Explicit `(row stride, column stride)` of a matrix with leading dimension `ld`.
    #[inline(always)]
    pub fn matrix_strides(self, ld: usize) -> (isize, isize) {
        match self {
            Layout::RowMajor => (ld as isize, 1),
            Layout::ColMajor => (1, ld as isize),
        }
    }
}

impl Transpose {
    /// `true` for `Trans` and `ConjTrans`.
    #[inline(always)]
    pub fn is_transposed(self) -> bool {
        !matches!(self, Transpose::NoTrans)
    }
}

impl Uplo {
    /// The opposite triangle.
    #[inline(always)]
    pub fn flip(self) -> Self {
        match self {
            Uplo::Upper => Uplo::Lower,
            Uplo::Lower => Uplo::Upper,
        }
    }
}

macro_rules! string_enum {
    ($ty:ident, $arg:literal, $expected:literal, { $($name:literal => $variant:ident),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    other => Err(Error::invalid_argument($arg, other, $expected)),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let s = match self {
                    $($ty::$variant => $name,)+
                };
                f.write_str(s)
            }
        }
    };
}

string_enum!(Layout, "order", "\"row-major\" or \"column-major\"", {
    "row-major" => RowMajor,
    "column-major" => ColMajor,
});

string_enum!(
    Transpose,
    "trans",
    "\"no-transpose\", \"transpose\" or \"conjugate-transpose\"",
    {
        "no-transpose" => NoTrans,
        "transpose" => Trans,
        "conjugate-transpose" => ConjTrans,
    }
);

string_enum!(Uplo, "uplo", "\"upper\" or \"lower\"", {
    "upper" => Upper,
    "lower" => Lower,
});

string_enum!(Diag, "diag", "\"unit\" or \"non-unit\"", {
    "non-unit" => NonUnit,
    "unit" => Unit,
});

string_enum!(MatrixTriangle, "uplo", "\"upper\", \"lower\" or \"all\"", {
    "upper" => Upper,
    "lower" => Lower,
    "all" => All,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round_trip() {
        for s in ["row-major", "column-major"] {
            assert_eq!(s.parse::<Layout>().unwrap().to_string(), s);
        }
        for s in ["no-transpose", "transpose", "conjugate-transpose"] {
            assert_eq!(s.parse::<Transpose>().unwrap().to_string(), s);
        }
        assert_eq!("lower".parse::<Uplo>().unwrap(), Uplo::Lower);
        assert_eq!("unit".parse::<Diag>().unwrap(), Diag::Unit);
        assert_eq!("all".parse::<MatrixTriangle>().unwrap(), MatrixTriangle::All);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "row".parse::<Layout>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "order", .. }));
        assert!("Upper".parse::<Uplo>().is_err());
        assert!("".parse::<Diag>().is_err());
    }

    #[test]
    fn test_cblas_discriminants() {
        assert_eq!(Layout::RowMajor as u32, 101);
        assert_eq!(Transpose::ConjTrans as u32, 113);
        assert_eq!(Uplo::Lower as u32, 122);
        assert_eq!(Diag::Unit as u32, 132);
    }

    #[test]
    fn test_matrix_strides() {
        assert_eq!(Layout::RowMajor.matrix_strides(5), (5, 1));
        assert_eq!(Layout::ColMajor.matrix_strides(5), (1, 5));
        assert_eq!(Layout::RowMajor.index(1, 2, 4), 6);
        assert_eq!(Layout::ColMajor.index(1, 2, 4), 9);
        assert_eq!(Layout::ColMajor.leading_dim(3, 7), 3);
    }
}
