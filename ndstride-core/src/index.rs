//! Index resolution modes for out-of-range subscripts.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// How an index outside `[0, max]` is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexMode {
    /// Reject out-of-range indices.
    #[default]
    Throw,
    /// Count negative indices from the end, then reject out-of-range ones.
    Normalize,
    /// Clamp into `[0, max]`.
    Clamp,
    /// Wrap modulo `max + 1`.
    Wrap,
}

impl FromStr for IndexMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "throw" => Ok(IndexMode::Throw),
            "normalize" => Ok(IndexMode::Normalize),
            "clamp" => Ok(IndexMode::Clamp),
            "wrap" => Ok(IndexMode::Wrap),
            other => Err(Error::invalid_argument(
                "mode",
                other,
                "\"throw\", \"normalize\", \"clamp\" or \"wrap\"",
            )),
        }
    }
}

impl fmt::Display for IndexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IndexMode::Throw => "throw",
            IndexMode::Normalize => "normalize",
            IndexMode::Clamp => "clamp",
            IndexMode::Wrap => "wrap",
        })
    }
}

/// Resolve `idx` against the inclusive upper bound `max`.
///
/// `max` is `len - 1` for a dimension (or array) of length `len`, which
/// must be non-zero.
#[inline]
pub fn resolve_index(idx: isize, max: usize, mode: IndexMode) -> Result<usize> {
    let max = max as isize;
    let out_of_range = |index| Error::IndexOutOfRange { index, max };
    match mode {
        IndexMode::Throw => {
            if idx < 0 || idx > max {
                return Err(out_of_range(idx));
            }
            Ok(idx as usize)
        }
        IndexMode::Normalize => {
            let j = if idx < 0 { idx + max + 1 } else { idx };
            if j < 0 || j > max {
                return Err(out_of_range(idx));
            }
            Ok(j as usize)
        }
        IndexMode::Clamp => Ok(idx.clamp(0, max) as usize),
        IndexMode::Wrap => Ok(idx.rem_euclid(max + 1) as usize),
    }
}

/// Mode for dimension `dim` given a (possibly shorter) list of submodes.
///
/// Submodes cycle: dimension `i` uses `submodes[i % submodes.len()]`.
#[inline]
pub fn submode(submodes: &[IndexMode], dim: usize, fallback: IndexMode) -> IndexMode {
    if submodes.is_empty() {
        fallback
    } else {
        submodes[dim % submodes.len()]
    }
}
