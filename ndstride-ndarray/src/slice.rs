//! Slicing of ndarray views (`start:stop:step` per dimension).

use std::fmt;
use std::str::FromStr;

use ndstride_core::{resolve_index, Error, IndexMode, Result};

use crate::ctor::{Dims, NdArray, NdView, Strides};

/// A `start:stop:step` range over one dimension.
///
/// Missing bounds default to the full extent in the direction of `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: isize,
}

impl Default for Slice {
    fn default() -> Self {
        Self::full()
    }
}

impl Slice {
    pub fn new(start: Option<isize>, stop: Option<isize>, step: isize) -> Self {
        Self { start, stop, step }
    }

    /// `:`
    pub fn full() -> Self {
        Self::new(None, None, 1)
    }

    /// Parse `"start:stop:step"`; any part may be empty.
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(Error::InvalidSlice(format!("`{s}` is not of the form start:stop[:step]")));
        }
        let bound = |p: &str| -> Result<Option<isize>> {
            let p = p.trim();
            if p.is_empty() {
                return Ok(None);
            }
            p.parse::<isize>()
                .map(Some)
                .map_err(|_| Error::InvalidSlice(format!("`{p}` is not an integer")))
        };
        let step = match parts.get(2) {
            Some(p) => bound(p)?.unwrap_or(1),
            None => 1,
        };
        if step == 0 {
            return Err(Error::InvalidSlice("step must be non-zero".into()));
        }
        Ok(Self::new(bound(parts[0])?, bound(parts[1])?, step))
    }

    /// Resolve against a dimension of length `n`: `(start, step, len)`.
    pub fn indices(&self, n: usize) -> Result<(isize, isize, usize)> {
        let step = self.step;
        if step == 0 {
            return Err(Error::InvalidSlice("step must be non-zero".into()));
        }
        let n = n as isize;
        let norm = |v: isize, lo: isize, hi: isize| {
            let v = if v < 0 { v + n } else { v };
            v.clamp(lo, hi)
        };
        let (start, len) = if step > 0 {
            let start = self.start.map_or(0, |v| norm(v, 0, n));
            let stop = self.stop.map_or(n, |v| norm(v, 0, n));
            let len = if stop > start { (stop - start + step - 1) / step } else { 0 };
            (start, len)
        } else {
            let start = self.start.map_or(n - 1, |v| norm(v, -1, n - 1));
            let stop = self.stop.map_or(-1, |v| norm(v, -1, n - 1));
            let len = if start > stop { (start - stop - step - 1) / -step } else { 0 };
            (start, len)
        };
        Ok((start, step, len as usize))
    }
}

impl FromStr for Slice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Slice::parse(s)
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(s) = self.start {
            write!(f, "{s}")?;
        }
        f.write_str(":")?;
        if let Some(s) = self.stop {
            write!(f, "{s}")?;
        }
        if self.step != 1 {
            write!(f, ":{}", self.step)?;
        }
        Ok(())
    }
}

/// One per-dimension slicing argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceArg {
    /// Select a single index and drop the dimension.
    Index(isize),
    Slice(Slice),
}

impl From<isize> for SliceArg {
    fn from(i: isize) -> Self {
        SliceArg::Index(i)
    }
}

impl From<Slice> for SliceArg {
    fn from(s: Slice) -> Self {
        SliceArg::Slice(s)
    }
}

impl FromStr for SliceArg {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.contains(':') {
            return Slice::parse(s).map(SliceArg::Slice);
        }
        s.parse::<isize>()
            .map(SliceArg::Index)
            .map_err(|_| Error::InvalidSlice(format!("`{s}` is neither an index nor a slice")))
    }
}

/// A comma-separated list of slicing arguments, one per dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiSlice(pub Vec<SliceArg>);

impl MultiSlice {
    /// Parse e.g. `"1,::2,-1:0:-1"`.
    pub fn parse(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        s.split(',').map(str::parse::<SliceArg>).collect::<Result<Vec<_>>>().map(MultiSlice)
    }

    pub fn args(&self) -> &[SliceArg] {
        &self.0
    }
}

impl FromStr for MultiSlice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MultiSlice::parse(s)
    }
}

impl<T, S: AsRef<[T]>> NdArray<T, S> {
    /// Sub-view selected by one argument per dimension.
    ///
    /// The result shares the buffer. Index arguments drop their dimension
    /// and must be in range (negative indices are rejected).
    pub fn slice(&self, args: &[SliceArg]) -> Result<NdView<'_, T>> {
        if args.len() != self.ndims() {
            return Err(Error::DimensionMismatch {
                expected: self.ndims(),
                actual: args.len(),
            });
        }
        let mut shape = Dims::new();
        let mut strides = Strides::new();
        let mut offset = self.offset() as isize;
        for (i, arg) in args.iter().enumerate() {
            let (d, s) = (self.shape()[i], self.strides()[i]);
            match *arg {
                SliceArg::Index(idx) => {
                    if d == 0 {
                        return Err(Error::IndexOutOfRange { index: idx, max: -1 });
                    }
                    let j = resolve_index(idx, d - 1, IndexMode::Throw)?;
                    offset += j as isize * s;
                }
                SliceArg::Slice(sl) => {
                    let (start, step, len) = sl.indices(d)?;
                    if len > 0 {
                        offset += start * s;
                    }
                    shape.push(len);
                    strides.push(s * step);
                }
            }
        }
        Ok(self.with_geometry(self.data(), shape, strides, offset as usize))
    }

    /// [`slice`](Self::slice) with a textual argument list.
    pub fn slice_str(&self, expr: &str) -> Result<NdView<'_, T>> {
        let ms = MultiSlice::parse(expr)?;
        self.slice(ms.args())
    }
}
