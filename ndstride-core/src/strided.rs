//! Strided addressing helpers shared by the kernels.
//!
//! A strided vector is `(n, buffer, stride, offset)`: element `i` lives at
//! `offset + i * stride`. Strides may be negative; the offset then points
//! at the element with the largest buffer index.

use crate::error::{Error, Result};

/// Offset of the first indexed element for the "main" (offset-less) API.
///
/// Positive strides start at zero; negative strides start at
/// `(1 - n) * stride` so the vector is traversed back to front.
#[inline(always)]
pub fn stride2offset(n: usize, stride: isize) -> usize {
    if stride >= 0 || n == 0 {
        0
    } else {
        (1 - n as isize).wrapping_mul(stride) as usize
    }
}

/// Buffer index of element `i` of a strided vector.
#[inline(always)]
pub fn index(offset: usize, i: usize, stride: isize) -> usize {
    (offset as isize + i as isize * stride) as usize
}

/// Smallest and largest buffer index touched by a view.
///
/// Returns `None` for an empty view or on arithmetic overflow.
pub fn extent(shape: &[usize], strides: &[isize], offset: usize) -> Option<(isize, isize)> {
    if shape.iter().any(|&d| d == 0) {
        return None;
    }
    let mut lo = offset as isize;
    let mut hi = lo;
    for (&d, &s) in shape.iter().zip(strides) {
        let span = (d as isize - 1).checked_mul(s)?;
        if s > 0 {
            hi = hi.checked_add(span)?;
        } else {
            lo = lo.checked_add(span)?;
        }
    }
    Some((lo, hi))
}

/// Verify that a view addresses only indices inside a buffer of length `len`.
pub fn check_view(
    arg: &'static str,
    len: usize,
    shape: &[usize],
    strides: &[isize],
    offset: usize,
) -> Result<()> {
    if shape.iter().any(|&d| d == 0) {
        return Ok(());
    }
    match extent(shape, strides, offset) {
        Some((lo, _)) if lo < 0 => Err(Error::OutOfBounds { arg, index: lo, len }),
        Some((_, hi)) if hi >= len as isize => Err(Error::OutOfBounds { arg, index: hi, len }),
        Some(_) => Ok(()),
        None => Err(Error::OutOfBounds {
            arg,
            index: isize::MAX,
            len,
        }),
    }
}

/// [`check_view`] for a one-dimensional strided vector.
#[inline]
pub fn check_vector(
    arg: &'static str,
    len: usize,
    n: usize,
    stride: isize,
    offset: usize,
) -> Result<()> {
    check_view(arg, len, &[n], &[stride], offset)
}

/// [`check_view`] for a `rows x cols` matrix with strides `(s1, s2)`.
#[inline]
pub fn check_matrix(
    arg: &'static str,
    len: usize,
    rows: usize,
    cols: usize,
    s1: isize,
    s2: isize,
    offset: usize,
) -> Result<()> {
    check_view(arg, len, &[rows, cols], &[s1, s2], offset)
}

/// Reject a zero stride.
#[inline]
pub fn check_stride(arg: &'static str, stride: isize) -> Result<()> {
    if stride == 0 {
        Err(Error::ZeroStride { arg })
    } else {
        Ok(())
    }
}

/// Iterator over the buffer indices of a strided vector.
#[derive(Debug, Clone)]
pub struct StridedIter {
    next: isize,
    stride: isize,
    remaining: usize,
}

impl StridedIter {
    pub fn new(n: usize, stride: isize, offset: usize) -> Self {
        Self {
            next: offset as isize,
            stride,
            remaining: n,
        }
    }
}

impl Iterator for StridedIter {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.next as usize;
        self.next += self.stride;
        self.remaining -= 1;
        Some(i)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for StridedIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride2offset() {
        assert_eq!(stride2offset(5, 1), 0);
        assert_eq!(stride2offset(5, -1), 4);
        assert_eq!(stride2offset(3, -2), 4);
        assert_eq!(stride2offset(0, -2), 0);
    }

    #[test]
    fn test_extent_negative_strides() {
        assert_eq!(extent(&[2, 3], &[-3, 1], 3), Some((0, 5)));
        assert_eq!(extent(&[2, 0], &[1, 1], 0), None);
    }

    #[test]
    fn test_check_vector() {
        assert!(check_vector("x", 5, 3, 2, 0).is_ok());
        assert!(check_vector("x", 5, 3, -2, 4).is_ok());
        assert!(check_vector("x", 5, 0, 7, 99).is_ok());
        let err = check_vector("x", 5, 3, 2, 1).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfBounds {
                arg: "x",
                index: 5,
                len: 5
            }
        );
        assert!(check_vector("x", 5, 3, -2, 3).is_err());
    }

    #[test]
    fn test_check_matrix() {
        assert!(check_matrix("A", 6, 2, 3, 3, 1, 0).is_ok());
        assert!(check_matrix("A", 6, 2, 3, 1, 2, 0).is_ok());
        assert!(check_matrix("A", 5, 2, 3, 3, 1, 0).is_err());
    }

    #[test]
    fn test_strided_iter() {
        let idx: Vec<usize> = StridedIter::new(3, -2, 4).collect();
        assert_eq!(idx, vec![4, 2, 0]);
        assert_eq!(StridedIter::new(4, 1, 0).len(), 4);
    }
}
