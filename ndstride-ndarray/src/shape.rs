//! Shape and stride arithmetic for ndarray views.
//!
//! Strides are expressed in elements (not bytes) and may be negative.

use ndstride_core::strided::extent;
use ndstride_core::Layout;
use smallvec::SmallVec;

/// Memory order implied by a strides array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrideOrder {
    RowMajor,
    ColMajor,
    /// Both row- and column-major (e.g. one-dimensional or all-singleton views).
    Both,
    /// Neither (mixed ordering of stride magnitudes).
    None,
}

/// Number of elements described by `shape` (1 for a zero-dimensional shape).
#[inline]
pub fn numel(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Dense strides for `shape` in the given layout.
pub fn shape2strides(shape: &[usize], layout: Layout) -> Vec<isize> {
    let mut strides = vec![0isize; shape.len()];
    let mut s = 1isize;
    match layout {
        Layout::RowMajor => {
            for i in (0..shape.len()).rev() {
                strides[i] = s;
                s *= shape[i] as isize;
            }
        }
        Layout::ColMajor => {
            for i in 0..shape.len() {
                strides[i] = s;
                s *= shape[i] as isize;
            }
        }
    }
    strides
}

/// Offset of the first indexed element of a dense buffer traversed with `strides`.
///
/// For every negative stride the first element sits at the far end of that
/// dimension.
pub fn strides2offset(shape: &[usize], strides: &[isize]) -> usize {
    let mut offset = 0isize;
    for (&d, &s) in shape.iter().zip(strides) {
        if s < 0 && d > 0 {
            offset -= s * (d as isize - 1);
        }
    }
    offset as usize
}

/// Memory order implied by `strides` (magnitudes only).
pub fn strides2order(strides: &[isize]) -> StrideOrder {
    if strides.len() <= 1 {
        return StrideOrder::Both;
    }
    let mut row = true;
    let mut col = true;
    for w in strides.windows(2) {
        let (a, b) = (w[0].unsigned_abs(), w[1].unsigned_abs());
        if a < b {
            row = false;
        }
        if a > b {
            col = false;
        }
    }
    match (row, col) {
        (true, true) => StrideOrder::Both,
        (true, false) => StrideOrder::RowMajor,
        (false, true) => StrideOrder::ColMajor,
        (false, false) => StrideOrder::None,
    }
}

/// Iteration direction shared by all strides.
///
/// `1` if no stride is negative, `-1` if no stride is positive, `0` when
/// signs are mixed.
pub fn iteration_order(strides: &[isize]) -> i8 {
    let mut pos = 0usize;
    let mut neg = 0usize;
    for &s in strides {
        if s < 0 {
            neg += 1;
        } else if s > 0 {
            pos += 1;
        }
    }
    match (pos, neg) {
        (_, 0) => 1,
        (0, _) => -1,
        _ => 0,
    }
}

/// Smallest and largest buffer index a view can touch.
///
/// Empty views report `(offset, offset)`.
pub fn minmax_view_buffer_index(shape: &[usize], strides: &[isize], offset: usize) -> (usize, usize) {
    match extent(shape, strides, offset) {
        Some((lo, hi)) => (lo.max(0) as usize, hi.max(0) as usize),
        None => (offset, offset),
    }
}

/// Whether a view occupies a single unbroken run of buffer elements, one
/// element per slot.
///
/// Sorted by magnitude, the strides of the non-singleton dimensions must
/// form a dense chain: the smallest is 1 and each next one is the previous
/// stride times its dimension. Overlapping views such as shape `[3, 3]`
/// with strides `[2, 2]` span exactly `numel` slots but are not contiguous.
pub fn is_contiguous(shape: &[usize], strides: &[isize], offset: usize) -> bool {
    let len = numel(shape);
    if len == 0 {
        return false;
    }
    if iteration_order(strides) == 0 {
        return false;
    }
    let mut dims: SmallVec<[(usize, usize); 8]> = shape
        .iter()
        .zip(strides)
        .filter(|&(&d, _)| d > 1)
        .map(|(&d, &s)| (s.unsigned_abs(), d))
        .collect();
    dims.sort_unstable();
    let mut expected = 1usize;
    for (s, d) in dims {
        if s != expected {
            return false;
        }
        expected *= d;
    }
    let (lo, hi) = minmax_view_buffer_index(shape, strides, offset);
    hi - lo + 1 == len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape2strides() {
        assert_eq!(shape2strides(&[2, 3, 4], Layout::RowMajor), vec![12, 4, 1]);
        assert_eq!(shape2strides(&[2, 3, 4], Layout::ColMajor), vec![1, 2, 6]);
        assert!(shape2strides(&[], Layout::RowMajor).is_empty());
    }

    #[test]
    fn test_strides2offset() {
        assert_eq!(strides2offset(&[2, 3], &[3, 1]), 0);
        assert_eq!(strides2offset(&[2, 3], &[-3, 1]), 3);
        assert_eq!(strides2offset(&[2, 3], &[-3, -1]), 5);
    }

    #[test]
    fn test_strides2order() {
        assert_eq!(strides2order(&[12, 4, 1]), StrideOrder::RowMajor);
        assert_eq!(strides2order(&[1, -2, 6]), StrideOrder::ColMajor);
        assert_eq!(strides2order(&[4, 1, 2]), StrideOrder::None);
        assert_eq!(strides2order(&[1, 1]), StrideOrder::Both);
        assert_eq!(strides2order(&[3]), StrideOrder::Both);
    }

    #[test]
    fn test_iteration_order() {
        assert_eq!(iteration_order(&[3, 1]), 1);
        assert_eq!(iteration_order(&[-3, -1]), -1);
        assert_eq!(iteration_order(&[-3, 1]), 0);
        assert_eq!(iteration_order(&[0, 0]), 1);
    }

    #[test]
    fn test_contiguity() {
        assert!(is_contiguous(&[2, 3], &[3, 1], 0));
        assert!(is_contiguous(&[2, 3], &[-3, -1], 5));
        assert!(!is_contiguous(&[2, 3], &[-3, 1], 3));
        assert!(!is_contiguous(&[2, 3], &[6, 2], 0));
        assert_eq!(minmax_view_buffer_index(&[2, 3], &[6, 2], 1), (1, 11));
        assert!(!is_contiguous(&[0, 3], &[3, 1], 0));
    }

    #[test]
    fn test_contiguity_requires_one_slot_per_element() {
        // Spans slots 0..=8 but revisits 2, 4 and 6 and skips the odd ones.
        assert!(!is_contiguous(&[3, 3], &[2, 2], 0));
        assert!(!is_contiguous(&[2, 2], &[1, 1], 0));
        assert!(!is_contiguous(&[3, 2], &[0, 1], 0));
        assert!(is_contiguous(&[2, 3], &[1, 2], 0));
        assert!(is_contiguous(&[1, 4, 1], &[7, 1, 3], 0));
        assert!(is_contiguous(&[3, 1, 2], &[-1, -5, -3], 5));
    }
}
