//! Conversions between linear indices, subscripts and buffer indices.

use ndstride_core::index::submode;
use ndstride_core::{resolve_index, Error, IndexMode, Layout, Result};

use crate::shape::{numel, shape2strides};

fn check_nonempty(shape: &[usize], idx: isize) -> Result<usize> {
    let len = numel(shape);
    if len == 0 {
        return Err(Error::IndexOutOfRange { index: idx, max: -1 });
    }
    Ok(len)
}

/// Subscripts of linear index `idx` in a dense array of the given shape.
///
/// Row-major decomposes the last dimension fastest, column-major the first.
pub fn ind2sub(shape: &[usize], idx: isize, layout: Layout, mode: IndexMode) -> Result<Vec<usize>> {
    let len = check_nonempty(shape, idx)?;
    let mut idx = resolve_index(idx, len - 1, mode)?;
    let mut subs = vec![0usize; shape.len()];
    match layout {
        Layout::RowMajor => {
            for i in (0..shape.len()).rev() {
                subs[i] = idx % shape[i];
                idx /= shape[i];
            }
        }
        Layout::ColMajor => {
            for i in 0..shape.len() {
                subs[i] = idx % shape[i];
                idx /= shape[i];
            }
        }
    }
    Ok(subs)
}

/// Linear index of `subs` in a dense array of the given shape.
///
/// `modes` apply per dimension and cycle when shorter than `shape`; an
/// empty slice means [`IndexMode::Throw`] everywhere.
pub fn sub2ind(shape: &[usize], subs: &[isize], layout: Layout, modes: &[IndexMode]) -> Result<usize> {
    if subs.len() != shape.len() {
        return Err(Error::DimensionMismatch {
            expected: shape.len(),
            actual: subs.len(),
        });
    }
    let strides = shape2strides(shape, layout);
    let mut ind = 0usize;
    for (i, (&d, &s)) in shape.iter().zip(subs).enumerate() {
        if d == 0 {
            return Err(Error::IndexOutOfRange { index: s, max: -1 });
        }
        let j = resolve_index(s, d - 1, submode(modes, i, IndexMode::Throw))?;
        ind += j * strides[i] as usize;
    }
    Ok(ind)
}

/// Buffer index of linear view index `idx`.
///
/// The view index is decomposed in `layout` order and each subscript is
/// mapped through the view's strides.
pub fn vind2bind(
    shape: &[usize],
    strides: &[isize],
    offset: usize,
    layout: Layout,
    idx: isize,
    mode: IndexMode,
) -> Result<usize> {
    let len = check_nonempty(shape, idx)?;
    let idx = resolve_index(idx, len - 1, mode)?;
    Ok(view_to_buffer(shape, strides, offset, layout, idx))
}

/// [`vind2bind`] for an already resolved, in-range index.
#[inline]
pub(crate) fn view_to_buffer(
    shape: &[usize],
    strides: &[isize],
    offset: usize,
    layout: Layout,
    mut idx: usize,
) -> usize {
    let mut ind = offset as isize;
    let mut step = |i: usize| {
        let s = idx % shape[i];
        idx /= shape[i];
        ind += s as isize * strides[i];
    };
    match layout {
        Layout::RowMajor => (0..shape.len()).rev().for_each(&mut step),
        Layout::ColMajor => (0..shape.len()).for_each(&mut step),
    }
    ind as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ind2sub() {
        let shape = [3, 3, 3];
        assert_eq!(ind2sub(&shape, 17, Layout::RowMajor, IndexMode::Throw).unwrap(), vec![1, 2, 2]);
        assert_eq!(ind2sub(&shape, 17, Layout::ColMajor, IndexMode::Throw).unwrap(), vec![2, 2, 1]);
        assert!(ind2sub(&shape, 27, Layout::RowMajor, IndexMode::Throw).is_err());
        assert_eq!(ind2sub(&shape, 27, Layout::RowMajor, IndexMode::Wrap).unwrap(), vec![0, 0, 0]);
        assert_eq!(ind2sub(&shape, -1, Layout::RowMajor, IndexMode::Normalize).unwrap(), vec![2, 2, 2]);
        assert_eq!(ind2sub(&shape, 99, Layout::RowMajor, IndexMode::Clamp).unwrap(), vec![2, 2, 2]);
        assert!(ind2sub(&[2, 0], 0, Layout::RowMajor, IndexMode::Wrap).is_err());
    }

    #[test]
    fn test_sub2ind() {
        let shape = [3, 3, 3];
        assert_eq!(sub2ind(&shape, &[1, 2, 2], Layout::RowMajor, &[]).unwrap(), 17);
        assert_eq!(sub2ind(&shape, &[2, 2, 1], Layout::ColMajor, &[]).unwrap(), 17);
        assert_eq!(
            sub2ind(&shape, &[-1, 4, 0], Layout::RowMajor, &[IndexMode::Normalize, IndexMode::Wrap]).unwrap(),
            2 * 9 + 3
        );
        assert!(sub2ind(&shape, &[0, 3, 0], Layout::RowMajor, &[]).is_err());
        assert!(matches!(
            sub2ind(&shape, &[0, 0], Layout::RowMajor, &[]),
            Err(Error::DimensionMismatch { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_vind2bind() {
        // [[1 2] [3 4]] stored with a reversed second dimension.
        let shape = [2, 2];
        let strides = [2, -1];
        assert_eq!(vind2bind(&shape, &strides, 1, Layout::RowMajor, 0, IndexMode::Throw).unwrap(), 1);
        assert_eq!(vind2bind(&shape, &strides, 1, Layout::RowMajor, 1, IndexMode::Throw).unwrap(), 0);
        assert_eq!(vind2bind(&shape, &strides, 1, Layout::RowMajor, 2, IndexMode::Throw).unwrap(), 3);
        assert_eq!(vind2bind(&shape, &strides, 1, Layout::ColMajor, 1, IndexMode::Throw).unwrap(), 3);
        assert!(vind2bind(&shape, &strides, 1, Layout::RowMajor, 4, IndexMode::Throw).is_err());
        assert_eq!(vind2bind(&shape, &strides, 1, Layout::RowMajor, 5, IndexMode::Wrap).unwrap(), 0);
    }

    #[test]
    fn test_zero_dimensional() {
        assert_eq!(ind2sub(&[], 0, Layout::RowMajor, IndexMode::Throw).unwrap(), Vec::<usize>::new());
        assert_eq!(vind2bind(&[], &[], 7, Layout::RowMajor, 0, IndexMode::Throw).unwrap(), 7);
    }
}
