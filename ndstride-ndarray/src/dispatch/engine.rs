//! Iteration engine shared by the element-wise dispatchers.
//!
//! The engine walks `K` views of one common shape and hands the callback
//! the buffer index of the current element in each view. Callers own the
//! buffers; the engine only does index arithmetic.

use std::array;

use ndstride_core::config::{block_size, MAX_BLOCKED_LOOP_DIMS, MAX_NESTED_LOOP_DIMS};
use ndstride_core::Layout;
use smallvec::SmallVec;
use tracing::trace;

use crate::ind2sub::view_to_buffer;
use crate::shape::{is_contiguous, iteration_order, numel};

type DimList = SmallVec<[usize; 8]>;

/// Traversal chosen for a set of views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Zero-dimensional views: one element.
    ZeroDim,
    /// At least one dimension is zero: nothing to do.
    Empty,
    /// One-dimensional strided loop.
    OneDim,
    /// A single non-singleton dimension, walked as a one-dimensional loop.
    Squeezed,
    /// Contiguous views walked as a single run of memory.
    Flattened,
    /// Plain nested loops in the views' order.
    Nested,
    /// Tiled loops over dimensions sorted by stride magnitude.
    Blocked,
    /// Per-element linear view index to buffer index conversion.
    Linear,
}

/// Geometry of one view taking part in a dispatch.
#[derive(Debug, Clone, Copy)]
pub struct Operand<'a> {
    pub strides: &'a [isize],
    pub offset: usize,
    pub order: Layout,
    pub bytes_per_element: usize,
}

/// Strategy the engine uses for views of `shape` described by `ops`.
///
/// All operands must have `shape.len()` strides.
pub fn plan<const K: usize>(shape: &[usize], ops: &[Operand<'_>; K]) -> Strategy {
    let nd = shape.len();
    if nd == 0 {
        return Strategy::ZeroDim;
    }
    if numel(shape) == 0 {
        return Strategy::Empty;
    }
    if nd == 1 {
        return Strategy::OneDim;
    }
    if shape.iter().filter(|&&d| d != 1).count() <= 1 {
        return Strategy::Squeezed;
    }
    let order = ops.first().map(|o| o.order);
    let uniform = ops
        .iter()
        .all(|o| iteration_order(o.strides) != 0 && Some(o.order) == order);
    if uniform {
        let contiguous = ops.iter().all(|o| is_contiguous(shape, o.strides, o.offset));
        if contiguous && same_walk(shape, ops) {
            return Strategy::Flattened;
        }
        if nd <= MAX_NESTED_LOOP_DIMS {
            return Strategy::Nested;
        }
    }
    if nd <= MAX_BLOCKED_LOOP_DIMS {
        return Strategy::Blocked;
    }
    Strategy::Linear
}

/// Whether contiguous views visit logical elements in the same memory order.
fn same_walk<const K: usize>(shape: &[usize], ops: &[Operand<'_>; K]) -> bool {
    let Some(first) = ops.first() else {
        return true;
    };
    shape
        .iter()
        .enumerate()
        .filter(|&(_, &d)| d > 1)
        .all(|(i, _)| {
            ops.iter()
                .all(|o| o.strides[i].unsigned_abs() == first.strides[i].unsigned_abs())
        })
}

/// Visit every element of the views, calling `f` with one buffer index per view.
pub(crate) fn run<const K: usize, F>(shape: &[usize], ops: &[Operand<'_>; K], mut f: F) -> Strategy
where
    F: FnMut([usize; K]),
{
    let strategy = plan(shape, ops);
    trace!(
        strategy = ?strategy,
        ndims = shape.len(),
        len = numel(shape),
        arrays = K,
        "ndarray dispatch"
    );
    let offsets: [isize; K] = array::from_fn(|k| ops[k].offset as isize);
    match strategy {
        Strategy::ZeroDim => f(array::from_fn(|k| ops[k].offset)),
        Strategy::Empty => {}
        Strategy::OneDim => {
            let steps = array::from_fn(|k| ops[k].strides[0]);
            strided_loop(shape[0], steps, offsets, &mut f);
        }
        Strategy::Squeezed => {
            let d = shape.iter().position(|&d| d != 1).unwrap_or(0);
            let steps = array::from_fn(|k| ops[k].strides[d]);
            strided_loop(shape[d], steps, offsets, &mut f);
        }
        Strategy::Flattened => {
            let steps = array::from_fn(|k| iteration_order(ops[k].strides) as isize);
            strided_loop(numel(shape), steps, offsets, &mut f);
        }
        Strategy::Nested => {
            let nd = shape.len();
            let dims: DimList = match ops[0].order {
                Layout::RowMajor => (0..nd).rev().collect(),
                Layout::ColMajor => (0..nd).collect(),
            };
            nested_loop(shape, ops, &dims, offsets, &mut f);
        }
        Strategy::Blocked => blocked_loop(shape, ops, offsets, &mut f),
        Strategy::Linear => {
            let order = ops[0].order;
            for i in 0..numel(shape) {
                f(array::from_fn(|k| {
                    view_to_buffer(shape, ops[k].strides, ops[k].offset, order, i)
                }));
            }
        }
    }
    strategy
}

#[inline]
fn strided_loop<const K: usize, F>(n: usize, steps: [isize; K], start: [isize; K], f: &mut F)
where
    F: FnMut([usize; K]),
{
    let mut p = start;
    for _ in 0..n {
        f(p.map(|v| v as usize));
        for k in 0..K {
            p[k] += steps[k];
        }
    }
}

/// Nested loops over `shape`; `dims` lists dimensions innermost first.
fn nested_loop<const K: usize, F>(
    shape: &[usize],
    ops: &[Operand<'_>; K],
    dims: &[usize],
    start: [isize; K],
    f: &mut F,
) where
    F: FnMut([usize; K]),
{
    let nd = dims.len();
    let inner = dims[0];
    let n0 = shape[inner];
    let d0: [isize; K] = array::from_fn(|k| ops[k].strides[inner]);
    let mut counters: DimList = SmallVec::from_elem(0, nd);
    let mut pos = start;
    loop {
        strided_loop(n0, d0, pos, f);
        let mut j = 1;
        loop {
            if j == nd {
                return;
            }
            let dim = dims[j];
            counters[j] += 1;
            for k in 0..K {
                pos[k] += ops[k].strides[dim];
            }
            if counters[j] < shape[dim] {
                break;
            }
            for k in 0..K {
                pos[k] -= ops[k].strides[dim] * shape[dim] as isize;
            }
            counters[j] = 0;
            j += 1;
        }
    }
}

/// Tiled traversal: dimensions sorted by the first view's stride magnitude
/// (smallest innermost), each cut into blocks sized to a cache line.
fn blocked_loop<const K: usize, F>(shape: &[usize], ops: &[Operand<'_>; K], start: [isize; K], f: &mut F)
where
    F: FnMut([usize; K]),
{
    let nd = shape.len();
    let mut dims: DimList = (0..nd).collect();
    dims.sort_by_key(|&i| ops[0].strides[i].unsigned_abs());

    let max_bytes = ops.iter().map(|o| o.bytes_per_element).max().unwrap_or(0);
    let bsize = block_size(max_bytes);

    let mut block_starts: DimList = SmallVec::from_elem(0, nd);
    let mut tile: DimList = shape.iter().copied().collect();
    loop {
        let mut base = start;
        for (j, &d) in dims.iter().enumerate() {
            tile[d] = bsize.min(shape[d] - block_starts[j]);
            for k in 0..K {
                base[k] += block_starts[j] as isize * ops[k].strides[d];
            }
        }
        nested_loop(&tile, ops, &dims, base, f);

        let mut j = 0;
        loop {
            if j == nd {
                return;
            }
            block_starts[j] += bsize;
            if block_starts[j] < shape[dims[j]] {
                break;
            }
            block_starts[j] = 0;
            j += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(strides: &[isize], offset: usize, order: Layout) -> Operand<'_> {
        Operand {
            strides,
            offset,
            order,
            bytes_per_element: 8,
        }
    }

    fn collect<const K: usize>(shape: &[usize], ops: &[Operand<'_>; K]) -> (Strategy, Vec<[usize; K]>) {
        let mut seen = Vec::new();
        let s = run(shape, ops, |idx| seen.push(idx));
        (s, seen)
    }

    #[test]
    fn test_trivial_strategies() {
        let (s, seen) = collect(&[], &[op(&[], 3, Layout::RowMajor)]);
        assert_eq!(s, Strategy::ZeroDim);
        assert_eq!(seen, vec![[3]]);

        let (s, seen) = collect(&[2, 0], &[op(&[1, 1], 0, Layout::RowMajor)]);
        assert_eq!(s, Strategy::Empty);
        assert!(seen.is_empty());

        let (s, seen) = collect(&[3], &[op(&[-2], 4, Layout::RowMajor)]);
        assert_eq!(s, Strategy::OneDim);
        assert_eq!(seen, vec![[4], [2], [0]]);

        let (s, seen) = collect(&[1, 3, 1], &[op(&[9, 3, 1], 1, Layout::RowMajor)]);
        assert_eq!(s, Strategy::Squeezed);
        assert_eq!(seen, vec![[1], [4], [7]]);
    }

    #[test]
    fn test_flattened_pairs_logical_elements() {
        // x row-major ascending, y row-major with both strides negated.
        let (s, seen) = collect(
            &[2, 2],
            &[op(&[2, 1], 0, Layout::RowMajor), op(&[-2, -1], 3, Layout::RowMajor)],
        );
        assert_eq!(s, Strategy::Flattened);
        assert_eq!(seen, vec![[0, 3], [1, 2], [2, 1], [3, 0]]);
    }

    #[test]
    fn test_mismatched_memory_order_is_not_flattened() {
        let (s, seen) = collect(
            &[2, 3],
            &[op(&[3, 1], 0, Layout::RowMajor), op(&[1, 2], 0, Layout::RowMajor)],
        );
        assert_eq!(s, Strategy::Nested);
        assert_eq!(seen, vec![[0, 0], [1, 2], [2, 4], [3, 1], [4, 3], [5, 5]]);
    }

    #[test]
    fn test_mixed_signs_use_blocked() {
        let (s, mut seen) = collect(&[3, 20], &[op(&[-20, 1], 40, Layout::RowMajor)]);
        assert_eq!(s, Strategy::Blocked);
        assert_eq!(seen.len(), 60);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 60);
        assert_eq!(seen.first(), Some(&[0]));
        assert_eq!(seen.last(), Some(&[59]));
    }

    #[test]
    fn test_linear_beyond_blocked_limit() {
        let nd = MAX_BLOCKED_LOOP_DIMS + 1;
        let shape = vec![2; nd];
        let mut strides = vec![0isize; nd];
        let mut s = 1;
        for st in strides.iter_mut().rev() {
            *st = s;
            s *= 2;
        }
        strides[0] = -strides[0];
        let offset = strides[0].unsigned_abs();
        let (strategy, seen) = collect(&shape, &[op(&strides, offset, Layout::RowMajor)]);
        assert_eq!(strategy, Strategy::Linear);
        assert_eq!(seen.len(), 1 << nd);
        assert_eq!(seen[0], [offset]);
        assert_eq!(seen[1], [offset + 1]);
    }
}
