//! Buffer indices of a view, in logical (view) order.

use ndstride_core::Layout;
use smallvec::SmallVec;

use crate::shape::numel;

/// Iterator yielding the buffer index of every view element.
///
/// Row-major views advance the last dimension fastest, column-major views
/// the first. A zero-dimensional view yields its offset once.
#[derive(Debug, Clone)]
pub struct ViewIndices<'a> {
    shape: &'a [usize],
    strides: &'a [isize],
    layout: Layout,
    counters: SmallVec<[usize; 4]>,
    pos: isize,
    remaining: usize,
}

impl<'a> ViewIndices<'a> {
    pub fn new(shape: &'a [usize], strides: &'a [isize], offset: usize, layout: Layout) -> Self {
        Self {
            shape,
            strides,
            layout,
            counters: SmallVec::from_elem(0, shape.len()),
            pos: offset as isize,
            remaining: numel(shape),
        }
    }

    fn advance(&mut self, dim: usize) -> bool {
        self.counters[dim] += 1;
        self.pos += self.strides[dim];
        if self.counters[dim] < self.shape[dim] {
            return true;
        }
        self.pos -= self.strides[dim] * self.shape[dim] as isize;
        self.counters[dim] = 0;
        false
    }
}

impl Iterator for ViewIndices<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.pos as usize;
        self.remaining -= 1;
        if self.remaining > 0 {
            let nd = self.shape.len();
            match self.layout {
                Layout::RowMajor => {
                    for dim in (0..nd).rev() {
                        if self.advance(dim) {
                            break;
                        }
                    }
                }
                Layout::ColMajor => {
                    for dim in 0..nd {
                        if self.advance(dim) {
                            break;
                        }
                    }
                }
            }
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ViewIndices<'_> {}
