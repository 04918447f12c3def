//! The ndarray view type.

use std::marker::PhantomData;
use std::mem;

use ndstride_core::index::submode;
use ndstride_core::strided::check_view;
use ndstride_core::{resolve_index, Error, IndexMode, Layout, Result};
use smallvec::SmallVec;

use crate::dispatch::Operand;
use crate::ind2sub::view_to_buffer;
use crate::iter::ViewIndices;
use crate::shape::{numel, shape2strides, strides2order, StrideOrder};

pub(crate) type Dims = SmallVec<[usize; 4]>;
pub(crate) type Strides = SmallVec<[isize; 4]>;

/// Contiguity flags of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    pub row_major_contiguous: bool,
    pub column_major_contiguous: bool,
}

/// A strided n-dimensional view over a linear buffer.
///
/// Element `(i0, i1, ...)` lives at `offset + Σ strides[k] * ik`. The
/// storage `S` is anything that derefs to a slice of `T`: an owned `Vec<T>`,
/// a borrowed `&[T]`, or `&mut [T]` for writable views.
#[derive(Debug, Clone)]
pub struct NdArray<T, S = Vec<T>> {
    data: S,
    shape: Dims,
    strides: Strides,
    offset: usize,
    order: Layout,
    mode: IndexMode,
    submodes: SmallVec<[IndexMode; 4]>,
    _marker: PhantomData<T>,
}

/// Read-only view.
pub type NdView<'a, T> = NdArray<T, &'a [T]>;
/// Writable view.
pub type NdViewMut<'a, T> = NdArray<T, &'a mut [T]>;

impl<T, S: AsRef<[T]>> NdArray<T, S> {
    /// Wrap `data` in a view, checking that every addressed element exists.
    pub fn new(data: S, shape: &[usize], strides: &[isize], offset: usize, order: Layout) -> Result<Self> {
        if strides.len() != shape.len() {
            return Err(Error::StrideCountMismatch {
                expected: shape.len(),
                actual: strides.len(),
            });
        }
        check_view("data", data.as_ref().len(), shape, strides, offset)?;
        Ok(Self {
            data,
            shape: shape.iter().copied().collect(),
            strides: strides.iter().copied().collect(),
            offset,
            order,
            mode: IndexMode::Throw,
            submodes: SmallVec::new(),
            _marker: PhantomData,
        })
    }

    /// Dense view of `data` with strides derived from `shape` and `order`.
    pub fn from_shape(data: S, shape: &[usize], order: Layout) -> Result<Self> {
        let strides = shape2strides(shape, order);
        Self::new(data, shape, &strides, 0, order)
    }

    /// Index mode used by [`iget`](Self::iget) / [`iset`](Self::iset).
    pub fn with_mode(mut self, mode: IndexMode) -> Self {
        self.mode = mode;
        self
    }

    /// Per-dimension index modes used by [`get`](Self::get) / [`set`](Self::set).
    ///
    /// Modes cycle when fewer than `ndims` are supplied.
    pub fn with_submodes(mut self, modes: &[IndexMode]) -> Self {
        self.submodes = modes.iter().copied().collect();
        self
    }

    #[inline]
    pub fn ndims(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    pub fn strides(&self) -> &[isize] {
        &self.strides
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn order(&self) -> Layout {
        self.order
    }

    #[inline]
    pub fn mode(&self) -> IndexMode {
        self.mode
    }

    pub fn submodes(&self) -> &[IndexMode] {
        if self.submodes.is_empty() {
            std::slice::from_ref(&self.mode)
        } else {
            &self.submodes
        }
    }

    /// Number of view elements.
    #[inline]
    pub fn len(&self) -> usize {
        numel(&self.shape)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The whole underlying buffer.
    #[inline]
    pub fn data(&self) -> &[T] {
        self.data.as_ref()
    }

    #[inline]
    pub fn bytes_per_element(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Size of the view in bytes.
    pub fn byte_length(&self) -> usize {
        self.len() * self.bytes_per_element()
    }

    pub fn flags(&self) -> Flags {
        let dense = |layout| {
            let expected = shape2strides(&self.shape, layout);
            self.shape
                .iter()
                .zip(self.strides.iter().zip(&expected))
                .all(|(&d, (&s, &e))| d <= 1 || s == e)
        };
        match strides2order(&self.strides) {
            _ if self.is_empty() => Flags::default(),
            StrideOrder::None => Flags::default(),
            _ => Flags {
                row_major_contiguous: dense(Layout::RowMajor),
                column_major_contiguous: dense(Layout::ColMajor),
            },
        }
    }

    fn subs2buffer(&self, subs: &[isize]) -> Result<usize> {
        if subs.len() != self.ndims() {
            return Err(Error::DimensionMismatch {
                expected: self.ndims(),
                actual: subs.len(),
            });
        }
        let mut ind = self.offset as isize;
        for (i, &s) in subs.iter().enumerate() {
            let d = self.shape[i];
            if d == 0 {
                return Err(Error::IndexOutOfRange { index: s, max: -1 });
            }
            let j = resolve_index(s, d - 1, submode(&self.submodes, i, self.mode))?;
            ind += j as isize * self.strides[i];
        }
        Ok(ind as usize)
    }

    fn lin2buffer(&self, idx: isize) -> Result<usize> {
        if self.ndims() == 0 {
            return Ok(self.offset);
        }
        let len = self.len();
        if len == 0 {
            return Err(Error::IndexOutOfRange { index: idx, max: -1 });
        }
        let idx = resolve_index(idx, len - 1, self.mode)?;
        Ok(view_to_buffer(&self.shape, &self.strides, self.offset, self.order, idx))
    }

    /// Element at subscripts `subs`.
    pub fn get(&self, subs: &[isize]) -> Result<T>
    where
        T: Copy,
    {
        let i = self.subs2buffer(subs)?;
        Ok(self.data.as_ref()[i])
    }

    /// Element at linear view index `idx` (in the view's order).
    pub fn iget(&self, idx: isize) -> Result<T>
    where
        T: Copy,
    {
        let i = self.lin2buffer(idx)?;
        Ok(self.data.as_ref()[i])
    }

    /// Buffer indices of all elements in view order.
    pub fn indices(&self) -> ViewIndices<'_> {
        ViewIndices::new(&self.shape, &self.strides, self.offset, self.order)
    }

    /// Copy of the view's elements in view order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Copy,
    {
        let data = self.data.as_ref();
        self.indices().map(|i| data[i]).collect()
    }

    /// Borrowing view with the same geometry.
    pub fn view(&self) -> NdView<'_, T> {
        NdArray {
            data: self.data.as_ref(),
            shape: self.shape.clone(),
            strides: self.strides.clone(),
            offset: self.offset,
            order: self.order,
            mode: self.mode,
            submodes: self.submodes.clone(),
            _marker: PhantomData,
        }
    }

    /// View over `data` with new geometry, keeping order and index modes.
    pub(crate) fn with_geometry<'b>(
        &self,
        data: &'b [T],
        shape: Dims,
        strides: Strides,
        offset: usize,
    ) -> NdView<'b, T> {
        NdArray {
            data,
            shape,
            strides,
            offset,
            order: self.order,
            mode: self.mode,
            submodes: self.submodes.clone(),
            _marker: PhantomData,
        }
    }

    /// Dispatch geometry of this view.
    pub fn operand(&self) -> Operand<'_> {
        Operand {
            strides: &self.strides,
            offset: self.offset,
            order: self.order,
            bytes_per_element: mem::size_of::<T>(),
        }
    }

    pub(crate) fn parts(&self) -> (&[usize], Operand<'_>, &[T]) {
        (&self.shape, self.operand(), self.data.as_ref())
    }

    pub fn into_inner(self) -> S {
        self.data
    }
}

impl<T, S: AsRef<[T]> + AsMut<[T]>> NdArray<T, S> {
    /// Store `value` at subscripts `subs`.
    pub fn set(&mut self, subs: &[isize], value: T) -> Result<()> {
        let i = self.subs2buffer(subs)?;
        self.data.as_mut()[i] = value;
        Ok(())
    }

    /// Store `value` at linear view index `idx`.
    pub fn iset(&mut self, idx: isize, value: T) -> Result<()> {
        let i = self.lin2buffer(idx)?;
        self.data.as_mut()[i] = value;
        Ok(())
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }

    pub(crate) fn parts_mut(&mut self) -> (&[usize], Operand<'_>, &mut [T]) {
        let op = Operand {
            strides: &self.strides,
            offset: self.offset,
            order: self.order,
            bytes_per_element: mem::size_of::<T>(),
        };
        (&self.shape, op, self.data.as_mut())
    }

    /// Mutably borrowing view with the same geometry.
    pub fn view_mut(&mut self) -> NdViewMut<'_, T> {
        NdArray {
            data: self.data.as_mut(),
            shape: self.shape.clone(),
            strides: self.strides.clone(),
            offset: self.offset,
            order: self.order,
            mode: self.mode,
            submodes: self.submodes.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Clone> NdArray<T, Vec<T>> {
    /// Dense array of `shape` filled with `value`.
    pub fn from_elem(shape: &[usize], value: T, order: Layout) -> Self {
        let strides = shape2strides(shape, order);
        NdArray {
            data: vec![value; numel(shape)],
            shape: shape.iter().copied().collect(),
            strides: strides.into_iter().collect(),
            offset: 0,
            order,
            mode: IndexMode::Throw,
            submodes: SmallVec::new(),
            _marker: PhantomData,
        }
    }

    /// Dense array of `shape` filled with `T::default()`.
    pub fn zeros(shape: &[usize], order: Layout) -> Self
    where
        T: Default,
    {
        Self::from_elem(shape, T::default(), order)
    }
}
