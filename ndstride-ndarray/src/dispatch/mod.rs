//! Element-wise operations over ndarray views.
//!
//! Every operation validates that the views agree in dimensionality and
//! shape, then hands the index arithmetic to the iteration engine, which
//! picks the cheapest traversal (see [`Strategy`]).

mod engine;

pub use engine::{plan, Operand, Strategy};

use ndstride_core::{Error, Result};

use crate::ctor::NdArray;

fn check_shapes(expected: &[usize], actual: &[usize]) -> Result<()> {
    if expected.len() != actual.len() {
        return Err(Error::DimensionMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    if expected != actual {
        return Err(Error::ShapeMismatch {
            left: expected.to_vec(),
            right: actual.to_vec(),
        });
    }
    Ok(())
}

fn check_ndims(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::DimensionMismatch { expected, actual });
    }
    Ok(())
}

/// Fill every element of `x` with successive values of `f()`.
pub fn nullary<T, S, F>(x: &mut NdArray<T, S>, mut f: F) -> Strategy
where
    S: AsRef<[T]> + AsMut<[T]>,
    F: FnMut() -> T,
{
    let (shape, op, data) = x.parts_mut();
    engine::run(shape, &[op], |[i]| data[i] = f())
}

/// `y[i] = f(x[i])` for every element.
///
/// The element types of `x` and `y` may differ.
pub fn unary<T, U, S1, S2, F>(x: &NdArray<T, S1>, y: &mut NdArray<U, S2>, mut f: F) -> Result<Strategy>
where
    T: Copy,
    S1: AsRef<[T]>,
    S2: AsRef<[U]> + AsMut<[U]>,
    F: FnMut(T) -> U,
{
    check_shapes(x.shape(), y.shape())?;
    let (shape, ox, xd) = x.parts();
    let (_, oy, yd) = y.parts_mut();
    Ok(engine::run(shape, &[ox, oy], |[ix, iy]| yd[iy] = f(xd[ix])))
}

/// `z[i] = f(x[i], y[i])` for every element.
pub fn binary<T, U, V, S1, S2, S3, F>(
    x: &NdArray<T, S1>,
    y: &NdArray<U, S2>,
    z: &mut NdArray<V, S3>,
    mut f: F,
) -> Result<Strategy>
where
    T: Copy,
    U: Copy,
    S1: AsRef<[T]>,
    S2: AsRef<[U]>,
    S3: AsRef<[V]> + AsMut<[V]>,
    F: FnMut(T, U) -> V,
{
    check_shapes(x.shape(), y.shape())?;
    check_shapes(x.shape(), z.shape())?;
    let (shape, ox, xd) = x.parts();
    let (_, oy, yd) = y.parts();
    let (_, oz, zd) = z.parts_mut();
    Ok(engine::run(shape, &[ox, oy, oz], |[ix, iy, iz]| {
        zd[iz] = f(xd[ix], yd[iy])
    }))
}

/// Copy every element of `x` into `y`.
pub fn assign<T, S1, S2>(x: &NdArray<T, S1>, y: &mut NdArray<T, S2>) -> Result<Strategy>
where
    T: Copy,
    S1: AsRef<[T]>,
    S2: AsRef<[T]> + AsMut<[T]>,
{
    unary(x, y, |v| v)
}

/// New dense array of `f(x[i])`, with the shape and order of `x`.
pub fn map<T, U, S, F>(x: &NdArray<T, S>, f: F) -> Result<NdArray<U>>
where
    T: Copy,
    U: Clone + Default,
    S: AsRef<[T]>,
    F: FnMut(T) -> U,
{
    let mut out = NdArray::zeros(x.shape(), x.order());
    unary(x, &mut out, f)?;
    Ok(out)
}

/// [`map`] for two-dimensional arrays.
pub fn map2d<T, U, S, F>(x: &NdArray<T, S>, f: F) -> Result<NdArray<U>>
where
    T: Copy,
    U: Clone + Default,
    S: AsRef<[T]>,
    F: FnMut(T) -> U,
{
    check_ndims(2, x.ndims())?;
    map(x, f)
}

/// [`map`] for three-dimensional arrays.
pub fn map3d<T, U, S, F>(x: &NdArray<T, S>, f: F) -> Result<NdArray<U>>
where
    T: Copy,
    U: Clone + Default,
    S: AsRef<[T]>,
    F: FnMut(T) -> U,
{
    check_ndims(3, x.ndims())?;
    map(x, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndstride_core::Layout;

    #[test]
    fn test_unary_row_major() {
        let x = NdArray::from_shape(vec![1.0f64, 2.0, 3.0, 4.0], &[2, 2], Layout::RowMajor).unwrap();
        let mut y = NdArray::<f64>::zeros(&[2, 2], Layout::RowMajor);
        let s = unary(&x, &mut y, |v| v * 10.0).unwrap();
        assert_eq!(s, Strategy::Flattened);
        assert_eq!(y.data(), &[10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_unary_shape_errors() {
        let x = NdArray::<f64>::zeros(&[2, 2], Layout::RowMajor);
        let mut y = NdArray::<f64>::zeros(&[2, 3], Layout::RowMajor);
        assert!(matches!(unary(&x, &mut y, |v| v), Err(Error::ShapeMismatch { .. })));
        let mut y = NdArray::<f64>::zeros(&[4], Layout::RowMajor);
        assert!(matches!(
            unary(&x, &mut y, |v| v),
            Err(Error::DimensionMismatch { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_unary_changes_type() {
        let x = NdArray::from_shape(vec![1.5f32, -2.5], &[2], Layout::RowMajor).unwrap();
        let mut y = NdArray::<i64>::zeros(&[2], Layout::RowMajor);
        unary(&x, &mut y, |v| v as i64).unwrap();
        assert_eq!(y.data(), &[1, -2]);
    }

    #[test]
    fn test_nullary_fills_in_order() {
        let mut x = NdArray::<i32>::zeros(&[2, 3], Layout::ColMajor);
        let mut n = 0;
        nullary(&mut x, || {
            n += 1;
            n
        });
        assert_eq!(x.data(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(x.get(&[1, 0]).unwrap(), 2);
    }

    #[test]
    fn test_binary_and_assign() {
        let x = NdArray::from_shape(vec![1, 2, 3, 4, 5, 6], &[2, 3], Layout::RowMajor).unwrap();
        let y = NdArray::from_shape(vec![10, 40, 20, 50, 30, 60], &[2, 3], Layout::ColMajor).unwrap();
        let mut z = NdArray::<i32>::zeros(&[2, 3], Layout::RowMajor);
        binary(&x, &y, &mut z, |a, b| a + b).unwrap();
        assert_eq!(z.data(), &[11, 22, 33, 44, 55, 66]);

        let mut w = NdArray::<i32>::zeros(&[2, 3], Layout::ColMajor);
        assign(&z, &mut w).unwrap();
        assert_eq!(w.data(), &[11, 44, 22, 55, 33, 66]);
    }

    #[test]
    fn test_map_dims() {
        let x = NdArray::from_shape(vec![1.0f64; 8], &[2, 2, 2], Layout::RowMajor).unwrap();
        let y = map3d(&x, |v| v + 1.0).unwrap();
        assert_eq!(y.shape(), &[2, 2, 2]);
        assert!(y.data().iter().all(|&v| v == 2.0));
        assert!(matches!(
            map2d(&x, |v| v),
            Err(Error::DimensionMismatch { expected: 2, actual: 3 })
        ));
        let z: NdArray<bool> = map(&x, |v| v > 0.0).unwrap();
        assert_eq!(z.len(), 8);
    }
}
