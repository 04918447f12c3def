//! Element-wise loops over one-dimensional strided arrays.
//!
//! Each loop comes in two forms: `op(n, x, stride_x, ...)`, where the
//! starting offset is derived from the stride (negative strides walk the
//! buffer back to front), and `op_ndarray(n, x, stride_x, offset_x, ...)`
//! with explicit offsets. Access patterns are bounds-checked before the
//! loop runs; `n == 0` is a no-op.

use ndstride_core::strided::check_vector;
use ndstride_core::{stride2offset, Result};

// ============================================================================
// NULLARY: x[i] = f()
// ============================================================================

/// Fill a strided array with successive values of `f()`.
pub fn nullary<T, F>(n: usize, x: &mut [T], stride_x: isize, f: F) -> Result<()>
where
    F: FnMut() -> T,
{
    nullary_ndarray(n, x, stride_x, stride2offset(n, stride_x), f)
}

/// [`nullary`] with an explicit offset.
pub fn nullary_ndarray<T, F>(n: usize, x: &mut [T], stride_x: isize, offset_x: usize, mut f: F) -> Result<()>
where
    F: FnMut() -> T,
{
    if n == 0 {
        return Ok(());
    }
    check_vector("x", x.len(), n, stride_x, offset_x)?;
    let mut ix = offset_x as isize;
    for _ in 0..n {
        x[ix as usize] = f();
        ix += stride_x;
    }
    Ok(())
}

// ============================================================================
// UNARY .. QUINARY: out[i] = f(x[i], y[i], ...)
// ============================================================================

macro_rules! strided_nary {
    (
        $(#[$meta:meta])*
        $name:ident, $name_nd:ident, [$(($x:ident, $sx:ident, $ox:ident, $ix:ident, $t:ident)),+]
    ) => {
        $(#[$meta])*
        pub fn $name<$($t: Copy,)+ U, F>(
            n: usize,
            $($x: &[$t], $sx: isize,)+
            out: &mut [U],
            stride_out: isize,
            f: F,
        ) -> Result<()>
        where
            F: FnMut($($t),+) -> U,
        {
            $name_nd(
                n,
                $($x, $sx, stride2offset(n, $sx),)+
                out,
                stride_out,
                stride2offset(n, stride_out),
                f,
            )
        }

        #[doc = concat!("[`", stringify!($name), "`] with explicit offsets.")]
        pub fn $name_nd<$($t: Copy,)+ U, F>(
            n: usize,
            $($x: &[$t], $sx: isize, $ox: usize,)+
            out: &mut [U],
            stride_out: isize,
            offset_out: usize,
            mut f: F,
        ) -> Result<()>
        where
            F: FnMut($($t),+) -> U,
        {
            if n == 0 {
                return Ok(());
            }
            $(check_vector(stringify!($x), $x.len(), n, $sx, $ox)?;)+
            check_vector("out", out.len(), n, stride_out, offset_out)?;
            $(let mut $ix = $ox as isize;)+
            let mut io = offset_out as isize;
            for _ in 0..n {
                out[io as usize] = f($($x[$ix as usize]),+);
                $($ix += $sx;)+
                io += stride_out;
            }
            Ok(())
        }
    };
}

strided_nary!(
    /// `out[i] = f(x[i])`.
    unary, unary_ndarray,
    [(x, stride_x, offset_x, ix, T)]
);

strided_nary!(
    /// `out[i] = f(x[i], y[i])`.
    binary, binary_ndarray,
    [(x, stride_x, offset_x, ix, T1), (y, stride_y, offset_y, iy, T2)]
);

strided_nary!(
    /// `out[i] = f(x[i], y[i], z[i])`.
    ternary, ternary_ndarray,
    [
        (x, stride_x, offset_x, ix, T1),
        (y, stride_y, offset_y, iy, T2),
        (z, stride_z, offset_z, iz, T3)
    ]
);

strided_nary!(
    /// `out[i] = f(x[i], y[i], z[i], w[i])`.
    quaternary, quaternary_ndarray,
    [
        (x, stride_x, offset_x, ix, T1),
        (y, stride_y, offset_y, iy, T2),
        (z, stride_z, offset_z, iz, T3),
        (w, stride_w, offset_w, iw, T4)
    ]
);

strided_nary!(
    /// `out[i] = f(x[i], y[i], z[i], w[i], u[i])`.
    quinary, quinary_ndarray,
    [
        (x, stride_x, offset_x, ix, T1),
        (y, stride_y, offset_y, iy, T2),
        (z, stride_z, offset_z, iz, T3),
        (w, stride_w, offset_w, iw, T4),
        (u, stride_u, offset_u, iu, T5)
    ]
);

#[cfg(test)]
mod tests {
    use super::*;
    use ndstride_core::Error;

    #[test]
    fn test_nullary() {
        let mut x = [0.0f64; 6];
        let mut k = 0.0;
        nullary(3, &mut x, -2, || {
            k += 1.0;
            k
        })
        .unwrap();
        assert_eq!(x, [3.0, 0.0, 2.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_unary_strided() {
        let x = [1.0f64, 2.0, 3.0, 4.0, 5.0];
        let mut y = [0.0f64; 5];
        unary(3, &x, 2, &mut y, -1, |v| v * v).unwrap();
        assert_eq!(y, [25.0, 9.0, 1.0, 0.0, 0.0]);

        let mut y = [0.0f64; 5];
        unary_ndarray(2, &x, 1, 3, &mut y, 2, 1, |v| -v).unwrap();
        assert_eq!(y, [0.0, -4.0, 0.0, -5.0, 0.0]);
    }

    #[test]
    fn test_unary_bounds() {
        let x = [1.0f32; 4];
        let mut y = [0.0f32; 4];
        let err = unary(3, &x, 2, &mut y, 1, |v| v).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { arg: "x", .. }));
        assert!(unary(0, &x, 2, &mut y, 1, |v| v).is_ok());
    }

    #[test]
    fn test_binary_to_other_type() {
        let x = [1i32, 2, 3];
        let y = [1.5f64, 2.5, 3.5];
        let mut out = [String::new(), String::new(), String::new()];
        binary(3, &x, 1, &y, 1, &mut out, 1, |a, b| format!("{}", a as f64 + b)).unwrap();
        assert_eq!(out, ["2.5", "4.5", "6.5"]);
    }

    #[test]
    fn test_quinary() {
        let a = [1.0f64, 2.0];
        let mut out = [0.0f64; 2];
        quinary(2, &a, 1, &a, 1, &a, -1, &a, 0, &a, 1, &mut out, 1, |x, y, z, w, u| {
            x + y + z + w + u
        })
        .unwrap();
        assert_eq!(out, [1.0 + 1.0 + 2.0 + 1.0 + 1.0, 2.0 + 2.0 + 1.0 + 1.0 + 2.0]);
    }

    #[test]
    fn test_ternary_quaternary() {
        let x = [1.0f64, 2.0, 3.0];
        let mut out = [0.0f64; 3];
        ternary(3, &x, 1, &x, 1, &x, 1, &mut out, 1, |a, b, c| a * b * c).unwrap();
        assert_eq!(out, [1.0, 8.0, 27.0]);
        quaternary_ndarray(1, &x, 1, 2, &x, 1, 1, &x, 1, 0, &x, 1, 0, &mut out, 1, 0, |a, b, c, d| {
            a - b - c - d
        })
        .unwrap();
        assert_eq!(out[0], 3.0 - 2.0 - 1.0 - 1.0);
    }
}
