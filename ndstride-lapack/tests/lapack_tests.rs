use ndstride_core::Layout;
use ndstride_lapack::{dge_trans, dlacpy, dlacpy_ndarray, dlaswp, dlaswp_ndarray, MatrixTriangle};
use proptest::prelude::*;

fn layout_of(col_major: bool) -> Layout {
    if col_major {
        Layout::ColMajor
    } else {
        Layout::RowMajor
    }
}

fn matrix(m: usize, n: usize) -> Vec<f64> {
    (0..m * n).map(|v| v as f64 + 1.0).collect()
}

#[test]
fn test_lu_style_pivots_round_trip() {
    // Pivots as an LU factorization of a 4-row matrix would report them.
    let ipiv = [3, 3, 2, 3];
    let original = matrix(4, 3);
    let mut a = original.clone();
    dlaswp(Layout::RowMajor, 3, &mut a, 3, 0, 3, &ipiv, 1).unwrap();
    assert_eq!(&a[..3], &original[9..12]);
    dlaswp(Layout::RowMajor, 3, &mut a, 3, 0, 3, &ipiv, -1).unwrap();
    assert_eq!(a, original);
}

#[test]
fn test_laswp_ndarray_matches_main_form() {
    let ipiv = [1, 2, 0];
    let mut main = matrix(3, 4);
    let mut nd = main.clone();
    dlaswp(Layout::ColMajor, 4, &mut main, 3, 0, 2, &ipiv, 1).unwrap();
    dlaswp_ndarray(4, &mut nd, 1, 3, 0, 0, 2, 1, &ipiv, 1, 0).unwrap();
    assert_eq!(main, nd);
}

#[test]
fn test_lacpy_into_larger_destination() {
    let a = matrix(2, 2);
    let mut b = vec![0.0; 9];
    // 2x2 block of a 3x3 column-major B starting at (1, 1)
    dlacpy_ndarray(MatrixTriangle::All, 2, 2, &a, 2, 1, 0, &mut b, 1, 3, 4).unwrap();
    assert_eq!(b, vec![0.0, 0.0, 0.0, 0.0, 1.0, 3.0, 0.0, 2.0, 4.0]);
}

proptest! {
    #[test]
    fn upper_and_lower_copies_cover_the_matrix(m in 1usize..8, n in 1usize..8, col_major in any::<bool>()) {
        let layout = layout_of(col_major);
        let ld = layout.leading_dim(m, n);
        let a = matrix(m, n);
        let mut all = vec![0.0; m * n];
        let mut parts = vec![0.0; m * n];
        dlacpy(layout, MatrixTriangle::All, m, n, &a, ld, &mut all, ld).unwrap();
        dlacpy(layout, MatrixTriangle::Upper, m, n, &a, ld, &mut parts, ld).unwrap();
        dlacpy(layout, MatrixTriangle::Lower, m, n, &a, ld, &mut parts, ld).unwrap();
        prop_assert_eq!(&all, &a);
        prop_assert_eq!(&parts, &a);
    }

    #[test]
    fn transpose_twice_is_identity(m in 1usize..20, n in 1usize..20, col_major in any::<bool>()) {
        let layout = layout_of(col_major);
        let a = matrix(m, n);
        let mut t = vec![0.0; m * n];
        let mut back = vec![0.0; m * n];
        dge_trans(layout, m, n, &a, layout.leading_dim(m, n), &mut t, layout.leading_dim(n, m)).unwrap();
        dge_trans(layout, n, m, &t, layout.leading_dim(n, m), &mut back, layout.leading_dim(m, n)).unwrap();
        prop_assert_eq!(back, a);
    }

    #[test]
    fn reversed_pivots_undo_forward(
        (rows, ipiv) in (1usize..8).prop_flat_map(|rows| (Just(rows), prop::collection::vec(0..rows, rows))),
        n in 1usize..5,
    ) {
        let original = matrix(rows, n);
        let mut a = original.clone();
        dlaswp(Layout::RowMajor, n, &mut a, n, 0, rows - 1, &ipiv, 1).unwrap();
        dlaswp(Layout::RowMajor, n, &mut a, n, 0, rows - 1, &ipiv, -1).unwrap();
        prop_assert_eq!(a, original);
    }
}
