use std::hint::black_box;

use crate::dense::Matrix;
use crate::matrix::{assert_dims, zero_rows};

/// Cache-friendly matrix multiplication using i-k-j loop order, scalar only.
///
/// Swapping the j and k loops makes the innermost loop walk row k of B and
/// row i of C sequentially (stride 1). B is still read row by row in the
/// middle loop, but no longer in the innermost one.
///
/// The inner loop is kept scalar so the speedup over
/// [`matmul_naive_ijk`](crate::matrix::naive_ijk::matmul_naive_ijk) comes
/// from cache locality alone. Rust has no loop pragma for that, so each B
/// element goes through [`black_box`], which the optimizer can't pack into
/// SIMD lanes. Compare with
/// [`matmul_ikj_vectorized`](crate::matrix::ikj_vec::matmul_ikj_vectorized).
///
/// C is zeroed first, then accumulated.
///
/// # Panics
///
/// Panics if `a.cols() != b.rows()` or `c` is not `a.rows() × b.cols()`.
pub fn matmul_ikj_scalar(a: &Matrix, b: &Matrix, c: &mut Matrix) {
    assert_dims(a, b, c);
    zero_rows(c);

    for i in 0..a.rows() {
        let ai = a.row(i);
        let ci = c.row_mut(i);
        for (p, &aip) in ai.iter().enumerate() {
            let bp = b.row(p);
            for j in 0..ci.len() {
                ci[j] += aip * black_box(bp[j]);
            }
        }
    }
}
