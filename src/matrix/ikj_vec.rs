use crate::dense::Matrix;
use crate::matrix::{assert_dims, zero_rows};

/// i-k-j matrix multiplication the compiler is free to vectorize.
///
/// Same loops and accumulation order as
/// [`matmul_ikj_scalar`](crate::matrix::naive_ikj::matmul_ikj_scalar). The
/// inner loop zips row i of C with row k of B, so there are no bounds checks
/// and nothing opaque in the way of auto-vectorization. Every C[i][j] still
/// sees its k terms in the same order, so the result is bit-identical.
///
/// # Panics
///
/// Panics if `a.cols() != b.rows()` or `c` is not `a.rows() × b.cols()`.
pub fn matmul_ikj_vectorized(a: &Matrix, b: &Matrix, c: &mut Matrix) {
    assert_dims(a, b, c);
    zero_rows(c);

    for i in 0..a.rows() {
        ikj_row(a.row(i), b, c.row_mut(i));
    }
}

/// Accumulates one output row: `ci += Σ_p ai[p] * b.row(p)`.
///
/// `ci` must already be zeroed. Shared with the threaded kernel so both run
/// exactly the same row-local arithmetic.
#[inline]
pub(crate) fn ikj_row(ai: &[f64], b: &Matrix, ci: &mut [f64]) {
    for (p, &aip) in ai.iter().enumerate() {
        for (cij, &bpj) in ci.iter_mut().zip(b.row(p)) {
            *cij += aip * bpj;
        }
    }
}
