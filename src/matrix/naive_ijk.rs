use crate::dense::Matrix;
use crate::matrix::assert_dims;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop: every C[i][j] is a dot product of row i
/// of A with column j of B. It's slow because the innermost loop reads B with
/// stride `n` (column-wise), so nearly every step misses cache.
///
/// C is overwritten, not accumulated into. Use this as the baseline.
///
/// # Panics
///
/// Panics if `a.cols() != b.rows()` or `c` is not `a.rows() × b.cols()`.
pub fn matmul_naive_ijk(a: &Matrix, b: &Matrix, c: &mut Matrix) {
    assert_dims(a, b, c);
    let (m, n, k) = (a.rows(), b.cols(), a.cols());

    for i in 0..m {
        let ai = a.row(i);
        let ci = c.row_mut(i);
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..k {
                sum += ai[p] * b[(p, j)];
            }
            ci[j] = sum;
        }
    }
}
