//! Single-threaded product kernels and the dimension contract they share.
//!
//! All kernels compute C = A × B for A (m × k), B (k × n), C (m × n) and
//! overwrite C. They differ only in loop order and in whether the compiler
//! may vectorize the innermost loop:
//!
//! - `naive_ijk`: dot product per output element, B read column-wise
//! - `naive_ikj`: i-k-j order, stride-1 inner loop, vectorization blocked
//! - `ikj_vec`: i-k-j order, compiler free to vectorize

pub mod ikj_vec;
pub mod naive_ijk;
pub mod naive_ikj;

use crate::dense::Matrix;
use crate::error::{Error, Result};

/// Checks that `a × b` is defined and `c` has the shape of the product.
pub fn check_dims(a: &Matrix, b: &Matrix, c: &Matrix) -> Result<()> {
    if a.cols() != b.rows() || c.rows() != a.rows() || c.cols() != b.cols() {
        return Err(Error::DimensionMismatch {
            a_rows: a.rows(),
            a_cols: a.cols(),
            b_rows: b.rows(),
            b_cols: b.cols(),
            c_rows: c.rows(),
            c_cols: c.cols(),
        });
    }
    Ok(())
}

/// Panicking form of [`check_dims`], called on entry by every kernel.
#[inline]
pub(crate) fn assert_dims(a: &Matrix, b: &Matrix, c: &Matrix) {
    if let Err(e) = check_dims(a, b, c) {
        panic!("{}", e);
    }
}

/// Zeroes every row of `c`.
#[inline]
pub(crate) fn zero_rows(c: &mut Matrix) {
    for i in 0..c.rows() {
        c.row_mut(i).fill(0.0);
    }
}
