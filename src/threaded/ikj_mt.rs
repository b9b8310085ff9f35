//! Multi-threaded i-k-j product.

use std::num::NonZeroUsize;
use std::thread;

use log::debug;

use crate::dense::Matrix;
use crate::matrix::assert_dims;
use crate::matrix::ikj_vec::ikj_row;

/// Multi-threaded matrix multiplication, i-k-j order.
///
/// Splits C's rows into `num_threads` contiguous chunks and hands each chunk
/// to a scoped worker. A worker owns its rows outright (`chunks_mut`), zeroes
/// them and then runs the same row loop as
/// [`matmul_ikj_vectorized`](crate::matrix::ikj_vec::matmul_ikj_vectorized),
/// so each row comes out bit-identical whatever the thread count. A and B are
/// only read. Returns once every worker has joined.
///
/// `num_threads` is clamped to `1..=rows`; with one thread the work runs on
/// the calling thread.
///
/// # Arguments
///
/// * `num_threads` - Maximum threads (actual may be fewer for short matrices)
///
/// # Panics
///
/// Panics if `a.cols() != b.rows()` or `c` is not `a.rows() × b.cols()`, or
/// if a worker panics.
pub fn matmul_ikj_parallel(a: &Matrix, b: &Matrix, c: &mut Matrix, num_threads: usize) {
    assert_dims(a, b, c);
    let (m, n) = (c.rows(), c.cols());

    let threads = num_threads.clamp(1, m.max(1));
    if threads == 1 || n == 0 {
        for i in 0..m {
            let ci = c.row_mut(i);
            ci.fill(0.0);
            ikj_row(a.row(i), b, ci);
        }
        return;
    }

    let rows_per_thread = m.div_ceil(threads);
    debug!(
        "ikj parallel: {}x{} result, {} threads, {} rows each",
        m, n, threads, rows_per_thread
    );

    thread::scope(|s| {
        for (tid, chunk) in c.as_mut_slice().chunks_mut(rows_per_thread * n).enumerate() {
            let start_row = tid * rows_per_thread;
            s.spawn(move || {
                for (offset, ci) in chunk.chunks_mut(n).enumerate() {
                    ci.fill(0.0);
                    ikj_row(a.row(start_row + offset), b, ci);
                }
            });
        }
    });
}

/// Worker count to use when none is given: the machine's available
/// parallelism, or 1 if that can't be determined.
pub fn default_thread_count() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}
