//! Multi-threaded GEMM.
//!
//! Parallel execution across rows of the result: every worker thread owns a
//! disjoint block of C's rows, so C needs no locks and A and B are shared
//! read-only.
//!
//! Available implementations:
//! - `ikj_mt`: Multi-threaded i-k-j, vectorizable inner loop

pub mod ikj_mt;
