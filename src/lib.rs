//! Dense matrix product, four ways.
//!
//! A small experiment in what memory-access order and threads do to the
//! cost of C = A × B. Every kernel computes the same product; only the loop
//! structure changes:
//!
//! 1. [`matmul_naive_ijk`] - dot product per element, B walked column-wise
//! 2. [`matmul_ikj_scalar`] - i-k-j order, stride-1 inner loop, no SIMD
//! 3. [`matmul_ikj_vectorized`] - same loops, compiler may vectorize
//! 4. [`matmul_ikj_parallel`] - same again, rows split across threads
//!
//! ## Usage
//!
//! ```
//! use matprod::{Matrix, matmul_ikj_vectorized};
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
//! let mut c = Matrix::new(2, 2);
//!
//! matmul_ikj_vectorized(&a, &b, &mut c);
//! assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
//! ```
//!
//! The parallel kernel takes a thread count:
//!
//! ```
//! use matprod::{Matrix, matmul_ikj_parallel};
//!
//! let a = Matrix::filled(256, 256, 1.0);
//! let b = Matrix::filled(256, 256, 1.0);
//! let mut c = Matrix::new(256, 256);
//!
//! matmul_ikj_parallel(&a, &b, &mut c, 4);
//! assert_eq!(c[(10, 20)], 256.0);
//! ```
//!
//! Kernels panic on mismatched shapes; use [`check_dims`] to validate first.

pub mod dense;
pub mod error;
pub mod harness;
pub mod matrix;
pub mod threaded;

pub use dense::Matrix;
pub use error::{Error, Result};
pub use matrix::check_dims;
pub use matrix::ikj_vec::matmul_ikj_vectorized;
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use matrix::naive_ikj::matmul_ikj_scalar;
pub use threaded::ikj_mt::{default_thread_count, matmul_ikj_parallel};
