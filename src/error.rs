//! Error types.

use thiserror::Error;

/// Everything that can go wrong outside the kernels' hot loops.
#[derive(Debug, Error)]
pub enum Error {
    /// Operand shapes can't be multiplied, or C has the wrong shape.
    #[error(
        "dimension mismatch: A is {a_rows}x{a_cols}, B is {b_rows}x{b_cols}, C is {c_rows}x{c_cols}"
    )]
    DimensionMismatch {
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
        c_rows: usize,
        c_cols: usize,
    },

    /// Backing data doesn't hold exactly rows×cols elements.
    #[error("{}x{} matrix needs {} elements, got {}", .rows, .cols, .rows * .cols, .len)]
    DataLength { rows: usize, cols: usize, len: usize },

    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
