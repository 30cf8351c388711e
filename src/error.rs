use thiserror::Error;

use crate::matrix::matrix_dense::{MAX_SIZE, MIN_SIZE};

pub type Result<T> = std::result::Result<T, MatrixError>;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("size {rows}x{cols} is outside the supported range {min}..={max}", min = MIN_SIZE, max = MAX_SIZE)]
    SizeOutOfRange { rows: usize, cols: usize },

    /// Row numbers are 1-based, so `row == 0` lands here too.
    #[error("row {row} is outside 1..={rows}")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("incompatible matrices for {op}: {lhs:?} and {rhs:?}")]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("determinant is only defined for square matrices, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid shape ({rows}, {cols}) for buffer of length {len}")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    #[error("value source ran out before r{row}c{col}")]
    SourceExhausted { row: usize, col: usize },

    #[error("invalid value {token:?} for r{row}c{col}")]
    InvalidValue {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("invalid shape {0:?}, expected ROWSxCOLS")]
    InvalidShape(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MatrixError {
    pub(crate) fn mismatch(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        MatrixError::DimensionMismatch { op, lhs, rhs }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
