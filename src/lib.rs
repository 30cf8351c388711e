//! MANA (Matrices and Numerical Algorithms): a small dense matrix engine.
//!
//! Matrices are at most 12x12 and hold real values. The engine covers
//! construction, elementary row operations, arithmetic, determinants,
//! transpose and reduction to reduced row-echelon form.
//!
//! ```
//! use mana::matrix::matrix::Matrix;
//! use mana::matrix::matrix_dense::MatrixDense;
//!
//! let mut m = MatrixDense::from_list(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
//! assert_eq!(m.determinant().unwrap(), 0.0);
//! m.rref();
//! assert_eq!(m.to_list(), vec![vec![1.0, 2.0], vec![0.0, 0.0]]);
//! ```

pub mod matrix {
    pub mod determinant;
    pub mod matrix;
    pub mod matrix_dense;
    pub mod row_ops;
    pub mod rref;
}

pub mod config;
pub mod error;
pub mod render;
pub mod source;

pub use error::{MatrixError, Result};
pub use matrix::matrix::Matrix;
pub use matrix::matrix_dense::MatrixDense;

#[cfg(feature = "python")]
pub mod python;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn mana(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyMatrix>()?;
    Ok(())
}
