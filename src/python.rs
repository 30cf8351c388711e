use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyType;

use crate::error::MatrixError;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::MatrixDense;

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        PyValueError::new_err(error.to_string())
    }
}

/// Python face of `MatrixDense<f64>`. Row numbers are 1-based, as in Rust.
#[derive(Debug, Clone)]
#[pyclass(name = "Matrix")]
pub struct PyMatrix {
    inner: MatrixDense<f64>,
}

#[pymethods]
impl PyMatrix {
    #[new]
    pub fn new(rows: usize, cols: usize) -> PyResult<Self> {
        Ok(PyMatrix {
            inner: MatrixDense::create(rows, cols)?,
        })
    }

    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> PyResult<Self> {
        Ok(PyMatrix {
            inner: MatrixDense::from_list(lines)?,
        })
    }

    #[classmethod]
    pub fn identity(_cls: &Bound<PyType>, n: usize) -> PyResult<Self> {
        Ok(PyMatrix {
            inner: MatrixDense::identity(n)?,
        })
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    pub fn scale_row(&mut self, row: usize, scalar: f64) -> PyResult<()> {
        self.inner.scale_row(row, scalar)?;
        Ok(())
    }

    pub fn swap_rows(&mut self, row_a: usize, row_b: usize) -> PyResult<()> {
        self.inner.swap_rows(row_a, row_b)?;
        Ok(())
    }

    pub fn add_scaled_row(&mut self, dest: usize, src: usize, scalar: f64) -> PyResult<()> {
        self.inner.add_scaled_row(dest, src, scalar)?;
        Ok(())
    }

    pub fn __add__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(PyMatrix {
            inner: (&self.inner + &rhs.inner)?,
        })
    }

    pub fn __sub__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(PyMatrix {
            inner: (&self.inner - &rhs.inner)?,
        })
    }

    pub fn __matmul__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(PyMatrix {
            inner: (&self.inner * &rhs.inner)?,
        })
    }

    pub fn scale(&mut self, scalar: f64) {
        self.inner.scale(scalar);
    }

    pub fn determinant(&self) -> PyResult<f64> {
        Ok(self.inner.determinant()?)
    }

    pub fn transpose(&mut self) {
        self.inner.transpose();
    }

    pub fn rref(&mut self) {
        self.inner.rref();
    }

    pub fn rank(&self) -> usize {
        self.inner.rank()
    }

    pub fn is_rref(&self) -> bool {
        self.inner.is_rref()
    }

    pub fn __repr__(&self) -> String {
        format!("{}", self.inner)
    }
}
