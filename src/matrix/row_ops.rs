//! Elementary row operations.
//!
//! The public methods take 1-based row numbers, the way a calculator user
//! names rows. Each one validates before touching the matrix, so a bad row
//! number leaves it unchanged. The `*_at` variants are the 0-based
//! primitives the reduction code builds on.

use crate::error::{MatrixError, Result};
use crate::matrix::matrix_dense::{MatrixDense, Real};

impl<T: Real> MatrixDense<T> {
    fn row_index(&self, row: usize) -> Result<usize> {
        if row == 0 || row > self.rows {
            return Err(MatrixError::RowOutOfRange {
                row,
                rows: self.rows,
            });
        }
        Ok(row - 1)
    }

    /// Multiplies every entry of `row` by `scalar`. A zero scalar is
    /// accepted and clears the row.
    pub fn scale_row(&mut self, row: usize, scalar: T) -> Result<&mut Self> {
        let row = self.row_index(row)?;
        self.scale_row_at(row, scalar);
        Ok(self)
    }

    /// Exchanges two rows. Swapping a row with itself is a no-op.
    pub fn swap_rows(&mut self, row_a: usize, row_b: usize) -> Result<&mut Self> {
        let row_a = self.row_index(row_a)?;
        let row_b = self.row_index(row_b)?;
        self.swap_rows_at(row_a, row_b);
        Ok(self)
    }

    /// `dest += scalar * src`, leaving `src` unchanged.
    pub fn add_scaled_row(&mut self, dest: usize, src: usize, scalar: T) -> Result<&mut Self> {
        let dest = self.row_index(dest)?;
        let src = self.row_index(src)?;
        self.add_scaled_row_at(dest, src, scalar);
        Ok(self)
    }

    pub(crate) fn scale_row_at(&mut self, row: usize, scalar: T) {
        log::trace!("row {} *= {}", row, scalar);
        self.row_mut(row).iter_mut().for_each(|x| *x = *x * scalar);
    }

    pub(crate) fn swap_rows_at(&mut self, row_a: usize, row_b: usize) {
        if row_a == row_b {
            return;
        }
        log::trace!("swap rows {} and {}", row_a, row_b);
        let cols = self.cols;
        let (low, high) = (row_a.min(row_b), row_a.max(row_b));
        let (head, tail) = self.cells.split_at_mut(high * cols);
        head[low * cols..(low + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    pub(crate) fn add_scaled_row_at(&mut self, dest: usize, src: usize, scalar: T) {
        log::trace!("row {} += {} * row {}", dest, scalar, src);
        let cols = self.cols;
        for i in 0..cols {
            let value = self.cells[src * cols + i];
            let cell = &mut self.cells[dest * cols + i];
            *cell = *cell + scalar * value;
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
