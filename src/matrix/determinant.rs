use crate::error::{MatrixError, Result};
use crate::matrix::matrix_dense::{MatrixDense, Real};

impl<T: Real> MatrixDense<T> {
    /// Determinant by cofactor expansion along the first row.
    ///
    /// Factorial in `n`, which stays tractable because matrices are capped
    /// at 12x12. Non-square input is an error, never a zero.
    pub fn determinant(&self) -> Result<T> {
        if self.rows != self.cols {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let n = self.rows;
        log::debug!("determinant of {}x{}", n, n);

        // One minor buffer per recursion depth: (n-1)^2, (n-2)^2, ..., 2^2
        let mut scratch = vec![T::zero(); (2..n).map(|k| k * k).sum()];
        Ok(cofactor_expansion(&self.cells, n, &mut scratch))
    }
}

/// Copies `cells` (an `n x n` block) without row 0 and column `skip`
/// into `minor`.
fn fill_minor<T: Real>(cells: &[T], n: usize, skip: usize, minor: &mut [T]) {
    let mut out = minor.iter_mut();
    for row in cells.chunks(n).skip(1) {
        for (col, value) in row.iter().enumerate() {
            if col == skip {
                continue;
            }
            if let Some(slot) = out.next() {
                *slot = *value;
            }
        }
    }
}

fn cofactor_expansion<T: Real>(cells: &[T], n: usize, scratch: &mut [T]) -> T {
    match n {
        1 => cells[0],
        2 => cells[0] * cells[3] - cells[1] * cells[2],
        _ => {
            let m = n - 1;
            let (minor, deeper) = scratch.split_at_mut(m * m);

            let mut det = T::zero();
            for j in 0..n {
                fill_minor(cells, n, j, minor);
                let sign = if j % 2 == 0 { T::one() } else { -T::one() };
                det = det + sign * cells[j] * cofactor_expansion(minor, m, deeper);
            }
            det
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
