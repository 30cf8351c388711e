use crate::matrix::matrix_dense::{MatrixDense, Real};

impl<T: Real> MatrixDense<T> {
    /// Reduces the matrix to reduced row-echelon form in place, using only
    /// the elementary row operations.
    ///
    /// Pivots are any entry that is not exactly zero. A column with no
    /// pivot left is skipped.
    pub fn rref(&mut self) -> &mut Self {
        let mut pivot_col = 0;

        for pivot_row in 0..self.rows {
            let Some((iix, lead)) = self.find_pivot(pivot_row, pivot_col) else {
                break;
            };
            pivot_col = lead;
            log::debug!("pivot at ({}, {})", iix, pivot_col);

            self.swap_rows_at(iix, pivot_row);
            self.normalize_row_at(pivot_row, pivot_col);

            for row in 0..self.rows {
                let factor = self.at_cell(row, pivot_col);
                if row != pivot_row && !factor.is_zero() {
                    self.add_scaled_row_at(row, pivot_row, -factor);
                }
            }

            pivot_col += 1;
        }
        self
    }

    /// Number of non-zero rows in the reduced form. The matrix itself is
    /// left untouched.
    pub fn rank(&self) -> usize {
        let mut reduced = self.clone();
        reduced.rref();
        reduced
            .cells
            .chunks(reduced.cols)
            .filter(|row| row.iter().any(|x| !x.is_zero()))
            .count()
    }

    /// First `(row, col)` at or after `(pivot_row, pivot_col)` holding a
    /// non-zero entry, scanning down each column before moving right.
    fn find_pivot(&self, pivot_row: usize, pivot_col: usize) -> Option<(usize, usize)> {
        (pivot_col..self.cols).find_map(|col| {
            (pivot_row..self.rows)
                .find(|&row| !self.at_cell(row, col).is_zero())
                .map(|row| (row, col))
        })
    }

    /// Divides `row` by its entry in `lead`. Division (not a reciprocal
    /// multiply) keeps the pivot at exactly one.
    fn normalize_row_at(&mut self, row: usize, lead: usize) {
        let lv = self.at_cell(row, lead);
        self.row_mut(row).iter_mut().for_each(|x| *x = *x / lv);
    }

    #[inline(always)]
    fn at_cell(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
