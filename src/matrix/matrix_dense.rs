use num_traits::Float;

use crate::error::{MatrixError, Result};
use crate::matrix::matrix::Matrix;
use crate::source::ValueSource;
use std::ops;
use std::ops::{Index, IndexMut};

pub const MIN_SIZE: usize = 1;
pub const MAX_SIZE: usize = 12;

pub trait Real:  // Avoid repeating all the traits
    Float
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<T> Real for T where T: Float + std::iter::Sum<T> + std::fmt::Display + std::fmt::Debug {}

/// Dense matrix stored as one contiguous row-major buffer.
///
/// The shape is fixed at construction and only changes through
/// [`MatrixDense::transpose`].
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixDense<T = f64> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<T>,
}

pub(crate) fn check_size(rows: usize, cols: usize) -> Result<()> {
    let range = MIN_SIZE..=MAX_SIZE;
    if !range.contains(&rows) || !range.contains(&cols) {
        return Err(MatrixError::SizeOutOfRange { rows, cols });
    }
    Ok(())
}

impl<T: Real> Matrix<T> for MatrixDense<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);
        check_size(rows, cols)?;

        if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
            return Err(MatrixError::RaggedRow {
                row,
                expected: cols,
                found: line.len(),
            });
        }

        Ok(MatrixDense {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }

    fn is_rref(&self) -> bool {
        let mut lead = None;

        for i in 0..self.rows {
            let row = self.row(i);
            let pivot_col_opt = row.iter().position(|x| !x.is_zero());

            match pivot_col_opt {
                None => {
                    // zero rows must all sit at the bottom
                    for r in i + 1..self.rows {
                        if self.row(r).iter().any(|x| !x.is_zero()) {
                            return false;
                        }
                    }
                    break;
                }
                Some(pivot_col) => {
                    if let Some(prev_lead) = lead {
                        if pivot_col <= prev_lead {
                            return false;
                        }
                    }
                    lead = Some(pivot_col);

                    if row[pivot_col] != T::one() {
                        return false;
                    }

                    for r in 0..self.rows {
                        if r != i && !self.at(r, pivot_col).is_zero() {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    fn identity(n: usize) -> Result<Self> {
        check_size(n, n)?;
        Ok(MatrixDense {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        })
    }
}

impl<T: Real> MatrixDense<T> {
    /// Allocates a zero-filled `rows x cols` matrix.
    pub fn create(rows: usize, cols: usize) -> Result<Self> {
        check_size(rows, cols)?;
        Ok(MatrixDense {
            rows,
            cols,
            cells: vec![T::zero(); rows * cols],
        })
    }

    /// Builds a matrix from a flat row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), cells: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        check_size(rows, cols)?;
        if cells.len() != rows * cols {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: cells.len(),
            });
        }
        Ok(MatrixDense { rows, cols, cells })
    }

    /// Allocates a matrix and fills it from `source` in row-major order.
    pub fn create_from<S: ValueSource<T>>(
        rows: usize,
        cols: usize,
        source: &mut S,
    ) -> Result<Self> {
        let mut m = Self::create(rows, cols)?;
        m.populate(source)?;
        Ok(m)
    }

    /// Reads exactly `rows * cols` values from `source`. Nothing is written
    /// unless every value was read successfully.
    pub fn populate<S: ValueSource<T>>(&mut self, source: &mut S) -> Result<&mut Self> {
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in 0..self.rows {
            for col in 0..self.cols {
                cells.push(source.next_value(row, col)?);
            }
        }
        self.cells = cells;
        Ok(self)
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Multiplies every entry by `scalar`, in place.
    pub fn scale(&mut self, scalar: T) -> &mut Self {
        self.cells.iter_mut().for_each(|x| *x = *x * scalar);
        self
    }

    /// Swaps rows and columns in place: the matrix keeps its identity but
    /// becomes `cols x rows`.
    pub fn transpose(&mut self) -> &mut Self {
        let cells: Vec<T> = (0..self.cols)
            .flat_map(|c| (0..self.rows).map(move |r| (r, c)))
            .map(|(r, c)| self.at(r, c))
            .collect();

        log::debug!("transpose {}x{} -> {}x{}", self.rows, self.cols, self.cols, self.rows);
        std::mem::swap(&mut self.rows, &mut self.cols);
        self.cells = cells;
        self
    }

    fn zip_with(
        &self,
        rhs: &MatrixDense<T>,
        op: &'static str,
        f: fn(T, T) -> T,
    ) -> Result<MatrixDense<T>> {
        if self.cols != rhs.cols || self.rows != rhs.rows {
            return Err(MatrixError::mismatch(op, self.shape(), rhs.shape()));
        }

        Ok(MatrixDense {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| f(*a, *b))
                .collect(),
        })
    }
}

impl<T: Real> Index<(usize, usize)> for MatrixDense<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "cell index out of bounds");
        &self.cells[row * self.cols + col]
    }
}

impl<T: Real> IndexMut<(usize, usize)> for MatrixDense<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.rows && col < self.cols, "cell index out of bounds");
        &mut self.cells[row * self.cols + col]
    }
}

impl<T: Real> ops::Add<&MatrixDense<T>> for &MatrixDense<T> {
    type Output = Result<MatrixDense<T>>;

    fn add(self, rhs: &MatrixDense<T>) -> Result<MatrixDense<T>> {
        self.zip_with(rhs, "add", |a, b| a + b)
    }
}

impl<T: Real> ops::Sub<&MatrixDense<T>> for &MatrixDense<T> {
    type Output = Result<MatrixDense<T>>;

    fn sub(self, rhs: &MatrixDense<T>) -> Result<MatrixDense<T>> {
        self.zip_with(rhs, "subtract", |a, b| a - b)
    }
}

impl<T: Real> ops::Mul<&MatrixDense<T>> for &MatrixDense<T> {
    type Output = Result<MatrixDense<T>>;

    fn mul(self, rhs: &MatrixDense<T>) -> Result<MatrixDense<T>> {
        if self.cols != rhs.rows {
            return Err(MatrixError::mismatch("multiply", self.shape(), rhs.shape()));
        }

        // Sum starts from T::zero(), every output cell is a fresh accumulator
        Ok(MatrixDense {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols)
                        .map(move |j| (0..self.cols).map(|k| self.at(i, k) * rhs.at(k, j)).sum())
                })
                .collect(),
        })
    }
}

impl<T: Real> ops::MulAssign<T> for MatrixDense<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.scale(scalar);
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::IterSource;

    fn m(lines: Vec<Vec<f64>>) -> MatrixDense {
        MatrixDense::from_list(lines).unwrap()
    }

    #[test]
    fn test_create_bounds() {
        for rows in MIN_SIZE..=MAX_SIZE {
            for cols in MIN_SIZE..=MAX_SIZE {
                let values = (0..rows * cols).map(|x| x as f64);
                let a = MatrixDense::create_from(rows, cols, &mut IterSource::new(values)).unwrap();
                assert_eq!(a.shape(), (rows, cols));
                assert_eq!(a.as_slice().len(), rows * cols);
                assert_eq!(a.at(rows - 1, cols - 1), (rows * cols - 1) as f64);
                assert_eq!(a[(0, 0)], 0.0);
            }
        }

        for (rows, cols) in [(0, 1), (1, 0), (13, 1), (1, 13), (0, 0), (13, 13)] {
            assert!(matches!(
                MatrixDense::<f64>::create(rows, cols),
                Err(MatrixError::SizeOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn test_create_is_zeroed() {
        let a = MatrixDense::<f32>::create(3, 4).unwrap();
        assert!(a.as_slice().iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_from_list() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(a.shape(), (2, 3));
        assert_eq!(a.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(a.to_list(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);

        assert!(matches!(
            MatrixDense::from_list(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(MatrixError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            MatrixDense::<f64>::from_list(vec![]),
            Err(MatrixError::SizeOutOfRange { .. })
        ));
        assert!(matches!(
            MatrixDense::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0]),
            Err(MatrixError::ShapeMismatch { len: 3, .. })
        ));
    }

    #[test]
    fn test_populate_keeps_matrix_on_failure() {
        let mut a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let err = a.populate(&mut IterSource::new(vec![9.0, 9.0, 9.0])).unwrap_err();
        assert!(matches!(err, MatrixError::SourceExhausted { row: 1, col: 1 }));
        assert_eq!(a.to_list(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);

        a.populate(&mut IterSource::new(vec![5.0, 6.0, 7.0, 8.0])).unwrap();
        assert_eq!(a.to_list(), vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
    }

    #[test]
    fn test_add_sub() {
        let a = MatrixDense::<f64>::identity(2).unwrap();
        let b = m(vec![vec![2.0, 3.0], vec![4.0, 5.0]]);

        let c = (&a + &b).unwrap();
        assert_eq!(c.to_list(), vec![vec![3.0, 3.0], vec![4.0, 6.0]]);

        let c = (&b - &a).unwrap();
        assert_eq!(c.to_list(), vec![vec![1.0, 3.0], vec![4.0, 4.0]]);

        // operands are untouched
        assert_eq!(b.to_list(), vec![vec![2.0, 3.0], vec![4.0, 5.0]]);
    }

    #[test]
    fn test_mismatch() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![1.0, 2.0, 3.0]]);

        assert!(matches!(
            &a + &b,
            Err(MatrixError::DimensionMismatch { op: "add", .. })
        ));
        assert!(matches!(
            &a - &b,
            Err(MatrixError::DimensionMismatch { op: "subtract", .. })
        ));
        assert!(matches!(
            &a * &b,
            Err(MatrixError::DimensionMismatch {
                op: "multiply",
                lhs: (2, 2),
                rhs: (1, 3)
            })
        ));
    }

    #[test]
    fn test_multiply() {
        let a = m(vec![vec![2.0, -5.0, 0.0], vec![-1.0, 3.0, -4.0]]);
        let b = m(vec![vec![4.0, -6.0], vec![7.0, 1.0], vec![3.0, 0.0]]);

        let c = (&a * &b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.to_list(), vec![vec![-27.0, -17.0], vec![5.0, 9.0]]);

        let c = (&b * &a).unwrap();
        assert_eq!(c.shape(), (3, 3));
        assert_eq!(c.row(0), &[14.0, -38.0, 24.0]);
        assert_eq!(c.row(2), &[6.0, -15.0, 0.0]);

        let i = MatrixDense::identity(3).unwrap();
        assert_eq!((&b * &MatrixDense::identity(2).unwrap()).unwrap(), b);
        assert_eq!((&i * &b).unwrap(), b);
    }

    #[test]
    fn test_multiply_row_by_column() {
        let a = m(vec![vec![1.0, 2.0, 3.0]]);
        let b = m(vec![vec![4.0], vec![5.0], vec![6.0]]);
        assert_eq!((&a * &b).unwrap().to_list(), vec![vec![32.0]]);
        assert_eq!((&b * &a).unwrap().shape(), (3, 3));
    }

    #[test]
    fn test_scale() {
        let mut a = m(vec![vec![1.0, -2.0], vec![0.5, 0.0]]);
        a.scale(2.0);
        assert_eq!(a.to_list(), vec![vec![2.0, -4.0], vec![1.0, 0.0]]);

        a *= 0.5;
        assert_eq!(a.to_list(), vec![vec![1.0, -2.0], vec![0.5, 0.0]]);
    }

    #[test]
    fn test_transpose() {
        let mut a = m(vec![
            vec![1.0, 2.0, 5.0, 77.0],
            vec![3.0, 4.0, 7.0, 11.0],
            vec![4.0, 8.0, 9.0, 1.0],
        ]);
        let original = a.clone();

        a.transpose();
        assert_eq!(a.shape(), (4, 3));
        assert_eq!(
            a.to_list(),
            vec![
                vec![1.0, 3.0, 4.0],
                vec![2.0, 4.0, 8.0],
                vec![5.0, 7.0, 9.0],
                vec![77.0, 11.0, 1.0],
            ]
        );

        a.transpose();
        assert_eq!(a, original);
    }

    #[test]
    fn test_is_rref() {
        assert!(MatrixDense::<f64>::identity(3).unwrap().is_rref());
        assert!(m(vec![vec![1.0, 2.0, 0.0], vec![0.0, 0.0, 1.0]]).is_rref());
        assert!(m(vec![vec![1.0, 2.0], vec![0.0, 0.0]]).is_rref());
        assert!(m(vec![vec![0.0, 0.0], vec![0.0, 0.0]]).is_rref());

        assert!(!m(vec![vec![0.0, 0.0], vec![0.0, 1.0]]).is_rref());
        assert!(!m(vec![vec![2.0, 0.0], vec![0.0, 1.0]]).is_rref());
        assert!(!m(vec![vec![1.0, 1.0], vec![0.0, 1.0]]).is_rref());
        assert!(!m(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).is_rref());
    }
}
