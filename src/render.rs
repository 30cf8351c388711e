use itertools::Itertools;
use std::fmt;

use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::{MatrixDense, Real};

pub const DEFAULT_PRECISION: usize = 6;

/// Writes `m` one bracketed row per line: `[1.000000 2.000000]`.
pub fn render<T, M, W>(m: &M, precision: usize, f: &mut W) -> fmt::Result
where
    T: fmt::Display,
    M: Matrix<T>,
    W: fmt::Write,
{
    for row in 0..m.rows() {
        let line = (0..m.cols())
            .map(|col| format!("{:.*}", precision, m.at(row, col)))
            .join(" ");
        writeln!(f, "[{}]", line)?;
    }
    Ok(())
}

impl<T: Real> fmt::Display for MatrixDense<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::<T, _, _>(self, f.precision().unwrap_or(DEFAULT_PRECISION), f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let m = MatrixDense::from_list(vec![vec![1.0, -2.5], vec![0.0, 1.0 / 3.0]]).unwrap();
        assert_eq!(
            format!("{}", m),
            "[1.000000 -2.500000]\n[0.000000 0.333333]\n"
        );
        assert_eq!(format!("{:.1}", m), "[1.0 -2.5]\n[0.0 0.3]\n");
    }

    #[test]
    fn test_render_single_cell() {
        let m = MatrixDense::<f32>::from_list(vec![vec![7.0]]).unwrap();
        let mut out = String::new();
        render(&m, 0, &mut out).unwrap();
        assert_eq!(out, "[7]\n");
    }
}
