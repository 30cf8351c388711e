use crate::error::Result;

/// Read-only view shared by every matrix representation, plus the
/// list conversions used at the crate boundary.
///
/// Cell indices are 0-based.
pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self>;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn at(&self, row: usize, col: usize) -> T;

    fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    fn is_rref(&self) -> bool;
    fn identity(n: usize) -> Result<Self>;
}
