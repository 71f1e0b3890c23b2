//! Small dense linear algebra used by the multivariate samplers.

mod cholesky;
mod matrix;

pub use cholesky::cholesky;
pub use matrix::{mul_into, Matrix};

impl<T: crate::numeric::Real> Matrix<T> {
    /// Lower-triangular Cholesky factor of this matrix.
    ///
    /// See [`cholesky`].
    pub fn cholesky(&self) -> Result<Matrix<T>, crate::types::ChanceError> {
        cholesky(self)
    }

    /// Matrix product written into `out`.
    ///
    /// See [`mul_into`].
    pub fn mul_into(
        &self,
        rhs: &Matrix<T>,
        out: &mut Matrix<T>,
    ) -> Result<(), crate::types::ChanceError> {
        mul_into(self, rhs, out)
    }
}
