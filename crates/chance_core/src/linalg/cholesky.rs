//! Cholesky factorisation.

use super::matrix::Matrix;
use crate::numeric::Real;
use crate::types::ChanceError;

/// Lower-triangular Cholesky factor `L` with `a = L Lᵀ`.
///
/// # Errors
///
/// Returns `ArgumentOutOfRange` if `a` is not square, not symmetric, has a
/// non-finite entry, or is not positive definite.
///
/// # Examples
///
/// ```
/// use chance_core::linalg::{cholesky, Matrix};
///
/// let a = Matrix::from_rows(&[&[4.0_f64, 2.0], &[2.0, 3.0]]).unwrap();
/// let l = cholesky(&a).unwrap();
/// assert_eq!(l[(0, 0)], 2.0);
/// assert_eq!(l[(0, 1)], 0.0);
/// ```
pub fn cholesky<T: Real>(a: &Matrix<T>) -> Result<Matrix<T>, ChanceError> {
    if !a.is_square() {
        return Err(ChanceError::argument(
            "matrix",
            format!("must be square, got {}x{}", a.rows(), a.cols()),
        ));
    }
    if a.as_slice().iter().any(|x| !x.is_finite()) {
        return Err(ChanceError::argument("matrix", "must have finite entries"));
    }
    if !a.is_symmetric() {
        return Err(ChanceError::argument("matrix", "must be symmetric"));
    }

    let n = a.rows();
    let mut l = Matrix::zeros(n, n);
    for j in 0..n {
        let mut diagonal = a[(j, j)];
        for k in 0..j {
            diagonal = diagonal - l[(j, k)] * l[(j, k)];
        }
        if !(diagonal > T::zero()) {
            return Err(ChanceError::argument(
                "matrix",
                format!("must be positive definite (pivot {} is {})", j, diagonal),
            ));
        }
        let pivot = diagonal.sqrt();
        l[(j, j)] = pivot;

        for i in (j + 1)..n {
            let mut sum = a[(i, j)];
            for k in 0..j {
                sum = sum - l[(i, k)] * l[(j, k)];
            }
            l[(i, j)] = sum / pivot;
        }
    }
    Ok(l)
}
