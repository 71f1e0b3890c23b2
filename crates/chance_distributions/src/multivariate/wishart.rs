//! Wishart distribution by Bartlett decomposition.

use crate::continuous::{ChiSquared, StandardNormal};
use crate::sampler::{Distribution, FillDistribution};
use chance_core::linalg::{cholesky, Matrix};
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_finite, ChanceError};
use tracing::debug;

/// Wishart distribution `W_p(ν, V)` over `p×p` positive-definite matrices.
///
/// # Algorithm
///
/// Bartlett (1933): with `V = LLᵀ`, build a lower-triangular `A` with
/// `Aᵢᵢ = √χ²(ν − i)` and standard normal entries below the diagonal; then
/// `(LA)(LA)ᵀ ~ W_p(ν, V)`. The sampler owns the two `p×p` work matrices,
/// so draws into a caller-provided matrix allocate nothing.
#[derive(Debug, Clone)]
pub struct Wishart<T: Real> {
    dof: T,
    factor: Matrix<T>,
    diagonal: Vec<ChiSquared<T>>,
    normal: StandardNormal<T>,
    bartlett: Matrix<T>,
    product: Matrix<T>,
}

impl<T: Real> Wishart<T> {
    /// Creates a Wishart distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` if `dof` is not finite or not greater
    /// than `p − 1`, or `scale` is not symmetric positive definite.
    pub fn new(dof: T, scale: &Matrix<T>) -> Result<Self, ChanceError> {
        let dof = require_finite("dof", dof)?;
        let p = scale.rows();
        if p == 0 {
            return Err(ChanceError::argument("scale", "must not be empty"));
        }
        if !(dof > T::from_u64(p as u64 - 1)) {
            return Err(ChanceError::argument(
                "dof",
                format!("must exceed {} for a {}x{} scale, got {}", p - 1, p, p, dof),
            ));
        }
        let factor = cholesky(scale)?;
        let diagonal = (0..p)
            .map(|i| ChiSquared::new(dof - T::from_u64(i as u64)))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(dimension = p, "factorised Wishart scale");
        Ok(Self {
            dof,
            factor,
            diagonal,
            normal: StandardNormal::new(),
            bartlett: Matrix::zeros(p, p),
            product: Matrix::zeros(p, p),
        })
    }

    /// Degrees of freedom.
    #[inline]
    pub fn dof(&self) -> T {
        self.dof
    }

    /// Matrix order `p`.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.factor.rows()
    }
}

impl<T: Real> FillDistribution for Wishart<T> {
    type Buffer = Matrix<T>;

    fn sample_into<R: BitSource + ?Sized>(&mut self, rng: &mut R, out: &mut Matrix<T>) {
        let p = self.factor.rows();
        assert!(
            out.rows() == p && out.cols() == p,
            "output must be {0}x{0}",
            p
        );
        for i in 0..p {
            self.bartlett[(i, i)] = self.diagonal[i].sample(rng).sqrt();
            for j in 0..i {
                self.bartlett[(i, j)] = self.normal.sample(rng);
            }
        }
        // L and A are both lower triangular, and so is their product
        for i in 0..p {
            for j in 0..=i {
                let mut sum = T::zero();
                for k in j..=i {
                    sum = sum + self.factor[(i, k)] * self.bartlett[(k, j)];
                }
                self.product[(i, j)] = sum;
            }
        }
        for i in 0..p {
            for j in 0..=i {
                let mut sum = T::zero();
                for k in 0..=j {
                    sum = sum + self.product[(i, k)] * self.product[(j, k)];
                }
                out[(i, j)] = sum;
                out[(j, i)] = sum;
            }
        }
    }
}

impl<T: Real> Distribution for Wishart<T> {
    type Output = Matrix<T>;

    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> Matrix<T> {
        let p = self.factor.rows();
        let mut out = Matrix::zeros(p, p);
        self.sample_into(rng, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chance_core::rng::Chance;

    #[test]
    fn test_mean_is_dof_times_scale() {
        let scale = Matrix::from_rows(&[&[2.0_f64, 0.5], &[0.5, 1.0]]).unwrap();
        let dof = 6.0;
        let mut wishart = Wishart::new(dof, &scale).unwrap();
        let mut rng = Chance::from_seed(130);

        let n = 40_000;
        let mut sum = [0.0; 4];
        let mut w = Matrix::zeros(2, 2);
        for _ in 0..n {
            wishart.sample_into(&mut rng, &mut w);
            assert_eq!(w[(0, 1)], w[(1, 0)]);
            assert!(w.cholesky().is_ok());
            for (s, v) in sum.iter_mut().zip(w.as_slice()) {
                *s += v;
            }
        }
        for (s, v) in sum.iter().zip(scale.as_slice()) {
            assert_relative_eq!(s / n as f64, dof * v, max_relative = 0.03);
        }
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        let scale = Matrix::<f64>::identity(3);
        assert!(Wishart::new(2.0, &scale).is_err());
        assert!(Wishart::new(2.5, &scale).is_ok());
        assert!(Wishart::new(f64::NAN, &scale).is_err());
        let asymmetric = Matrix::from_rows(&[&[1.0_f64, 0.3], &[0.0, 1.0]]).unwrap();
        assert!(Wishart::new(5.0, &asymmetric).is_err());
    }
}
