//! Multivariate normal distribution.

use crate::continuous::StandardNormal;
use crate::sampler::{Distribution, FillDistribution};
use chance_core::linalg::{cholesky, Matrix};
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_finite, ChanceError};
use tracing::debug;

/// Multivariate normal distribution `N(μ, Σ)`.
///
/// Construction factorises `Σ = LLᵀ` once. Each draw fills the output with
/// standard normal deviates `z` and overwrites it in place with `μ + Lz`,
/// walking the rows from last to first so every deviate is read before its
/// slot is reused. Draws therefore allocate nothing.
#[derive(Debug, Clone)]
pub struct MultivariateNormal<T: Real> {
    mean: Vec<T>,
    factor: Matrix<T>,
    normal: StandardNormal<T>,
}

impl<T: Real> MultivariateNormal<T> {
    /// Creates a multivariate normal distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` if the mean has a non-finite entry, the
    /// covariance does not match the mean's dimension, or the covariance is
    /// not symmetric positive definite.
    pub fn new(mean: &[T], covariance: &Matrix<T>) -> Result<Self, ChanceError> {
        for &m in mean {
            require_finite("mean", m)?;
        }
        if mean.is_empty() || covariance.rows() != mean.len() || covariance.cols() != mean.len() {
            return Err(ChanceError::argument(
                "covariance",
                format!(
                    "must be {0}x{0} to match the mean, got {1}x{2}",
                    mean.len(),
                    covariance.rows(),
                    covariance.cols()
                ),
            ));
        }
        let factor = cholesky(covariance)?;
        debug!(dimension = mean.len(), "factorised covariance");
        Ok(Self {
            mean: mean.to_vec(),
            factor,
            normal: StandardNormal::new(),
        })
    }

    /// Dimension.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.mean.len()
    }

    /// Lower-triangular Cholesky factor of the covariance.
    #[inline]
    pub fn factor(&self) -> &Matrix<T> {
        &self.factor
    }
}

impl<T: Real> FillDistribution for MultivariateNormal<T> {
    type Buffer = [T];

    fn sample_into<R: BitSource + ?Sized>(&mut self, rng: &mut R, out: &mut [T]) {
        assert_eq!(out.len(), self.mean.len(), "buffer must match the dimension");
        for slot in out.iter_mut() {
            *slot = self.normal.sample(rng);
        }
        for i in (0..out.len()).rev() {
            let mut value = self.mean[i];
            for j in 0..=i {
                value = value + self.factor[(i, j)] * out[j];
            }
            out[i] = value;
        }
    }
}

impl<T: Real> Distribution for MultivariateNormal<T> {
    type Output = Vec<T>;

    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> Vec<T> {
        let mut out = vec![T::zero(); self.mean.len()];
        self.sample_into(rng, &mut out);
        out
    }
}
