//! Chi-squared and Chi distributions.

use super::gamma::Gamma;
use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_positive, ChanceError};

/// Chi-squared distribution with `k` degrees of freedom.
///
/// Sampled as `Gamma(k/2, 2)`. Non-integral `k` is accepted.
#[derive(Debug, Clone)]
pub struct ChiSquared<T: Real> {
    dof: T,
    gamma: Gamma<T>,
}

impl<T: Real> ChiSquared<T> {
    /// Creates a Chi-squared distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless `dof` is finite and positive.
    pub fn new(dof: T) -> Result<Self, ChanceError> {
        let dof = require_positive("dof", dof)?;
        let two = T::from_f64(2.0);
        Ok(Self {
            dof,
            gamma: Gamma::new(dof / two, two)?,
        })
    }

    /// Degrees of freedom.
    #[inline]
    pub fn dof(&self) -> T {
        self.dof
    }
}

impl<T: Real> Distribution for ChiSquared<T> {
    type Output = T;

    #[inline]
    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> T {
        self.gamma.sample(rng)
    }
}

/// Chi distribution: the square root of a Chi-squared variate.
#[derive(Debug, Clone)]
pub struct Chi<T: Real> {
    inner: ChiSquared<T>,
}

impl<T: Real> Chi<T> {
    /// Creates a Chi distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless `dof` is finite and positive.
    pub fn new(dof: T) -> Result<Self, ChanceError> {
        Ok(Self {
            inner: ChiSquared::new(dof)?,
        })
    }

    /// Degrees of freedom.
    #[inline]
    pub fn dof(&self) -> T {
        self.inner.dof()
    }
}

impl<T: Real> Distribution for Chi<T> {
    type Output = T;

    #[inline]
    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> T {
        self.inner.sample(rng).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chance_core::rng::Chance;

    #[test]
    fn test_chi_squared_moments() {
        let mut rng = Chance::from_seed(13);
        let mut chi2 = ChiSquared::new(4.0_f64).unwrap();
        let n = 100_000;
        let xs: Vec<f64> = (0..n).map(|_| chi2.sample(&mut rng)).collect();
        let mean = xs.iter().sum::<f64>() / n as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert_relative_eq!(mean, 4.0, max_relative = 0.02);
        assert_relative_eq!(var, 8.0, max_relative = 0.05);
    }

    #[test]
    fn test_chi_second_moment() {
        // E[X²] = k
        let mut rng = Chance::from_seed(14);
        let mut chi = Chi::new(3.0_f64).unwrap();
        let n = 100_000;
        let m2 = (0..n).map(|_| chi.sample(&mut rng).powi(2)).sum::<f64>() / n as f64;
        assert_relative_eq!(m2, 3.0, max_relative = 0.02);
    }

    #[test]
    fn test_rejects_zero_dof() {
        assert!(ChiSquared::new(0.0_f64).is_err());
        assert!(Chi::new(-1.0_f64).is_err());
    }
}
