//! Student's t distribution.

use super::chi::ChiSquared;
use super::normal::StandardNormal;
use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::ChanceError;

/// Student's t distribution with `ν` degrees of freedom.
///
/// Sampled as `Z / √(V/ν)` with `Z` standard normal and `V ~ χ²(ν)`.
#[derive(Debug, Clone)]
pub struct StudentT<T: Real> {
    normal: StandardNormal<T>,
    chi_squared: ChiSquared<T>,
}

impl<T: Real> StudentT<T> {
    /// Creates a Student's t distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless `dof` is finite and positive.
    pub fn new(dof: T) -> Result<Self, ChanceError> {
        Ok(Self {
            normal: StandardNormal::new(),
            chi_squared: ChiSquared::new(dof)?,
        })
    }

    /// Degrees of freedom.
    #[inline]
    pub fn dof(&self) -> T {
        self.chi_squared.dof()
    }
}

impl<T: Real> Distribution for StudentT<T> {
    type Output = T;

    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> T {
        let z = self.normal.sample(rng);
        let dof = self.chi_squared.dof();
        loop {
            let v = self.chi_squared.sample(rng);
            if v > T::zero() {
                return z / (v / dof).sqrt();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chance_core::rng::Chance;

    #[test]
    fn test_variance() {
        // Var = ν / (ν − 2)
        let mut rng = Chance::from_seed(15);
        let mut t = StudentT::new(10.0_f64).unwrap();
        let n = 200_000;
        let xs: Vec<f64> = (0..n).map(|_| t.sample(&mut rng)).collect();
        let mean = xs.iter().sum::<f64>() / n as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.02, "mean {}", mean);
        assert_relative_eq!(var, 1.25, max_relative = 0.05);
    }

    #[test]
    fn test_rejects_invalid_dof() {
        assert!(StudentT::new(0.0_f64).is_err());
        assert!(StudentT::new(f64::INFINITY).is_err());
    }
}
