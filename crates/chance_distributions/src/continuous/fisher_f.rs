//! Fisher's F distribution.

use super::chi::ChiSquared;
use crate::renamed;
use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::ChanceError;

/// Fisher's F distribution with `d1` and `d2` degrees of freedom.
///
/// Sampled as `(U/d1) / (V/d2)` for independent `U ~ χ²(d1)` and
/// `V ~ χ²(d2)`.
#[derive(Debug, Clone)]
pub struct FisherF<T: Real> {
    numerator: ChiSquared<T>,
    denominator: ChiSquared<T>,
}

impl<T: Real> FisherF<T> {
    /// Creates an F distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless both degrees of freedom are
    /// finite and positive.
    pub fn new(d1: T, d2: T) -> Result<Self, ChanceError> {
        Ok(Self {
            numerator: ChiSquared::new(d1).map_err(renamed("d1"))?,
            denominator: ChiSquared::new(d2).map_err(renamed("d2"))?,
        })
    }
}

impl<T: Real> Distribution for FisherF<T> {
    type Output = T;

    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> T {
        let d1 = self.numerator.dof();
        let d2 = self.denominator.dof();
        let u = self.numerator.sample(rng) / d1;
        loop {
            let v = self.denominator.sample(rng);
            if v > T::zero() {
                return u / (v / d2);
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
    fn test_mean() {
        // E = d2 / (d2 − 2)
        let mut rng = Chance::from_seed(16);
        let mut f = FisherF::new(5.0_f64, 12.0).unwrap();
        let n = 200_000;
        let mean = (0..n).map(|_| f.sample(&mut rng)).sum::<f64>() / n as f64;
        assert_relative_eq!(mean, 1.2, max_relative = 0.02);
    }

    #[test]
    fn test_error_names_the_parameter() {
        let err = FisherF::new(1.0_f64, 0.0).unwrap_err();
        assert!(matches!(err, ChanceError::ArgumentOutOfRange { name: "d2", .. }));
    }
}
