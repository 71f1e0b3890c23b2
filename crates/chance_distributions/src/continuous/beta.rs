//! Beta distribution as a ratio of Gamma variates.

use super::gamma::Gamma;
use crate::renamed;
use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::ChanceError;

/// Beta distribution on `(0, 1)` with shapes `α` and `β`.
///
/// Returns `X / (X + Y)` for `X ~ Gamma(α, 1)` and `Y ~ Gamma(β, 1)`. Pairs
/// whose sum underflows to zero are redrawn.
#[derive(Debug, Clone)]
pub struct Beta<T: Real> {
    alpha: Gamma<T>,
    beta: Gamma<T>,
}

impl<T: Real> Beta<T> {
    /// Creates a Beta distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless both shapes are finite and
    /// positive.
    pub fn new(alpha: T, beta: T) -> Result<Self, ChanceError> {
        Ok(Self {
            alpha: Gamma::new(alpha, T::one()).map_err(renamed("alpha"))?,
            beta: Gamma::new(beta, T::one()).map_err(renamed("beta"))?,
        })
    }

    /// First shape parameter.
    #[inline]
    pub fn alpha(&self) -> T {
        self.alpha.shape()
    }

    /// Second shape parameter.
    #[inline]
    pub fn beta(&self) -> T {
        self.beta.shape()
    }
}

impl<T: Real> Distribution for Beta<T> {
    type Output = T;

    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> T {
        loop {
            let x = self.alpha.sample(rng);
            let y = self.beta.sample(rng);
            let sum = x + y;
            if sum > T::zero() {
                return x / sum;
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
    fn test_mean_and_variance() {
        let (a, b) = (2.0_f64, 5.0_f64);
        let mut rng = Chance::from_seed(12);
        let mut beta = Beta::new(a, b).unwrap();
        let n = 100_000;
        let xs: Vec<f64> = (0..n).map(|_| beta.sample(&mut rng)).collect();
        let mean = xs.iter().sum::<f64>() / n as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;

        assert_relative_eq!(mean, a / (a + b), max_relative = 0.02);
        assert_relative_eq!(var, a * b / ((a + b).powi(2) * (a + b + 1.0)), max_relative = 0.05);
        assert!(xs.iter().all(|&x| (0.0..=1.0).contains(&x)));
    }

    #[test]
    fn test_error_names_the_parameter() {
        let err = Beta::new(1.0_f64, -1.0).unwrap_err();
        assert!(matches!(err, ChanceError::ArgumentOutOfRange { name: "beta", .. }));
    }
}
