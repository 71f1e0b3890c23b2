//! Exponential distribution by inversion.

use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_positive, ChanceError};
use chance_core::uniform::UniformExt;

/// Exponential distribution with rate `λ` (mean `1/λ`).
///
/// Returns `−ln(U)/λ` with `U` drawn from `(0, 1]`, so the logarithm is
/// always finite.
#[derive(Debug, Clone, Copy)]
pub struct Exponential<T: Real> {
    rate: T,
}

impl<T: Real> Exponential<T> {
    /// Creates an exponential distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless `rate` is finite and positive.
    pub fn new(rate: T) -> Result<Self, ChanceError> {
        Ok(Self {
            rate: require_positive("rate", rate)?,
        })
    }

    /// Rate parameter.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: Real> Distribution for Exponential<T> {
    type Output = T;

    #[inline]
    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> T {
        let u: T = rng.next_unit_open_closed();
        -u.ln() / self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chance_core::rng::Chance;

    #[test]
    fn test_mean() {
        let mut rng = Chance::from_seed(10);
        let mut exp = Exponential::new(1.0_f64).unwrap();
        let n = 100_000;
        let mean = (0..n).map(|_| exp.sample(&mut rng)).sum::<f64>() / n as f64;
        assert_relative_eq!(mean, 1.0, max_relative = 0.02);
    }

    #[test]
    fn test_never_negative() {
        let mut rng = Chance::from_seed(11);
        let mut exp = Exponential::new(3.0_f32).unwrap();
        assert!((0..10_000).all(|_| exp.sample(&mut rng) >= 0.0));
    }

    #[test]
    fn test_rejects_zero_rate() {
        assert!(Exponential::new(0.0_f64).is_err());
    }
}
