//! Bernoulli distribution.

use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_probability, ChanceError};

/// Bernoulli distribution: `true` with probability `p`.
///
/// One comparison of a unit draw against `p`, in the representation of
/// `p`. `p = 0` never succeeds and `p = 1` always does.
#[derive(Debug, Clone, Copy)]
pub struct Bernoulli<T: Real> {
    p: T,
}

impl<T: Real> Bernoulli<T> {
    /// Creates a Bernoulli distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless `p` lies in `[0, 1]`.
    pub fn new(p: T) -> Result<Self, ChanceError> {
        Ok(Self {
            p: require_probability("p", p)?,
        })
    }

    /// Success probability.
    #[inline]
    pub fn p(&self) -> T {
        self.p
    }
}

impl<T: Real> Distribution for Bernoulli<T> {
    type Output = bool;

    #[inline]
    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> bool {
        T::sample_unit(rng) < self.p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chance_core::rng::Chance;

    #[test]
    fn test_extremes() {
        let mut rng = Chance::from_seed(31);
        let mut never = Bernoulli::new(0.0_f64).unwrap();
        let mut always = Bernoulli::new(1.0_f32).unwrap();
        for _ in 0..1_000 {
            assert!(!never.sample(&mut rng));
            assert!(always.sample(&mut rng));
        }
    }

    #[test]
    fn test_frequency() {
        let mut rng = Chance::from_seed(32);
        let mut coin = Bernoulli::new(0.3_f64).unwrap();
        let n = 100_000;
        let hits = (0..n).filter(|_| coin.sample(&mut rng)).count();
        assert!((hits as f64 / n as f64 - 0.3).abs() < 0.01);
    }

    #[test]
    fn test_rejects_out_of_support() {
        assert!(Bernoulli::new(1.5_f64).is_err());
        assert!(Bernoulli::new(-0.1_f64).is_err());
        assert!(Bernoulli::new(f64::NAN).is_err());
    }
}
