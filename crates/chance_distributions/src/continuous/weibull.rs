//! Weibull distribution by inversion.

use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_positive, ChanceError};
use chance_core::uniform::UniformExt;

/// Weibull distribution with shape `k` and scale `λ`.
///
/// Returns `λ·(−ln U)^(1/k)` with `U` drawn from `(0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct Weibull<T: Real> {
    scale: T,
    inv_shape: T,
}

impl<T: Real> Weibull<T> {
    /// Creates a Weibull distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless `shape` and `scale` are finite
    /// and positive.
    pub fn new(shape: T, scale: T) -> Result<Self, ChanceError> {
        let shape = require_positive("shape", shape)?;
        let scale = require_positive("scale", scale)?;
        Ok(Self {
            scale,
            inv_shape: T::one() / shape,
        })
    }
}

impl<T: Real> Distribution for Weibull<T> {
    type Output = T;

    #[inline]
    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> T {
        let u: T = rng.next_unit_open_closed();
        self.scale * (-u.ln()).powf(self.inv_shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chance_core::rng::Chance;

    #[test]
    fn test_shape_one_is_exponential() {
        let mut rng = Chance::from_seed(19);
        let mut weibull = Weibull::new(1.0_f64, 2.0).unwrap();
        let n = 100_000;
        let mean = (0..n).map(|_| weibull.sample(&mut rng)).sum::<f64>() / n as f64;
        assert_relative_eq!(mean, 2.0, max_relative = 0.02);
    }

    #[test]
    fn test_shape_two_mean() {
        // λ·Γ(1 + 1/2) = λ·√π/2
        let mut rng = Chance::from_seed(20);
        let mut weibull = Weibull::new(2.0_f64, 1.0).unwrap();
        let n = 100_000;
        let mean = (0..n).map(|_| weibull.sample(&mut rng)).sum::<f64>() / n as f64;
        assert_relative_eq!(mean, std::f64::consts::PI.sqrt() / 2.0, max_relative = 0.01);
    }
}
