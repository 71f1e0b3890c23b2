//! Pareto distribution by inversion.

use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_positive, ChanceError};
use chance_core::uniform::UniformExt;

/// Pareto (type I) distribution with scale `x_m` and shape `α`.
///
/// Support is `[x_m, ∞)`. Returns `x_m·U^(−1/α)` with `U` drawn from
/// `(0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct Pareto<T: Real> {
    scale: T,
    neg_inv_shape: T,
}

impl<T: Real> Pareto<T> {
    /// Creates a Pareto distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless `scale` and `shape` are finite
    /// and positive.
    pub fn new(scale: T, shape: T) -> Result<Self, ChanceError> {
        let scale = require_positive("scale", scale)?;
        let shape = require_positive("shape", shape)?;
        Ok(Self {
            scale,
            neg_inv_shape: -(T::one() / shape),
        })
    }
}

impl<T: Real> Distribution for Pareto<T> {
    type Output = T;

    #[inline]
    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> T {
        let u: T = rng.next_unit_open_closed();
        self.scale * u.powf(self.neg_inv_shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chance_core::rng::Chance;

    #[test]
    fn test_support_and_mean() {
        // α·x_m / (α − 1)
        let mut rng = Chance::from_seed(21);
        let mut pareto = Pareto::new(2.0_f64, 5.0).unwrap();
        let n = 200_000;
        let xs: Vec<f64> = (0..n).map(|_| pareto.sample(&mut rng)).collect();
        assert!(xs.iter().all(|&x| x >= 2.0));
        let mean = xs.iter().sum::<f64>() / n as f64;
        assert_relative_eq!(mean, 2.5, max_relative = 0.01);
    }
}
