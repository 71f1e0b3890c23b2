//! Cauchy distribution as a ratio of normal deviates.

use super::normal::StandardNormal;
use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_finite, require_positive, ChanceError};

/// Cauchy distribution with location `x₀` and scale `γ`.
///
/// Returns `x₀ + γ·Z₁/Z₂` for independent standard normals, which needs no
/// tangent evaluation and works unchanged for the decimal representation.
#[derive(Debug, Clone)]
pub struct Cauchy<T: Real> {
    location: T,
    scale: T,
    normal: StandardNormal<T>,
}

impl<T: Real> Cauchy<T> {
    /// Creates a Cauchy distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` if `location` is not finite or `scale`
    /// is not finite and positive.
    pub fn new(location: T, scale: T) -> Result<Self, ChanceError> {
        Ok(Self {
            location: require_finite("location", location)?,
            scale: require_positive("scale", scale)?,
            normal: StandardNormal::new(),
        })
    }
}

impl<T: Real> Distribution for Cauchy<T> {
    type Output = T;

    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> T {
        loop {
            let numerator = self.normal.sample(rng);
            let denominator = self.normal.sample(rng);
            if denominator != T::zero() {
                return self.location + self.scale * (numerator / denominator);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chance_core::rng::Chance;

    #[test]
    fn test_median_and_quartiles() {
        let mut rng = Chance::from_seed(18);
        let mut cauchy = Cauchy::new(2.0_f64, 0.5).unwrap();
        let mut xs: Vec<f64> = (0..100_001).map(|_| cauchy.sample(&mut rng)).collect();
        xs.sort_by(|a, b| a.total_cmp(b));
        let q1 = xs[25_000];
        let median = xs[50_000];
        let q3 = xs[75_000];
        assert!((median - 2.0).abs() < 0.02, "median {}", median);
        assert!((q1 - 1.5).abs() < 0.03, "q1 {}", q1);
        assert!((q3 - 2.5).abs() < 0.03, "q3 {}", q3);
    }
}
