//! Laplace distribution.

use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_finite, require_positive, ChanceError};
use chance_core::uniform::UniformExt;

/// Laplace (double exponential) distribution with location `μ` and scale
/// `b`.
///
/// An exponential magnitude with a fair random sign.
#[derive(Debug, Clone, Copy)]
pub struct Laplace<T: Real> {
    location: T,
    scale: T,
}

impl<T: Real> Laplace<T> {
    /// Creates a Laplace distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` if `location` is not finite or `scale`
    /// is not finite and positive.
    pub fn new(location: T, scale: T) -> Result<Self, ChanceError> {
        Ok(Self {
            location: require_finite("location", location)?,
            scale: require_positive("scale", scale)?,
        })
    }
}

impl<T: Real> Distribution for Laplace<T> {
    type Output = T;

    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> T {
        let u: T = rng.next_unit_open_closed();
        let magnitude = -(self.scale * u.ln());
        if rng.next_bool() {
            self.location + magnitude
        } else {
            self.location - magnitude
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chance_core::rng::Chance;

    #[test]
    fn test_moments() {
        // Var = 2b²
        let mut rng = Chance::from_seed(22);
        let mut laplace = Laplace::new(-1.0_f64, 0.5).unwrap();
        let n = 100_000;
        let xs: Vec<f64> = (0..n).map(|_| laplace.sample(&mut rng)).collect();
        let mean = xs.iter().sum::<f64>() / n as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert!((mean + 1.0).abs() < 0.01, "mean {}", mean);
        assert_relative_eq!(var, 0.5, max_relative = 0.03);
    }
}
