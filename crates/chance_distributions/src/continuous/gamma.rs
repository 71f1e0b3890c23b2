//! Gamma distribution by Marsaglia-Tsang squeeze rejection.

use super::normal::StandardNormal;
use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_positive, ChanceError};
use chance_core::uniform::UniformExt;

/// Gamma distribution with shape `k` and scale `θ` (mean `kθ`).
///
/// Every Gamma-derived sampler in this crate (Beta, Chi, Chi-squared,
/// Student's t, Fisher's F, Dirichlet, Wishart, Negative Binomial) draws
/// through this type.
///
/// # Algorithm
///
/// Marsaglia & Tsang (2000), "A Simple Method for Generating Gamma
/// Variables". For `k ≥ 1`, with `d = k − 1/3` and `c = 1/√(9d)`, draw a
/// standard normal `x`, set `v = (1 + cx)³` and accept `dv` when the cheap
/// squeeze `u < 1 − 0.0331x⁴` or the exact test
/// `ln u < x²/2 + d(1 − v + ln v)` holds. For `k < 1` the sampler draws
/// with shape `k + 1` and applies the boost `U^(1/k)`.
///
/// # Examples
///
/// ```rust
/// use chance_core::rng::Chance;
/// use chance_distributions::continuous::Gamma;
/// use chance_distributions::Distribution;
///
/// let mut rng = Chance::from_seed(7);
/// let mut gamma = Gamma::new(2.5_f64, 1.5).unwrap();
/// assert!(gamma.sample(&mut rng) > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Gamma<T: Real> {
    shape: T,
    scale: T,
    d: T,
    c: T,
    boost: Option<T>,
    normal: StandardNormal<T>,
}

impl<T: Real> Gamma<T> {
    /// Creates a Gamma distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless `shape` and `scale` are finite
    /// and positive.
    pub fn new(shape: T, scale: T) -> Result<Self, ChanceError> {
        let shape = require_positive("shape", shape)?;
        let scale = require_positive("scale", scale)?;

        let one = T::one();
        let (working, boost) = if shape < one {
            (shape + one, Some(one / shape))
        } else {
            (shape, None)
        };
        let d = working - T::from_f64(1.0 / 3.0);
        let c = one / (T::from_f64(9.0) * d).sqrt();

        Ok(Self {
            shape,
            scale,
            d,
            c,
            boost,
            normal: StandardNormal::new(),
        })
    }

    /// Shape parameter.
    #[inline]
    pub fn shape(&self) -> T {
        self.shape
    }

    /// Scale parameter.
    #[inline]
    pub fn scale(&self) -> T {
        self.scale
    }

    fn sample_unit_scale<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> T {
        let one = T::one();
        let half = T::from_f64(0.5);
        let squeeze = T::from_f64(0.0331);
        loop {
            let x = self.normal.sample(rng);
            let v = one + self.c * x;
            if v <= T::zero() {
                continue;
            }
            let v = v * v * v;
            let u: T = rng.next_unit_open_closed();
            let x2 = x * x;
            if u < one - squeeze * x2 * x2 {
                return self.d * v;
            }
            if u.ln() < half * x2 + self.d * (one - v + v.ln()) {
                return self.d * v;
            }
        }
    }
}

impl<T: Real> Distribution for Gamma<T> {
    type Output = T;

    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> T {
        let g = self.sample_unit_scale(rng);
        let g = match self.boost {
            Some(inv_shape) => {
                let u: T = rng.next_unit_open_closed();
                g * u.powf(inv_shape)
            }
            None => g,
        };
        g * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chance_core::rng::Chance;

    fn moments(gamma: &mut Gamma<f64>, n: usize) -> (f64, f64) {
        let mut rng = Chance::from_seed(2_500);
        let xs: Vec<f64> = (0..n).map(|_| gamma.sample(&mut rng)).collect();
        let mean = xs.iter().sum::<f64>() / n as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        (mean, var)
    }

    #[test]
    fn test_moments_large_shape() {
        let mut gamma = Gamma::new(2.5, 1.5).unwrap();
        let (mean, var) = moments(&mut gamma, 100_000);
        assert_relative_eq!(mean, 3.75, max_relative = 0.02);
        assert_relative_eq!(var.sqrt(), 2.5_f64.sqrt() * 1.5, max_relative = 0.02);
    }

    #[test]
    fn test_moments_small_shape_boost() {
        let mut gamma = Gamma::new(0.4, 2.0).unwrap();
        let (mean, var) = moments(&mut gamma, 100_000);
        assert_relative_eq!(mean, 0.8, max_relative = 0.03);
        assert_relative_eq!(var, 1.6, max_relative = 0.06);
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(Gamma::new(0.0_f64, 1.0).is_err());
        assert!(Gamma::new(1.0_f64, -2.0).is_err());
        assert!(Gamma::new(f32::NAN, 1.0).is_err());
    }

    #[test]
    fn test_decimal_draws_are_positive() {
        use rust_decimal::Decimal;

        let mut rng = Chance::from_seed(8);
        let mut gamma = Gamma::new(Decimal::from(3), Decimal::ONE).unwrap();
        for _ in 0..200 {
            assert!(gamma.sample(&mut rng) > Decimal::ZERO);
        }
    }
}
