//! Geometric distribution by inversion.

use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_probability, ChanceError};
use chance_core::uniform::UniformExt;

/// `−ln` of the smallest unit draw, `2^−52`.
const MAX_LOG_DEPTH: f64 = 52.0 * std::f64::consts::LN_2;

/// Geometric distribution: failures before the first success in trials
/// with success probability `p`.
///
/// Returns `⌊ln U / ln(1 − p)⌋` with `U` drawn from `(0, 1]`. Success
/// probabilities small enough for that quotient to pass `u64::MAX` are
/// rejected at construction.
#[derive(Debug, Clone, Copy)]
pub struct Geometric<T: Real> {
    p: T,
    ln_q: f64,
}

impl<T: Real> Geometric<T> {
    /// Creates a Geometric distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless `p` lies in `(0, 1]` and is
    /// large enough (about `1.95e-18`) for every draw to fit in a `u64`.
    pub fn new(p: T) -> Result<Self, ChanceError> {
        let p = require_probability("p", p)?;
        if p == T::zero() {
            return Err(ChanceError::argument("p", "must be positive, got 0"));
        }
        let ln_q = (-p.to_f64()).ln_1p();
        if !(MAX_LOG_DEPTH / -ln_q < u64::MAX as f64) {
            return Err(ChanceError::argument(
                "p",
                format!("too small for 64-bit counts, got {}", p),
            ));
        }
        Ok(Self { p, ln_q })
    }

    /// Success probability.
    #[inline]
    pub fn p(&self) -> T {
        self.p
    }
}

impl<T: Real> Distribution for Geometric<T> {
    type Output = u64;

    #[inline]
    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> u64 {
        if self.ln_q == f64::NEG_INFINITY {
            return 0;
        }
        let u: f64 = rng.next_unit_open_closed();
        (u.ln() / self.ln_q).floor() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chance_core::rng::Chance;

    #[test]
    fn test_mean() {
        // (1 − p) / p
        let mut rng = Chance::from_seed(60);
        let mut geometric = Geometric::new(0.2_f64).unwrap();
        let n = 100_000;
        let mean = (0..n).map(|_| geometric.sample(&mut rng) as f64).sum::<f64>() / n as f64;
        assert_relative_eq!(mean, 4.0, max_relative = 0.02);
    }

    #[test]
    fn test_certain_success() {
        let mut rng = Chance::from_seed(61);
        let mut geometric = Geometric::new(1.0_f32).unwrap();
        assert!((0..100).all(|_| geometric.sample(&mut rng) == 0));
    }

    #[test]
    fn test_rejects_zero_probability() {
        assert!(Geometric::new(0.0_f64).is_err());
    }

    /// Probabilities near the 64-bit limit are accepted or refused cleanly.
    #[test]
    fn test_probability_limit() {
        assert!(Geometric::new(1e-300_f64).is_err());
        assert!(Geometric::new(1e-18_f64).is_err());
        assert!(Geometric::new(f64::MIN_POSITIVE).is_err());

        let mut rng = Chance::from_seed(62);
        let mut geometric = Geometric::new(2e-18_f64).unwrap();
        for _ in 0..1_000 {
            assert!(geometric.sample(&mut rng) < u64::MAX);
        }
    }
}
