//! Zipf distribution by rejection-inversion.
//!
//! Follows W. Hörmann and G. Derflinger, "Rejection-inversion to generate
//! variates from monotone discrete distributions", ACM TOMACS 6(3), 1996.
//! The envelope is the density `x^(−s)` over `[0.5, n + 0.5]`. Its integral
//! is written with `expm1`/`ln_1p` quotients so `s = 1` needs no special
//! case.

use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_non_negative, ChanceError};
use chance_core::uniform::UniformExt;

/// Zipf distribution over ranks `1..=n` with `P(k) ∝ k^(−s)`.
///
/// # Algorithm
///
/// Draws a point under the integrated envelope, inverts it and rounds to
/// the nearest rank. A squeeze accepts most draws outright; the rest are
/// checked against the envelope mass of the rank's own cell. The acceptance
/// rate is bounded away from zero for every `n` and `s`, so the cost is
/// amortised `O(1)` and construction needs no table.
///
/// # Examples
///
/// ```rust
/// use chance_core::rng::Chance;
/// use chance_distributions::discrete::Zipf;
/// use chance_distributions::Distribution;
///
/// let mut rng = Chance::from_seed(4);
/// let mut words = Zipf::new(10_000, 1.07_f64).unwrap();
/// let rank = words.sample(&mut rng);
/// assert!((1..=10_000).contains(&rank));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Zipf<T: Real> {
    exponent: T,
    n: f64,
    envelope: Envelope,
    // integrated envelope at the outer edges of ranks 1 and n
    area_first: f64,
    area_last: f64,
    squeeze: f64,
}

impl<T: Real> Zipf<T> {
    /// Creates a Zipf distribution over `n` ranks with exponent `s`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` if `n` is zero or `s` is negative or
    /// not finite.
    pub fn new(n: u64, s: T) -> Result<Self, ChanceError> {
        if n == 0 {
            return Err(ChanceError::argument("n", "must be at least 1, got 0"));
        }
        let exponent = require_non_negative("s", s)?;
        let envelope = Envelope {
            s: exponent.to_f64(),
        };
        let n = n as f64;
        Ok(Self {
            exponent,
            n,
            envelope,
            area_first: envelope.integral(1.5) - 1.0,
            area_last: envelope.integral(n + 0.5),
            squeeze: 2.0 - envelope.inverse(envelope.integral(2.5) - envelope.density(2.0)),
        })
    }

    /// Exponent.
    #[inline]
    pub fn exponent(&self) -> T {
        self.exponent
    }

    /// Number of ranks.
    #[inline]
    pub fn n(&self) -> u64 {
        self.n as u64
    }
}

impl<T: Real> Distribution for Zipf<T> {
    type Output = u64;

    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> u64 {
        let envelope = self.envelope;
        loop {
            let u = self.area_last + rng.next_unit::<f64>() * (self.area_first - self.area_last);
            let x = envelope.inverse(u);
            let k = (x + 0.5).floor().max(1.0).min(self.n);
            if k - x <= self.squeeze
                || u >= envelope.integral(k + 0.5) - envelope.density(k)
            {
                return k as u64;
            }
        }
    }
}

/// Continuous envelope `h(x) = x^(−s)` and its integral
/// `H(x) = (x^(1−s) − 1) / (1 − s)`.
#[derive(Debug, Clone, Copy)]
struct Envelope {
    s: f64,
}

impl Envelope {
    #[inline]
    fn density(&self, x: f64) -> f64 {
        (-self.s * x.ln()).exp()
    }

    #[inline]
    fn integral(&self, x: f64) -> f64 {
        let ln_x = x.ln();
        expm1_ratio((1.0 - self.s) * ln_x) * ln_x
    }

    #[inline]
    fn inverse(&self, area: f64) -> f64 {
        // clamped at −1 where ln_1p would leave its domain
        let t = (area * (1.0 - self.s)).max(-1.0);
        (ln_1p_ratio(t) * area).exp()
    }
}

/// `expm1(x) / x`, continuous at zero.
fn expm1_ratio(x: f64) -> f64 {
    if x.abs() > 1e-8 {
        x.exp_m1() / x
    } else {
        1.0 + x * 0.5 * (1.0 + x / 3.0 * (1.0 + 0.25 * x))
    }
}

/// `ln_1p(x) / x`, continuous at zero.
fn ln_1p_ratio(x: f64) -> f64 {
    if x.abs() > 1e-8 {
        x.ln_1p() / x
    } else {
        1.0 - x * (0.5 - x * (1.0 / 3.0 - 0.25 * x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chance_core::rng::Chance;

    fn frequencies(n: u64, s: f64, draws: usize) -> Vec<f64> {
        let mut rng = Chance::from_seed(90);
        let mut zipf = Zipf::new(n, s).unwrap();
        let mut counts = vec![0usize; n as usize];
        for _ in 0..draws {
            let rank = zipf.sample(&mut rng);
            assert!((1..=n).contains(&rank));
            counts[(rank - 1) as usize] += 1;
        }
        counts.iter().map(|&c| c as f64 / draws as f64).collect()
    }

    fn expected(n: u64, s: f64) -> Vec<f64> {
        let weights: Vec<f64> = (1..=n).map(|k| (k as f64).powf(-s)).collect();
        let total: f64 = weights.iter().sum();
        weights.iter().map(|w| w / total).collect()
    }

    #[test]
    fn test_matches_exact_masses() {
        for s in [0.0, 0.5, 1.0, 2.0] {
            let observed = frequencies(10, s, 200_000);
            for (o, e) in observed.iter().zip(expected(10, s)) {
                assert!((o - e).abs() < 0.005, "s = {}: observed {}, expected {}", s, o, e);
            }
        }
    }

    /// The envelope integral and its inverse agree, including at `s = 1`.
    #[test]
    fn test_envelope_inverse() {
        for s in [0.0, 0.5, 1.0, 1.0 + 1e-10, 3.0] {
            let envelope = Envelope { s };
            for x in [0.5, 1.0, 2.5, 40.0] {
                let back = envelope.inverse(envelope.integral(x));
                assert!((back - x).abs() < 1e-6 * x, "s = {}: {} -> {}", s, x, back);
            }
        }
    }

    #[test]
    fn test_huge_rank_count() {
        let mut rng = Chance::from_seed(92);
        let mut zipf = Zipf::new(u64::MAX, 1.2_f64).unwrap();
        for _ in 0..1_000 {
            assert!(zipf.sample(&mut rng) >= 1);
        }
    }

    #[test]
    fn test_single_rank() {
        let mut rng = Chance::from_seed(91);
        let mut zipf = Zipf::new(1, 1.5_f64).unwrap();
        assert_eq!(zipf.sample(&mut rng), 1);
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(Zipf::new(0, 1.0_f64).is_err());
        assert!(Zipf::new(10, -0.5_f64).is_err());
        assert!(Zipf::new(10, f64::NAN).is_err());
    }
}
