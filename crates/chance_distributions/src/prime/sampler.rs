//! Uniform sampling of primes from an integer range.

use super::primality::is_prime;
use crate::sampler::Distribution;
use chance_core::config::{ChanceConfig, DEFAULT_PRIME_MIN_POPULATION};
use chance_core::rng::BitSource;
use chance_core::types::ChanceError;
use chance_core::uniform::IntRange;
use std::fmt::{Debug, Display};
use tracing::debug;

/// Ranges with at most this many candidates are counted exactly.
pub const EXACT_COUNT_LIMIT: u64 = 2_048;

/// Integer types the prime sampler can return.
pub trait PrimeInt: Copy + PartialOrd + Debug + Display + Send + Sync + 'static {
    /// Widens to `i128` without loss.
    fn to_i128(self) -> i128;

    /// Narrows a prime known to lie within the type's range.
    fn from_u64(value: u64) -> Self;
}

macro_rules! impl_prime_int {
    ($($t:ty),*) => {
        $(
            impl PrimeInt for $t {
                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_u64(value: u64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_prime_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Uniform distribution over the primes in `[min, max)`.
///
/// Each draw picks a candidate uniformly from the range (below 2 nothing is
/// prime, so the candidate range starts at 2) and keeps it if it is prime.
/// Every prime in the range is therefore equally likely.
///
/// Construction checks that sampling can terminate before any loop starts:
///
/// - ranges of at most 2048 candidates are counted exactly, and a range
///   without primes fails with `InvalidOperation`;
/// - wider ranges always contain a prime, since no gap between consecutive
///   primes below 2^64 reaches 1552, and their population is estimated as
///   `width / ln(max)`;
/// - a population below the configured minimum fails with
///   `ArgumentOutOfRange`.
///
/// # Examples
///
/// ```rust
/// use chance_core::rng::Chance;
/// use chance_distributions::prime::{is_prime, Primes};
/// use chance_distributions::Distribution;
///
/// let mut rng = Chance::from_seed(1337);
/// let mut primes = Primes::new(1_000_u32, 2_000).unwrap();
/// let p = primes.sample(&mut rng);
/// assert!((1_000..2_000).contains(&p) && is_prime(p as u64));
///
/// assert!(Primes::new(24_u32, 29).is_err()); // no primes in [24, 29)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Primes<I: PrimeInt> {
    min: I,
    max: I,
    candidates: IntRange<u64>,
    population: f64,
}

impl<I: PrimeInt> Primes<I> {
    /// Primes in `[min, max)` with the default minimum population.
    ///
    /// # Errors
    ///
    /// - `ArgumentOutOfRange` unless `min < max`, or if the expected
    ///   population is below the minimum
    /// - `InvalidOperation` if the range contains no primes
    pub fn new(min: I, max: I) -> Result<Self, ChanceError> {
        Self::with_min_population(min, max, DEFAULT_PRIME_MIN_POPULATION)
    }

    /// Primes in `[min, max)` with the minimum population from `config`.
    ///
    /// # Errors
    ///
    /// As for [`Primes::new`].
    pub fn with_config(min: I, max: I, config: &ChanceConfig) -> Result<Self, ChanceError> {
        Self::with_min_population(min, max, config.prime_min_population())
    }

    /// Primes in `[min, max)`, failing when fewer than `min_population`
    /// primes are expected.
    ///
    /// # Errors
    ///
    /// As for [`Primes::new`], plus `ArgumentOutOfRange` if
    /// `min_population` is negative or not finite.
    pub fn with_min_population(min: I, max: I, min_population: f64) -> Result<Self, ChanceError> {
        if !min_population.is_finite() || min_population < 0.0 {
            return Err(ChanceError::argument(
                "min_population",
                format!("must be finite and non-negative, got {}", min_population),
            ));
        }
        if !(min < max) {
            return Err(ChanceError::argument(
                "max",
                format!("must exceed min ({}), got {}", min, max),
            ));
        }

        let low = min.to_i128().max(2);
        let high = max.to_i128();
        if high <= low {
            return Err(no_primes(min, max));
        }
        // both bounds lie in [2, 2^64) here
        let (low, high) = (low as u64, high as u64);
        let width = high - low;

        let exact = width <= EXACT_COUNT_LIMIT;
        let population = if exact {
            let count = (low..high).filter(|&n| is_prime(n)).count();
            if count == 0 {
                return Err(no_primes(min, max));
            }
            count as f64
        } else {
            width as f64 / (high as f64).ln()
        };

        if population < min_population {
            return Err(ChanceError::argument(
                "max",
                format!(
                    "range [{}, {}) holds about {:.1} primes, below the minimum of {}",
                    min, max, population, min_population
                ),
            ));
        }

        debug!(
            min = %min,
            max = %max,
            population,
            exact,
            "constructed prime sampler"
        );

        Ok(Self {
            min,
            max,
            candidates: IntRange::new(low, high)?,
            population,
        })
    }

    /// Lower bound.
    #[inline]
    pub fn min(&self) -> I {
        self.min
    }

    /// Exclusive upper bound.
    #[inline]
    pub fn max(&self) -> I {
        self.max
    }

    /// Number of primes in the range: exact for narrow ranges, estimated
    /// otherwise.
    #[inline]
    pub fn population(&self) -> f64 {
        self.population
    }
}

fn no_primes<I: PrimeInt>(min: I, max: I) -> ChanceError {
    ChanceError::InvalidOperation(format!("range [{}, {}) contains no primes", min, max))
}

impl<I: PrimeInt> Distribution for Primes<I> {
    type Output = I;

    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> I {
        loop {
            let candidate = self.candidates.sample(rng);
            if is_prime(candidate) {
                return I::from_u64(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chance_core::rng::Chance;

    #[test]
    fn test_every_prime_is_reachable() {
        let mut rng = Chance::from_seed(100);
        let mut primes = Primes::new(0_u8, 30).unwrap();
        assert_eq!(primes.population(), 10.0);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..2_000 {
            seen.insert(primes.sample(&mut rng));
        }
        assert_eq!(
            seen.into_iter().collect::<Vec<_>>(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn test_prime_free_ranges() {
        for (min, max) in [(24_i64, 29), (-100, 2), (0, 1), (114, 127)] {
            let err = Primes::new(min, max).unwrap_err();
            assert!(matches!(err, ChanceError::InvalidOperation(_)), "[{}, {})", min, max);
        }
    }

    #[test]
    fn test_reversed_range() {
        let err = Primes::new(10_u32, 10).unwrap_err();
        assert!(matches!(err, ChanceError::ArgumentOutOfRange { .. }));
    }

    #[test]
    fn test_min_population_guard() {
        // [1000, 1010) holds 1009 only
        assert!(Primes::new(1_000_u32, 1_010).is_ok());
        let err = Primes::with_min_population(1_000_u32, 1_010, 2.0).unwrap_err();
        assert!(matches!(err, ChanceError::ArgumentOutOfRange { .. }));

        let config = ChanceConfig::builder().prime_min_population(5.0).build().unwrap();
        assert!(Primes::with_config(1_000_u32, 1_010, &config).is_err());
        assert!(Primes::with_config(1_000_u32, 2_000, &config).is_ok());
    }

    #[test]
    fn test_wide_ranges_are_estimated() {
        let primes = Primes::new(0_u64, u64::MAX).unwrap();
        assert!(primes.population() > 1e17);

        let mut rng = Chance::from_seed(101);
        let mut primes = Primes::new(i64::MAX - 1_000_000, i64::MAX).unwrap();
        for _ in 0..20 {
            let p = primes.sample(&mut rng);
            assert!(p >= i64::MAX - 1_000_000 && is_prime(p as u64));
        }
    }
}
