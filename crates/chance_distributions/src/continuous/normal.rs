//! Normal distribution by the Marsaglia polar method.

use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_finite, require_positive, ChanceError};

/// Standard normal deviates, two per accepted polar pair.
///
/// The second deviate of each pair is cached and returned by the next call,
/// so a stream of deviates costs one logarithm and one square root per two
/// samples. The cache is cleared on construction and consumed on every
/// other call.
///
/// # Algorithm
///
/// Draws `(u, v)` uniformly in the square `[-1, 1)²` until
/// `0 < s = u² + v² < 1`, then returns `u·m` and caches `v·m` with
/// `m = √(−2 ln s) / √s`. Splitting the square root keeps `m` finite for
/// narrow representations.
#[derive(Debug, Clone, Default)]
pub struct StandardNormal<T: Real> {
    spare: Option<T>,
}

impl<T: Real> StandardNormal<T> {
    /// Creates a sampler with an empty cache.
    #[inline]
    pub fn new() -> Self {
        Self { spare: None }
    }

    /// Returns `true` while a cached deviate is waiting.
    #[inline]
    pub fn has_spare(&self) -> bool {
        self.spare.is_some()
    }
}

impl<T: Real> Distribution for StandardNormal<T> {
    type Output = T;

    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> T {
        if let Some(spare) = self.spare.take() {
            return spare;
        }
        let one = T::one();
        let two = T::from_f64(2.0);
        loop {
            let u = two * T::sample_unit(rng) - one;
            let v = two * T::sample_unit(rng) - one;
            let s = u * u + v * v;
            if s < one && s > T::zero() {
                let m = (-(two * s.ln())).sqrt() / s.sqrt();
                self.spare = Some(v * m);
                return u * m;
            }
        }
    }
}

/// Normal distribution `N(mean, std_dev²)`.
///
/// # Examples
///
/// ```rust
/// use chance_core::rng::Chance;
/// use chance_distributions::continuous::Normal;
/// use chance_distributions::Distribution;
///
/// let mut rng = Chance::from_seed(42);
/// let mut normal = Normal::new(100.0_f64, 15.0).unwrap();
/// let iq = normal.sample(&mut rng);
/// assert!(iq.is_finite());
///
/// assert!(Normal::new(0.0_f64, 0.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Normal<T: Real> {
    mean: T,
    std_dev: T,
    standard: StandardNormal<T>,
}

impl<T: Real> Normal<T> {
    /// Creates a normal distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` if `mean` is not finite or `std_dev` is
    /// not finite and positive.
    pub fn new(mean: T, std_dev: T) -> Result<Self, ChanceError> {
        Ok(Self {
            mean: require_finite("mean", mean)?,
            std_dev: require_positive("std_dev", std_dev)?,
            standard: StandardNormal::new(),
        })
    }

    /// Mean.
    #[inline]
    pub fn mean(&self) -> T {
        self.mean
    }

    /// Standard deviation.
    #[inline]
    pub fn std_dev(&self) -> T {
        self.std_dev
    }
}

impl<T: Real> Distribution for Normal<T> {
    type Output = T;

    #[inline]
    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> T {
        self.mean + self.std_dev * self.standard.sample(rng)
    }
}
