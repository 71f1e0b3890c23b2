//! Categorical distribution over weighted outcomes.

use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_non_negative, ChanceError};
use tracing::debug;

/// Categorical distribution: index `i` with probability proportional to
/// `weights[i]`.
///
/// Construction builds the cumulative-weight table once, in `O(k)`; each
/// draw is one unit draw and a binary search, in `O(log k)`. Construct the
/// sampler once and reuse it for repeated draws.
///
/// # Examples
///
/// ```rust
/// use chance_core::rng::Chance;
/// use chance_distributions::discrete::Categorical;
/// use chance_distributions::Distribution;
///
/// let mut rng = Chance::from_seed(1);
/// let mut loaded = Categorical::new(&[1.0_f64, 0.0, 3.0]).unwrap();
/// let face = loaded.sample(&mut rng);
/// assert!(face == 0 || face == 2);
/// ```
#[derive(Debug, Clone)]
pub struct Categorical<T: Real> {
    cumulative: Vec<T>,
    total: T,
}

impl<T: Real> Categorical<T> {
    /// Creates a categorical distribution from unnormalised weights.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` if `weights` is empty, any weight is
    /// negative or not finite, or the weights sum to zero or overflow.
    pub fn new(weights: &[T]) -> Result<Self, ChanceError> {
        if weights.is_empty() {
            return Err(ChanceError::argument("weights", "must not be empty"));
        }
        let mut cumulative = Vec::with_capacity(weights.len());
        let mut total = T::zero();
        for &weight in weights {
            total = total + require_non_negative("weights", weight)?;
            cumulative.push(total);
        }
        if !total.is_finite() || !(total > T::zero()) {
            return Err(ChanceError::argument(
                "weights",
                format!("must have a finite positive sum, got {}", total),
            ));
        }
        debug!(categories = weights.len(), "built categorical table");
        Ok(Self { cumulative, total })
    }

    /// Number of categories.
    #[inline]
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Always `false`: construction rejects empty weight lists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }
}

impl<T: Real> Distribution for Categorical<T> {
    type Output = usize;

    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> usize {
        loop {
            let target = T::sample_unit(rng) * self.total;
            let index = self.cumulative.partition_point(|&c| c <= target);
            // rounding can push the target onto the total
            if index < self.cumulative.len() {
                return index;
            }
        }
    }
}
