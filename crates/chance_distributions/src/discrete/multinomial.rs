//! Multinomial distribution by conditional binomials.

use super::binomial::BinomialKernel;
use crate::sampler::{Distribution, FillDistribution};
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_non_negative, ChanceError};
use std::marker::PhantomData;

/// Multinomial distribution: category counts of `n` independent
/// categorical trials.
///
/// Category `i` receives a binomial share of the trials left after
/// categories `0..i`, with its probability renormalised by the mass left.
/// The last category takes whatever remains, so counts always sum to `n`.
///
/// # Examples
///
/// ```rust
/// use chance_core::rng::Chance;
/// use chance_distributions::discrete::Multinomial;
/// use chance_distributions::FillDistribution;
///
/// let mut rng = Chance::from_seed(5);
/// let mut multinomial = Multinomial::new(100, &[0.2_f64, 0.3, 0.5]).unwrap();
/// let mut counts = [0u64; 3];
/// multinomial.sample_into(&mut rng, &mut counts);
/// assert_eq!(counts.iter().sum::<u64>(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct Multinomial<T: Real> {
    n: u64,
    probabilities: Vec<f64>,
    weight_type: PhantomData<T>,
}

impl<T: Real> Multinomial<T> {
    /// Creates a multinomial distribution from unnormalised weights.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` if `weights` is empty, any weight is
    /// negative or not finite, or the weights do not have a finite positive
    /// sum.
    pub fn new(n: u64, weights: &[T]) -> Result<Self, ChanceError> {
        if weights.is_empty() {
            return Err(ChanceError::argument("weights", "must not be empty"));
        }
        let mut total = 0.0_f64;
        for &weight in weights {
            total += require_non_negative("weights", weight)?.to_f64();
        }
        if !total.is_finite() || !(total > 0.0) {
            return Err(ChanceError::argument(
                "weights",
                format!("must have a finite positive sum, got {}", total),
            ));
        }
        Ok(Self {
            n,
            probabilities: weights.iter().map(|w| w.to_f64() / total).collect(),
            weight_type: PhantomData,
        })
    }

    /// Number of trials.
    #[inline]
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Number of categories.
    #[inline]
    pub fn categories(&self) -> usize {
        self.probabilities.len()
    }
}

impl<T: Real> FillDistribution for Multinomial<T> {
    type Buffer = [u64];

    fn sample_into<R: BitSource + ?Sized>(&mut self, rng: &mut R, out: &mut [u64]) {
        assert_eq!(
            out.len(),
            self.probabilities.len(),
            "count buffer must have one slot per category"
        );
        let mut trials_left = self.n;
        let mut mass_left = 1.0_f64;
        let last = out.len() - 1;
        for (i, slot) in out.iter_mut().enumerate() {
            if trials_left == 0 {
                *slot = 0;
                continue;
            }
            if i == last {
                *slot = trials_left;
                break;
            }
            let p = self.probabilities[i];
            let conditional = if mass_left > 0.0 {
                (p / mass_left).min(1.0)
            } else {
                1.0
            };
            let count = BinomialKernel::new(trials_left, conditional).sample(rng);
            *slot = count;
            trials_left -= count;
            mass_left -= p;
        }
    }
}

impl<T: Real> Distribution for Multinomial<T> {
    type Output = Vec<u64>;

    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> Vec<u64> {
        let mut counts = vec![0; self.categories()];
        self.sample_into(rng, &mut counts);
        counts
    }
}
