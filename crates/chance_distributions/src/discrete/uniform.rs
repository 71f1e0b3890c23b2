//! Discrete uniform distribution over an integer range.

use crate::sampler::Distribution;
use chance_core::rng::BitSource;
use chance_core::types::ChanceError;
use chance_core::uniform::{IntRange, UniformInt};

/// Uniform distribution over an integer range of any width from 8 to 128
/// bits.
///
/// A thin wrapper over [`IntRange`]: sampling is overhang rejection with no
/// modulo bias, and the full domain of a type draws without rejection.
///
/// # Examples
///
/// ```rust
/// use chance_core::rng::Chance;
/// use chance_distributions::discrete::DiscreteUniform;
/// use chance_distributions::Distribution;
///
/// let mut rng = Chance::from_seed(3);
/// let mut die = DiscreteUniform::new_inclusive(1_u8, 6).unwrap();
/// assert!((1..=6).contains(&die.sample(&mut rng)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DiscreteUniform<I: UniformInt> {
    range: IntRange<I>,
}

impl<I: UniformInt> DiscreteUniform<I> {
    /// Uniform over `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless `min < max`.
    pub fn new(min: I, max: I) -> Result<Self, ChanceError> {
        Ok(Self {
            range: IntRange::new(min, max)?,
        })
    }

    /// Uniform over `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless `min <= max`.
    pub fn new_inclusive(min: I, max: I) -> Result<Self, ChanceError> {
        Ok(Self {
            range: IntRange::new_inclusive(min, max)?,
        })
    }

    /// The underlying range.
    #[inline]
    pub fn range(&self) -> &IntRange<I> {
        &self.range
    }
}

impl<I: UniformInt> Distribution for DiscreteUniform<I> {
    type Output = I;

    #[inline]
    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> I {
        self.range.sample(rng)
    }
}
