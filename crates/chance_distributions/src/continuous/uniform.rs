//! Continuous uniform distribution.

use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_ordered, ChanceError};

/// Uniform distribution on `[min, max)`.
///
/// Draws come straight from the uniform real layer; values that round up to
/// `max` are redrawn so the upper bound is never returned.
#[derive(Debug, Clone, Copy)]
pub struct ContinuousUniform<T: Real> {
    min: T,
    max: T,
    width: Option<T>,
}

impl<T: Real> ContinuousUniform<T> {
    /// Creates a uniform distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless both bounds are finite and
    /// `min < max`.
    pub fn new(min: T, max: T) -> Result<Self, ChanceError> {
        let (min, max) = require_ordered("min", min, "max", max)?;
        Ok(Self {
            min,
            max,
            width: max.checked_sub(min),
        })
    }

    /// Lower bound.
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// Exclusive upper bound.
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }
}

impl<T: Real> Distribution for ContinuousUniform<T> {
    type Output = T;

    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> T {
        loop {
            let u = T::sample_unit(rng);
            let value = match self.width {
                Some(width) => self.min + width * u,
                None => self.min - self.min * u + self.max * u,
            };
            if value < self.max {
                return value;
            }
        }
    }
}
