//! Triangular distribution by inversion.

use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_finite, require_ordered, ChanceError};

/// Triangular distribution on `[min, max]` with peak at `mode`.
#[derive(Debug, Clone, Copy)]
pub struct Triangular<T: Real> {
    min: T,
    max: T,
    // distance from each bound to the mode, halved when the span overflows
    lower: T,
    upper: T,
    halved: bool,
    split: T,
}

impl<T: Real> Triangular<T> {
    /// Creates a triangular distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless all three values are finite,
    /// `min < max`, and `min <= mode <= max`.
    pub fn new(min: T, mode: T, max: T) -> Result<Self, ChanceError> {
        let (min, max) = require_ordered("min", min, "max", max)?;
        let mode = require_finite("mode", mode)?;
        if mode < min || mode > max {
            return Err(ChanceError::argument(
                "mode",
                format!("must lie in [{}, {}], got {}", min, max, mode),
            ));
        }
        let (lower, upper, halved) = match max.checked_sub(min) {
            Some(_) => (mode - min, max - mode, false),
            None => {
                let half = T::from_f64(0.5);
                (mode * half - min * half, max * half - mode * half, true)
            }
        };
        Ok(Self {
            min,
            max,
            lower,
            upper,
            halved,
            split: lower / (lower + upper),
        })
    }
}

impl<T: Real> Distribution for Triangular<T> {
    type Output = T;

    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> T {
        let u = T::sample_unit(rng);
        if u < self.split {
            let step = self.lower * (u / self.split).sqrt();
            if self.halved {
                self.min + step + step
            } else {
                self.min + step
            }
        } else {
            let step = self.upper * ((T::one() - u) / (T::one() - self.split)).sqrt();
            if self.halved {
                self.max - step - step
            } else {
                self.max - step
            }
        }
    }
}
