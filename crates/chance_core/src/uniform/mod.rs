//! Uniform integer and uniform real layers.
//!
//! [`UniformExt`] is implemented for every [`BitSource`], so any generator
//! gains unbiased range draws, unit draws for all four numeric
//! representations, and a few slice helpers.

pub mod int;
pub mod real;

pub use int::{IntRange, UniformInt, UniformWord};

use crate::numeric::Real;
use crate::rng::BitSource;
use crate::types::{require_ordered, ChanceError};

/// Uniform draws on top of a bit source.
///
/// # Examples
///
/// ```
/// use chance_core::rng::Chance;
/// use chance_core::uniform::UniformExt;
///
/// let mut rng = Chance::from_seed(42);
///
/// let die: u8 = rng.next_in_range_inclusive(1, 6).unwrap();
/// assert!((1..=6).contains(&die));
///
/// let u: f32 = rng.next_unit();
/// assert!((0.0..1.0).contains(&u));
///
/// let x = rng.next_real_in(-2.0_f64, 3.0).unwrap();
/// assert!((-2.0..3.0).contains(&x));
/// ```
pub trait UniformExt: BitSource {
    /// Uniform integer in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless `min < max`.
    fn next_in_range<I: UniformInt>(&mut self, min: I, max: I) -> Result<I, ChanceError> {
        Ok(IntRange::new(min, max)?.sample(self))
    }

    /// Uniform integer in `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` if `min > max`.
    fn next_in_range_inclusive<I: UniformInt>(
        &mut self,
        min: I,
        max: I,
    ) -> Result<I, ChanceError> {
        Ok(IntRange::new_inclusive(min, max)?.sample(self))
    }

    /// Uniform index in `[0, len)`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` when `len` is zero.
    fn next_below(&mut self, len: usize) -> Result<usize, ChanceError> {
        self.next_in_range(0, len)
    }

    /// Uniform value in `[0, 1)`.
    #[inline]
    fn next_unit<T: Real>(&mut self) -> T {
        T::sample_unit(self)
    }

    /// Uniform value in `(0, 1]`, safe to pass to a logarithm.
    #[inline]
    fn next_unit_open_closed<T: Real>(&mut self) -> T {
        T::one() - T::sample_unit(self)
    }

    /// Uniform value in `[min, max)`.
    ///
    /// Draws that round up to `max` are redrawn.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless both bounds are finite and
    /// `min < max`.
    fn next_real_in<T: Real>(&mut self, min: T, max: T) -> Result<T, ChanceError> {
        let (min, max) = require_ordered("min", min, "max", max)?;
        let width = max.checked_sub(min);
        loop {
            let u = T::sample_unit(self);
            let value = match width {
                Some(width) => min + width * u,
                // span exceeds the representation; interpolate instead
                None => min - min * u + max * u,
            };
            if value < max {
                return Ok(value);
            }
        }
    }

    /// Fair coin from the top bit of one 32-bit draw.
    #[inline]
    fn next_bool(&mut self) -> bool {
        self.next_u32() >> 31 == 1
    }

    /// Signed 32-bit integer over its full range.
    #[inline]
    fn next_i32(&mut self) -> i32 {
        self.next_u32() as i32
    }

    /// Shuffles `items` in place (Fisher-Yates).
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = <usize as UniformWord>::sample_below(self, i + 1);
            items.swap(i, j);
        }
    }

    /// Picks one element uniformly, or `None` from an empty slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(<usize as UniformWord>::sample_below(self, items.len()))
        }
    }
}

impl<R: BitSource + ?Sized> UniformExt for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Chance;
    use half::f16;
    use rust_decimal::Decimal;

    #[test]
    fn test_unit_ranges_for_every_representation() {
        let mut rng = Chance::from_seed(42);
        for _ in 0..10_000 {
            let a: f64 = rng.next_unit();
            let b: f32 = rng.next_unit();
            let c: f16 = rng.next_unit();
            let d: Decimal = rng.next_unit();
            assert!((0.0..1.0).contains(&a));
            assert!((0.0..1.0).contains(&b));
            assert!(c >= f16::ZERO && c < f16::ONE);
            assert!(d >= Decimal::ZERO && d < Decimal::ONE);
        }
    }

    #[test]
    fn test_open_closed_never_zero() {
        let mut rng = Chance::from_seed(7);
        for _ in 0..10_000 {
            let u: f16 = rng.next_unit_open_closed();
            assert!(u > f16::ZERO && u <= f16::ONE);
        }
    }

    #[test]
    fn test_unit_mean() {
        let mut rng = Chance::from_seed(11);
        let n = 100_000;
        let mean: f64 = (0..n).map(|_| rng.next_unit::<f64>()).sum::<f64>() / n as f64;
        assert!((mean - 0.5).abs() < 0.005);
    }

    #[test]
    fn test_real_range_validation() {
        let mut rng = Chance::from_seed(1);
        assert!(rng.next_real_in(1.0_f64, 1.0).is_err());
        assert!(rng.next_real_in(f64::NEG_INFINITY, 1.0).is_err());
        assert!(rng.next_real_in(2.0_f32, 1.0).is_err());
    }

    /// The widest finite range of each representation stays in `[min, max)`.
    #[test]
    fn test_real_range_full_span() {
        let mut rng = Chance::from_seed(1);
        for _ in 0..1_000 {
            let d = rng.next_real_in(Decimal::MIN, Decimal::MAX).unwrap();
            assert!(d >= Decimal::MIN && d < Decimal::MAX);
            let x = rng.next_real_in(f64::MIN, f64::MAX).unwrap();
            assert!(x.is_finite() && x < f64::MAX);
            let y = rng.next_real_in(f32::MIN, f32::MAX).unwrap();
            assert!(y.is_finite() && y < f32::MAX);
            let h = rng.next_real_in(f16::MIN, f16::MAX).unwrap();
            assert!(h >= f16::MIN && h < f16::MAX);
        }
    }

    #[test]
    fn test_next_below_zero_is_error() {
        let mut rng = Chance::from_seed(1);
        assert!(rng.next_below(0).is_err());
        assert_eq!(rng.next_below(1).unwrap(), 0);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = Chance::from_seed(9);
        let mut items: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
        assert_ne!(items, sorted);
    }

    #[test]
    fn test_choose() {
        let mut rng = Chance::from_seed(9);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        let items = ["a", "b", "c"];
        for _ in 0..100 {
            assert!(items.contains(rng.choose(&items).unwrap()));
        }
    }

    #[test]
    fn test_bool_balance() {
        let mut rng = Chance::from_seed(13);
        let heads = (0..100_000).filter(|_| rng.next_bool()).count();
        assert!((heads as f64 / 100_000.0 - 0.5).abs() < 0.01);
    }
}
