//! Numeric capability abstraction shared by every sampler.
//!
//! All distribution algorithms are written once against [`Real`] and
//! monomorphised per representation, so the binary float paths carry no
//! runtime dispatch. Four representations are supported:
//!
//! | Type                      | Mantissa          | Unit draw                      |
//! |---------------------------|-------------------|--------------------------------|
//! | `f64`                     | 52 bits           | one 64-bit word                |
//! | `f32`                     | 23 bits           | one 32-bit word                |
//! | `half::f16`               | 10 bits           | one 32-bit word                |
//! | `rust_decimal::Decimal`   | 96-bit base 10    | 10^28 numerator, 128-bit draws |
//!
//! The transcendental functions (`ln`, `exp`, `sqrt`, `powf`) form the
//! generic math facade. Binary floats use the platform maths library, whose
//! lowest mantissa bit may differ across hardware; the decimal facade in
//! [`decimal`] is pure integer arithmetic and therefore bit-exact everywhere.

mod binary16;
pub mod decimal;
mod float;
pub mod special;

use crate::rng::BitSource;
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Numeric representation a sampler can produce.
///
/// # Type Safety
/// Implementors provide:
/// - Arithmetic operations (+, -, *, /, unary -)
/// - Ordering (`PartialOrd`)
/// - Conversion from double-precision constants
/// - The math facade (`ln`, `exp`, `sqrt`, `powf`)
/// - A mantissa bit-filling unit draw
///
/// # Examples
/// ```
/// use chance_core::numeric::Real;
///
/// fn discount<T: Real>(rate: T, time: T) -> T {
///     (-(rate * time)).exp()
/// }
///
/// let d: f64 = discount(0.05, 1.0);
/// assert!((d - 0.951229).abs() < 1e-5);
/// ```
pub trait Real:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Human-readable name of the representation, used in log events.
    const NAME: &'static str;

    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Converts a double-precision constant, rounding to the nearest
    /// representable value. Out-of-range input saturates.
    fn from_f64(value: f64) -> Self;

    /// Converts a count.
    fn from_u64(value: u64) -> Self;

    /// Converts to double precision.
    fn to_f64(self) -> f64;

    /// Returns `true` unless the value is NaN or infinite.
    fn is_finite(self) -> bool;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Largest integral value not greater than `self`.
    fn floor(self) -> Self;

    /// Natural logarithm.
    fn ln(self) -> Self;

    /// Exponential function.
    fn exp(self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// `self` raised to a real power.
    fn powf(self, exponent: Self) -> Self;

    /// Draws a uniform value in `[0, 1)` from `source`.
    ///
    /// Binary floats fill their mantissa directly from random bits; the
    /// decimal type draws an exact base-10 numerator. See
    /// [`crate::uniform::real`].
    fn sample_unit<S: BitSource + ?Sized>(source: &mut S) -> Self;

    /// Difference `self - rhs`, or `None` when it is not representable.
    ///
    /// Binary floats overflow to infinity, which is reported as `None`. The
    /// decimal type has no infinity and overrides this with its own checked
    /// arithmetic.
    #[inline]
    fn checked_sub(self, rhs: Self) -> Option<Self> {
        let difference = self - rhs;
        if difference.is_finite() {
            Some(difference)
        } else {
            None
        }
    }

    /// Converts a small integer constant.
    #[inline]
    fn from_i32(value: i32) -> Self {
        Self::from_f64(value as f64)
    }

    /// Returns the larger of two values.
    #[inline]
    fn max(self, other: Self) -> Self {
        if self >= other {
            self
        } else {
            other
        }
    }

    /// Returns the smaller of two values.
    #[inline]
    fn min(self, other: Self) -> Self {
        if self <= other {
            self
        } else {
            other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use half::f16;
    use approx::assert_relative_eq;
    use rust_decimal::Decimal;

    fn hypot<T: Real>(a: T, b: T) -> T {
        (a * a + b * b).sqrt()
    }

    #[test]
    fn test_generic_over_all_representations() {
        assert_relative_eq!(hypot(3.0_f64, 4.0), 5.0);
        assert_relative_eq!(hypot(3.0_f32, 4.0), 5.0);
        assert_eq!(hypot(f16::from_f32(3.0), f16::from_f32(4.0)).to_f32(), 5.0);
        assert_eq!(hypot(Decimal::from(3), Decimal::from(4)), Decimal::from(5));
    }

    #[test]
    fn test_min_max() {
        assert_eq!(Real::max(1.0_f64, 2.0), 2.0);
        assert_eq!(Real::min(1.0_f32, 2.0), 1.0);
    }

    /// Spans wider than the representation come back as `None` for every type.
    #[test]
    fn test_checked_sub_overflow() {
        assert_eq!(Real::checked_sub(3.0_f64, 1.0), Some(2.0));
        assert_eq!(Real::checked_sub(f64::MAX, f64::MIN), None);
        assert_eq!(Real::checked_sub(f32::MAX, f32::MIN), None);
        assert_eq!(Real::checked_sub(f16::MAX, f16::MIN), None);
        assert_eq!(Real::checked_sub(Decimal::MAX, Decimal::MIN), None);
        assert_eq!(
            Real::checked_sub(Decimal::MAX, Decimal::ZERO),
            Some(Decimal::MAX)
        );
    }
}
