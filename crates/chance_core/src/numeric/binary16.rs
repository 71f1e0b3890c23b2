//! [`Real`] for half precision.
//!
//! `half::f16` has no transcendental functions of its own, so the math
//! facade widens to `f32`, evaluates there and rounds back. Every result is
//! therefore correctly rounded whenever the `f32` result is.

use super::Real;
use crate::rng::BitSource;
use crate::uniform::real::fill_mantissa_f16;
use half::f16;

#[inline]
fn via_f32(value: f16, op: impl FnOnce(f32) -> f32) -> f16 {
    f16::from_f32(op(value.to_f32()))
}

impl Real for f16 {
    const NAME: &'static str = "f16";

    #[inline]
    fn zero() -> Self {
        f16::ZERO
    }

    #[inline]
    fn one() -> Self {
        f16::ONE
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        f16::from_f64(value)
    }

    #[inline]
    fn from_u64(value: u64) -> Self {
        f16::from_f64(value as f64)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f16::to_f64(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        self.to_f32().is_finite()
    }

    #[inline]
    fn abs(self) -> Self {
        via_f32(self, f32::abs)
    }

    #[inline]
    fn floor(self) -> Self {
        via_f32(self, f32::floor)
    }

    #[inline]
    fn ln(self) -> Self {
        via_f32(self, f32::ln)
    }

    #[inline]
    fn exp(self) -> Self {
        via_f32(self, f32::exp)
    }

    #[inline]
    fn sqrt(self) -> Self {
        via_f32(self, f32::sqrt)
    }

    #[inline]
    fn powf(self, exponent: Self) -> Self {
        f16::from_f32(self.to_f32().powf(exponent.to_f32()))
    }

    #[inline]
    fn sample_unit<S: BitSource + ?Sized>(source: &mut S) -> Self {
        fill_mantissa_f16(source.next_u32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_facade() {
        let two = f16::from_f32(2.0);
        assert_eq!(Real::sqrt(f16::from_f32(4.0)), two);
        assert_eq!(Real::powf(two, two).to_f32(), 4.0);
        assert_eq!(Real::floor(f16::from_f32(2.75)), two);
        assert!(Real::is_finite(two));
        assert!(!Real::is_finite(f16::INFINITY));
    }

    #[test]
    fn test_half_ln_exp_round_trip() {
        let x = f16::from_f32(3.0);
        let y = Real::exp(Real::ln(x));
        assert!((y.to_f32() - 3.0).abs() < 0.01);
    }
}
