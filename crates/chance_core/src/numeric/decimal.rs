//! Math facade for the 96-bit base-10 decimal type.
//!
//! The transcendental functions delegate to `rust_decimal`'s
//! [`MathematicalOps`], which evaluates them with integer-only series and is
//! therefore bit-exact on every platform. Exact constants take closed-form
//! fast paths before any series is evaluated:
//!
//! - `ln`: 1, e, 2 and 10
//! - `exp`: 0, 1, ln 2 and ln 10
//! - `sqrt`: 0 and 1
//! - `pow`: exponents 0, 1 and 2, bases 0, 1 and e
//!
//! A decimal has no infinities or NaN, so out-of-domain input saturates
//! instead of panicking: `ln` of a non-positive value returns
//! [`Decimal::MIN`], an overflowing `exp` returns [`Decimal::MAX`] and the
//! square root of a negative value returns zero. Samplers never rely on the
//! saturated values; they only prevent a panic deep inside a rejection loop.

use super::Real;
use crate::rng::BitSource;
use crate::uniform::real::fill_decimal_unit;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps};

/// Scale used by every constant below (28 fractional digits).
const CONSTANT_SCALE: u32 = 28;

/// Euler's number to 28 decimal places.
pub fn e() -> Decimal {
    Decimal::from_i128_with_scale(27_182_818_284_590_452_353_602_874_714, CONSTANT_SCALE)
}

/// Natural logarithm of 2 to 28 decimal places.
pub fn ln_2() -> Decimal {
    Decimal::from_i128_with_scale(6_931_471_805_599_453_094_172_321_215, CONSTANT_SCALE)
}

/// Natural logarithm of 10 to 28 decimal places.
pub fn ln_10() -> Decimal {
    Decimal::from_i128_with_scale(23_025_850_929_940_456_840_179_914_547, CONSTANT_SCALE)
}

/// Natural logarithm.
pub fn ln(x: Decimal) -> Decimal {
    if x <= Decimal::ZERO {
        return Decimal::MIN;
    }
    if x == Decimal::ONE {
        return Decimal::ZERO;
    }
    if x == Decimal::TWO {
        return ln_2();
    }
    if x == Decimal::TEN {
        return ln_10();
    }
    if x == e() {
        return Decimal::ONE;
    }
    x.checked_ln().unwrap_or(Decimal::MIN)
}

/// Exponential function.
pub fn exp(x: Decimal) -> Decimal {
    if x.is_zero() {
        return Decimal::ONE;
    }
    if x == Decimal::ONE {
        return e();
    }
    if x == ln_2() {
        return Decimal::TWO;
    }
    if x == ln_10() {
        return Decimal::TEN;
    }
    match x.checked_exp() {
        Some(value) => value,
        None if x.is_sign_positive() => Decimal::MAX,
        None => Decimal::ZERO,
    }
}

/// Square root.
pub fn sqrt(x: Decimal) -> Decimal {
    if x.is_zero() || x == Decimal::ONE {
        return x;
    }
    MathematicalOps::sqrt(&x).unwrap_or(Decimal::ZERO)
}

/// `base` raised to a real power.
pub fn pow(base: Decimal, exponent: Decimal) -> Decimal {
    if exponent.is_zero() || base == Decimal::ONE {
        return Decimal::ONE;
    }
    if exponent == Decimal::ONE {
        return base;
    }
    if exponent == Decimal::TWO {
        return base.checked_mul(base).unwrap_or(Decimal::MAX);
    }
    if base.is_zero() {
        return Decimal::ZERO;
    }
    if base == e() {
        return exp(exponent);
    }
    match base.checked_powd(exponent) {
        Some(value) => value,
        None => exp(exponent * ln(base)),
    }
}

impl Real for Decimal {
    const NAME: &'static str = "decimal";

    #[inline]
    fn zero() -> Self {
        Decimal::ZERO
    }

    #[inline]
    fn one() -> Self {
        Decimal::ONE
    }

    fn from_f64(value: f64) -> Self {
        match <Decimal as FromPrimitive>::from_f64(value) {
            Some(decimal) => decimal,
            None if value > 0.0 => Decimal::MAX,
            None if value < 0.0 => Decimal::MIN,
            None => Decimal::ZERO,
        }
    }

    #[inline]
    fn from_u64(value: u64) -> Self {
        Decimal::from(value)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or_default()
    }

    #[inline]
    fn is_finite(self) -> bool {
        true
    }

    #[inline]
    fn abs(self) -> Self {
        Decimal::abs(&self)
    }

    #[inline]
    fn floor(self) -> Self {
        Decimal::floor(&self)
    }

    #[inline]
    fn ln(self) -> Self {
        ln(self)
    }

    #[inline]
    fn exp(self) -> Self {
        exp(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        sqrt(self)
    }

    #[inline]
    fn powf(self, exponent: Self) -> Self {
        pow(self, exponent)
    }

    #[inline]
    fn sample_unit<S: BitSource + ?Sized>(source: &mut S) -> Self {
        fill_decimal_unit(source)
    }

    #[inline]
    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Decimal::checked_sub(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Decimal, b: Decimal, tolerance: &str) -> bool {
        let tolerance: Decimal = tolerance.parse().unwrap();
        (a - b).abs() <= tolerance
    }

    #[test]
    fn test_closed_form_constants() {
        assert_eq!(ln(Decimal::ONE), Decimal::ZERO);
        assert_eq!(ln(e()), Decimal::ONE);
        assert_eq!(ln(Decimal::TWO), ln_2());
        assert_eq!(exp(Decimal::ZERO), Decimal::ONE);
        assert_eq!(exp(Decimal::ONE), e());
        assert_eq!(exp(ln_10()), Decimal::TEN);
        assert_eq!(sqrt(Decimal::ONE), Decimal::ONE);
        assert_eq!(pow(Decimal::from(7), Decimal::ZERO), Decimal::ONE);
        assert_eq!(pow(Decimal::from(7), Decimal::TWO), Decimal::from(49));
    }

    #[test]
    fn test_constants_match_f64() {
        assert!((ToPrimitive::to_f64(&e()).unwrap() - std::f64::consts::E).abs() < 1e-15);
        assert!((ToPrimitive::to_f64(&ln_2()).unwrap() - std::f64::consts::LN_2).abs() < 1e-15);
        assert!((ToPrimitive::to_f64(&ln_10()).unwrap() - std::f64::consts::LN_10).abs() < 1e-15);
    }

    #[test]
    fn test_series_paths() {
        assert!(close(sqrt(Decimal::from(2)), "1.4142135623730950488".parse().unwrap(), "1e-15"));
        assert!(close(ln(Decimal::from(3)), "1.0986122886681098".parse().unwrap(), "1e-12"));
        assert!(close(exp(Decimal::from(3)), "20.085536923187668".parse().unwrap(), "1e-10"));
        assert!(close(
            pow(Decimal::from(9), "0.5".parse().unwrap()),
            Decimal::from(3),
            "1e-12"
        ));
    }

    #[test]
    fn test_saturation() {
        assert_eq!(ln(Decimal::ZERO), Decimal::MIN);
        assert_eq!(ln(Decimal::NEGATIVE_ONE), Decimal::MIN);
        assert_eq!(sqrt(Decimal::NEGATIVE_ONE), Decimal::ZERO);
        assert_eq!(exp(Decimal::from(1000)), Decimal::MAX);
    }

    #[test]
    fn test_from_f64_saturates() {
        assert_eq!(<Decimal as Real>::from_f64(f64::INFINITY), Decimal::MAX);
        assert_eq!(<Decimal as Real>::from_f64(f64::NEG_INFINITY), Decimal::MIN);
        assert_eq!(<Decimal as Real>::from_f64(f64::NAN), Decimal::ZERO);
        assert_eq!(<Decimal as Real>::from_f64(0.5), "0.5".parse().unwrap());
    }
}
