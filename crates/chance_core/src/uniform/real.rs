//! Uniform real layer.
//!
//! # Mantissa bit-filling
//!
//! Scaling a random integer by `1 / 2^k` wastes the low bits of the draw and
//! under-represents small values for narrow mantissas. Instead, exactly as
//! many random bits as the type's mantissa holds are written straight into
//! the significand of a value whose exponent is fixed to the binade
//! `[1, 2)`; subtracting one then yields a value in `[0, 1)` on which every
//! mantissa pattern is equally likely.
//!
//! The single- and half-precision paths use the same layout as the
//! double-precision path, truncated to 23 and 10 mantissa bits and fed from
//! one 32-bit draw. The decimal type has no mantissa field, so it draws an
//! exact numerator in `[0, 10^28)` through the uniform integer layer and
//! exposes it as a base-10 fraction with scale 28.

use super::int::sample_below_u128;
use crate::rng::BitSource;
use half::f16;
use rust_decimal::Decimal;

/// Bit pattern of 1.0 in double precision.
const F64_ONE_BITS: u64 = 0x3FF0_0000_0000_0000;
/// Bit pattern of 1.0 in single precision.
const F32_ONE_BITS: u32 = 0x3F80_0000;
/// Bit pattern of 1.0 in half precision.
const F16_ONE_BITS: u16 = 0x3C00;

/// Fractional digits of a decimal unit draw.
pub const DECIMAL_UNIT_SCALE: u32 = 28;

/// Denominator of a decimal unit draw (10^28).
pub const DECIMAL_UNIT_DENOMINATOR: u128 = 10_000_000_000_000_000_000_000_000_000;

/// Uniform `f64` in `[0, 1)` from the top 52 bits of `word`.
#[inline]
pub fn fill_mantissa_f64(word: u64) -> f64 {
    f64::from_bits(F64_ONE_BITS | (word >> 12)) - 1.0
}

/// Uniform `f32` in `[0, 1)` from the top 23 bits of `word`.
#[inline]
pub fn fill_mantissa_f32(word: u32) -> f32 {
    f32::from_bits(F32_ONE_BITS | (word >> 9)) - 1.0
}

/// Uniform `f16` in `[0, 1)` from the top 10 bits of `word`.
#[inline]
pub fn fill_mantissa_f16(word: u32) -> f16 {
    f16::from_bits(F16_ONE_BITS | (word >> 22) as u16) - f16::ONE
}

/// Uniform decimal in `[0, 1)` with 28 exact fractional digits.
#[inline]
pub fn fill_decimal_unit<S: BitSource + ?Sized>(source: &mut S) -> Decimal {
    let numerator = sample_below_u128(source, DECIMAL_UNIT_DENOMINATOR);
    // numerator < 10^28 < 2^96, always representable
    Decimal::from_i128_with_scale(numerator as i128, DECIMAL_UNIT_SCALE)
}
