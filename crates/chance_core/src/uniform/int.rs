//! Uniform integer layer.
//!
//! Converts raw words into exactly uniform integers over `[low, high)` or
//! `[low, high]` for every integer width from 8 to 128 bits.
//!
//! # Algorithm
//!
//! The range width `w` is computed in the unsigned type of the same width.
//! A word just wide enough to cover `w` is drawn (32 bits when `w` fits in
//! 32 bits, otherwise 64, otherwise 128 composed from two 64-bit draws by
//! shift-and-or). Words in the overhang, the top `2^bits mod w` values that
//! would bias the result, are rejected and redrawn; accepted words are
//! reduced modulo `w`. A full-domain range has no overhang and is served by
//! a single draw with no rejection test.

use crate::rng::BitSource;
use crate::types::ChanceError;
use std::fmt::{Debug, Display};

/// Draws a 128-bit word from two 64-bit draws.
#[inline]
pub fn next_u128<S: BitSource + ?Sized>(source: &mut S) -> u128 {
    let high = source.next_u64() as u128;
    let low = source.next_u64() as u128;
    (high << 64) | low
}

#[inline]
fn word_u32<S: BitSource + ?Sized>(source: &mut S) -> u32 {
    source.next_u32()
}

#[inline]
fn word_u64<S: BitSource + ?Sized>(source: &mut S) -> u64 {
    source.next_u64()
}

macro_rules! sample_below_word {
    ($name:ident, $word:ty, $draw:ident) => {
        /// Uniform value in `[0, span)` from words of this width.
        ///
        /// `span` must be non-zero.
        #[inline]
        pub fn $name<S: BitSource + ?Sized>(source: &mut S, span: $word) -> $word {
            debug_assert!(span != 0);
            // 2^bits mod span, computed without overflowing the word
            let overhang = (<$word>::MAX - span + 1) % span;
            let limit = <$word>::MAX - overhang;
            loop {
                let raw = $draw(source);
                if raw <= limit {
                    return raw % span;
                }
            }
        }
    };
}

sample_below_word!(sample_below_u32, u32, word_u32);
sample_below_word!(sample_below_u64, u64, word_u64);
sample_below_word!(sample_below_u128, u128, next_u128);

/// Unsigned integer that can be sampled uniformly below a bound.
pub trait UniformWord: Copy + Eq + Ord + Debug + Send + Sync + 'static {
    /// Zero, standing for the full domain when used as a span.
    const ZERO: Self;

    /// Wrapping increment.
    fn wrapping_inc(self) -> Self;

    /// Uniform value in `[0, span)`, or over the full domain when `span`
    /// is zero.
    fn sample_below<S: BitSource + ?Sized>(source: &mut S, span: Self) -> Self;
}

macro_rules! impl_uniform_word_narrow {
    ($($t:ty),*) => {
        $(
            impl UniformWord for $t {
                const ZERO: Self = 0;

                #[inline]
                fn wrapping_inc(self) -> Self {
                    self.wrapping_add(1)
                }

                #[inline]
                fn sample_below<S: BitSource + ?Sized>(source: &mut S, span: Self) -> Self {
                    if span == 0 {
                        // Full domain: keep the high bits of one 32-bit draw.
                        return (source.next_u32() >> (32 - <$t>::BITS)) as $t;
                    }
                    sample_below_u32(source, span as u32) as $t
                }
            }
        )*
    };
}

impl_uniform_word_narrow!(u8, u16, u32);

impl UniformWord for u64 {
    const ZERO: Self = 0;

    #[inline]
    fn wrapping_inc(self) -> Self {
        self.wrapping_add(1)
    }

    #[inline]
    fn sample_below<S: BitSource + ?Sized>(source: &mut S, span: Self) -> Self {
        if span == 0 {
            source.next_u64()
        } else if span <= u32::MAX as u64 {
            sample_below_u32(source, span as u32) as u64
        } else {
            sample_below_u64(source, span)
        }
    }
}

impl UniformWord for u128 {
    const ZERO: Self = 0;

    #[inline]
    fn wrapping_inc(self) -> Self {
        self.wrapping_add(1)
    }

    #[inline]
    fn sample_below<S: BitSource + ?Sized>(source: &mut S, span: Self) -> Self {
        if span == 0 {
            next_u128(source)
        } else if span <= u32::MAX as u128 {
            sample_below_u32(source, span as u32) as u128
        } else if span <= u64::MAX as u128 {
            sample_below_u64(source, span as u64) as u128
        } else {
            sample_below_u128(source, span)
        }
    }
}

impl UniformWord for usize {
    const ZERO: Self = 0;

    #[inline]
    fn wrapping_inc(self) -> Self {
        self.wrapping_add(1)
    }

    #[inline]
    fn sample_below<S: BitSource + ?Sized>(source: &mut S, span: Self) -> Self {
        if span == 0 && usize::BITS < 64 {
            return <u32 as UniformWord>::sample_below(source, 0) as usize;
        }
        <u64 as UniformWord>::sample_below(source, span as u64) as usize
    }
}

/// Integer type supported by the uniform integer layer.
///
/// Implemented for all primitive integers from 8 to 128 bits, signed and
/// unsigned, plus `usize`/`isize`.
pub trait UniformInt: Copy + PartialOrd + Debug + Display + Send + Sync + 'static {
    /// Unsigned type of the same width.
    type Unsigned: UniformWord;

    /// `high - low` in the unsigned type, wrapping.
    fn span_between(low: Self, high: Self) -> Self::Unsigned;

    /// `low + offset`, wrapping.
    fn offset_from(low: Self, offset: Self::Unsigned) -> Self;
}

macro_rules! impl_uniform_int {
    ($($t:ty => $u:ty),*) => {
        $(
            impl UniformInt for $t {
                type Unsigned = $u;

                #[inline]
                fn span_between(low: Self, high: Self) -> $u {
                    (high as $u).wrapping_sub(low as $u)
                }

                #[inline]
                fn offset_from(low: Self, offset: $u) -> Self {
                    (low as $u).wrapping_add(offset) as $t
                }
            }
        )*
    };
}

impl_uniform_int!(
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
    i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize
);

/// Precomputed uniform integer range.
///
/// Validates the bounds once so that repeated sampling is a pure draw.
///
/// # Examples
///
/// ```
/// use chance_core::rng::Chance;
/// use chance_core::uniform::IntRange;
///
/// let mut rng = Chance::from_seed(42);
/// let dice = IntRange::new_inclusive(1u8, 6).unwrap();
/// let roll = dice.sample(&mut rng);
/// assert!((1..=6).contains(&roll));
///
/// // An empty half-open range is rejected.
/// assert!(IntRange::new(5i32, 5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange<I: UniformInt> {
    low: I,
    /// Width of the range; zero stands for the full domain.
    span: I::Unsigned,
}

impl<I: UniformInt> IntRange<I> {
    /// Half-open range `[low, high)`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless `low < high`.
    pub fn new(low: I, high: I) -> Result<Self, ChanceError> {
        if low < high {
            Ok(Self {
                low,
                span: I::span_between(low, high),
            })
        } else {
            Err(ChanceError::argument(
                "max",
                format!("must exceed min ({}) for a half-open range, got {}", low, high),
            ))
        }
    }

    /// Closed range `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` if `low > high`.
    pub fn new_inclusive(low: I, high: I) -> Result<Self, ChanceError> {
        if low <= high {
            Ok(Self {
                low,
                span: I::span_between(low, high).wrapping_inc(),
            })
        } else {
            Err(ChanceError::argument(
                "max",
                format!("must not be below min ({}), got {}", low, high),
            ))
        }
    }

    /// Lower bound.
    pub fn low(&self) -> I {
        self.low
    }

    /// Returns `true` when the range covers every value of `I`.
    pub fn is_full_domain(&self) -> bool {
        self.span == I::Unsigned::ZERO
    }

    /// Draws one value.
    #[inline]
    pub fn sample<S: BitSource + ?Sized>(&self, source: &mut S) -> I {
        I::offset_from(self.low, I::Unsigned::sample_below(source, self.span))
    }
}
