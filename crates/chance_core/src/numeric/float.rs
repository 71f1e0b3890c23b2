//! [`Real`] for the binary floating types `f32` and `f64`.

use super::Real;
use crate::rng::BitSource;
use crate::uniform::real::{fill_mantissa_f32, fill_mantissa_f64};
use num_traits::Float;

macro_rules! impl_real_float {
    ($t:ty, $name:expr, |$source:ident| $unit:expr) => {
        impl Real for $t {
            const NAME: &'static str = $name;

            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn from_u64(value: u64) -> Self {
                value as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$t as Float>::is_finite(self)
            }

            #[inline]
            fn abs(self) -> Self {
                <$t as Float>::abs(self)
            }

            #[inline]
            fn floor(self) -> Self {
                <$t as Float>::floor(self)
            }

            #[inline]
            fn ln(self) -> Self {
                <$t as Float>::ln(self)
            }

            #[inline]
            fn exp(self) -> Self {
                <$t as Float>::exp(self)
            }

            #[inline]
            fn sqrt(self) -> Self {
                <$t as Float>::sqrt(self)
            }

            #[inline]
            fn powf(self, exponent: Self) -> Self {
                <$t as Float>::powf(self, exponent)
            }

            #[inline]
            fn sample_unit<S: BitSource + ?Sized>($source: &mut S) -> Self {
                $unit
            }
        }
    };
}

impl_real_float!(f64, "f64", |source| fill_mantissa_f64(source.next_u64()));
impl_real_float!(f32, "f32", |source| fill_mantissa_f32(source.next_u32()));
