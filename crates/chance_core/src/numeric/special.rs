//! Special functions needed by the transformed-rejection samplers.

use super::Real;

/// 0.5 * ln(2π)
const HALF_LN_2PI: f64 = 0.918_938_533_204_672_8;

/// Arguments below this are shifted upwards before the Stirling series.
const STIRLING_THRESHOLD: f64 = 7.0;

/// Natural logarithm of the gamma function for `x > 0`.
///
/// Shifts small arguments above 7 with the recurrence
/// ln Γ(x) = ln Γ(x + 1) − ln x, then evaluates the Stirling series
/// truncated after the x⁻⁷ term. The absolute error is below 1e-10
/// for all positive arguments in double precision.
///
/// # Examples
/// ```
/// use chance_core::numeric::special::ln_gamma;
///
/// // Γ(5) = 4! = 24
/// assert!((ln_gamma(5.0_f64) - 24.0_f64.ln()).abs() < 1e-10);
/// ```
pub fn ln_gamma<T: Real>(x: T) -> T {
    let threshold = T::from_f64(STIRLING_THRESHOLD);
    let one = T::one();

    let mut shifted = x;
    let mut product = one;
    while shifted < threshold {
        product = product * shifted;
        shifted = shifted + one;
    }

    let inv = one / shifted;
    let inv2 = inv * inv;
    // 1/12 - 1/(360 x²) + 1/(1260 x⁴) - 1/(1680 x⁶), scaled by 1/x
    let series = inv
        * (T::from_f64(1.0 / 12.0)
            - inv2
                * (T::from_f64(1.0 / 360.0)
                    - inv2 * (T::from_f64(1.0 / 1260.0) - inv2 * T::from_f64(1.0 / 1680.0))));

    let half = T::from_f64(0.5);
    let stirling =
        (shifted - half) * shifted.ln() - shifted + T::from_f64(HALF_LN_2PI) + series;

    if product == one {
        stirling
    } else {
        stirling - product.ln()
    }
}

/// Natural logarithm of `k!`.
#[inline]
pub fn ln_factorial<T: Real>(k: T) -> T {
    ln_gamma(k + T::one())
}
