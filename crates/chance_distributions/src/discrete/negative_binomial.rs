//! Negative binomial distribution as a Gamma-Poisson mixture.

use super::poisson::{PoissonKernel, MAX_MEAN};
use crate::continuous::Gamma;
use crate::renamed;
use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_positive, require_probability, ChanceError};

/// Gamma tail allowance, in scale units, kept below the Poisson mean limit.
const TAIL_WIDTH: f64 = 40.0;

/// Negative binomial distribution: failures before the `r`-th success in
/// trials with success probability `p`.
///
/// `r` may be any positive real. Each draw takes
/// `λ ~ Gamma(r, (1 − p)/p)` and returns a Poisson count with mean `λ`.
/// Parameters are accepted only while `λ` stays under the Poisson
/// [`MAX_MEAN`](crate::discrete::MAX_MEAN) beyond a tail of about `e^−40`;
/// mixing draws past it are redrawn.
#[derive(Debug, Clone)]
pub struct NegativeBinomial<T: Real> {
    r: T,
    p: T,
    gamma: Option<Gamma<f64>>,
}

impl<T: Real> NegativeBinomial<T> {
    /// Creates a negative binomial distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless `r` is finite and positive, `p`
    /// lies in `(0, 1]`, and the mixing mean `r(1 − p)/p` leaves room for
    /// its upper tail below the Poisson mean limit.
    pub fn new(r: T, p: T) -> Result<Self, ChanceError> {
        let r = require_positive("r", r)?;
        let p = require_probability("p", p)?;
        if p == T::zero() {
            return Err(ChanceError::argument("p", "must be positive, got 0"));
        }
        let gamma = if p == T::one() {
            None
        } else {
            let (r, p) = (r.to_f64(), p.to_f64());
            let scale = (1.0 - p) / p;
            let reach = scale * (r + TAIL_WIDTH * (r.sqrt() + 1.0));
            if !(reach <= MAX_MEAN) {
                return Err(ChanceError::argument(
                    "p",
                    format!("mixing mean r(1 - p)/p = {:e} is too large", scale * r),
                ));
            }
            Some(Gamma::new(r, scale).map_err(renamed("r"))?)
        };
        Ok(Self { r, p, gamma })
    }

    /// Target number of successes.
    #[inline]
    pub fn r(&self) -> T {
        self.r
    }

    /// Success probability.
    #[inline]
    pub fn p(&self) -> T {
        self.p
    }
}

impl<T: Real> Distribution for NegativeBinomial<T> {
    type Output = u64;

    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> u64 {
        match &mut self.gamma {
            Some(gamma) => loop {
                let lambda = gamma.sample(rng);
                if lambda <= MAX_MEAN {
                    return PoissonKernel::new(lambda).sample(rng);
                }
            },
            None => 0,
        }
    }
}
