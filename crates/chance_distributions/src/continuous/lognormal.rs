//! Log-normal distribution.

use super::normal::Normal;
use crate::sampler::Distribution;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::ChanceError;

/// Log-normal distribution: `exp(X)` for `X ~ N(μ, σ²)`.
#[derive(Debug, Clone)]
pub struct LogNormal<T: Real> {
    normal: Normal<T>,
}

impl<T: Real> LogNormal<T> {
    /// Creates a log-normal distribution from the parameters of the
    /// underlying normal.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` if `mu` is not finite or `sigma` is not
    /// finite and positive.
    pub fn new(mu: T, sigma: T) -> Result<Self, ChanceError> {
        let normal = Normal::new(mu, sigma).map_err(|err| match err {
            ChanceError::ArgumentOutOfRange { name: "mean", reason } => {
                ChanceError::ArgumentOutOfRange { name: "mu", reason }
            }
            ChanceError::ArgumentOutOfRange { reason, .. } => {
                ChanceError::ArgumentOutOfRange { name: "sigma", reason }
            }
            other => other,
        })?;
        Ok(Self { normal })
    }
}

impl<T: Real> Distribution for LogNormal<T> {
    type Output = T;

    #[inline]
    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> T {
        self.normal.sample(rng).exp()
    }
}
