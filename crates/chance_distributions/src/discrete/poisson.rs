//! Poisson distribution.

use crate::sampler::Distribution;
use chance_core::numeric::special::ln_factorial;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_positive, ChanceError};
use chance_core::uniform::UniformExt;
use tracing::debug;

/// Means below this use the product-of-uniforms method.
pub const SMALL_MEAN_THRESHOLD: f64 = 10.0;

/// Largest accepted mean, `2^63`. Counts stay far below `u64::MAX` for any
/// mean up to this bound.
pub const MAX_MEAN: f64 = 9_223_372_036_854_775_808.0;

/// Poisson distribution with mean `λ`.
///
/// # Algorithm
///
/// - `λ < 10`: multiplies unit draws until the product falls to `e^(−λ)`
///   (Knuth); expected cost `λ + 1` draws.
/// - `λ ≥ 10`: Hörmann's PTRS transformed rejection with squeeze (1993),
///   whose expected cost is bounded independently of `λ`.
///
/// # Examples
///
/// ```rust
/// use chance_core::rng::Chance;
/// use chance_distributions::discrete::Poisson;
/// use chance_distributions::Distribution;
///
/// let mut rng = Chance::from_seed(9);
/// let mut arrivals = Poisson::new(4.5_f64).unwrap();
/// let count: u64 = arrivals.sample(&mut rng);
/// # let _ = count;
/// ```
#[derive(Debug, Clone)]
pub struct Poisson<T: Real> {
    lambda: T,
    kernel: PoissonKernel,
}

impl<T: Real> Poisson<T> {
    /// Creates a Poisson distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless `lambda` is positive and at
    /// most [`MAX_MEAN`].
    pub fn new(lambda: T) -> Result<Self, ChanceError> {
        let lambda = require_positive("lambda", lambda)?;
        if lambda.to_f64() > MAX_MEAN {
            return Err(ChanceError::argument(
                "lambda",
                format!("must not exceed {:e}, got {}", MAX_MEAN, lambda),
            ));
        }
        let kernel = PoissonKernel::new(lambda.to_f64());
        debug!(
            lambda = lambda.to_f64(),
            method = kernel.method_name(),
            "constructed Poisson sampler"
        );
        Ok(Self { lambda, kernel })
    }

    /// Mean.
    #[inline]
    pub fn lambda(&self) -> T {
        self.lambda
    }
}

impl<T: Real> Distribution for Poisson<T> {
    type Output = u64;

    #[inline]
    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> u64 {
        self.kernel.sample(rng)
    }
}

/// Double-precision Poisson sampler, also used with a fresh mean per draw
/// by the negative binomial mixture.
#[derive(Debug, Clone)]
pub(crate) enum PoissonKernel {
    Zero,
    Product { limit: f64 },
    Ptrs(Ptrs),
}

#[derive(Debug, Clone)]
pub(crate) struct Ptrs {
    lambda: f64,
    ln_lambda: f64,
    a: f64,
    b: f64,
    ln_inv_alpha: f64,
    v_r: f64,
}

impl PoissonKernel {
    pub(crate) fn new(lambda: f64) -> Self {
        if !(lambda > 0.0) {
            PoissonKernel::Zero
        } else if lambda < SMALL_MEAN_THRESHOLD {
            PoissonKernel::Product {
                limit: (-lambda).exp(),
            }
        } else {
            let b = 0.931 + 2.53 * lambda.sqrt();
            PoissonKernel::Ptrs(Ptrs {
                lambda,
                ln_lambda: lambda.ln(),
                a: -0.059 + 0.02483 * b,
                b,
                ln_inv_alpha: (1.1239 + 1.1328 / (b - 3.4)).ln(),
                v_r: 0.9277 - 3.6224 / (b - 2.0),
            })
        }
    }

    fn method_name(&self) -> &'static str {
        match self {
            PoissonKernel::Zero => "constant",
            PoissonKernel::Product { .. } => "product",
            PoissonKernel::Ptrs(_) => "ptrs",
        }
    }

    pub(crate) fn sample<R: BitSource + ?Sized>(&self, rng: &mut R) -> u64 {
        match self {
            PoissonKernel::Zero => 0,
            PoissonKernel::Product { limit } => {
                let mut k = 0;
                let mut product = rng.next_unit::<f64>();
                while product > *limit {
                    k += 1;
                    product *= rng.next_unit::<f64>();
                }
                k
            }
            PoissonKernel::Ptrs(ptrs) => ptrs.sample(rng),
        }
    }
}

impl Ptrs {
    fn sample<R: BitSource + ?Sized>(&self, rng: &mut R) -> u64 {
        loop {
            let u = rng.next_unit::<f64>() - 0.5;
            let v = rng.next_unit::<f64>();
            let us = 0.5 - u.abs();
            let k = ((2.0 * self.a / us + self.b) * u + self.lambda + 0.43).floor();
            if us >= 0.07 && v <= self.v_r && k >= 0.0 {
                return k as u64;
            }
            if k < 0.0 || (us < 0.013 && v > us) {
                continue;
            }
            let lhs = v.ln() + self.ln_inv_alpha - (self.a / (us * us) + self.b).ln();
            let rhs = -self.lambda + k * self.ln_lambda - ln_factorial(k);
            if lhs <= rhs {
                return k as u64;
            }
        }
    }
}
