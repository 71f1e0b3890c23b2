//! One entry point per distribution.
//!
//! [`Variates`] is implemented for every [`BitSource`], so any generator
//! gains `rng.normal(..)`, `rng.primes(..)` and the rest once the trait is
//! in scope. Each entry point validates its parameters, builds the
//! distribution and binds it to the generator as a [`Sampler`].

use crate::continuous::{
    Beta, Cauchy, Chi, ChiSquared, ContinuousUniform, Exponential, FisherF, Gamma, Laplace,
    LogNormal, Normal, Pareto, StandardNormal, StudentT, Triangular, Weibull,
};
use crate::discrete::{
    Bernoulli, Binomial, Categorical, DiscreteUniform, Geometric, Multinomial, NegativeBinomial,
    Poisson, Zipf,
};
use crate::multivariate::{Dirichlet, MultivariateNormal, Wishart};
use crate::prime::{PrimeInt, Primes};
use crate::sampler::Sampler;
use chance_core::config::ChanceConfig;
use chance_core::linalg::Matrix;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::ChanceError;
use chance_core::uniform::UniformInt;

/// Result of a sampler entry point.
pub type SamplerResult<'a, R, D> = Result<Sampler<'a, R, D>, ChanceError>;

/// Distribution entry points for any bit source.
///
/// Every method returns `ArgumentOutOfRange` (or, for [`Variates::primes`],
/// `InvalidOperation`) under the conditions documented on the corresponding
/// distribution constructor. No method draws from the generator until the
/// returned sampler is used.
///
/// # Examples
///
/// ```rust
/// use chance_core::rng::Chance;
/// use chance_distributions::Variates;
///
/// let mut rng = Chance::from_seed(1337);
/// let prime = rng.primes(1000_u32, 2000).unwrap().sample();
/// assert!((1000..2000).contains(&prime));
///
/// let gamma: Vec<f64> = rng.gamma(2.5, 1.5).unwrap().sample_n(4).collect();
/// assert!(gamma.iter().all(|g| *g > 0.0));
/// ```
pub trait Variates: BitSource {
    /// Integers uniform on `[min, max)`.
    fn uniform_int<I: UniformInt>(
        &mut self,
        min: I,
        max: I,
    ) -> SamplerResult<'_, Self, DiscreteUniform<I>> {
        Ok(Sampler::new(self, DiscreteUniform::new(min, max)?))
    }

    /// Integers uniform on `[min, max]`.
    fn uniform_int_inclusive<I: UniformInt>(
        &mut self,
        min: I,
        max: I,
    ) -> SamplerResult<'_, Self, DiscreteUniform<I>> {
        Ok(Sampler::new(self, DiscreteUniform::new_inclusive(min, max)?))
    }

    /// Reals uniform on `[min, max)`.
    fn uniform_real<T: Real>(
        &mut self,
        min: T,
        max: T,
    ) -> SamplerResult<'_, Self, ContinuousUniform<T>> {
        Ok(Sampler::new(self, ContinuousUniform::new(min, max)?))
    }

    /// `true` with probability `p`.
    fn bernoulli<T: Real>(&mut self, p: T) -> SamplerResult<'_, Self, Bernoulli<T>> {
        Ok(Sampler::new(self, Bernoulli::new(p)?))
    }

    /// Successes in `n` trials with probability `p`.
    fn binomial<T: Real>(&mut self, n: u64, p: T) -> SamplerResult<'_, Self, Binomial<T>> {
        Ok(Sampler::new(self, Binomial::new(n, p)?))
    }

    /// Standard normal deviates.
    fn standard_normal<T: Real>(&mut self) -> SamplerResult<'_, Self, StandardNormal<T>> {
        Ok(Sampler::new(self, StandardNormal::new()))
    }

    /// Normal deviates with the given mean and standard deviation.
    fn normal<T: Real>(&mut self, mean: T, std_dev: T) -> SamplerResult<'_, Self, Normal<T>> {
        Ok(Sampler::new(self, Normal::new(mean, std_dev)?))
    }

    /// Exponential deviates with the given rate.
    fn exponential<T: Real>(&mut self, rate: T) -> SamplerResult<'_, Self, Exponential<T>> {
        Ok(Sampler::new(self, Exponential::new(rate)?))
    }

    /// Gamma deviates with the given shape and scale.
    fn gamma<T: Real>(&mut self, shape: T, scale: T) -> SamplerResult<'_, Self, Gamma<T>> {
        Ok(Sampler::new(self, Gamma::new(shape, scale)?))
    }

    /// Beta deviates.
    fn beta<T: Real>(&mut self, alpha: T, beta: T) -> SamplerResult<'_, Self, Beta<T>> {
        Ok(Sampler::new(self, Beta::new(alpha, beta)?))
    }

    /// Chi deviates.
    fn chi<T: Real>(&mut self, dof: T) -> SamplerResult<'_, Self, Chi<T>> {
        Ok(Sampler::new(self, Chi::new(dof)?))
    }

    /// Chi-squared deviates.
    fn chi_squared<T: Real>(&mut self, dof: T) -> SamplerResult<'_, Self, ChiSquared<T>> {
        Ok(Sampler::new(self, ChiSquared::new(dof)?))
    }

    /// Student's t deviates.
    fn student_t<T: Real>(&mut self, dof: T) -> SamplerResult<'_, Self, StudentT<T>> {
        Ok(Sampler::new(self, StudentT::new(dof)?))
    }

    /// Fisher's F deviates.
    fn fisher_f<T: Real>(&mut self, d1: T, d2: T) -> SamplerResult<'_, Self, FisherF<T>> {
        Ok(Sampler::new(self, FisherF::new(d1, d2)?))
    }

    /// Log-normal deviates.
    fn log_normal<T: Real>(&mut self, mu: T, sigma: T) -> SamplerResult<'_, Self, LogNormal<T>> {
        Ok(Sampler::new(self, LogNormal::new(mu, sigma)?))
    }

    /// Cauchy deviates.
    fn cauchy<T: Real>(&mut self, location: T, scale: T) -> SamplerResult<'_, Self, Cauchy<T>> {
        Ok(Sampler::new(self, Cauchy::new(location, scale)?))
    }

    /// Weibull deviates.
    fn weibull<T: Real>(&mut self, shape: T, scale: T) -> SamplerResult<'_, Self, Weibull<T>> {
        Ok(Sampler::new(self, Weibull::new(shape, scale)?))
    }

    /// Pareto deviates.
    fn pareto<T: Real>(&mut self, scale: T, shape: T) -> SamplerResult<'_, Self, Pareto<T>> {
        Ok(Sampler::new(self, Pareto::new(scale, shape)?))
    }

    /// Laplace deviates.
    fn laplace<T: Real>(&mut self, location: T, scale: T) -> SamplerResult<'_, Self, Laplace<T>> {
        Ok(Sampler::new(self, Laplace::new(location, scale)?))
    }

    /// Triangular deviates.
    fn triangular<T: Real>(
        &mut self,
        min: T,
        mode: T,
        max: T,
    ) -> SamplerResult<'_, Self, Triangular<T>> {
        Ok(Sampler::new(self, Triangular::new(min, mode, max)?))
    }

    /// Poisson counts with mean `lambda`.
    fn poisson<T: Real>(&mut self, lambda: T) -> SamplerResult<'_, Self, Poisson<T>> {
        Ok(Sampler::new(self, Poisson::new(lambda)?))
    }

    /// Failures before the first success.
    fn geometric<T: Real>(&mut self, p: T) -> SamplerResult<'_, Self, Geometric<T>> {
        Ok(Sampler::new(self, Geometric::new(p)?))
    }

    /// Failures before `r` successes.
    fn negative_binomial<T: Real>(
        &mut self,
        r: T,
        p: T,
    ) -> SamplerResult<'_, Self, NegativeBinomial<T>> {
        Ok(Sampler::new(self, NegativeBinomial::new(r, p)?))
    }

    /// Indices drawn in proportion to `weights`.
    fn categorical<T: Real>(&mut self, weights: &[T]) -> SamplerResult<'_, Self, Categorical<T>> {
        Ok(Sampler::new(self, Categorical::new(weights)?))
    }

    /// Counts of `n` draws spread over the categories of `weights`.
    fn multinomial<T: Real>(
        &mut self,
        n: u64,
        weights: &[T],
    ) -> SamplerResult<'_, Self, Multinomial<T>> {
        Ok(Sampler::new(self, Multinomial::new(n, weights)?))
    }

    /// Ranks in `[1, n]` with Zipf exponent `s`.
    fn zipf<T: Real>(&mut self, n: u64, s: T) -> SamplerResult<'_, Self, Zipf<T>> {
        Ok(Sampler::new(self, Zipf::new(n, s)?))
    }

    /// Primes in `[min, max)`.
    fn primes<I: PrimeInt>(&mut self, min: I, max: I) -> SamplerResult<'_, Self, Primes<I>> {
        Ok(Sampler::new(self, Primes::new(min, max)?))
    }

    /// Primes in `[min, max)` with the population guard from `config`.
    fn primes_with_config<I: PrimeInt>(
        &mut self,
        min: I,
        max: I,
        config: &ChanceConfig,
    ) -> SamplerResult<'_, Self, Primes<I>> {
        Ok(Sampler::new(self, Primes::with_config(min, max, config)?))
    }

    /// Points on the simplex with concentration `alpha`.
    fn dirichlet<T: Real>(&mut self, alpha: &[T]) -> SamplerResult<'_, Self, Dirichlet<T>> {
        Ok(Sampler::new(self, Dirichlet::new(alpha)?))
    }

    /// Vectors with the given mean and covariance.
    fn multivariate_normal<T: Real>(
        &mut self,
        mean: &[T],
        covariance: &Matrix<T>,
    ) -> SamplerResult<'_, Self, MultivariateNormal<T>> {
        Ok(Sampler::new(self, MultivariateNormal::new(mean, covariance)?))
    }

    /// Positive-definite matrices with `dof` degrees of freedom and the
    /// given scale.
    fn wishart<T: Real>(
        &mut self,
        dof: T,
        scale: &Matrix<T>,
    ) -> SamplerResult<'_, Self, Wishart<T>> {
        Ok(Sampler::new(self, Wishart::new(dof, scale)?))
    }
}

impl<R: BitSource + ?Sized> Variates for R {}
