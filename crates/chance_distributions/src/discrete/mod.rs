//! Discrete distributions.
//!
//! Count-valued samplers take their parameters in any
//! [`chance_core::numeric::Real`] representation, validate them there, and
//! evaluate their rejection constants in double precision: the outputs are
//! exact integers, and constants such as `ln Γ(λ)` exceed what a
//! half-precision value can hold.

mod bernoulli;
mod binomial;
mod categorical;
mod geometric;
mod multinomial;
mod negative_binomial;
mod poisson;
mod uniform;
mod zipf;

pub use bernoulli::Bernoulli;
pub use binomial::{Binomial, DIRECT_TRIALS_LIMIT};
pub use categorical::Categorical;
pub use geometric::Geometric;
pub use multinomial::Multinomial;
pub use negative_binomial::NegativeBinomial;
pub use poisson::{Poisson, MAX_MEAN, SMALL_MEAN_THRESHOLD};
pub use uniform::DiscreteUniform;
pub use zipf::Zipf;
