//! Continuous distributions.
//!
//! Every sampler here is generic over [`chance_core::numeric::Real`] and
//! so runs unchanged for `f64`, `f32`, `half::f16` and
//! `rust_decimal::Decimal`.
//!
//! The Gamma sampler is the shared foundation: Beta, Chi, Chi-squared,
//! Student's t and Fisher's F are deterministic transforms of Gamma and
//! normal draws.

mod beta;
mod cauchy;
mod chi;
mod exponential;
mod fisher_f;
mod gamma;
mod laplace;
mod lognormal;
mod normal;
mod pareto;
mod student_t;
mod triangular;
mod uniform;
mod weibull;

pub use beta::Beta;
pub use cauchy::Cauchy;
pub use chi::{Chi, ChiSquared};
pub use exponential::Exponential;
pub use fisher_f::FisherF;
pub use gamma::Gamma;
pub use laplace::Laplace;
pub use lognormal::LogNormal;
pub use normal::{Normal, StandardNormal};
pub use pareto::Pareto;
pub use student_t::StudentT;
pub use triangular::Triangular;
pub use uniform::ContinuousUniform;
pub use weibull::Weibull;
