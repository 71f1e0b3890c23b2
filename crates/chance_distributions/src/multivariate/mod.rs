//! Multivariate distributions.
//!
//! Built from independent Gamma and normal draws combined through the
//! [`chance_core::linalg`] matrix collaborator. Each sampler implements
//! [`crate::FillDistribution`] for allocation-free draws into caller
//! storage, and [`crate::Distribution`] returning owned values.

mod dirichlet;
mod normal;
mod wishart;

pub use dirichlet::Dirichlet;
pub use normal::MultivariateNormal;
pub use wishart::Wishart;
