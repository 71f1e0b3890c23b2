//! # chance_distributions: Distribution Samplers
//!
//! ## Layer 2 (Distributions) Role
//!
//! chance_distributions builds on `chance_core`, providing:
//! - The [`Distribution`] and [`FillDistribution`] traits (`sampler`)
//! - The borrowing [`Sampler`] and its lazy [`Samples`] sequence (`sampler`)
//! - Continuous samplers: normal, Gamma and its family, heavy tails
//!   (`continuous`)
//! - Count samplers: binomial, Poisson, categorical, Zipf (`discrete`)
//! - A prime sampler with construction-time population checks (`prime`)
//! - Dirichlet, multivariate normal and Wishart samplers (`multivariate`)
//! - One entry point per distribution on every generator (`variates`)
//!
//! ## Validation
//!
//! Every constructor validates its parameters and fails with
//! `ArgumentOutOfRange` on a non-finite, out-of-support or reversed value.
//! Parameters are never clamped. Once a sampler exists, drawing from it is
//! infallible.
//!
//! ## Usage Examples
//!
//! ```rust
//! use chance_core::rng::Chance;
//! use chance_distributions::Variates;
//! use rust_decimal::Decimal;
//!
//! let mut rng = Chance::from_seed(42);
//!
//! let mut normal = rng.normal(0.0_f64, 1.0).unwrap();
//! let total: f64 = normal.sample_n(100).sum();
//! assert!(total.is_finite());
//!
//! let rate = Decimal::new(25, 1);
//! let wait: Decimal = rng.exponential(rate).unwrap().sample();
//! assert!(wait >= Decimal::ZERO);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod continuous;
pub mod discrete;
pub mod multivariate;
pub mod prime;
pub mod sampler;
pub mod variates;

pub use sampler::{Distribution, FillDistribution, Sampler, Samples};
pub use variates::{SamplerResult, Variates};

use chance_core::types::ChanceError;

/// Reattributes an argument error raised by an inner distribution to the
/// outer parameter `name`.
pub(crate) fn renamed(name: &'static str) -> impl FnOnce(ChanceError) -> ChanceError {
    move |err| match err {
        ChanceError::ArgumentOutOfRange { reason, .. } => {
            ChanceError::ArgumentOutOfRange { name, reason }
        }
        other => other,
    }
}
