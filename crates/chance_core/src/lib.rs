//! # chance_core: Deterministic Randomness Foundation
//!
//! ## Layer 1 (Foundation) Role
//!
//! chance_core is the bottom layer of the variate engine, providing:
//! - Counter-based bit sources and the seeded generator (`rng`)
//! - Unbiased integer ranges and unit-interval reals (`uniform`)
//! - The numeric representations samplers are generic over (`numeric`)
//! - Dense matrices and Cholesky factorisation (`linalg`)
//! - Generator configuration and TOML loading (`config`)
//! - The shared error type and validation helpers (`types`)
//!
//! Distribution samplers live one layer up, in `chance_distributions`.
//!
//! ## Numeric Representations
//!
//! Every sampler is generic over [`numeric::Real`], implemented for `f64`,
//! `f32`, `half::f16` and `rust_decimal::Decimal`. Unit-interval draws fill
//! the mantissa of each representation directly, so a sampler never rounds
//! through a wider type to produce its uniforms.
//!
//! ## Usage Examples
//!
//! ```rust
//! use chance_core::rng::Chance;
//! use chance_core::uniform::UniformExt;
//! use rust_decimal::Decimal;
//!
//! let mut rng = Chance::from_seed(42);
//!
//! let die = rng.next_in_range_inclusive(1_i32, 6).unwrap();
//! assert!((1..=6).contains(&die));
//!
//! let x: f64 = rng.next_unit();
//! assert!((0.0..1.0).contains(&x));
//!
//! let d: Decimal = rng.next_unit();
//! assert!(d >= Decimal::ZERO && d < Decimal::ONE);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Snapshot`, `SeedSource`
//!   and `ChanceConfig`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod linalg;
pub mod numeric;
pub mod rng;
pub mod types;
pub mod uniform;
