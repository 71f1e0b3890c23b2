//! # Bit Sources and the Seeded Generator
//!
//! This module provides the bottom of the engine: deterministic word
//! supplies and the generator value that owns one.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator is seeded; same seed and same call
//!   sequence give the same output on every platform
//! - **Counter-based**: the entire state is a `(counter, key)` pair, so any
//!   position is reachable in constant time and snapshots are 16 bytes
//! - **Static dispatch**: samplers are generic over [`BitSource`]; no
//!   `Box<dyn Trait>` in hot paths
//! - **Single ownership**: a generator is never shared between threads;
//!   parallel code forks one generator per worker
//!
//! ## Module Structure
//!
//! - [`source`]: the [`BitSource`] and [`CounterSource`] capability traits,
//!   plus the [`RandSource`] adapter for rand generators
//! - [`squares`]: the default [`Squares`] source
//! - [`philox`]: the alternative [`Philox2x64`] source
//! - [`seed`]: seed scrambling and [`SeedSource`]
//! - [`generator`]: the [`Chance`] generator
//! - [`snapshot`]: [`Snapshot`] capture and restore
//!
//! ## Usage Example
//!
//! ```rust
//! use chance_core::rng::{BitSource, Chance};
//!
//! let mut rng = Chance::from_seed(42);
//! let checkpoint = rng.snapshot();
//! let first = rng.next_u64();
//!
//! rng.restore(checkpoint);
//! assert_eq!(rng.next_u64(), first);
//! ```

pub mod generator;
pub mod philox;
pub mod seed;
pub mod snapshot;
pub mod source;
pub mod squares;

// Public re-exports
pub use generator::Chance;
pub use philox::Philox2x64;
pub use seed::{auto_seed, scramble_bytes, scramble_str, scramble_u64, Scramble, SeedSource};
pub use snapshot::Snapshot;
pub use source::{BitSource, CounterSource, RandSource};
pub use squares::Squares;
