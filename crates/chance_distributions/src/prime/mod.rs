//! Prime sampling.
//!
//! [`Primes`] draws uniformly from the primes in a half-open integer range,
//! and [`is_prime`] is the deterministic test behind it.

mod primality;
mod sampler;

pub use primality::is_prime;
pub use sampler::{PrimeInt, Primes, EXACT_COUNT_LIMIT};
