//! Squares counter-based bit source.
//!
//! Squares (Widynski, 2020) produces each word by squaring and
//! half-swapping `counter * key` through a short fixed round structure:
//! four rounds for a 32-bit word, five for a 64-bit word. Keys must have
//! well-mixed bits and are derived through the seed scrambler.
//!
//! Key properties:
//! - State is a 64-bit counter and a 64-bit key, nothing else
//! - Any future position is reachable by adding to the counter
//! - Integer-only arithmetic, identical on every platform

use super::seed::scramble_u64;
use super::source::{BitSource, CounterSource};

/// Squares bit source (the default for [`crate::rng::Chance`]).
///
/// # Examples
///
/// ```
/// use chance_core::rng::{BitSource, CounterSource, Squares};
///
/// let mut a = Squares::from_seed(42);
/// let mut b = Squares::from_parts(a.counter(), a.key());
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Squares {
    counter: u64,
    key: u64,
}

/// Four-round 32-bit Squares output for `(counter, key)`.
#[inline]
pub fn squares32(counter: u64, key: u64) -> u32 {
    let y = counter.wrapping_mul(key);
    let z = y.wrapping_add(key);
    let mut x = y;
    x = x.wrapping_mul(x).wrapping_add(y).rotate_left(32);
    x = x.wrapping_mul(x).wrapping_add(z).rotate_left(32);
    x = x.wrapping_mul(x).wrapping_add(y).rotate_left(32);
    (x.wrapping_mul(x).wrapping_add(z) >> 32) as u32
}

/// Five-round 64-bit Squares output for `(counter, key)`.
#[inline]
pub fn squares64(counter: u64, key: u64) -> u64 {
    let y = counter.wrapping_mul(key);
    let z = y.wrapping_add(key);
    let mut x = y;
    x = x.wrapping_mul(x).wrapping_add(y).rotate_left(32);
    x = x.wrapping_mul(x).wrapping_add(z).rotate_left(32);
    x = x.wrapping_mul(x).wrapping_add(y).rotate_left(32);
    let t = x.wrapping_mul(x).wrapping_add(z);
    x = t.rotate_left(32);
    t ^ (x.wrapping_mul(x).wrapping_add(y) >> 32)
}

impl BitSource for Squares {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let word = squares32(self.counter, self.key);
        self.counter = self.counter.wrapping_add(1);
        word
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let word = squares64(self.counter, self.key);
        self.counter = self.counter.wrapping_add(1);
        word
    }
}

impl CounterSource for Squares {
    const NAME: &'static str = "squares";

    /// Keys are forced odd so that `counter * key` is a bijection of the
    /// counter.
    fn from_seed(seed: u64) -> Self {
        Self {
            counter: 0,
            key: scramble_u64(seed) | 1,
        }
    }

    #[inline]
    fn from_parts(counter: u64, key: u64) -> Self {
        Self { counter, key }
    }

    #[inline]
    fn counter(&self) -> u64 {
        self.counter
    }

    #[inline]
    fn key(&self) -> u64 {
        self.key
    }

    #[inline]
    fn advance(&mut self, draws: u64) {
        self.counter = self.counter.wrapping_add(draws);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squares_reproducible() {
        let mut a = Squares::from_seed(42);
        let mut b = Squares::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_every_draw_consumes_one_counter_step() {
        let mut source = Squares::from_seed(3);
        source.next_u32();
        source.next_u64();
        source.next_u32();
        assert_eq!(source.counter(), 3);
    }

    #[test]
    fn test_advance_matches_discarded_draws() {
        let mut walked = Squares::from_seed(11);
        for _ in 0..1000 {
            walked.next_u64();
        }
        let mut jumped = Squares::from_seed(11);
        jumped.advance(1000);
        assert_eq!(walked, jumped);
        assert_eq!(walked.next_u64(), jumped.next_u64());
    }

    #[test]
    fn test_key_is_odd() {
        for seed in 0..64 {
            assert_eq!(Squares::from_seed(seed).key() & 1, 1);
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = Squares::from_seed(1);
        let mut b = Squares::from_seed(2);
        let same = (0..64).filter(|_| a.next_u64() == b.next_u64()).count();
        assert_eq!(same, 0);
    }

    #[test]
    fn test_bit_balance() {
        // Each of the 64 output bits should be set roughly half the time.
        let mut source = Squares::from_seed(2024);
        let n = 20_000;
        let mut ones = [0u32; 64];
        for _ in 0..n {
            let word = source.next_u64();
            for (bit, count) in ones.iter_mut().enumerate() {
                *count += ((word >> bit) & 1) as u32;
            }
        }
        for (bit, &count) in ones.iter().enumerate() {
            let fraction = count as f64 / n as f64;
            assert!(
                (fraction - 0.5).abs() < 0.02,
                "bit {} set in {:.4} of draws",
                bit,
                fraction
            );
        }
    }
}
