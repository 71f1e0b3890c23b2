//! Philox2x64-10 counter-based bit source.
//!
//! Philox was introduced in "Parallel Random Numbers: As Easy as 1, 2, 3"
//! (Salmon et al., 2011). This variant mixes a 128-bit counter block with a
//! 64-bit key through ten multiply-xor rounds and passes BigCrush. The
//! upper counter word is fixed at zero so the state stays a
//! `(counter, key)` pair and snapshots are interchangeable in shape with
//! [`crate::rng::Squares`].

use super::seed::scramble_u64;
use super::source::{BitSource, CounterSource};

// Philox 2x64 round constants
const PHILOX_M2X64: u64 = 0xD2B7_4407_B1CE_6E93;
const PHILOX_W64: u64 = 0x9E37_79B9_7F4A_7C15;

/// Number of mixing rounds.
const PHILOX_ROUNDS: usize = 10;

/// Philox2x64-10 bit source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Philox2x64 {
    counter: u64,
    key: u64,
}

/// Single round of Philox mixing.
#[inline]
fn philox_round(block: [u64; 2], key: u64) -> [u64; 2] {
    let product = (block[0] as u128) * (PHILOX_M2X64 as u128);
    let hi = (product >> 64) as u64;
    let lo = product as u64;
    [hi ^ key ^ block[1], lo]
}

/// Full Philox2x64-10 block function.
#[inline]
pub fn philox2x64_10(counter: u64, key: u64) -> [u64; 2] {
    let mut block = [counter, 0];
    let mut round_key = key;
    block = philox_round(block, round_key);
    for _ in 1..PHILOX_ROUNDS {
        round_key = round_key.wrapping_add(PHILOX_W64);
        block = philox_round(block, round_key);
    }
    block
}

impl BitSource for Philox2x64 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let block = philox2x64_10(self.counter, self.key);
        self.counter = self.counter.wrapping_add(1);
        block[0]
    }
}

impl CounterSource for Philox2x64 {
    const NAME: &'static str = "philox2x64";

    fn from_seed(seed: u64) -> Self {
        Self {
            counter: 0,
            key: scramble_u64(seed),
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
