//! Bit source capability traits.
//!
//! A [`BitSource`] is the only thing the uniform layers and samplers need:
//! a deterministic supply of 32- and 64-bit words. A [`CounterSource`] is a
//! bit source whose complete state is a `(counter, key)` pair, which makes
//! it snapshot-capable and lets it jump ahead without replaying draws.

/// Deterministic supply of uniformly distributed words.
///
/// Every call must advance the internal state so that the output sequence
/// is a pure function of the initial state and the sequence of calls.
///
/// # Static Dispatch
///
/// Samplers are generic over `R: BitSource`; there is no `dyn BitSource`
/// anywhere in a sampling hot path.
pub trait BitSource {
    /// Returns the next 32-bit word.
    fn next_u32(&mut self) -> u32;

    /// Returns the next 64-bit word.
    fn next_u64(&mut self) -> u64;
}

impl<R: BitSource + ?Sized> BitSource for &mut R {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

/// Counter-based bit source with a two-word state.
///
/// The output for each draw is a mixing function of `(counter, key)`; every
/// draw, regardless of width, advances the counter by exactly one.
pub trait CounterSource: BitSource + Sized {
    /// Name used in log events.
    const NAME: &'static str;

    /// Creates a source at counter zero with a key derived from `seed`.
    fn from_seed(seed: u64) -> Self;

    /// Recreates a source from previously captured state words.
    fn from_parts(counter: u64, key: u64) -> Self;

    /// Current counter.
    fn counter(&self) -> u64;

    /// Seed-derived key.
    fn key(&self) -> u64;

    /// Skips `draws` draws without producing them.
    fn advance(&mut self, draws: u64);
}

/// Adapter plugging any `rand::RngCore` in as a bit source.
///
/// Useful for driving the samplers from an existing rand generator. The
/// adapted generator is not snapshot-capable through this crate.
///
/// # Examples
///
/// ```
/// use chance_core::rng::{BitSource, RandSource};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut source = RandSource::new(StdRng::seed_from_u64(7));
/// let _word = source.next_u64();
/// ```
#[derive(Debug, Clone)]
pub struct RandSource<R> {
    inner: R,
}

impl<R: rand::RngCore> RandSource<R> {
    /// Wraps a rand generator.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: rand::RngCore> BitSource for RandSource<R> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }
}
