//! The seeded generator.
//!
//! [`Chance`] owns a counter-based bit source and nothing else. It is a
//! small `Copy`-free value type: cloning is explicit, forking derives a new
//! stream, and snapshots capture the entire state.

use super::seed::{scramble_u64, Scramble, SeedSource};
use super::snapshot::Snapshot;
use super::source::{BitSource, CounterSource};
use super::squares::Squares;
use crate::config::ChanceConfig;
use tracing::{debug, trace};

/// Deterministic random generator.
///
/// Two generators constructed from the same seed and driven through the same
/// sequence of calls produce identical output on every platform. Generators
/// are single-owner values: samplers borrow them mutably, and parallel code
/// gives each thread its own generator via [`Chance::fork`].
///
/// # Examples
///
/// ```rust
/// use chance_core::rng::{BitSource, Chance};
/// use chance_core::uniform::UniformExt;
///
/// let mut rng1 = Chance::from_seed(12345);
/// let mut rng2 = Chance::from_seed(12345);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.next_u64(), rng2.next_u64());
/// assert_eq!(rng1.next_unit::<f64>(), rng2.next_unit::<f64>());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chance<S: CounterSource = Squares> {
    source: S,
}

impl Chance<Squares> {
    /// Creates a generator with an auto-generated unique seed.
    pub fn new() -> Self {
        Self::from_source_seed(SeedSource::Auto)
    }

    /// Creates a generator from a numeric seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_seed(seed)
    }

    /// Creates a generator from text seed material.
    pub fn from_text(text: &str) -> Self {
        Self::from_material(text)
    }

    /// Creates a generator from a restored snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self::restored(snapshot)
    }
}

impl Default for Chance<Squares> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CounterSource> Chance<S> {
    /// Creates a generator over bit source `S` from a numeric seed.
    pub fn with_seed(seed: u64) -> Self {
        debug!(source = S::NAME, seed_kind = "numeric", "seeding generator");
        Self {
            source: S::from_seed(seed),
        }
    }

    /// Creates a generator from any seed material.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chance_core::rng::{BitSource, Chance, Squares};
    ///
    /// let mut a: Chance<Squares> = Chance::from_material("portfolio-7");
    /// let mut b: Chance<Squares> = Chance::from_material(&String::from("portfolio-7"));
    /// assert_eq!(a.next_u32(), b.next_u32());
    /// ```
    pub fn from_material<M: Scramble + ?Sized>(material: &M) -> Self {
        debug!(source = S::NAME, seed_kind = "material", "seeding generator");
        Self {
            source: S::from_seed(material.scramble()),
        }
    }

    /// Creates a generator from a [`SeedSource`].
    pub fn from_source_seed(seed: SeedSource) -> Self {
        debug!(source = S::NAME, seed_kind = seed.kind(), "seeding generator");
        Self {
            source: S::from_seed(seed.resolve()),
        }
    }

    /// Creates a generator as described by a configuration.
    pub fn from_config(config: &ChanceConfig) -> Self {
        Self::from_source_seed(config.seed().clone())
    }

    /// Recreates a generator from a snapshot.
    pub fn restored(snapshot: Snapshot) -> Self {
        debug!(source = S::NAME, draws = snapshot.draws(), "restoring generator");
        Self {
            source: S::from_parts(snapshot.counter(), snapshot.key()),
        }
    }

    /// Captures the complete generator state.
    pub fn snapshot(&self) -> Snapshot {
        trace!(draws = self.source.counter(), "capturing snapshot");
        Snapshot::new(self.source.counter(), self.source.key())
    }

    /// Rewinds (or fast-forwards) this generator to a captured state.
    pub fn restore(&mut self, snapshot: Snapshot) {
        *self = Self::restored(snapshot);
    }

    /// Skips `draws` draws without producing them.
    ///
    /// Equivalent to discarding `draws` calls to `next_u32`/`next_u64`, in
    /// constant time.
    pub fn advance(&mut self, draws: u64) {
        self.source.advance(draws);
    }

    /// Number of draws taken since seeding.
    pub fn draws(&self) -> u64 {
        self.source.counter()
    }

    /// Derives an independent generator.
    ///
    /// Consumes one draw from `self` and scrambles it together with the
    /// parent key into a new key. The child starts at counter zero, so the
    /// parent and child streams share no state and forking is itself
    /// deterministic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chance_core::rng::{BitSource, Chance};
    ///
    /// let mut parent = Chance::from_seed(1);
    /// let mut children: Vec<Chance> = (0..4).map(|_| parent.fork()).collect();
    /// let first: Vec<u64> = children.iter_mut().map(|c| c.next_u64()).collect();
    /// assert_ne!(first[0], first[1]);
    /// ```
    pub fn fork(&mut self) -> Self {
        let salt = self.source.next_u64();
        let seed = scramble_u64(self.source.key() ^ salt);
        debug!(source = S::NAME, parent_draws = self.draws(), "forking generator");
        Self {
            source: S::from_seed(seed),
        }
    }

    /// Borrows the underlying bit source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: CounterSource> BitSource for Chance<S> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }
}

impl<S: CounterSource> rand::RngCore for Chance<S> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let word = self.source.next_u64().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
