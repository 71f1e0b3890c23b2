//! The sampling traits and the borrowing sampler.
//!
//! A distribution value ([`Distribution`]) holds only validated parameters,
//! precomputed constants and small caches. A [`Sampler`] pairs one with a
//! mutably borrowed generator; the borrow checker guarantees the sampler
//! never outlives the generator it draws from.

use chance_core::rng::BitSource;
use std::iter::FusedIterator;

/// A parameterised distribution that can draw values from a bit source.
///
/// Sampling takes `&mut self` so that paired algorithms can cache their
/// second deviate between calls.
pub trait Distribution {
    /// Type of a single variate.
    type Output;

    /// Draws one variate.
    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> Self::Output;
}

/// A distribution whose variates are written into caller-provided storage.
///
/// Implemented by the vector- and matrix-valued distributions so that
/// repeated draws allocate nothing.
pub trait FillDistribution: Distribution {
    /// Storage one variate is written into.
    type Buffer: ?Sized;

    /// Draws one variate into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` does not have the shape of one variate.
    fn sample_into<R: BitSource + ?Sized>(&mut self, rng: &mut R, out: &mut Self::Buffer);
}

/// A distribution bound to a borrowed generator.
///
/// Obtained from the entry points of [`crate::Variates`], or built directly
/// with [`Sampler::new`].
///
/// # Examples
///
/// ```rust
/// use chance_core::rng::Chance;
/// use chance_distributions::Variates;
///
/// let mut rng = Chance::from_seed(42);
/// let mut normal = rng.normal(0.0_f64, 1.0).unwrap();
///
/// let single = normal.sample();
/// let batch: Vec<f64> = normal.sample_n(1_000).collect();
/// assert!(single.is_finite());
/// assert_eq!(batch.len(), 1_000);
/// ```
#[derive(Debug)]
pub struct Sampler<'a, R: BitSource + ?Sized, D> {
    rng: &'a mut R,
    distribution: D,
}

impl<'a, R: BitSource + ?Sized, D: Distribution> Sampler<'a, R, D> {
    /// Binds `distribution` to `rng`.
    #[inline]
    pub fn new(rng: &'a mut R, distribution: D) -> Self {
        Self { rng, distribution }
    }

    /// Draws one variate.
    #[inline]
    pub fn sample(&mut self) -> D::Output {
        self.distribution.sample(&mut *self.rng)
    }

    /// Returns a lazy sequence of exactly `count` variates.
    ///
    /// Values are produced on demand; nothing is buffered.
    #[inline]
    pub fn sample_n(&mut self, count: usize) -> Samples<'_, 'a, R, D> {
        Samples {
            sampler: self,
            count,
            remaining: count,
        }
    }

    /// Fills `out` with variates, allocating nothing.
    pub fn fill(&mut self, out: &mut [D::Output]) {
        for slot in out.iter_mut() {
            *slot = self.distribution.sample(&mut *self.rng);
        }
    }

    /// Borrows the distribution.
    #[inline]
    pub fn distribution(&self) -> &D {
        &self.distribution
    }

    /// Releases the generator borrow and returns the distribution.
    #[inline]
    pub fn into_distribution(self) -> D {
        self.distribution
    }
}

impl<'a, R: BitSource + ?Sized, D: FillDistribution> Sampler<'a, R, D> {
    /// Draws one variate into caller-provided storage.
    ///
    /// # Panics
    ///
    /// Panics if `out` does not have the shape of one variate.
    #[inline]
    pub fn sample_into(&mut self, out: &mut D::Buffer) {
        self.distribution.sample_into(&mut *self.rng, out);
    }
}

/// Lazily produced, finite sequence of variates.
///
/// Created by [`Sampler::sample_n`]. The sequence can be restarted, after
/// which it yields `count` further variates continuing the generator's
/// stream.
#[derive(Debug)]
pub struct Samples<'s, 'a, R: BitSource + ?Sized, D> {
    sampler: &'s mut Sampler<'a, R, D>,
    count: usize,
    remaining: usize,
}

impl<'s, 'a, R: BitSource + ?Sized, D: Distribution> Samples<'s, 'a, R, D> {
    /// Rewinds the sequence to its full length.
    #[inline]
    pub fn restart(&mut self) {
        self.remaining = self.count;
    }

    /// Total number of variates per pass.
    #[inline]
    pub fn count_per_pass(&self) -> usize {
        self.count
    }
}

impl<'s, 'a, R: BitSource + ?Sized, D: Distribution> Iterator for Samples<'s, 'a, R, D> {
    type Item = D::Output;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.sampler.sample())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'s, 'a, R: BitSource + ?Sized, D: Distribution> ExactSizeIterator for Samples<'s, 'a, R, D> {}

impl<'s, 'a, R: BitSource + ?Sized, D: Distribution> FusedIterator for Samples<'s, 'a, R, D> {}

#[cfg(test)]
mod tests {
    use super::*;
    use chance_core::rng::Chance;

    /// Counts draws so the tests can see how often `sample` ran.
    struct Counter;

    impl Distribution for Counter {
        type Output = u64;

        fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> u64 {
            rng.next_u64()
        }
    }

    #[test]
    fn test_sample_n_is_exact_and_lazy() {
        let mut rng = Chance::from_seed(1);
        let mut sampler = Sampler::new(&mut rng, Counter);
        let mut samples = sampler.sample_n(5);
        assert_eq!(samples.len(), 5);
        samples.next();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples.by_ref().count(), 4);
        assert_eq!(samples.next(), None);
        drop(sampler);
        assert_eq!(rng.draws(), 5);
    }

    #[test]
    fn test_restart_continues_the_stream() {
        let mut rng = Chance::from_seed(2);
        let mut sampler = Sampler::new(&mut rng, Counter);
        let mut samples = sampler.sample_n(3);
        let first: Vec<u64> = samples.by_ref().collect();
        samples.restart();
        let second: Vec<u64> = samples.collect();
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 3);
        assert_ne!(first, second);
    }

    #[test]
    fn test_fill_matches_repeated_sampling() {
        let mut a = Chance::from_seed(3);
        let mut b = Chance::from_seed(3);
        let mut buffer = [0u64; 8];
        Sampler::new(&mut a, Counter).fill(&mut buffer);
        let mut sampler = Sampler::new(&mut b, Counter);
        let expected: Vec<u64> = (0..8).map(|_| sampler.sample()).collect();
        assert_eq!(buffer.to_vec(), expected);
    }

    #[test]
    fn test_empty_sequence() {
        let mut rng = Chance::from_seed(4);
        let mut sampler = Sampler::new(&mut rng, Counter);
        assert_eq!(sampler.sample_n(0).next(), None);
        drop(sampler);
        assert_eq!(rng.draws(), 0);
    }
}
