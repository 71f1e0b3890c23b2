//! Binomial distribution.

use crate::sampler::Distribution;
use chance_core::numeric::special::ln_factorial;
use chance_core::numeric::Real;
use chance_core::rng::BitSource;
use chance_core::types::{require_probability, ChanceError};
use chance_core::uniform::UniformExt;

/// Trial counts up to this size are summed directly.
pub const DIRECT_TRIALS_LIMIT: u64 = 64;

/// Below this expected count of the rarer outcome, waiting times are summed.
const WAITING_TIME_LIMIT: f64 = 10.0;

/// Binomial distribution: successes in `n` independent trials with
/// success probability `p`.
///
/// # Algorithm
///
/// - `n ≤ 64`: sums `n` Bernoulli trials, each one comparison in the
///   representation of `p` (`O(n)`, exact).
/// - otherwise, with `p` reflected to at most one half: sums geometric
///   waiting times between successes while `n·p < 10`, and uses Hörmann's
///   BTRS transformed rejection with squeeze (1993) beyond that.
#[derive(Debug, Clone)]
pub struct Binomial<T: Real> {
    n: u64,
    p: T,
    kernel: BinomialKernel,
}

impl<T: Real> Binomial<T> {
    /// Creates a Binomial distribution.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` unless `p` lies in `[0, 1]`.
    pub fn new(n: u64, p: T) -> Result<Self, ChanceError> {
        let p = require_probability("p", p)?;
        Ok(Self {
            n,
            p,
            kernel: BinomialKernel::new(n, p.to_f64()),
        })
    }

    /// Number of trials.
    #[inline]
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Success probability.
    #[inline]
    pub fn p(&self) -> T {
        self.p
    }
}

impl<T: Real> Distribution for Binomial<T> {
    type Output = u64;

    fn sample<R: BitSource + ?Sized>(&mut self, rng: &mut R) -> u64 {
        if self.n <= DIRECT_TRIALS_LIMIT {
            (0..self.n)
                .filter(|_| T::sample_unit(rng) < self.p)
                .count() as u64
        } else {
            self.kernel.sample(rng)
        }
    }
}

/// Double-precision binomial sampler shared with the multinomial sampler.
#[derive(Debug, Clone)]
pub(crate) struct BinomialKernel {
    n: u64,
    /// Success probability, reflected to at most one half.
    p: f64,
    /// Report `n − k` instead of `k`.
    reflected: bool,
    method: Method,
}

#[derive(Debug, Clone)]
enum Method {
    Constant(u64),
    Trials,
    WaitingTimes { ln_q: f64 },
    Btrs(Btrs),
}

#[derive(Debug, Clone)]
struct Btrs {
    a: f64,
    b: f64,
    c: f64,
    alpha: f64,
    v_r: f64,
    ln_odds: f64,
    m: f64,
    h: f64,
}

impl BinomialKernel {
    pub(crate) fn new(n: u64, p: f64) -> Self {
        let reflected = p > 0.5;
        let p_small = if reflected { 1.0 - p } else { p };

        let method = if n == 0 || p_small == 0.0 {
            Method::Constant(0)
        } else if n <= DIRECT_TRIALS_LIMIT {
            Method::Trials
        } else if (n as f64) * p_small < WAITING_TIME_LIMIT {
            Method::WaitingTimes {
                ln_q: (-p_small).ln_1p(),
            }
        } else {
            Method::Btrs(Btrs::new(n as f64, p_small))
        };

        Self {
            n,
            p: p_small,
            reflected,
            method,
        }
    }

    pub(crate) fn sample<R: BitSource + ?Sized>(&self, rng: &mut R) -> u64 {
        let k = match &self.method {
            Method::Constant(k) => *k,
            Method::Trials => (0..self.n)
                .filter(|_| rng.next_unit::<f64>() < self.p)
                .count() as u64,
            Method::WaitingTimes { ln_q } => self.waiting_times(rng, *ln_q),
            Method::Btrs(btrs) => btrs.sample(rng, self.n as f64),
        };
        if self.reflected {
            self.n - k
        } else {
            k
        }
    }

    fn waiting_times<R: BitSource + ?Sized>(&self, rng: &mut R, ln_q: f64) -> u64 {
        let mut successes = 0;
        let mut remaining = self.n as f64;
        loop {
            let u: f64 = rng.next_unit_open_closed();
            // trials up to and including the next success
            let gap = (u.ln() / ln_q).floor() + 1.0;
            if gap > remaining {
                return successes;
            }
            remaining -= gap;
            successes += 1;
        }
    }
}

impl Btrs {
    fn new(n: f64, p: f64) -> Self {
        let q = 1.0 - p;
        let spq = (n * p * q).sqrt();
        let b = 1.15 + 2.53 * spq;
        let a = -0.0873 + 0.0248 * b + 0.01 * p;
        let m = ((n + 1.0) * p).floor();
        Self {
            a,
            b,
            c: n * p + 0.5,
            alpha: (2.83 + 5.1 / b) * spq,
            v_r: 0.92 - 4.2 / b,
            ln_odds: (p / q).ln(),
            m,
            h: ln_factorial(m) + ln_factorial(n - m),
        }
    }

    fn sample<R: BitSource + ?Sized>(&self, rng: &mut R, n: f64) -> u64 {
        loop {
            let u = rng.next_unit::<f64>() - 0.5;
            let v = rng.next_unit::<f64>();
            let us = 0.5 - u.abs();
            let k = ((2.0 * self.a / us + self.b) * u + self.c).floor();
            if !(0.0..=n).contains(&k) {
                continue;
            }
            if us >= 0.07 && v <= self.v_r {
                return k as u64;
            }
            let v = (v * self.alpha / (self.a / (us * us) + self.b)).ln();
            let bound =
                self.h - ln_factorial(k) - ln_factorial(n - k) + (k - self.m) * self.ln_odds;
            if v <= bound {
                return k as u64;
            }
        }
    }
}
