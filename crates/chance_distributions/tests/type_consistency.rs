//! Integration tests for numeric-representation consistency.
//!
//! The same distribution sampled as `f64`, `f32`, `f16` and `Decimal`
//! draws different bits but must describe the same law: empirical moments
//! agree with each other and with the closed form.

use approx::assert_relative_eq;
use chance_core::numeric::Real;
use chance_core::rng::Chance;
use chance_distributions::continuous::{ContinuousUniform, Exponential, Gamma, Normal, Triangular};
use chance_distributions::discrete::{Geometric, NegativeBinomial, Poisson};
use chance_distributions::{Distribution, Sampler};
use half::f16;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn moments<T, D>(distribution: D, seed: u64, draws: usize) -> (f64, f64)
where
    T: Real,
    D: Distribution<Output = T>,
{
    let mut rng = Chance::from_seed(seed);
    let mut sampler = Sampler::new(&mut rng, distribution);
    let values: Vec<f64> = sampler.sample_n(draws).map(Real::to_f64).collect();
    let mean = values.iter().sum::<f64>() / draws as f64;
    let var = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (draws - 1) as f64;
    (mean, var)
}

fn lift<T: Real>(value: f64) -> T {
    T::from_f64(value)
}

#[test]
fn test_normal_across_representations() {
    let draws = 50_000;
    let results = [
        moments(Normal::new(1.0_f64, 2.0).unwrap(), 100, draws),
        moments(Normal::new(1.0_f32, 2.0).unwrap(), 100, draws),
        moments(Normal::new(lift::<Decimal>(1.0), lift(2.0)).unwrap(), 100, draws),
    ];
    for (mean, var) in results {
        assert!((mean - 1.0).abs() < 0.05, "mean {}", mean);
        assert_relative_eq!(var, 4.0, max_relative = 0.04);
    }
}

#[test]
fn test_gamma_across_representations() {
    let draws = 50_000;
    let results = [
        moments(Gamma::new(2.5_f64, 1.5).unwrap(), 200, draws),
        moments(Gamma::new(2.5_f32, 1.5).unwrap(), 200, draws),
        moments(Gamma::new(lift::<Decimal>(2.5), lift(1.5)).unwrap(), 200, draws),
    ];
    for (mean, var) in results {
        assert_relative_eq!(mean, 3.75, max_relative = 0.02);
        assert_relative_eq!(var, 5.625, max_relative = 0.05);
    }
}

#[test]
fn test_exponential_in_half_precision() {
    let (mean, var) = moments(Exponential::new(f16::from_f32(2.0)).unwrap(), 300, 50_000);
    // ten mantissa bits cap the tail near ln(1024) / 2
    assert_relative_eq!(mean, 0.5, max_relative = 0.03);
    assert_relative_eq!(var, 0.25, max_relative = 0.1);
}

#[test]
fn test_normal_in_half_precision_stays_finite() {
    let mut rng = Chance::from_seed(400);
    let normal = Normal::new(f16::ZERO, f16::ONE).unwrap();
    let mut sampler = Sampler::new(&mut rng, normal);
    assert!(sampler.sample_n(20_000).all(|x| x.is_finite()));
}

fn poisson_mean<T: Real>(lambda: T, draws: usize) -> f64 {
    let mut rng = Chance::from_seed(500);
    let mut sampler = Sampler::new(&mut rng, Poisson::new(lambda).unwrap());
    sampler.sample_n(draws).sum::<u64>() as f64 / draws as f64
}

#[test]
fn test_poisson_parameter_representations_agree() {
    let draws = 50_000;
    let wide = poisson_mean(12.5_f64, draws);

    // identical f64 kernels behind exactly representable parameters
    assert_eq!(wide, poisson_mean(12.5_f32, draws));
    assert_eq!(wide, poisson_mean(Decimal::new(125, 1), draws));
    assert_relative_eq!(wide, 12.5, max_relative = 0.01);
}

/// Count samplers refuse parameters whose draws would leave the `u64`
/// range, whatever representation carries them.
#[test]
fn test_count_parameter_limits_across_representations() {
    assert!(Poisson::new(Decimal::MAX).is_err());
    assert!(Poisson::new(f32::MAX).is_err());
    assert!(Poisson::new(f16::MAX).is_ok());
    assert!(Poisson::new(Decimal::from(9_000_000_000_000_000_000_u64)).is_ok());

    assert!(Geometric::new(Decimal::new(1, 28)).is_err());
    assert!(Geometric::new(f32::MIN_POSITIVE).is_err());
    assert!(Geometric::new(Decimal::new(2, 18)).is_ok());
    assert!(Geometric::new(f16::from_bits(1)).is_ok());

    assert!(NegativeBinomial::new(Decimal::ONE, Decimal::new(1, 20)).is_err());
    assert!(NegativeBinomial::new(f32::MAX, 0.5).is_err());
    assert!(NegativeBinomial::new(f16::ONE, f16::from_bits(1)).is_ok());
}

fn span_stays_in_range<T: Real>(seed: u64, a: T, b: T) -> Result<(), TestCaseError> {
    let (low, high) = if a < b { (a, b) } else { (b, a) };
    let mut rng = Chance::from_seed(seed);
    let uniform = ContinuousUniform::new(low, high).unwrap();
    let triangular = Triangular::new(low, low, high).unwrap();
    let mut uniform = Sampler::new(&mut rng, uniform);
    for x in uniform.sample_n(16) {
        prop_assert!(x >= low && x < high, "{} outside [{}, {})", x, low, high);
    }
    let mut triangular = Sampler::new(&mut rng, triangular);
    for x in triangular.sample_n(16) {
        prop_assert!(x.is_finite(), "{} from [{}, {}]", x, low, high);
    }
    Ok(())
}

fn decimal() -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0u32..=28)
        .prop_map(|(lo, mid, hi, negative, scale)| {
            Decimal::from_parts(lo, mid, hi, negative, scale)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_extreme_spans_f64(
        seed in any::<u64>(),
        a in prop::num::f64::NORMAL,
        b in prop::num::f64::NORMAL,
    ) {
        prop_assume!(a != b);
        span_stays_in_range(seed, a, b)?;
        span_stays_in_range(seed, f64::MIN, f64::MAX)?;
    }

    #[test]
    fn prop_extreme_spans_f32(
        seed in any::<u64>(),
        a in prop::num::f32::NORMAL,
        b in prop::num::f32::NORMAL,
    ) {
        prop_assume!(a != b);
        span_stays_in_range(seed, a, b)?;
        span_stays_in_range(seed, f32::MIN, f32::MAX)?;
    }

    #[test]
    fn prop_extreme_spans_f16(seed in any::<u64>(), a in any::<u16>(), b in any::<u16>()) {
        let (a, b) = (f16::from_bits(a), f16::from_bits(b));
        prop_assume!(a.is_finite() && b.is_finite() && a != b);
        span_stays_in_range(seed, a, b)?;
        span_stays_in_range(seed, f16::MIN, f16::MAX)?;
    }

    #[test]
    fn prop_extreme_spans_decimal(seed in any::<u64>(), a in decimal(), b in decimal()) {
        prop_assume!(a != b);
        span_stays_in_range(seed, a, b)?;
        span_stays_in_range(seed, Decimal::MIN, Decimal::MAX)?;
    }
}
