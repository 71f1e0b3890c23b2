//! Integration tests for module exports.
//!
//! Verifies that public modules and types are accessible via absolute
//! paths and interoperate with the rand ecosystem.

use half::f16;
use rust_decimal::Decimal;

/// Error type and validation helpers are exported.
#[test]
fn test_types_module_exports() {
    use chance_core::types::{require_positive, ChanceError};

    let err = require_positive("scale", -1.0_f64).unwrap_err();
    assert!(matches!(err, ChanceError::ArgumentOutOfRange { name: "scale", .. }));
}

/// Numeric representations all implement the shared trait.
#[test]
fn test_numeric_module_exports() {
    use chance_core::numeric::special::ln_gamma;
    use chance_core::numeric::Real;

    fn name<T: Real>() -> &'static str {
        T::NAME
    }

    let names = [name::<f64>(), name::<f32>(), name::<f16>(), name::<Decimal>()];
    let mut unique = names.to_vec();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), 4);

    assert!(ln_gamma(1.0_f64).abs() < 1e-12);
}

/// Uniform layers are reachable from the generator.
#[test]
fn test_uniform_module_exports() {
    use chance_core::rng::Chance;
    use chance_core::uniform::{IntRange, UniformExt};

    let mut rng = Chance::from_seed(1);
    let range = IntRange::new(0_u128, 10).unwrap();
    assert!(range.sample(&mut rng) < 10);

    let h: f16 = rng.next_unit();
    assert!(h >= f16::ZERO && h < f16::ONE);
}

/// Matrix collaborator is exported.
#[test]
fn test_linalg_module_exports() {
    use chance_core::linalg::{cholesky, Matrix};

    let a = Matrix::<f64>::identity(3);
    assert_eq!(cholesky(&a).unwrap(), a);
    assert_eq!(a.cholesky().unwrap(), a);
}

/// Configuration loading is exported.
#[test]
fn test_config_module_exports() {
    use chance_core::config::ChanceConfig;
    use chance_core::rng::{Chance, SeedSource};

    let config = ChanceConfig::from_toml_str("seed = \"run-1\"").unwrap();
    assert_eq!(config.seed(), &SeedSource::Text("run-1".to_string()));
    let from_config: Chance = Chance::from_config(&config);
    assert_eq!(from_config.snapshot(), Chance::from_text("run-1").snapshot());
}

/// The generator drives rand-ecosystem code through `RngCore`.
#[test]
fn test_rand_interop() {
    use chance_core::rng::{Chance, RandSource};
    use chance_core::uniform::UniformExt;
    use rand::Rng;

    let mut rng = Chance::from_seed(8);
    let x: f64 = rng.gen_range(0.0..1.0);
    assert!((0.0..1.0).contains(&x));

    let mut adapted = RandSource::new(Chance::from_seed(8));
    let y = adapted.next_in_range(0_u32, 100).unwrap();
    assert!(y < 100);
}
