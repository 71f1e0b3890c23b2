//! Generator configuration.
//!
//! This module provides [`ChanceConfig`], the immutable description of how a
//! generator is seeded and how the prime sampler guards sparse ranges, and
//! its fluent builder. Configurations can also be loaded from TOML:
//!
//! ```toml
//! seed = 42                   # or seed = "text material"; absent => auto
//! prime_min_population = 4.0
//! ```

use crate::rng::SeedSource;
use crate::types::ChanceError;
use tracing::debug;

/// Default minimum expected number of primes in a sampled range.
pub const DEFAULT_PRIME_MIN_POPULATION: f64 = 1.0;

/// Generator configuration.
///
/// Use [`ChanceConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use chance_core::config::ChanceConfig;
/// use chance_core::rng::{Chance, SeedSource};
///
/// let config = ChanceConfig::builder()
///     .seed(SeedSource::Numeric(42))
///     .prime_min_population(2.0)
///     .build()
///     .expect("valid configuration");
///
/// let a: Chance = Chance::from_config(&config);
/// let b = Chance::from_seed(42);
/// assert_eq!(a.snapshot(), b.snapshot());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChanceConfig {
    /// Seed material.
    seed: SeedSource,
    /// Minimum expected prime count before a prime range is rejected.
    prime_min_population: f64,
}

impl Default for ChanceConfig {
    fn default() -> Self {
        Self {
            seed: SeedSource::Auto,
            prime_min_population: DEFAULT_PRIME_MIN_POPULATION,
        }
    }
}

impl ChanceConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> ChanceConfigBuilder {
        ChanceConfigBuilder::default()
    }

    /// Returns the seed material.
    #[inline]
    pub fn seed(&self) -> &SeedSource {
        &self.seed
    }

    /// Returns the minimum expected prime count for prime ranges.
    #[inline]
    pub fn prime_min_population(&self) -> f64 {
        self.prime_min_population
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Config` if `prime_min_population` is negative or not finite.
    pub fn validate(&self) -> Result<(), ChanceError> {
        if !self.prime_min_population.is_finite() || self.prime_min_population < 0.0 {
            return Err(ChanceError::Config(format!(
                "prime_min_population must be finite and non-negative, got {}",
                self.prime_min_population
            )));
        }
        Ok(())
    }

    /// Parses a TOML document.
    ///
    /// Recognised keys are `seed` and `prime_min_population`; unknown keys
    /// are ignored. An integer seed becomes [`SeedSource::Numeric`] (negative
    /// values are reinterpreted as their two's-complement bit pattern), a
    /// string seed becomes [`SeedSource::Text`], and an absent seed means
    /// [`SeedSource::Auto`].
    ///
    /// # Errors
    ///
    /// - `Config` if the document is not valid TOML, or
    ///   `prime_min_population` is not a number or fails validation
    /// - `UnsupportedType` if `seed` is neither an integer nor a string
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chance_core::config::ChanceConfig;
    /// use chance_core::rng::SeedSource;
    ///
    /// let config = ChanceConfig::from_toml_str("seed = \"experiment-7\"").unwrap();
    /// assert_eq!(config.seed(), &SeedSource::Text("experiment-7".into()));
    ///
    /// assert!(ChanceConfig::from_toml_str("seed = 1.5").is_err());
    /// ```
    pub fn from_toml_str(document: &str) -> Result<Self, ChanceError> {
        let table: toml::Table = document
            .parse()
            .map_err(|e: toml::de::Error| ChanceError::Config(e.message().to_string()))?;

        let mut builder = ChanceConfig::builder();

        if let Some(value) = table.get("seed") {
            let seed = match value {
                toml::Value::Integer(n) => SeedSource::Numeric(*n as u64),
                toml::Value::String(text) => SeedSource::Text(text.clone()),
                other => {
                    return Err(ChanceError::UnsupportedType(format!(
                        "seed of TOML type {} cannot be used as seed material",
                        other.type_str()
                    )))
                }
            };
            builder = builder.seed(seed);
        }

        if let Some(value) = table.get("prime_min_population") {
            let population = match value {
                toml::Value::Float(x) => *x,
                toml::Value::Integer(n) => *n as f64,
                other => {
                    return Err(ChanceError::Config(format!(
                        "prime_min_population must be a number, got {}",
                        other.type_str()
                    )))
                }
            };
            builder = builder.prime_min_population(population);
        }

        let config = builder.build()?;
        debug!(seed_kind = config.seed.kind(), "loaded configuration from TOML");
        Ok(config)
    }
}

/// Builder for [`ChanceConfig`].
#[derive(Clone, Debug, Default)]
pub struct ChanceConfigBuilder {
    seed: Option<SeedSource>,
    prime_min_population: Option<f64>,
}

impl ChanceConfigBuilder {
    /// Sets the seed material.
    #[inline]
    pub fn seed(mut self, seed: SeedSource) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the minimum expected prime count for prime ranges.
    ///
    /// # Arguments
    ///
    /// * `population` - Finite, non-negative expected count
    #[inline]
    pub fn prime_min_population(mut self, population: f64) -> Self {
        self.prime_min_population = Some(population);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Config` if validation fails.
    pub fn build(self) -> Result<ChanceConfig, ChanceError> {
        let config = ChanceConfig {
            seed: self.seed.unwrap_or_default(),
            prime_min_population: self
                .prime_min_population
                .unwrap_or(DEFAULT_PRIME_MIN_POPULATION),
        };
        config.validate()?;
        Ok(config)
    }
}
