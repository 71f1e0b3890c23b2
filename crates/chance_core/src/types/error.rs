//! Error types for structured error handling.
//!
//! This module provides [`ChanceError`], the single error type shared by the
//! generator, the uniform layers, the matrix collaborator and every
//! distribution sampler. Its variants mirror the three failure classes of the
//! engine:
//!
//! - argument-range errors, raised when a sampler or range is constructed
//!   with parameters outside their support,
//! - operation errors, raised when a well-formed request has no valid answer,
//! - unsupported-type errors, raised when seed material cannot be interpreted.
//!
//! The module also provides the validation helpers used by every constructor,
//! so that the "fail immediately, never clamp" policy lives in one place.

use crate::numeric::Real;
use thiserror::Error;

/// Categorised engine errors.
///
/// # Variants
/// - `ArgumentOutOfRange`: a parameter is non-finite, out of support, or a
///   range is reversed
/// - `InvalidOperation`: the request is well-formed but has no answer
/// - `UnsupportedType`: seed material of a type the hashing path cannot use
/// - `Config`: a configuration document could not be parsed
///
/// # Examples
/// ```
/// use chance_core::types::ChanceError;
///
/// let err = ChanceError::argument("shape", "must be positive, got -1");
/// assert_eq!(
///     format!("{}", err),
///     "Argument out of range: shape must be positive, got -1"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChanceError {
    /// Parameter outside the support of the operation.
    #[error("Argument out of range: {name} {reason}")]
    ArgumentOutOfRange {
        /// Name of the offending parameter
        name: &'static str,
        /// Description of the violated constraint
        reason: String,
    },

    /// Well-formed request without a valid answer.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Value of a type that cannot be interpreted as seed material.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Configuration document could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ChanceError {
    /// Shorthand for [`ChanceError::ArgumentOutOfRange`].
    pub fn argument(name: &'static str, reason: impl Into<String>) -> Self {
        ChanceError::ArgumentOutOfRange {
            name,
            reason: reason.into(),
        }
    }
}

/// Fails unless `value` is finite.
pub fn require_finite<T: Real>(name: &'static str, value: T) -> Result<T, ChanceError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChanceError::argument(
            name,
            format!("must be finite, got {}", value),
        ))
    }
}

/// Fails unless `value` is finite and strictly positive.
pub fn require_positive<T: Real>(name: &'static str, value: T) -> Result<T, ChanceError> {
    let value = require_finite(name, value)?;
    if value > T::zero() {
        Ok(value)
    } else {
        Err(ChanceError::argument(
            name,
            format!("must be positive, got {}", value),
        ))
    }
}

/// Fails unless `value` is finite and not negative.
pub fn require_non_negative<T: Real>(name: &'static str, value: T) -> Result<T, ChanceError> {
    let value = require_finite(name, value)?;
    if value >= T::zero() {
        Ok(value)
    } else {
        Err(ChanceError::argument(
            name,
            format!("must not be negative, got {}", value),
        ))
    }
}

/// Fails unless `value` is a probability in `[0, 1]`.
pub fn require_probability<T: Real>(name: &'static str, value: T) -> Result<T, ChanceError> {
    let value = require_finite(name, value)?;
    if value >= T::zero() && value <= T::one() {
        Ok(value)
    } else {
        Err(ChanceError::argument(
            name,
            format!("must lie in [0, 1], got {}", value),
        ))
    }
}

/// Fails unless `low < high` and both bounds are finite.
pub fn require_ordered<T: Real>(
    low_name: &'static str,
    low: T,
    high_name: &'static str,
    high: T,
) -> Result<(T, T), ChanceError> {
    let low = require_finite(low_name, low)?;
    let high = require_finite(high_name, high)?;
    if low < high {
        Ok((low, high))
    } else {
        Err(ChanceError::argument(
            high_name,
            format!("must exceed {} ({}), got {}", low_name, low, high),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChanceError::InvalidOperation("range [24, 29) contains no primes".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid operation: range [24, 29) contains no primes"
        );

        let err = ChanceError::UnsupportedType("seed of type boolean".to_string());
        assert!(err.to_string().contains("boolean"));
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("scale", 2.0_f64), Ok(2.0));
        assert!(require_positive("scale", 0.0_f64).is_err());
        assert!(require_positive("scale", -1.0_f32).is_err());
        assert!(require_positive("scale", f64::NAN).is_err());
        assert!(require_positive("scale", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_probability() {
        assert!(require_probability("p", 0.0_f64).is_ok());
        assert!(require_probability("p", 1.0_f64).is_ok());
        assert!(require_probability("p", 1.5_f64).is_err());
        assert!(require_probability("p", -0.1_f64).is_err());
    }

    #[test]
    fn test_require_ordered() {
        assert!(require_ordered("min", 1.0_f64, "max", 2.0).is_ok());
        let err = require_ordered("min", 2.0_f64, "max", 2.0).unwrap_err();
        match err {
            ChanceError::ArgumentOutOfRange { name, .. } => assert_eq!(name, "max"),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
