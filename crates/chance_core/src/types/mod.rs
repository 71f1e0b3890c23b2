//! Core error types.
//!
//! This module provides:
//! - `error`: the [`ChanceError`] taxonomy and parameter validation helpers
//!
//! # Re-exports
//!
//! [`ChanceError`] and the `require_*` helpers are re-exported at this level.

pub mod error;

pub use error::{
    require_finite, require_non_negative, require_ordered, require_positive,
    require_probability, ChanceError,
};
