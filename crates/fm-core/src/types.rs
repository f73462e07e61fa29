//! Floating-point type configuration
//!
//! The exported `calculate` symbol takes and returns C `double`s, so the
//! library is fixed to double precision. [`Float`] names the arithmetic type,
//! [`Price`] documents intent in signatures that carry price values.
//!
//! # Example
//!
//! ```rust
//! use fm_core::types::{Float, Price};
//!
//! let weight: Float = 1.0;
//! let close: Price = 11.0;
//! assert_eq!(weight * close, 11.0);
//! ```

/// Floating-point type used throughout the library
///
/// Always `f64`: the binary interface of the dynamic library is defined in
/// terms of `double`.
pub type Float = f64;

/// A price value.
///
/// Semantic alias for [`Float`]. Used for open/high/low/close arguments and
/// for the weighted average they produce.
pub type Price = Float;
