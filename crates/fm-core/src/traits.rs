//! Core traits for indicators
//!
//! This module defines the traits every indicator in the library implements.
//! The design mirrors how hosts drive the library: either a whole series at
//! once (batch) or one bar at a time as bars arrive (streaming).
//!
//! ## NaN Value Semantics
//!
//! Indicators with a warm-up period use `Float::NAN` in batch output and from
//! `next()` while they accumulate data, and `None` from `stream()`. Indicators
//! without warm-up (lookback of zero) return a value for every input; any NaN
//! they return comes from the arithmetic itself.

use alloc::vec::Vec;

use crate::error::Result;

/// Unified trait for indicators
///
/// Supports three usage modes:
/// - **Batch computation** into a caller-provided buffer (`compute`)
/// - **Convenient batch computation** with automatic memory management (`compute_to_vec`)
/// - **Streaming computation** for real-time data (`next`, `stream`)
///
/// # Example
///
/// ```rust
/// use fm_core::{FlexibleMedian, Indicator, Ohlc};
///
/// let mut fm = FlexibleMedian::default();
/// let bars = [Ohlc::new(10.0, 12.0, 8.0, 11.0), Ohlc::new(11.0, 13.0, 9.0, 12.0)];
///
/// // Batch into an existing buffer
/// let mut outputs = vec![0.0; bars.len()];
/// let count = fm.compute(&bars, &mut outputs).unwrap();
/// assert_eq!(count, 2);
///
/// // Batch with allocation
/// let results = fm.compute_to_vec(&bars).unwrap();
/// assert_eq!(results, outputs);
///
/// // Streaming
/// assert_eq!(fm.next(bars[0]), 10.25);
/// ```
pub trait Indicator {
    /// Input type for this indicator
    type Input;

    /// Output type for this indicator
    type Output;

    /// Returns the number of inputs skipped before the first valid output
    fn lookback(&self) -> usize;

    /// Batch computation into a caller-provided buffer
    ///
    /// Writes one output per input into `outputs` and returns the number of
    /// values written.
    ///
    /// # Errors
    ///
    /// Returns [`FmError::InsufficientData`](crate::FmError::InsufficientData)
    /// when `outputs` is shorter than `inputs`.
    fn compute(&self, inputs: &[Self::Input], outputs: &mut [Self::Output]) -> Result<usize>;

    /// Batch computation with automatic memory management
    ///
    /// Allocates an output vector with one value per input.
    fn compute_to_vec(&self, inputs: &[Self::Input]) -> Result<Vec<Self::Output>>;

    /// Process a single new input (streaming mode)
    fn next(&mut self, input: Self::Input) -> Self::Output;

    /// Process a slice of inputs with `next`
    ///
    /// Each element is `Some(output)` once the indicator is past its warm-up
    /// period and `None` before it.
    fn stream(&mut self, inputs: &[Self::Input]) -> Vec<Option<Self::Output>>;
}

/// Trait for indicators that can reset their internal state
///
/// After `reset()` the indicator behaves as if it were just created.
pub trait Resettable {
    /// Reset the indicator to its initial state
    fn reset(&mut self);
}
