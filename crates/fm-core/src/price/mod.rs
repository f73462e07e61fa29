//! Price Transform indicators
//!
//! This module contains indicators that combine the prices of a single bar
//! into one value, such as the Flexible Median weighted average. They have no
//! warm-up period: every bar yields a value.

mod flexible_median;

pub use flexible_median::{flexible_median, FlexibleMedian, FlexibleMedianParams, LANES};
