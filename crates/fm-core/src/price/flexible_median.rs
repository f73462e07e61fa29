//! Implementation of the Flexible Median weighted OHLC average.
//!
//! ```text
//! fm = (open * ow + high * hlw + low * hlw + close) / (ow + 2 * hlw + 1)
//! ```
//!
//! `close` carries a fixed weight of 1. With both weights at 1 the result is
//! the plain OHLC average.

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use aligned_vec::{AVec, CACHELINE_ALIGN};
use wide::f64x4;

use crate::error::{FmError, Result};
use crate::ohlc::{Bars, Ohlc};
use crate::traits::{Indicator, Resettable};
use crate::types::Price;

/// Number of bars processed per SIMD step in the columnar batch path.
pub const LANES: usize = 4;

/// Weighted average of one bar's prices.
///
/// Performs no validation. NaN or infinite inputs, and weights whose
/// denominator `open_weight + 2 * high_low_weight + 1` is zero or negative,
/// go through IEEE-754 arithmetic as-is: a zero denominator yields `±inf` or
/// NaN.
///
/// # Example
///
/// ```rust
/// use fm_core::flexible_median;
///
/// assert_eq!(flexible_median(1.0, 1.0, 10.0, 12.0, 8.0, 11.0), 10.25);
/// assert_eq!(flexible_median(0.0, 0.0, 5.0, 7.0, 3.0, 9.0), 9.0);
/// ```
#[inline]
pub fn flexible_median(
    open_weight: Price,
    high_low_weight: Price,
    open: Price,
    high: Price,
    low: Price,
    close: Price,
) -> Price {
    (open * open_weight + high * high_low_weight + low * high_low_weight + close)
        / (open_weight + 2.0 * high_low_weight + 1.0)
}

/// Validated weights for [`FlexibleMedian`].
///
/// Weights are finite and no lower than [`MIN_WEIGHT`](Self::MIN_WEIGHT).
/// Both default to [`DEFAULT_WEIGHT`](Self::DEFAULT_WEIGHT).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexibleMedianParams {
    open_weight: Price,
    high_low_weight: Price,
}

impl FlexibleMedianParams {
    /// Default value of both weights.
    pub const DEFAULT_WEIGHT: Price = 1.0;
    /// Increment hosts use when presenting the weights as inputs.
    pub const WEIGHT_STEP: Price = 0.1;
    /// Smallest accepted weight.
    pub const MIN_WEIGHT: Price = 0.0;

    /// Builds a parameter set, rejecting negative or non-finite weights.
    ///
    /// # Errors
    ///
    /// Returns [`FmError::InvalidParameter`] naming the first offending weight.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fm_core::FlexibleMedianParams;
    ///
    /// assert!(FlexibleMedianParams::new(2.0, 0.5).is_ok());
    /// assert!(FlexibleMedianParams::new(-0.5, 0.0).is_err());
    /// ```
    pub fn new(open_weight: Price, high_low_weight: Price) -> Result<Self> {
        Ok(Self {
            open_weight: check_weight("open_weight", open_weight)?,
            high_low_weight: check_weight("high_low_weight", high_low_weight)?,
        })
    }

    /// Weight applied to the open price.
    #[inline]
    pub fn open_weight(&self) -> Price {
        self.open_weight
    }

    /// Weight applied to both the high and the low price.
    #[inline]
    pub fn high_low_weight(&self) -> Price {
        self.high_low_weight
    }

    /// Sum of all weights, `close` included.
    #[inline]
    pub fn denominator(&self) -> Price {
        self.open_weight + 2.0 * self.high_low_weight + 1.0
    }

    #[inline]
    fn apply(&self, bar: Ohlc) -> Price {
        flexible_median(
            self.open_weight,
            self.high_low_weight,
            bar.open,
            bar.high,
            bar.low,
            bar.close,
        )
    }
}

impl Default for FlexibleMedianParams {
    fn default() -> Self {
        Self {
            open_weight: Self::DEFAULT_WEIGHT,
            high_low_weight: Self::DEFAULT_WEIGHT,
        }
    }
}

fn check_weight(name: &'static str, weight: Price) -> Result<Price> {
    if weight.is_finite() && weight >= FlexibleMedianParams::MIN_WEIGHT {
        return Ok(weight);
    }
    tracing::debug!(parameter = name, value = weight, "rejected flexible median weight");
    Err(FmError::invalid_parameter(
        name,
        format!("{}", weight),
        format!("finite value >= {}", FlexibleMedianParams::MIN_WEIGHT),
    ))
}

/// Flexible Median indicator.
///
/// Applies [`flexible_median`] to each bar. Streaming calls count the bars
/// they have seen, which is the bar index a host passes alongside each bar.
#[derive(Debug, Clone, Default)]
pub struct FlexibleMedian {
    params: FlexibleMedianParams,
    bars_seen: usize,
}

impl FlexibleMedian {
    /// Creates the indicator from validated parameters.
    pub fn new(params: FlexibleMedianParams) -> Self {
        Self {
            params,
            bars_seen: 0,
        }
    }

    /// Validates the weights and creates the indicator.
    ///
    /// # Errors
    ///
    /// See [`FlexibleMedianParams::new`].
    pub fn with_weights(open_weight: Price, high_low_weight: Price) -> Result<Self> {
        FlexibleMedianParams::new(open_weight, high_low_weight).map(Self::new)
    }

    /// Parameters in use.
    #[inline]
    pub fn params(&self) -> &FlexibleMedianParams {
        &self.params
    }

    /// Number of bars consumed by `next`/`stream` since creation or the last reset.
    #[inline]
    pub fn bars_seen(&self) -> usize {
        self.bars_seen
    }

    /// Batch computation over struct-of-arrays input.
    ///
    /// Processes [`LANES`] bars per step with `wide` vectors and finishes the
    /// tail with the scalar formula. Vector lanes perform the same operations
    /// in the same order as [`flexible_median`], so results match it bit for
    /// bit.
    ///
    /// # Errors
    ///
    /// - [`FmError::InvalidInput`] when the four columns differ in length
    /// - [`FmError::InsufficientData`] when `outputs` is shorter than the columns
    pub fn compute_columns(
        &self,
        open: &[Price],
        high: &[Price],
        low: &[Price],
        close: &[Price],
        outputs: &mut [Price],
    ) -> Result<usize> {
        let n = close.len();
        if open.len() != n || high.len() != n || low.len() != n {
            return Err(FmError::invalid_input(format!(
                "column lengths differ: open={}, high={}, low={}, close={}",
                open.len(),
                high.len(),
                low.len(),
                n
            )));
        }
        if outputs.len() < n {
            return Err(FmError::insufficient_data(n, outputs.len()));
        }

        let ow = f64x4::splat(self.params.open_weight);
        let hlw = f64x4::splat(self.params.high_low_weight);
        let denom = f64x4::splat(self.params.denominator());

        let simd_end = n - n % LANES;
        let mut i = 0;
        while i < simd_end {
            let o = load(&open[i..i + LANES]);
            let h = load(&high[i..i + LANES]);
            let l = load(&low[i..i + LANES]);
            let c = load(&close[i..i + LANES]);
            let value = (o * ow + h * hlw + l * hlw + c) / denom;
            outputs[i..i + LANES].copy_from_slice(&value.to_array());
            i += LANES;
        }
        for j in simd_end..n {
            outputs[j] = flexible_median(
                self.params.open_weight,
                self.params.high_low_weight,
                open[j],
                high[j],
                low[j],
                close[j],
            );
        }

        Ok(n)
    }

    /// Batch computation over a [`Bars`] series into an aligned buffer.
    pub fn compute_bars(&self, bars: &Bars) -> Result<AVec<Price>> {
        let mut outputs = AVec::with_capacity(CACHELINE_ALIGN, bars.len());
        outputs.resize(bars.len(), 0.0);
        self.compute_columns(
            bars.open(),
            bars.high(),
            bars.low(),
            bars.close(),
            &mut outputs,
        )?;
        Ok(outputs)
    }
}

#[inline]
fn load(chunk: &[Price]) -> f64x4 {
    f64x4::new([chunk[0], chunk[1], chunk[2], chunk[3]])
}

impl Indicator for FlexibleMedian {
    type Input = Ohlc;

    type Output = Price;

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, inputs: &[Self::Input], outputs: &mut [Self::Output]) -> Result<usize> {
        if outputs.len() < inputs.len() {
            return Err(FmError::insufficient_data(inputs.len(), outputs.len()));
        }
        for (out, bar) in outputs.iter_mut().zip(inputs) {
            *out = self.params.apply(*bar);
        }
        Ok(inputs.len())
    }

    fn compute_to_vec(&self, inputs: &[Self::Input]) -> Result<Vec<Self::Output>> {
        let mut result = vec![Price::NAN; inputs.len()];
        self.compute(inputs, &mut result)?;
        Ok(result)
    }

    fn next(&mut self, input: Self::Input) -> Self::Output {
        self.bars_seen += 1;
        self.params.apply(input)
    }

    fn stream(&mut self, inputs: &[Self::Input]) -> Vec<Option<Self::Output>> {
        inputs.iter().map(|bar| Some(self.next(*bar))).collect()
    }
}

impl Resettable for FlexibleMedian {
    fn reset(&mut self) {
        tracing::trace!(bars_seen = self.bars_seen, "flexible median reset");
        self.bars_seen = 0;
    }
}
