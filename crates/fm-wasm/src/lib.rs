//! FM-Wasm: WebAssembly bindings for the Flexible Median indicator
//!
//! This crate exposes the Flexible Median computation to JavaScript hosts
//! using wasm-bindgen.

use fm_core::{flexible_median as weighted_average, FlexibleMedian, FmError, Indicator, Ohlc, Resettable};
use wasm_bindgen::prelude::*;

#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

fn to_js_error(err: FmError) -> JsError {
    let message = err.to_string();
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsError::new(&message)
}

/// Weighted average of one bar, same contract as the `calculate` DLL export.
///
/// No validation: degenerate weights yield `Infinity` or `NaN`.
#[wasm_bindgen]
#[allow(non_snake_case)]
pub fn calculate(
    barIndex: i32,
    openWeight: f64,
    highLowWeight: f64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
) -> f64 {
    let _ = barIndex;
    weighted_average(openWeight, highLowWeight, open, high, low, close)
}

/// Flexible Median over price columns, returned as a `Float64Array`.
#[wasm_bindgen(js_name = flexibleMedian)]
pub fn flexible_median(
    open: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
    open_weight: f64,
    high_low_weight: f64,
) -> Result<Vec<f64>, JsError> {
    let indicator = FlexibleMedian::with_weights(open_weight, high_low_weight).map_err(to_js_error)?;
    let mut outputs = vec![f64::NAN; close.len()];
    indicator
        .compute_columns(open, high, low, close, &mut outputs)
        .map_err(to_js_error)?;
    Ok(outputs)
}

/// Bar-by-bar Flexible Median for hosts that receive bars as they close.
#[wasm_bindgen]
pub struct FlexibleMedianStream {
    inner: FlexibleMedian,
}

#[wasm_bindgen]
impl FlexibleMedianStream {
    /// Creates a stream with validated weights.
    #[wasm_bindgen(constructor)]
    pub fn new(open_weight: f64, high_low_weight: f64) -> Result<FlexibleMedianStream, JsError> {
        FlexibleMedian::with_weights(open_weight, high_low_weight)
            .map(|inner| FlexibleMedianStream { inner })
            .map_err(to_js_error)
    }

    /// Consumes one bar and returns its weighted average.
    pub fn next(&mut self, open: f64, high: f64, low: f64, close: f64) -> f64 {
        self.inner.next(Ohlc::new(open, high, low, close))
    }

    /// Forgets how many bars have been consumed.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Number of bars consumed since creation or the last reset.
    #[wasm_bindgen(getter, js_name = barsSeen)]
    pub fn bars_seen(&self) -> usize {
        self.inner.bars_seen()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate() {
        assert_eq!(calculate(0, 1.0, 1.0, 10.0, 12.0, 8.0, 11.0), 10.25);
        assert_eq!(calculate(42, 0.0, 0.0, 5.0, 7.0, 3.0, 9.0), 9.0);
    }

    #[test]
    fn test_flexible_median_columns() {
        let out = flexible_median(
            &[10.0, 100.0],
            &[12.0, 110.0],
            &[8.0, 90.0],
            &[11.0, 105.0],
            1.0,
            1.0,
        )
        .unwrap();
        assert_eq!(out, vec![10.25, 101.25]);
    }

    #[test]
    fn test_stream_counts_bars() {
        let mut stream = FlexibleMedianStream::new(2.0, 0.5).unwrap();
        assert_eq!(stream.next(100.0, 110.0, 90.0, 105.0), 101.25);
        assert_eq!(stream.bars_seen(), 1);
        stream.reset();
        assert_eq!(stream.bars_seen(), 0);
    }
}
