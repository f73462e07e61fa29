//! FM-Dll: dynamic library exporting the Flexible Median `calculate` symbol
//!
//! Hosts load `blackboxDll` at run time and bind `calculate` by name:
//!
//! ```c
//! double __stdcall calculate(int barIndex,
//!                            double openWeight, double highLowWeight,
//!                            double open, double high, double low, double close);
//! ```
//!
//! The function is declared `extern "system"`, which is `stdcall` on 32-bit
//! Windows and the platform C convention everywhere else. It is stateless and
//! reentrant, performs no validation and cannot fail: degenerate weights
//! produce `inf` or NaN exactly as IEEE-754 division does.

#![warn(missing_docs)]

use core::ffi::c_int;

/// Function pointer type hosts bind the `calculate` export to.
pub type CalculateFn = extern "system" fn(c_int, f64, f64, f64, f64, f64, f64) -> f64;

/// Weighted average of one OHLC bar.
///
/// Returns `(open * openWeight + high * highLowWeight + low * highLowWeight + close)
/// / (openWeight + 2 * highLowWeight + 1)`. `barIndex` is part of the host's
/// callback signature and does not take part in the computation.
#[no_mangle]
pub extern "system" fn calculate(
    barIndex: c_int,
    openWeight: f64,
    highLowWeight: f64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
) -> f64 {
    let _ = barIndex;
    fm_core::flexible_median(openWeight, highLowWeight, open, high, low, close)
}
