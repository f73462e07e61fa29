//! FM-Py: Python bindings for the Flexible Median indicator
//!
//! This crate exposes the Flexible Median computation to Python using PyO3,
//! with numpy arrays for batch input and output.
//!
//! Note: This crate requires a Python 3.x interpreter to build.

use fm_core::{flexible_median as weighted_average, FlexibleMedian, FmError};
use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Python module for the Flexible Median indicator
#[pymodule]
fn fm_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(calculate, m)?)?;
    m.add_function(wrap_pyfunction!(flexible_median, m)?)?;
    Ok(())
}

fn to_py_err(err: FmError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Weighted average of one bar, same contract as the `calculate` DLL export.
///
/// No validation: degenerate weights yield `inf` or `nan`.
#[pyfunction]
#[pyo3(signature = (bar_index, open_weight, high_low_weight, open, high, low, close))]
fn calculate(
    bar_index: i32,
    open_weight: f64,
    high_low_weight: f64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
) -> f64 {
    let _ = bar_index;
    weighted_average(open_weight, high_low_weight, open, high, low, close)
}

/// Flexible Median over numpy price columns.
///
/// Weights must be finite and non-negative; a `ValueError` is raised
/// otherwise, or when the columns differ in length.
#[pyfunction]
#[pyo3(signature = (open, high, low, close, open_weight=1.0, high_low_weight=1.0))]
fn flexible_median<'py>(
    py: Python<'py>,
    open: PyReadonlyArray1<'py, f64>,
    high: PyReadonlyArray1<'py, f64>,
    low: PyReadonlyArray1<'py, f64>,
    close: PyReadonlyArray1<'py, f64>,
    open_weight: f64,
    high_low_weight: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let indicator = FlexibleMedian::with_weights(open_weight, high_low_weight).map_err(to_py_err)?;
    let close = close.as_slice()?;
    let mut outputs = vec![f64::NAN; close.len()];
    indicator
        .compute_columns(
            open.as_slice()?,
            high.as_slice()?,
            low.as_slice()?,
            close,
            &mut outputs,
        )
        .map_err(to_py_err)?;
    Ok(outputs.into_pyarray_bound(py))
}
