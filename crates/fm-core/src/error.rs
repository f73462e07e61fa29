//! Error types and handling for the Flexible Median library
//!
//! This module defines the `FmError` enum returned by the fallible parts of
//! the library: building validated parameters and running batch computations
//! into caller-provided buffers. The raw weighted average behind the exported
//! `calculate` symbol never fails and never produces an `FmError`.

use alloc::string::String;

/// Error type for Flexible Median operations
///
/// All fallible operations return a `Result<T, FmError>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FmError {
    /// Invalid input data (e.g., columns of different lengths)
    InvalidInput {
        /// Description of the invalid input
        message: String,
    },

    /// Invalid parameter value
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Invalid value (as string for flexible representation)
        value: String,
        /// Expected value description
        expected: String,
    },

    /// Output buffer too small for the provided input
    InsufficientData {
        /// Required minimum length
        required: usize,
        /// Actual length provided
        actual: usize,
    },
}

impl FmError {
    /// Creates an InvalidInput error
    ///
    /// # Example
    ///
    /// ```rust
    /// use fm_core::error::FmError;
    ///
    /// let err = FmError::invalid_input("column lengths differ");
    /// ```
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        FmError::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an InvalidParameter error
    ///
    /// # Arguments
    ///
    /// * `name` - Parameter name
    /// * `value` - Invalid value (as string)
    /// * `expected` - Expected value description
    ///
    /// # Example
    ///
    /// ```rust
    /// use fm_core::error::FmError;
    ///
    /// let err = FmError::invalid_parameter("open_weight", "-1", "finite value >= 0");
    /// ```
    pub fn invalid_parameter<N, V, E>(name: N, value: V, expected: E) -> Self
    where
        N: Into<String>,
        V: Into<String>,
        E: Into<String>,
    {
        FmError::InvalidParameter {
            name: name.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Creates an InsufficientData error
    ///
    /// # Example
    ///
    /// ```rust
    /// use fm_core::error::FmError;
    ///
    /// let err = FmError::insufficient_data(20, 10);
    /// ```
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        FmError::InsufficientData { required, actual }
    }
}

impl core::fmt::Display for FmError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FmError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            FmError::InvalidParameter {
                name,
                value,
                expected,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}': got '{}', expected {}",
                    name, value, expected
                )
            }
            FmError::InsufficientData { required, actual } => {
                write!(
                    f,
                    "Insufficient data: required {} data points, got {}",
                    required, actual
                )
            }
        }
    }
}

impl core::error::Error for FmError {}

/// Result type alias for Flexible Median operations
///
/// # Example
///
/// ```rust
/// use fm_core::error::{FmError, Result};
///
/// fn checked_weight(w: f64) -> Result<f64> {
///     if w < 0.0 {
///         return Err(FmError::invalid_parameter("weight", "negative", "value >= 0"));
///     }
///     Ok(w)
/// }
///
/// assert!(checked_weight(1.0).is_ok());
/// ```
pub type Result<T> = core::result::Result<T, FmError>;
