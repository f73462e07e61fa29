//! FM-Core: Core library for the Flexible Median indicator
//!
//! This crate provides the weighted OHLC average behind the exported
//! `calculate` symbol of the `blackboxDll` library, plus a streaming and
//! batch indicator built on top of it. The crate is `no_std` compatible
//! (it needs `alloc`).
//!
//! # Features
//!
//! - `std` (default): Enables `std` support in the logging backend
//!
//! # Modules
//!
//! - [`types`]: Floating-point type configuration
//! - [`error`]: Error type shared by every fallible operation
//! - [`ohlc`]: Bar and columnar bar storage
//! - [`price`]: Price transforms, including [`FlexibleMedian`]
//! - [`traits`]: The [`Indicator`] and [`Resettable`] traits

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod error;
pub mod ohlc;
pub mod price;
pub mod traits;
pub mod types;

pub use error::{FmError, Result};
pub use ohlc::{Bars, Ohlc};
pub use price::{flexible_median, FlexibleMedian, FlexibleMedianParams};
pub use traits::{Indicator, Resettable};
pub use types::{Float, Price};
