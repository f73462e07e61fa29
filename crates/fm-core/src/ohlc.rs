//! Bar data used as input to indicators.
//!
//! [`Ohlc`] is a single bar. [`Bars`] stores a series column-wise in
//! cache-line aligned buffers so batch code can stream each price column
//! through SIMD lanes.

use aligned_vec::{AVec, CACHELINE_ALIGN};

use crate::types::Price;

/// One OHLC bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ohlc {
    /// Opening price of the bar.
    pub open: Price,
    /// Highest price during the bar.
    pub high: Price,
    /// Lowest price during the bar.
    pub low: Price,
    /// Closing (or latest) price of the bar.
    pub close: Price,
}

impl Ohlc {
    /// Creates a bar from its four prices.
    #[inline]
    pub const fn new(open: Price, high: Price, low: Price, close: Price) -> Self {
        Self {
            open,
            high,
            low,
            close,
        }
    }
}

impl From<(Price, Price, Price, Price)> for Ohlc {
    fn from((open, high, low, close): (Price, Price, Price, Price)) -> Self {
        Self::new(open, high, low, close)
    }
}

/// Column-oriented bar series.
///
/// Each price column lives in its own cache-line aligned buffer. All four
/// columns always have the same length.
#[derive(Debug, Clone)]
pub struct Bars {
    open: AVec<Price>,
    high: AVec<Price>,
    low: AVec<Price>,
    close: AVec<Price>,
}

impl Bars {
    /// Creates an empty series.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty series with room for `capacity` bars per column.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            open: AVec::with_capacity(CACHELINE_ALIGN, capacity),
            high: AVec::with_capacity(CACHELINE_ALIGN, capacity),
            low: AVec::with_capacity(CACHELINE_ALIGN, capacity),
            close: AVec::with_capacity(CACHELINE_ALIGN, capacity),
        }
    }

    /// Appends a bar to every column.
    pub fn push(&mut self, bar: Ohlc) {
        self.open.push(bar.open);
        self.high.push(bar.high);
        self.low.push(bar.low);
        self.close.push(bar.close);
    }

    /// Number of bars in the series.
    #[inline]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Returns `true` when the series holds no bars.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Returns the bar at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Ohlc> {
        if index >= self.len() {
            return None;
        }
        Some(Ohlc::new(
            self.open[index],
            self.high[index],
            self.low[index],
            self.close[index],
        ))
    }

    /// Open prices.
    #[inline]
    pub fn open(&self) -> &[Price] {
        &self.open
    }

    /// High prices.
    #[inline]
    pub fn high(&self) -> &[Price] {
        &self.high
    }

    /// Low prices.
    #[inline]
    pub fn low(&self) -> &[Price] {
        &self.low
    }

    /// Close prices.
    #[inline]
    pub fn close(&self) -> &[Price] {
        &self.close
    }
}

impl Default for Bars {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Ohlc> for Bars {
    fn from_iter<I: IntoIterator<Item = Ohlc>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut bars = Bars::with_capacity(iter.size_hint().0);
        for bar in iter {
            bars.push(bar);
        }
        bars
    }
}

impl Extend<Ohlc> for Bars {
    fn extend<I: IntoIterator<Item = Ohlc>>(&mut self, iter: I) {
        for bar in iter {
            self.push(bar);
        }
    }
}
