use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    /// (fast, slow, signal)
    pub period: (usize, usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub period: usize,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtrIndicator {
    pub value: f64,
    pub period: usize,
}

/// Ichimoku lines at the latest bar, plus the two lines at the bar before it
/// for crossover detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IchimokuIndicator {
    /// Tenkan-sen
    pub conversion: f64,
    /// Kijun-sen
    pub base: f64,
    /// Senkou span A, already displaced onto the latest bar.
    pub span_a: f64,
    /// Senkou span B, already displaced onto the latest bar.
    pub span_b: f64,
    pub prev_conversion: f64,
    pub prev_base: f64,
}

impl IchimokuIndicator {
    pub fn is_above_cloud(&self, price: f64) -> bool {
        price > self.span_a && price > self.span_b
    }

    pub fn is_below_cloud(&self, price: f64) -> bool {
        price < self.span_a && price < self.span_b
    }

    /// Conversion line moved from at-or-below the base line to above it on the latest bar.
    pub fn crossed_above(&self) -> bool {
        self.prev_conversion <= self.prev_base && self.conversion > self.base
    }

    /// Conversion line moved from at-or-above the base line to below it on the latest bar.
    pub fn crossed_below(&self) -> bool {
        self.prev_conversion >= self.prev_base && self.conversion < self.base
    }
}
