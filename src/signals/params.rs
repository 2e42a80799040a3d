//! Indicator parameters with the defaults the tools use.

use serde::{Deserialize, Serialize};

use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::RSI_DEFAULT_PERIOD;
use crate::indicators::volatility::ATR_DEFAULT_PERIOD;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiParams {
    pub period: usize,
    /// RSI strictly above this is SHORT.
    pub overbought: f64,
    /// RSI strictly below this is LONG.
    pub oversold: f64,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self {
            period: RSI_DEFAULT_PERIOD,
            overbought: 80.0,
            oversold: 20.0,
        }
    }
}

impl RsiParams {
    pub fn validate(&self) -> Result<(), IndicatorError> {
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(self.overbought) || !in_range(self.oversold) {
            return Err(IndicatorError::invalid(
                "RSI",
                "thresholds must lie within 0..=100",
            ));
        }
        if self.oversold >= self.overbought {
            return Err(IndicatorError::invalid(
                "RSI",
                format!(
                    "oversold threshold ({}) must be below overbought threshold ({})",
                    self.oversold, self.overbought
                ),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdParams {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerParams {
    pub period: usize,
    pub std_dev: f64,
}

impl Default for BollingerParams {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IchimokuParams {
    /// window1, Tenkan-sen
    pub conversion: usize,
    /// window2, Kijun-sen
    pub base: usize,
    /// window3, Senkou span B
    pub span_b: usize,
    /// Forward shift of both leading spans.
    pub displacement: usize,
    pub atr_period: usize,
}

impl IchimokuParams {
    /// Windows with the displacement tied to the base window.
    pub fn new(conversion: usize, base: usize, span_b: usize) -> Self {
        Self {
            conversion,
            base,
            span_b,
            displacement: base,
            atr_period: ATR_DEFAULT_PERIOD,
        }
    }

    pub fn with_displacement(mut self, displacement: usize) -> Self {
        self.displacement = displacement;
        self
    }
}

impl Default for IchimokuParams {
    fn default() -> Self {
        Self::new(9, 18, 24)
    }
}
