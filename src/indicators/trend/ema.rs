//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::indicators::error::{require_bars, require_window, IndicatorError};
use crate::models::candle::{closes, Candle};
use crate::models::series::IndicatorSeries;

/// EMA of closes for every bar, seeded from the first close and defined from
/// index `period - 1` onwards.
pub fn ema_series(candles: &[Candle], period: usize) -> Result<IndicatorSeries, IndicatorError> {
    require_window("EMA", "period", period)?;
    require_bars("EMA", period, candles.len())?;

    Ok(math::ema(&closes(candles), period).into())
}

/// EMA at the latest bar.
pub fn calculate_ema(candles: &[Candle], period: usize) -> Result<f64, IndicatorError> {
    ema_series(candles, period)?
        .latest()
        .ok_or(IndicatorError::InsufficientData {
            indicator: "EMA",
            required: period,
            available: candles.len(),
        })
}
