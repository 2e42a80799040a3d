//! ATR (Average True Range) indicator

use crate::common::math;
use crate::indicators::error::{require_bars, require_window, IndicatorError};
use crate::models::candle::Candle;
use crate::models::indicators::AtrIndicator;
use crate::models::series::IndicatorSeries;

pub const ATR_DEFAULT_PERIOD: usize = 14;

/// ATR for every bar.
///
/// The first bar's true range is its own high - low. The average is seeded
/// with the mean of the first `period` true ranges and then follows Wilder's
/// smoothing, so the first value sits at index `period - 1`.
pub fn atr_series(candles: &[Candle], period: usize) -> Result<IndicatorSeries, IndicatorError> {
    require_window("ATR", "period", period)?;
    require_bars("ATR", period, candles.len())?;

    let true_ranges: Vec<f64> = candles
        .iter()
        .enumerate()
        .map(|(i, candle)| {
            let prev_close = i.checked_sub(1).map(|prev| candles[prev].close);
            math::true_range(candle.high, candle.low, prev_close)
        })
        .collect();

    Ok(math::wilder_average(&true_ranges, period).into())
}

/// ATR at the latest bar.
pub fn calculate_atr(candles: &[Candle], period: usize) -> Result<AtrIndicator, IndicatorError> {
    let value = atr_series(candles, period)?
        .latest()
        .ok_or(IndicatorError::InsufficientData {
            indicator: "ATR",
            required: period,
            available: candles.len(),
        })?;

    Ok(AtrIndicator { value, period })
}
