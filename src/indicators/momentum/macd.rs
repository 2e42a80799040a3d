//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::indicators::error::{require_bars, require_window, IndicatorError};
use crate::indicators::trend::ema_series;
use crate::models::candle::Candle;
use crate::models::indicators::MacdIndicator;
use crate::models::series::IndicatorSeries;

/// MACD line, signal line and histogram for every bar.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: IndicatorSeries,
    pub signal: IndicatorSeries,
    pub histogram: IndicatorSeries,
}

/// Bars needed before the signal line has a value.
pub fn macd_min_bars(slow_period: usize, signal_period: usize) -> usize {
    slow_period.saturating_add(signal_period).saturating_sub(1)
}

/// Calculate the MACD series
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
pub fn macd_series(
    candles: &[Candle],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdSeries, IndicatorError> {
    require_window("MACD", "fast period", fast_period)?;
    require_window("MACD", "slow period", slow_period)?;
    require_window("MACD", "signal period", signal_period)?;
    if fast_period >= slow_period {
        return Err(IndicatorError::invalid(
            "MACD",
            format!(
                "fast period ({}) must be shorter than slow period ({})",
                fast_period, slow_period
            ),
        ));
    }
    require_bars("MACD", macd_min_bars(slow_period, signal_period), candles.len())?;

    let fast = ema_series(candles, fast_period)?;
    let slow = ema_series(candles, slow_period)?;

    let macd: Vec<Option<f64>> = fast
        .values()
        .iter()
        .zip(slow.values())
        .map(|(f, s)| Some((*f)? - (*s)?))
        .collect();
    let signal = math::ema_of(&macd, signal_period);
    let histogram = macd
        .iter()
        .zip(&signal)
        .map(|(m, s)| Some((*m)? - (*s)?))
        .collect();

    Ok(MacdSeries {
        macd: macd.into(),
        signal: signal.into(),
        histogram: IndicatorSeries::new(histogram),
    })
}

/// MACD at the latest bar.
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdIndicator, IndicatorError> {
    let series = macd_series(candles, fast_period, slow_period, signal_period)?;
    let insufficient = || IndicatorError::InsufficientData {
        indicator: "MACD",
        required: macd_min_bars(slow_period, signal_period),
        available: candles.len(),
    };

    Ok(MacdIndicator {
        macd: series.macd.latest().ok_or_else(insufficient)?,
        signal: series.signal.latest().ok_or_else(insufficient)?,
        histogram: series.histogram.latest().ok_or_else(insufficient)?,
        period: (fast_period, slow_period, signal_period),
    })
}
