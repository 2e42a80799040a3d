//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::indicators::error::{require_bars, require_window, IndicatorError};
use crate::models::candle::{closes, Candle};
use crate::models::indicators::RsiIndicator;
use crate::models::series::IndicatorSeries;

pub const RSI_DEFAULT_PERIOD: usize = 7;

/// RSI for every bar.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Gains and losses are smoothed with Wilder's factor `1 / period`, seeded from
/// the first price change. The first value appears once `period` changes have
/// been seen, i.e. at index `period`. A zero average loss yields 100.
pub fn rsi_series(candles: &[Candle], period: usize) -> Result<IndicatorSeries, IndicatorError> {
    require_window("RSI", "period", period)?;
    require_bars("RSI", period.saturating_add(1), candles.len())?;

    let closes = closes(candles);
    let mut gains = Vec::with_capacity(closes.len());
    let mut losses = Vec::with_capacity(closes.len());
    gains.push(None);
    losses.push(None);

    for pair in closes.windows(2) {
        let change = pair[1] - pair[0];
        gains.push(Some(change.max(0.0)));
        losses.push(Some((-change).max(0.0)));
    }

    let alpha = 1.0 / period as f64;
    let avg_gains = math::ewm(&gains, alpha, period);
    let avg_losses = math::ewm(&losses, alpha, period);

    let values = avg_gains
        .iter()
        .zip(&avg_losses)
        .map(|(gain, loss)| match (gain, loss) {
            (Some(_), Some(loss)) if *loss == 0.0 => Some(100.0),
            (Some(gain), Some(loss)) => Some(100.0 - 100.0 / (1.0 + gain / loss)),
            _ => None,
        })
        .collect();

    Ok(IndicatorSeries::new(values))
}

/// RSI at the latest bar.
pub fn calculate_rsi(candles: &[Candle], period: usize) -> Result<RsiIndicator, IndicatorError> {
    let series = rsi_series(candles, period)?;
    let value = series
        .latest()
        .ok_or(IndicatorError::InsufficientData {
            indicator: "RSI",
            required: period.saturating_add(1),
            available: candles.len(),
        })?;

    Ok(RsiIndicator { value, period })
}
