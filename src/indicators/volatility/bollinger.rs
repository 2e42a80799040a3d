//! Bollinger Bands indicator

use crate::common::math;
use crate::indicators::error::{require_bars, require_window, IndicatorError};
use crate::models::candle::{closes, Candle};
use crate::models::indicators::BollingerBandsIndicator;
use crate::models::series::IndicatorSeries;

#[derive(Debug, Clone, PartialEq)]
pub struct BollingerSeries {
    pub upper: IndicatorSeries,
    pub middle: IndicatorSeries,
    pub lower: IndicatorSeries,
}

/// Calculate Bollinger Bands for every bar
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
///
/// The standard deviation is the population one over the same window.
pub fn bollinger_series(
    candles: &[Candle],
    period: usize,
    std_dev: f64,
) -> Result<BollingerSeries, IndicatorError> {
    require_window("Bollinger Bands", "period", period)?;
    if !std_dev.is_finite() || std_dev <= 0.0 {
        return Err(IndicatorError::invalid(
            "Bollinger Bands",
            format!("deviation multiplier must be positive, got {}", std_dev),
        ));
    }
    require_bars("Bollinger Bands", period, candles.len())?;

    let closes = closes(candles);
    let middle = math::rolling_mean(&closes, period);
    let deviation = math::rolling_std(&closes, period);

    let band = |sign: f64| -> Vec<Option<f64>> {
        middle
            .iter()
            .zip(&deviation)
            .map(|(m, d)| Some((*m)? + sign * std_dev * (*d)?))
            .collect()
    };

    Ok(BollingerSeries {
        upper: band(1.0).into(),
        lower: band(-1.0).into(),
        middle: middle.into(),
    })
}

/// Bollinger Bands at the latest bar.
pub fn calculate_bollinger_bands(
    candles: &[Candle],
    period: usize,
    std_dev: f64,
) -> Result<BollingerBandsIndicator, IndicatorError> {
    let series = bollinger_series(candles, period, std_dev)?;
    let insufficient = || IndicatorError::InsufficientData {
        indicator: "Bollinger Bands",
        required: period,
        available: candles.len(),
    };

    Ok(BollingerBandsIndicator {
        upper: series.upper.latest().ok_or_else(insufficient)?,
        middle: series.middle.latest().ok_or_else(insufficient)?,
        lower: series.lower.latest().ok_or_else(insufficient)?,
        period,
        std_dev,
    })
}
