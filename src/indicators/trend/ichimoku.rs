//! Ichimoku Cloud indicator

use crate::common::math;
use crate::indicators::error::{require_bars, require_window, IndicatorError};
use crate::models::candle::{highs, lows, Candle};
use crate::models::indicators::IchimokuIndicator;
use crate::models::series::IndicatorSeries;

/// Ichimoku lines for every bar. Both leading spans are already shifted
/// forward, so index `i` holds the cloud that sits over candle `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct IchimokuSeries {
    pub conversion: IndicatorSeries,
    pub base: IndicatorSeries,
    pub span_a: IndicatorSeries,
    pub span_b: IndicatorSeries,
}

/// Bars needed for the displaced cloud and a one-bar crossover lookback.
pub fn ichimoku_min_bars(
    conversion_period: usize,
    base_period: usize,
    span_b_period: usize,
    displacement: usize,
) -> usize {
    let longest = conversion_period.max(base_period).max(span_b_period);
    displacement
        .saturating_add(longest)
        .max(longest.saturating_add(1))
}

/// Calculate the Ichimoku lines
///
/// Conversion (Tenkan-sen) = midpoint of high/low over `conversion_period`
/// Base (Kijun-sen) = midpoint of high/low over `base_period`
/// Span A = (Conversion + Base) / 2, shifted forward by `displacement`
/// Span B = midpoint of high/low over `span_b_period`, shifted forward by `displacement`
pub fn ichimoku_series(
    candles: &[Candle],
    conversion_period: usize,
    base_period: usize,
    span_b_period: usize,
    displacement: usize,
) -> Result<IchimokuSeries, IndicatorError> {
    require_window("Ichimoku", "conversion period", conversion_period)?;
    require_window("Ichimoku", "base period", base_period)?;
    require_window("Ichimoku", "span B period", span_b_period)?;
    require_bars(
        "Ichimoku",
        ichimoku_min_bars(conversion_period, base_period, span_b_period, displacement),
        candles.len(),
    )?;

    let highs = highs(candles);
    let lows = lows(candles);

    let conversion = midpoint(&highs, &lows, conversion_period);
    let base = midpoint(&highs, &lows, base_period);
    let span_a: Vec<Option<f64>> = conversion
        .iter()
        .zip(&base)
        .map(|(c, b)| Some(((*c)? + (*b)?) / 2.0))
        .collect();
    let span_b = midpoint(&highs, &lows, span_b_period);

    Ok(IchimokuSeries {
        span_a: math::shift_forward(&span_a, displacement).into(),
        span_b: math::shift_forward(&span_b, displacement).into(),
        conversion: conversion.into(),
        base: base.into(),
    })
}

/// Ichimoku lines at the latest bar and the bar before it.
pub fn calculate_ichimoku(
    candles: &[Candle],
    conversion_period: usize,
    base_period: usize,
    span_b_period: usize,
    displacement: usize,
) -> Result<IchimokuIndicator, IndicatorError> {
    let series = ichimoku_series(
        candles,
        conversion_period,
        base_period,
        span_b_period,
        displacement,
    )?;
    let insufficient = || IndicatorError::InsufficientData {
        indicator: "Ichimoku",
        required: ichimoku_min_bars(conversion_period, base_period, span_b_period, displacement),
        available: candles.len(),
    };

    Ok(IchimokuIndicator {
        conversion: series.conversion.latest().ok_or_else(insufficient)?,
        base: series.base.latest().ok_or_else(insufficient)?,
        span_a: series.span_a.latest().ok_or_else(insufficient)?,
        span_b: series.span_b.latest().ok_or_else(insufficient)?,
        prev_conversion: series.conversion.previous().ok_or_else(insufficient)?,
        prev_base: series.base.previous().ok_or_else(insufficient)?,
    })
}

fn midpoint(highs: &[f64], lows: &[f64], period: usize) -> Vec<Option<f64>> {
    math::rolling_max(highs, period)
        .into_iter()
        .zip(math::rolling_min(lows, period))
        .map(|(high, low)| Some((high? + low?) / 2.0))
        .collect()
}
