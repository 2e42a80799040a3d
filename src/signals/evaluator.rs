//! Signal rules for each indicator family.
//!
//! All functions are pure: the same candles and parameters always give the
//! same label. Only the latest bar is classified.

use serde::Serialize;

use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::trend::calculate_ichimoku;
use crate::indicators::volatility::{calculate_atr, calculate_bollinger_bands};
use crate::models::candle::Candle;
use crate::models::indicators::{BollingerBandsIndicator, IchimokuIndicator, MacdIndicator};
use crate::models::signal::{Signal, TradeLevels};
use crate::signals::decision::compute_trade_levels;
use crate::signals::params::{BollingerParams, IchimokuParams, MacdParams, RsiParams};

/// Outcome of the Ichimoku rule together with the values it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IchimokuEvaluation {
    pub signal: Signal,
    /// Present only for LONG and SHORT.
    pub levels: Option<TradeLevels>,
    pub close: f64,
    pub atr: f64,
    pub ichimoku: IchimokuIndicator,
}

/// Overbought above `overbought` is SHORT, oversold below `oversold` is LONG.
pub fn classify_rsi(rsi: f64, params: &RsiParams) -> Signal {
    if rsi > params.overbought {
        Signal::Short
    } else if rsi < params.oversold {
        Signal::Long
    } else {
        Signal::Neutral
    }
}

/// MACD above its signal line is LONG, below is SHORT. Exact equality is NEUTRAL.
pub fn classify_macd(macd: &MacdIndicator) -> Signal {
    if macd.macd > macd.signal {
        Signal::Long
    } else if macd.macd < macd.signal {
        Signal::Short
    } else {
        Signal::Neutral
    }
}

/// Close above the upper band is SHORT, below the lower band is LONG.
pub fn classify_bollinger(close: f64, bands: &BollingerBandsIndicator) -> Signal {
    if close > bands.upper {
        Signal::Short
    } else if close < bands.lower {
        Signal::Long
    } else {
        Signal::Neutral
    }
}

/// LONG when price is above the cloud and the conversion line just crossed
/// above the base line; SHORT for the mirrored case.
pub fn classify_ichimoku(close: f64, ichimoku: &IchimokuIndicator) -> Signal {
    if ichimoku.is_above_cloud(close) && ichimoku.crossed_above() {
        Signal::Long
    } else if ichimoku.is_below_cloud(close) && ichimoku.crossed_below() {
        Signal::Short
    } else {
        Signal::Neutral
    }
}

pub fn evaluate_rsi(candles: &[Candle], params: &RsiParams) -> Result<Signal, IndicatorError> {
    params.validate()?;
    let rsi = calculate_rsi(candles, params.period)?;
    Ok(classify_rsi(rsi.value, params))
}

pub fn evaluate_macd(candles: &[Candle], params: &MacdParams) -> Result<Signal, IndicatorError> {
    let macd = calculate_macd(candles, params.fast, params.slow, params.signal)?;
    Ok(classify_macd(&macd))
}

pub fn evaluate_bollinger(
    candles: &[Candle],
    params: &BollingerParams,
) -> Result<Signal, IndicatorError> {
    let bands = calculate_bollinger_bands(candles, params.period, params.std_dev)?;
    Ok(classify_bollinger(latest_close(candles)?, &bands))
}

pub fn evaluate_ichimoku(
    candles: &[Candle],
    params: &IchimokuParams,
) -> Result<IchimokuEvaluation, IndicatorError> {
    let ichimoku = calculate_ichimoku(
        candles,
        params.conversion,
        params.base,
        params.span_b,
        params.displacement,
    )?;
    let atr = calculate_atr(candles, params.atr_period)?.value;

    let close = latest_close(candles)?;
    let signal = classify_ichimoku(close, &ichimoku);

    Ok(IchimokuEvaluation {
        signal,
        levels: compute_trade_levels(signal, close, atr),
        close,
        atr,
        ichimoku,
    })
}

pub(crate) fn latest_close(candles: &[Candle]) -> Result<f64, IndicatorError> {
    candles
        .last()
        .map(|c| c.close)
        .ok_or(IndicatorError::InsufficientData {
            indicator: "price",
            required: 1,
            available: 0,
        })
}
