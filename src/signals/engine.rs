//! Combined RSI / MACD / Bollinger evaluation for the `analyze` tool.

use serde::Serialize;

use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::volatility::calculate_bollinger_bands;
use crate::models::candle::Candle;
use crate::models::indicators::{BollingerBandsIndicator, MacdIndicator, RsiIndicator};
use crate::models::signal::Signal;
use crate::signals::evaluator::{classify_bollinger, classify_macd, classify_rsi};
use crate::signals::params::{BollingerParams, MacdParams, RsiParams};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AnalysisParams {
    pub rsi: RsiParams,
    pub macd: MacdParams,
    pub bollinger: BollingerParams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisSignals {
    pub rsi: Signal,
    pub macd: Signal,
    pub bollinger: Signal,
}

/// Latest bar, its indicator values and the label of each family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub candle: Candle,
    pub rsi: RsiIndicator,
    pub macd: MacdIndicator,
    pub bollinger: BollingerBandsIndicator,
    pub signals: AnalysisSignals,
}

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate every family on the same candles. Fails on the first family
    /// whose parameters are invalid or whose window the candles cannot fill.
    pub fn analyze(candles: &[Candle], params: &AnalysisParams) -> Result<Analysis, IndicatorError> {
        params.rsi.validate()?;
        let rsi = calculate_rsi(candles, params.rsi.period)?;
        let macd = calculate_macd(
            candles,
            params.macd.fast,
            params.macd.slow,
            params.macd.signal,
        )?;
        let bollinger =
            calculate_bollinger_bands(candles, params.bollinger.period, params.bollinger.std_dev)?;

        let candle = *candles.last().ok_or(IndicatorError::InsufficientData {
            indicator: "price",
            required: 1,
            available: 0,
        })?;

        Ok(Analysis {
            candle,
            rsi,
            macd,
            bollinger,
            signals: AnalysisSignals {
                rsi: classify_rsi(rsi.value, &params.rsi),
                macd: classify_macd(&macd),
                bollinger: classify_bollinger(candle.close, &bollinger),
            },
        })
    }
}
