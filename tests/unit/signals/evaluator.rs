//! Unit tests for the per-family signal rules

use tradekit::indicators::IndicatorError;
use tradekit::models::{Candle, IchimokuIndicator, MacdIndicator, Signal};
use tradekit::signals::{
    classify_ichimoku, classify_macd, classify_rsi, evaluate_bollinger, evaluate_ichimoku,
    evaluate_macd, evaluate_rsi, BollingerParams, IchimokuParams, MacdParams, RsiParams,
};

use crate::test_utils::{assert_close, bar, candles_from_closes, flat_candles, linear_candles};

fn with_last_close(count: usize, close: f64, last: f64) -> Vec<Candle> {
    let mut closes = vec![close; count];
    closes.push(last);
    candles_from_closes(&closes)
}

/// 17 quiet bars around 100 followed by three bars that end the sequence.
fn ichimoku_scenario(tail: [(f64, f64, f64); 3]) -> Vec<Candle> {
    let mut candles: Vec<Candle> = (0..17).map(|i| bar(i, 101.0, 99.0, 100.0)).collect();
    for (offset, (high, low, close)) in tail.into_iter().enumerate() {
        candles.push(bar(17 + offset, high, low, close));
    }
    candles
}

fn small_ichimoku() -> IchimokuParams {
    IchimokuParams::new(2, 3, 4)
}

#[test]
fn test_rsi_overbought_is_short() {
    let candles = with_last_close(30, 100.0, 130.0);
    assert_eq!(evaluate_rsi(&candles, &RsiParams::default()).unwrap(), Signal::Short);
}

#[test]
fn test_rsi_oversold_is_long() {
    let candles = with_last_close(30, 100.0, 70.0);
    assert_eq!(evaluate_rsi(&candles, &RsiParams::default()).unwrap(), Signal::Long);
}

#[test]
fn test_rsi_thresholds_are_strict() {
    let params = RsiParams::default();
    assert_eq!(classify_rsi(80.0, &params), Signal::Neutral);
    assert_eq!(classify_rsi(20.0, &params), Signal::Neutral);
    assert_eq!(classify_rsi(80.01, &params), Signal::Short);
    assert_eq!(classify_rsi(19.99, &params), Signal::Long);
    assert_eq!(classify_rsi(50.0, &params), Signal::Neutral);
}

#[test]
fn test_rsi_needs_period_plus_one_bars() {
    let err = evaluate_rsi(&flat_candles(7, 100.0), &RsiParams::default()).unwrap_err();
    assert_eq!(
        err,
        IndicatorError::InsufficientData {
            indicator: "RSI",
            required: 8,
            available: 7,
        }
    );
}

#[test]
fn test_rsi_rejects_bad_parameters() {
    let candles = flat_candles(30, 100.0);
    let zero_period = RsiParams {
        period: 0,
        ..RsiParams::default()
    };
    let inverted = RsiParams {
        overbought: 20.0,
        oversold: 80.0,
        ..RsiParams::default()
    };
    for params in [zero_period, inverted] {
        assert!(matches!(
            evaluate_rsi(&candles, &params),
            Err(IndicatorError::InvalidParameter { .. })
        ));
    }
}

#[test]
fn test_macd_trend_signals() {
    let params = MacdParams::default();
    assert_eq!(
        evaluate_macd(&linear_candles(60, 100.0, 1.0), &params).unwrap(),
        Signal::Long
    );
    assert_eq!(
        evaluate_macd(&linear_candles(60, 200.0, -1.0), &params).unwrap(),
        Signal::Short
    );
}

#[test]
fn test_macd_equal_lines_are_neutral() {
    assert_eq!(
        evaluate_macd(&flat_candles(60, 100.0), &MacdParams::default()).unwrap(),
        Signal::Neutral
    );

    let equal = MacdIndicator {
        macd: 0.25,
        signal: 0.25,
        histogram: 0.0,
        period: (12, 26, 9),
    };
    assert_eq!(classify_macd(&equal), Signal::Neutral);
}

#[test]
fn test_macd_needs_slow_plus_signal_minus_one_bars() {
    let err = evaluate_macd(&linear_candles(33, 100.0, 1.0), &MacdParams::default()).unwrap_err();
    assert!(matches!(
        err,
        IndicatorError::InsufficientData { required: 34, .. }
    ));
}

#[test]
fn test_macd_rejects_fast_not_below_slow() {
    let params = MacdParams {
        fast: 26,
        slow: 26,
        signal: 9,
    };
    assert!(matches!(
        evaluate_macd(&linear_candles(60, 100.0, 1.0), &params),
        Err(IndicatorError::InvalidParameter { .. })
    ));
}

#[test]
fn test_bollinger_breakouts() {
    let params = BollingerParams::default();
    let mut closes: Vec<f64> = (0..29).map(|i| 100.0 + i as f64).collect();

    closes.push(200.0);
    assert_eq!(
        evaluate_bollinger(&candles_from_closes(&closes), &params).unwrap(),
        Signal::Short
    );

    *closes.last_mut().unwrap() = 50.0;
    assert_eq!(
        evaluate_bollinger(&candles_from_closes(&closes), &params).unwrap(),
        Signal::Long
    );
}

#[test]
fn test_bollinger_touching_band_is_neutral() {
    assert_eq!(
        evaluate_bollinger(&flat_candles(30, 100.0), &BollingerParams::default()).unwrap(),
        Signal::Neutral
    );
}

#[test]
fn test_bollinger_errors() {
    assert!(matches!(
        evaluate_bollinger(&flat_candles(19, 100.0), &BollingerParams::default()),
        Err(IndicatorError::InsufficientData { required: 20, .. })
    ));
    let params = BollingerParams {
        period: 20,
        std_dev: 0.0,
    };
    assert!(matches!(
        evaluate_bollinger(&flat_candles(30, 100.0), &params),
        Err(IndicatorError::InvalidParameter { .. })
    ));
}

#[test]
fn test_ichimoku_bullish_cross_above_cloud() {
    let candles = ichimoku_scenario([
        (100.0, 90.0, 92.0),
        (95.0, 91.0, 94.0),
        (120.0, 110.0, 118.0),
    ]);
    let evaluation = evaluate_ichimoku(&candles, &small_ichimoku()).unwrap();

    assert_eq!(evaluation.signal, Signal::Long);
    assert_eq!(evaluation.close, 118.0);
    assert_close(evaluation.atr, 2977.0 / 686.0);

    let levels = evaluation.levels.expect("LONG carries levels");
    assert_close(levels.target, 118.0 + 2.0 * evaluation.atr);
    assert_close(levels.stop_loss, 118.0 - evaluation.atr);
}

#[test]
fn test_ichimoku_bearish_cross_below_cloud() {
    let candles = ichimoku_scenario([
        (110.0, 100.0, 108.0),
        (109.0, 105.0, 106.0),
        (90.0, 80.0, 82.0),
    ]);
    let evaluation = evaluate_ichimoku(&candles, &small_ichimoku()).unwrap();

    assert_eq!(evaluation.signal, Signal::Short);
    let levels = evaluation.levels.expect("SHORT carries levels");
    assert_close(levels.target, 82.0 - 2.0 * evaluation.atr);
    assert_close(levels.stop_loss, 82.0 + evaluation.atr);
}

#[test]
fn test_ichimoku_flat_market_is_neutral() {
    let evaluation = evaluate_ichimoku(&flat_candles(60, 100.0), &IchimokuParams::default()).unwrap();
    assert_eq!(evaluation.signal, Signal::Neutral);
    assert!(evaluation.levels.is_none());
}

#[test]
fn test_ichimoku_cross_without_cloud_break_is_neutral() {
    let lines = IchimokuIndicator {
        conversion: 105.5,
        base: 105.0,
        span_a: 110.0,
        span_b: 100.0,
        prev_conversion: 95.0,
        prev_base: 95.5,
    };
    // Inside the cloud
    assert_eq!(classify_ichimoku(105.0, &lines), Signal::Neutral);
    // Above the cloud
    assert_eq!(classify_ichimoku(111.0, &lines), Signal::Long);
}

#[test]
fn test_ichimoku_atr_window_can_dominate() {
    let params = small_ichimoku();
    let err = evaluate_ichimoku(&flat_candles(10, 100.0), &params).unwrap_err();
    assert!(matches!(
        err,
        IndicatorError::InsufficientData {
            indicator: "ATR",
            required: 14,
            available: 10,
        }
    ));
}

#[test]
fn test_evaluation_is_deterministic() {
    let candles = ichimoku_scenario([
        (100.0, 90.0, 92.0),
        (95.0, 91.0, 94.0),
        (120.0, 110.0, 118.0),
    ]);
    let params = small_ichimoku();
    assert_eq!(
        evaluate_ichimoku(&candles, &params).unwrap(),
        evaluate_ichimoku(&candles, &params).unwrap()
    );
    assert_eq!(
        evaluate_rsi(&candles, &RsiParams::default()).unwrap(),
        evaluate_rsi(&candles, &RsiParams::default()).unwrap()
    );
}

#[test]
fn test_ichimoku_huge_displacement_is_insufficient_data() {
    let params = IchimokuParams::default().with_displacement(usize::MAX);
    assert!(matches!(
        evaluate_ichimoku(&flat_candles(60, 100.0), &params),
        Err(IndicatorError::InsufficientData {
            indicator: "Ichimoku",
            ..
        })
    ));
}
