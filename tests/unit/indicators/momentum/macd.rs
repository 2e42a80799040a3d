//! Unit tests for MACD indicator

use tradekit::indicators::momentum::{calculate_macd, macd_min_bars, macd_series};
use tradekit::indicators::IndicatorError;

use crate::test_utils::{assert_close, flat_candles, linear_candles};

#[test]
fn test_macd_min_bars() {
    assert_eq!(macd_min_bars(26, 9), 34);
}

#[test]
fn test_macd_insufficient_data() {
    let candles = linear_candles(33, 100.0, 1.0);
    assert_eq!(
        calculate_macd(&candles, 12, 26, 9).unwrap_err(),
        IndicatorError::InsufficientData {
            indicator: "MACD",
            required: 34,
            available: 33,
        }
    );
}

#[test]
fn test_macd_exactly_enough_data() {
    let candles = linear_candles(34, 100.0, 1.0);
    let macd = calculate_macd(&candles, 12, 26, 9).unwrap();
    assert_eq!(macd.period, (12, 26, 9));
    assert_close(macd.histogram, macd.macd - macd.signal);
}

#[test]
fn test_macd_fast_must_be_shorter_than_slow() {
    let candles = linear_candles(60, 100.0, 1.0);
    assert!(matches!(
        calculate_macd(&candles, 26, 12, 9),
        Err(IndicatorError::InvalidParameter { .. })
    ));
    assert!(matches!(
        calculate_macd(&candles, 12, 12, 9),
        Err(IndicatorError::InvalidParameter { .. })
    ));
    assert!(matches!(
        calculate_macd(&candles, 12, 26, 0),
        Err(IndicatorError::InvalidParameter { .. })
    ));
}

#[test]
fn test_macd_series_alignment() {
    let candles = linear_candles(50, 100.0, 1.0);
    let series = macd_series(&candles, 12, 26, 9).unwrap();
    assert_eq!(series.macd.first_defined(), Some(25));
    assert_eq!(series.signal.first_defined(), Some(33));
    assert_eq!(series.histogram.first_defined(), Some(33));
}

#[test]
fn test_macd_flat_prices_are_zero() {
    let macd = calculate_macd(&flat_candles(40, 250.0), 12, 26, 9).unwrap();
    assert_eq!(macd.macd, 0.0);
    assert_eq!(macd.signal, 0.0);
    assert_eq!(macd.histogram, 0.0);
}

#[test]
fn test_macd_uptrend_is_positive() {
    let macd = calculate_macd(&linear_candles(60, 100.0, 1.0), 12, 26, 9).unwrap();
    assert!(macd.macd > 0.0);
    assert!(macd.macd > macd.signal);
}

#[test]
fn test_macd_huge_signal_period_is_insufficient_data() {
    assert_eq!(macd_min_bars(26, usize::MAX), usize::MAX - 1);
    assert!(matches!(
        calculate_macd(&linear_candles(60, 100.0, 1.0), 12, 26, usize::MAX),
        Err(IndicatorError::InsufficientData { available: 60, .. })
    ));
}
