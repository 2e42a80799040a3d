//! Unit tests for EMA indicator

use tradekit::indicators::trend::{calculate_ema, ema_series};
use tradekit::indicators::IndicatorError;

use crate::test_utils::{assert_close, candles_from_closes, flat_candles, linear_candles};

#[test]
fn test_ema_insufficient_data() {
    let candles = linear_candles(10, 100.0, 0.1);
    assert!(matches!(
        calculate_ema(&candles, 20),
        Err(IndicatorError::InsufficientData {
            required: 20,
            available: 10,
            ..
        })
    ));
}

#[test]
fn test_ema_sufficient_data() {
    let candles = linear_candles(50, 100.0, 0.1);
    let ema = calculate_ema(&candles, 12).unwrap();
    assert!(ema.is_finite());
    assert!(ema < candles.last().unwrap().close);
}

#[test]
fn test_ema_defined_from_period_minus_one() {
    let series = ema_series(&linear_candles(20, 100.0, 1.0), 5).unwrap();
    assert_eq!(series.first_defined(), Some(4));
}

#[test]
fn test_ema_seeded_from_first_close() {
    // alpha = 2 / (3 + 1) = 0.5: 10 -> 15 -> 17.5
    let candles = candles_from_closes(&[10.0, 20.0, 20.0]);
    assert_close(calculate_ema(&candles, 3).unwrap(), 17.5);
}

#[test]
fn test_ema_of_flat_prices() {
    assert_eq!(calculate_ema(&flat_candles(30, 7.25), 10).unwrap(), 7.25);
}
