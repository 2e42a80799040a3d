//! Unit tests for Ichimoku Cloud indicator

use tradekit::indicators::trend::{calculate_ichimoku, ichimoku_min_bars, ichimoku_series};
use tradekit::indicators::IndicatorError;

use crate::test_utils::{bar, flat_candles};

#[test]
fn test_ichimoku_min_bars() {
    // Displaced cloud dominates
    assert_eq!(ichimoku_min_bars(9, 18, 24, 18), 42);
    // Without displacement the crossover lookback needs one extra bar
    assert_eq!(ichimoku_min_bars(9, 18, 24, 0), 25);
}

#[test]
fn test_ichimoku_insufficient_data() {
    let candles = flat_candles(41, 100.0);
    assert_eq!(
        calculate_ichimoku(&candles, 9, 18, 24, 18).unwrap_err(),
        IndicatorError::InsufficientData {
            indicator: "Ichimoku",
            required: 42,
            available: 41,
        }
    );
    assert!(calculate_ichimoku(&flat_candles(42, 100.0), 9, 18, 24, 18).is_ok());
}

#[test]
fn test_ichimoku_zero_window_is_invalid() {
    assert!(matches!(
        calculate_ichimoku(&flat_candles(60, 100.0), 0, 18, 24, 18),
        Err(IndicatorError::InvalidParameter { .. })
    ));
}

#[test]
fn test_ichimoku_midpoints() {
    let candles = vec![
        bar(0, 10.0, 8.0, 9.0),
        bar(1, 12.0, 9.0, 11.0),
        bar(2, 11.0, 6.0, 7.0),
        bar(3, 9.0, 7.0, 8.0),
    ];
    let series = ichimoku_series(&candles, 2, 3, 3, 0).unwrap();

    // Conversion at bar 3: (max(11, 9) + min(6, 7)) / 2
    assert_eq!(series.conversion.latest(), Some(8.5));
    // Base at bar 3: (max(12, 11, 9) + min(9, 6, 7)) / 2
    assert_eq!(series.base.latest(), Some(9.0));
    assert_eq!(series.span_a.latest(), Some(8.75));
    assert_eq!(series.span_b.latest(), Some(9.0));
}

#[test]
fn test_ichimoku_spans_are_displaced() {
    let mut candles = flat_candles(10, 100.0);
    candles.push(bar(10, 130.0, 120.0, 125.0));

    let shifted = ichimoku_series(&candles, 2, 3, 4, 3).unwrap();
    let unshifted = ichimoku_series(&candles, 2, 3, 4, 0).unwrap();

    // The jump on the last bar has not reached the displaced cloud yet
    assert_eq!(shifted.span_a.latest(), Some(100.0));
    assert_eq!(shifted.span_b.latest(), Some(100.0));
    assert!(unshifted.span_a.latest().unwrap() > 100.0);
    assert_eq!(shifted.span_a.get(7), unshifted.span_a.get(4));
}

#[test]
fn test_ichimoku_huge_displacement_is_insufficient_data() {
    assert_eq!(ichimoku_min_bars(9, 18, 24, usize::MAX), usize::MAX);
    assert!(matches!(
        calculate_ichimoku(&flat_candles(60, 100.0), 9, 18, 24, usize::MAX),
        Err(IndicatorError::InsufficientData {
            required: usize::MAX,
            available: 60,
            ..
        })
    ));
}
