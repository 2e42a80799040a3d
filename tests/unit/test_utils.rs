//! Candle builders shared by the unit tests.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use tradekit::models::Candle;

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Candle at hour `index` with an explicit range.
pub fn bar(index: usize, high: f64, low: f64, close: f64) -> Candle {
    Candle::new(
        close,
        high,
        low,
        close,
        1000.0,
        start_time() + Duration::hours(index as i64),
    )
}

/// Candles closing at `closes`, each with a range of 1 around the close.
pub fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, close)| bar(i, close + 0.5, close - 0.5, *close))
        .collect()
}

pub fn flat_candles(count: usize, close: f64) -> Vec<Candle> {
    candles_from_closes(&vec![close; count])
}

pub fn linear_candles(count: usize, start: f64, step: f64) -> Vec<Candle> {
    let closes: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
    candles_from_closes(&closes)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
