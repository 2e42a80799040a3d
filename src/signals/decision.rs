//! Exit levels for directional signals.

use crate::models::signal::{Signal, TradeLevels};

/// Target multiple of ATR away from the close.
pub const TARGET_ATR_MULTIPLE: f64 = 2.0;
/// Stop-loss multiple of ATR away from the close.
pub const STOP_ATR_MULTIPLE: f64 = 1.0;

/// Target and stop-loss around `close` for a directional signal.
///
/// LONG: target above, stop below. SHORT: mirrored. NEUTRAL: no levels.
pub fn compute_trade_levels(signal: Signal, close: f64, atr: f64) -> Option<TradeLevels> {
    match signal {
        Signal::Long => Some(TradeLevels {
            target: close + TARGET_ATR_MULTIPLE * atr,
            stop_loss: close - STOP_ATR_MULTIPLE * atr,
        }),
        Signal::Short => Some(TradeLevels {
            target: close - TARGET_ATR_MULTIPLE * atr,
            stop_loss: close + STOP_ATR_MULTIPLE * atr,
        }),
        Signal::Neutral => None,
    }
}
