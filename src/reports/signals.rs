use std::fmt::Write;

use crate::signals::{Analysis, IchimokuEvaluation};

/// Latest bar with its indicator columns, followed by one label per family.
pub fn render_analysis(analysis: &Analysis) -> String {
    let candle = &analysis.candle;
    let rows = [
        ("timestamp", candle.timestamp.to_rfc3339()),
        ("open", candle.open.to_string()),
        ("high", candle.high.to_string()),
        ("low", candle.low.to_string()),
        ("close", candle.close.to_string()),
        ("volume", candle.volume.to_string()),
        ("rsi", analysis.rsi.value.to_string()),
        ("macd", analysis.macd.macd.to_string()),
        ("macd_signal", analysis.macd.signal.to_string()),
        ("macd_diff", analysis.macd.histogram.to_string()),
        ("bb_high", analysis.bollinger.upper.to_string()),
        ("bb_low", analysis.bollinger.lower.to_string()),
        ("bb_middle", analysis.bollinger.middle.to_string()),
    ];

    let mut out = String::from("Latest Data:\n");
    for (name, value) in rows.iter() {
        let _ = writeln!(out, "{:<12} {}", name, value);
    }

    out.push_str("\nSignals:\n");
    let _ = writeln!(out, "RSI: {}", analysis.signals.rsi);
    let _ = writeln!(out, "MACD: {}", analysis.signals.macd);
    let _ = writeln!(out, "Bollinger Bands: {}", analysis.signals.bollinger);
    out
}

/// Close, ATR, the signal and (for LONG/SHORT) target and stop-loss with
/// their distance from the close.
pub fn render_ichimoku(pair: &str, interval: &str, evaluation: &IchimokuEvaluation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Latest close price: {}", evaluation.close);
    let _ = writeln!(out, "Latest ATR: {}", evaluation.atr);
    let _ = writeln!(
        out,
        "Trading Signal for {} on {} timeframe: {}",
        pair, interval, evaluation.signal
    );

    if let Some(levels) = evaluation.levels {
        let _ = writeln!(
            out,
            "Target: {:.8} ({:.2}%)",
            levels.target,
            levels.target_pct(evaluation.close)
        );
        let _ = writeln!(
            out,
            "Stop Loss: {:.8} ({:.2}%)",
            levels.stop_loss,
            levels.stop_loss_pct(evaluation.close)
        );
    }
    out
}
