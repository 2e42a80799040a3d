//! Rolling and exponential window functions over price series.
//!
//! Every function returns one entry per input value. Entries are `None` until
//! the window is filled, so index `i` of the output always lines up with
//! index `i` of the input.

/// Exponentially weighted mean with a fixed smoothing factor.
///
/// The first present value seeds the average; later values are folded in as
/// `prev + alpha * (x - prev)`. Output stays `None` until `min_periods` present
/// values have been observed. Missing inputs after seeding repeat the current
/// average without updating it.
pub fn ewm(values: &[Option<f64>], alpha: f64, min_periods: usize) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(values.len());
    let mut state: Option<f64> = None;
    let mut observed = 0usize;

    for value in values {
        if let Some(x) = value {
            observed += 1;
            state = Some(match state {
                Some(prev) => prev + alpha * (x - prev),
                None => *x,
            });
        }

        out.push(match state {
            Some(avg) if observed >= min_periods => Some(avg),
            _ => None,
        });
    }

    out
}

/// Exponential moving average with `alpha = 2 / (period + 1)`.
pub fn ema(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let present: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
    ema_of(&present, period)
}

/// Exponential moving average over a series that may have a ragged start.
pub fn ema_of(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    ewm(values, 2.0 / (period as f64 + 1.0), period)
}

/// Simple moving average of the trailing `period` values.
pub fn rolling_mean(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling(values, period, |window| {
        window.iter().sum::<f64>() / window.len() as f64
    })
}

/// Population (ddof = 0) standard deviation of the trailing `period` values.
pub fn rolling_std(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling(values, period, |window| {
        let n = window.len() as f64;
        let mean = window.iter().sum::<f64>() / n;
        let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        variance.sqrt()
    })
}

/// Highest value of the trailing `period` values.
pub fn rolling_max(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling(values, period, |window| {
        window.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })
}

/// Lowest value of the trailing `period` values.
pub fn rolling_min(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling(values, period, |window| {
        window.iter().copied().fold(f64::INFINITY, f64::min)
    })
}

fn rolling<F>(values: &[f64], period: usize, reduce: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> f64,
{
    if period == 0 {
        return vec![None; values.len()];
    }

    (0..values.len())
        .map(|i| {
            if i + 1 < period {
                None
            } else {
                Some(reduce(&values[i + 1 - period..=i]))
            }
        })
        .collect()
}

/// Wilder's smoothed average: seeded with the mean of the first `period`
/// values, then `(prev * (period - 1) + x) / period`.
pub fn wilder_average(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    let p = period as f64;
    let mut avg = values[..period].iter().sum::<f64>() / p;
    out[period - 1] = Some(avg);

    for i in period..values.len() {
        avg = (avg * (p - 1.0) + values[i]) / p;
        out[i] = Some(avg);
    }

    out
}

/// True range of one bar. Without a previous close it is the bar's own range.
pub fn true_range(high: f64, low: f64, prev_close: Option<f64>) -> f64 {
    let range = high - low;
    match prev_close {
        Some(prev) => range.max((high - prev).abs()).max((low - prev).abs()),
        None => range,
    }
}

/// Shift a series forward by `periods`, padding the front with `None`.
pub fn shift_forward(values: &[Option<f64>], periods: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| if i >= periods { values[i - periods] } else { None })
        .collect()
}
