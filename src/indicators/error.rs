use thiserror::Error;

/// Failures of the pure indicator and signal functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// Fewer bars than the indicator's window needs. Fetch more history and retry.
    #[error("{indicator} needs at least {required} bars, got {available}")]
    InsufficientData {
        indicator: &'static str,
        required: usize,
        available: usize,
    },

    /// A window length, multiplier or threshold that can never produce a value.
    #[error("invalid {indicator} parameter: {reason}")]
    InvalidParameter {
        indicator: &'static str,
        reason: String,
    },
}

impl IndicatorError {
    pub fn invalid(indicator: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            indicator,
            reason: reason.into(),
        }
    }
}

/// Reject zero-length windows.
pub(crate) fn require_window(
    indicator: &'static str,
    name: &str,
    period: usize,
) -> Result<(), IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::invalid(
            indicator,
            format!("{} must be greater than 0", name),
        ));
    }
    Ok(())
}

/// Reject sequences shorter than `required`.
pub(crate) fn require_bars(
    indicator: &'static str,
    required: usize,
    available: usize,
) -> Result<(), IndicatorError> {
    if available < required {
        return Err(IndicatorError::InsufficientData {
            indicator,
            required,
            available,
        });
    }
    Ok(())
}
