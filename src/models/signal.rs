use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional label for one indicator family at the latest bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Long,
    Short,
    Neutral,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Long => "LONG",
            Signal::Short => "SHORT",
            Signal::Neutral => "NEUTRAL",
        }
    }

    pub fn is_directional(&self) -> bool {
        !matches!(self, Signal::Neutral)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exit levels derived from the latest close and ATR.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeLevels {
    pub target: f64,
    pub stop_loss: f64,
}

impl TradeLevels {
    /// Distance of the target from `reference`, in percent.
    pub fn target_pct(&self, reference: f64) -> f64 {
        (self.target - reference) / reference * 100.0
    }

    /// Distance of the stop-loss from `reference`, in percent.
    pub fn stop_loss_pct(&self, reference: f64) -> f64 {
        (self.stop_loss - reference) / reference * 100.0
    }
}
