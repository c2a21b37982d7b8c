//! decision.rs — response shapes: trigger category, trigger, and the full analysis result.

use serde::{Deserialize, Serialize};

/// Discrete trading-style signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerType {
    BuyOptimism,
    SellCaution,
    HoldAmbiguity,
    Neutral,
}

impl TriggerType {
    /// Wire name, also used as a metrics label.
    pub fn as_str(self) -> &'static str {
        match self {
            TriggerType::BuyOptimism => "BUY_OPTIMISM",
            TriggerType::SellCaution => "SELL_CAUTION",
            TriggerType::HoldAmbiguity => "HOLD_AMBIGUITY",
            TriggerType::Neutral => "NEUTRAL",
        }
    }

    /// Fixed human-readable message per type.
    pub fn message(self) -> &'static str {
        match self {
            TriggerType::BuyOptimism => {
                "BULLISH DECOHERENCE. Strong and unambiguous positive trend."
            }
            TriggerType::SellCaution => "BEARISH DECOHERENCE. Initiate hedge/sell protocol.",
            TriggerType::HoldAmbiguity => {
                "CRITICAL_STATE: SUPERPOSITION DETECTED. High volatility likely. HOLD/WAIT FOR RESOLUTION."
            }
            TriggerType::Neutral => "NEUTRAL STATE. Low momentum, low conflict.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    #[serde(rename = "type")]
    pub kind: TriggerType,
    pub message: String,
    /// In [0,1].
    pub strength: f64,
}

impl Trigger {
    pub fn new(kind: TriggerType, strength: f64) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
            strength,
        }
    }
}

/// What `/analyze` returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub positive_membership: f64,
    pub negative_membership: f64,
    pub trigger: Trigger,
}
