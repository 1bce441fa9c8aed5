//! Recommendation domain — Buy/Sell/Hold signal plus explanation.

pub mod client;
pub mod wire;

use crate::shared::{Ticker, Tone};
use serde::{Deserialize, Serialize};

/// Shown when the backend sends no explanation.
pub const NO_EXPLANATION: &str = "No explanation provided.";

// ─── Signal ──────────────────────────────────────────────────────────────────

/// The model's call for a ticker.
///
/// Anything the backend sends that is not one of the three labels is kept
/// verbatim so it can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
    Other(String),
}

impl Signal {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Buy" => Signal::Buy,
            "Sell" => Signal::Sell,
            "Hold" => Signal::Hold,
            other => Signal::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Signal::Buy => "Buy",
            Signal::Sell => "Sell",
            Signal::Hold => "Hold",
            Signal::Other(s) => s,
        }
    }

    /// Buy is green, Sell is red, everything else yellow.
    pub fn tone(&self) -> Tone {
        match self {
            Signal::Buy => Tone::Green,
            Signal::Sell => Tone::Red,
            _ => Tone::Yellow,
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ─── Recommendation ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub ticker: Ticker,
    /// `None` when the backend returned no label at all.
    pub signal: Option<Signal>,
    pub explanation: String,
}

impl Recommendation {
    /// Build from the wire body. `requested` is used when the reply omits the ticker.
    pub fn from_wire(requested: &Ticker, resp: wire::RecommendResponse) -> Self {
        let signal = resp
            .recommendation
            .as_deref()
            .filter(|label| !label.is_empty())
            .map(Signal::from_label);
        let explanation = resp
            .explanation
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| NO_EXPLANATION.to_string());

        Self {
            ticker: resp
                .ticker
                .map(Ticker::from)
                .unwrap_or_else(|| requested.normalized()),
            signal,
            explanation,
        }
    }

    pub fn tone(&self) -> Tone {
        self.signal.as_ref().map(Signal::tone).unwrap_or(Tone::Yellow)
    }
}
