//! Quote domain — ticker-strip quotes and featured stocks.

pub mod client;
pub mod wire;

use crate::network::LOGO_BASE_URL;
use crate::shared::{fmt, Ticker, Tone};
use serde::{Deserialize, Serialize};

// ─── Quote ───────────────────────────────────────────────────────────────────

/// A symbol's latest price and change figures, as shown on the ticker strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: Ticker,
    pub price: f64,
    pub change: f64,
    /// Ratio, not percent: `0.012` is shown as `1.20%`.
    pub percent: f64,
    pub domain: Option<String>,
}

impl Quote {
    pub fn tone(&self) -> Tone {
        Tone::of_change(self.change)
    }

    /// Company logo URL, falling back to `<symbol>.com` when no domain is known.
    pub fn logo_url(&self) -> String {
        match self.domain.as_deref().filter(|d| !d.is_empty()) {
            Some(domain) => format!("{}/{}", LOGO_BASE_URL, domain),
            None => format!(
                "{}/{}.com",
                LOGO_BASE_URL,
                self.symbol.as_str().to_lowercase()
            ),
        }
    }

    pub fn price_text(&self) -> String {
        fmt::price(self.price)
    }

    /// `(+1.23 / 0.45%)`
    pub fn change_text(&self) -> String {
        format!(
            "({} / {})",
            fmt::signed(self.change),
            fmt::ratio_percent(self.percent)
        )
    }
}

impl From<wire::QuoteResponse> for Quote {
    fn from(q: wire::QuoteResponse) -> Self {
        Self {
            symbol: Ticker::from(q.symbol),
            price: q.price,
            change: q.change,
            percent: q.percent,
            domain: q.domain,
        }
    }
}

// ─── FeaturedQuote ───────────────────────────────────────────────────────────

/// A featured stock card on the search page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedQuote {
    pub symbol: Ticker,
    pub price: f64,
    pub change: f64,
}

impl FeaturedQuote {
    pub fn tone(&self) -> Tone {
        Tone::of_change(self.change)
    }

    pub fn price_text(&self) -> String {
        fmt::price(self.price)
    }

    pub fn change_text(&self) -> String {
        fmt::signed(self.change)
    }
}

impl From<wire::FeaturedQuoteResponse> for FeaturedQuote {
    fn from(q: wire::FeaturedQuoteResponse) -> Self {
        Self {
            symbol: Ticker::from(q.symbol),
            price: q.price,
            change: q.change,
        }
    }
}
