//! Wire types for quote responses (REST).

use serde::{Deserialize, Serialize};

/// One entry of `GET /api/ticker-prices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    /// Change as a ratio of the previous close (`0.012` = 1.2%).
    pub percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

/// One entry of `GET /api/featured-stocks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedQuoteResponse {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
}
