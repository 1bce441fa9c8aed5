//! Wire types for price history (REST).

use crate::shared::serde_util::number_or_string;
use serde::{Deserialize, Serialize};

/// One session of `GET /api/chart/{ticker}`.
///
/// Dates arrive as strings; prices as numbers or numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBarResponse {
    pub date: String,
    #[serde(deserialize_with = "number_or_string::deserialize")]
    pub open: f64,
    #[serde(deserialize_with = "number_or_string::deserialize")]
    pub high: f64,
    #[serde(deserialize_with = "number_or_string::deserialize")]
    pub low: f64,
    #[serde(deserialize_with = "number_or_string::deserialize")]
    pub close: f64,
}
