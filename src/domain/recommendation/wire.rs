//! Wire types for recommendation responses (REST).

use serde::{Deserialize, Serialize};

/// Body of `GET /api/recommend/{ticker}`.
///
/// Every field is optional on the wire: error replies carry only
/// `recommendation` (e.g. `"Error"`) and `details`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
