//! Low-level HTTP client — `VeritasHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the sub-client boundary). Every request is single-shot: the site
//! never retries, it waits for the next poll or the next user action.

use crate::domain::price_history::wire::PriceBarResponse;
use crate::domain::quote::wire::{FeaturedQuoteResponse, QuoteResponse};
use crate::domain::recommendation::wire::RecommendResponse;
use crate::error::{HttpError, SdkError};
use crate::shared::Ticker;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// A response whose body is parsed regardless of status.
///
/// Used by endpoints that report application-level failures in the body of a
/// 4xx reply (auth).
#[derive(Debug, Clone)]
pub struct HttpReply<T> {
    pub status: u16,
    /// `None` when the body was empty or not the expected JSON shape.
    pub body: Option<T>,
}

impl<T> HttpReply<T> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Low-level HTTP client for the Veritas REST API.
pub struct VeritasHttp {
    base_url: String,
    client: Client,
}

impl VeritasHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SdkError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let client = builder
            .build()
            .map_err(|e| SdkError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Quotes ───────────────────────────────────────────────────────────

    pub async fn get_ticker_prices(&self) -> Result<Vec<QuoteResponse>, HttpError> {
        let url = format!("{}/api/ticker-prices", self.base_url);
        self.get(&url).await
    }

    pub async fn get_featured_stocks(&self) -> Result<Vec<FeaturedQuoteResponse>, HttpError> {
        let url = format!("{}/api/featured-stocks", self.base_url);
        self.get(&url).await
    }

    // ── Recommendations ──────────────────────────────────────────────────

    /// The backend answers tickers it cannot analyse with a 4xx whose body is
    /// still a recommendation (`"Not enough data"`), so the body is read for
    /// any status. Only a body that is not a recommendation is an error.
    pub async fn get_recommendation(&self, ticker: &Ticker) -> Result<RecommendResponse, HttpError> {
        let url = format!("{}/api/recommend/{}", self.base_url, ticker.path_segment());
        tracing::debug!("GET {}", url);
        let resp = self.client.get(&url).send().await?;
        let status = resp.status().as_u16();
        let bytes = resp.bytes().await?;
        recommendation_from_reply(status, &bytes)
    }

    // ── Price History ────────────────────────────────────────────────────

    pub async fn get_chart(&self, ticker: &Ticker) -> Result<Vec<PriceBarResponse>, HttpError> {
        let url = format!("{}/api/chart/{}", self.base_url, ticker.path_segment());
        self.get(&url).await
    }

    // ── Auth ─────────────────────────────────────────────────────────────

    pub async fn signup<B: Serialize, T: DeserializeOwned>(
        &self,
        body: &B,
    ) -> Result<HttpReply<T>, HttpError> {
        let url = format!("{}/api/signup", self.base_url);
        self.post_reply(&url, body).await
    }

    pub async fn login<B: Serialize, T: DeserializeOwned>(
        &self,
        body: &B,
    ) -> Result<HttpReply<T>, HttpError> {
        let url = format!("{}/api/login", self.base_url);
        self.post_reply(&url, body).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let body_text = resp.text().await.unwrap_or_default();
        Err(HttpError::from_status(status.as_u16(), body_text))
    }

    /// POST a JSON body and parse the JSON reply for any status code.
    pub(crate) async fn post_reply<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<HttpReply<T>, HttpError> {
        tracing::debug!("POST {}", url);
        let resp = self.client.post(url).json(body).send().await?;
        let status = resp.status().as_u16();
        let bytes = resp.bytes().await?;
        let body = serde_json::from_slice::<T>(&bytes).ok();
        if body.is_none() && !bytes.is_empty() {
            tracing::debug!(status, "Unparseable reply body from {}", url);
        }
        Ok(HttpReply { status, body })
    }
}

pub(crate) fn recommendation_from_reply(
    status: u16,
    bytes: &[u8],
) -> Result<RecommendResponse, HttpError> {
    match serde_json::from_slice::<RecommendResponse>(bytes) {
        Ok(body) => {
            if !(200..300).contains(&status) {
                tracing::debug!(status, "Recommendation carried by a non-success reply");
            }
            Ok(body)
        }
        Err(e) if (200..300).contains(&status) => Err(HttpError::BadRequest(format!(
            "Malformed recommendation body: {}",
            e
        ))),
        Err(_) => Err(HttpError::from_status(
            status,
            String::from_utf8_lossy(bytes).into_owned(),
        )),
    }
}

impl Clone for VeritasHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
        }
    }
}
