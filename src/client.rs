//! High-level client — `VeritasClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared configuration, and accessor methods.

use crate::auth::client::Auth;
use crate::domain::price_history::client::PriceHistoryClient;
use crate::domain::quote::client::Quotes;
use crate::domain::recommendation::client::Recommendations;
use crate::error::SdkError;
use crate::http::VeritasHttp;
use crate::network::{API_URL_ENV, DEFAULT_API_URL, POLL_INTERVAL_ENV};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::price_history::client::PriceHistoryClient as PriceHistorySubClient;
pub use crate::domain::quote::client::Quotes as QuotesClient;
pub use crate::domain::recommendation::client::Recommendations as RecommendationsClient;

/// The primary entry point for talking to the Veritas backend.
///
/// Provides nested sub-client accessors for each domain:
/// `client.quotes()`, `client.recommendations()`, etc. Cloning is cheap and
/// shares the underlying connection pool.
pub struct VeritasClient {
    pub(crate) http: VeritasHttp,
    /// Refresh interval for polling widgets.
    pub(crate) poll_interval: Duration,
}

impl VeritasClient {
    pub fn builder() -> VeritasClientBuilder {
        VeritasClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn quotes(&self) -> Quotes<'_> {
        Quotes { client: self }
    }

    pub fn recommendations(&self) -> Recommendations<'_> {
        Recommendations { client: self }
    }

    pub fn price_history(&self) -> PriceHistoryClient<'_> {
        PriceHistoryClient { client: self }
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl Clone for VeritasClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            poll_interval: self.poll_interval,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct VeritasClientBuilder {
    base_url: String,
    poll_interval: Duration,
    request_timeout: Duration,
}

impl Default for VeritasClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            poll_interval: Duration::from_secs(60),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl VeritasClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Per-request timeout. Ignored on WASM, where the browser owns timeouts.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Override settings from `VERITAS_API_URL` and `VERITAS_POLL_INTERVAL_SECS`.
    ///
    /// Unset variables leave the current values alone.
    pub fn from_env(self) -> Result<Self, SdkError> {
        self.from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SdkError> {
        if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(POLL_INTERVAL_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                SdkError::Config(format!("{} must be whole seconds, got {:?}", POLL_INTERVAL_ENV, raw))
            })?;
            self.poll_interval = Duration::from_secs(secs);
        }
        Ok(self)
    }

    pub fn build(self) -> Result<VeritasClient, SdkError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(SdkError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        if self.poll_interval.is_zero() {
            return Err(SdkError::Config("poll interval must be non-zero".into()));
        }

        Ok(VeritasClient {
            http: VeritasHttp::new(&self.base_url, self.request_timeout)?,
            poll_interval: self.poll_interval,
        })
    }
}
