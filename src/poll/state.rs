//! Request tokens and the polled-value state container.

use crate::error::SdkError;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Identifies one issued request. Tokens increase monotonically per gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Issues request tokens and tells whether a token is still the latest.
#[derive(Debug, Clone, Default)]
pub struct TokenGate {
    issued: u64,
}

impl TokenGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    /// Only the most recently issued token is current.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }

    pub fn latest(&self) -> Option<RequestToken> {
        (self.issued > 0).then_some(RequestToken(self.issued))
    }
}

/// What happened to a resolved request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Success; the value was replaced.
    Applied,
    /// Failure; the previous value is kept.
    Failed,
    /// A newer request was issued meanwhile; the result was discarded.
    Stale,
}

/// A value refreshed wholesale by repeated fetches.
///
/// The app owns instances of this type (usually through a `Poller`). Failures
/// never touch the value: the last good fetch stays on screen.
#[derive(Debug, Clone)]
pub struct Polled<T> {
    value: T,
    gate: TokenGate,
    applied: Option<RequestToken>,
    last_error: Option<String>,
    updated_at: Option<DateTime<Utc>>,
}

impl<T> Polled<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            gate: TokenGate::new(),
            applied: None,
            last_error: None,
            updated_at: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Issue the token for a new request.
    pub fn begin(&mut self) -> RequestToken {
        self.gate.issue()
    }

    pub fn resolve(&mut self, token: RequestToken, result: Result<T, SdkError>) -> Resolution {
        if !self.gate.is_current(token) {
            tracing::debug!(token = token.value(), "Discarding stale response");
            return Resolution::Stale;
        }

        match result {
            Ok(value) => {
                self.value = value;
                self.applied = Some(token);
                self.last_error = None;
                self.updated_at = Some(Utc::now());
                Resolution::Applied
            }
            Err(e) => {
                tracing::warn!(token = token.value(), "Fetch failed, keeping previous value: {}", e);
                self.last_error = Some(e.to_string());
                Resolution::Failed
            }
        }
    }

    /// Whether any fetch has succeeded yet.
    pub fn has_loaded(&self) -> bool {
        self.applied.is_some()
    }

    pub fn applied_token(&self) -> Option<RequestToken> {
        self.applied
    }

    pub fn latest_token(&self) -> Option<RequestToken> {
        self.gate.latest()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl<T: Default> Default for Polled<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
