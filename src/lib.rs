//! # Veritas
//!
//! Client for the Veritas stock analysis site: quotes, AI recommendations and
//! price history from the Veritas backend, plus the headless page layer that
//! polls, loads and routes on top of them. Runs on native and WASM targets.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Tickers, formatting, domain models (always available, WASM-safe)
//! 2. **Auth** — Form state, credentials, typed signup/login outcomes
//! 3. **HTTP API** — `VeritasHttp`, one single-shot method per endpoint
//! 4. **High-Level Client** — `VeritasClient` with nested sub-clients
//! 5. **Runtime + Polling** — Compile-time dispatch: `tokio` (native) / `wasm-bindgen-futures` (WASM)
//! 6. **Pages** — Ticker strip, search, stock detail, auth forms, routing shell
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use veritas::prelude::*;
//!
//! let client = VeritasClient::builder()
//!     .base_url(LOCAL_API_URL)
//!     .build()?;
//!
//! let rec = client.recommendations().get(&Ticker::from("AAPL")).await?;
//!
//! let mut app = App::new(&client, "/search");
//! app.mount();
//! let view = app.view(chrono::Utc::now()).await;
//! ```

#[cfg(not(any(
    all(feature = "native", not(target_arch = "wasm32")),
    all(feature = "wasm", target_arch = "wasm32")
)))]
compile_error!("enable the `native` feature on native targets or the `wasm` feature on wasm32");

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: form state, credentials, signup/login outcomes.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `VeritasClient` — the primary entry point.
pub mod client;

// ── Layer 5: Runtime + Polling ───────────────────────────────────────────────

pub mod runtime;

/// Request tokens and scoped refresh tasks.
pub mod poll;

// ── Layer 6: Pages ───────────────────────────────────────────────────────────

pub mod ui;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Ticker, Tone};

    // Domain types
    pub use crate::domain::price_history::{
        ChartKind, ChartLayout, ChartView, PriceBar, Series, VISIBLE_BARS,
    };
    pub use crate::domain::quote::{FeaturedQuote, Quote};
    pub use crate::domain::recommendation::{Recommendation, Signal};

    // Auth
    pub use crate::auth::{AuthOutcome, Credentials, Field, FormError, FormState};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, LOCAL_API_URL};

    // Client + sub-clients
    pub use crate::client::{
        AuthClient, PriceHistorySubClient, QuotesClient, RecommendationsClient, VeritasClient,
        VeritasClientBuilder,
    };

    // Polling
    pub use crate::poll::{Polled, Poller, RequestToken, Resolution};

    // Pages
    pub use crate::ui::{
        App, AppView, DetailPage, DetailStatus, LoginPage, Page, PageView, Route, Router,
        SearchPage, SignupPage, TickerStrip, TickerWidget,
    };
}
