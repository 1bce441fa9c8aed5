//! Stock detail page — recommendation plus price chart for one ticker.
//!
//! Both resources are fetched together and shown only when both arrive.
//! The page issues a token from its [`TokenGate`] synchronously whenever it
//! starts a load, and the stored result remembers the token that produced
//! it. Anything but the latest token's result reads as loading, so the page
//! never shows data for a ticker it has moved away from.

use super::DISCLAIMER;
use crate::client::VeritasClient;
use crate::domain::price_history::{ChartKind, ChartLayout, ChartView, Series};
use crate::domain::recommendation::Recommendation;
use crate::error::SdkError;
use crate::poll::{RequestToken, Resolution, TokenGate};
use crate::runtime::{self, TaskHandle};
use crate::shared::{Ticker, Tone};

use async_lock::RwLock;
use futures_util::future;
use serde::Serialize;
use std::sync::Arc;

/// The only error text the page ever shows.
pub const LOAD_ERROR: &str = "Failed to load stock data.";

#[derive(Debug, Clone, PartialEq)]
pub enum DetailStatus {
    Loading,
    Loaded {
        recommendation: Recommendation,
        series: Series,
    },
    Failed(String),
}

#[derive(Debug)]
struct DetailState {
    /// Load that produced `status`.
    token: Option<RequestToken>,
    status: DetailStatus,
}

impl DetailState {
    /// Store a finished load unless a newer one is already stored.
    fn apply(
        &mut self,
        token: RequestToken,
        ticker: &Ticker,
        result: Result<(Recommendation, Series), SdkError>,
    ) -> Resolution {
        if self.token.is_some_and(|stored| stored > token) {
            tracing::debug!(ticker = %ticker, token = token.value(), "Discarding stale detail load");
            return Resolution::Stale;
        }
        self.token = Some(token);

        match result {
            Ok((recommendation, series)) => {
                self.status = DetailStatus::Loaded {
                    recommendation,
                    series,
                };
                Resolution::Applied
            }
            Err(e) => {
                tracing::warn!(ticker = %ticker, "Failed to load stock detail: {}", e);
                self.status = DetailStatus::Failed(LOAD_ERROR.to_string());
                Resolution::Failed
            }
        }
    }
}

// ─── View ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalView {
    pub label: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOption {
    pub kind: ChartKind,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub heading: String,
    pub subtitle: &'static str,
    pub loading: bool,
    pub error: Option<String>,
    pub recommendation: Option<SignalView>,
    pub explanation: Option<String>,
    pub chart_options: Vec<ChartOption>,
    pub chart: Option<ChartView>,
    pub disclaimer: &'static str,
}

// ─── Page ────────────────────────────────────────────────────────────────────

pub struct DetailPage {
    client: VeritasClient,
    ticker: Ticker,
    gate: TokenGate,
    state: Arc<RwLock<DetailState>>,
    chart_kind: ChartKind,
    layout: ChartLayout,
    load_task: Option<TaskHandle>,
}

impl DetailPage {
    pub fn new(client: &VeritasClient, ticker: Ticker) -> Self {
        Self {
            client: client.clone(),
            ticker,
            gate: TokenGate::new(),
            state: Arc::new(RwLock::new(DetailState {
                token: None,
                status: DetailStatus::Loading,
            })),
            chart_kind: ChartKind::default(),
            layout: ChartLayout::default(),
            load_task: None,
        }
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Start loading the current ticker in the background.
    pub fn mount(&mut self) {
        self.spawn_load();
    }

    /// Cancel the load in flight, if any.
    pub fn unmount(&mut self) {
        if let Some(handle) = self.load_task.take() {
            handle.abort();
        }
    }

    /// Switch to another ticker and reload. Returns `false` if it is the
    /// same ticker.
    ///
    /// The page reads as loading from this call on. The previous load is
    /// cancelled.
    pub fn set_ticker(&mut self, ticker: Ticker) -> bool {
        if ticker == self.ticker {
            return false;
        }
        self.ticker = ticker;
        self.spawn_load();
        true
    }

    pub fn chart_kind(&self) -> ChartKind {
        self.chart_kind
    }

    pub fn select_chart(&mut self, kind: ChartKind) {
        self.chart_kind = kind;
    }

    pub fn set_layout(&mut self, layout: ChartLayout) {
        self.layout = layout;
    }

    /// Result of the latest load, or `Loading` while it is outstanding.
    pub async fn status(&self) -> DetailStatus {
        let state = self.state.read().await;
        if state.token == self.gate.latest() {
            state.status.clone()
        } else {
            DetailStatus::Loading
        }
    }

    /// Load the current ticker and wait for it.
    pub async fn load(&mut self) -> Resolution {
        let token = self.gate.issue();
        load(&self.client, &self.ticker, &self.state, token).await
    }

    fn spawn_load(&mut self) {
        self.unmount();
        let token = self.gate.issue();
        let client = self.client.clone();
        let ticker = self.ticker.clone();
        let state = self.state.clone();
        let handle = runtime::spawn(async move {
            load(&client, &ticker, &state, token).await;
        });
        self.load_task = Some(handle);
    }

    pub async fn view(&self) -> DetailView {
        let status = self.status().await;

        let chart_options = [ChartKind::Line, ChartKind::Candlestick]
            .into_iter()
            .map(|kind| ChartOption {
                kind,
                label: kind.label(),
                selected: kind == self.chart_kind,
            })
            .collect();

        let mut view = DetailView {
            heading: self.ticker.as_str().to_uppercase(),
            subtitle: "AI Recommendation",
            loading: false,
            error: None,
            recommendation: None,
            explanation: None,
            chart_options,
            chart: None,
            disclaimer: DISCLAIMER,
        };

        match status {
            DetailStatus::Loading => view.loading = true,
            DetailStatus::Failed(message) => view.error = Some(message),
            DetailStatus::Loaded {
                recommendation,
                series,
            } => {
                view.recommendation = recommendation.signal.as_ref().map(|signal| SignalView {
                    label: signal.label().to_string(),
                    tone: signal.tone(),
                });
                view.explanation = Some(recommendation.explanation);
                view.chart = ChartView::build(&series, self.chart_kind, self.layout);
            }
        }

        view
    }
}

impl Drop for DetailPage {
    fn drop(&mut self) {
        self.unmount();
    }
}

async fn load(
    client: &VeritasClient,
    ticker: &Ticker,
    state: &RwLock<DetailState>,
    token: RequestToken,
) -> Resolution {
    tracing::debug!(ticker = %ticker, token = token.value(), "Loading stock detail");

    let result = future::try_join(
        client.recommendations().get(ticker),
        client.price_history().get(ticker),
    )
    .await;

    state.write().await.apply(token, ticker, result)
}
