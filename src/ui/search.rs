//! Search page — ticker lookup form, sentiment bar and featured stocks.

use super::featured::{FeaturedCard, FeaturedStocks};
use super::route::Route;
use super::sentiment::{SentimentBar, SentimentView, SAMPLE_SENTIMENT};
use super::DISCLAIMER;
use crate::client::VeritasClient;
use crate::shared::Ticker;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchView {
    pub heading: &'static str,
    pub prompt: &'static str,
    pub placeholder: &'static str,
    pub input: String,
    pub disclaimer: &'static str,
    pub sentiment: SentimentView,
    pub featured_heading: &'static str,
    pub featured: Vec<FeaturedCard>,
}

pub struct SearchPage {
    input: String,
    featured: FeaturedStocks,
    sentiment: SentimentBar,
}

impl SearchPage {
    pub fn new(client: &VeritasClient, now: DateTime<Utc>) -> Self {
        Self {
            input: String::new(),
            featured: FeaturedStocks::new(client),
            sentiment: SentimentBar::new(SAMPLE_SENTIMENT, now),
        }
    }

    pub fn mount(&mut self) {
        self.featured.mount();
    }

    pub fn unmount(&mut self) {
        self.featured.unmount();
    }

    pub fn is_mounted(&self) -> bool {
        self.featured.is_mounted()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn sentiment_mut(&mut self) -> &mut SentimentBar {
        &mut self.sentiment
    }

    /// Route to navigate to for the current input, or `None` if it is blank.
    pub fn submit(&self) -> Option<Route> {
        Ticker::parse_input(&self.input).map(Route::Stock)
    }

    pub async fn view(&self, now: DateTime<Utc>) -> SearchView {
        SearchView {
            heading: "Stock Lookup",
            prompt: "Enter a stock ticker symbol below to receive an AI-powered Buy, Sell, or Hold recommendation.",
            placeholder: "Enter stock ticker (e.g. AAPL)",
            input: self.input.clone(),
            disclaimer: DISCLAIMER,
            sentiment: self.sentiment.view(now),
            featured_heading: "Featured Stocks",
            featured: self.featured.cards().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> SearchPage {
        let client = VeritasClient::builder()
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap();
        SearchPage::new(&client, Utc::now())
    }

    #[test]
    fn test_submit_uppercases_and_trims() {
        let mut page = page();
        page.set_input("  aapl ");
        assert_eq!(page.submit(), Some(Route::Stock(Ticker::from("AAPL"))));
        assert_eq!(page.submit().map(|r| r.path()).as_deref(), Some("/stock/AAPL"));
    }

    #[test]
    fn test_blank_submit_does_not_navigate() {
        let mut page = page();
        assert_eq!(page.submit(), None);
        page.set_input("   ");
        assert_eq!(page.submit(), None);
    }

    #[test]
    fn test_view_before_mount() {
        let page = page();
        let now = Utc::now();
        let view = tokio_test::block_on(page.view(now));
        assert_eq!(view.heading, "Stock Lookup");
        assert!(view.featured.is_empty());
        assert!((view.sentiment.width_percent - 67.0).abs() < 1e-9);
        assert!(!page.is_mounted());
    }
}
