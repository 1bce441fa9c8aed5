//! Scrolling ticker strip — polled quotes rendered twice for a seamless loop.

use crate::client::VeritasClient;
use crate::domain::quote::Quote;
use crate::poll::Poller;
use crate::shared::{Ticker, Tone};
use serde::Serialize;

/// One entry of the strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerItem {
    pub symbol: Ticker,
    pub logo_url: String,
    /// `$189.30`
    pub price: String,
    /// `(+1.23 / 0.65%)`
    pub change: String,
    pub tone: Tone,
}

impl From<&Quote> for TickerItem {
    fn from(q: &Quote) -> Self {
        Self {
            symbol: q.symbol.clone(),
            logo_url: q.logo_url(),
            price: q.price_text(),
            change: q.change_text(),
            tone: q.tone(),
        }
    }
}

/// The strip as drawn: the quote list followed by a copy of itself, so a
/// marquee can scroll by half its width and wrap without a visible seam.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickerStrip {
    pub items: Vec<TickerItem>,
}

impl TickerStrip {
    pub fn from_quotes(quotes: &[Quote]) -> Self {
        let once: Vec<TickerItem> = quotes.iter().map(TickerItem::from).collect();
        let mut items = Vec::with_capacity(once.len() * 2);
        items.extend(once.iter().cloned());
        items.extend(once);
        Self { items }
    }

    /// Number of distinct quotes (half the items).
    pub fn quote_count(&self) -> usize {
        self.items.len() / 2
    }
}

/// The always-mounted ticker widget.
pub struct TickerWidget {
    client: VeritasClient,
    poller: Poller<Vec<Quote>>,
}

impl TickerWidget {
    pub fn new(client: &VeritasClient) -> Self {
        Self {
            client: client.clone(),
            poller: Poller::new("ticker-prices", Vec::new(), client.poll_interval()),
        }
    }

    /// Begin polling. No-op if already mounted.
    pub fn mount(&mut self) -> bool {
        let client = self.client.clone();
        self.poller.start(move || {
            let client = client.clone();
            async move { client.quotes().ticker_prices().await }
        })
    }

    pub fn unmount(&mut self) {
        self.poller.stop();
    }

    pub fn is_mounted(&self) -> bool {
        self.poller.is_running()
    }

    pub async fn quotes(&self) -> Vec<Quote> {
        self.poller.value().await
    }

    pub async fn last_error(&self) -> Option<String> {
        self.poller.snapshot().await.last_error().map(String::from)
    }

    pub async fn view(&self) -> TickerStrip {
        let state = self.poller.state();
        let guard = state.read().await;
        TickerStrip::from_quotes(guard.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(symbol: &str, change: f64) -> Quote {
        Quote {
            symbol: Ticker::from(symbol),
            price: 10.0,
            change,
            percent: change / 10.0,
            domain: None,
        }
    }

    #[test]
    fn test_strip_duplicates_quotes_in_order() {
        let quotes = vec![quote("AAPL", 1.0), quote("TSLA", -2.0), quote("KO", 0.0)];
        let strip = TickerStrip::from_quotes(&quotes);
        let symbols: Vec<_> = strip.items.iter().map(|i| i.symbol.as_str()).collect();
        assert_eq!(symbols, ["AAPL", "TSLA", "KO", "AAPL", "TSLA", "KO"]);
        assert_eq!(strip.quote_count(), 3);
    }

    #[test]
    fn test_strip_empty() {
        let strip = TickerStrip::from_quotes(&[]);
        assert!(strip.items.is_empty());
    }

    #[test]
    fn test_item_text_and_tone() {
        let item = TickerItem::from(&quote("TSLA", -2.0));
        assert_eq!(item.price, "$10.00");
        assert_eq!(item.change, "(-2.00 / -20.00%)");
        assert_eq!(item.tone, Tone::Red);
        assert_eq!(item.logo_url, "https://logo.clearbit.com/tsla.com");
    }
}
