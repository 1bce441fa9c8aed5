//! Featured stocks — polled cards on the search page.

use crate::client::VeritasClient;
use crate::domain::quote::FeaturedQuote;
use crate::poll::Poller;
use crate::shared::{Ticker, Tone};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedCard {
    pub symbol: Ticker,
    pub price: String,
    pub change: String,
    pub tone: Tone,
}

impl From<&FeaturedQuote> for FeaturedCard {
    fn from(q: &FeaturedQuote) -> Self {
        Self {
            symbol: q.symbol.clone(),
            price: q.price_text(),
            change: q.change_text(),
            tone: q.tone(),
        }
    }
}

pub struct FeaturedStocks {
    client: VeritasClient,
    poller: Poller<Vec<FeaturedQuote>>,
}

impl FeaturedStocks {
    pub fn new(client: &VeritasClient) -> Self {
        Self {
            client: client.clone(),
            poller: Poller::new("featured-stocks", Vec::new(), client.poll_interval()),
        }
    }

    pub fn mount(&mut self) -> bool {
        let client = self.client.clone();
        self.poller.start(move || {
            let client = client.clone();
            async move { client.quotes().featured().await }
        })
    }

    pub fn unmount(&mut self) {
        self.poller.stop();
    }

    pub fn is_mounted(&self) -> bool {
        self.poller.is_running()
    }

    pub async fn cards(&self) -> Vec<FeaturedCard> {
        let state = self.poller.state();
        let guard = state.read().await;
        guard.value().iter().map(FeaturedCard::from).collect()
    }
}
