//! Quotes sub-client — ticker-strip prices and featured stocks.

use crate::client::VeritasClient;
use crate::domain::quote::{FeaturedQuote, Quote};
use crate::error::SdkError;

/// Sub-client for quote operations.
pub struct Quotes<'a> {
    pub(crate) client: &'a VeritasClient,
}

impl<'a> Quotes<'a> {
    /// Latest prices for the scrolling ticker.
    pub async fn ticker_prices(&self) -> Result<Vec<Quote>, SdkError> {
        let resp = self.client.http.get_ticker_prices().await?;
        Ok(resp.into_iter().map(Quote::from).collect())
    }

    /// Featured stocks for the search page.
    pub async fn featured(&self) -> Result<Vec<FeaturedQuote>, SdkError> {
        let resp = self.client.http.get_featured_stocks().await?;
        Ok(resp.into_iter().map(FeaturedQuote::from).collect())
    }
}
