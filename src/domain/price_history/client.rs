//! Price history sub-client — daily OHLC series.

use crate::client::VeritasClient;
use crate::domain::price_history::{self, Series};
use crate::error::SdkError;
use crate::shared::Ticker;

/// Sub-client for price history operations.
pub struct PriceHistoryClient<'a> {
    pub(crate) client: &'a VeritasClient,
}

impl<'a> PriceHistoryClient<'a> {
    pub async fn get(&self, ticker: &Ticker) -> Result<Series, SdkError> {
        let raw = self.client.http.get_chart(ticker).await?;
        Series::try_from(raw)
            .map_err(|e: price_history::ValidationError| SdkError::Validation(e.to_string()))
    }
}
