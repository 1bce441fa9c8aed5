//! Recommendations sub-client.

use crate::client::VeritasClient;
use crate::domain::recommendation::Recommendation;
use crate::error::SdkError;
use crate::shared::Ticker;

pub struct Recommendations<'a> {
    pub(crate) client: &'a VeritasClient,
}

impl<'a> Recommendations<'a> {
    pub async fn get(&self, ticker: &Ticker) -> Result<Recommendation, SdkError> {
        let resp = self.client.http.get_recommendation(ticker).await?;
        Ok(Recommendation::from_wire(ticker, resp))
    }
}
