//! Prices sub-client — rate history queries.

use crate::client::DollarPriceClient;
use crate::domain::price::PriceObservation;
use crate::error::SdkError;

/// Sub-client for price operations.
pub struct Prices<'a> {
    pub(crate) client: &'a DollarPriceClient,
}

impl<'a> Prices<'a> {
    /// Fetch the rate history in arrival order. One request, never retried.
    pub async fn get(&self) -> Result<Vec<PriceObservation>, SdkError> {
        let resp = self.client.http.get_prices().await?;
        Ok(resp.into_iter().map(PriceObservation::from).collect())
    }
}
