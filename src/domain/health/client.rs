//! Health sub-client — liveness check.

use crate::client::DollarPriceClient;
use crate::domain::health::HealthStatus;
use crate::error::SdkError;

pub struct Health<'a> {
    pub(crate) client: &'a DollarPriceClient,
}

impl<'a> Health<'a> {
    pub async fn get(&self) -> Result<HealthStatus, SdkError> {
        Ok(self.client.http.get_health().await?.into())
    }
}
