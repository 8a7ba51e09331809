//! High-level client — `DollarPriceClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::dashboard::PriceSource;
use crate::domain::health::client::Health;
use crate::domain::price::client::Prices;
use crate::domain::price::PriceObservation;
use crate::error::SdkError;
use crate::http::client::DEFAULT_TIMEOUT;
use crate::http::DollarPriceHttp;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::health::client::Health as HealthSubClient;
pub use crate::domain::price::client::Prices as PricesSubClient;

/// The primary entry point for the Dollar Price SDK.
///
/// Holds no state besides its transport: every call goes to the network.
#[derive(Clone)]
pub struct DollarPriceClient {
    pub(crate) http: DollarPriceHttp,
}

impl DollarPriceClient {
    pub fn builder() -> DollarPriceClientBuilder {
        DollarPriceClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    pub fn health(&self) -> Health<'_> {
        Health { client: self }
    }
}

impl PriceSource for DollarPriceClient {
    async fn fetch_prices(&self) -> Result<Vec<PriceObservation>, SdkError> {
        self.prices().get().await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DollarPriceClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for DollarPriceClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl DollarPriceClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Transport-level request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<DollarPriceClient, SdkError> {
        Ok(DollarPriceClient {
            http: DollarPriceHttp::with_timeout(&self.base_url, self.timeout)?,
        })
    }
}
