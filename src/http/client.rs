//! Low-level HTTP client — `DollarPriceHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the Layer 3 boundary). Every call issues exactly one request:
//! there is no retry, caching or auth.

use crate::domain::health::wire::HealthResponse;
use crate::domain::price::wire::PricesResponse;
use crate::error::HttpError;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for the Dollar Price REST API.
#[derive(Clone)]
pub struct DollarPriceHttp {
    base_url: String,
    client: Client,
}

impl DollarPriceHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Prices ───────────────────────────────────────────────────────────

    pub async fn get_prices(&self) -> Result<PricesResponse, HttpError> {
        let url = format!("{}/prices", self.base_url);
        self.get(&url).await
    }

    // ── Health ───────────────────────────────────────────────────────────

    pub async fn get_health(&self) -> Result<HealthResponse, HttpError> {
        let url = format!("{}/health", self.base_url);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!(url, "GET");

        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let body = resp.bytes().await?;
            return serde_json::from_slice::<T>(&body).map_err(HttpError::MalformedBody);
        }

        let body_text = resp.text().await.unwrap_or_default();
        Err(HttpError::from_status(status.as_u16(), body_text))
    }
}
