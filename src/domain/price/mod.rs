//! Price domain — USD→CAD rate observations, statistics, chart series.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod series;
pub mod stats;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use series::ChartSeries;
pub use stats::RateStats;

/// One exchange-rate sample: CAD per 1 USD at a point in time.
///
/// Observations are never mutated after conversion; the SDK only reorders and
/// projects them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceObservation {
    /// Opaque identifier, unique per observation. Not an ordering key.
    pub id: i64,
    /// Exchange rate, passed through unvalidated.
    pub price: f64,
    /// ISO-8601 timestamp exactly as the backend sent it.
    pub timestamp: String,
    /// Parsed `timestamp`, used for chronological ordering.
    #[serde(skip)]
    pub observed_at: Option<DateTime<Utc>>,
}

impl PriceObservation {
    pub fn new(id: i64, price: f64, timestamp: impl Into<String>) -> Self {
        let timestamp = timestamp.into();
        Self {
            id,
            price,
            observed_at: crate::shared::parse_timestamp(&timestamp),
            timestamp,
        }
    }
}
