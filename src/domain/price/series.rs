//! Chart series derived from a price sequence.
//!
//! The chart reads oldest-first, so observations are re-sorted by their parsed
//! timestamp. The sort is stable: equal timestamps keep arrival order, and
//! observations whose timestamp did not parse sort ahead of all others.

use super::PriceObservation;
use crate::shared::fmt::date::{format_instant, DEFAULT_LABEL_FORMAT};
use serde::Serialize;

/// Legend label of the single series.
pub const SERIES_LABEL: &str = "USD to CAD";

/// Chart-ready data: one label and one value per observation, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl ChartSeries {
    /// Build the series with day-level labels in the default format.
    pub fn from_observations(prices: &[PriceObservation]) -> Self {
        Self::with_label_format(prices, DEFAULT_LABEL_FORMAT)
    }

    /// Build the series, formatting each label with a chrono `strftime` pattern.
    pub fn with_label_format(prices: &[PriceObservation], pattern: &str) -> Self {
        let sorted = chronological(prices);
        Self {
            label: SERIES_LABEL.to_string(),
            labels: sorted
                .iter()
                .map(|p| format_instant(p.observed_at.as_ref(), pattern))
                .collect(),
            data: sorted.iter().map(|p| p.price).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A chronologically sorted view over `prices`. The input is left untouched.
pub fn chronological(prices: &[PriceObservation]) -> Vec<&PriceObservation> {
    let mut sorted: Vec<&PriceObservation> = prices.iter().collect();
    sorted.sort_by_key(|p| p.observed_at);
    sorted
}
