//! Derived statistics over a price sequence.
//!
//! All functions read the sequence in arrival order (as the backend sent it),
//! not chronological order. "Current" and "last updated" are therefore the
//! first element received, which the backend orders newest-first.

use super::PriceObservation;
use serde::Serialize;

/// Price of the first observation in arrival order, or `0` when empty.
pub fn current_rate(prices: &[PriceObservation]) -> f64 {
    prices.first().map(|p| p.price).unwrap_or(0.0)
}

/// Arithmetic mean of all prices, or `0` when empty.
pub fn average_rate(prices: &[PriceObservation]) -> f64 {
    if prices.is_empty() {
        return 0.0;
    }
    let sum: f64 = prices.iter().map(|p| p.price).sum();
    sum / prices.len() as f64
}

/// Raw timestamp of the first observation in arrival order, or `""` when empty.
pub fn last_updated(prices: &[PriceObservation]) -> &str {
    prices.first().map(|p| p.timestamp.as_str()).unwrap_or("")
}

/// The three dashboard aggregates, computed together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateStats {
    pub current_rate: f64,
    pub average_rate: f64,
    pub last_updated: String,
}

impl RateStats {
    pub fn from_observations(prices: &[PriceObservation]) -> Self {
        Self {
            current_rate: current_rate(prices),
            average_rate: average_rate(prices),
            last_updated: last_updated(prices).to_string(),
        }
    }
}
