//! Wire types for price responses (REST).

use serde::{Deserialize, Serialize};

/// A single price row from `GET /prices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResponse {
    pub id: i64,
    pub price: f64,
    pub timestamp: String,
}

/// REST response for the price list: a bare JSON array in arrival order.
pub type PricesResponse = Vec<PriceResponse>;
