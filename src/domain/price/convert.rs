//! Conversions from wire types to domain types for prices.

use super::wire::PriceResponse;
use super::PriceObservation;

impl From<PriceResponse> for PriceObservation {
    fn from(p: PriceResponse) -> Self {
        PriceObservation::new(p.id, p.price, p.timestamp)
    }
}
