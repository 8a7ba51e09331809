//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types handed to callers
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `From` conversions from wire to domain types
//! - `client.rs` — Sub-client with HTTP methods
//!
//! `price` additionally carries the derived data a dashboard renders:
//! `stats.rs` (aggregates) and `series.rs` (chart series).

pub mod health;
pub mod price;
