//! HTTP client layer — `DollarPriceHttp`, one attempt per request.

pub mod client;

pub use client::DollarPriceHttp;
