//! # Dollar Price SDK
//!
//! A Rust client for the Dollar Price API: USD→CAD exchange-rate history,
//! chart-ready series and the dashboard view state built on top of it.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Domain types, statistics, chart series, view-state machine (no I/O)
//! 2. **HTTP API** — `DollarPriceHttp`, one method per endpoint, single attempt per call
//! 3. **High-Level Client** — `DollarPriceClient` with nested sub-clients
//! 4. **Native Dashboard** — `Dashboard` controller running loads on tokio tasks
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dollar_price::prelude::*;
//!
//! let client = DollarPriceClient::builder()
//!     .base_url("http://localhost:8080/api/v1")
//!     .build()?;
//!
//! let mut dashboard = Dashboard::new(client);
//! let mut updates = dashboard.subscribe();
//! dashboard.activate();
//!
//! updates.wait_for(|v| !v.state().is_loading()).await?;
//! println!("{:?}", dashboard.view());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared display and parsing helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, derived data.
pub mod domain;

/// View-state machine and its projection for a UI layer.
pub mod dashboard;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `DollarPriceClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::health::HealthStatus;
    pub use crate::domain::price::series::ChartSeries;
    pub use crate::domain::price::stats::{average_rate, current_rate, last_updated, RateStats};
    pub use crate::domain::price::PriceObservation;

    // View state
    pub use crate::dashboard::view::{DashboardView, StatsPanel};
    pub use crate::dashboard::{
        ChartView, LoadTicket, PriceSource, ViewState, LOAD_FAILURE_MESSAGE,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        DollarPriceClient, DollarPriceClientBuilder, HealthSubClient, PricesSubClient,
    };

    // Native controller
    #[cfg(feature = "native")]
    pub use crate::dashboard::native::Dashboard;
}
