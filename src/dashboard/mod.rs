//! Dashboard view state — app-owned, SDK-provided transition logic.
//!
//! [`ChartView`] is a synchronous state machine with no I/O: the caller asks it
//! for a [`LoadTicket`], performs the fetch however it likes, and hands the
//! result back with the ticket. Only the result of the most recent load is
//! applied, and nothing is applied after [`ChartView::deactivate`]. The
//! `native` feature adds a tokio-driven controller on top.
//!
//! ```text
//! Idle ──activate──▶ Loading ──ok──▶ Loaded ─┐
//!                      ▲  └──err──▶ Error ───┤
//!                      └──────retry──────────┘
//! ```

#[cfg(feature = "native")]
pub mod native;
pub mod view;

use crate::domain::price::{ChartSeries, PriceObservation, RateStats};
use crate::error::SdkError;
use std::future::Future;

/// The only message a failed load ever shows.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load data. Please try again.";

/// Anything that can produce a fresh price sequence. One call, one request.
pub trait PriceSource: Send + Sync + 'static {
    fn fetch_prices(
        &self,
    ) -> impl Future<Output = Result<Vec<PriceObservation>, SdkError>> + Send;
}

/// What the presentation layer renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    /// Initial state, and the state while a request is in flight.
    #[default]
    Loading,
    /// The last load failed; holds the user-facing message.
    Error(String),
    /// The last load succeeded; observations in arrival order.
    Loaded(Vec<PriceObservation>),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Loaded observations in arrival order; empty in any other state.
    pub fn prices(&self) -> &[PriceObservation] {
        match self {
            ViewState::Loaded(prices) => prices,
            _ => &[],
        }
    }

    pub fn stats(&self) -> RateStats {
        RateStats::from_observations(self.prices())
    }

    /// Chronologically ordered chart series for the loaded observations.
    pub fn series(&self) -> ChartSeries {
        ChartSeries::from_observations(self.prices())
    }
}

/// Identifies one load. A completion is applied only if its ticket is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Lifecycle {
    #[default]
    Idle,
    Active,
    Deactivated,
}

/// The chart view state machine.
#[derive(Debug, Clone, Default)]
pub struct ChartView {
    state: ViewState,
    lifecycle: Lifecycle,
    issued: u64,
    pending: Option<u64>,
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    pub fn is_deactivated(&self) -> bool {
        self.lifecycle == Lifecycle::Deactivated
    }

    /// Enter `Loading` for a new request (activation or retry).
    ///
    /// Any earlier ticket becomes stale. Returns `None` once deactivated.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.lifecycle == Lifecycle::Deactivated {
            tracing::debug!("load requested after deactivation, ignoring");
            return None;
        }
        self.lifecycle = Lifecycle::Active;
        self.issued += 1;
        self.pending = Some(self.issued);
        self.state = ViewState::Loading;
        Some(LoadTicket(self.issued))
    }

    /// Apply the outcome of the load identified by `ticket`.
    ///
    /// Returns `true` if the state changed, `false` if the result was stale,
    /// already applied, or the view is deactivated. Failures replace any loaded
    /// data with the fixed [`LOAD_FAILURE_MESSAGE`]; the cause is only logged.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<PriceObservation>, SdkError>,
    ) -> bool {
        if self.lifecycle != Lifecycle::Active || self.pending != Some(ticket.0) {
            tracing::debug!(
                ticket = ticket.0,
                pending = ?self.pending,
                "discarding stale load result"
            );
            return false;
        }
        self.pending = None;

        self.state = match result {
            Ok(prices) => {
                tracing::info!(count = prices.len(), "price history loaded");
                ViewState::Loaded(prices)
            }
            Err(e) => {
                tracing::error!(error = %e, "error loading price history");
                ViewState::Error(LOAD_FAILURE_MESSAGE.to_string())
            }
        };
        true
    }

    /// Stop observing loads. The state is frozen from here on.
    pub fn deactivate(&mut self) {
        self.lifecycle = Lifecycle::Deactivated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;

    fn sample() -> Vec<PriceObservation> {
        vec![
            PriceObservation::new(1, 1.35, "2024-01-08T10:00:00Z"),
            PriceObservation::new(2, 1.36, "2024-01-09T10:00:00Z"),
        ]
    }

    fn network_error() -> SdkError {
        SdkError::Other("Network error".to_string())
    }

    #[test]
    fn test_initial_state_is_loading() {
        let view = ChartView::new();
        assert!(view.state().is_loading());
        assert!(!view.is_active());
    }

    #[test]
    fn test_successful_load() {
        let mut view = ChartView::new();
        let ticket = view.begin_load().unwrap();
        assert!(view.complete(ticket, Ok(sample())));

        let state = view.state();
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert_eq!(state.prices(), sample().as_slice());

        let stats = state.stats();
        assert_eq!(stats.current_rate, 1.35);
        assert_eq!(stats.average_rate, 1.355);
        assert_eq!(stats.last_updated, "2024-01-08T10:00:00Z");
    }

    #[test]
    fn test_failed_load_uses_fixed_message() {
        let causes = [
            network_error(),
            HttpError::from_status(500, "boom".into()).into(),
            serde_json::from_str::<Vec<u8>>("{").unwrap_err().into(),
        ];
        for cause in causes {
            let mut view = ChartView::new();
            let ticket = view.begin_load().unwrap();
            assert!(view.complete(ticket, Err(cause)));
            assert_eq!(
                view.state(),
                &ViewState::Error("Failed to load data. Please try again.".to_string())
            );
            assert!(!view.state().is_loading());
        }
    }

    #[test]
    fn test_failure_discards_previous_data() {
        let mut view = ChartView::new();
        let t1 = view.begin_load().unwrap();
        view.complete(t1, Ok(sample()));

        let t2 = view.begin_load().unwrap();
        view.complete(t2, Err(network_error()));
        assert!(view.state().prices().is_empty());
        assert_eq!(view.state().stats().current_rate, 0.0);
    }

    #[test]
    fn test_retry_clears_error() {
        let mut view = ChartView::new();
        let t1 = view.begin_load().unwrap();
        view.complete(t1, Err(network_error()));
        assert!(view.state().error().is_some());

        let t2 = view.begin_load().unwrap();
        assert!(view.state().is_loading());
        assert!(view.state().error().is_none());

        view.complete(t2, Ok(sample()));
        assert_eq!(view.state().prices().len(), 2);
    }

    #[test]
    fn test_reload_replaces_sequence() {
        let mut view = ChartView::new();
        let t1 = view.begin_load().unwrap();
        view.complete(t1, Ok(sample()));

        let t2 = view.begin_load().unwrap();
        assert!(view.state().prices().is_empty());
        view.complete(t2, Ok(vec![PriceObservation::new(9, 1.40, "2024-01-10T10:00:00Z")]));
        assert_eq!(view.state().prices().len(), 1);
        assert_eq!(view.state().prices()[0].id, 9);
    }

    #[test]
    fn test_superseded_result_is_discarded() {
        let mut view = ChartView::new();
        let stale = view.begin_load().unwrap();
        let fresh = view.begin_load().unwrap();
        assert_ne!(stale, fresh);

        // stale success arriving first must not land
        assert!(!view.complete(stale, Ok(sample())));
        assert!(view.state().is_loading());

        assert!(view.complete(fresh, Err(network_error())));
        // and stale results arriving late must not overwrite the newer state
        assert!(!view.complete(stale, Ok(sample())));
        assert!(view.state().error().is_some());
    }

    #[test]
    fn test_ticket_completes_once() {
        let mut view = ChartView::new();
        let ticket = view.begin_load().unwrap();
        assert!(view.complete(ticket, Ok(sample())));
        assert!(!view.complete(ticket, Err(network_error())));
        assert_eq!(view.state().prices().len(), 2);
    }

    #[test]
    fn test_state_frozen_after_deactivate() {
        let mut view = ChartView::new();
        let ticket = view.begin_load().unwrap();
        view.deactivate();

        assert!(!view.complete(ticket, Ok(sample())));
        assert!(view.state().is_loading());
        assert!(view.begin_load().is_none());
        assert!(view.is_deactivated());
    }

    #[test]
    fn test_series_is_chronological_but_stats_are_arrival_order() {
        let mut view = ChartView::new();
        let ticket = view.begin_load().unwrap();
        view.complete(
            ticket,
            Ok(vec![
                PriceObservation::new(2, 1.36, "2024-01-09T10:00:00Z"),
                PriceObservation::new(1, 1.35, "2024-01-08T10:00:00Z"),
            ]),
        );

        let series = view.state().series();
        assert_eq!(series.labels, ["1/8/2024", "1/9/2024"]);
        assert_eq!(series.data, [1.35, 1.36]);
        assert_eq!(view.state().stats().current_rate, 1.36);
        assert_eq!(view.state().stats().last_updated, "2024-01-09T10:00:00Z");
    }
}
