//! Projection of [`ViewState`] into what a dashboard draws.
//!
//! Pure data: a UI layer binds these strings and series to its widgets and
//! wires the retry affordance to the controller's `retry()`.

use super::ViewState;
use crate::domain::price::stats::{average_rate, current_rate, last_updated};
use crate::domain::price::ChartSeries;
use crate::shared::fmt::date::{medium_datetime, DEFAULT_LABEL_FORMAT};
use crate::shared::fmt::num::display_rate;
use serde::Serialize;

pub const TITLE: &str = "USD to CAD Exchange Rate";
pub const SUBTITLE: &str = "Last 7 days of exchange rates";
pub const LOADING_TEXT: &str = "Loading data...";
pub const RETRY_LABEL: &str = "Retry";
pub const X_AXIS_TITLE: &str = "Date";
pub const Y_AXIS_TITLE: &str = "CAD Rate";

/// Formatted aggregates, shown only when there is at least one observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsPanel {
    pub current_rate: String,
    pub average_rate: String,
    pub last_updated: String,
}

/// The chart panel: series plus its fixed axis titles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    pub series: ChartSeries,
}

/// Body of the dashboard card for the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
    Loading {
        text: &'static str,
    },
    Error {
        message: String,
        retry_label: &'static str,
    },
    Loaded {
        chart: ChartPanel,
        stats: Option<StatsPanel>,
    },
}

/// Everything the dashboard card renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub panel: Panel,
}

impl DashboardView {
    /// Project with default day-level chart labels.
    pub fn project(state: &ViewState) -> Self {
        Self::project_with_label_format(state, DEFAULT_LABEL_FORMAT)
    }

    /// Project, formatting chart labels with a chrono `strftime` pattern.
    pub fn project_with_label_format(state: &ViewState, label_format: &str) -> Self {
        let panel = match state {
            ViewState::Loading => Panel::Loading { text: LOADING_TEXT },
            ViewState::Error(message) => Panel::Error {
                message: message.clone(),
                retry_label: RETRY_LABEL,
            },
            ViewState::Loaded(prices) => Panel::Loaded {
                chart: ChartPanel {
                    x_axis_title: X_AXIS_TITLE,
                    y_axis_title: Y_AXIS_TITLE,
                    series: ChartSeries::with_label_format(prices, label_format),
                },
                stats: (!prices.is_empty()).then(|| StatsPanel {
                    current_rate: display_rate(current_rate(prices)),
                    average_rate: display_rate(average_rate(prices)),
                    last_updated: medium_datetime(last_updated(prices)),
                }),
            },
        };

        Self {
            title: TITLE,
            subtitle: SUBTITLE,
            panel,
        }
    }

    pub fn can_retry(&self) -> bool {
        matches!(self.panel, Panel::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::LOAD_FAILURE_MESSAGE;
    use crate::domain::price::PriceObservation;

    fn loaded(prices: Vec<PriceObservation>) -> ViewState {
        ViewState::Loaded(prices)
    }

    #[test]
    fn test_loading_panel() {
        let view = DashboardView::project(&ViewState::Loading);
        assert_eq!(view.title, "USD to CAD Exchange Rate");
        assert_eq!(view.subtitle, "Last 7 days of exchange rates");
        assert_eq!(
            view.panel,
            Panel::Loading {
                text: "Loading data..."
            }
        );
        assert!(!view.can_retry());
    }

    #[test]
    fn test_error_panel_offers_retry() {
        let view = DashboardView::project(&ViewState::Error(LOAD_FAILURE_MESSAGE.to_string()));
        assert!(view.can_retry());
        match view.panel {
            Panel::Error {
                message,
                retry_label,
            } => {
                assert_eq!(message, "Failed to load data. Please try again.");
                assert_eq!(retry_label, "Retry");
            }
            other => panic!("expected error panel, got {other:?}"),
        }
    }

    #[test]
    fn test_loaded_panel_with_stats() {
        let state = loaded(vec![
            PriceObservation::new(1, 1.35, "2024-01-08T10:00:00Z"),
            PriceObservation::new(2, 1.36, "2024-01-09T10:00:00Z"),
        ]);
        let view = DashboardView::project(&state);
        let Panel::Loaded { chart, stats } = view.panel else {
            panic!("expected loaded panel");
        };
        assert_eq!(chart.x_axis_title, "Date");
        assert_eq!(chart.y_axis_title, "CAD Rate");
        assert_eq!(chart.series.labels, ["1/8/2024", "1/9/2024"]);
        assert_eq!(
            stats,
            Some(StatsPanel {
                current_rate: "1.3500 CAD".to_string(),
                average_rate: "1.3550 CAD".to_string(),
                last_updated: "Jan 8, 2024, 10:00:00 AM".to_string(),
            })
        );
    }

    #[test]
    fn test_loaded_empty_hides_stats() {
        let view = DashboardView::project(&loaded(Vec::new()));
        let Panel::Loaded { chart, stats } = view.panel else {
            panic!("expected loaded panel");
        };
        assert!(chart.series.is_empty());
        assert!(stats.is_none());
    }

    #[test]
    fn test_custom_label_format() {
        let state = loaded(vec![PriceObservation::new(1, 1.35, "2024-01-08T10:00:00Z")]);
        let view = DashboardView::project_with_label_format(&state, "%Y-%m-%d");
        let Panel::Loaded { chart, .. } = view.panel else {
            panic!("expected loaded panel");
        };
        assert_eq!(chart.series.labels, ["2024-01-08"]);
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let view = DashboardView::project(&ViewState::Loading);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["panel"]["kind"], "loading");
        assert_eq!(json["panel"]["text"], "Loading data...");
    }
}
