//! Native dashboard controller — tokio tasks + watch channel.
//!
//! Each load runs on its own spawned task. Starting another load or
//! deactivating aborts the previous task, and the [`ChartView`] ticket check
//! drops any result that still slips through. State changes are published on a
//! `tokio::sync::watch` channel for the UI layer to observe.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::view::DashboardView;
use super::{ChartView, PriceSource, ViewState};

/// Drives a [`ChartView`] against a [`PriceSource`].
pub struct Dashboard<S: PriceSource> {
    source: Arc<S>,
    view: Arc<watch::Sender<ChartView>>,
    task: Option<JoinHandle<()>>,
}

impl<S: PriceSource> Dashboard<S> {
    pub fn new(source: S) -> Self {
        Self::with_shared_source(Arc::new(source))
    }

    pub fn with_shared_source(source: Arc<S>) -> Self {
        let (tx, _rx) = watch::channel(ChartView::new());
        Self {
            source,
            view: Arc::new(tx),
            task: None,
        }
    }

    /// Enter `Loading` and fetch. Must be called within a tokio runtime.
    pub fn activate(&mut self) {
        self.start_load();
    }

    /// Re-enter `Loading` and fetch again, superseding any in-flight load.
    pub fn retry(&mut self) {
        self.start_load();
    }

    /// Freeze the state and abort the in-flight load, if any.
    ///
    /// Subscribers are notified once, so a receiver waiting for a load to
    /// settle should also stop on [`ChartView::is_deactivated`].
    pub fn deactivate(&mut self) {
        self.view.send_if_modified(|view| {
            let changed = !view.is_deactivated();
            view.deactivate();
            changed
        });
        if let Some(handle) = self.task.take() {
            handle.abort();
        }
    }

    /// Snapshot of the current view state.
    pub fn state(&self) -> ViewState {
        self.view.borrow().state().clone()
    }

    /// Current state projected for rendering.
    pub fn view(&self) -> DashboardView {
        DashboardView::project(self.view.borrow().state())
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<ChartView> {
        self.view.subscribe()
    }

    fn start_load(&mut self) {
        let mut ticket = None;
        self.view.send_if_modified(|view| {
            ticket = view.begin_load();
            ticket.is_some()
        });
        let Some(ticket) = ticket else {
            return;
        };

        if let Some(previous) = self.task.take() {
            previous.abort();
        }

        let source = Arc::clone(&self.source);
        let view = Arc::clone(&self.view);
        self.task = Some(tokio::spawn(async move {
            let result = source.fetch_prices().await;
            view.send_if_modified(|v| v.complete(ticket, result));
        }));
    }
}

impl<S: PriceSource> Drop for Dashboard<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.task.take() {
            handle.abort();
        }
    }
}
