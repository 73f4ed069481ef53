//! Application state for the frames API.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use storage::FrameStore;

use crate::query::QueryService;

/// Shared application state.
pub struct AppState {
    /// Read paths over the persisted table.
    pub query: QueryService,

    /// Renders `/metrics`; absent when no recorder is installed (tests).
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(store: Arc<dyn FrameStore>) -> Self {
        Self {
            query: QueryService::new(store),
            prometheus: None,
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
