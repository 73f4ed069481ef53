//! Frames API Service Library
//!
//! HTTP service over a table of resampled sonar scanlines: batch JSON
//! listing by depth range and single-row false-color PNG rendering.

pub mod config;
pub mod handlers;
pub mod pipeline;
pub mod query;
pub mod state;

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the HTTP router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Frames
        .route("/api/get_frames", get(handlers::frames::get_frames_handler))
        .route(
            "/api/get_colored_frames",
            get(handlers::frames::get_colored_frames_handler),
        )
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
