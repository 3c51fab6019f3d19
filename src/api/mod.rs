//! HTTP API module
//!
//! This module contains the HTTP command dispatcher and the read-only status
//! endpoints consumed by presentation clients.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/frame/start", post(start_frame_handler))
        .route("/frame/reset", post(reset_frame_handler))
        .route("/frame/pause", post(pause_frame_handler))
        .route("/shot/reset", post(reset_shot_handler))
        .route("/rolling", put(rolling_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
