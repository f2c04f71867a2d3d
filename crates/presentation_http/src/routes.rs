//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::limit::RequestBodyLimitLayer;

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_body_size_bytes;

    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Trip page and its form actions
        .route("/", get(handlers::page::index))
        .route("/trip", post(handlers::page::generate_trip))
        .route("/reset", post(handlers::page::reset))
        // JSON API
        .route("/api/stations", get(handlers::api::stations))
        .route("/api/session", get(handlers::api::current_session))
        .route("/api/route", get(handlers::api::route))
        .layer(RequestBodyLimitLayer::new(body_limit))
        // Attach state
        .with_state(state)
}
