//! JSON API handlers

use axum::{
    Json,
    extract::{Query, State},
};
use axum_extra::extract::cookie::CookieJar;
use domain::{SessionId, TripSession};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::session;
use crate::{error::ApiError, state::AppState};

/// Station names offered in the selector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationsResponse {
    pub stations: Vec<String>,
}

/// Query parameters of the route lookup
#[derive(Debug, Clone, Deserialize)]
pub struct RouteQuery {
    /// Start map node id
    pub from: i64,
    /// End map node id
    pub to: i64,
}

/// Node ids along the connecting way
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    pub from: i64,
    pub to: i64,
    pub nodes: Vec<i64>,
}

/// List the stations of the station-list feed
pub async fn stations(State(state): State<AppState>) -> Json<StationsResponse> {
    Json(StationsResponse {
        stations: state.sessions.trips().station_names(),
    })
}

/// Current state of the caller's session
///
/// Reading the session here leaves any pending notice for the page. Without
/// a live session an idle one is reported and nothing is stored.
pub async fn current_session(State(state): State<AppState>, jar: CookieJar) -> Json<TripSession> {
    Json(session::requested(&jar).map_or_else(
        || TripSession::new(SessionId::new()),
        |id| state.sessions.snapshot(id),
    ))
}

/// Look up a way connecting two map nodes
#[instrument(skip(state))]
pub async fn route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, ApiError> {
    let nodes = state.destinations.route(query.from, query.to).await?;
    Ok(Json(RouteResponse {
        from: query.from,
        to: query.to,
        nodes,
    }))
}
