//! Read-only HTTP interface over the published state.
//!
//! - `GET /`:        `{"average_price": f64 | null}`
//! - `GET /version`: crate version as plain text
//! - `GET /status`:  average plus scheduler progress

use std::sync::Arc;

use avgpx_core::{AverageResponse, SchedulerPhase};
use avgpx_feed::{PublishedState, SchedulerMonitor};
use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub state: Arc<PublishedState>,
    pub monitor: SchedulerMonitor,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub average_price: Option<f64>,
    pub contributing_count: Option<usize>,
    pub updated_at_ms: Option<u64>,
    pub phase: SchedulerPhase,
    pub cycles_completed: u64,
}

pub fn router(app: AppState) -> Router {
    Router::new()
        .route("/", get(get_average))
        .route("/version", get(get_version))
        .route("/status", get(get_status))
        .with_state(app)
        .layer(TraceLayer::new_for_http())
}

async fn get_average(State(app): State<AppState>) -> Json<AverageResponse> {
    Json(app.state.current_average())
}

async fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

async fn get_status(State(app): State<AppState>) -> Json<StatusResponse> {
    let last = app.state.read();
    Json(StatusResponse {
        average_price: last.map(|r| r.consensus_value),
        contributing_count: last.map(|r| r.contributing_count),
        updated_at_ms: last.map(|r| r.timestamp_ms),
        phase: app.monitor.phase(),
        cycles_completed: app.monitor.cycles_completed(),
    })
}
