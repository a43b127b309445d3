use axum::{extract::State, response::Response, routing::get, Router};
use chrono::{DateTime, Local};
use serde::Serialize;

use super::ok;
use crate::server::AppState;
use crate::utils::datetime::TimeUtil;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: String,
    pub started_at: DateTime<Local>,
    pub uptime_secs: u64,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub async fn health(State(state): State<AppState>) -> Response {
    ok(Health {
        status: "ok",
        version: state.apps.version.clone(),
        started_at: state.apps.started_at,
        uptime_secs: TimeUtil::seconds_since(state.apps.started_at),
    })
}
