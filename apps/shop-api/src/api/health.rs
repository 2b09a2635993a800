//! Readiness endpoint

use axum::{extract::State, response::Response, routing::get, Router};
use axum_helpers::{run_health_checks, HealthCheckFuture};
use database::postgres::check_health;

use crate::state::AppState;

async fn ready(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async { check_health(&state.db).await.map_err(|e| e.to_string()) }),
    )];
    run_health_checks(checks).await
}

/// Router exposing `GET /ready`
pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
