use crate::{handlers::{health_check, ready_check}, state::AppState};
use axum::{routing::get, Router};

/// Create liveness and readiness routes
pub fn create_health_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
        .with_state(state)
}
