use axum::{extract::State, http::StatusCode, Json};
use crate::{
    models::{HealthResponse, ReadinessReport, ReadyResponse},
    probes::Probe,
    state::AppState,
};
use tracing::{debug, warn};

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse::healthy(state.service_name.as_ref()))
}

/// Readiness check endpoint
pub async fn ready_check(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    debug!("Readiness check requested");

    // Check database connectivity
    let database = reachable(state.database.as_ref()).await;

    // Check Redis connectivity
    let redis = reachable(state.cache.as_ref()).await;

    let report = ReadinessReport { database, redis };
    let status = if report.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(report.into()))
}

/// Probe errors count as unreachable and never reach the response body.
async fn reachable(probe: &dyn Probe) -> bool {
    match probe.try_connect().await {
        Ok(true) => true,
        Ok(false) => {
            warn!(dependency = probe.name(), "Dependency reported unreachable");
            false
        }
        Err(e) => {
            warn!(dependency = probe.name(), error = %e, "Dependency probe failed");
            false
        }
    }
}
