use utoipa::OpenApi;
use crate::models::*;

/// Liveness check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Process is running", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Readiness check endpoint
#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Database and Redis are reachable", body = ReadyResponse),
        (status = 503, description = "At least one dependency is unreachable", body = ReadyResponse)
    )
)]
#[allow(dead_code)]
pub async fn ready_check_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check_doc,
        ready_check_doc,
    ),
    components(
        schemas(HealthResponse, HealthState, ReadyResponse, ReadyState, Connection, Connectivity)
    ),
    tags(
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_both_probe_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/health"));
        assert!(doc.paths.paths.contains_key("/ready"));
    }
}
