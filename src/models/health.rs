use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness state of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
}

/// API response for health check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthState,
    #[schema(example = "go-app")]
    pub service: String,
}

impl HealthResponse {
    pub fn healthy(service: impl Into<String>) -> Self {
        Self {
            status: HealthState::Healthy,
            service: service.into(),
        }
    }
}
