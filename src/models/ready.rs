use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate readiness of the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ReadyState {
    #[serde(rename = "ready")]
    Ready,
    #[serde(rename = "not ready")]
    NotReady,
}

/// Connection marker used when every dependency is up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Connection {
    Connected,
}

/// Connectivity of a single dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Connectivity {
    pub connected: bool,
}

/// API response for readiness check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ReadyResponse {
    Ready {
        status: ReadyState,
        database: Connection,
        redis: Connection,
    },
    NotReady {
        status: ReadyState,
        database: Connectivity,
        redis: Connectivity,
    },
}

/// Outcome of probing the dependencies for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessReport {
    pub database: bool,
    pub redis: bool,
}

impl ReadinessReport {
    pub fn is_ready(&self) -> bool {
        self.database && self.redis
    }

    pub fn state(&self) -> ReadyState {
        if self.is_ready() {
            ReadyState::Ready
        } else {
            ReadyState::NotReady
        }
    }
}

impl From<ReadinessReport> for ReadyResponse {
    fn from(report: ReadinessReport) -> Self {
        match report.state() {
            ReadyState::Ready => ReadyResponse::Ready {
                status: ReadyState::Ready,
                database: Connection::Connected,
                redis: Connection::Connected,
            },
            ReadyState::NotReady => ReadyResponse::NotReady {
                status: ReadyState::NotReady,
                database: Connectivity { connected: report.database },
                redis: Connectivity { connected: report.redis },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(database: bool, redis: bool) -> serde_json::Value {
        serde_json::to_value(ReadyResponse::from(ReadinessReport { database, redis })).unwrap()
    }

    #[test]
    fn ready_payload_reports_connected() {
        assert_eq!(
            body(true, true),
            json!({ "status": "ready", "database": "connected", "redis": "connected" })
        );
    }

    #[test]
    fn not_ready_payload_carries_each_flag() {
        assert_eq!(
            body(false, true),
            json!({
                "status": "not ready",
                "database": { "connected": false },
                "redis": { "connected": true }
            })
        );
        assert_eq!(
            body(true, false),
            json!({
                "status": "not ready",
                "database": { "connected": true },
                "redis": { "connected": false }
            })
        );
    }

    #[test]
    fn ready_only_when_both_dependencies_are_up() {
        assert!(ReadinessReport { database: true, redis: true }.is_ready());
        assert!(!ReadinessReport { database: false, redis: true }.is_ready());
        assert!(!ReadinessReport { database: true, redis: false }.is_ready());
        assert_eq!(
            ReadinessReport { database: false, redis: false }.state(),
            ReadyState::NotReady
        );
    }
}
