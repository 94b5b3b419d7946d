//! Dependency probes consulted by the readiness endpoint.
//!
//! A probe answers a single question: can this dependency be reached right
//! now? Failures are reported through [`ProbeError`]; callers that only care
//! about reachability fold them into `false`.

pub mod postgres;
pub mod redis;

use async_trait::async_trait;
use std::time::Duration;

pub use self::postgres::PgProbe;
pub use self::redis::RedisProbe;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("Postgres error: {0}")]
    Postgres(#[from] sqlx::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] ::redis::RedisError),

    #[error("{dependency} did not answer within {timeout:?}")]
    Timeout {
        dependency: &'static str,
        timeout: Duration,
    },

    #[error("unexpected reply from {dependency}: {reply}")]
    UnexpectedReply {
        dependency: &'static str,
        reply: String,
    },
}

/// Connectivity check against one downstream dependency
#[async_trait]
pub trait Probe: Send + Sync {
    /// Dependency name used in logs
    fn name(&self) -> &'static str;

    /// Try to reach the dependency once
    async fn try_connect(&self) -> Result<bool, ProbeError>;
}
