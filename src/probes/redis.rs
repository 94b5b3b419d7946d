use async_trait::async_trait;
use redis::Client;
use std::time::Duration;
use tracing::info;

use super::{Probe, ProbeError};

const DEPENDENCY: &str = "redis";

/// Reachability probe for the cache store
pub struct RedisProbe {
    client: Option<Client>,
    timeout: Duration,
}

impl RedisProbe {
    pub fn new(redis_url: Option<&str>, timeout: Duration) -> Result<Self, ProbeError> {
        let client = match redis_url {
            Some(url) => {
                let client = Client::open(url)?;
                info!("Redis probe configured");
                Some(client)
            }
            None => None,
        };
        Ok(Self { client, timeout })
    }

    pub fn disabled(timeout: Duration) -> Self {
        Self { client: None, timeout }
    }

    async fn ping(client: &Client) -> Result<String, ProbeError> {
        let mut conn = client.get_multiplexed_async_connection().await?;
        let reply = redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await?;
        Ok(reply)
    }
}

#[async_trait]
impl Probe for RedisProbe {
    fn name(&self) -> &'static str {
        DEPENDENCY
    }

    async fn try_connect(&self) -> Result<bool, ProbeError> {
        let client = self
            .client
            .as_ref()
            .ok_or(ProbeError::NotConfigured(DEPENDENCY))?;

        let reply = tokio::time::timeout(self.timeout, Self::ping(client))
            .await
            .map_err(|_| ProbeError::Timeout {
                dependency: DEPENDENCY,
                timeout: self.timeout,
            })??;

        if reply == "PONG" {
            Ok(true)
        } else {
            Err(ProbeError::UnexpectedReply {
                dependency: DEPENDENCY,
                reply,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_url_is_not_configured() {
        let probe = RedisProbe::new(None, Duration::from_millis(100)).unwrap();
        let err = probe.try_connect().await.unwrap_err();
        assert!(matches!(err, ProbeError::NotConfigured("redis")));
    }

    #[test]
    fn malformed_url_is_rejected_up_front() {
        assert!(RedisProbe::new(Some("http://not-redis"), Duration::from_millis(100)).is_err());
    }

    #[tokio::test]
    async fn unreachable_server_is_an_error() {
        let probe = RedisProbe::new(Some("redis://127.0.0.1:1/"), Duration::from_millis(500)).unwrap();
        assert!(probe.try_connect().await.is_err());
    }
}
