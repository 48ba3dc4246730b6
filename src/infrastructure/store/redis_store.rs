//! Redis-backed link store.

use crate::domain::repositories::{LinkStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tracing::{debug, info};

/// Redis link store.
///
/// Uses connection pooling via `ConnectionManager`, which is cheap to clone
/// and reconnects on its own. Unlike a cache, failures are propagated so
/// callers can surface them as server errors.
pub struct RedisLinkStore {
    client: ConnectionManager,
}

impl RedisLinkStore {
    /// Parses `redis_uri`, connects, and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidUri`] if the URI cannot be parsed, and
    /// [`StoreError::Connection`] if the connection or the PING fails.
    pub async fn connect(redis_uri: &str) -> StoreResult<Self> {
        let client = Client::open(redis_uri).map_err(|e| StoreError::InvalidUri(e.to_string()))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("failed to connect to Redis: {}", e)))?;

        let store = Self { client: manager };
        store
            .ping()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(store)
    }
}

#[async_trait]
impl LinkStore for RedisLinkStore {
    async fn save(&self, code: &str, target: &str, ttl: Duration) -> StoreResult<()> {
        let mut conn = self.client.clone();
        let ttl_seconds = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(code, target, ttl_seconds)
            .await
            .map_err(|e| StoreError::Command(e.to_string()))?;

        debug!("SET {} -> {} (TTL: {}s)", code, target, ttl_seconds);
        Ok(())
    }

    async fn find(&self, code: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();

        let target = conn
            .get::<_, Option<String>>(code)
            .await
            .map_err(|e| StoreError::Command(e.to_string()))?;

        match &target {
            Some(url) => debug!("GET {} -> {}", code, url),
            None => debug!("GET {} -> (nil)", code),
        }

        Ok(target)
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.client.clone();
        conn.ping::<()>()
            .await
            .map_err(|e| StoreError::Command(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_malformed_uri() {
        let result = RedisLinkStore::connect("not a redis uri").await;

        assert!(matches!(result, Err(StoreError::InvalidUri(_))));
    }

    #[tokio::test]
    async fn test_connect_fails_when_unreachable() {
        // Nothing listens on port 1; the manager's own retries are bounded.
        let result = tokio::time::timeout(
            Duration::from_secs(60),
            RedisLinkStore::connect("redis://127.0.0.1:1"),
        )
        .await
        .expect("connect should give up");

        assert!(matches!(result, Err(StoreError::Connection(_))));
    }
}
