//! Store trait for short link persistence.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while talking to the link store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid store URI: {0}")]
    InvalidUri(String),
    #[error("store connection error: {0}")]
    Connection(String),
    #[error("store command error: {0}")]
    Command(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value store holding `code → target` mappings with expiry.
///
/// Keys live in a flat namespace: the key is the short code itself and the
/// value is the target URL, unmodified. Every method performs exactly one
/// round trip and never retries.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisLinkStore`] - Redis `SET EX` / `GET`
/// - [`crate::infrastructure::store::MemoryLinkStore`] - In-process map for tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Writes `code → target`, expiring after `ttl`.
    ///
    /// An existing mapping under the same code is overwritten.
    async fn save(&self, code: &str, target: &str, ttl: Duration) -> StoreResult<()>;

    /// Reads the target for `code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the mapping exists and has not expired
    /// - `Ok(None)` if it never existed or has expired
    async fn find(&self, code: &str) -> StoreResult<Option<String>>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
