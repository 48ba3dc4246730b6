//! In-process link store with per-key expiry.

use crate::domain::repositories::{LinkStore, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

/// A link store kept in process memory.
///
/// Expiry is measured on the tokio clock, so tests can drive it with
/// `tokio::time::pause` and `tokio::time::advance`. Expired entries are
/// dropped lazily on read.
///
/// The store also counts operations, which lets tests assert that a request
/// never reached the store.
///
/// # Use Cases
///
/// - Integration tests of both services without a Redis server
/// - Local experiments where persistence does not matter
#[derive(Default)]
pub struct MemoryLinkStore {
    entries: RwLock<HashMap<String, Entry>>,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

struct Entry {
    target: String,
    expires_at: Instant,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `find` calls served so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of `save` calls served so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of keys that have not yet expired.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|entry| entry.expires_at > now)
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn save(&self, code: &str, target: &str, ttl: Duration) -> StoreResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);

        let entry = Entry {
            target: target.to_string(),
            expires_at: Instant::now() + ttl,
        };
        self.entries.write().await.insert(code.to_string(), entry);

        debug!("Memory SET: {} -> {} (TTL: {:?})", code, target, ttl);
        Ok(())
    }

    async fn find(&self, code: &str) -> StoreResult<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        let mut entries = self.entries.write().await;
        match entries.get(code) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.target.clone())),
            Some(_) => {
                entries.remove(code);
                debug!("Memory GET: {} expired", code);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
