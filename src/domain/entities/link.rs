//! Short link entity representing a code → URL mapping.

use std::time::Duration;

/// A shortened URL mapping as written to the store.
///
/// Creation time is not tracked; the store expires the mapping once `ttl`
/// has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub code: String,
    pub target: String,
    pub ttl: Duration,
}

impl ShortLink {
    pub fn new(code: String, target: String, ttl: Duration) -> Self {
        Self { code, target, ttl }
    }
}
