//! DTOs for health check endpoint.

use serde::Serialize;

/// Overall service state reported by `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Health check response for one service and its store.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub service: &'static str,
    pub version: &'static str,
    pub store: StoreHealth,
}

/// Result of the store PING.
#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub reachable: bool,
    pub message: &'static str,
}

impl StoreHealth {
    pub fn from_ping(reachable: bool) -> Self {
        let message = if reachable {
            "store answered PING"
        } else {
            "store PING failed"
        };
        Self { reachable, message }
    }
}
