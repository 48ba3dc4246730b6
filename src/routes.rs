//! Top-level routers of the two services.
//!
//! # Middleware
//!
//! - **Tracing** - One access log line per request (path, status, latency)

use crate::api::middleware::tracing;
use crate::api::routes::{shorten_routes, unshorten_routes};
use crate::state::AppState;
use axum::Router;

/// Constructs the shorten service router.
pub fn shorten_router(state: AppState) -> Router {
    shorten_routes().with_state(state).layer(tracing::layer())
}

/// Constructs the unshorten service router.
pub fn unshorten_router(state: AppState) -> Router {
    unshorten_routes().with_state(state).layer(tracing::layer())
}
