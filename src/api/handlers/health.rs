//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthResponse, HealthStatus, StoreHealth};
use crate::state::AppState;

/// Reports whether this service can reach its store.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: The store answers PING
/// - **503 Service Unavailable**: The store is unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "unshorten",
///   "version": "0.1.0",
///   "store": { "reachable": true, "message": "store answered PING" }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store = StoreHealth::from_ping(state.link_service.health_check().await);
    let reachable = store.reachable;

    let response = HealthResponse {
        status: if reachable {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        },
        service: state.service_name,
        version: env!("CARGO_PKG_VERSION"),
        store,
    };

    if reachable {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
